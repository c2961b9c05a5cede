//! Ordered credential rotation.

use std::time::Duration;

use colored::Colorize;

use super::session::{SessionProvider, ShellSession};
use crate::config::{self, Credential};
use crate::error::{ConnectError, Error};

/// Try `credentials` against `host` strictly in list order.
///
/// Credentials with an empty password are skipped. The first credential
/// that authenticates wins and no further ones are attempted; failures are
/// logged with their reason and rotation continues. An exhausted list
/// yields [`Error::Connection`].
pub async fn establish_connection(
    provider: &dyn SessionProvider,
    host: &str,
    credentials: &[Credential],
) -> Result<Box<dyn ShellSession>, Error> {
    log::info!("connecting to {host} ...");
    let timeout = Duration::from_secs(config::CONNECT_TIMEOUT_SECS);
    let total = credentials.len();

    for (i, credential) in credentials.iter().enumerate() {
        if credential.password.is_empty() {
            continue;
        }

        log::info!(
            "attempt {attempt}/{total}: {username}",
            attempt = i + 1,
            username = credential.username
        );

        match provider
            .open(
                host,
                config::SSH_PORT,
                &credential.username,
                &credential.password,
                timeout,
            )
            .await
        {
            Ok(session) => {
                log::info!(
                    "{ok} as {username}",
                    ok = "authenticated".green(),
                    username = credential.username
                );
                return Ok(session);
            }
            Err(ConnectError::Auth { .. }) => {
                log::warn!(
                    "{failed} for {username}",
                    failed = "authentication failed".red(),
                    username = credential.username
                );
            }
            Err(ConnectError::Transport { reason, .. }) => {
                log::warn!(
                    "connection error with {username}: {reason}",
                    username = credential.username
                );
            }
        }
    }

    Err(Error::Connection {
        host: host.to_string(),
    })
}
