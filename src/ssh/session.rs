//! The shell-session seam and its production implementation.
//!
//! The pipeline only ever talks to [`SessionProvider`] and
//! [`ShellSession`]; the russh-backed [`SshSessionProvider`] is the one
//! production implementation, and tests substitute scripted ones.

use std::time::Duration;

use async_ssh2_tokio::client::{AuthMethod, Client, ServerCheckMethod};
use async_trait::async_trait;

use crate::error::{ConnectError, Error};

/// Captured output of one remote command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// An open, authenticated shell connection to one host.
///
/// Owned exclusively by the run that created it; [`ShellSession::close`]
/// must be called exactly once on every exit path.
#[async_trait]
pub trait ShellSession: Send {
    /// Run `command` remotely, failing past `timeout`.
    async fn exec(&mut self, command: &str, timeout: Duration) -> Result<CommandOutput, Error>;

    /// Release the underlying connection. Errors are logged, not returned.
    async fn close(&mut self);
}

/// Opens authenticated sessions; one call per credential attempt.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn open(
        &self,
        host: &str,
        port: u16,
        username: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<Box<dyn ShellSession>, ConnectError>;
}

/// Production provider: password-authenticated SSH via russh.
pub struct SshSessionProvider;

#[async_trait]
impl SessionProvider for SshSessionProvider {
    async fn open(
        &self,
        host: &str,
        port: u16,
        username: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<Box<dyn ShellSession>, ConnectError> {
        let auth = AuthMethod::with_password(password);
        let connect = Client::connect((host, port), username, auth, ServerCheckMethod::NoCheck);

        let client = match tokio::time::timeout(timeout, connect).await {
            Err(_) => {
                return Err(ConnectError::Transport {
                    host: host.to_string(),
                    reason: format!("connect timed out after {}s", timeout.as_secs()),
                })
            }
            Ok(Err(async_ssh2_tokio::Error::PasswordWrong)) => {
                return Err(ConnectError::Auth {
                    host: host.to_string(),
                    username: username.to_string(),
                })
            }
            Ok(Err(e)) => {
                return Err(ConnectError::Transport {
                    host: host.to_string(),
                    reason: e.to_string(),
                })
            }
            Ok(Ok(client)) => client,
        };

        Ok(Box::new(SshShellSession { client }))
    }
}

struct SshShellSession {
    client: Client,
}

#[async_trait]
impl ShellSession for SshShellSession {
    async fn exec(&mut self, command: &str, timeout: Duration) -> Result<CommandOutput, Error> {
        match tokio::time::timeout(timeout, self.client.execute(command)).await {
            Err(_) => Err(Error::Command(format!(
                "'{command}' timed out after {}s",
                timeout.as_secs()
            ))),
            Ok(Err(e)) => Err(Error::Command(e.to_string())),
            Ok(Ok(result)) => Ok(CommandOutput {
                stdout: result.stdout,
                stderr: result.stderr,
            }),
        }
    }

    async fn close(&mut self) {
        if let Err(e) = self.client.disconnect().await {
            log::debug!("error closing SSH session: {e}");
        }
    }
}
