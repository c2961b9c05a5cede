//! Error taxonomy for the extraction and reporting pipeline.

use thiserror::Error;

/// Top-level error type for the crate.
///
/// Extraction-path errors (`Connection`, `Command`) are caught by the
/// orchestrator and converted into a failure report; `Notification` never
/// affects the process exit code.
#[derive(Debug, Error)]
pub enum Error {
    /// The target address is not a valid dotted-quad IPv4 address.
    #[error("invalid IPv4 address: {0}")]
    InvalidInput(String),

    /// No usable credentials were found in the environment.
    #[error("no usable credentials configured for {0}")]
    Config(String),

    /// Every credential in the rotation list was rejected.
    #[error("could not establish an SSH session with {host}")]
    Connection { host: String },

    /// A remote command failed or timed out.
    #[error("remote command failed: {0}")]
    Command(String),

    /// The messaging gateway rejected or never received the report.
    #[error("notification delivery failed: {0}")]
    Notification(String),
}

/// Failure modes of the session-provider seam.
///
/// Authentication rejections keep the credential rotation going; transport
/// failures are logged with their reason and rotation also continues.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("authentication rejected for {username}@{host}")]
    Auth { host: String, username: String },

    #[error("transport failure reaching {host}: {reason}")]
    Transport { host: String, reason: String },
}
