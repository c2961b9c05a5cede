//! SSH session handling.
//!
//! This module owns everything that touches the remote shell:
//! - [`session`] - the session-provider seam and its russh-backed
//!   production implementation
//! - [`connect`] - ordered credential rotation

mod connect;
mod session;

// Re-export public types and functions
pub use connect::establish_connection;
pub use session::{CommandOutput, SessionProvider, ShellSession, SshSessionProvider};
