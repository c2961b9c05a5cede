//! Report rendering.
//!
//! - [`message`] - the WhatsApp text with its fixed truncation contract
//! - [`terminal`] - full, untruncated console output

mod message;
mod terminal;

pub use message::{format_whatsapp_message, MAX_LISTED_ADDRESSES, MAX_SUMMARY_LINES};
pub use terminal::print_report;
