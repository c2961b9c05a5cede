//! Delivery through the WhatsApp messaging gateway.
//!
//! - [`whatsapp`] - single-report delivery used by the extraction run
//! - [`bulk`] - peripheral job pushing a fixed document to every enabled
//!   recipient

pub mod bulk;
mod whatsapp;

pub use bulk::{normalize_phone, send_document_to_recipients, BulkStats, Recipient, RecipientStore};
pub use whatsapp::send_message;
