//! WhatsApp message formatting.

use std::fmt::Write;

use crate::models::Report;
use crate::processing::summary_lines;

/// At most this many addresses are listed; the rest collapse to one line.
pub const MAX_LISTED_ADDRESSES: usize = 6;
/// At most this many subnet-summary lines; the rest collapse to one line.
pub const MAX_SUMMARY_LINES: usize = 5;

/// Render the report as the WhatsApp message body.
///
/// Failed runs get a short error card; successful runs get the alert
/// banner (when any), the header block, and the truncated address and
/// summary sections.
pub fn format_whatsapp_message(report: &Report) -> String {
    if !report.success {
        return format!(
            "🚨 ERROR - Extracción ARP\n\
             🎯 Dispositivo: {host}\n\
             ⏰ Fecha: {timestamp}\n\
             ❌ Error: {error}",
            host = report.target_host,
            timestamp = report.timestamp,
            error = report.error.as_deref().unwrap_or("Error desconocido"),
        );
    }

    let mut message = String::new();

    if !report.alerts.is_empty() {
        message.push_str("🚨 ADVERTENCIA DE FALLO EN LA RED! 🚨\n");
        for alert in &report.alerts {
            let _ = writeln!(message, "{alert}");
        }
        message.push('\n');
    }

    let _ = write!(
        message,
        "📡 REPORTE ARP ACTIVAS\n\
         🎯 Dispositivo: {host}\n\
         📋 Tipo: {device_type}\n\
         ⏰ Fecha: {timestamp}\n\
         🔢 Total: {total} IPs activas\n",
        host = report.target_host,
        device_type = report.device_type.as_str().to_uppercase(),
        timestamp = report.timestamp,
        total = report.entries.len(),
    );

    if report.entries.is_empty() {
        message.push_str("\n❓ No se encontraron direcciones ARP activas");
        return message;
    }

    message.push_str("\n📋 Direcciones IP:");
    for (i, ip) in report.entries.iter().take(MAX_LISTED_ADDRESSES).enumerate() {
        let _ = write!(message, "\n  {n:2}. {ip}", n = i + 1);
    }
    if report.entries.len() > MAX_LISTED_ADDRESSES {
        let _ = write!(
            message,
            "\n  ... y {} IPs más",
            report.entries.len() - MAX_LISTED_ADDRESSES
        );
    }

    if let Some(summary) = &report.summary {
        message.push_str("\n\n📊 Resumen por subred:");
        for line in summary_lines(summary).iter().take(MAX_SUMMARY_LINES) {
            let _ = write!(message, "\n  • {line}");
        }
        if summary.len() > MAX_SUMMARY_LINES {
            let _ = write!(
                message,
                "\n  ... y {} subredes más",
                summary.len() - MAX_SUMMARY_LINES
            );
        }
    }

    message
}
