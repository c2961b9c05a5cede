//! Console rendering of a finished run.

use colored::Colorize;

use crate::models::Report;
use crate::processing::summary_lines;

/// Print the full, untruncated results to stdout.
///
/// The WhatsApp message collapses long lists; the console shows everything.
pub fn print_report(report: &Report) {
    if !report.success {
        println!(
            "\n{header} {host}",
            header = "ERROR durante la extracción en".red().bold(),
            host = report.target_host
        );
        if let Some(error) = &report.error {
            println!("   {error}");
        }
        return;
    }

    println!(
        "\n{header} {host}:",
        header = "RESULTADOS PARA".bold(),
        host = report.target_host
    );
    println!("   Tipo de dispositivo: {}", report.device_type);
    println!("   Total de ARP activas: {}", report.entries.len());

    if report.entries.is_empty() {
        println!("   No se encontraron direcciones ARP activas");
        return;
    }

    println!("\nDirecciones IP activas:");
    for (i, ip) in report.entries.iter().enumerate() {
        println!("   {n:3}. {ip}", n = i + 1);
    }

    if let Some(summary) = &report.summary {
        println!("\nResumen por subred:");
        for line in summary_lines(summary) {
            println!("   {line}");
        }
    }

    if !report.alerts.is_empty() {
        println!("\n{}", "Alertas de subredes críticas:".yellow().bold());
        for alert in &report.alerts {
            println!("   {alert}");
        }
    }
}
