use arp_subnet_report::{
    format_whatsapp_message, is_valid_ipv4, notify, print_report, Cli, Settings,
    SshSessionProvider,
};
use clap::Parser;

#[tokio::main]
async fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    if !is_valid_ipv4(&cli.ip) {
        log::error!("invalid IPv4 address: {}", cli.ip);
        std::process::exit(1);
    }

    let settings = Settings::from_env();
    let report = arp_subnet_report::run_extraction(
        &SshSessionProvider,
        &cli.ip,
        cli.device_type.requested(),
        &settings,
    )
    .await;

    print_report(&report);

    if cli.no_whatsapp {
        log::info!("WhatsApp notification suppressed (--no-whatsapp)");
    } else {
        let message = format_whatsapp_message(&report);
        match cli.whatsapp_target.or(settings.whatsapp_target) {
            Some(target) => {
                match notify::send_message(&settings.whatsapp_endpoint, &target, &message).await {
                    Ok(()) => log::info!("WhatsApp message delivered to {target}"),
                    // Delivery problems never change the exit code
                    Err(e) => log::error!("{e}"),
                }
            }
            None => log::warn!(
                "no WhatsApp recipient configured (WHATSAPP_TARGET_NUMBER); skipping notification"
            ),
        }
    }

    std::process::exit(if report.success { 0 } else { 1 });
}
