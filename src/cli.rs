//! Command-line surface.

use clap::{Parser, ValueEnum};

use crate::models::DeviceType;

#[derive(Parser, Debug)]
#[command(name = "arp-subnet-report")]
#[command(about = "Extract active ARP entries from a network device and report them by subnet")]
pub struct Cli {
    /// IPv4 address of the device to poll
    pub ip: String,

    /// Device type (auto-detected by default)
    #[arg(value_enum, default_value_t = DeviceTypeArg::Auto)]
    pub device_type: DeviceTypeArg,

    /// Skip the WhatsApp notification
    #[arg(long)]
    pub no_whatsapp: bool,

    /// Send the report to this number instead of the configured one
    #[arg(long, value_name = "NUMBER")]
    pub whatsapp_target: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeviceTypeArg {
    Auto,
    Mikrotik,
    Ubiquiti,
}

impl DeviceTypeArg {
    /// The caller-forced device type, or `None` for auto-detection.
    pub fn requested(&self) -> Option<DeviceType> {
        match self {
            DeviceTypeArg::Auto => None,
            DeviceTypeArg::Mikrotik => Some(DeviceType::Mikrotik),
            DeviceTypeArg::Ubiquiti => Some(DeviceType::Ubiquiti),
        }
    }
}
