//! Runtime configuration.
//!
//! Credentials and gateway settings are read from the environment once at
//! startup into a [`Settings`] struct that is passed down the pipeline;
//! nothing reads the environment after that.

use crate::models::DeviceType;

/// SSH port used for every connection attempt.
pub const SSH_PORT: u16 = 22;
/// Per-credential connection timeout, seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 20;
/// Timeout for the short device-identity probes, seconds.
pub const PROBE_TIMEOUT_SECS: u64 = 10;
/// Timeout for the ARP listing commands, seconds.
pub const COMMAND_TIMEOUT_SECS: u64 = 30;
/// Timeout for gateway HTTP requests, seconds.
pub const GATEWAY_TIMEOUT_SECS: u64 = 30;

/// Default endpoint of the WhatsApp messaging gateway.
pub const DEFAULT_WHATSAPP_ENDPOINT: &str = "http://45.61.59.204:8050/api/send-message";

/// One username/password pair for the rotation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: &str, password: String) -> Credential {
        Credential {
            username: username.to_string(),
            password,
        }
    }
}

/// Environment-derived settings, assembled once in `main`.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Credentials tried against MikroTik devices, in order.
    pub mikrotik_credentials: Vec<Credential>,
    /// Credentials tried against Ubiquiti devices, in order.
    pub ubiquiti_credentials: Vec<Credential>,
    /// WhatsApp gateway endpoint URL.
    pub whatsapp_endpoint: String,
    /// Default recipient number (None when unset).
    pub whatsapp_target: Option<String>,
}

impl Settings {
    /// Build settings from the process environment.
    ///
    /// Credentials with an empty password are dropped here so the rotation
    /// list only ever holds usable entries.
    pub fn from_env() -> Settings {
        let mut mikrotik_credentials = vec![
            Credential::new("admin", env_or("ADMIN_PASS", "")),
            Credential::new("admin", env_or("ADMIN_PASS2", "")),
            Credential::new("agingenieria", env_or("AGINGENIERIA_PASS", "")),
            Credential::new("agingenieria", env_or("AGINGENIERIA_PASS2", "")),
        ];
        mikrotik_credentials.retain(|c| !c.password.is_empty());

        let ubnt_user = env_or("UBNT_USER", "ubnt");
        let mut ubiquiti_credentials = vec![
            Credential::new(&ubnt_user, env_or("UBNT_PASS", "")),
            Credential::new(&ubnt_user, env_or("UBNT_PASS2", "")),
            Credential::new(&ubnt_user, env_or("UBNT_PASS3", "")),
            Credential::new(&ubnt_user, env_or("UBNT_PASS4", "")),
        ];
        ubiquiti_credentials.retain(|c| !c.password.is_empty());

        Settings {
            mikrotik_credentials,
            ubiquiti_credentials,
            whatsapp_endpoint: env_or("WHATSAPP_API_ENDPOINT", DEFAULT_WHATSAPP_ENDPOINT),
            whatsapp_target: std::env::var("WHATSAPP_TARGET_NUMBER")
                .ok()
                .filter(|t| !t.is_empty()),
        }
    }

    /// Credential rotation list for the requested device type.
    ///
    /// `None` means auto mode: the MikroTik list concatenated before the
    /// Ubiquiti list, so MikroTik credentials are always tried first.
    pub fn credentials_for(&self, device_type: Option<DeviceType>) -> Vec<Credential> {
        match device_type {
            Some(DeviceType::Mikrotik) => self.mikrotik_credentials.clone(),
            Some(DeviceType::Ubiquiti) => self.ubiquiti_credentials.clone(),
            _ => {
                let mut all = self.mikrotik_credentials.clone();
                all.extend(self.ubiquiti_credentials.clone());
                all
            }
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
