//! Integration tests for arp-subnet-report
//!
//! These tests drive the whole pipeline through the session-provider seam
//! with a scripted device on the other side.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use arp_subnet_report::config::{Credential, Settings};
use arp_subnet_report::device::{detect, mikrotik, ubiquiti};
use arp_subnet_report::error::{ConnectError, Error};
use arp_subnet_report::processing::MONITORED_HOST;
use arp_subnet_report::ssh::{CommandOutput, SessionProvider, ShellSession};
use arp_subnet_report::{format_whatsapp_message, run_extraction, DeviceType};

/// Everything the scripted device observed during a run.
#[derive(Default)]
struct DeviceLog {
    attempted_users: Vec<String>,
    executed: Vec<String>,
    close_count: usize,
}

/// A device that accepts one username/password pair and answers commands
/// from a canned table.
struct ScriptedDevice {
    accept_username: String,
    accept_password: String,
    responses: HashMap<String, String>,
    log: Arc<Mutex<DeviceLog>>,
}

impl ScriptedDevice {
    fn new(username: &str, password: &str) -> ScriptedDevice {
        ScriptedDevice {
            accept_username: username.to_string(),
            accept_password: password.to_string(),
            responses: HashMap::new(),
            log: Arc::new(Mutex::new(DeviceLog::default())),
        }
    }

    fn with_stdout(mut self, command: &str, stdout: &str) -> Self {
        self.responses.insert(command.to_string(), stdout.to_string());
        self
    }

    fn log(&self) -> Arc<Mutex<DeviceLog>> {
        Arc::clone(&self.log)
    }
}

struct ScriptedShell {
    responses: HashMap<String, String>,
    log: Arc<Mutex<DeviceLog>>,
}

#[async_trait]
impl SessionProvider for ScriptedDevice {
    async fn open(
        &self,
        host: &str,
        _port: u16,
        username: &str,
        password: &str,
        _timeout: Duration,
    ) -> Result<Box<dyn ShellSession>, ConnectError> {
        self.log
            .lock()
            .unwrap()
            .attempted_users
            .push(username.to_string());

        if username == self.accept_username && password == self.accept_password {
            Ok(Box::new(ScriptedShell {
                responses: self.responses.clone(),
                log: Arc::clone(&self.log),
            }))
        } else {
            Err(ConnectError::Auth {
                host: host.to_string(),
                username: username.to_string(),
            })
        }
    }
}

#[async_trait]
impl ShellSession for ScriptedShell {
    async fn exec(&mut self, command: &str, _timeout: Duration) -> Result<CommandOutput, Error> {
        self.log.lock().unwrap().executed.push(command.to_string());
        Ok(CommandOutput {
            stdout: self.responses.get(command).cloned().unwrap_or_default(),
            stderr: String::new(),
        })
    }

    async fn close(&mut self) {
        self.log.lock().unwrap().close_count += 1;
    }
}

fn settings(mikrotik: &[(&str, &str)], ubiquiti: &[(&str, &str)]) -> Settings {
    Settings {
        mikrotik_credentials: mikrotik
            .iter()
            .map(|(u, p)| Credential::new(u, p.to_string()))
            .collect(),
        ubiquiti_credentials: ubiquiti
            .iter()
            .map(|(u, p)| Credential::new(u, p.to_string()))
            .collect(),
        whatsapp_endpoint: "http://127.0.0.1:8050/api/send-message".to_string(),
        whatsapp_target: None,
    }
}

#[tokio::test]
async fn test_auto_mode_falls_back_to_ubiquiti_extraction() {
    // Probes are inconclusive, the RouterOS listing is empty, the neighbor
    // table has one resolved entry - the report must say ubiquiti.
    let device =
        ScriptedDevice::new("admin", "secreto").with_stdout(ubiquiti::NEIGHBOR_COMMAND, "192.168.1.50\n");
    let log = device.log();

    let report = run_extraction(
        &device,
        "192.168.1.1",
        None,
        &settings(&[("admin", "secreto")], &[("ubnt", "ubnt")]),
    )
    .await;

    assert!(report.success);
    assert_eq!(report.device_type, DeviceType::Ubiquiti);
    assert_eq!(report.entries, vec!["192.168.1.50"]);
    assert!(report.summary.is_none());
    assert!(report.alerts.is_empty());

    let log = log.lock().unwrap();
    assert_eq!(
        log.executed,
        vec![
            detect::ROUTEROS_PROBE,
            detect::UNAME_PROBE,
            mikrotik::ARP_COMMAND,
            ubiquiti::NEIGHBOR_COMMAND,
        ]
    );
    assert_eq!(log.close_count, 1, "session must be closed exactly once");
}

#[tokio::test]
async fn test_auto_mode_tries_mikrotik_credentials_first() {
    let device = ScriptedDevice::new("ubnt", "clave-ubnt");
    let log = device.log();

    let report = run_extraction(
        &device,
        "192.168.2.1",
        None,
        &settings(
            &[("admin", "a"), ("agingenieria", "b")],
            &[("ubnt", "clave-ubnt")],
        ),
    )
    .await;

    assert!(report.success);
    let log = log.lock().unwrap();
    assert_eq!(log.attempted_users, vec!["admin", "agingenieria", "ubnt"]);
    assert_eq!(log.close_count, 1);
}

#[tokio::test]
async fn test_exhausted_credentials_yield_a_failure_report() {
    let device = ScriptedDevice::new("nobody", "never");
    let log = device.log();

    let report = run_extraction(
        &device,
        "192.168.3.1",
        Some(DeviceType::Mikrotik),
        &settings(&[("admin", "wrong")], &[]),
    )
    .await;

    assert!(!report.success);
    assert_eq!(report.device_type, DeviceType::Unknown);
    assert!(report
        .error
        .as_deref()
        .unwrap_or_default()
        .contains("192.168.3.1"));

    // The failure still renders a notifiable message
    let message = format_whatsapp_message(&report);
    assert!(message.starts_with("🚨 ERROR"));
    assert!(message.contains("192.168.3.1"));

    // No session ever opened, so none to close
    assert_eq!(log.lock().unwrap().close_count, 0);
}

#[tokio::test]
async fn test_monitored_host_gets_summary_and_alerts() {
    let arp_table: String = (1..=11)
        .map(|i| format!("192.168.26.{i}\r\n"))
        .collect();
    let device = ScriptedDevice::new("admin", "secreto")
        .with_stdout(mikrotik::ARP_COMMAND, &arp_table);

    let report = run_extraction(
        &device,
        MONITORED_HOST,
        Some(DeviceType::Mikrotik),
        &settings(&[("admin", "secreto")], &[]),
    )
    .await;

    assert!(report.success);
    assert_eq!(report.entries.len(), 11);

    let summary = report.summary.as_ref().expect("summary expected above 10 entries");
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].network, "192.168.26.0/24");
    assert_eq!(summary[0].count, 11);

    // 192.168.26.0/24 is satisfied; the other two critical subnets are empty
    assert_eq!(report.alerts.len(), 2);

    let message = format_whatsapp_message(&report);
    assert!(message.starts_with("🚨 ADVERTENCIA DE FALLO EN LA RED! 🚨"));
    assert!(message.contains("❌ 192.168.20.0/24: SIN DISPOSITIVOS"));
    assert!(message.contains("❌ 192.168.30.0/24: SIN DISPOSITIVOS"));
    assert!(message.contains("📋 Tipo: MIKROTIK"));
    assert!(message.contains("🔢 Total: 11 IPs activas"));
    // Truncation contract: 6 addresses listed, the rest collapsed
    assert!(message.contains("... y 5 IPs más"));
}

#[tokio::test]
async fn test_forced_ubiquiti_never_probes() {
    let device = ScriptedDevice::new("ubnt", "clave")
        .with_stdout(ubiquiti::NEIGHBOR_COMMAND, "10.10.0.4\n10.10.0.2\n");
    let log = device.log();

    let report = run_extraction(
        &device,
        "10.10.0.1",
        Some(DeviceType::Ubiquiti),
        &settings(&[], &[("ubnt", "clave")]),
    )
    .await;

    assert!(report.success);
    assert_eq!(report.device_type, DeviceType::Ubiquiti);
    assert_eq!(report.entries, vec!["10.10.0.2", "10.10.0.4"]);

    let log = log.lock().unwrap();
    assert_eq!(log.executed, vec![ubiquiti::NEIGHBOR_COMMAND]);
}
