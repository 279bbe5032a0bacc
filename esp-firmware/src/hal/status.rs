// Geräte-Zustand und Zeitquelle für die Status-LED
//
// Verbindet die Traits aus esp-core mit embassy-net, embassy-time
// und dem Commissioning-Flag.

use embassy_net::Stack;
use embassy_time::Instant;
use esp_core::{Clock, DeviceStatus};

use crate::commissioning;

/// Commissioning- und Netzwerk-Zustand der Firmware
///
/// Netzwerk gilt als verbunden, sobald der Link steht UND per DHCP eine
/// IPv4-Adresse vergeben wurde.
pub struct FirmwareStatus {
    stack: Stack<'static>,
}

impl FirmwareStatus {
    pub fn new(stack: Stack<'static>) -> Self {
        Self { stack }
    }
}

impl DeviceStatus for FirmwareStatus {
    fn is_commissioned(&self) -> bool {
        commissioning::is_commissioned()
    }

    fn is_network_connected(&self) -> bool {
        self.stack.is_link_up() && self.stack.config_v4().is_some()
    }
}

/// Millisekunden seit Boot aus embassy-time
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
