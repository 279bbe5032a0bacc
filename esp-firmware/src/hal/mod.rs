// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Traits aus esp-core für die
// ESP32-C6 Hardware (RMT, embassy-net, embassy-time).

pub mod led_writer;
pub mod status;

pub use led_writer::RmtLedWriter;
pub use status::{EmbassyClock, FirmwareStatus};
