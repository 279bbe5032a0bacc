// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels/Signals
// (Matter-Stack → Attribut-Task → Anwendung) und das Commissioning-Flag.

pub mod attribute;
pub mod button;
pub mod status_led;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use attribute::attribute_task;
pub use button::button_task;
pub use status_led::status_led_task;
pub use wifi::{connection_task, link_monitor_task, net_task};
