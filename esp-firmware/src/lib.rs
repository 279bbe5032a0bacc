// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Heap für den Setpoint-Callback (Box<dyn FnMut>)
extern crate alloc;

// Module
pub mod commissioning;
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{AttributeEvent, VendorState};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;

use crate::config::ATTRIBUTE_QUEUE_DEPTH;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// CriticalSectionRawMutex statt NoopRawMutex: die Matter-Stack-Anbindung
// darf Events aus einem anderen Kontext (Interrupt, zweiter Executor) senden.

/// Channel für Attribut-Änderungen (Matter-Stack → Attribut-Task)
pub type AttributeEventChannel =
    Channel<CriticalSectionRawMutex, AttributeEvent, ATTRIBUTE_QUEUE_DEPTH>;

/// Sender für Attribut-Änderungen (Matter-Stack-Anbindung)
pub type AttributeEventSender =
    Sender<'static, CriticalSectionRawMutex, AttributeEvent, ATTRIBUTE_QUEUE_DEPTH>;

/// Receiver für Attribut-Änderungen (Attribut-Task)
pub type AttributeEventReceiver =
    Receiver<'static, CriticalSectionRawMutex, AttributeEvent, ATTRIBUTE_QUEUE_DEPTH>;

/// Zuletzt übernommene Zieltemperatur in °C (Attribut-Task → Anwendung)
pub type SetpointSignal = Signal<CriticalSectionRawMutex, f32>;

/// Zuletzt übernommener Betriebszustand/Modus (Attribut-Task → Anwendung)
pub type VendorSignal = Signal<CriticalSectionRawMutex, VendorState>;

// ============================================================================
// Globale Kanäle
// ============================================================================

/// Eingang für alle Attribut-Änderungen des Matter-Stacks
pub static ATTRIBUTE_EVENTS: AttributeEventChannel = Channel::new();

/// Übernommene Zieltemperatur, wird von der Anwendung (main) konsumiert
pub static SETPOINT: SetpointSignal = Signal::new();

/// Betriebszustand und Modus der Wärmepumpe, wird von der Anwendung (main) konsumiert
pub static VENDOR: VendorSignal = Signal::new();

/// Sender-Handle für die Matter-Stack-Anbindung
///
/// Integrationspunkt für den Matter-Stack: dessen Attribut-Write-Callback
/// baut pro Änderung ein `AttributeEvent` und ruft `try_send()` auf diesem
/// Sender auf. Bei vollem Channel wird das Event verworfen statt den
/// Stack-Kontext zu blockieren. Ohne diese Anbindung erreicht kein Event den
/// Attribut-Task (siehe auch `commissioning::set_commissioned`).
pub fn attribute_event_sender() -> AttributeEventSender {
    ATTRIBUTE_EVENTS.sender()
}
