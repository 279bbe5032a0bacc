//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen zu externen Kollaborateuren
//! (LED-Treiber, Matter-Stack, Netzwerk, Uhr) ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::{AttributeId, ClusterId, EndpointId};

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf eine einzelne RGB LED (WS2812/Neopixel).
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Setzt die Farbe des Pixels (noch nicht sichtbar)
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;

    /// Überträgt die zuletzt geschriebene Farbe an die LED
    fn flush(&mut self) -> Result<(), LedError>;
}

/// Commissioning- und Netzwerk-Zustand des Geräts
///
/// Wird vom Status-Indikator bei jedem Tick abgefragt (Polling, kein Push).
pub trait DeviceStatus {
    /// Ist das Gerät in ein Matter-Fabric aufgenommen?
    fn is_commissioned(&self) -> bool;

    /// Ist die Netzwerk-Verbindung aktiv?
    fn is_network_connected(&self) -> bool;
}

/// Monotone Zeitquelle in Millisekunden seit Boot
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Basis-Verarbeitung von Attribut-Änderungen durch den Matter-Stack
///
/// Wird für jede Attribut-Änderung im System aufgerufen, für alle Endpoints.
/// Der Rückgabewert signalisiert dem Stack, ob der Wert akzeptiert wurde.
pub trait AttributeHandler {
    fn handle_attribute_event(
        &mut self,
        endpoint_id: EndpointId,
        cluster_id: ClusterId,
        attribute_id: AttributeId,
        raw_value: i16,
    ) -> bool;
}
