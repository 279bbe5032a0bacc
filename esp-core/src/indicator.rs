//! Status-Indikator: Gerätezustand → eine RGB LED
//!
//! Wird aus der Hauptschleife gepollt. `update()` blockiert nie und
//! berechnet den Zustand bei jedem Aufruf komplett neu.

use rgb::RGB8;

use crate::logic::{classify_state, indicator_color};
use crate::traits::{Clock, DeviceStatus, SmartLedWriter};
use crate::types::IndicatorState;

/// Status-LED mit exklusivem Besitz des LED-Writers
///
/// # Trait-basierte Abstraktion
/// - `L`: LED Writer (RmtLedWriter oder Mock)
/// - `S`: Commissioning-/Netzwerk-Zustand
/// - `C`: Zeitquelle für die Atem-Animation
pub struct StatusIndicator<L: SmartLedWriter, S: DeviceStatus, C: Clock> {
    led: L,
    status: S,
    clock: C,
    started: bool,
    write_failures: u32,
}

impl<L: SmartLedWriter, S: DeviceStatus, C: Clock> StatusIndicator<L, S, C> {
    pub fn new(led: L, status: S, clock: C) -> Self {
        Self {
            led,
            status,
            clock,
            started: false,
            write_failures: 0,
        }
    }

    /// Einmalige Initialisierung: LED löschen
    ///
    /// Weitere Aufrufe werden ignoriert.
    pub fn begin(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.show(RGB8::default());
    }

    /// Zustand neu klassifizieren und auf die LED schreiben
    ///
    /// Schreibfehler werden nur gezählt (best effort), nie weitergereicht.
    pub fn update(&mut self) -> IndicatorState {
        let state = classify_state(
            self.status.is_commissioned(),
            self.status.is_network_connected(),
        );
        let color = indicator_color(state, self.clock.now_ms());
        self.show(color);
        state
    }

    /// Anzahl fehlgeschlagener LED-Schreibvorgänge seit Start
    pub fn write_failures(&self) -> u32 {
        self.write_failures
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn status_mut(&mut self) -> &mut S {
        &mut self.status
    }

    fn show(&mut self, color: RGB8) {
        if self.led.write(color).and_then(|_| self.led.flush()).is_err() {
            self.write_failures = self.write_failures.wrapping_add(1);
        }
    }
}
