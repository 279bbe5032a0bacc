//! Pure Business Logic Functions
//!
//! Zustands-Klassifikation und Farben der Status-LED, ohne
//! Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::IndicatorState;

/// Neutrales Weiß für das "Atmen" im nicht-commissioned Zustand
pub const COLOR_NEUTRAL: RGB8 = RGB8 {
    r: 150,
    g: 150,
    b: 150,
};

/// Amber/Orange: commissioned, aber Netzwerk getrennt
///
/// Deutlich rot-lastig, damit es auch bei Rot-Grün-Schwäche nicht mit
/// dem Grün verwechselt wird.
pub const COLOR_WARNING: RGB8 = RGB8 { r: 180, g: 50, b: 0 };

/// Reines Grün: commissioned und verbunden (ohne Gelbstich)
pub const COLOR_HEALTHY: RGB8 = RGB8 { r: 0, g: 40, b: 0 };

/// Sockel pro Kanal, damit die LED im Tal der Animation nie ganz aus ist
pub const BREATHE_FLOOR: u8 = 10;

/// Zeitskala der Sinus-Hüllkurve in ms (Periode = 2π · 400 ≈ 2513 ms)
pub const BREATHE_TIME_SCALE_MS: f64 = 400.0;

/// Klassifiziert den Gerätezustand (erste passende Regel gewinnt)
///
/// Ohne Commissioning spielt die Netzwerk-Verbindung keine Rolle.
///
/// # Beispiele
///
/// ```
/// # use esp_core::{IndicatorState, classify_state};
/// assert_eq!(classify_state(false, true), IndicatorState::Uncommissioned);
/// assert_eq!(classify_state(true, false), IndicatorState::Offline);
/// assert_eq!(classify_state(true, true), IndicatorState::Online);
/// ```
pub fn classify_state(commissioned: bool, network_connected: bool) -> IndicatorState {
    if !commissioned {
        IndicatorState::Uncommissioned
    } else if !network_connected {
        IndicatorState::Offline
    } else {
        IndicatorState::Online
    }
}

/// Helligkeit der Atem-Animation im Bereich 0.0 ..= 1.0
///
/// `(sin(t / 400) + 1) / 2`, vollständig aus der Zeit seit Boot berechenbar.
pub fn breathe_brightness(elapsed_ms: u64) -> f32 {
    let phase = elapsed_ms as f64 / BREATHE_TIME_SCALE_MS;
    ((libm::sin(phase) + 1.0) / 2.0) as f32
}

/// Skaliert die Zielfarbe mit der Atem-Helligkeit und addiert den Sockel
///
/// Jeder Kanal liegt in `[BREATHE_FLOOR, BREATHE_FLOOR + kanal]`.
pub fn breathe_color(target: RGB8, elapsed_ms: u64) -> RGB8 {
    let brightness = breathe_brightness(elapsed_ms);
    let scale = |channel: u8| ((brightness * f32::from(channel)) as u8).saturating_add(BREATHE_FLOOR);

    RGB8 {
        r: scale(target.r),
        g: scale(target.g),
        b: scale(target.b),
    }
}

/// Farbe der Status-LED für einen Zustand zum Zeitpunkt `elapsed_ms`
pub fn indicator_color(state: IndicatorState, elapsed_ms: u64) -> RGB8 {
    match state {
        IndicatorState::Uncommissioned => breathe_color(COLOR_NEUTRAL, elapsed_ms),
        IndicatorState::Offline => COLOR_WARNING,
        IndicatorState::Online => COLOR_HEALTHY,
    }
}
