//! Grenzen und Raster für den Temperatur-Setpoint

use crate::value::WIRE_SCALE;

/// Erlaubter Bereich und Schrittweite eines Setpoints (in °C)
///
/// Erwartet `min <= max`. Vertauschte Grenzen führen nicht zu einem Panic,
/// `apply` liefert dann aber immer `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetpointLimits {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SetpointLimits {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Begrenzt den Wert auf `[min, max]` und rundet auf das Schritt-Raster ab `min`
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use esp_core::SetpointLimits;
    /// let limits = SetpointLimits::new(5.0, 60.0, 0.5);
    /// assert_eq!(limits.apply(22.3), 22.5);
    /// assert_eq!(limits.apply(80.0), 60.0);
    /// ```
    pub fn apply(&self, value: f32) -> f32 {
        let clamped = self.clamp(value);
        if self.step <= 0.0 {
            return clamped;
        }
        let steps = libm::roundf((clamped - self.min) / self.step);
        self.clamp(self.min + steps * self.step)
    }

    // f32::clamp panict bei min > max oder NaN-Grenzen
    fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Wert in das Fixed-Point Wire-Format umrechnen (gerundet, sättigend)
    pub fn to_wire(value: f32) -> i16 {
        libm::roundf(value * f32::from(WIRE_SCALE)) as i16
    }

    pub fn min_wire(&self) -> i16 {
        Self::to_wire(self.min)
    }

    pub fn max_wire(&self) -> i16 {
        Self::to_wire(self.max)
    }

    pub fn step_wire(&self) -> i16 {
        Self::to_wire(self.step)
    }

    /// Liegt der Wire-Wert im erlaubten Bereich?
    pub fn contains_wire(&self, raw: i16) -> bool {
        (self.min_wire()..=self.max_wire()).contains(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: SetpointLimits = SetpointLimits::new(5.0, 60.0, 0.5);

    #[test]
    fn test_apply_clamps() {
        assert_eq!(LIMITS.apply(-3.0), 5.0);
        assert_eq!(LIMITS.apply(61.0), 60.0);
    }

    #[test]
    fn test_apply_snaps_to_step() {
        assert_eq!(LIMITS.apply(22.2), 22.0);
        assert_eq!(LIMITS.apply(22.26), 22.5);
        assert_eq!(LIMITS.apply(22.0), 22.0);
    }

    #[test]
    fn test_zero_step_only_clamps() {
        let limits = SetpointLimits::new(5.0, 60.0, 0.0);
        assert_eq!(limits.apply(22.37), 22.37);
    }

    #[test]
    fn test_wire_conversion() {
        assert_eq!(SetpointLimits::to_wire(22.0), 2200);
        assert_eq!(LIMITS.min_wire(), 500);
        assert_eq!(LIMITS.max_wire(), 6000);
        assert_eq!(LIMITS.step_wire(), 50);
        assert!(LIMITS.contains_wire(2200));
        assert!(!LIMITS.contains_wire(499));
    }

    #[test]
    fn test_swapped_bounds_do_not_panic() {
        let swapped = SetpointLimits::new(60.0, 5.0, 0.5);
        assert_eq!(swapped.apply(22.0), 5.0);

        let nan_bound = SetpointLimits::new(f32::NAN, 60.0, 0.0);
        assert_eq!(nan_bound.apply(22.0), 22.0);
    }
}
