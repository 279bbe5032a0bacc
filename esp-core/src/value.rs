//! Umrechnung Wire-Wert → Anwendungswert
//!
//! Matter überträgt Temperaturen als vorzeichenbehaftete Fixed-Point-Zahl
//! mit Skalierung 100 (`2200` ⇔ `22.0`). Die Auswahl der Umrechnung
//! (Gleitkomma vs. Ganzzahl) passiert zur Compile-Zeit über die Trait-Impls.

/// Implizite Skalierung des Wire-Formats
pub const WIRE_SCALE: i16 = 100;

/// Numerischer Typ, den ein `NumericEndpoint` an die Anwendung liefert
///
/// - Gleitkomma (`f32`, `f64`): exakte Division `wire / 100.0`
/// - Ganzzahl (`i16`, `i32`, `i64`): `floor(wire / 100)`, auch für negative Werte
///
/// # Beispiele
///
/// ```
/// # use esp_core::SetpointValue;
/// assert_eq!(f32::from_wire(2250), 22.5);
/// assert_eq!(i32::from_wire(2250), 22);
/// assert_eq!(i32::from_wire(-150), -2);
/// ```
pub trait SetpointValue: Copy {
    fn from_wire(raw: i16) -> Self;
}

macro_rules! impl_float_setpoint {
    ($($t:ty),*) => {
        $(
            impl SetpointValue for $t {
                fn from_wire(raw: i16) -> Self {
                    <$t>::from(raw) / <$t>::from(WIRE_SCALE)
                }
            }
        )*
    };
}

macro_rules! impl_integral_setpoint {
    ($($t:ty),*) => {
        $(
            impl SetpointValue for $t {
                fn from_wire(raw: i16) -> Self {
                    // div_euclid mit positivem Divisor = Floor-Division
                    <$t>::from(raw).div_euclid(<$t>::from(WIRE_SCALE))
                }
            }
        )*
    };
}

impl_float_setpoint!(f32, f64);
impl_integral_setpoint!(i16, i32, i64);
