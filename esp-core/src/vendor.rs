//! Hersteller-Cluster (0xFC01) der Wärmepumpe
//!
//! Die Home-Assistant-Integration schreibt Betriebszustand und Modus über
//! diesen Cluster und liest die Kompressor-Frequenzen.

use crate::types::{AttributeEvent, AttributeId, ClusterId, EndpointId};

pub const VENDOR_CLUSTER_ID: ClusterId = 0xFC01;

pub const STATE_ATTRIBUTE_ID: AttributeId = 0x0001;
pub const MODE_ATTRIBUTE_ID: AttributeId = 0x0002;
/// Aktuelle Kompressor-Frequenz in Hz (nur lesbar)
pub const COMPRESSOR_HZ_ATTRIBUTE_ID: AttributeId = 0x0003;
/// Ziel-Frequenz des Kompressors in Hz (nur lesbar)
pub const COMPRESSOR_TARGET_ATTRIBUTE_ID: AttributeId = 0x0004;

/// Fehler beim Dekodieren eines Hersteller-Attributs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Wert ist keiner Enum-Variante zugeordnet
    UnknownValue(i16),
    /// Attribut ist nur lesbar
    ReadOnly(AttributeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatingState {
    Off = 0,
    Heat = 1,
    Cool = 2,
}

impl OperatingState {
    pub fn name(self) -> &'static str {
        match self {
            OperatingState::Off => "OFF",
            OperatingState::Heat => "HEAT",
            OperatingState::Cool => "COOL",
        }
    }
}

impl TryFrom<i16> for OperatingState {
    type Error = DecodeError;

    fn try_from(raw: i16) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Off),
            1 => Ok(Self::Heat),
            2 => Ok(Self::Cool),
            other => Err(DecodeError::UnknownValue(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatingMode {
    Eco = 0,
    Quiet = 1,
    Turbo = 2,
}

impl OperatingMode {
    pub fn name(self) -> &'static str {
        match self {
            OperatingMode::Eco => "ECO",
            OperatingMode::Quiet => "QUIET",
            OperatingMode::Turbo => "TURBO",
        }
    }
}

impl TryFrom<i16> for OperatingMode {
    type Error = DecodeError;

    fn try_from(raw: i16) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Eco),
            1 => Ok(Self::Quiet),
            2 => Ok(Self::Turbo),
            other => Err(DecodeError::UnknownValue(other)),
        }
    }
}

/// Dekodierte Schreibanforderung an den Hersteller-Cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VendorUpdate {
    State(OperatingState),
    Mode(OperatingMode),
}

/// Aktueller Betriebszustand und Modus der Wärmepumpe
///
/// Wird aus dekodierten Schreibzugriffen fortgeschrieben und beim Lesen von
/// 0x0001/0x0002 an die Home-Assistant-Integration zurückgemeldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VendorState {
    pub state: OperatingState,
    pub mode: OperatingMode,
}

impl Default for VendorState {
    fn default() -> Self {
        Self {
            state: OperatingState::Off,
            mode: OperatingMode::Eco,
        }
    }
}

impl VendorState {
    /// Übernimmt eine dekodierte Änderung, `true` wenn sich etwas geändert hat
    pub fn apply(&mut self, update: VendorUpdate) -> bool {
        let previous = *self;
        match update {
            VendorUpdate::State(state) => self.state = state,
            VendorUpdate::Mode(mode) => self.mode = mode,
        }
        *self != previous
    }

    /// Liest ein Attribut im Wire-Format, `None` für unbekannte IDs
    pub fn read_attribute(&self, attribute_id: AttributeId) -> Option<i16> {
        match attribute_id {
            STATE_ATTRIBUTE_ID => Some(self.state as i16),
            MODE_ATTRIBUTE_ID => Some(self.mode as i16),
            _ => None,
        }
    }
}

/// Dekodiert eine Attribut-Änderung des Hersteller-Clusters
///
/// - `Ok(None)`: anderer Endpoint, anderer Cluster oder unbekanntes Attribut
/// - `Err(..)`: unbekannter Wert oder Schreibversuch auf ein Messwert-Attribut
pub fn decode_vendor_event(
    endpoint_id: EndpointId,
    event: &AttributeEvent,
) -> Result<Option<VendorUpdate>, DecodeError> {
    if event.endpoint_id != endpoint_id || event.cluster_id != VENDOR_CLUSTER_ID {
        return Ok(None);
    }

    match event.attribute_id {
        STATE_ATTRIBUTE_ID => OperatingState::try_from(event.raw_value)
            .map(VendorUpdate::State)
            .map(Some),
        MODE_ATTRIBUTE_ID => OperatingMode::try_from(event.raw_value)
            .map(VendorUpdate::Mode)
            .map(Some),
        id @ (COMPRESSOR_HZ_ATTRIBUTE_ID | COMPRESSOR_TARGET_ATTRIBUTE_ID) => {
            Err(DecodeError::ReadOnly(id))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_try_from() {
        assert_eq!(OperatingState::try_from(1), Ok(OperatingState::Heat));
        assert_eq!(OperatingState::try_from(3), Err(DecodeError::UnknownValue(3)));
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(OperatingMode::Eco.name(), "ECO");
        assert_eq!(OperatingMode::Quiet.name(), "QUIET");
        assert_eq!(OperatingMode::Turbo.name(), "TURBO");
    }

    #[test]
    fn test_decode_mode_write() {
        let event = AttributeEvent::new(1, VENDOR_CLUSTER_ID, MODE_ATTRIBUTE_ID, 2);
        assert_eq!(
            decode_vendor_event(1, &event),
            Ok(Some(VendorUpdate::Mode(OperatingMode::Turbo)))
        );
    }

    #[test]
    fn test_decode_ignores_foreign_endpoint() {
        let event = AttributeEvent::new(2, VENDOR_CLUSTER_ID, STATE_ATTRIBUTE_ID, 1);
        assert_eq!(decode_vendor_event(1, &event), Ok(None));
    }

    #[test]
    fn test_vendor_state_apply() {
        let mut state = VendorState::default();
        assert!(state.apply(VendorUpdate::State(OperatingState::Heat)));
        assert!(!state.apply(VendorUpdate::State(OperatingState::Heat)));
        assert!(state.apply(VendorUpdate::Mode(OperatingMode::Quiet)));

        assert_eq!(state.read_attribute(STATE_ATTRIBUTE_ID), Some(1));
        assert_eq!(state.read_attribute(MODE_ATTRIBUTE_ID), Some(1));
        assert_eq!(state.read_attribute(COMPRESSOR_HZ_ATTRIBUTE_ID), None);
    }
}
