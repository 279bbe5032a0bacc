//! Core Types für Matter-Attribute und LED-Status
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Vom Matter-Stack vergebene Endpoint-ID
pub type EndpointId = u16;

/// Matter Cluster-ID
pub type ClusterId = u32;

/// Matter Attribut-ID innerhalb eines Clusters
pub type AttributeId = u32;

/// Attribut-Änderung vom Matter-Stack
///
/// Wird von der Stack-Anbindung in den Attribut-Channel geschrieben
/// und vom Attribut-Task an die Endpoints verteilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeEvent {
    pub endpoint_id: EndpointId,
    pub cluster_id: ClusterId,
    pub attribute_id: AttributeId,
    /// Wire-Wert (Fixed-Point, Skalierung 100 bei Temperaturen)
    pub raw_value: i16,
}

impl AttributeEvent {
    pub const fn new(
        endpoint_id: EndpointId,
        cluster_id: ClusterId,
        attribute_id: AttributeId,
        raw_value: i16,
    ) -> Self {
        Self {
            endpoint_id,
            cluster_id,
            attribute_id,
            raw_value,
        }
    }
}

/// Sichtbarer Gerätezustand der Status-LED
///
/// Priorität: erste passende Klassifikation gewinnt (siehe `classify_state`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorState {
    /// Nicht commissioned → weißes "Atmen"
    Uncommissioned,
    /// Commissioned, aber kein Netzwerk → Amber
    Offline,
    /// Commissioned und verbunden → Grün
    Online,
}

impl IndicatorState {
    pub fn name(self) -> &'static str {
        match self {
            IndicatorState::Uncommissioned => "Uncommissioned",
            IndicatorState::Offline => "Offline",
            IndicatorState::Online => "Online",
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for AttributeEvent {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "AttributeEvent {{ endpoint: {}, cluster: {=u32:#x}, attribute: {=u32:#x}, raw: {} }}",
            self.endpoint_id,
            self.cluster_id,
            self.attribute_id,
            self.raw_value
        )
    }
}
