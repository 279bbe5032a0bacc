//! TemperatureControl Cluster (0x0056)
//!
//! Konstanten des Clusters und eine einfache Basis-Verarbeitung, die den
//! zuletzt geschriebenen Setpoint im Wire-Format hält.

use crate::traits::AttributeHandler;
use crate::types::{AttributeId, ClusterId, EndpointId};

/// Matter Cluster-ID für TemperatureControl
pub const TEMPERATURE_CONTROL_CLUSTER_ID: ClusterId = 0x0056;

/// TemperatureSetpoint (Zieltemperatur in 1/100 °C)
pub const TEMPERATURE_SETPOINT_ATTRIBUTE_ID: AttributeId = 0x0000;
pub const MIN_TEMPERATURE_ATTRIBUTE_ID: AttributeId = 0x0001;
pub const MAX_TEMPERATURE_ATTRIBUTE_ID: AttributeId = 0x0002;
pub const STEP_ATTRIBUTE_ID: AttributeId = 0x0003;

/// Basis-Verarbeitung für den TemperatureControl Cluster eines Endpoints
///
/// Übernimmt Schreibzugriffe auf den eigenen Setpoint nur, wenn der Wert im
/// erlaubten Wire-Bereich liegt, und meldet dem Stack das Ergebnis. Ein
/// abgelehnter Wert lässt den gespeicherten Setpoint unverändert. Alle anderen
/// Attribute (auch anderer Endpoints) werden unverändert akzeptiert.
#[derive(Debug, Clone)]
pub struct TemperatureControlCluster {
    endpoint_id: EndpointId,
    min_raw: i16,
    max_raw: i16,
    step_raw: i16,
    setpoint_raw: i16,
}

impl TemperatureControlCluster {
    /// Erstellt den Cluster mit Startwert und Grenzen (alles im Wire-Format)
    pub fn new(
        endpoint_id: EndpointId,
        setpoint_raw: i16,
        min_raw: i16,
        max_raw: i16,
        step_raw: i16,
    ) -> Self {
        Self {
            endpoint_id,
            min_raw,
            max_raw,
            step_raw,
            setpoint_raw,
        }
    }

    pub fn endpoint_id(&self) -> EndpointId {
        self.endpoint_id
    }

    /// Zuletzt geschriebener Setpoint (Wire-Format)
    pub fn setpoint_raw(&self) -> i16 {
        self.setpoint_raw
    }

    /// Liest ein Attribut des Clusters, `None` für unbekannte IDs
    pub fn read_attribute(&self, attribute_id: AttributeId) -> Option<i16> {
        match attribute_id {
            TEMPERATURE_SETPOINT_ATTRIBUTE_ID => Some(self.setpoint_raw),
            MIN_TEMPERATURE_ATTRIBUTE_ID => Some(self.min_raw),
            MAX_TEMPERATURE_ATTRIBUTE_ID => Some(self.max_raw),
            STEP_ATTRIBUTE_ID => Some(self.step_raw),
            _ => None,
        }
    }

    fn in_range(&self, raw: i16) -> bool {
        (self.min_raw..=self.max_raw).contains(&raw)
    }
}

impl AttributeHandler for TemperatureControlCluster {
    fn handle_attribute_event(
        &mut self,
        endpoint_id: EndpointId,
        cluster_id: ClusterId,
        attribute_id: AttributeId,
        raw_value: i16,
    ) -> bool {
        if endpoint_id != self.endpoint_id
            || cluster_id != TEMPERATURE_CONTROL_CLUSTER_ID
            || attribute_id != TEMPERATURE_SETPOINT_ATTRIBUTE_ID
        {
            return true;
        }

        if !self.in_range(raw_value) {
            return false;
        }

        self.setpoint_raw = raw_value;
        true
    }
}
