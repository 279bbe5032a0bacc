//! Numerischer Setpoint-Endpoint
//!
//! Filtert die systemweiten Attribut-Änderungen des Matter-Stacks auf den
//! TemperatureSetpoint des eigenen Endpoints und ruft dafür genau einen
//! Anwendungs-Callback mit dem umgerechneten Wert auf.

use alloc::boxed::Box;

use crate::cluster::{TEMPERATURE_CONTROL_CLUSTER_ID, TEMPERATURE_SETPOINT_ATTRIBUTE_ID};
use crate::traits::AttributeHandler;
use crate::types::{AttributeId, ClusterId, EndpointId};
use crate::value::SetpointValue;

/// Callback für Setpoint-Änderungen
pub type ChangeCallback<T> = Box<dyn FnMut(T) + Send>;

/// Matter-Endpoint mit einem numerischen Setpoint
///
/// Der Endpoint besitzt die Basis-Verarbeitung `B` (Komposition) und
/// delegiert jede Attribut-Änderung zuerst an sie.
///
/// # Callback-Vertrag
/// Genau ein Callback-Slot. `on_change()` wird beim Setup aufgerufen, bevor
/// der Stack Events liefert; ein erneuter Aufruf ersetzt den bisherigen
/// Callback (last write wins). Danach wird der Slot nur noch gelesen.
pub struct NumericEndpoint<T: SetpointValue, B: AttributeHandler> {
    endpoint_id: EndpointId,
    base: B,
    on_change: Option<ChangeCallback<T>>,
}

impl<T: SetpointValue, B: AttributeHandler> NumericEndpoint<T, B> {
    /// Erstellt den Endpoint mit der vom Stack vergebenen ID
    pub fn new(endpoint_id: EndpointId, base: B) -> Self {
        Self {
            endpoint_id,
            base,
            on_change: None,
        }
    }

    pub fn endpoint_id(&self) -> EndpointId {
        self.endpoint_id
    }

    pub fn base(&self) -> &B {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut B {
        &mut self.base
    }

    /// Registriert den Callback, ersetzt einen vorher registrierten
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(T) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    pub fn has_callback(&self) -> bool {
        self.on_change.is_some()
    }

    /// Verarbeitet eine Attribut-Änderung des Matter-Stacks
    ///
    /// 1. Basis-Verarbeitung aufrufen, Ergebnis merken
    /// 2. Endpoint, Cluster und Attribut müssen alle passen
    /// 3. Callback (falls registriert) synchron mit dem umgerechneten Wert aufrufen
    /// 4. Ergebnis der Basis-Verarbeitung unverändert zurückgeben
    ///
    /// Events ohne registrierten Callback werden verworfen, nicht gepuffert.
    pub fn handle_attribute_event(
        &mut self,
        endpoint_id: EndpointId,
        cluster_id: ClusterId,
        attribute_id: AttributeId,
        raw_value: i16,
    ) -> bool {
        let accepted =
            self.base
                .handle_attribute_event(endpoint_id, cluster_id, attribute_id, raw_value);

        if self.is_setpoint(endpoint_id, cluster_id, attribute_id) {
            if let Some(callback) = self.on_change.as_mut() {
                callback(T::from_wire(raw_value));
            }
        }

        accepted
    }

    fn is_setpoint(
        &self,
        endpoint_id: EndpointId,
        cluster_id: ClusterId,
        attribute_id: AttributeId,
    ) -> bool {
        endpoint_id == self.endpoint_id
            && cluster_id == TEMPERATURE_CONTROL_CLUSTER_ID
            && attribute_id == TEMPERATURE_SETPOINT_ATTRIBUTE_ID
    }
}
