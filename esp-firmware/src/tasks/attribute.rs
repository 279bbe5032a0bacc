// Attribut Task - Verteilt Attribut-Änderungen des Matter-Stacks
use defmt::{debug, info, warn};
use esp_core::{
    AttributeHandler, NumericEndpoint, SetpointLimits, TemperatureControlCluster, VendorState,
    VendorUpdate, decode_vendor_event,
};

use crate::config::{SETPOINT_ENDPOINT_ID, TEMP_DEFAULT, TEMP_LIMITS};
use crate::{AttributeEventReceiver, SETPOINT, VENDOR};

/// Attribut Logic - Dispatch ohne Hardware-Abhängigkeit
///
/// Für jede Attribut-Änderung:
/// 1. Setpoint-Endpoint (ruft ggf. den registrierten Callback synchron auf)
/// 2. Hersteller-Cluster dekodieren, in `VendorState` übernehmen und bei
///    Änderung über das `VENDOR`-Signal an die Anwendung geben
///
/// Der Endpoint wird nie blockierend verarbeitet, nur das Warten auf
/// das nächste Event ist async.
pub async fn attribute_logic<B: AttributeHandler>(
    mut endpoint: NumericEndpoint<f32, B>,
    receiver: AttributeEventReceiver,
) -> ! {
    let mut vendor = VendorState::default();
    VENDOR.signal(vendor);

    loop {
        let event = receiver.receive().await;
        debug!("Setpoint: {}", event);

        let accepted = endpoint.handle_attribute_event(
            event.endpoint_id,
            event.cluster_id,
            event.attribute_id,
            event.raw_value,
        );
        if !accepted {
            warn!("Setpoint: stack rejected {}", event);
        }

        match decode_vendor_event(endpoint.endpoint_id(), &event) {
            Ok(Some(update)) => {
                match update {
                    VendorUpdate::State(state) => info!("Vendor: state -> {}", state.name()),
                    VendorUpdate::Mode(mode) => info!("Vendor: mode -> {}", mode.name()),
                }
                if vendor.apply(update) {
                    VENDOR.signal(vendor);
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Vendor: ignored write: {}", e),
        }
    }
}

/// Erstellt den Setpoint-Endpoint mit Cluster-Basis und Anwendungs-Callback
///
/// Der Callback begrenzt den Wert auf `TEMP_LIMITS` und reicht ihn über
/// das `SETPOINT`-Signal an die Anwendung weiter.
pub fn setpoint_endpoint() -> NumericEndpoint<f32, TemperatureControlCluster> {
    let cluster = TemperatureControlCluster::new(
        SETPOINT_ENDPOINT_ID,
        SetpointLimits::to_wire(TEMP_DEFAULT),
        TEMP_LIMITS.min_wire(),
        TEMP_LIMITS.max_wire(),
        TEMP_LIMITS.step_wire(),
    );

    let mut endpoint = NumericEndpoint::new(SETPOINT_ENDPOINT_ID, cluster);
    endpoint.on_change(|celsius: f32| {
        let applied = TEMP_LIMITS.apply(celsius);
        if applied != celsius {
            info!("Setpoint: {} C adjusted to {} C (limits/step)", celsius, applied);
        }
        info!("Setpoint: target temperature {} C", applied);
        SETPOINT.signal(applied);
    });
    endpoint
}

/// Attribut Task - Embassy Task für parallele Ausführung
///
/// # Parameter
/// - `receiver`: Channel Receiver für Attribut-Änderungen des Matter-Stacks
#[embassy_executor::task]
pub async fn attribute_task(receiver: AttributeEventReceiver) {
    let endpoint = setpoint_endpoint();
    info!(
        "Setpoint: endpoint {} ready, default {} C",
        endpoint.endpoint_id(),
        TEMP_DEFAULT
    );

    // Startwert an die Anwendung geben, bevor der Stack Events liefert
    SETPOINT.signal(TEMP_DEFAULT);

    attribute_logic(endpoint, receiver).await
}
