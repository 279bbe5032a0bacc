//! Integration Tests: Endpoint + TemperatureControl Cluster + Hersteller-Cluster
//!
//! Bildet den Ablauf des Attribut-Tasks der Firmware auf dem Host nach

use std::sync::{Arc, Mutex};

use esp_core::cluster::{MAX_TEMPERATURE_ATTRIBUTE_ID, MIN_TEMPERATURE_ATTRIBUTE_ID};
use esp_core::vendor::{
    COMPRESSOR_HZ_ATTRIBUTE_ID, MODE_ATTRIBUTE_ID, STATE_ATTRIBUTE_ID, VENDOR_CLUSTER_ID,
};
use esp_core::{
    AttributeEvent, DecodeError, IndicatorState, NumericEndpoint, OperatingMode, OperatingState,
    SetpointLimits, TEMPERATURE_CONTROL_CLUSTER_ID, TEMPERATURE_SETPOINT_ATTRIBUTE_ID,
    TemperatureControlCluster, VendorState, VendorUpdate, decode_vendor_event,
};

const ENDPOINT: u16 = 1;
const LIMITS: SetpointLimits = SetpointLimits::new(5.0, 60.0, 0.5);

fn endpoint() -> NumericEndpoint<f32, TemperatureControlCluster> {
    let cluster = TemperatureControlCluster::new(
        ENDPOINT,
        SetpointLimits::to_wire(22.0),
        LIMITS.min_wire(),
        LIMITS.max_wire(),
        LIMITS.step_wire(),
    );
    NumericEndpoint::new(ENDPOINT, cluster)
}

fn dispatch(endpoint: &mut NumericEndpoint<f32, TemperatureControlCluster>, event: AttributeEvent) -> bool {
    endpoint.handle_attribute_event(
        event.endpoint_id,
        event.cluster_id,
        event.attribute_id,
        event.raw_value,
    )
}

// ============================================================================
// Tests: Setpoint über den Cluster
// ============================================================================

#[test]
fn test_cluster_starts_with_default_setpoint() {
    let endpoint = endpoint();
    assert_eq!(endpoint.base().setpoint_raw(), 2200);
    assert_eq!(endpoint.base().read_attribute(MIN_TEMPERATURE_ATTRIBUTE_ID), Some(500));
    assert_eq!(endpoint.base().read_attribute(MAX_TEMPERATURE_ATTRIBUTE_ID), Some(6000));
}

#[test]
fn test_setpoint_write_reaches_application_with_limits() {
    let mut endpoint = endpoint();
    let applied = Arc::new(Mutex::new(Vec::new()));
    let sink = applied.clone();
    endpoint.on_change(move |celsius| sink.lock().unwrap().push(LIMITS.apply(celsius)));

    let event = AttributeEvent::new(
        ENDPOINT,
        TEMPERATURE_CONTROL_CLUSTER_ID,
        TEMPERATURE_SETPOINT_ATTRIBUTE_ID,
        2430,
    );
    assert!(dispatch(&mut endpoint, event));

    assert_eq!(endpoint.base().setpoint_raw(), 2430);
    assert_eq!(*applied.lock().unwrap(), vec![24.5]);
}

#[test]
fn test_out_of_range_write_is_rejected_but_still_notified() {
    let mut endpoint = endpoint();
    let raw_values = Arc::new(Mutex::new(Vec::new()));
    let sink = raw_values.clone();
    endpoint.on_change(move |celsius| sink.lock().unwrap().push(celsius));

    let event = AttributeEvent::new(
        ENDPOINT,
        TEMPERATURE_CONTROL_CLUSTER_ID,
        TEMPERATURE_SETPOINT_ATTRIBUTE_ID,
        7500,
    );

    // Basis lehnt ab, Callback sieht den Wert trotzdem
    assert!(!dispatch(&mut endpoint, event));
    assert_eq!(endpoint.base().setpoint_raw(), 2200);
    assert_eq!(
        endpoint.base().read_attribute(TEMPERATURE_SETPOINT_ATTRIBUTE_ID),
        Some(2200)
    );
    assert_eq!(*raw_values.lock().unwrap(), vec![75.0]);
    assert_eq!(LIMITS.apply(75.0), 60.0);
}

#[test]
fn test_vendor_events_do_not_touch_setpoint() {
    let mut endpoint = endpoint();
    let calls = Arc::new(Mutex::new(0usize));
    let counter = calls.clone();
    endpoint.on_change(move |_| *counter.lock().unwrap() += 1);

    let event = AttributeEvent::new(ENDPOINT, VENDOR_CLUSTER_ID, STATE_ATTRIBUTE_ID, 1);
    assert!(dispatch(&mut endpoint, event));

    assert_eq!(*calls.lock().unwrap(), 0);
    assert_eq!(endpoint.base().setpoint_raw(), 2200);
}

// ============================================================================
// Tests: Hersteller-Cluster
// ============================================================================

#[test]
fn test_decode_state_and_mode() {
    let state = AttributeEvent::new(ENDPOINT, VENDOR_CLUSTER_ID, STATE_ATTRIBUTE_ID, 2);
    let mode = AttributeEvent::new(ENDPOINT, VENDOR_CLUSTER_ID, MODE_ATTRIBUTE_ID, 1);

    assert_eq!(
        decode_vendor_event(ENDPOINT, &state),
        Ok(Some(VendorUpdate::State(OperatingState::Cool)))
    );
    assert_eq!(
        decode_vendor_event(ENDPOINT, &mode),
        Ok(Some(VendorUpdate::Mode(OperatingMode::Quiet)))
    );
}

#[test]
fn test_decode_rejects_unknown_values() {
    let event = AttributeEvent::new(ENDPOINT, VENDOR_CLUSTER_ID, MODE_ATTRIBUTE_ID, 9);
    assert_eq!(
        decode_vendor_event(ENDPOINT, &event),
        Err(DecodeError::UnknownValue(9))
    );
}

#[test]
fn test_decode_rejects_writes_to_measurements() {
    let event = AttributeEvent::new(ENDPOINT, VENDOR_CLUSTER_ID, COMPRESSOR_HZ_ATTRIBUTE_ID, 50);
    assert_eq!(
        decode_vendor_event(ENDPOINT, &event),
        Err(DecodeError::ReadOnly(COMPRESSOR_HZ_ATTRIBUTE_ID))
    );
}

#[test]
fn test_decode_ignores_temperature_control() {
    let event = AttributeEvent::new(
        ENDPOINT,
        TEMPERATURE_CONTROL_CLUSTER_ID,
        TEMPERATURE_SETPOINT_ATTRIBUTE_ID,
        2200,
    );
    assert_eq!(decode_vendor_event(ENDPOINT, &event), Ok(None));
}

#[test]
fn test_operating_names() {
    assert_eq!(OperatingState::Off.name(), "OFF");
    assert_eq!(OperatingState::Heat.name(), "HEAT");
    assert_eq!(OperatingState::Cool.name(), "COOL");
}

// ============================================================================
// Tests: Betriebszustand
// ============================================================================

#[test]
fn test_decoded_writes_update_vendor_state() {
    let mut vendor = VendorState::default();
    let events = [
        AttributeEvent::new(ENDPOINT, VENDOR_CLUSTER_ID, STATE_ATTRIBUTE_ID, 2),
        AttributeEvent::new(ENDPOINT, VENDOR_CLUSTER_ID, MODE_ATTRIBUTE_ID, 2),
        // Ungültiger Wert ändert nichts
        AttributeEvent::new(ENDPOINT, VENDOR_CLUSTER_ID, MODE_ATTRIBUTE_ID, 7),
        // Anderer Endpoint ändert nichts
        AttributeEvent::new(2, VENDOR_CLUSTER_ID, STATE_ATTRIBUTE_ID, 1),
    ];

    let mut changes = 0;
    for event in &events {
        if let Ok(Some(update)) = decode_vendor_event(ENDPOINT, event) {
            if vendor.apply(update) {
                changes += 1;
            }
        }
    }

    assert_eq!(changes, 2);
    assert_eq!(
        vendor,
        VendorState {
            state: OperatingState::Cool,
            mode: OperatingMode::Turbo,
        }
    );
    assert_eq!(vendor.read_attribute(STATE_ATTRIBUTE_ID), Some(2));
    assert_eq!(vendor.read_attribute(MODE_ATTRIBUTE_ID), Some(2));
}

#[test]
fn test_vendor_state_defaults_to_off_eco() {
    let vendor = VendorState::default();
    assert_eq!(vendor.read_attribute(STATE_ATTRIBUTE_ID), Some(0));
    assert_eq!(vendor.read_attribute(MODE_ATTRIBUTE_ID), Some(0));
}

// ============================================================================
// Tests: serde
// ============================================================================

#[test]
fn test_serde_vendor_state() {
    let vendor = VendorState {
        state: OperatingState::Heat,
        mode: OperatingMode::Quiet,
    };
    let json = serde_json::to_string(&vendor).unwrap();
    assert_eq!(json, r#"{"state":"Heat","mode":"Quiet"}"#);

    let parsed: VendorState = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, vendor);
}

#[test]
fn test_serde_limits_and_indicator_state() {
    let limits: SetpointLimits =
        serde_json::from_str(r#"{"min":5.0,"max":60.0,"step":0.5}"#).unwrap();
    assert_eq!(limits, LIMITS);

    assert_eq!(
        serde_json::to_string(&IndicatorState::Offline).unwrap(),
        r#""Offline""#
    );
}
