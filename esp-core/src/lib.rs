//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den numerischen Setpoint-Endpoint und die
//! Logik der Status-LED. `alloc` wird nur für den Callback-Slot benötigt.

#![no_std]

extern crate alloc;

pub mod cluster;
pub mod endpoint;
pub mod indicator;
pub mod limits;
pub mod logic;
pub mod traits;
pub mod types;
pub mod value;
pub mod vendor;

// Re-exports für einfachen Zugriff
pub use cluster::{
    TEMPERATURE_CONTROL_CLUSTER_ID, TEMPERATURE_SETPOINT_ATTRIBUTE_ID, TemperatureControlCluster,
};
pub use endpoint::{ChangeCallback, NumericEndpoint};
pub use indicator::StatusIndicator;
pub use limits::SetpointLimits;
pub use logic::{
    BREATHE_FLOOR, COLOR_HEALTHY, COLOR_NEUTRAL, COLOR_WARNING, breathe_brightness,
    breathe_color, classify_state, indicator_color,
};
pub use traits::{AttributeHandler, Clock, DeviceStatus, LedError, SmartLedWriter};
pub use types::{AttributeEvent, AttributeId, ClusterId, EndpointId, IndicatorState};
pub use value::{SetpointValue, WIRE_SCALE};
pub use vendor::{
    DecodeError, OperatingMode, OperatingState, VendorState, VendorUpdate, decode_vendor_event,
};
