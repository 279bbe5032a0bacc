//! Integration Tests für die Status-LED
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockLedWriter,
//! MockStatus und MockClock

use std::cell::Cell;
use std::rc::Rc;

use esp_core::{
    BREATHE_FLOOR, COLOR_HEALTHY, COLOR_NEUTRAL, COLOR_WARNING, Clock, DeviceStatus,
    IndicatorState, LedError, SmartLedWriter, StatusIndicator, breathe_brightness, breathe_color,
    classify_state,
};
use rgb::RGB8;

// ============================================================================
// Mocks
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    pub pending: Option<RGB8>,
    pub shown: Vec<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_color(&self) -> Option<RGB8> {
        self.shown.last().copied()
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.pending = Some(color);
        self.write_count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), LedError> {
        if let Some(color) = self.pending.take() {
            self.shown.push(color);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MockStatus {
    pub commissioned: bool,
    pub connected: bool,
}

impl DeviceStatus for MockStatus {
    fn is_commissioned(&self) -> bool {
        self.commissioned
    }

    fn is_network_connected(&self) -> bool {
        self.connected
    }
}

/// Uhr, die der Test von außen weiterstellt
#[derive(Clone, Default)]
pub struct MockClock {
    now: Rc<Cell<u64>>,
}

impl MockClock {
    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

fn setup(
    commissioned: bool,
    connected: bool,
) -> (StatusIndicator<MockLedWriter, MockStatus, MockClock>, MockClock) {
    let clock = MockClock::default();
    let status = MockStatus {
        commissioned,
        connected,
    };
    (
        StatusIndicator::new(MockLedWriter::new(), status, clock.clone()),
        clock,
    )
}

// ============================================================================
// Tests: classify_state()
// ============================================================================

#[test]
fn test_classify_state_exhaustive() {
    let states: Vec<IndicatorState> = [(false, false), (false, true), (true, false), (true, true)]
        .into_iter()
        .map(|(c, n)| classify_state(c, n))
        .collect();

    assert_eq!(
        states,
        vec![
            IndicatorState::Uncommissioned,
            IndicatorState::Uncommissioned,
            IndicatorState::Offline,
            IndicatorState::Online,
        ]
    );
}

// ============================================================================
// Tests: Atem-Animation
// ============================================================================

#[test]
fn test_breathe_brightness_is_periodic() {
    let start = breathe_brightness(0);
    let one_period = breathe_brightness(2513);
    assert!((start - one_period).abs() < 1e-3);

    let later = breathe_brightness(10_000);
    let later_plus_period = breathe_brightness(10_000 + 2513);
    assert!((later - later_plus_period).abs() < 1e-3);
}

#[test]
fn test_breathe_color_bounded_for_all_times() {
    for t in (0..20_000u64).step_by(7) {
        let brightness = breathe_brightness(t);
        assert!((0.0..=1.0).contains(&brightness));

        let color = breathe_color(COLOR_NEUTRAL, t);
        for channel in [color.r, color.g, color.b] {
            assert!(channel >= BREATHE_FLOOR);
            assert!(channel <= BREATHE_FLOOR + COLOR_NEUTRAL.r);
        }
    }
}

#[test]
fn test_breathe_is_deterministic() {
    assert_eq!(breathe_color(COLOR_NEUTRAL, 4242), breathe_color(COLOR_NEUTRAL, 4242));
}

#[test]
fn test_breathe_color_peak() {
    // Maximum bei sin = 1: t = π/2 · 400 ≈ 628 ms
    let color = breathe_color(COLOR_NEUTRAL, 628);
    assert_eq!(color, RGB8 { r: 159, g: 159, b: 159 });
}

// ============================================================================
// Tests: StatusIndicator
// ============================================================================

#[test]
fn test_begin_clears_led_once() {
    let (mut indicator, _clock) = setup(true, true);

    indicator.begin();
    indicator.begin();

    assert!(indicator.is_started());
    assert_eq!(indicator.led().shown, vec![RGB8::default()]);
}

#[test]
fn test_update_uncommissioned_breathes() {
    let (mut indicator, clock) = setup(false, true);
    indicator.begin();

    clock.set(0);
    assert_eq!(indicator.update(), IndicatorState::Uncommissioned);
    assert_eq!(indicator.led().last_color(), Some(RGB8 { r: 85, g: 85, b: 85 }));

    clock.set(628);
    indicator.update();
    assert_eq!(indicator.led().last_color(), Some(RGB8 { r: 159, g: 159, b: 159 }));
}

#[test]
fn test_update_offline_is_amber() {
    let (mut indicator, _clock) = setup(true, false);
    indicator.begin();

    assert_eq!(indicator.update(), IndicatorState::Offline);
    assert_eq!(indicator.led().last_color(), Some(COLOR_WARNING));
}

#[test]
fn test_update_online_is_green() {
    let (mut indicator, _clock) = setup(true, true);
    indicator.begin();

    assert_eq!(indicator.update(), IndicatorState::Online);
    assert_eq!(indicator.led().last_color(), Some(COLOR_HEALTHY));
}

#[test]
fn test_update_follows_state_changes() {
    let (mut indicator, _clock) = setup(false, false);
    indicator.begin();
    assert_eq!(indicator.update(), IndicatorState::Uncommissioned);

    indicator.status_mut().commissioned = true;
    assert_eq!(indicator.update(), IndicatorState::Offline);

    indicator.status_mut().connected = true;
    assert_eq!(indicator.update(), IndicatorState::Online);

    indicator.status_mut().connected = false;
    assert_eq!(indicator.update(), IndicatorState::Offline);
    assert_eq!(indicator.led().last_color(), Some(COLOR_WARNING));
}

#[test]
fn test_write_failure_is_swallowed() {
    // Nächster Schreibvorgang schlägt fehl
    let mut failing = MockLedWriter::new();
    failing.fail_next_write = true;
    let mut indicator = StatusIndicator::new(
        failing,
        MockStatus {
            commissioned: true,
            connected: true,
        },
        MockClock::default(),
    );

    assert_eq!(indicator.update(), IndicatorState::Online);
    assert_eq!(indicator.write_failures(), 1);
    assert_eq!(indicator.led().last_color(), None);

    // Danach wieder normal
    assert_eq!(indicator.update(), IndicatorState::Online);
    assert_eq!(indicator.write_failures(), 1);
    assert_eq!(indicator.led().last_color(), Some(COLOR_HEALTHY));
}

#[test]
fn test_tight_loop_writes_every_tick() {
    let (mut indicator, clock) = setup(false, false);
    indicator.begin();

    for t in 0..10_000u64 {
        clock.set(t);
        indicator.update();
    }

    // begin() + 10 000 Updates, kein Update wird ausgelassen
    assert_eq!(indicator.led().write_count, 10_001);
    assert_eq!(indicator.led().shown.len(), 10_001);
}

#[test]
fn test_indicator_state_names() {
    assert_eq!(IndicatorState::Uncommissioned.name(), "Uncommissioned");
    assert_eq!(IndicatorState::Offline.name(), "Offline");
    assert_eq!(IndicatorState::Online.name(), "Online");
}
