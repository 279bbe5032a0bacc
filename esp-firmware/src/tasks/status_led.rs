// Status LED Task - Zeigt Commissioning- und Netzwerk-Zustand über die RGB LED
use defmt::{error, info, warn};
use embassy_net::Stack;
use embassy_time::{Duration, Ticker};
use esp_core::{Clock, DeviceStatus, IndicatorState, SmartLedWriter, StatusIndicator};
use esp_hal_smartled::smart_led_buffer;

use crate::config::{LED_GPIO_PIN, RMT_CLOCK_MHZ, STATUS_POLL_INTERVAL_MS};
use crate::hal::{EmbassyClock, FirmwareStatus, RmtLedWriter};

/// Status LED Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Pollt den Status-Indikator im festen Takt:
/// - `update()` selbst blockiert nie, der Ticker gibt die CPU zwischen
///   den Ticks an andere Tasks zurück
/// - Zustandswechsel werden einmal geloggt, nicht bei jedem Tick
/// - LED-Schreibfehler werden nur geloggt (best effort)
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter erlauben Hardware (RmtLedWriter, FirmwareStatus,
/// EmbassyClock) im Production-Code und Mocks in Tests.
pub async fn status_led_logic<L, S, C>(mut indicator: StatusIndicator<L, S, C>) -> !
where
    L: SmartLedWriter,
    S: DeviceStatus,
    C: Clock,
{
    indicator.begin();

    let mut ticker = Ticker::every(Duration::from_millis(STATUS_POLL_INTERVAL_MS));
    let mut last_state: Option<IndicatorState> = None;
    let mut reported_failures = 0;

    loop {
        let state = indicator.update();

        if last_state != Some(state) {
            info!("Status: {}", state);
            last_state = Some(state);
        }

        let failures = indicator.write_failures();
        if failures != reported_failures {
            warn!("Status: LED write failed ({} total)", failures);
            reported_failures = failures;
        }

        ticker.next().await;
    }
}

/// Status LED Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung und ruft dann
/// `status_led_logic()` auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `stack`: embassy-net Stack für den Netzwerk-Zustand
#[embassy_executor::task]
pub async fn status_led_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    stack: &'static Stack<'static>,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(1);

    let led = match RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(led) => led,
        Err(e) => {
            // Ohne LED läuft das Gerät normal weiter
            error!("Status: LED init on GPIO{} failed: {}", LED_GPIO_PIN, e);
            return;
        }
    };
    info!("Status: LED ready on GPIO{}", LED_GPIO_PIN);

    let indicator = StatusIndicator::new(led, FirmwareStatus::new(*stack), EmbassyClock);
    status_led_logic(indicator).await
}
