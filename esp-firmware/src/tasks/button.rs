// Button Task - BOOT-Button lange drücken = Factory-Reset (Decommissioning)
use defmt::{debug, info, warn};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::{Input, InputConfig, Pull};

use crate::commissioning;
use crate::config::{BUTTON_GPIO_PIN, FACTORY_RESET_HOLD_SECS};

/// Button Task - überwacht den BOOT-Button
///
/// - Kurzer Druck: wird nur geloggt
/// - Gedrückt halten für `FACTORY_RESET_HOLD_SECS`: Commissioning löschen,
///   die Status-LED wechselt beim nächsten Tick auf "Atmen"
///
/// Das Löschen der gespeicherten Fabric-Daten übernimmt der Matter-Stack.
///
/// # Parameter
/// - `gpio9`: GPIO9 Peripheral (BOOT-Button, active low)
#[embassy_executor::task]
pub async fn button_task(gpio9: esp_hal::peripherals::GPIO9<'static>) {
    let mut button = Input::new(gpio9, InputConfig::default().with_pull(Pull::Up));
    info!("Button: watching GPIO{}", BUTTON_GPIO_PIN);

    loop {
        button.wait_for_low().await;

        let hold = Timer::after(Duration::from_secs(FACTORY_RESET_HOLD_SECS));
        let released = select(button.wait_for_high(), hold).await;
        match released {
            Either::First(()) => debug!("Button: short press"),
            Either::Second(()) => {
                if commissioning::set_commissioned(false) {
                    warn!("Button: factory reset, device decommissioned");
                } else {
                    info!("Button: factory reset, device was not commissioned");
                }
                button.wait_for_high().await;
            }
        }
    }
}
