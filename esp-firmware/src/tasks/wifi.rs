// WiFi Tasks - Verbindung zum Access Point und Link-Überwachung
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice, WifiEvent};

use crate::config::{LINK_POLL_INTERVAL_MS, WIFI_PASSWORD, WIFI_RETRY_DELAY_SECS, WIFI_SSID};

/// WiFi Connection Task
///
/// Managed die WiFi-Verbindung:
/// - Startet den Controller im Station-Modus
/// - Verbindet mit dem Access Point
/// - Wartet auf Disconnect und verbindet neu
///
/// Der Verbindungszustand selbst wird nicht hier gespeichert, die
/// Status-LED liest ihn direkt aus dem embassy-net Stack.
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    info!("WiFi: Starting connection task");

    loop {
        if matches!(controller.is_started(), Ok(false)) {
            if let Err(e) = start_station(&mut controller).await {
                error!("WiFi: Failed to start: {}", Debug2Format(&e));
                retry_delay().await;
                continue;
            }
            info!("WiFi: Started in station mode");
        }

        info!("WiFi: Connecting to '{}'...", WIFI_SSID);
        if let Err(e) = controller.connect_async().await {
            error!("WiFi: Connection failed: {}", Debug2Format(&e));
            retry_delay().await;
            continue;
        }
        info!("WiFi: Associated with access point");

        controller.wait_for_event(WifiEvent::StaDisconnected).await;
        warn!("WiFi: Disconnected from AP, will retry...");

        Timer::after(Duration::from_secs(2)).await;
    }
}

async fn start_station(
    controller: &mut WifiController<'static>,
) -> Result<(), esp_radio::wifi::WifiError> {
    let client_config = ModeConfig::Client(
        ClientConfig::default()
            .with_ssid(WIFI_SSID.into())
            .with_password(WIFI_PASSWORD.into()),
    );

    controller.set_config(&client_config)?;
    controller.start_async().await
}

async fn retry_delay() {
    Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
}

/// Network Task
///
/// Prozessiert Netzwerk-Pakete des embassy-net Stacks.
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// Link Monitor Task
///
/// Loggt jeden Wechsel zwischen "verbunden mit IP" und "getrennt".
/// Die Status-LED pollt denselben Zustand unabhängig davon.
#[embassy_executor::task]
pub async fn link_monitor_task(stack: &'static Stack<'static>) {
    let mut online = false;

    loop {
        let config = stack.config_v4().filter(|_| stack.is_link_up());

        match (online, config) {
            (false, Some(config)) => {
                online = true;
                info!("WiFi: Online");
                info!("  IP:      {}", Debug2Format(&config.address.address()));
                info!("  Gateway: {}", Debug2Format(&config.gateway));
            }
            (true, None) => {
                online = false;
                warn!("WiFi: Offline (link down or no DHCP lease)");
            }
            _ => {}
        }

        Timer::after(Duration::from_millis(LINK_POLL_INTERVAL_MS)).await;
    }
}
