// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use esp_core::{EndpointId, SetpointLimits};

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Poll-Intervall der Status-LED in Millisekunden
/// 20 ms = 50 Hz, flüssig genug für die Atem-Animation
pub const STATUS_POLL_INTERVAL_MS: u64 = 20;

// ============================================================================
// Button Konfiguration
// ============================================================================

/// GPIO-Pin des BOOT-Buttons (active low)
pub const BUTTON_GPIO_PIN: u8 = 9;

/// Haltedauer für Factory-Reset (Decommissioning) in Sekunden
pub const FACTORY_RESET_HOLD_SECS: u64 = 5;

// ============================================================================
// Matter Setpoint Konfiguration
// ============================================================================

/// Endpoint-ID des Setpoint-Endpoints
/// Muss zur Registrierung im Matter-Stack passen
pub const SETPOINT_ENDPOINT_ID: EndpointId = 1;

/// Startwert der Zieltemperatur in °C
pub const TEMP_DEFAULT: f32 = 22.0;

/// Erlaubter Bereich und Schrittweite der Zieltemperatur in °C
pub const TEMP_LIMITS: SetpointLimits = SetpointLimits::new(5.0, 60.0, 0.5);

/// Kapazität des Attribut-Channels (Matter-Stack → Attribut-Task)
pub const ATTRIBUTE_QUEUE_DEPTH: usize = 8;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Wartezeit nach WiFi-Fehler vor erneutem Versuch in Sekunden
pub const WIFI_RETRY_DELAY_SECS: u64 = 5;

/// Poll-Intervall des Link-Monitors in Millisekunden
pub const LINK_POLL_INTERVAL_MS: u64 = 500;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

/// Anzahl Sockets im embassy-net Stack
pub const NET_SOCKET_COUNT: usize = 4;
