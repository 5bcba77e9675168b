// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Alles ist zur Compile-Zeit festgelegt. Nur die Empfänger-MAC kann über
// die Build-Umgebung (.env) überschrieben werden.

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// GPIO-Pin des Tasters (BOOT-Taster auf dem ESP32-C6 DevKit)
/// Aktiv LOW, interner Pull-Up
pub const BUTTON_GPIO_PIN: u8 = 9;

/// Poll-Intervall der Hauptschleife in Millisekunden
pub const POLL_INTERVAL_MS: u64 = 10;

/// Entprell-Intervall in Millisekunden
/// Muss größer als POLL_INTERVAL_MS sein, sonst filtert es nichts
pub const BUTTON_DEBOUNCE_MS: u64 = 20;

// ============================================================================
// ESP-NOW Konfiguration
// ============================================================================

/// Empfänger-MAC als Text ("AA:BB:CC:DD:EE:FF")
/// Wird zur Build-Zeit aus der Environment Variable REMOTE_PEER_MAC geladen.
/// Nicht gesetzt → Broadcast an alle NightDriverStrip-Empfänger
pub const PEER_MAC: Option<&str> = option_env!("REMOTE_PEER_MAC");

/// WiFi-Kanal für ESP-NOW (None = aktueller Kanal des Interfaces)
pub const ESPNOW_CHANNEL: Option<u8> = None;

/// Kapazität der Sende-Queue (Remote-Task → ESP-NOW-Task)
/// Mehr als eine Nachricht ist nur bei sehr schnellem Tippen nötig
pub const FRAME_QUEUE_SIZE: usize = 4;

/// Heap-Größe für den WiFi-Treiber (Bytes)
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

// ============================================================================
// Display Konfiguration
// ============================================================================

/// GPIO-Pins für I2C (SSD1306 OLED)
pub const DISPLAY_SDA_PIN: u8 = 6;
pub const DISPLAY_SCL_PIN: u8 = 7;

/// I2C Taktfrequenz in kHz
pub const DISPLAY_I2C_KHZ: u32 = 400;

/// Maximale Länge der Positionszeile ("7/7")
pub const DISPLAY_LINE_LEN: usize = 16;

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// GPIO-Pin der Status-LED (WS2812 auf dem DevKit)
pub const LED_GPIO_PIN: u8 = 8;

/// Helligkeits-Level für die LED (0-255)
/// Wert ist gedimmt für Augenschonung und Akku
pub const LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Wie lange die LED nach einem Sendeversuch leuchtet (ms)
pub const LED_FLASH_MS: u64 = 150;
