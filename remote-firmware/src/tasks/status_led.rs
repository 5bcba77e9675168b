// Status-LED Task - Blinkt grün/rot je nach ESP-NOW Sende-Ergebnis
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_hal_smartled::smart_led_buffer;
use rgb::RGB8;

use crate::config::{LED_BRIGHTNESS, LED_FLASH_MS, RMT_CLOCK_MHZ};
use crate::hal::RmtLedWriter;
use crate::{SendStatusSignal, status_color};
use remote_core::SmartLedWriter;

/// Status-LED Logic - ohne Hardware-Abhängigkeit
///
/// Wartet auf das nächste Sende-Ergebnis und lässt die LED kurz in der
/// passenden Farbe aufleuchten. Rein zur Beobachtung, keine Rückwirkung
/// auf die Fernbedienung.
pub async fn status_led_logic<L: SmartLedWriter>(mut led: L, status: &'static SendStatusSignal) -> ! {
    if led.write(RGB8::default()).is_err() {
        error!("LED: Failed to switch off");
    }

    loop {
        let send_status = status.wait().await;

        if led.write(status_color(send_status, LED_BRIGHTNESS)).is_err() {
            error!("LED: Failed to write status color");
        }
        Timer::after(Duration::from_millis(LED_FLASH_MS)).await;

        if led.write(RGB8::default()).is_err() {
            error!("LED: Failed to switch off");
        }
    }
}

/// Status-LED Task - Embassy Task
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `status`: Signal mit dem letzten Sende-Ergebnis
#[embassy_executor::task]
pub async fn status_led_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    status: &'static SendStatusSignal,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);

    match RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(led) => {
            info!("LED: Status LED ready");
            status_led_logic(led, status).await
        }
        // Ohne LED läuft die Fernbedienung normal weiter
        Err(e) => error!("LED: Failed to initialize RMT: {}", e),
    }
}
