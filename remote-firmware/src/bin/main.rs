// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi benötigt dynamischen Speicher)
extern crate alloc;

use defmt::{Debug2Format, error, info};
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use nightdriver_remote::config::{
    BUTTON_GPIO_PIN, DISPLAY_I2C_KHZ, DISPLAY_SCL_PIN, DISPLAY_SDA_PIN, LED_GPIO_PIN,
    WIFI_HEAP_SIZE,
};
use nightdriver_remote::hal::{GpioButton, OledDisplay};
use nightdriver_remote::tasks::{Radio, espnow_task, remote_task, status_led_task};
use nightdriver_remote::{FrameChannel, SendStatusSignal, configured_peer};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware und Funk, startet die Embassy Runtime und
/// spawnt die Tasks. Fehler bei Funk oder Display sind nicht fatal:
/// die Fernbedienung läuft dann eingeschränkt weiter.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator für den WiFi-Treiber
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!("NightDriver Remote starting");

    // Funk initialisieren - bei Fehler ohne Funk weiter
    static RADIO_INIT: static_cell::StaticCell<esp_radio::Controller> =
        static_cell::StaticCell::new();
    let radio = match esp_radio::init() {
        Ok(radio_init) => {
            let radio_init = RADIO_INIT.init(radio_init);
            match esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default()) {
                Ok((controller, interfaces)) => Some(Radio {
                    controller,
                    esp_now: interfaces.esp_now,
                }),
                Err(e) => {
                    error!("ESP-NOW: Failed to initialize Wi-Fi: {}", Debug2Format(&e));
                    None
                }
            }
        }
        Err(e) => {
            error!("ESP-NOW: Failed to initialize radio: {}", Debug2Format(&e));
            None
        }
    };

    // Display (SSD1306 über I2C) - optional
    let i2c_config = I2cConfig::default().with_frequency(Rate::from_khz(DISPLAY_I2C_KHZ));
    let display = match I2c::new(peripherals.I2C0, i2c_config) {
        Ok(i2c) => {
            let i2c = i2c.with_sda(peripherals.GPIO6).with_scl(peripherals.GPIO7);
            match OledDisplay::new(i2c) {
                Ok(display) => Some(display),
                Err(e) => {
                    error!("Display: No SSD1306 found: {}", e);
                    None
                }
            }
        }
        Err(e) => {
            error!("Display: Failed to configure I2C: {}", Debug2Format(&e));
            None
        }
    };
    info!(
        "Display: SDA GPIO{}, SCL GPIO{}, present: {}",
        DISPLAY_SDA_PIN,
        DISPLAY_SCL_PIN,
        display.is_some()
    );

    // Taster (aktiv LOW)
    let button = GpioButton::new(peripherals.GPIO9);
    info!("Remote: Button on GPIO{}", BUTTON_GPIO_PIN);

    let peer = configured_peer();

    // Sende-Queue (Remote → ESP-NOW)
    static FRAME_CHANNEL: static_cell::StaticCell<FrameChannel> = static_cell::StaticCell::new();
    let frame_channel = &*FRAME_CHANNEL.init(FrameChannel::new());

    // Sende-Ergebnis (ESP-NOW → Status-LED)
    static SEND_STATUS: static_cell::StaticCell<SendStatusSignal> = static_cell::StaticCell::new();
    let send_status = &*SEND_STATUS.init(SendStatusSignal::new());

    spawner
        .spawn(espnow_task(radio, peer, frame_channel.receiver(), send_status))
        .unwrap();

    info!("LED: Status LED on GPIO{}", LED_GPIO_PIN);
    spawner
        .spawn(status_led_task(
            peripherals.GPIO8,
            peripherals.RMT,
            send_status,
        ))
        .unwrap();

    spawner
        .spawn(remote_task(button, display, frame_channel.sender(), peer))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
