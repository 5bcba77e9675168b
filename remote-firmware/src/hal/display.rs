// OLED-Anzeige (SSD1306, 128x64, I2C)
//
// Zeigt die aktuelle Effekt-Auswahl:
//
//   NightDriver Remote
//   Fire Effect
//   4/7

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_9X15_BOLD};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use esp_hal::Blocking;
use esp_hal::i2c::master::I2c;
use heapless::String;
use remote_core::{DisplayError, SelectionDisplay};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::config::DISPLAY_LINE_LEN;

const TITLE: &str = "NightDriver Remote";

type OledDriver<'d> = Ssd1306<
    I2CInterface<I2c<'d, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

pub struct OledDisplay<'d> {
    driver: OledDriver<'d>,
}

impl<'d> OledDisplay<'d> {
    /// Initialisiert das Display
    ///
    /// Schlägt fehl wenn kein Display am Bus antwortet.
    pub fn new(i2c: I2c<'d, Blocking>) -> Result<Self, DisplayError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        driver.init().map_err(|_| DisplayError::WriteFailed)?;

        Ok(Self { driver })
    }
}

impl SelectionDisplay for OledDisplay<'_> {
    fn show(&mut self, index: usize, count: usize, name: &str) -> Result<(), DisplayError> {
        let small = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let large = MonoTextStyle::new(&FONT_9X15_BOLD, BinaryColor::On);

        // Anzeige 1-basiert
        let mut position: String<DISPLAY_LINE_LEN> = String::new();
        write!(position, "{}/{}", index + 1, count).map_err(|_| DisplayError::WriteFailed)?;

        self.driver.clear_buffer();
        Text::with_baseline(TITLE, Point::zero(), small, Baseline::Top)
            .draw(&mut self.driver)
            .map_err(|_| DisplayError::WriteFailed)?;
        Text::with_baseline(name, Point::new(0, 22), large, Baseline::Top)
            .draw(&mut self.driver)
            .map_err(|_| DisplayError::WriteFailed)?;
        Text::with_baseline(&position, Point::new(0, 50), small, Baseline::Top)
            .draw(&mut self.driver)
            .map_err(|_| DisplayError::WriteFailed)?;

        self.driver.flush().map_err(|_| DisplayError::WriteFailed)
    }
}
