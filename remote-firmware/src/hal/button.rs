// Taster am GPIO - aktiv LOW mit internem Pull-Up

use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};
use remote_core::PushButton;

pub struct GpioButton<'d> {
    input: Input<'d>,
}

impl<'d> GpioButton<'d> {
    pub fn new(pin: impl InputPin + 'd) -> Self {
        let input = Input::new(pin, InputConfig::default().with_pull(Pull::Up));
        Self { input }
    }
}

impl PushButton for GpioButton<'_> {
    fn is_pressed(&mut self) -> bool {
        self.input.is_low()
    }
}
