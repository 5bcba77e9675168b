// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus remote-core für die echte Hardware.

pub mod button;
pub mod display;
pub mod led_writer;
pub mod transport;

pub use button::GpioButton;
pub use display::OledDisplay;
pub use led_writer::RmtLedWriter;
pub use transport::ChannelTransport;
