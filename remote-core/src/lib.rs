//! Remote Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Effekt-Katalog, Funkprotokoll, die Zustandsmaschine
//! der Fernbedienung und die Traits für Taster, Funk, Anzeige und LED.

#![no_std]

pub mod effects;
pub mod link;
pub mod logic;
pub mod protocol;
pub mod remote;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use effects::{EffectCatalog, NIGHTDRIVER_EFFECTS};
pub use link::{LinkGate, LinkState, LinkStatus};
pub use logic::{Debouncer, status_color};
pub use protocol::{
    Command, CommandMessage, DecodeError, Frame, INVALID_OPCODE, MESSAGE_LEN, encode_next_effect,
    encode_prev_effect, encode_set_brightness, encode_set_effect,
};
pub use remote::{Dispatch, Remote, RemoteError};
pub use traits::{
    CommandTransport, DisplayError, LedError, PushButton, SelectionDisplay, SmartLedWriter,
    TransportError,
};
pub use types::{AddressError, PeerAddress, SendStatus};
