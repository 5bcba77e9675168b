//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** remote-firmware (`hal` Modul)
//! - **Testing:** Mocks in remote-tests

use rgb::RGB8;

use crate::protocol::Frame;
use crate::types::PeerAddress;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Fehler beim Übergeben einer Nachricht an den Funk-Stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Sende-Queue voll, Nachricht verworfen
    QueueFull,
    /// Funk-Stack konnte nicht initialisiert werden (Link offline)
    SendFailed,
}

/// Fehler beim Aktualisieren der Anzeige
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    WriteFailed,
}

/// Trait für den Taster
///
/// Liefert den rohen (ungefilterten) Pegel; Entprellung übernimmt
/// [`Debouncer`](crate::logic::Debouncer).
pub trait PushButton {
    /// `true` solange der Taster gedrückt ist
    fn is_pressed(&mut self) -> bool;
}

/// Trait für den Sendeweg zum Empfänger
///
/// Best-effort: `Ok(())` heißt nur "an den Funk-Stack übergeben",
/// nicht "empfangen". Das eigentliche Ergebnis kommt asynchron als
/// [`SendStatus`](crate::SendStatus).
pub trait CommandTransport {
    fn send(&mut self, peer: PeerAddress, frame: Frame) -> Result<(), TransportError>;
}

/// Trait für die Statusanzeige (aktuelle Effekt-Auswahl)
pub trait SelectionDisplay {
    /// Zeigt Effekt `index` von `count` mit Namen `name` an
    fn show(&mut self, index: usize, count: usize, name: &str) -> Result<(), DisplayError>;
}

/// Ohne Display läuft die Fernbedienung einfach weiter
impl<D: SelectionDisplay> SelectionDisplay for Option<D> {
    fn show(&mut self, index: usize, count: usize, name: &str) -> Result<(), DisplayError> {
        match self {
            Some(display) => display.show(index, count, name),
            None => Ok(()),
        }
    }
}

/// Trait für SmartLED Hardware-Zugriff (Status-LED)
///
/// Abstrahiert den Zugriff auf RGB LEDs (WS2812/Neopixel).
pub trait SmartLedWriter: Send {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}
