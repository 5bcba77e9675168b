//! Zustandsmaschine der Fernbedienung
//!
//! [`Remote`] ist der einzige Besitzer von Taster, Sendeweg, Anzeige und
//! aktuellem Effekt-Index. Jeder Übergang läuft nach demselben Muster ab:
//! Index setzen → kodieren → senden → (bei Erfolg) Anzeige aktualisieren.
//! Sendefehler werden gemeldet, blockieren die Zustandsmaschine aber nicht.
//! Ein Anzeigefehler nach erfolgreichem Senden ist kein Fehler des
//! Übergangs; er steht in [`Dispatch::display`].

use crate::effects::EffectCatalog;
use crate::logic::Debouncer;
use crate::protocol::CommandMessage;
use crate::traits::{CommandTransport, DisplayError, PushButton, SelectionDisplay, TransportError};
use crate::types::PeerAddress;

/// Fehler eines Übergangs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemoteError {
    /// Index außerhalb des Katalogs, es wurde nichts gesendet
    InvalidEffect { index: usize, count: usize },
    /// Nachricht wurde nicht an den Funk-Stack übergeben
    Transport(TransportError),
}

impl From<TransportError> for RemoteError {
    fn from(e: TransportError) -> Self {
        RemoteError::Transport(e)
    }
}

/// Beschreibung einer erfolgreich übergebenen Nachricht (für Logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub message: CommandMessage,
    /// Effekt-Index nach dem Übergang
    pub effect: usize,
    /// Name des Effekts, `None` bei SetBrightness
    pub name: Option<&'static str>,
    /// Ergebnis der Anzeige-Aktualisierung
    pub display: Result<(), DisplayError>,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Dispatch {
    fn format(&self, fmt: defmt::Formatter) {
        match self.name {
            Some(name) => defmt::write!(
                fmt,
                "Dispatch {{ {}, effect: {} ({}) }}",
                self.message.command,
                self.effect,
                name
            ),
            None => defmt::write!(
                fmt,
                "Dispatch {{ {}, argument: {} }}",
                self.message.command,
                self.message.argument
            ),
        }
    }
}

/// Besitzender Kontext: Hardware + aktueller Effekt
pub struct Remote<B, T, D> {
    catalog: EffectCatalog,
    peer: PeerAddress,
    button: B,
    debouncer: Debouncer,
    transport: T,
    display: D,
    current: usize,
}

impl<B, T, D> Remote<B, T, D>
where
    B: PushButton,
    T: CommandTransport,
    D: SelectionDisplay,
{
    pub fn new(
        catalog: EffectCatalog,
        peer: PeerAddress,
        button: B,
        transport: T,
        display: D,
        debounce_ms: u64,
    ) -> Self {
        Self {
            catalog,
            peer,
            button,
            debouncer: Debouncer::new(debounce_ms),
            transport,
            display,
            current: 0,
        }
    }

    pub fn current_effect(&self) -> usize {
        self.current
    }

    pub fn current_name(&self) -> Option<&'static str> {
        self.catalog.name(self.current)
    }

    pub fn catalog(&self) -> &EffectCatalog {
        &self.catalog
    }

    pub fn peer(&self) -> PeerAddress {
        self.peer
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Startzustand erzwingen: Effekt 0 explizit senden
    ///
    /// Der Empfänger kann nach einem Neustart der Fernbedienung einen
    /// beliebigen Effekt aktiv haben, deshalb wird Index 0 immer gesendet.
    /// Ein beim Start gedrückter Taster zählt nicht als Tastendruck.
    pub fn start(&mut self) -> Result<Dispatch, RemoteError> {
        let raw = self.button.is_pressed();
        self.debouncer.attach(raw);
        self.current = 0;
        self.set_effect(0)
    }

    /// Ein Schleifendurchlauf: Taster entprellen, bei Druck weiterschalten
    ///
    /// `None` wenn kein Tastendruck erkannt wurde.
    pub fn poll(&mut self, now_ms: u64) -> Option<Result<Dispatch, RemoteError>> {
        let raw = self.button.is_pressed();
        if self.debouncer.update(raw, now_ms) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Nächster Effekt (mit Überlauf auf 0)
    pub fn advance(&mut self) -> Result<Dispatch, RemoteError> {
        let next = self.catalog.next(self.current);
        self.set_effect(next)
    }

    /// Vorheriger Effekt (mit Überlauf auf den letzten)
    pub fn retreat(&mut self) -> Result<Dispatch, RemoteError> {
        let prev = self.catalog.prev(self.current);
        self.set_effect(prev)
    }

    /// Effekt explizit setzen
    ///
    /// Ungültige Indizes werden lokal abgelehnt und nie gesendet. Bei einem
    /// Sendefehler bleibt der neue Index trotzdem aktiv.
    pub fn set_effect(&mut self, index: usize) -> Result<Dispatch, RemoteError> {
        let name = self.catalog.name(index).ok_or(RemoteError::InvalidEffect {
            index,
            count: self.catalog.len(),
        })?;

        // Katalog-Indizes passen immer in u32
        let message = CommandMessage::set_effect(index as u32);
        self.current = index;
        self.transport.send(self.peer, message.encode())?;
        let display = self.display.show(index, self.catalog.len(), name);

        Ok(Dispatch {
            message,
            effect: index,
            name: Some(name),
            display,
        })
    }

    /// Helligkeit setzen, Effekt-Zustand bleibt unverändert
    pub fn set_brightness(&mut self, level: u8) -> Result<Dispatch, RemoteError> {
        let message = CommandMessage::set_brightness(level);
        self.transport.send(self.peer, message.encode())?;

        Ok(Dispatch {
            message,
            effect: self.current,
            name: None,
            display: Ok(()),
        })
    }
}
