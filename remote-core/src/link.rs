//! Zustand des Funk-Links
//!
//! Der Funk wird asynchron hochgefahren. Bis das Ergebnis feststeht, werden
//! Nachrichten normal übergeben; ist der Funk endgültig ausgefallen, lehnt
//! [`LinkGate`] jede Nachricht sofort mit `TransportError::SendFailed` ab.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::protocol::Frame;
use crate::traits::{CommandTransport, TransportError};
use crate::types::PeerAddress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LinkState {
    /// Initialisierung läuft noch
    Starting = 0,
    Online = 1,
    /// Initialisierung fehlgeschlagen, kein Senden möglich
    Offline = 2,
}

/// Von Funk-Task geschriebener, von Remote-Task gelesener Link-Zustand
///
/// Kann als `static` angelegt werden.
pub struct LinkStatus {
    state: AtomicU8,
}

impl LinkStatus {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(LinkState::Starting as u8),
        }
    }

    pub fn set(&self, state: LinkState) {
        self.state.store(state as u8, Ordering::Release);
    }

    pub fn get(&self) -> LinkState {
        match self.state.load(Ordering::Acquire) {
            1 => LinkState::Online,
            2 => LinkState::Offline,
            _ => LinkState::Starting,
        }
    }
}

impl Default for LinkStatus {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport-Wrapper, der bei ausgefallenem Funk nichts mehr übergibt
pub struct LinkGate<'a, T> {
    inner: T,
    status: &'a LinkStatus,
}

impl<'a, T: CommandTransport> LinkGate<'a, T> {
    pub fn new(inner: T, status: &'a LinkStatus) -> Self {
        Self { inner, status }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: CommandTransport> CommandTransport for LinkGate<'_, T> {
    fn send(&mut self, peer: PeerAddress, frame: Frame) -> Result<(), TransportError> {
        if self.status.get() == LinkState::Offline {
            return Err(TransportError::SendFailed);
        }
        self.inner.send(peer, frame)
    }
}
