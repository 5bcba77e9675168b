// Library-Root: Firmware-Module der Fernbedienung
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von remote-core
pub use remote_core::{Frame, LinkState, LinkStatus, PeerAddress, SendStatus, status_color};

use defmt::{info, warn};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;

use crate::config::{FRAME_QUEUE_SIZE, PEER_MAC};

/// Zustand des ESP-NOW Links (ESP-NOW-Task schreibt, Remote-Task liest)
pub static RADIO_LINK: LinkStatus = LinkStatus::new();

/// Kodierte Nachricht samt Ziel, unterwegs vom Remote-Task zum ESP-NOW-Task
#[derive(Clone, Copy)]
pub struct OutgoingFrame {
    pub peer: PeerAddress,
    pub frame: Frame,
}

/// Empfänger-Adresse aus der Build-Konfiguration
///
/// Eine ungültige REMOTE_PEER_MAC ist kein Grund, nicht zu starten:
/// dann wird per Broadcast gesendet.
pub fn configured_peer() -> PeerAddress {
    let Some(text) = PEER_MAC else {
        info!("Config: No REMOTE_PEER_MAC set, using broadcast");
        return PeerAddress::BROADCAST;
    };

    match PeerAddress::parse(text) {
        Ok(peer) => peer,
        Err(e) => {
            warn!(
                "Config: Invalid REMOTE_PEER_MAC '{}' ({}), using broadcast",
                text, e
            );
            PeerAddress::BROADCAST
        }
    }
}

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================

/// Sende-Queue Remote-Task → ESP-NOW-Task
pub type FrameChannel = Channel<NoopRawMutex, OutgoingFrame, FRAME_QUEUE_SIZE>;

/// Sender für kodierte Nachrichten (Remote-Task)
pub type FrameSender = Sender<'static, NoopRawMutex, OutgoingFrame, FRAME_QUEUE_SIZE>;

/// Receiver für kodierte Nachrichten (ESP-NOW-Task)
pub type FrameReceiver = Receiver<'static, NoopRawMutex, OutgoingFrame, FRAME_QUEUE_SIZE>;

/// Sende-Ergebnis ESP-NOW-Task → Status-LED
/// Signal statt Channel: nur das letzte Ergebnis ist interessant
pub type SendStatusSignal = Signal<NoopRawMutex, SendStatus>;
