// Sendeweg Remote-Task → ESP-NOW-Task
//
// Der Remote-Task wartet nie auf das Funk-Ergebnis: die Nachricht wird nur
// in die Queue gelegt, der ESP-NOW-Task sendet und meldet den Status.

use remote_core::{CommandTransport, Frame, PeerAddress, TransportError};

use crate::{FrameSender, OutgoingFrame};

pub struct ChannelTransport {
    sender: FrameSender,
}

impl ChannelTransport {
    pub fn new(sender: FrameSender) -> Self {
        Self { sender }
    }
}

impl CommandTransport for ChannelTransport {
    fn send(&mut self, peer: PeerAddress, frame: Frame) -> Result<(), TransportError> {
        self.sender
            .try_send(OutgoingFrame { peer, frame })
            .map_err(|_| TransportError::QueueFull)
    }
}
