//! ESP-NOW Kommando-Protokoll
//!
//! Feste 6-Byte Nachricht, Byte für Byte kompatibel mit dem Empfänger:
//!
//! | Offset | Breite | Feld     | Inhalt                             |
//! |--------|--------|----------|------------------------------------|
//! | 0      | 1      | size     | Gesamtlänge der Nachricht (6)      |
//! | 1      | 1      | command  | Opcode, siehe [`Command`]          |
//! | 2      | 4      | argument | u32 little-endian (Index/Helligkeit) |
//!
//! Die Felder werden explizit serialisiert, nie über das Speicher-Layout
//! eines Structs.

/// Länge jeder kodierten Nachricht in Bytes
pub const MESSAGE_LEN: usize = 6;

/// Reservierter Opcode, den kein gültiges Kommando verwendet
pub const INVALID_OPCODE: u8 = 4;

/// Kodierte Nachricht, fertig zum Senden
pub type Frame = [u8; MESSAGE_LEN];

/// Opcode im `command`-Feld
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Command {
    NextEffect = 0,
    PrevEffect = 1,
    SetEffect = 2,
    SetBrightness = 3,
}

impl Command {
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Command {
    type Error = DecodeError;

    fn try_from(opcode: u8) -> Result<Self, Self::Error> {
        match opcode {
            0 => Ok(Self::NextEffect),
            1 => Ok(Self::PrevEffect),
            2 => Ok(Self::SetEffect),
            3 => Ok(Self::SetBrightness),
            other => Err(DecodeError::UnknownCommand(other)),
        }
    }
}

/// Fehler beim Dekodieren einer empfangenen Nachricht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Puffer hat nicht genau `MESSAGE_LEN` Bytes
    WrongLength(usize),
    /// `size`-Feld widerspricht der tatsächlichen Länge
    SizeMismatch(u8),
    UnknownCommand(u8),
}

/// Kommando-Nachricht: Opcode + 32-Bit Argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandMessage {
    pub command: Command,
    pub argument: u32,
}

impl CommandMessage {
    pub const fn new(command: Command, argument: u32) -> Self {
        Self { command, argument }
    }

    pub const fn set_effect(index: u32) -> Self {
        Self::new(Command::SetEffect, index)
    }

    pub const fn set_brightness(level: u8) -> Self {
        Self::new(Command::SetBrightness, level as u32)
    }

    pub const fn next_effect() -> Self {
        Self::new(Command::NextEffect, 0)
    }

    pub const fn prev_effect() -> Self {
        Self::new(Command::PrevEffect, 0)
    }

    /// Serialisiert die Nachricht in das feste Wire-Format
    ///
    /// ```
    /// # use remote_core::CommandMessage;
    /// let frame = CommandMessage::set_effect(3).encode();
    /// assert_eq!(frame, [6, 2, 3, 0, 0, 0]);
    /// ```
    pub const fn encode(&self) -> Frame {
        let arg = self.argument.to_le_bytes();
        [
            MESSAGE_LEN as u8,
            self.command.opcode(),
            arg[0],
            arg[1],
            arg[2],
            arg[3],
        ]
    }

    /// Gegenstück zu `encode()` auf Empfängerseite
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let frame: &Frame = bytes
            .try_into()
            .map_err(|_| DecodeError::WrongLength(bytes.len()))?;

        if frame[0] as usize != MESSAGE_LEN {
            return Err(DecodeError::SizeMismatch(frame[0]));
        }

        let command = Command::try_from(frame[1])?;
        let argument = u32::from_le_bytes([frame[2], frame[3], frame[4], frame[5]]);

        Ok(Self { command, argument })
    }
}

/// SetEffect-Nachricht kodieren
///
/// Der Aufrufer prüft vorher `index < catalog.len()`.
pub const fn encode_set_effect(index: u32) -> Frame {
    CommandMessage::set_effect(index).encode()
}

/// SetBrightness-Nachricht kodieren (0-255 im 32-Bit Feld)
pub const fn encode_set_brightness(level: u8) -> Frame {
    CommandMessage::set_brightness(level).encode()
}

pub const fn encode_next_effect() -> Frame {
    CommandMessage::next_effect().encode()
}

pub const fn encode_prev_effect() -> Frame {
    CommandMessage::prev_effect().encode()
}
