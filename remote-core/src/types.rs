//! Core Types für die Fernbedienung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

/// 6-Byte Hardware-Adresse (MAC) des Empfängers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerAddress(pub [u8; 6]);

/// Fehler beim Parsen einer MAC-Adresse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressError {
    /// Nicht genau 6 durch `:` oder `-` getrennte Oktette
    WrongOctetCount,
    InvalidHex,
}

impl PeerAddress {
    /// Broadcast: alle lauschenden Empfänger reagieren
    pub const BROADCAST: Self = Self([0xFF; 6]);

    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> &[u8; 6] {
        &self.0
    }

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Parst `"AA:BB:CC:DD:EE:FF"` (oder mit `-` getrennt)
    ///
    /// ```
    /// # use remote_core::PeerAddress;
    /// let peer = PeerAddress::parse("24:6f:28:00:11:aa").unwrap();
    /// assert_eq!(peer.octets(), &[0x24, 0x6F, 0x28, 0x00, 0x11, 0xAA]);
    /// ```
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let mut octets = [0u8; 6];
        let mut parts = text.trim().split([':', '-']);

        for octet in octets.iter_mut() {
            let part = parts.next().ok_or(AddressError::WrongOctetCount)?;
            if part.len() != 2 {
                return Err(AddressError::InvalidHex);
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| AddressError::InvalidHex)?;
        }

        if parts.next().is_some() {
            return Err(AddressError::WrongOctetCount);
        }
        Ok(Self(octets))
    }
}

impl Default for PeerAddress {
    fn default() -> Self {
        Self::BROADCAST
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

/// Ergebnis eines einzelnen Sendevorgangs, vom Funk-Stack asynchron gemeldet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendStatus {
    Success,
    Fail,
}

impl SendStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            SendStatus::Success => "Success",
            SendStatus::Fail => "Fail",
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PeerAddress {
    fn format(&self, fmt: defmt::Formatter) {
        let [a, b, c, d, e, g] = self.0;
        defmt::write!(
            fmt,
            "{=u8:02X}:{=u8:02X}:{=u8:02X}:{=u8:02X}:{=u8:02X}:{=u8:02X}",
            a,
            b,
            c,
            d,
            e,
            g
        )
    }
}
