//! Effekt-Katalog
//!
//! Feste, geordnete Liste der Effekte auf dem Empfänger. Die Bedeutung
//! eines Index ist rein positionell: Reihenfolge und Länge müssen mit der
//! Effekt-Tabelle des NightDriverStrip-Empfängers übereinstimmen.

/// Effekt-Namen des PLATECOVER-Projekts auf dem Empfänger
pub const NIGHTDRIVER_EFFECTS: [&str; 7] = [
    "Solid White",
    "Solid Red",
    "Solid Amber",
    "Fire Effect",
    "Rainbow Fill",
    "Color Meteors",
    "Off",
];

/// Lookup-Tabelle Index → Effekt-Name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectCatalog {
    names: &'static [&'static str],
}

impl EffectCatalog {
    /// Katalog über eine statische Namensliste
    ///
    /// Eine leere Liste ist erlaubt, dann ist kein Index gültig und
    /// `next`/`prev` bleiben bei 0.
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    pub const fn len(&self) -> usize {
        self.names.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Gültiger Index? Nur gültige Indizes dürfen gesendet werden.
    pub const fn contains(&self, index: usize) -> bool {
        index < self.names.len()
    }

    /// Anzeigename des Effekts, `None` bei `index >= len()`
    ///
    /// ```
    /// # use remote_core::EffectCatalog;
    /// let catalog = EffectCatalog::default();
    /// assert_eq!(catalog.name(3), Some("Fire Effect"));
    /// assert_eq!(catalog.name(7), None);
    /// ```
    pub fn name(&self, index: usize) -> Option<&'static str> {
        self.names.get(index).copied()
    }

    /// Nächster Index, läuft vom letzten Effekt auf 0 über
    pub fn next(&self, index: usize) -> usize {
        crate::logic::wrap_next(index, self.len())
    }

    /// Vorheriger Index, läuft von 0 auf den letzten Effekt über
    pub fn prev(&self, index: usize) -> usize {
        crate::logic::wrap_prev(index, self.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &'static str)> + '_ {
        self.names.iter().copied().enumerate()
    }
}

impl Default for EffectCatalog {
    fn default() -> Self {
        Self::new(&NIGHTDRIVER_EFFECTS)
    }
}
