//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::SendStatus;

/// Nächster Index modulo `count`
///
/// ```
/// # use remote_core::logic::wrap_next;
/// assert_eq!(wrap_next(5, 7), 6);
/// assert_eq!(wrap_next(6, 7), 0);
/// ```
pub fn wrap_next(index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (index % count + 1) % count
}

/// Vorheriger Index modulo `count`
pub fn wrap_prev(index: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (index % count + count - 1) % count
}

/// Farbe der Status-LED für ein Sende-Ergebnis
pub fn status_color(status: SendStatus, brightness: u8) -> RGB8 {
    match status {
        SendStatus::Success => RGB8 {
            r: 0,
            g: brightness,
            b: 0,
        },
        SendStatus::Fail => RGB8 {
            r: brightness,
            g: 0,
            b: 0,
        },
    }
}

/// Entprellung nach dem Lock-out Verfahren
///
/// Ein Pegelwechsel wird sofort übernommen, sofern seit dem letzten
/// übernommenen Wechsel mindestens `interval_ms` vergangen sind. Prellen
/// innerhalb des Intervalls wird ignoriert.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    interval_ms: u64,
    stable_pressed: bool,
    last_change_ms: Option<u64>,
}

impl Debouncer {
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            stable_pressed: false,
            last_change_ms: None,
        }
    }

    /// Entprellter Zustand
    pub fn is_pressed(&self) -> bool {
        self.stable_pressed
    }

    /// Aktuellen Pegel als Ausgangszustand übernehmen, ohne Ereignis
    ///
    /// Ein beim Start schon gedrückter Taster löst erst nach dem
    /// Loslassen und erneuten Drücken aus.
    pub fn attach(&mut self, raw_pressed: bool) {
        self.stable_pressed = raw_pressed;
        self.last_change_ms = None;
    }

    /// Neuen Roh-Pegel einspeisen
    ///
    /// Gibt `true` genau dann zurück, wenn ein Tastendruck erkannt wurde
    /// (Flanke losgelassen → gedrückt).
    pub fn update(&mut self, raw_pressed: bool, now_ms: u64) -> bool {
        if raw_pressed == self.stable_pressed {
            return false;
        }

        let locked = self
            .last_change_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < self.interval_ms);
        if locked {
            return false;
        }

        self.stable_pressed = raw_pressed;
        self.last_change_ms = Some(now_ms);
        raw_pressed
    }
}
