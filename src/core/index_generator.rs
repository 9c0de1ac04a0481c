//! Vergibt fortlaufende, eindeutige IDs für Kreuzungen und Abschnitte.

/// Monoton steigender ID-Zähler.
///
/// Die erste ID ist `0`. Nach `set_current(n)` liefert `next()` den Wert `n + 1`,
/// damit nach dem Laden hinter den wiederhergestellten IDs weitergezählt wird.
#[derive(Debug, Clone, Default)]
pub struct IndexGenerator {
    last: Option<u32>,
}

impl IndexGenerator {
    /// Erstellt einen frischen Zähler.
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Liefert die nächste freie ID.
    pub fn next(&mut self) -> u32 {
        let id = self.last.map_or(0, |last| last + 1);
        self.last = Some(id);
        id
    }

    /// Setzt den Zähler so, dass der nächste Aufruf `current + 1` liefert.
    pub fn set_current(&mut self, current: u32) {
        self.last = Some(current);
    }

    /// Zuletzt vergebene oder gesetzte ID.
    pub fn current(&self) -> Option<u32> {
        self.last
    }

    /// Setzt den Zähler zurück (nächste ID ist wieder `0`).
    pub fn reset(&mut self) {
        self.last = None;
    }
}
