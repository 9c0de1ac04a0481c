//! Stack der zuvor aktiven Kreuzungen mit Entfernen an beliebiger Stelle.

/// LIFO-Stack, aus dem Einträge auch mitten heraus entfernt werden können.
///
/// Wird für das Zurückspringen zur vorherigen Selektion genutzt und nach dem
/// Löschen einer Kreuzung von veralteten IDs bereinigt.
#[derive(Debug, Clone)]
pub struct SelectionHistory<T> {
    items: Vec<T>,
}

impl<T> Default for SelectionHistory<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Copy + PartialEq> SelectionHistory<T> {
    /// Erstellt einen leeren Verlauf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt einen Eintrag oben auf den Stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Entfernt den obersten Eintrag. `None` bei leerem Stack.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Oberster Eintrag ohne Entfernen. `None` bei leerem Stack.
    pub fn peek(&self) -> Option<T> {
        self.items.last().copied()
    }

    /// Entfernt das erste Vorkommen von `item` (von unten gezählt).
    ///
    /// Die Reihenfolge der übrigen Einträge bleibt erhalten.
    pub fn remove(&mut self, item: T) -> bool {
        match self.items.iter().position(|x| *x == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Entfernt alle Vorkommen von `item` und gibt deren Anzahl zurück.
    pub fn remove_all(&mut self, item: T) -> usize {
        let before = self.items.len();
        self.items.retain(|x| *x != item);
        before - self.items.len()
    }

    /// Leert den Stack.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true`, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Prüft ob `item` irgendwo im Stack liegt.
    pub fn contains(&self, item: T) -> bool {
        self.items.contains(&item)
    }
}
