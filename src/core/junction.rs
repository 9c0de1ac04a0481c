//! Repräsentiert eine Kreuzung (Knoten) im Strassennetz.

use super::{JunctionId, VisualHandle};
use glam::Vec3;

/// Eine Kreuzung mit Position und Nachbarschaftsliste.
///
/// Nachbarn werden nur über ihre ID referenziert; die `Road` hält die
/// Beziehung symmetrisch.
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    /// Eindeutige ID innerhalb der Road
    pub id: JunctionId,
    /// Weltposition
    pub position: Vec3,
    /// IDs der Nachbar-Kreuzungen (Reihenfolge = Speicherreihenfolge)
    neighbors: Vec<JunctionId>,
    /// Darstellung beim Render-Kollaborateur
    pub visual: Option<VisualHandle>,
}

impl Junction {
    /// Erstellt eine Kreuzung ohne Nachbarn und ohne Darstellung.
    pub fn new(id: JunctionId, position: Vec3) -> Self {
        Self {
            id,
            position,
            neighbors: Vec::new(),
            visual: None,
        }
    }

    /// Erstellt eine Kreuzung mit vorgegebener Nachbarliste (z.B. beim Laden).
    pub fn with_neighbors(id: JunctionId, position: Vec3, neighbors: Vec<JunctionId>) -> Self {
        Self {
            id,
            position,
            neighbors,
            visual: None,
        }
    }

    /// Nachbar-IDs in aktueller Reihenfolge.
    pub fn neighbors(&self) -> &[JunctionId] {
        &self.neighbors
    }

    /// Anzahl der Nachbarn.
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Prüft ob `other` ein Nachbar ist.
    pub fn is_neighbor(&self, other: JunctionId) -> bool {
        self.neighbors.contains(&other)
    }

    /// Hängt `other` an die Nachbarliste an (keine Duplikate).
    pub(crate) fn add_neighbor(&mut self, other: JunctionId) -> bool {
        if self.is_neighbor(other) {
            return false;
        }
        self.neighbors.push(other);
        true
    }

    /// Entfernt `other` aus der Nachbarliste.
    pub(crate) fn remove_neighbor(&mut self, other: JunctionId) -> bool {
        let before = self.neighbors.len();
        self.neighbors.retain(|n| *n != other);
        self.neighbors.len() < before
    }
}
