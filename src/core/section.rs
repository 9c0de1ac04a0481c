//! Repräsentiert einen Abschnitt (Kante) zwischen zwei Kreuzungen.

use super::{JunctionId, SectionId, VisualHandle};
use glam::Vec3;

/// Ein abgeleiteter Kanten-Datensatz zwischen zwei Kreuzungen
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Eindeutige ID innerhalb der Road
    pub id: SectionId,
    /// Start-Kreuzung
    pub from: JunctionId,
    /// End-Kreuzung
    pub to: JunctionId,
    /// Darstellung beim Render-Kollaborateur
    pub visual: Option<VisualHandle>,
}

impl Section {
    /// Erstellt einen Abschnitt ohne Darstellung.
    pub fn new(id: SectionId, from: JunctionId, to: JunctionId) -> Self {
        Self {
            id,
            from,
            to,
            visual: None,
        }
    }

    /// Prüft ob der Abschnitt an `junction` hängt.
    pub fn touches(&self, junction: JunctionId) -> bool {
        self.from == junction || self.to == junction
    }

    /// Prüft ob der Abschnitt `a` und `b` verbindet (richtungsunabhängig).
    pub fn connects(&self, a: JunctionId, b: JunctionId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Geometrie eines Abschnitts für den Render-Kollaborateur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    /// Startposition
    pub from: Vec3,
    /// Endposition
    pub to: Vec3,
    /// Mittelpunkt (Ankerpunkt der Darstellung)
    pub midpoint: Vec3,
    /// Länge (Skalierung entlang der Blickrichtung)
    pub length: f32,
}

impl SectionGeometry {
    /// Berechnet die Geometrie zwischen zwei Positionen.
    pub fn between(from: Vec3, to: Vec3) -> Self {
        Self {
            from,
            to,
            midpoint: (from + to) * 0.5,
            length: from.distance(to),
        }
    }

    /// Normierte Richtung `from → to` (`None` bei Länge 0).
    pub fn direction(&self) -> Option<Vec3> {
        (self.to - self.from).try_normalize()
    }
}
