//! Die zentrale Road-Datenstruktur mit Kreuzungen und Abschnitten.

mod connectivity;

use super::{
    Junction, JunctionId, RoadError, Section, SectionId, VisualBackend, VisualHandle,
};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Container für das gesamte Strassennetz eines Edit-Dokuments.
///
/// Besitzt alle Kreuzungen und Abschnitte. Beide sind in Einfügereihenfolge
/// gespeichert und per ID in O(1) auffindbar.
#[derive(Debug, Clone, Default)]
pub struct Road {
    /// Alle Kreuzungen in Einfügereihenfolge, indexiert nach ID
    junctions: IndexMap<JunctionId, Junction>,
    /// Alle Abschnitte in Einfügereihenfolge, indexiert nach ID
    sections: IndexMap<SectionId, Section>,
}

impl Road {
    /// Erstellt eine leere Road
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt eine Kreuzung hinzu.
    ///
    /// Alle Nachbarn müssen bereits existieren; sie bekommen den Rückverweis,
    /// damit die Nachbarschaft symmetrisch bleibt.
    pub fn add_junction(&mut self, junction: Junction) -> Result<(), RoadError> {
        let id = junction.id;
        if self.junctions.contains_key(&id) {
            return Err(RoadError::DuplicateJunction(id));
        }
        for &neighbor in junction.neighbors() {
            if neighbor == id {
                return Err(RoadError::SelfConnection(id));
            }
            if !self.junctions.contains_key(&neighbor) {
                return Err(RoadError::JunctionNotFound(neighbor));
            }
        }
        let neighbors = junction.neighbors().to_vec();
        self.junctions.insert(id, junction);
        self.add_back_links(id, &neighbors);
        Ok(())
    }

    /// Fügt mehrere Kreuzungen auf einmal hinzu (alles oder nichts).
    ///
    /// Nachbarn dürfen auf Kreuzungen derselben Liste verweisen, auch auf
    /// spätere. Bei einem Fehler bleibt die Road unverändert und die Liste
    /// wird zurückgegeben, damit der Aufrufer ihre Visuals freigeben kann.
    pub fn add_junctions(
        &mut self,
        junctions: Vec<Junction>,
    ) -> Result<(), (RoadError, Vec<Junction>)> {
        if let Err(e) = self.check_batch(&junctions) {
            return Err((e, junctions));
        }

        let mut links: Vec<(JunctionId, Vec<JunctionId>)> = Vec::with_capacity(junctions.len());
        for junction in junctions {
            links.push((junction.id, junction.neighbors().to_vec()));
            self.junctions.insert(junction.id, junction);
        }
        for (id, neighbors) in links {
            self.add_back_links(id, &neighbors);
        }
        Ok(())
    }

    fn check_batch(&self, junctions: &[Junction]) -> Result<(), RoadError> {
        let mut batch: HashSet<JunctionId> = HashSet::with_capacity(junctions.len());
        for junction in junctions {
            if self.junctions.contains_key(&junction.id) || !batch.insert(junction.id) {
                return Err(RoadError::DuplicateJunction(junction.id));
            }
        }
        for junction in junctions {
            for &neighbor in junction.neighbors() {
                if neighbor == junction.id {
                    return Err(RoadError::SelfConnection(neighbor));
                }
                if !batch.contains(&neighbor) && !self.junctions.contains_key(&neighbor) {
                    return Err(RoadError::JunctionNotFound(neighbor));
                }
            }
        }
        Ok(())
    }

    fn add_back_links(&mut self, id: JunctionId, neighbors: &[JunctionId]) {
        for &neighbor in neighbors {
            if let Some(other) = self.junctions.get_mut(&neighbor) {
                other.add_neighbor(id);
            }
        }
    }

    /// Fügt einen Abschnitt hinzu. Beide Endpunkte müssen existieren.
    pub fn add_section(&mut self, section: Section) -> Result<(), RoadError> {
        if self.sections.contains_key(&section.id) {
            return Err(RoadError::DuplicateSection(section.id));
        }
        for end in [section.from, section.to] {
            if !self.junctions.contains_key(&end) {
                return Err(RoadError::JunctionNotFound(end));
            }
        }
        self.sections.insert(section.id, section);
        Ok(())
    }

    /// Verknüpft zwei Kreuzungen als Nachbarn (in beide Richtungen).
    ///
    /// Gibt `false` zurück, wenn sie bereits Nachbarn waren.
    pub fn link_neighbors(&mut self, a: JunctionId, b: JunctionId) -> Result<bool, RoadError> {
        if a == b {
            return Err(RoadError::SelfConnection(a));
        }
        for id in [a, b] {
            if !self.junctions.contains_key(&id) {
                return Err(RoadError::JunctionNotFound(id));
            }
        }
        let mut changed = false;
        if let Some(junction) = self.junctions.get_mut(&a) {
            changed |= junction.add_neighbor(b);
        }
        if let Some(junction) = self.junctions.get_mut(&b) {
            changed |= junction.add_neighbor(a);
        }
        Ok(changed)
    }

    /// Prüft ob zwei Kreuzungen Nachbarn sind.
    pub fn are_neighbors(&self, a: JunctionId, b: JunctionId) -> bool {
        self.junctions
            .get(&a)
            .is_some_and(|junction| junction.is_neighbor(b))
    }

    /// Findet eine Kreuzung per ID.
    pub fn junction(&self, id: JunctionId) -> Option<&Junction> {
        self.junctions.get(&id)
    }

    /// Findet einen Abschnitt per ID.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(&id)
    }

    /// Prüft ob eine Kreuzung existiert.
    pub fn contains_junction(&self, id: JunctionId) -> bool {
        self.junctions.contains_key(&id)
    }

    /// Findet den Abschnitt zwischen zwei Kreuzungen (richtungsunabhängig).
    pub fn find_section_between(&self, a: JunctionId, b: JunctionId) -> Option<&Section> {
        self.sections.values().find(|s| s.connects(a, b))
    }

    /// Entfernt eine Kreuzung.
    ///
    /// Löst alle Rückverweise der Nachbarn und gibt die Darstellung frei.
    /// Abschnitte bleiben unberührt (siehe `remove_sections_touching`).
    pub fn remove_junction(
        &mut self,
        id: JunctionId,
        visuals: &mut dyn VisualBackend,
    ) -> Result<Junction, RoadError> {
        let mut junction = self
            .junctions
            .shift_remove(&id)
            .ok_or(RoadError::JunctionNotFound(id))?;

        for neighbor in junction.neighbors() {
            if let Some(other) = self.junctions.get_mut(neighbor) {
                other.remove_neighbor(id);
            }
        }
        if let Some(handle) = junction.visual.take() {
            visuals.destroy_visual(handle);
        }
        Ok(junction)
    }

    /// Entfernt einen Abschnitt und gibt seine Darstellung frei.
    pub fn remove_section(
        &mut self,
        id: SectionId,
        visuals: &mut dyn VisualBackend,
    ) -> Result<Section, RoadError> {
        let mut section = self
            .sections
            .shift_remove(&id)
            .ok_or(RoadError::SectionNotFound(id))?;
        if let Some(handle) = section.visual.take() {
            visuals.destroy_visual(handle);
        }
        Ok(section)
    }

    /// Entfernt alle Abschnitte, deren `from` oder `to` gleich `junction` ist.
    pub fn remove_sections_touching(
        &mut self,
        junction: JunctionId,
        visuals: &mut dyn VisualBackend,
    ) -> Vec<SectionId> {
        let ids: Vec<SectionId> = self
            .sections
            .values()
            .filter(|s| s.touches(junction))
            .map(|s| s.id)
            .collect();

        for &id in &ids {
            if let Err(e) = self.remove_section(id, visuals) {
                log::warn!("Abschnitt {} nicht entfernbar: {}", id, e);
            }
        }
        ids
    }

    /// Entfernt alle Kreuzungen und gibt deren Darstellungen frei.
    pub fn clear_junctions(&mut self, visuals: &mut dyn VisualBackend) {
        for (_, junction) in self.junctions.drain(..) {
            if let Some(handle) = junction.visual {
                visuals.destroy_visual(handle);
            }
        }
    }

    /// Entfernt alle Abschnitte und gibt deren Darstellungen frei.
    pub fn clear_sections(&mut self, visuals: &mut dyn VisualBackend) {
        for (_, section) in self.sections.drain(..) {
            if let Some(handle) = section.visual {
                visuals.destroy_visual(handle);
            }
        }
    }

    /// Leert die gesamte Road.
    pub fn clear(&mut self, visuals: &mut dyn VisualBackend) {
        self.clear_sections(visuals);
        self.clear_junctions(visuals);
    }

    /// Ordnet ein Visual-Handle der zugehörigen Kreuzung zu (lineare Suche).
    pub fn identity_of_visual(&self, handle: VisualHandle) -> Option<JunctionId> {
        self.junctions
            .values()
            .find(|j| j.visual == Some(handle))
            .map(|j| j.id)
    }

    /// Iterator über alle Kreuzungen in Reihenfolge.
    pub fn junctions(&self) -> impl Iterator<Item = &Junction> {
        self.junctions.values()
    }

    /// Iterator über alle Abschnitte in Reihenfolge.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Gibt die Anzahl der Kreuzungen zurück
    pub fn junction_count(&self) -> usize {
        self.junctions.len()
    }

    /// Gibt die Anzahl der Abschnitte zurück
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// `true`, wenn keine Kreuzung existiert.
    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    /// ID der zuletzt eingefügten Kreuzung.
    pub fn last_junction_id(&self) -> Option<JunctionId> {
        self.junctions.last().map(|(id, _)| *id)
    }

    /// Höchste vergebene Kreuzungs-ID.
    pub fn highest_junction_id(&self) -> Option<JunctionId> {
        self.junctions.keys().max().copied()
    }
}
