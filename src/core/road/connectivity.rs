//! Erreichbarkeit und Konsistenz der Nachbarschaftsbeziehungen.

use super::Road;
use crate::core::JunctionId;
use std::collections::{HashSet, VecDeque};

impl Road {
    /// Breitensuche über die Nachbarschaft ab `start`.
    ///
    /// Liefert alle erreichbaren Kreuzungen inklusive `start`, jede genau einmal.
    /// `None`, wenn `start` nicht existiert.
    pub fn reachable_from(&self, start: JunctionId) -> Option<HashSet<JunctionId>> {
        if !self.junctions.contains_key(&start) {
            return None;
        }

        let mut visited: HashSet<JunctionId> = HashSet::new();
        let mut queue: VecDeque<JunctionId> = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let Some(junction) = self.junctions.get(&current) else {
                continue;
            };
            for &neighbor in junction.neighbors() {
                if self.junctions.contains_key(&neighbor) && visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        Some(visited)
    }

    /// Prüft die Symmetrie-Invariante: Ist B Nachbar von A, ist auch A Nachbar von B.
    pub fn is_symmetric(&self) -> bool {
        self.junctions.values().all(|junction| {
            junction.neighbors().iter().all(|neighbor| {
                self.junctions
                    .get(neighbor)
                    .is_some_and(|other| other.is_neighbor(junction.id))
            })
        })
    }

    /// Prüft, dass jeder Abschnitt auf zwei existierende Kreuzungen zeigt.
    pub fn sections_are_consistent(&self) -> bool {
        self.sections.values().all(|section| {
            self.junctions.contains_key(&section.from) && self.junctions.contains_key(&section.to)
        })
    }
}
