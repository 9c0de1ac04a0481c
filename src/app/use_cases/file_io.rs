//! Use-Case-Funktionen für Speichern und Laden.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use super::{editing, session as session_uc};
use crate::app::{EditSession, SessionMode};
use crate::core::{Junction, JunctionId, RoadError};
use crate::persistence::{read_road, write_road, LoadedJunction};
use anyhow::Context;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Schreibt die Road in die Speicherdatei und gibt deren Pfad zurück.
pub fn save_road(session: &EditSession) -> anyhow::Result<PathBuf> {
    let path = session.storage_path().ok_or(RoadError::StorageUnavailable)?;
    let file = File::create(&path)
        .with_context(|| format!("Speicherdatei nicht anlegbar: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_road(&session.road, &mut writer)
        .with_context(|| format!("Speichern nach {} fehlgeschlagen", path.display()))?;

    log::info!(
        "Road gespeichert: {} Kreuzungen nach {}",
        session.road.junction_count(),
        path.display()
    );
    Ok(path)
}

/// Lädt die Speicherdatei und ersetzt die aktuelle Road.
///
/// Die Datei wird vollständig gelesen und geprüft, bevor die Road angefasst
/// wird. Bei einem Fehler bleibt die Session unverändert.
pub fn load_road(session: &mut EditSession) -> anyhow::Result<usize> {
    let path = session.storage_path().ok_or(RoadError::StorageUnavailable)?;
    let file = File::open(&path)
        .with_context(|| format!("Speicherdatei nicht lesbar: {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let loaded = read_road(&mut reader)
        .with_context(|| format!("Laden aus {} fehlgeschlagen", path.display()))?;

    let count = loaded.len();
    apply_loaded_road(session, loaded)?;
    log::info!(
        "Road geladen: {} Kreuzungen, {} Abschnitte aus {}",
        session.road.junction_count(),
        session.road.section_count(),
        path.display()
    );
    Ok(count)
}

/// Ersetzt die Road durch gelesene Kreuzungen und leitet die Abschnitte ab.
///
/// Danach ist die Session im Zustand `Editing`, selektiert ist die höchste
/// geladene ID, der Kreuzungs-Generator läuft ab dieser ID weiter.
pub fn apply_loaded_road(
    session: &mut EditSession,
    loaded: Vec<LoadedJunction>,
) -> Result<(), RoadError> {
    session.road.clear(session.visuals.as_mut());
    session.selection.clear();
    session.section_ids.reset();

    if loaded.is_empty() {
        log::warn!("Speicherdatei enthält keine Kreuzungen, starte neu");
        session.junction_ids.reset();
        let origin = session.options.start_position();
        session_uc::start_edit(session, origin)?;
        return Ok(());
    }

    let junctions: Vec<Junction> = loaded
        .into_iter()
        .map(|entry| {
            let mut junction = Junction::with_neighbors(entry.id, entry.position, entry.neighbors);
            junction.visual = Some(session.visuals.create_junction_visual(entry.position));
            junction
        })
        .collect();

    // Vorwärtsverweise auf spätere Kreuzungen sind erlaubt, daher als Ganzes einfügen
    if let Err((e, rejected)) = session.road.add_junctions(junctions) {
        for handle in rejected.iter().filter_map(|j| j.visual) {
            session.visuals.destroy_visual(handle);
        }
        return Err(e);
    }

    let sections = reconstruct_sections(session)?;

    let highest = session
        .road
        .highest_junction_id()
        .ok_or(RoadError::NoSelection)?;
    session.junction_ids.set_current(highest);
    session.selection.current = Some(highest);
    session.mode = SessionMode::Editing;

    log::debug!(
        "{} Abschnitte aus Nachbarschaft abgeleitet, Selektion {}",
        sections,
        highest
    );
    debug_assert!(session.road.is_symmetric());
    Ok(())
}

/// Leitet genau einen Abschnitt je ungerichteter Nachbarschaft ab.
fn reconstruct_sections(session: &mut EditSession) -> Result<usize, RoadError> {
    let mut seen: HashSet<(JunctionId, JunctionId)> = HashSet::new();
    let mut pairs: Vec<(JunctionId, JunctionId)> = Vec::new();
    for junction in session.road.junctions() {
        for &neighbor in junction.neighbors() {
            let key = (junction.id.min(neighbor), junction.id.max(neighbor));
            if seen.insert(key) {
                pairs.push((junction.id, neighbor));
            }
        }
    }

    for &(from, to) in &pairs {
        editing::insert_section(session, from, to)?;
    }
    Ok(pairs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HeadlessVisuals;
    use crate::shared::EditorOptions;
    use glam::Vec3;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn loaded(id: JunctionId, neighbors: Vec<JunctionId>) -> LoadedJunction {
        LoadedJunction {
            id,
            position: Vec3::new(id as f32, 0.0, 0.0),
            neighbors,
        }
    }

    #[test]
    fn test_apply_creates_one_section_per_edge() {
        let mut session = EditSession::headless(EditorOptions::default()).expect("Session");
        apply_loaded_road(
            &mut session,
            vec![
                loaded(0, vec![1, 2]),
                loaded(1, vec![0, 2]),
                loaded(2, vec![0, 1]),
            ],
        )
        .expect("Anwenden");

        assert_eq!(session.road.section_count(), 3);
        assert!(session.road.sections_are_consistent());
        assert!(session.is_editing());
        assert_eq!(session.current_selection(), Some(2));
    }

    #[test]
    fn test_apply_resumes_numbering_past_highest_id() {
        let mut session = EditSession::headless(EditorOptions::default()).expect("Session");
        apply_loaded_road(&mut session, vec![loaded(9, vec![4]), loaded(4, vec![9])])
            .expect("Anwenden");

        let next = editing::add_junction_at(&mut session, Vec3::new(9.0, 0.0, 1.0))
            .expect("Kreuzung");
        assert_eq!(next, 10);
    }

    #[test]
    fn test_apply_rejects_unknown_neighbor_and_releases_visuals() {
        let visuals = Rc::new(RefCell::new(HeadlessVisuals::new()));
        let mut session = EditSession::builder()
            .visuals(Box::new(visuals.clone()))
            .build()
            .expect("Session");

        let err = apply_loaded_road(&mut session, vec![loaded(0, vec![1]), loaded(1, vec![6])])
            .expect_err("unbekannter Nachbar");

        assert!(matches!(err, RoadError::JunctionNotFound(6)));
        assert!(session.road.is_empty());
        assert_eq!(visuals.borrow().live_count(), 0);
    }

    #[test]
    fn test_apply_empty_reseeds_start_junction() {
        let mut session = EditSession::headless(EditorOptions::default()).expect("Session");
        apply_loaded_road(&mut session, Vec::new()).expect("Anwenden");

        assert_eq!(session.road.junction_count(), 1);
        let junction = session.road.junction(0).expect("Startkreuzung");
        assert_eq!(junction.position, Vec3::new(250.0, 0.0, -200.0));
    }

    #[test]
    fn test_save_without_storage_dir_is_unavailable() {
        let session = EditSession::builder()
            .visuals(Box::new(HeadlessVisuals::new()))
            .build()
            .expect("Session");
        let err = save_road(&session).expect_err("kein Verzeichnis");
        assert!(matches!(
            err.downcast_ref::<RoadError>(),
            Some(RoadError::StorageUnavailable)
        ));
    }
}
