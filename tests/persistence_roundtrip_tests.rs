//! Integrationstests für Speichern und Laden über die Speicherdatei.

use glam::Vec3;
use road_graph_editor::{
    AppController, AppIntent, EditSession, EditorOptions, FormatError, HeadlessVisuals, Road,
    RoadError,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// Eigenes Datenverzeichnis je Test, damit parallele Tests sich nicht stören.
fn temp_storage_dir(name: &str) -> PathBuf {
    let n = NEXT_DIR.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "road_graph_editor_{}_{}_{}",
        name,
        std::process::id(),
        n
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegbar");
    dir
}

fn session_in(dir: &Path) -> EditSession {
    let _ = env_logger::builder().is_test(true).try_init();
    EditSession::builder()
        .options(EditorOptions::default())
        .visuals(Box::new(HeadlessVisuals::new()))
        .storage_dir(dir)
        .build()
        .expect("Session sollte sich bauen lassen")
}

fn run(controller: &mut AppController, session: &mut EditSession, intent: AppIntent) {
    controller
        .handle_intent(session, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn click(controller: &mut AppController, session: &mut EditSession, world_pos: Vec3) {
    run(
        controller,
        session,
        AppIntent::PrimaryClick {
            world_pos,
            picked: None,
        },
    );
}

/// Baut ein Dreieck 0-1-2 plus Stichstrasse 2-3.
fn build_network(controller: &mut AppController, session: &mut EditSession) {
    run(
        controller,
        session,
        AppIntent::StartEditRequested {
            origin: Some(Vec3::ZERO),
        },
    );
    click(controller, session, Vec3::new(40.0, 1.0, 0.0));
    click(controller, session, Vec3::new(40.0, 2.0, 40.0));
    let picked = session.road.junction(0).and_then(|j| j.visual);
    run(
        controller,
        session,
        AppIntent::PrimaryClick {
            world_pos: Vec3::ZERO,
            picked,
        },
    );
    let picked = session.road.junction(2).and_then(|j| j.visual);
    run(controller, session, AppIntent::SecondaryClick { picked });
    click(controller, session, Vec3::new(80.0, 2.5, 40.0));
}

fn adjacency(road: &Road) -> BTreeSet<(u32, u32)> {
    road.junctions()
        .flat_map(|j| j.neighbors().iter().map(move |n| (j.id, *n)))
        .collect()
}

#[test]
fn test_save_then_load_restores_graph() {
    let dir = temp_storage_dir("roundtrip");
    let mut controller = AppController::new();
    let mut session = session_in(&dir);
    build_network(&mut controller, &mut session);
    assert_eq!(session.road.junction_count(), 4);
    assert_eq!(session.road.section_count(), 4);

    assert!(session.command_log.has_unsaved_edits());
    run(&mut controller, &mut session, AppIntent::SaveRequested);
    assert!(dir.join("road_save").exists());
    assert!(!session.command_log.has_unsaved_edits());

    let mut restored = session_in(&dir);
    run(
        &mut controller,
        &mut restored,
        AppIntent::StartEditRequested { origin: None },
    );
    run(&mut controller, &mut restored, AppIntent::LoadRequested);

    let ids: Vec<u32> = restored.road.junctions().map(|j| j.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    for (saved, loaded) in session.road.junctions().zip(restored.road.junctions()) {
        assert_eq!(saved.position, loaded.position);
        assert_eq!(saved.neighbors(), loaded.neighbors());
    }
    assert_eq!(adjacency(&session.road), adjacency(&restored.road));
    assert!(restored.road.is_symmetric());

    // Genau ein Abschnitt je ungerichteter Kante
    assert_eq!(restored.road.section_count(), 4);
    assert!(restored.road.sections_are_consistent());

    assert!(restored.is_editing());
    assert_eq!(restored.current_selection(), Some(3));
    assert!(restored.selection.history.is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_numbering_continues_after_load() {
    let dir = temp_storage_dir("numbering");
    let mut controller = AppController::new();
    let mut session = session_in(&dir);
    build_network(&mut controller, &mut session);
    run(&mut controller, &mut session, AppIntent::SaveRequested);

    run(&mut controller, &mut session, AppIntent::ClearRequested);
    run(&mut controller, &mut session, AppIntent::LoadRequested);
    click(&mut controller, &mut session, Vec3::new(90.0, 2.5, 40.0));

    assert!(session.road.contains_junction(4));
    assert!(session.road.are_neighbors(3, 4));
    assert_eq!(session.road.section_count(), 5);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_load_replaces_visuals() {
    let dir = temp_storage_dir("visuals");
    let mut controller = AppController::new();
    let mut session = session_in(&dir);
    build_network(&mut controller, &mut session);
    run(&mut controller, &mut session, AppIntent::SaveRequested);
    run(&mut controller, &mut session, AppIntent::LoadRequested);

    let junction_handles: Vec<_> = session.road.junctions().filter_map(|j| j.visual).collect();
    let section_handles: Vec<_> = session.road.sections().filter_map(|s| s.visual).collect();
    assert_eq!(junction_handles.len(), 4);
    assert_eq!(section_handles.len(), 4);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_file_leaves_session_untouched() {
    let dir = temp_storage_dir("corrupt");
    let mut controller = AppController::new();
    let mut session = session_in(&dir);
    build_network(&mut controller, &mut session);

    // Eine Kreuzung, deren Nachbar 9 nicht in der Datei steht
    let mut bytes = 1i32.to_le_bytes().to_vec();
    for value in [0.0f32, 0.0, 0.0] {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    for value in [0i32, 1, 9] {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    std::fs::write(dir.join("road_save"), &bytes).expect("Datei schreibbar");

    let err = controller
        .handle_intent(&mut session, AppIntent::LoadRequested)
        .expect_err("Laden sollte scheitern");
    assert!(matches!(
        err.downcast_ref::<RoadError>(),
        Some(RoadError::Format(FormatError::UnknownNeighbor {
            junction: 0,
            neighbor: 9
        }))
    ));

    assert_eq!(session.road.junction_count(), 4);
    assert_eq!(session.road.section_count(), 4);
    assert_eq!(session.current_selection(), Some(3));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_truncated_file_is_format_error() {
    let dir = temp_storage_dir("truncated");
    let mut controller = AppController::new();
    let mut session = session_in(&dir);
    build_network(&mut controller, &mut session);
    run(&mut controller, &mut session, AppIntent::SaveRequested);

    let path = dir.join("road_save");
    let bytes = std::fs::read(&path).expect("Datei lesbar");
    std::fs::write(&path, &bytes[..bytes.len() - 2]).expect("Datei schreibbar");

    let err = controller
        .handle_intent(&mut session, AppIntent::LoadRequested)
        .expect_err("Laden sollte scheitern");
    assert!(matches!(
        err.downcast_ref::<RoadError>(),
        Some(RoadError::Format(FormatError::Truncated(_)))
    ));
    assert_eq!(session.road.junction_count(), 4);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = temp_storage_dir("missing");
    let mut controller = AppController::new();
    let mut session = session_in(&dir);
    run(
        &mut controller,
        &mut session,
        AppIntent::StartEditRequested { origin: None },
    );

    let err = controller
        .handle_intent(&mut session, AppIntent::LoadRequested)
        .expect_err("Laden sollte scheitern");
    assert!(err.downcast_ref::<std::io::Error>().is_some());
    assert_eq!(session.road.junction_count(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_save_file_reseeds_start_junction() {
    let dir = temp_storage_dir("empty");
    std::fs::write(dir.join("road_save"), 0i32.to_le_bytes()).expect("Datei schreibbar");

    let mut controller = AppController::new();
    let mut session = session_in(&dir);
    run(
        &mut controller,
        &mut session,
        AppIntent::StartEditRequested {
            origin: Some(Vec3::ONE),
        },
    );
    run(&mut controller, &mut session, AppIntent::LoadRequested);

    assert_eq!(session.road.junction_count(), 1);
    let current = session.current_selection().expect("Selektion");
    let junction = session.road.junction(current).expect("Kreuzung");
    assert_eq!(junction.position, Vec3::new(250.0, 0.0, -200.0));

    let _ = std::fs::remove_dir_all(&dir);
}
