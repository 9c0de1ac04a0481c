//! Use-Cases für den Lebenszyklus der Edit-Session.

use super::editing;
use crate::app::{EditSession, SessionMode};
use crate::core::{JunctionId, RoadError};
use glam::Vec3;

/// Wechselt nach `Editing` und legt die erste Kreuzung an `origin` an.
pub fn start_edit(session: &mut EditSession, origin: Vec3) -> Result<JunctionId, RoadError> {
    session.mode = SessionMode::Editing;
    let id = editing::add_junction_at(session, origin)?;
    log::info!("Bearbeitung gestartet, erste Kreuzung {}", id);
    Ok(id)
}

/// Wechselt nach `Idle`; alle Daten bleiben erhalten.
pub fn stop_edit(session: &mut EditSession) {
    session.mode = SessionMode::Idle;
    log::info!("Bearbeitung beendet");
}

/// Leert Road und Selektionsverlauf und startet neu an `origin`.
///
/// Die ID-Generatoren laufen weiter.
pub fn clear_and_restart(
    session: &mut EditSession,
    origin: Vec3,
) -> Result<JunctionId, RoadError> {
    session.road.clear(session.visuals.as_mut());
    session.selection.clear();
    log::info!("Road geleert");
    start_edit(session, origin)
}
