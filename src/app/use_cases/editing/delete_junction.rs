//! Use-Case: Selektierte Kreuzung löschen.

use crate::app::EditSession;
use crate::core::{JunctionId, RoadError};

/// Löscht die selektierte Kreuzung samt anliegender Abschnitte.
///
/// Die letzte Kreuzung bleibt immer erhalten (`Ok(None)`). Frühere Nachbarn
/// werden nicht miteinander verbunden. Danach wird die zuletzt vorher
/// selektierte Kreuzung wieder aktiv.
pub fn delete_selected(session: &mut EditSession) -> Result<Option<JunctionId>, RoadError> {
    session.ensure_editing()?;
    if session.road.junction_count() < 2 {
        log::debug!("Löschen übersprungen: letzte Kreuzung bleibt erhalten");
        return Ok(None);
    }
    let removed = session.live_selection().ok_or(RoadError::NoSelection)?;

    session
        .road
        .remove_junction(removed, session.visuals.as_mut())?;
    let sections = session
        .road
        .remove_sections_touching(removed, session.visuals.as_mut());

    // Kreuzung kann mehrfach im Verlauf stehen, wenn sie erneut besucht wurde
    session.selection.history.remove_all(removed);

    let next = session
        .selection
        .history
        .pop()
        .filter(|id| session.road.contains_junction(*id))
        .or_else(|| {
            log::error!(
                "Kein gültiger Eintrag im Selektionsverlauf, wähle letzte Kreuzung"
            );
            session.road.last_junction_id()
        });
    session.selection.current = next;

    log::info!(
        "Kreuzung {} gelöscht ({} Abschnitte entfernt), Selektion: {:?}",
        removed,
        sections.len(),
        next
    );
    debug_assert!(session.road.is_symmetric());
    Ok(Some(removed))
}
