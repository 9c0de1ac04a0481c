//! Use-Case: Neue Kreuzung an einer Weltposition hinzufügen.

use crate::app::EditSession;
use crate::core::{Junction, JunctionId, RoadError};
use glam::Vec3;

/// Fügt eine neue Kreuzung an `position` hinzu.
///
/// Die neue Kreuzung wird selektiert, die bisherige Selektion landet im
/// Verlauf. Gab es eine Selektion, entsteht ein Abschnitt zu ihr.
pub fn add_junction_at(session: &mut EditSession, position: Vec3) -> Result<JunctionId, RoadError> {
    session.ensure_editing()?;

    let previous = session.live_selection();
    let id = session.junction_ids.next();
    let handle = session.visuals.create_junction_visual(position);
    let mut junction = Junction::new(id, position);
    junction.visual = Some(handle);

    if let Err(e) = session.road.add_junction(junction) {
        session.visuals.destroy_visual(handle);
        return Err(e);
    }
    session.selection.select(id);

    if let Some(from) = previous {
        super::create_section(session, from, id)?;
    }

    log::info!(
        "Kreuzung {} an Position ({:.1}, {:.1}, {:.1}) hinzugefügt",
        id,
        position.x,
        position.y,
        position.z
    );
    debug_assert!(session.road.is_symmetric());
    Ok(id)
}
