//! Use-Cases für das Bearbeiten von Kreuzungen und Abschnitten.

mod add_junction;
mod connect;
mod delete_junction;

pub use add_junction::add_junction_at;
pub use connect::{connect_to, ConnectOutcome};
pub use delete_junction::delete_selected;

use crate::app::EditSession;
use crate::core::{JunctionId, RoadError, Section, SectionGeometry, SectionId};

/// Verbindet zwei Kreuzungen als Nachbarn und legt den Abschnitt an.
pub(crate) fn create_section(
    session: &mut EditSession,
    from: JunctionId,
    to: JunctionId,
) -> Result<SectionId, RoadError> {
    session.road.link_neighbors(from, to)?;
    insert_section(session, from, to)
}

/// Legt nur den Abschnitts-Datensatz samt Darstellung an.
///
/// Die Nachbarschaft muss bereits bestehen (z.B. nach dem Laden).
pub(crate) fn insert_section(
    session: &mut EditSession,
    from: JunctionId,
    to: JunctionId,
) -> Result<SectionId, RoadError> {
    let from_pos = session
        .road
        .junction(from)
        .ok_or(RoadError::JunctionNotFound(from))?
        .position;
    let to_pos = session
        .road
        .junction(to)
        .ok_or(RoadError::JunctionNotFound(to))?
        .position;

    let geometry = SectionGeometry::between(from_pos, to_pos);
    let id = session.section_ids.next();
    let mut section = Section::new(id, from, to);
    let handle = session.visuals.create_section_visual(&geometry);
    section.visual = Some(handle);

    if let Err(e) = session.road.add_section(section) {
        session.visuals.destroy_visual(handle);
        return Err(e);
    }
    log::debug!("Abschnitt {} angelegt: {}↔{}", id, from, to);
    Ok(id)
}
