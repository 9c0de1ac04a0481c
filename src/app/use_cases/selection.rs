//! Use-Cases für die Selektion.

use crate::app::EditSession;
use crate::core::{JunctionId, RoadError};

/// Selektiert `id` und legt die bisherige Selektion auf den Verlauf.
pub fn select_junction(session: &mut EditSession, id: JunctionId) -> Result<(), RoadError> {
    session.ensure_editing()?;
    if !session.road.contains_junction(id) {
        return Err(RoadError::JunctionNotFound(id));
    }
    session.selection.select(id);
    log::info!("Kreuzung {} selektiert", id);
    Ok(())
}

/// Setzt eine verwaiste Selektion auf die letzte Kreuzung der Road.
///
/// Notlösung, keine garantierte Reparatur: Der Verlauf bleibt unberührt.
pub fn recover_selection(session: &mut EditSession) -> Option<JunctionId> {
    if let Some(id) = session.live_selection() {
        return Some(id);
    }
    let fallback = session.road.last_junction_id();
    log::error!(
        "Selektion {:?} existiert nicht, weiche auf {:?} aus",
        session.selection.current,
        fallback
    );
    session.selection.current = fallback;
    fallback
}
