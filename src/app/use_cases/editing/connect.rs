//! Use-Case: Selektion mit einer bestehenden Kreuzung verbinden.

use crate::app::EditSession;
use crate::core::{JunctionId, RoadError, SectionId};

/// Ergebnis von `connect_to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// Neuer Abschnitt angelegt, Ziel ist jetzt selektiert
    Connected(SectionId),
    /// Ziel ist bereits Nachbar, nichts geändert
    AlreadyNeighbors,
    /// Ziel ist die Selektion selbst, nichts geändert
    SameJunction,
}

/// Verbindet die aktuelle Selektion mit `target`.
///
/// Direkte Nachbarn werden nicht doppelt verbunden; in dem Fall bleibt
/// auch die Selektion unverändert.
pub fn connect_to(
    session: &mut EditSession,
    target: JunctionId,
) -> Result<ConnectOutcome, RoadError> {
    session.ensure_editing()?;
    let current = session.live_selection().ok_or(RoadError::NoSelection)?;
    if !session.road.contains_junction(target) {
        return Err(RoadError::JunctionNotFound(target));
    }

    if current == target {
        log::debug!("Verbinden übersprungen: Kreuzung {} ist selektiert", target);
        return Ok(ConnectOutcome::SameJunction);
    }
    if session.road.are_neighbors(current, target) {
        log::debug!(
            "Verbinden übersprungen: {} und {} sind bereits Nachbarn",
            current,
            target
        );
        return Ok(ConnectOutcome::AlreadyNeighbors);
    }

    let section = super::create_section(session, current, target)?;
    session.selection.select(target);

    log::info!("Kreuzung {} mit {} verbunden", current, target);
    debug_assert!(session.road.is_symmetric());
    Ok(ConnectOutcome::Connected(section))
}
