//! Handler für Selektion und Selektions-Wiederherstellung.

use crate::app::use_cases;
use crate::app::EditSession;
use crate::core::JunctionId;
use anyhow::Context;

/// Selektiert eine Kreuzung.
pub fn select(session: &mut EditSession, id: JunctionId) -> anyhow::Result<()> {
    use_cases::selection::select_junction(session, id)
        .with_context(|| format!("Kreuzung {} nicht selektierbar", id))?;
    Ok(())
}

/// Setzt eine verwaiste Selektion auf die letzte Kreuzung.
pub fn recover(session: &mut EditSession) {
    use_cases::selection::recover_selection(session);
}
