//! Handler für Kreuzungs- und Abschnitts-Editing.

use crate::app::use_cases;
use crate::app::EditSession;
use crate::core::JunctionId;
use anyhow::Context;
use glam::Vec3;

/// Fügt eine neue Kreuzung an der übergebenen Weltposition hinzu.
pub fn add_junction(session: &mut EditSession, position: Vec3) -> anyhow::Result<()> {
    use_cases::editing::add_junction_at(session, position)
        .context("Kreuzung nicht hinzufügbar")?;
    Ok(())
}

/// Verbindet die Selektion mit einer bestehenden Kreuzung.
pub fn connect_to(session: &mut EditSession, target: JunctionId) -> anyhow::Result<()> {
    use_cases::editing::connect_to(session, target)
        .with_context(|| format!("Verbinden mit Kreuzung {} fehlgeschlagen", target))?;
    Ok(())
}

/// Löscht die aktuell selektierte Kreuzung.
pub fn delete_selected(session: &mut EditSession) -> anyhow::Result<()> {
    use_cases::editing::delete_selected(session).context("Löschen fehlgeschlagen")?;
    Ok(())
}
