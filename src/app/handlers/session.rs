//! Handler für Start, Stopp und Neustart der Bearbeitung.

use crate::app::use_cases;
use crate::app::EditSession;
use anyhow::Context;
use glam::Vec3;

/// Startet die Bearbeitung an `origin`.
pub fn start(session: &mut EditSession, origin: Vec3) -> anyhow::Result<()> {
    use_cases::session::start_edit(session, origin).context("Bearbeitung nicht startbar")?;
    Ok(())
}

/// Beendet die Bearbeitung.
pub fn stop(session: &mut EditSession) {
    use_cases::session::stop_edit(session);
}

/// Leert die Road und startet an der konfigurierten Startposition neu.
pub fn clear_and_restart(session: &mut EditSession) -> anyhow::Result<()> {
    let origin = session.options.start_position();
    use_cases::session::clear_and_restart(session, origin).context("Neustart fehlgeschlagen")?;
    Ok(())
}
