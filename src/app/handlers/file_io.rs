//! Handler für Speichern und Laden.

use crate::app::use_cases;
use crate::app::EditSession;

/// Speichert die Road in die Speicherdatei.
pub fn save(session: &mut EditSession) -> anyhow::Result<()> {
    use_cases::file_io::save_road(session)?;
    Ok(())
}

/// Lädt die Road aus der Speicherdatei.
pub fn load(session: &mut EditSession) -> anyhow::Result<()> {
    use_cases::file_io::load_road(session)?;
    Ok(())
}
