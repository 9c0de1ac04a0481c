//! Verlauf der ausgeführten Commands einer Edit-Session.
//!
//! Der Host liest daraus, ob seit dem letzten Speichern oder Laden
//! Änderungen an der Road angefallen sind.

use super::AppCommand;

/// Ausgeführte Commands in Reihenfolge, nach oben begrenzt.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    /// Road-Änderungen seit dem letzten `SaveRoad`/`LoadRoad`
    unsaved_edits: usize,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Protokolliert einen Command vor seiner Ausführung.
    ///
    /// Ist das Log voll, fällt die ältere Hälfte weg.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Vermerkt einen erfolgreich ausgeführten Command im Änderungszähler.
    pub fn confirm(&mut self, command: &AppCommand) {
        match command {
            AppCommand::SaveRoad | AppCommand::LoadRoad => self.unsaved_edits = 0,
            c if c.changes_road() => self.unsaved_edits += 1,
            _ => {}
        }
    }

    /// Anzahl der Road-Änderungen seit dem letzten Speichern oder Laden.
    pub fn unsaved_edits(&self) -> usize {
        self.unsaved_edits
    }

    /// `true`, wenn seit dem letzten Speichern oder Laden editiert wurde.
    pub fn has_unsaved_edits(&self) -> bool {
        self.unsaved_edits > 0
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }
}
