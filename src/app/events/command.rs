use crate::core::JunctionId;
use glam::Vec3;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Bearbeitung starten und erste Kreuzung anlegen
    StartEdit { origin: Vec3 },
    /// Bearbeitung beenden
    StopEdit,
    /// Verwaiste Selektion auf die letzte Kreuzung umsetzen
    RecoverSelection,
    /// Neue Kreuzung anlegen und mit der Selektion verbinden
    AddJunctionAt { position: Vec3 },
    /// Selektion mit einer bestehenden Kreuzung verbinden
    ConnectTo { target: JunctionId },
    /// Kreuzung selektieren
    SelectJunction { id: JunctionId },
    /// Selektierte Kreuzung löschen
    DeleteSelected,
    /// Road leeren und Bearbeitung neu starten
    ClearAndRestart,
    /// In die Speicherdatei schreiben
    SaveRoad,
    /// Aus der Speicherdatei laden
    LoadRoad,
}

impl AppCommand {
    /// `true` für Commands, die Kreuzungen oder Abschnitte verändern können.
    pub fn changes_road(&self) -> bool {
        matches!(
            self,
            Self::StartEdit { .. }
                | Self::AddJunctionAt { .. }
                | Self::ConnectTo { .. }
                | Self::DeleteSelected
                | Self::ClearAndRestart
        )
    }
}
