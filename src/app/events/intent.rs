use crate::core::VisualHandle;
use glam::Vec3;

/// Eingaben des Hosts ohne direkte Mutationslogik.
///
/// Picking und Raycast liegen beim Host: Er liefert die getroffene
/// Weltposition und ggf. das Handle der getroffenen Darstellung.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Bearbeitung starten (None = Startposition aus den Optionen)
    StartEditRequested { origin: Option<Vec3> },
    /// Bearbeitung beenden, Daten bleiben erhalten
    StopEditRequested,
    /// Linksklick auf eine Weltposition
    PrimaryClick {
        world_pos: Vec3,
        picked: Option<VisualHandle>,
    },
    /// Rechtsklick (selektiert eine getroffene Kreuzung)
    SecondaryClick { picked: Option<VisualHandle> },
    /// Strassennetz speichern
    SaveRequested,
    /// Strassennetz aus der Speicherdatei laden
    LoadRequested,
    /// Selektierte Kreuzung löschen
    DeleteRequested,
    /// Alles löschen und neu beginnen
    ClearRequested,
}
