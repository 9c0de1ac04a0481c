//! Edit-Session-State: zentrale Datenhaltung eines Strassen-Dokuments.

use super::CommandLog;
use crate::core::{
    HeadlessVisuals, IndexGenerator, JunctionId, Road, RoadError, SelectionHistory,
    VisualBackend,
};
use crate::shared::EditorOptions;
use std::path::{Path, PathBuf};

/// Zustand der Edit-Session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Nicht im Bearbeitungsmodus, Eingaben werden ignoriert
    #[default]
    Idle,
    /// Bearbeitung aktiv, mindestens eine Kreuzung existiert
    Editing,
}

/// Auswahlbezogener Session-Zustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuell selektierte Kreuzung (Ausgangspunkt für neue Abschnitte)
    pub current: Option<JunctionId>,
    /// Zuvor selektierte Kreuzungen für die Rückkehr nach dem Löschen
    pub history: SelectionHistory<JunctionId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt die bisherige Selektion auf den Verlauf und selektiert `id`.
    pub fn select(&mut self, id: JunctionId) {
        if let Some(previous) = self.current {
            self.history.push(previous);
        }
        self.current = Some(id);
    }

    /// Setzt Selektion und Verlauf zurück.
    pub fn clear(&mut self) {
        self.current = None;
        self.history.clear();
    }
}

/// Hauptzustand einer Edit-Session
pub struct EditSession {
    /// Das bearbeitete Strassennetz
    pub road: Road,
    /// Idle oder Editing
    pub mode: SessionMode,
    /// Aktuelle Selektion und Verlauf
    pub selection: SelectionState,
    /// ID-Vergabe für Kreuzungen
    pub junction_ids: IndexGenerator,
    /// ID-Vergabe für Abschnitte
    pub section_ids: IndexGenerator,
    /// Laufzeit-Optionen (Grenzwerte, Kosten, Speicherdatei)
    pub options: EditorOptions,
    /// Datenverzeichnis für die Speicherdatei (None = Speichern deaktiviert)
    pub storage_dir: Option<PathBuf>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Render-Kollaborateur für Kreuzungs- und Abschnitts-Darstellungen
    pub visuals: Box<dyn VisualBackend>,
}

impl EditSession {
    /// Startet den Aufbau einer Session.
    pub fn builder() -> EditSessionBuilder {
        EditSessionBuilder::new()
    }

    /// Session ohne Rendering und ohne Speicherverzeichnis.
    pub fn headless(options: EditorOptions) -> Result<Self, RoadError> {
        Self::builder()
            .options(options)
            .visuals(Box::new(HeadlessVisuals::new()))
            .build()
    }

    /// `true`, solange die Session im Bearbeitungsmodus ist.
    pub fn is_editing(&self) -> bool {
        self.mode == SessionMode::Editing
    }

    /// Aktuell selektierte Kreuzung.
    pub fn current_selection(&self) -> Option<JunctionId> {
        self.selection.current
    }

    /// Aktuelle Selektion, sofern sie noch auf eine lebende Kreuzung zeigt.
    pub fn live_selection(&self) -> Option<JunctionId> {
        self.selection
            .current
            .filter(|id| self.road.contains_junction(*id))
    }

    /// Vollständiger Pfad der Speicherdatei.
    pub fn storage_path(&self) -> Option<PathBuf> {
        self.storage_dir
            .as_deref()
            .map(|dir| dir.join(&self.options.save_file_name))
    }

    /// Liefert `NotEditing`, wenn die Session nicht bearbeitet.
    pub(crate) fn ensure_editing(&self) -> Result<(), RoadError> {
        if self.is_editing() {
            Ok(())
        } else {
            Err(RoadError::NotEditing)
        }
    }
}

impl std::fmt::Debug for EditSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("mode", &self.mode)
            .field("selection", &self.selection)
            .field("junctions", &self.road.junction_count())
            .field("sections", &self.road.section_count())
            .field("storage_dir", &self.storage_dir)
            .finish_non_exhaustive()
    }
}

/// Baut eine `EditSession` und prüft ihre Pflicht-Kollaborateure.
#[derive(Default)]
pub struct EditSessionBuilder {
    options: EditorOptions,
    visuals: Option<Box<dyn VisualBackend>>,
    storage_dir: Option<PathBuf>,
}

impl EditSessionBuilder {
    /// Erstellt einen Builder mit Standard-Optionen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Laufzeit-Optionen.
    pub fn options(mut self, options: EditorOptions) -> Self {
        self.options = options;
        self
    }

    /// Setzt den Render-Kollaborateur (Pflicht).
    pub fn visuals(mut self, visuals: Box<dyn VisualBackend>) -> Self {
        self.visuals = Some(visuals);
        self
    }

    /// Setzt das Datenverzeichnis für Speichern/Laden.
    pub fn storage_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.storage_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Erstellt die Session im Zustand `Idle`.
    ///
    /// Fehlender Render-Kollaborateur oder ungültige Optionen verhindern den
    /// Start. Ein fehlendes Datenverzeichnis deaktiviert nur Speichern/Laden.
    pub fn build(self) -> Result<EditSession, RoadError> {
        let visuals = self.visuals.ok_or_else(|| {
            RoadError::Configuration("kein Render-Kollaborateur gesetzt".to_string())
        })?;
        self.options.validate()?;

        if self.storage_dir.is_none() {
            log::warn!("Kein Datenverzeichnis gesetzt, Speichern und Laden sind deaktiviert");
        }

        Ok(EditSession {
            road: Road::new(),
            mode: SessionMode::Idle,
            selection: SelectionState::new(),
            junction_ids: IndexGenerator::new(),
            section_ids: IndexGenerator::new(),
            options: self.options,
            storage_dir: self.storage_dir,
            command_log: CommandLog::new(),
            visuals,
        })
    }
}
