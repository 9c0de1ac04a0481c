//! Fehlertypen des Strassen-Graphen und des Speicherformats.

use super::{JunctionId, SectionId};
use thiserror::Error;

/// Fehler bei Graph-Operationen, Konfiguration und Persistenz.
#[derive(Debug, Error)]
pub enum RoadError {
    /// Pflicht-Kollaborateur fehlt oder Optionen sind ungültig
    #[error("Konfigurationsfehler: {0}")]
    Configuration(String),

    /// Keine Kreuzung mit dieser ID vorhanden
    #[error("Kreuzung {0} existiert nicht")]
    JunctionNotFound(JunctionId),

    /// Kein Abschnitt mit dieser ID vorhanden
    #[error("Abschnitt {0} existiert nicht")]
    SectionNotFound(SectionId),

    /// Kreuzungs-ID ist bereits vergeben
    #[error("Kreuzung {0} existiert bereits")]
    DuplicateJunction(JunctionId),

    /// Abschnitts-ID ist bereits vergeben
    #[error("Abschnitt {0} existiert bereits")]
    DuplicateSection(SectionId),

    /// Kreuzung soll mit sich selbst verbunden werden
    #[error("Kreuzung {0} kann nicht mit sich selbst verbunden werden")]
    SelfConnection(JunctionId),

    /// Mutation ausserhalb einer laufenden Edit-Session
    #[error("Edit-Session ist nicht aktiv")]
    NotEditing,

    /// Operation braucht eine aktuelle Selektion, es gibt aber keine
    #[error("Keine Kreuzung selektiert")]
    NoSelection,

    /// Kein Speicherverzeichnis konfiguriert
    #[error("Kein Speicherverzeichnis konfiguriert")]
    StorageUnavailable,

    /// Speicherdatei ist fehlerhaft
    #[error("Ungültige Speicherdatei: {0}")]
    Format(#[from] FormatError),

    /// I/O-Fehler beim Lesen oder Schreiben
    #[error("I/O-Fehler: {0}")]
    Io(#[from] std::io::Error),
}

/// Strukturfehler im binären Speicherformat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Datei endet vor dem erwarteten Feld
    #[error("Datei endet unerwartet beim Lesen von {0}")]
    Truncated(&'static str),

    /// Anzahl-Feld ist negativ
    #[error("Negative Anzahl {value} für {field}")]
    NegativeCount {
        /// Name des Feldes
        field: &'static str,
        /// Gelesener Wert
        value: i32,
    },

    /// Kreuzungs-ID ist negativ
    #[error("Negative Kreuzungs-ID {0}")]
    NegativeIdentity(i32),

    /// ID passt nicht in das 32-Bit-Feld des Formats
    #[error("Kreuzungs-ID {0} ist zu gross für das Speicherformat")]
    IdentityOutOfRange(JunctionId),

    /// Zu viele Kreuzungen für das 32-Bit-Anzahlfeld
    #[error("{0} Kreuzungen passen nicht in das Speicherformat")]
    TooManyJunctions(usize),

    /// Dieselbe Kreuzungs-ID kommt mehrfach vor
    #[error("Kreuzung {0} ist mehrfach gespeichert")]
    DuplicateJunction(JunctionId),

    /// Nachbar verweist auf eine nicht gespeicherte Kreuzung
    #[error("Kreuzung {junction} verweist auf unbekannten Nachbarn {neighbor}")]
    UnknownNeighbor {
        /// Kreuzung mit dem defekten Verweis
        junction: JunctionId,
        /// Nicht auflösbare Nachbar-ID
        neighbor: JunctionId,
    },

    /// Kreuzung listet sich selbst als Nachbarn
    #[error("Kreuzung {0} listet sich selbst als Nachbarn")]
    SelfNeighbor(JunctionId),
}
