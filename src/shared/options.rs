//! Zentrale Konfiguration für den Strassen-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::RoadError;
use serde::{Deserialize, Serialize};

// ── Validierung ─────────────────────────────────────────────────────

/// Maximale Distanz zwischen aktueller Kreuzung und neuer Position.
pub const MAX_ROAD_DISTANCE: f32 = 100.0;
/// Maximaler Höhenunterschied zwischen aktueller Kreuzung und neuer Position.
pub const MAX_HEIGHT_DIF: f32 = 3.0;
/// Kosten pro Meter Höhenunterschied.
pub const HEIGHT_COST_ADD: f32 = 2.0;

// ── Session ─────────────────────────────────────────────────────────

/// Position der ersten Kreuzung beim Start einer Edit-Session.
pub const START_POSITION: [f32; 3] = [250.0, 0.0, -200.0];
/// Dateiname der Speicherdatei im Datenverzeichnis.
pub const SAVE_FILE_NAME: &str = "road_save";

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `road_graph_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Maximale Abschnittslänge in Welteinheiten
    #[serde(default = "default_max_road_distance")]
    pub max_road_distance: f32,
    /// Maximaler Höhenunterschied pro Abschnitt
    #[serde(default = "default_max_height_dif")]
    pub max_height_dif: f32,
    /// Kostenfaktor pro Einheit Höhenunterschied
    #[serde(default = "default_height_cost_add")]
    pub height_cost_add: f32,
    /// Startposition der ersten Kreuzung
    #[serde(default = "default_start_position")]
    pub start_position: [f32; 3],
    /// Name der Speicherdatei
    #[serde(default = "default_save_file_name")]
    pub save_file_name: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_road_distance: MAX_ROAD_DISTANCE,
            max_height_dif: MAX_HEIGHT_DIF,
            height_cost_add: HEIGHT_COST_ADD,
            start_position: START_POSITION,
            save_file_name: SAVE_FILE_NAME.to_string(),
        }
    }
}

fn default_max_road_distance() -> f32 {
    MAX_ROAD_DISTANCE
}

fn default_max_height_dif() -> f32 {
    MAX_HEIGHT_DIF
}

fn default_height_cost_add() -> f32 {
    HEIGHT_COST_ADD
}

fn default_start_position() -> [f32; 3] {
    START_POSITION
}

fn default_save_file_name() -> String {
    SAVE_FILE_NAME.to_string()
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("road_graph_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("road_graph_editor.toml")
    }

    /// Startposition als Vektor.
    pub fn start_position(&self) -> glam::Vec3 {
        glam::Vec3::from_array(self.start_position)
    }

    /// Prüft die Grenzwerte auf endliche, nicht-negative Werte.
    pub fn validate(&self) -> Result<(), RoadError> {
        let limits = [
            ("max_road_distance", self.max_road_distance),
            ("max_height_dif", self.max_height_dif),
            ("height_cost_add", self.height_cost_add),
        ];
        for (name, value) in limits {
            if !value.is_finite() || value < 0.0 {
                return Err(RoadError::Configuration(format!(
                    "{} muss endlich und >= 0 sein (ist {})",
                    name, value
                )));
            }
        }
        if !self.start_position.iter().all(|c| c.is_finite()) {
            return Err(RoadError::Configuration(
                "start_position enthält ungültige Koordinaten".to_string(),
            ));
        }
        if self.save_file_name.trim().is_empty() {
            return Err(RoadError::Configuration(
                "save_file_name darf nicht leer sein".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let options = EditorOptions::default();
        assert_eq!(options.max_road_distance, 100.0);
        assert_eq!(options.max_height_dif, 3.0);
        assert_eq!(options.height_cost_add, 2.0);
        assert_eq!(options.save_file_name, "road_save");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let options: EditorOptions =
            toml::from_str("max_road_distance = 50.0\n").expect("TOML gültig");
        assert_eq!(options.max_road_distance, 50.0);
        assert_eq!(options.max_height_dif, MAX_HEIGHT_DIF);
        assert_eq!(options.start_position, START_POSITION);
    }

    #[test]
    fn test_toml_roundtrip() {
        let options = EditorOptions {
            height_cost_add: 4.5,
            ..EditorOptions::default()
        };
        let text = toml::to_string_pretty(&options).expect("Serialisierung");
        let parsed: EditorOptions = toml::from_str(&text).expect("Deserialisierung");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_validate_rejects_invalid_limits() {
        let negative = EditorOptions {
            max_height_dif: -1.0,
            ..EditorOptions::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(RoadError::Configuration(_))
        ));

        let nan = EditorOptions {
            max_road_distance: f32::NAN,
            ..EditorOptions::default()
        };
        assert!(nan.validate().is_err());

        let unnamed = EditorOptions {
            save_file_name: "  ".to_string(),
            ..EditorOptions::default()
        };
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("road_graph_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }
}
