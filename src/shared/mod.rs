//! Geteilte Typen für layer-übergreifende Verträge.

pub mod options;

pub use options::EditorOptions;
pub use options::{HEIGHT_COST_ADD, MAX_HEIGHT_DIF, MAX_ROAD_DISTANCE};
