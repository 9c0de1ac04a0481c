//! Road Graph Editor Library.
//! Strassennetz aus Kreuzungen und Abschnitten bearbeiten, speichern und laden.

pub mod app;
pub mod core;
pub mod persistence;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, EditSession, EditSessionBuilder, SessionMode};
pub use core::{
    FormatError, HeadlessVisuals, IndexGenerator, Junction, JunctionId, Road, RoadError, Section,
    SectionGeometry, SectionId, SelectionHistory, VisualBackend, VisualHandle,
};
pub use persistence::{read_road, write_road};
pub use shared::EditorOptions;
