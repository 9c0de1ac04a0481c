//! Core-Domänentypen: Kreuzungen, Abschnitte, Road, ID-Vergabe, Selektionsverlauf.

pub mod error;
pub mod index_generator;
pub mod junction;
pub mod road;
pub mod section;
pub mod selection_history;
pub mod visual;

/// ID einer Kreuzung
pub type JunctionId = u32;
/// ID eines Abschnitts
pub type SectionId = u32;

pub use error::{FormatError, RoadError};
pub use index_generator::IndexGenerator;
pub use junction::Junction;
pub use road::Road;
pub use section::{Section, SectionGeometry};
pub use selection_history::SelectionHistory;
pub use visual::{HeadlessVisuals, VisualBackend, VisualHandle, VisualKind};
