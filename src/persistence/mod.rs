//! Binäres Speicherformat für Strassennetze.
//!
//! Layout (Little Endian, feste Feldbreiten):
//!
//! ```text
//! i32              Anzahl Kreuzungen
//! je Kreuzung:
//!     f32 f32 f32  Position x, y, z
//!     i32          Kreuzungs-ID
//!     i32          Anzahl Nachbarn
//!     i32 ...      Nachbar-IDs
//! ```
//!
//! Abschnitte werden nicht gespeichert; sie werden nach dem Laden aus der
//! Nachbarschaft abgeleitet. Kein Versions-Header, keine Prüfsumme.

pub mod reader;
pub mod writer;

#[cfg(test)]
mod tests;

pub use reader::{read_road, LoadedJunction};
pub use writer::write_road;
