//! Writer für das binäre Speicherformat.

use crate::core::{FormatError, JunctionId, Road, RoadError};
use std::io::Write;

/// Schreibt alle Kreuzungen der Road in Sequenzreihenfolge.
///
/// Nachbarlisten werden in ihrer aktuellen Reihenfolge geschrieben.
pub fn write_road<W: Write>(road: &Road, writer: &mut W) -> Result<(), RoadError> {
    let count = i32::try_from(road.junction_count())
        .map_err(|_| FormatError::TooManyJunctions(road.junction_count()))?;
    write_i32(writer, count)?;

    for junction in road.junctions() {
        writer.write_all(&junction.position.x.to_le_bytes())?;
        writer.write_all(&junction.position.y.to_le_bytes())?;
        writer.write_all(&junction.position.z.to_le_bytes())?;
        write_i32(writer, encode_id(junction.id)?)?;

        let neighbors = junction.neighbors();
        let neighbor_count = i32::try_from(neighbors.len())
            .map_err(|_| FormatError::TooManyJunctions(neighbors.len()))?;
        write_i32(writer, neighbor_count)?;
        for &neighbor in neighbors {
            write_i32(writer, encode_id(neighbor)?)?;
        }
    }

    writer.flush()?;
    log::debug!("{} Kreuzungen serialisiert", road.junction_count());
    Ok(())
}

fn encode_id(id: JunctionId) -> Result<i32, FormatError> {
    i32::try_from(id).map_err(|_| FormatError::IdentityOutOfRange(id))
}

fn write_i32<W: Write>(writer: &mut W, value: i32) -> std::io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}
