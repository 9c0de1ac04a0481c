//! Reader für das binäre Speicherformat.

use crate::core::{FormatError, JunctionId, RoadError};
use glam::Vec3;
use std::collections::HashMap;
use std::io::{ErrorKind, Read};

/// Obergrenze für Vorab-Reservierungen aus ungeprüften Anzahl-Feldern.
const MAX_PREALLOC: usize = 4096;

/// Eine gelesene Kreuzung mit aufgelösten Nachbar-IDs.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedJunction {
    /// Kreuzungs-ID aus der Datei
    pub id: JunctionId,
    /// Weltposition
    pub position: Vec3,
    /// Nachbar-IDs (alle in der Datei vorhanden, symmetrisch)
    pub neighbors: Vec<JunctionId>,
}

/// Roh gelesene Kreuzung vor der Nachbar-Auflösung.
struct StagedJunction {
    id: JunctionId,
    position: Vec3,
    neighbor_ids: Vec<i32>,
}

/// Liest eine gespeicherte Road.
///
/// Ablauf:
/// 1. Alle Kreuzungen in eine Staging-Liste lesen
/// 2. ID-Tabelle aus den gelesenen IDs aufbauen (Duplikate → Fehler)
/// 3. Nachbar-IDs gegen die Tabelle auflösen (unbekannt → Fehler)
/// 4. Fehlende Rückverweise ergänzen
///
/// Bytes nach der letzten Kreuzung werden ignoriert.
pub fn read_road<R: Read>(reader: &mut R) -> Result<Vec<LoadedJunction>, RoadError> {
    let junction_count = read_count(reader, "Anzahl Kreuzungen")?;
    let mut staged: Vec<StagedJunction> = Vec::with_capacity(junction_count.min(MAX_PREALLOC));

    for _ in 0..junction_count {
        let x = read_f32(reader, "Position x")?;
        let y = read_f32(reader, "Position y")?;
        let z = read_f32(reader, "Position z")?;
        let id = decode_id(read_i32(reader, "Kreuzungs-ID")?)?;

        let neighbor_count = read_count(reader, "Anzahl Nachbarn")?;
        let mut neighbor_ids = Vec::with_capacity(neighbor_count.min(MAX_PREALLOC));
        for _ in 0..neighbor_count {
            neighbor_ids.push(read_i32(reader, "Nachbar-ID")?);
        }

        staged.push(StagedJunction {
            id,
            position: Vec3::new(x, y, z),
            neighbor_ids,
        });
    }

    // ID-Tabelle vor der Auflösung: Nachbarn dürfen auf später gelesene Kreuzungen zeigen
    let mut index_table: HashMap<JunctionId, usize> = HashMap::with_capacity(staged.len());
    for (slot, junction) in staged.iter().enumerate() {
        if index_table.insert(junction.id, slot).is_some() {
            return Err(FormatError::DuplicateJunction(junction.id).into());
        }
    }

    let mut loaded: Vec<LoadedJunction> = Vec::with_capacity(staged.len());
    for junction in staged {
        let mut neighbors: Vec<JunctionId> = Vec::with_capacity(junction.neighbor_ids.len());
        for raw in junction.neighbor_ids {
            let neighbor = decode_id(raw)?;
            if neighbor == junction.id {
                return Err(FormatError::SelfNeighbor(junction.id).into());
            }
            if !index_table.contains_key(&neighbor) {
                return Err(FormatError::UnknownNeighbor {
                    junction: junction.id,
                    neighbor,
                }
                .into());
            }
            if neighbors.contains(&neighbor) {
                log::warn!(
                    "Kreuzung {} listet Nachbar {} mehrfach, Duplikat verworfen",
                    junction.id,
                    neighbor
                );
                continue;
            }
            neighbors.push(neighbor);
        }
        loaded.push(LoadedJunction {
            id: junction.id,
            position: junction.position,
            neighbors,
        });
    }

    let repaired = symmetrize(&mut loaded, &index_table);
    if repaired > 0 {
        log::warn!("{} fehlende Nachbar-Rückverweise ergänzt", repaired);
    }

    log::debug!("{} Kreuzungen gelesen", loaded.len());
    Ok(loaded)
}

/// Ergänzt fehlende Rückverweise (A kennt B, B kennt A nicht).
fn symmetrize(loaded: &mut [LoadedJunction], index_table: &HashMap<JunctionId, usize>) -> usize {
    let mut missing: Vec<(usize, JunctionId)> = Vec::new();
    for junction in loaded.iter() {
        for neighbor in &junction.neighbors {
            if let Some(&slot) = index_table.get(neighbor) {
                if !loaded[slot].neighbors.contains(&junction.id) {
                    missing.push((slot, junction.id));
                }
            }
        }
    }

    for &(slot, back_link) in &missing {
        loaded[slot].neighbors.push(back_link);
    }
    missing.len()
}

fn decode_id(raw: i32) -> Result<JunctionId, FormatError> {
    JunctionId::try_from(raw).map_err(|_| FormatError::NegativeIdentity(raw))
}

fn read_count<R: Read>(reader: &mut R, field: &'static str) -> Result<usize, RoadError> {
    let value = read_i32(reader, field)?;
    usize::try_from(value).map_err(|_| FormatError::NegativeCount { field, value }.into())
}

fn read_i32<R: Read>(reader: &mut R, field: &'static str) -> Result<i32, RoadError> {
    Ok(i32::from_le_bytes(read_bytes(reader, field)?))
}

fn read_f32<R: Read>(reader: &mut R, field: &'static str) -> Result<f32, RoadError> {
    Ok(f32::from_le_bytes(read_bytes(reader, field)?))
}

fn read_bytes<R: Read>(reader: &mut R, field: &'static str) -> Result<[u8; 4], RoadError> {
    let mut buf = [0u8; 4];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(buf),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(FormatError::Truncated(field).into()),
        Err(e) => Err(e.into()),
    }
}
