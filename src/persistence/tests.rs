use super::*;
use crate::core::{FormatError, Junction, Road, RoadError};
use glam::Vec3;
use std::io::Cursor;

fn encode(values: &[Field]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for value in values {
        match value {
            Field::I(v) => bytes.extend_from_slice(&v.to_le_bytes()),
            Field::F(v) => bytes.extend_from_slice(&v.to_le_bytes()),
        }
    }
    bytes
}

enum Field {
    I(i32),
    F(f32),
}

use Field::{F, I};

fn chain_road() -> Road {
    let mut road = Road::new();
    road.add_junction(Junction::new(0, Vec3::new(1.0, 2.0, 3.0)))
        .expect("Kreuzung");
    road.add_junction(Junction::new(1, Vec3::new(4.0, 5.0, 6.0)))
        .expect("Kreuzung");
    road.add_junction(Junction::new(5, Vec3::new(-7.5, 0.25, 9.0)))
        .expect("Kreuzung");
    road.link_neighbors(0, 1).expect("Link");
    road.link_neighbors(1, 5).expect("Link");
    road
}

#[test]
fn test_write_produces_exact_layout() {
    let mut road = Road::new();
    road.add_junction(Junction::new(0, Vec3::new(1.0, 2.0, 3.0)))
        .expect("Kreuzung");
    road.add_junction(Junction::new(1, Vec3::new(4.0, 5.0, 6.0)))
        .expect("Kreuzung");
    road.link_neighbors(0, 1).expect("Link");

    let mut bytes = Vec::new();
    write_road(&road, &mut bytes).expect("Schreiben");

    let expected = encode(&[
        I(2),
        F(1.0),
        F(2.0),
        F(3.0),
        I(0),
        I(1),
        I(1),
        F(4.0),
        F(5.0),
        F(6.0),
        I(1),
        I(1),
        I(0),
    ]);
    assert_eq!(bytes, expected);
}

#[test]
fn test_empty_road_is_four_zero_bytes() {
    let mut bytes = Vec::new();
    write_road(&Road::new(), &mut bytes).expect("Schreiben");
    assert_eq!(bytes, vec![0, 0, 0, 0]);

    let loaded = read_road(&mut Cursor::new(bytes)).expect("Lesen");
    assert!(loaded.is_empty());
}

#[test]
fn test_roundtrip_preserves_ids_positions_and_adjacency() {
    let road = chain_road();
    let mut bytes = Vec::new();
    write_road(&road, &mut bytes).expect("Schreiben");

    let loaded = read_road(&mut Cursor::new(bytes)).expect("Lesen");
    assert_eq!(loaded.len(), 3);

    for (saved, restored) in road.junctions().zip(&loaded) {
        assert_eq!(saved.id, restored.id);
        assert_eq!(saved.position, restored.position);
        assert_eq!(saved.neighbors(), restored.neighbors.as_slice());
    }
}

#[test]
fn test_forward_references_resolve() {
    // Kreuzung 3 verweist auf die später gelesene Kreuzung 8
    let bytes = encode(&[
        I(2),
        F(0.0),
        F(0.0),
        F(0.0),
        I(3),
        I(1),
        I(8),
        F(1.0),
        F(0.0),
        F(0.0),
        I(8),
        I(1),
        I(3),
    ]);
    let loaded = read_road(&mut Cursor::new(bytes)).expect("Lesen");
    assert_eq!(loaded[0].neighbors, vec![8]);
    assert_eq!(loaded[1].neighbors, vec![3]);
}

#[test]
fn test_unknown_neighbor_is_format_error() {
    let bytes = encode(&[I(1), F(0.0), F(0.0), F(0.0), I(0), I(1), I(4)]);
    let err = read_road(&mut Cursor::new(bytes)).expect_err("unbekannter Nachbar");
    assert!(matches!(
        err,
        RoadError::Format(FormatError::UnknownNeighbor {
            junction: 0,
            neighbor: 4
        })
    ));
}

#[test]
fn test_truncated_file_is_format_error() {
    let road = chain_road();
    let mut bytes = Vec::new();
    write_road(&road, &mut bytes).expect("Schreiben");

    for cut in [0, 2, 4, 10, bytes.len() - 1] {
        let err = read_road(&mut Cursor::new(&bytes[..cut])).expect_err("gekürzte Datei");
        assert!(
            matches!(err, RoadError::Format(FormatError::Truncated(_))),
            "Schnitt bei {cut}: {err:?}"
        );
    }
}

#[test]
fn test_negative_counts_and_ids_rejected() {
    let negative_count = encode(&[I(-1)]);
    assert!(matches!(
        read_road(&mut Cursor::new(negative_count)),
        Err(RoadError::Format(FormatError::NegativeCount { value: -1, .. }))
    ));

    let negative_id = encode(&[I(1), F(0.0), F(0.0), F(0.0), I(-3), I(0)]);
    assert!(matches!(
        read_road(&mut Cursor::new(negative_id)),
        Err(RoadError::Format(FormatError::NegativeIdentity(-3)))
    ));
}

#[test]
fn test_duplicate_identity_rejected() {
    let bytes = encode(&[
        I(2),
        F(0.0),
        F(0.0),
        F(0.0),
        I(1),
        I(0),
        F(1.0),
        F(0.0),
        F(0.0),
        I(1),
        I(0),
    ]);
    assert!(matches!(
        read_road(&mut Cursor::new(bytes)),
        Err(RoadError::Format(FormatError::DuplicateJunction(1)))
    ));
}

#[test]
fn test_self_neighbor_rejected() {
    let bytes = encode(&[I(1), F(0.0), F(0.0), F(0.0), I(2), I(1), I(2)]);
    assert!(matches!(
        read_road(&mut Cursor::new(bytes)),
        Err(RoadError::Format(FormatError::SelfNeighbor(2)))
    ));
}

#[test]
fn test_asymmetric_adjacency_is_repaired() {
    // 0 kennt 1, 1 kennt 0 nicht
    let bytes = encode(&[
        I(2),
        F(0.0),
        F(0.0),
        F(0.0),
        I(0),
        I(1),
        I(1),
        F(1.0),
        F(0.0),
        F(0.0),
        I(1),
        I(0),
    ]);
    let loaded = read_road(&mut Cursor::new(bytes)).expect("Lesen");
    assert_eq!(loaded[1].neighbors, vec![0]);
}

#[test]
fn test_duplicate_neighbor_entries_collapsed() {
    let bytes = encode(&[
        I(2),
        F(0.0),
        F(0.0),
        F(0.0),
        I(0),
        I(2),
        I(1),
        I(1),
        F(1.0),
        F(0.0),
        F(0.0),
        I(1),
        I(1),
        I(0),
    ]);
    let loaded = read_road(&mut Cursor::new(bytes)).expect("Lesen");
    assert_eq!(loaded[0].neighbors, vec![1]);
}

#[test]
fn test_trailing_bytes_ignored() {
    let mut bytes = encode(&[I(1), F(0.0), F(0.0), F(0.0), I(0), I(0)]);
    bytes.extend_from_slice(&[0xAB, 0xCD]);
    let loaded = read_road(&mut Cursor::new(bytes)).expect("Lesen");
    assert_eq!(loaded.len(), 1);
}

struct BrokenPipe;

impl std::io::Read for BrokenPipe {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "weg"))
    }
}

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "weg"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_io_errors_propagate() {
    assert!(matches!(read_road(&mut BrokenPipe), Err(RoadError::Io(_))));
    assert!(matches!(
        write_road(&chain_road(), &mut BrokenPipe),
        Err(RoadError::Io(_))
    ));
}

#[test]
fn test_identity_above_i32_cannot_be_saved() {
    let mut road = Road::new();
    road.add_junction(Junction::new(u32::MAX, Vec3::ZERO))
        .expect("Kreuzung");
    let mut bytes = Vec::new();
    assert!(matches!(
        write_road(&road, &mut bytes),
        Err(RoadError::Format(FormatError::IdentityOutOfRange(u32::MAX)))
    ));
}
