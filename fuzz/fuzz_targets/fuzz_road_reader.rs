#![no_main]

use libfuzzer_sys::fuzz_target;
use road_graph_editor::{read_road, Junction, Road};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Beliebige Bytes dürfen nur Fehler liefern, nie abstürzen
    if let Ok(loaded) = read_road(&mut Cursor::new(data)) {
        let junctions = loaded
            .into_iter()
            .map(|entry| Junction::with_neighbors(entry.id, entry.position, entry.neighbors))
            .collect();
        let mut road = Road::new();
        // Der Reader garantiert bekannte Nachbarn, das Einfügen darf nicht scheitern
        assert!(road.add_junctions(junctions).is_ok());
        assert!(road.is_symmetric());
    }
});
