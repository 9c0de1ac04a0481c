//! Schnittstelle zum Render-Kollaborateur für Kreuzungen und Abschnitte.
//!
//! Der Kern kennt keine Render-Typen: Er fordert über `VisualBackend` Handles an
//! und gibt sie wieder frei, bevor ein Datensatz verworfen wird.

use super::SectionGeometry;
use glam::Vec3;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Opaquer Verweis auf eine Darstellung des Render-Kollaborateurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualHandle(pub u64);

/// Art der Darstellung hinter einem Handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    /// Darstellung einer Kreuzung
    Junction,
    /// Darstellung eines Abschnitts
    Section,
}

/// Fähigkeit, Darstellungen zu erzeugen und freizugeben.
pub trait VisualBackend {
    /// Erzeugt die Darstellung einer Kreuzung an `position`.
    fn create_junction_visual(&mut self, position: Vec3) -> VisualHandle;

    /// Erzeugt die Darstellung eines Abschnitts.
    fn create_section_visual(&mut self, geometry: &SectionGeometry) -> VisualHandle;

    /// Gibt eine Darstellung frei.
    fn destroy_visual(&mut self, handle: VisualHandle);
}

/// Backend ohne Rendering: vergibt Handles und merkt sich, welche noch leben.
///
/// Für Tests und Hosts ohne Grafik; nicht freigegebene Handles bleiben in
/// `live_count()` sichtbar.
#[derive(Debug, Default)]
pub struct HeadlessVisuals {
    next_handle: u64,
    live: HashMap<VisualHandle, VisualKind>,
    destroyed_unknown: usize,
}

impl HeadlessVisuals {
    /// Erstellt ein leeres Backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl aktuell lebender Handles.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Anzahl lebender Handles einer Art.
    pub fn live_count_of(&self, kind: VisualKind) -> usize {
        self.live.values().filter(|k| **k == kind).count()
    }

    /// Prüft ob ein Handle noch lebt.
    pub fn is_live(&self, handle: VisualHandle) -> bool {
        self.live.contains_key(&handle)
    }

    /// Anzahl der Freigaben für unbekannte oder bereits freigegebene Handles.
    pub fn destroyed_unknown(&self) -> usize {
        self.destroyed_unknown
    }

    fn issue(&mut self, kind: VisualKind) -> VisualHandle {
        let handle = VisualHandle(self.next_handle);
        self.next_handle += 1;
        self.live.insert(handle, kind);
        handle
    }
}

impl VisualBackend for HeadlessVisuals {
    fn create_junction_visual(&mut self, _position: Vec3) -> VisualHandle {
        self.issue(VisualKind::Junction)
    }

    fn create_section_visual(&mut self, _geometry: &SectionGeometry) -> VisualHandle {
        self.issue(VisualKind::Section)
    }

    fn destroy_visual(&mut self, handle: VisualHandle) {
        if self.live.remove(&handle).is_none() {
            self.destroyed_unknown += 1;
            log::warn!("Freigabe für unbekanntes Visual-Handle {:?}", handle);
        }
    }
}

/// Geteiltes Backend: Der Host behält einen Klon und kann den Zustand
/// weiter beobachten, während die Session ihre Kopie besitzt.
impl<T: VisualBackend> VisualBackend for Rc<RefCell<T>> {
    fn create_junction_visual(&mut self, position: Vec3) -> VisualHandle {
        self.borrow_mut().create_junction_visual(position)
    }

    fn create_section_visual(&mut self, geometry: &SectionGeometry) -> VisualHandle {
        self.borrow_mut().create_section_visual(geometry)
    }

    fn destroy_visual(&mut self, handle: VisualHandle) {
        self.borrow_mut().destroy_visual(handle);
    }
}
