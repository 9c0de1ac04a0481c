//! Use-Case: Kandidaten-Prüfung, Kostenberechnung und Cursor-Vorschau.
//!
//! Alle Funktionen sind rein und dürfen in jedem Tick aufgerufen werden.

use crate::app::EditSession;
use crate::core::{JunctionId, Road, VisualHandle};
use crate::shared::EditorOptions;
use glam::Vec3;

/// Ergebnis der Prüfung einer Zielposition gegen die aktuelle Kreuzung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateValidation {
    /// Weder zu weit noch zu hoch (unabhängig von `is_junction`)
    pub valid: bool,
    /// Distanz überschreitet `max_road_distance`
    pub too_far: bool,
    /// Höhenunterschied überschreitet `max_height_dif`
    pub too_high: bool,
    /// Getroffenes Handle gehört zu einer Kreuzung
    pub is_junction: bool,
    /// Getroffene Kreuzung (gesetzt genau dann, wenn `is_junction`)
    pub target: Option<JunctionId>,
    /// Distanz zwischen beiden Positionen
    pub distance: f32,
}

/// Prüft eine Zielposition gegen Distanz- und Höhengrenze.
pub fn validate_candidate(
    last_pos: Vec3,
    new_pos: Vec3,
    picked: Option<VisualHandle>,
    road: &Road,
    options: &EditorOptions,
) -> CandidateValidation {
    let distance = last_pos.distance(new_pos);
    let too_far = distance > options.max_road_distance;
    let too_high = (new_pos.y - last_pos.y).abs() > options.max_height_dif;
    let target = picked.and_then(|handle| road.identity_of_visual(handle));

    CandidateValidation {
        valid: !too_far && !too_high,
        too_far,
        too_high,
        is_junction: target.is_some(),
        target,
        distance,
    }
}

/// Beratende Kosten eines Abschnitts: `floor(|Δy| * height_cost_add)`.
pub fn compute_cost(a: Vec3, b: Vec3, height_cost_add: f32) -> u32 {
    ((b.y - a.y).abs() * height_cost_add).floor() as u32
}

/// Anzeige an der Cursor-Position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostLabel {
    /// Cursor steht auf einer Kreuzung
    Hidden,
    /// Position ist zu weit oder zu hoch
    NoAccess,
    /// Kosten für einen neuen Abschnitt
    Cost(u32),
}

impl std::fmt::Display for CostLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostLabel::Hidden => Ok(()),
            CostLabel::NoAccess => f.write_str("No Access"),
            CostLabel::Cost(cost) => write!(f, "{}", cost),
        }
    }
}

/// Vorschau für den Host: Kosten-Text und "im Bau"-Indikator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPreview {
    /// Prüfergebnis für die Cursor-Position
    pub validation: CandidateValidation,
    /// Text an der Cursor-Position
    pub cost_label: CostLabel,
    /// Ankerpunkt des Indikators (Position der aktuellen Kreuzung)
    pub anchor: Vec3,
    /// Blickrichtung des Indikators (None bei Cursor auf dem Anker)
    pub direction: Option<Vec3>,
    /// Länge des Indikators, begrenzt auf `max_road_distance`
    pub preview_length: f32,
}

/// Berechnet die Cursor-Vorschau relativ zur aktuellen Selektion.
///
/// `None`, wenn die Session nicht bearbeitet oder keine lebende Selektion hat.
pub fn preview_cursor(
    session: &EditSession,
    world_pos: Vec3,
    picked: Option<VisualHandle>,
) -> Option<CursorPreview> {
    if !session.is_editing() {
        return None;
    }
    let anchor = session
        .live_selection()
        .and_then(|id| session.road.junction(id))?
        .position;

    let validation = validate_candidate(
        anchor,
        world_pos,
        picked,
        &session.road,
        &session.options,
    );
    let cost_label = if validation.is_junction {
        CostLabel::Hidden
    } else if validation.too_far || validation.too_high {
        CostLabel::NoAccess
    } else {
        CostLabel::Cost(compute_cost(
            anchor,
            world_pos,
            session.options.height_cost_add,
        ))
    };

    Some(CursorPreview {
        validation,
        cost_label,
        anchor,
        direction: (world_pos - anchor).try_normalize(),
        preview_length: validation.distance.min(session.options.max_road_distance),
    })
}
