//! Mapping von Host-Intents auf mutierende App-Commands.


use super::use_cases::validation::validate_candidate;
use super::{AppCommand, AppIntent, EditSession};
use crate::core::JunctionId;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Im Zustand `Idle` wird nur `StartEditRequested` beachtet.
pub fn map_intent_to_commands(session: &EditSession, intent: AppIntent) -> Vec<AppCommand> {
    if !session.is_editing() {
        return match intent {
            AppIntent::StartEditRequested { origin } => vec![AppCommand::StartEdit {
                origin: origin.unwrap_or_else(|| session.options.start_position()),
            }],
            other => {
                log::debug!("Intent im Idle-Zustand ignoriert: {:?}", other);
                Vec::new()
            }
        };
    }

    match intent {
        AppIntent::StartEditRequested { .. } => {
            log::debug!("Bearbeitung läuft bereits");
            Vec::new()
        }
        AppIntent::StopEditRequested => vec![AppCommand::StopEdit],
        AppIntent::PrimaryClick { world_pos, picked } => {
            let (mut commands, current) = with_recovery(session);
            let Some(anchor) = current.and_then(|id| session.road.junction(id)) else {
                log::warn!("Klick ignoriert: keine Kreuzung vorhanden");
                return commands;
            };

            let validation = validate_candidate(
                anchor.position,
                world_pos,
                picked,
                &session.road,
                &session.options,
            );
            if !validation.valid {
                log::debug!(
                    "Klick ungültig (zu weit: {}, zu hoch: {})",
                    validation.too_far,
                    validation.too_high
                );
                return commands;
            }

            match validation.target {
                Some(target) => commands.push(AppCommand::ConnectTo { target }),
                None => commands.push(AppCommand::AddJunctionAt {
                    position: world_pos,
                }),
            }
            commands
        }
        AppIntent::SecondaryClick { picked } => {
            let (mut commands, _) = with_recovery(session);
            if let Some(id) = picked.and_then(|handle| session.road.identity_of_visual(handle)) {
                commands.push(AppCommand::SelectJunction { id });
            }
            commands
        }
        AppIntent::SaveRequested => vec![AppCommand::SaveRoad],
        AppIntent::LoadRequested => vec![AppCommand::LoadRoad],
        AppIntent::DeleteRequested => {
            let (mut commands, _) = with_recovery(session);
            commands.push(AppCommand::DeleteSelected);
            commands
        }
        AppIntent::ClearRequested => vec![AppCommand::ClearAndRestart],
    }
}

/// Stellt eine verwaiste Selektion voran und liefert die danach gültige Kreuzung.
fn with_recovery(session: &EditSession) -> (Vec<AppCommand>, Option<JunctionId>) {
    match session.live_selection() {
        Some(id) => (Vec::new(), Some(id)),
        None => (
            vec![AppCommand::RecoverSelection],
            session.road.last_junction_id(),
        ),
    }
}
