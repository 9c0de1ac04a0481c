//! Application Controller für zentrale Event-Verarbeitung.

use super::use_cases::validation::{preview_cursor, CursorPreview};
use super::{AppCommand, AppIntent, EditSession};
use crate::core::VisualHandle;
use glam::Vec3;

/// Orchestriert Host-Intents und Use-Cases auf der EditSession.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        session: &mut EditSession,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(session, intent);
        for command in commands {
            self.handle_command(session, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, session: &EditSession, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(session, intent)
    }

    /// Führt mutierende Commands auf der EditSession aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        session: &mut EditSession,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        session.command_log.record(&command);
        use super::handlers;

        match &command {
            // === Session ===
            AppCommand::StartEdit { origin } => handlers::session::start(session, *origin)?,
            AppCommand::StopEdit => handlers::session::stop(session),
            AppCommand::ClearAndRestart => handlers::session::clear_and_restart(session)?,

            // === Selektion ===
            AppCommand::RecoverSelection => handlers::selection::recover(session),
            AppCommand::SelectJunction { id } => handlers::selection::select(session, *id)?,

            // === Editing ===
            AppCommand::AddJunctionAt { position } => {
                handlers::editing::add_junction(session, *position)?
            }
            AppCommand::ConnectTo { target } => handlers::editing::connect_to(session, *target)?,
            AppCommand::DeleteSelected => handlers::editing::delete_selected(session)?,

            // === Datei-I/O ===
            AppCommand::SaveRoad => handlers::file_io::save(session)?,
            AppCommand::LoadRoad => handlers::file_io::load(session)?,
        }

        session.command_log.confirm(&command);
        Ok(())
    }

    /// Cursor-Vorschau für den aktuellen Tick (Kosten-Text, Bau-Indikator).
    pub fn preview(
        &self,
        session: &EditSession,
        world_pos: Vec3,
        picked: Option<VisualHandle>,
    ) -> Option<CursorPreview> {
        preview_cursor(session, world_pos, picked)
    }
}
