//! Application-Layer: Controller, Session-State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Edit-Session-State
///
/// Dieses Modul verwaltet den Zustand eines Strassen-Dokuments (Road, Selektion, Modus).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{EditSession, EditSessionBuilder, SelectionState, SessionMode};
pub use use_cases::editing::ConnectOutcome;
pub use use_cases::validation::{CandidateValidation, CostLabel, CursorPreview};
