//! Application-Layer: Controller, State, Events, Gesten und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod gesture;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod session;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Datensatz, View, Quiz).
pub mod state;
pub mod use_cases;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use gesture::{GestureConfig, GestureRecognizer, InputEvent};
pub use render_scene::build as build_render_scene;
pub use session::{FeedbackFlash, QuizSession, SessionPhase};
pub use state::{AppState, DatasetState, PlanarPath, UiState, ViewState};
