//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        let now = state.clock.now();
        state.command_log.record(&command, now);
        use super::handlers;

        match command {
            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { factor, anchor } => {
                handlers::view::zoom_at(state, factor, anchor)
            }
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetView => handlers::view::reset_view(state),

            // === Quiz ===
            AppCommand::JudgeTap { screen_pos } => handlers::quiz::judge_tap(state, screen_pos),
            AppCommand::SkipTarget => handlers::quiz::skip_target(state),
            AppCommand::ResetProgress => handlers::quiz::reset_progress(state),
            AppCommand::AdvanceTimers => handlers::quiz::advance_timers(state),

            // === Regionen ===
            AppCommand::SetRegionEnabled { code, enabled } => {
                handlers::regions::set_enabled(state, &code, enabled)
            }
            AppCommand::SetAllRegionsEnabled { enabled } => {
                handlers::regions::set_all_enabled(state, enabled)
            }

            // === Datensatz ===
            AppCommand::InstallDataset { dataset } => handlers::data::install(state, &dataset),
            AppCommand::RecordLoadFailure { message } => {
                handlers::data::record_failure(state, message)
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
