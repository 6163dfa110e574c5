//! Toolbar: Zoom, Ansicht, Zielwechsel und Fortschritt.

use crate::app::{AppIntent, AppState, SessionPhase};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let has_projection = state.dataset.projector.is_some();
    let has_target = state.session.phase() != SessionPhase::Idle;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Ansicht:");
            if ui
                .add_enabled(has_projection, egui::Button::new("＋"))
                .on_hover_text("Hineinzoomen")
                .clicked()
            {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui
                .add_enabled(has_projection, egui::Button::new("－"))
                .on_hover_text("Herauszoomen")
                .clicked()
            {
                events.push(AppIntent::ZoomOutRequested);
            }
            if ui
                .add_enabled(has_projection, egui::Button::new("Einpassen"))
                .clicked()
            {
                events.push(AppIntent::ResetViewRequested);
            }

            ui.separator();

            if ui
                .add_enabled(has_target, egui::Button::new("Überspringen"))
                .clicked()
            {
                events.push(AppIntent::SkipTargetRequested);
            }
            if ui
                .add_enabled(
                    !state.dataset.waypoints.is_empty(),
                    egui::Button::new("Fortschritt zurücksetzen"),
                )
                .clicked()
            {
                events.push(AppIntent::ResetProgressRequested);
            }
        });
    });

    events
}
