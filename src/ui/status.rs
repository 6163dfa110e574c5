//! Status-Bar am unteren Bildschirmrand: Prompt und Lernstufen.

use crate::app::{AppState, SessionPhase};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let prompt = state.prompt_text();
            let prompt_text = egui::RichText::new(prompt).strong().size(18.0);
            if state.ui.load_error.is_some() {
                ui.label(prompt_text.color(egui::Color32::LIGHT_RED));
            } else {
                ui.label("Finde:");
                ui.label(prompt_text);
            }

            if state.session.phase() == SessionPhase::Revealing {
                ui.label(egui::RichText::new("(wird gezeigt)").color(egui::Color32::YELLOW));
            }

            ui.separator();

            let counts = state.mastery_counts();
            ui.label(format!(
                "Neu: {} | Lernend: {} | Gemeistert: {}",
                counts.new, counts.learning, counts.mastered
            ));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Skala: {:.0}", state.view.camera.scale));
            });
        });
    });
}
