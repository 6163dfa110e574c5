//! Seitenpanel mit der Regionsauswahl (FIRs).

use crate::app::{AppIntent, AppState};

/// Rendert das Regions-Panel und gibt erzeugte Events zurück.
pub fn render_regions_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let regions = &state.dataset.regions;

    egui::SidePanel::left("regions_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Regionen");

            if regions.is_empty() {
                ui.label("Keine Regionen geladen");
                return;
            }

            ui.horizontal(|ui| {
                if ui.button("Alle").clicked() {
                    events.push(AppIntent::AllRegionsToggled { enabled: true });
                }
                if ui.button("Keine").clicked() {
                    events.push(AppIntent::AllRegionsToggled { enabled: false });
                }
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for code in regions.codes() {
                    let mut enabled = regions.is_enabled(code);
                    if ui.checkbox(&mut enabled, code).changed() {
                        events.push(AppIntent::RegionToggled {
                            code: code.to_string(),
                            enabled,
                        });
                    }
                }
            });

            ui.separator();
            ui.label(format!(
                "{} von {} Wegpunkten sichtbar",
                state.dataset.visible_count(),
                state.dataset.waypoints.len()
            ));
        });

    events
}
