//! Use-Case-Funktionen für die Regionsauswahl.

use crate::app::AppState;

use super::quiz;

/// Aktiviert oder deaktiviert eine Region.
pub fn set_region_enabled(state: &mut AppState, code: &str, enabled: bool) {
    if !state.dataset.regions.set_enabled(code, enabled) {
        return;
    }
    log::info!(
        "Region {} {}",
        code,
        if enabled { "aktiviert" } else { "deaktiviert" }
    );
    apply_region_change(state);
}

/// Aktiviert oder deaktiviert alle Regionen.
pub fn set_all_regions_enabled(state: &mut AppState, enabled: bool) {
    if !state.dataset.regions.set_all(enabled) {
        return;
    }
    apply_region_change(state);
}

/// Persistiert die Auswahl, baut den Index neu und prüft das aktuelle Ziel.
///
/// Liegt das Ziel in einer deaktivierten Region, wird ein neues gewählt;
/// ohne sichtbare Wegpunkte wechselt die Session nach `Idle`.
fn apply_region_change(state: &mut AppState) {
    let codes = state.dataset.regions.enabled_codes();
    if !state.progress.persist_enabled_regions(&codes) {
        state.ui.status_message = Some(quiz::PERSIST_FAILED_MESSAGE.to_string());
    }
    state.dataset.rebuild_spatial_index();
    state.view.request_redraw();

    let target_visible = state
        .current_target()
        .is_some_and(|target| state.dataset.is_visible(target));
    if !target_visible {
        quiz::select_next_target(state, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::SessionPhase;
    use crate::app::use_cases::dataset::install_dataset;
    use crate::core::WaypointRecord;
    use crate::data::Dataset;

    fn record(id: &str, region: &str, lon: f64) -> WaypointRecord {
        WaypointRecord {
            id: id.into(),
            name: id.into(),
            region_code: region.into(),
            longitude: lon,
            latitude: 48.0,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        install_dataset(
            &mut state,
            &Dataset {
                boundaries: Vec::new(),
                waypoints: vec![record("A", "EDMM", 11.0), record("B", "LOVV", 14.0)],
            },
        );
        state
    }

    #[test]
    fn disabling_target_region_retargets() {
        let mut state = loaded_state();
        let target_region = state
            .current_target()
            .map(|wp| wp.region_code.clone())
            .unwrap_or_default();

        set_region_enabled(&mut state, &target_region, false);

        let target = state.current_target().expect("neues Ziel erwartet");
        assert_ne!(target.region_code, target_region);
        assert_eq!(state.dataset.spatial.len(), 1);
    }

    #[test]
    fn disabling_everything_goes_idle_and_back() {
        let mut state = loaded_state();

        set_all_regions_enabled(&mut state, false);
        assert_eq!(state.session.phase(), SessionPhase::Idle);
        assert_eq!(state.prompt_text(), "Keine Region aktiviert");
        assert_eq!(state.progress.load_enabled_regions(), Some(Vec::new()));

        set_region_enabled(&mut state, "LOVV", true);
        assert_eq!(state.session.current_target(), Some("B"));
    }

    #[test]
    fn unknown_region_is_ignored() {
        let mut state = loaded_state();
        let before = state.session.current_target().map(str::to_owned);

        set_region_enabled(&mut state, "XXXX", false);

        assert_eq!(state.session.current_target().map(str::to_owned), before);
    }
}
