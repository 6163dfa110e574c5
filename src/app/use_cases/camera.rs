//! Use-Case-Funktionen für Kamera-Steuerung.
//!
//! Ohne Projektion (keine endlichen Koordinaten) sind alle Operationen No-ops.

use glam::DVec2;

use crate::app::AppState;

/// Verschiebt die Kamera um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    if state.dataset.projector.is_none() || delta == DVec2::ZERO {
        return;
    }
    state.view.camera.pan(delta);
    state.view.request_redraw();
}

/// Zoomt um `factor`; der Weltpunkt unter `anchor` bleibt stehen.
pub fn zoom_at(state: &mut AppState, anchor: DVec2, factor: f64) {
    if state.dataset.projector.is_none() {
        return;
    }
    if state.view.camera.zoom_at(anchor, factor) {
        state.view.request_redraw();
    }
}

/// Zoomt stufenweise hinein (Anker: Canvas-Mitte).
pub fn zoom_in(state: &mut AppState) {
    let center = state.view.canvas_size() * 0.5;
    let step = state.options.zoom_step;
    zoom_at(state, center, step);
}

/// Zoomt stufenweise heraus (Anker: Canvas-Mitte).
pub fn zoom_out(state: &mut AppState) {
    let center = state.view.canvas_size() * 0.5;
    let step = state.options.zoom_step;
    zoom_at(state, center, 1.0 / step);
}

/// Passt die Kamera auf die Region of Interest ein.
///
/// Sichtbare Wegpunkte haben Vorrang; ohne sie werden die Boundaries
/// eingerahmt. Ohne Canvas-Größe passiert nichts.
pub fn reset_view(state: &mut AppState) {
    if state.dataset.projector.is_none() {
        return;
    }
    let canvas = state.view.canvas_size();
    if canvas.x <= 0.0 || canvas.y <= 0.0 {
        return;
    }
    let Some(bounds) = state.dataset.region_of_interest() else {
        return;
    };

    state
        .view
        .camera
        .fit_to_bounds(&bounds, canvas, state.options.fit_fill_factor);
    state.view.request_redraw();

    log::info!(
        "Ansicht eingepasst: ({:.5}, {:.5}) bis ({:.5}, {:.5}), Skala {:.0}",
        bounds.min.x,
        bounds.min.y,
        bounds.max.x,
        bounds.max.y,
        state.view.camera.scale
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::dataset::install_dataset;
    use crate::app::use_cases::viewport::resize;
    use crate::core::WaypointRecord;
    use crate::data::Dataset;
    use approx::assert_relative_eq;

    fn record(id: &str, lon: f64, lat: f64) -> WaypointRecord {
        WaypointRecord {
            id: id.into(),
            name: id.into(),
            region_code: "EDMM".into(),
            longitude: lon,
            latitude: lat,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        resize(&mut state, [800.0, 600.0]);
        install_dataset(
            &mut state,
            &Dataset {
                boundaries: Vec::new(),
                waypoints: vec![record("A", 11.0, 48.0), record("B", 11.2, 48.1)],
            },
        );
        state
    }

    #[test]
    fn camera_is_inert_without_projection() {
        let mut state = AppState::new();
        resize(&mut state, [800.0, 600.0]);
        let before = state.view.camera.clone();

        pan(&mut state, DVec2::new(10.0, 5.0));
        zoom_in(&mut state);
        reset_view(&mut state);

        assert_eq!(state.view.camera, before);
    }

    #[test]
    fn zoom_in_then_out_returns_to_original() {
        let mut state = loaded_state();
        state.view.camera.scale = 10_000.0;
        let original = state.view.camera.clone();

        zoom_in(&mut state);
        assert!(state.view.camera.scale > original.scale);
        zoom_out(&mut state);

        assert_relative_eq!(state.view.camera.scale, original.scale, epsilon = 1e-6);
        assert_relative_eq!(state.view.camera.offset.x, original.offset.x, epsilon = 1e-6);
    }

    #[test]
    fn pan_moves_offset_and_requests_redraw() {
        let mut state = loaded_state();
        state.view.take_redraw_request();
        let before = state.view.camera.offset;

        pan(&mut state, DVec2::new(10.0, -5.0));

        assert_eq!(state.view.camera.offset, before + DVec2::new(10.0, -5.0));
        assert!(state.view.take_redraw_request());
    }

    #[test]
    fn reset_view_centers_visible_waypoints() {
        let mut state = loaded_state();
        pan(&mut state, DVec2::new(300.0, 300.0));

        reset_view(&mut state);

        let a = state.dataset.waypoints["A"].position;
        let b = state.dataset.waypoints["B"].position;
        let mid = state.view.camera.world_to_screen((a + b) * 0.5);
        assert_relative_eq!(mid.x, 400.0, epsilon = 1e-6);
        assert_relative_eq!(mid.y, 300.0, epsilon = 1e-6);
    }
}
