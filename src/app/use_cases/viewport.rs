//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

use super::camera;

/// Aktualisiert die gespeicherte Viewport-Größe und passt die Kamera neu ein.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    if state.view.viewport_size == size {
        return;
    }
    state.view.viewport_size = size;
    state.view.request_redraw();
    camera::reset_view(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_viewport_size() {
        let mut state = AppState::new();
        state.view.take_redraw_request();

        resize(&mut state, [1920.0, 1080.0]);

        assert_eq!(state.view.viewport_size, [1920.0, 1080.0]);
        assert!(state.view.take_redraw_request());
    }

    #[test]
    fn same_size_is_ignored() {
        let mut state = AppState::new();
        resize(&mut state, [640.0, 480.0]);
        state.view.take_redraw_request();

        resize(&mut state, [640.0, 480.0]);

        assert!(!state.view.redraw_pending());
    }
}
