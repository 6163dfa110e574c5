//! Handler für Kamera und Viewport.

use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;

/// Passt die Kamera auf die Region of Interest ein.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_in(state);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_out(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Kamera um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt am Screen-Anker.
pub fn zoom_at(state: &mut AppState, factor: f64, anchor: DVec2) {
    use_cases::camera::zoom_at(state, anchor, factor);
}
