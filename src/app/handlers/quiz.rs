//! Handler für Tap-Bewertung, Zielwechsel und Timer.

use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;

/// Bewertet einen Tap an der Screen-Position.
pub fn judge_tap(state: &mut AppState, screen_pos: DVec2) {
    let outcome = use_cases::quiz::judge_tap(state, screen_pos);
    log::trace!("Tap bei ({:.0}, {:.0}): {:?}", screen_pos.x, screen_pos.y, outcome);
}

/// Überspringt das aktuelle Ziel.
pub fn skip_target(state: &mut AppState) {
    use_cases::quiz::skip_target(state);
}

/// Setzt den Lernfortschritt zurück.
pub fn reset_progress(state: &mut AppState) {
    use_cases::quiz::reset_progress(state);
}

/// Schreibt Blink- und Feedback-Timer fort.
pub fn advance_timers(state: &mut AppState) {
    use_cases::quiz::advance_timers(state);
}
