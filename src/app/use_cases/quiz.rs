//! Use-Case-Funktionen für das Quiz: Tap-Bewertung, Zielwahl, Timer.

use glam::DVec2;

use crate::app::AppState;
use crate::core::Stats;
use crate::shared::FeedbackKind;

/// Statusmeldung, wenn der Lernfortschritt nicht gespeichert werden konnte.
pub const PERSIST_FAILED_MESSAGE: &str = "Fortschritt konnte nicht gespeichert werden";

/// Ergebnis einer Tap-Bewertung.
#[derive(Debug, Clone, PartialEq)]
pub enum TapOutcome {
    /// Kein sichtbarer Wegpunkt in Toleranz oder kein Ziel: keine Wirkung
    Inert,
    /// Falscher Tap im Reveal-Modus: keine Mutation
    Ignored,
    /// Ziel getroffen
    Correct { target_id: String },
    /// Ziel verfehlt; `tapped_id` ist der nächste Wegpunkt am Tap
    Wrong { target_id: String, tapped_id: String },
}

/// Bewertet einen Tap an einer Screen-Position.
///
/// Toleranz und Distanzen werden in Planar-Einheiten gerechnet, die
/// Toleranz entspricht damit bei jeder Skalierung derselben Pixelzahl.
/// Richtig ist ein Tap genau dann, wenn das Ziel innerhalb der Toleranz
/// liegt, unabhängig davon, welcher Wegpunkt am nächsten war.
pub fn judge_tap(state: &mut AppState, screen_pos: DVec2) -> TapOutcome {
    if state.dataset.projector.is_none() || !screen_pos.is_finite() {
        return TapOutcome::Inert;
    }
    let Some(target_id) = state.session.current_target().map(str::to_owned) else {
        return TapOutcome::Inert;
    };
    let Some(target_position) = state.dataset.waypoints.get(&target_id).map(|wp| wp.position)
    else {
        return TapOutcome::Inert;
    };

    let camera = &state.view.camera;
    let world = camera.screen_to_world(screen_pos);
    let tolerance = camera.tolerance_world(state.options.tap_tolerance_px);

    let Some(nearest) = state.dataset.spatial.nearest_within(world, tolerance) else {
        return TapOutcome::Inert;
    };
    let Some(tapped_id) = state
        .dataset
        .waypoints
        .get_index(nearest.waypoint_index)
        .map(|(id, _)| id.clone())
    else {
        return TapOutcome::Inert;
    };

    let correct = world.distance(target_position) <= tolerance;
    if state.session.is_revealing() && !correct {
        log::debug!("Falscher Tap auf {} im Reveal-Modus ignoriert", tapped_id);
        return TapOutcome::Ignored;
    }

    let now = state.clock.now();
    if correct {
        let wrongs_before = state.session.register_correct();
        update_stats(state, &target_id, |scheduler, stats| {
            scheduler.record_correct(stats, wrongs_before, now)
        });
        state.session.push_flash(
            &target_id,
            FeedbackKind::Success,
            now,
            state.options.feedback_flash(),
        );
        log::debug!("Richtig: {} (Fehlversuche davor: {})", target_id, wrongs_before);

        select_next_target(state, Some(&target_id));
        TapOutcome::Correct { target_id }
    } else {
        let entered_reveal = state.session.register_wrong(
            state.options.reveal_after_wrong,
            now,
            state.options.reveal_blink(),
        );
        update_stats(state, &target_id, |scheduler, stats| {
            scheduler.record_wrong(stats, now)
        });
        state.session.push_flash(
            &tapped_id,
            FeedbackKind::Failure,
            now,
            state.options.feedback_flash(),
        );
        log::debug!("Falsch: {} statt {}", tapped_id, target_id);
        if entered_reveal {
            log::info!(
                "Reveal-Modus für {} nach {} Fehlversuchen",
                target_id,
                state.session.consecutive_wrong()
            );
        }

        state.view.request_redraw();
        TapOutcome::Wrong {
            target_id,
            tapped_id,
        }
    }
}

/// Wendet eine Scheduler-Mutation auf die Statistik eines Wegpunkts an
/// und persistiert sie direkt im Anschluss.
fn update_stats(
    state: &mut AppState,
    waypoint_id: &str,
    mutate: impl FnOnce(&crate::core::SpacedRepetitionScheduler, &mut Stats),
) {
    let Some(waypoint) = state.dataset.waypoints.get_mut(waypoint_id) else {
        return;
    };
    mutate(&state.scheduler, &mut waypoint.stats);
    if !state.progress.persist_stats(waypoint_id, &waypoint.stats) {
        state.ui.status_message = Some(PERSIST_FAILED_MESSAGE.to_string());
    }
}

/// Wählt das nächste Ziel aus den sichtbaren Wegpunkten und markiert es als gesehen.
///
/// Ohne sichtbare Wegpunkte (oder nach einem Ladefehler) wechselt die
/// Session nach `Idle`.
pub fn select_next_target(state: &mut AppState, exclude_id: Option<&str>) {
    if state.ui.load_error.is_some() {
        state.session.clear_target();
        return;
    }

    let now = state.clock.now();
    let regions = &state.dataset.regions;
    let visible = || {
        state
            .dataset
            .waypoints
            .values()
            .filter(|wp| regions.is_enabled(&wp.region_code))
    };
    // Ist der ausgeschlossene Wegpunkt der einzige sichtbare, wird er erneut gefragt
    let next_id = state
        .scheduler
        .choose_next(visible(), exclude_id, now)
        .or_else(|| state.scheduler.choose_next(visible(), None, now))
        .map(|wp| wp.id.clone());

    let Some(next_id) = next_id else {
        if state.session.current_target().is_some() {
            log::info!("Keine sichtbaren Wegpunkte: Quiz pausiert");
        }
        state.session.clear_target();
        state.view.request_redraw();
        return;
    };

    let unseen = state
        .dataset
        .waypoints
        .get(&next_id)
        .is_some_and(|wp| !wp.stats.seen);
    if unseen {
        update_stats(state, &next_id, |_, stats| stats.seen = true);
    }
    log::debug!("Neues Ziel: {}", next_id);
    state.session.set_target(next_id);
    state.view.request_redraw();
}

/// Überspringt das aktuelle Ziel ohne Wertung.
pub fn skip_target(state: &mut AppState) {
    let current = state.session.current_target().map(str::to_owned);
    select_next_target(state, current.as_deref());
}

/// Setzt alle Statistiken auf Standardwerte, persistiert sie und beginnt
/// die Zielwahl neu.
pub fn reset_progress(state: &mut AppState) {
    let mut failed = 0usize;
    for (id, waypoint) in state.dataset.waypoints.iter_mut() {
        waypoint.stats = Stats::default();
        if !state.progress.persist_stats(id, &waypoint.stats) {
            failed += 1;
        }
    }
    if failed > 0 {
        log::warn!("{} zurückgesetzte Statistiken nicht gespeichert", failed);
        state.ui.status_message = Some(PERSIST_FAILED_MESSAGE.to_string());
    }
    log::info!(
        "Lernfortschritt zurückgesetzt ({} Wegpunkte)",
        state.dataset.waypoints.len()
    );

    state.session.clear_target();
    select_next_target(state, None);
}

/// Schreibt Reveal-Blinken und Feedback-Pulse bis jetzt fort.
pub fn advance_timers(state: &mut AppState) {
    let now = state.clock.now();
    if state.session.tick(now, state.options.reveal_blink()) {
        state.view.request_redraw();
    }
}
