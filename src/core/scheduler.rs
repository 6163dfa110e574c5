//! Spaced-Repetition-Scheduler: Intervalle nach Antworten und Auswahl des
//! nächsten abzufragenden Wegpunkts.
//!
//! Der Scheduler mutiert nur [`Stats`]; das Persistieren übernimmt der
//! aufrufende Use-Case direkt im Anschluss.

use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::stats::Stats;
use super::waypoint::Waypoint;

/// Wiedervorlage nach falscher Antwort, indiziert über den Wrong-Streak
/// nach dem Hochzählen (1 → Index 0). Längere Streaks nutzen den letzten Eintrag.
pub const WRONG_INTERVALS_MS: [i64; 3] = [20_000, 40_000, 60_000];
/// Basisintervall nach richtiger Antwort ohne vorherigen Fehler.
pub const CORRECT_BASE_CLEAN_MS: i64 = 15 * 60_000;
/// Basisintervall nach richtiger Antwort mit vorherigen Fehlern.
pub const CORRECT_BASE_AFTER_WRONG_MS: i64 = 5 * 60_000;
/// Wachstum pro weiterer richtiger Antwort in Folge.
pub const CORRECT_GROWTH: f64 = 1.7;
/// Obergrenze für jedes Intervall nach richtiger Antwort.
pub const CORRECT_CAP_MS: i64 = 2 * 60 * 60_000;
/// Zufälliger Aufschlag auf `due_at` pro Kandidat in Gruppe C (`[0, 2000)` ms).
pub const SELECTION_JITTER_MS: i64 = 2_000;

/// Intervall nach einer falschen Antwort.
pub fn wrong_interval(wrong_streak: u32) -> TimeDelta {
    let index = (wrong_streak.max(1) as usize - 1).min(WRONG_INTERVALS_MS.len() - 1);
    TimeDelta::milliseconds(WRONG_INTERVALS_MS[index])
}

/// Intervall nach einer richtigen Antwort.
///
/// `min(basis · 1.7^(correct_streak − 1), 2 h)`; die Basis hängt davon ab,
/// ob vor dieser Antwort auf dem Ziel Fehler lagen.
pub fn correct_interval(correct_streak: u32, wrongs_before: u32) -> TimeDelta {
    let base = if wrongs_before == 0 {
        CORRECT_BASE_CLEAN_MS
    } else {
        CORRECT_BASE_AFTER_WRONG_MS
    };
    let exponent = correct_streak.saturating_sub(1) as i32;
    let millis = (base as f64 * CORRECT_GROWTH.powi(exponent)).min(CORRECT_CAP_MS as f64);
    TimeDelta::milliseconds(millis.round() as i64)
}

/// Wählt Prompts nach Fälligkeit aus und aktualisiert Antwort-Statistiken.
pub struct SpacedRepetitionScheduler {
    rng: StdRng,
}

impl SpacedRepetitionScheduler {
    /// Erstellt einen Scheduler mit zufälligem Seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Erstellt einen Scheduler mit festem Seed (reproduzierbare Auswahl).
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Verbucht eine falsche Antwort.
    pub fn record_wrong(&self, stats: &mut Stats, now: DateTime<Utc>) {
        stats.wrong_streak += 1;
        stats.correct_streak = 0;
        stats.has_answered = true;
        stats.due_at = now + wrong_interval(stats.wrong_streak);
        stats.last_shown_at = Some(now);
    }

    /// Verbucht eine richtige Antwort nach `wrongs_before` Fehlversuchen auf
    /// demselben Ziel.
    pub fn record_correct(&self, stats: &mut Stats, wrongs_before: u32, now: DateTime<Utc>) {
        stats.wrong_streak = 0;
        stats.correct_streak += 1;
        stats.has_answered = true;
        stats.due_at = now + correct_interval(stats.correct_streak, wrongs_before);
        stats.last_shown_at = Some(now);
    }

    /// Wählt den nächsten Wegpunkt aus dem Kandidaten-Pool.
    ///
    /// Prioritäten: (A) überfällig → zufällig, (B) ungesehen → zufällig,
    /// (C) übrige Beantwortete → kleinstes `due_at + jitter`. Sind alle
    /// Gruppen leer, wird zufällig aus dem gesamten Pool gewählt.
    pub fn choose_next<'a>(
        &mut self,
        candidates: impl IntoIterator<Item = &'a Waypoint>,
        exclude_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Option<&'a Waypoint> {
        let pool: Vec<&Waypoint> = candidates
            .into_iter()
            .filter(|wp| exclude_id != Some(wp.id.as_str()))
            .collect();
        if pool.is_empty() {
            return None;
        }

        let overdue: Vec<&Waypoint> = pool
            .iter()
            .copied()
            .filter(|wp| wp.stats.is_overdue(now))
            .collect();
        if let Some(pick) = overdue.choose(&mut self.rng) {
            return Some(*pick);
        }

        let unseen: Vec<&Waypoint> = pool.iter().copied().filter(|wp| !wp.stats.seen).collect();
        if let Some(pick) = unseen.choose(&mut self.rng) {
            return Some(*pick);
        }

        let rng = &mut self.rng;
        let least_due = pool
            .iter()
            .copied()
            .filter(|wp| wp.stats.has_answered)
            .map(|wp| {
                let jitter = rng.gen_range(0..SELECTION_JITTER_MS);
                (wp.stats.due_at.timestamp_millis().saturating_add(jitter), wp)
            })
            .min_by_key(|(key, _)| *key)
            .map(|(_, wp)| wp);
        if least_due.is_some() {
            return least_due;
        }

        pool.choose(&mut self.rng).copied()
    }
}

impl Default for SpacedRepetitionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projection::{GeoBounds, GeoProjector};
    use crate::core::waypoint::WaypointRecord;

    fn t0() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000).unwrap_or_default()
    }

    fn waypoint(id: &str) -> Waypoint {
        let bounds: GeoBounds = [(8.0, 48.0), (9.0, 49.0)].into_iter().collect();
        let projector = GeoProjector::from_bounds(&bounds).expect("Projektor erwartet");
        Waypoint::from_record(
            WaypointRecord {
                id: id.into(),
                name: id.into(),
                region_code: "EDMM".into(),
                longitude: 8.5,
                latitude: 48.5,
            },
            &projector,
        )
    }

    fn answered_not_due(id: &str, due_in_secs: i64) -> Waypoint {
        let mut wp = waypoint(id);
        wp.stats.seen = true;
        wp.stats.has_answered = true;
        wp.stats.correct_streak = 1;
        wp.stats.due_at = t0() + TimeDelta::seconds(due_in_secs);
        wp
    }

    #[test]
    fn wrong_intervals_saturate_at_last_entry() {
        let scheduler = SpacedRepetitionScheduler::with_seed(1);
        let mut stats = Stats::default();
        let expected = [20, 40, 60, 60];

        for secs in expected {
            scheduler.record_wrong(&mut stats, t0());
            assert_eq!(stats.due_at - t0(), TimeDelta::seconds(secs));
            assert_eq!(stats.correct_streak, 0);
        }
        assert_eq!(stats.wrong_streak, 4);
    }

    #[test]
    fn correct_after_wrong_uses_short_base() {
        let scheduler = SpacedRepetitionScheduler::with_seed(1);
        let mut stats = Stats::default();

        scheduler.record_wrong(&mut stats, t0());
        scheduler.record_correct(&mut stats, 1, t0());

        assert_eq!(stats.due_at - t0(), TimeDelta::minutes(5));
        assert_eq!(stats.wrong_streak, 0);
        assert_eq!(stats.correct_streak, 1);
    }

    #[test]
    fn clean_correct_streak_grows_geometrically() {
        let scheduler = SpacedRepetitionScheduler::with_seed(1);
        let mut stats = Stats::default();

        scheduler.record_correct(&mut stats, 0, t0());
        assert_eq!(stats.due_at - t0(), TimeDelta::minutes(15));

        scheduler.record_correct(&mut stats, 0, t0());
        scheduler.record_correct(&mut stats, 0, t0());

        // 15 min · 1.7² = 2601 s
        assert_eq!(stats.due_at - t0(), TimeDelta::seconds(2601));
        assert!(stats.has_answered);
    }

    #[test]
    fn correct_interval_is_capped() {
        assert_eq!(correct_interval(10, 0), TimeDelta::hours(2));
        assert_eq!(correct_interval(1, 2), TimeDelta::minutes(5));
        assert_eq!(wrong_interval(0), TimeDelta::seconds(20));
    }

    #[test]
    fn overdue_wins_over_unseen_and_answered() {
        let mut scheduler = SpacedRepetitionScheduler::with_seed(7);
        let mut overdue = answered_not_due("OVER", -30);
        overdue.stats.wrong_streak = 1;
        overdue.stats.correct_streak = 0;
        let pool = vec![
            waypoint("NEW1"),
            waypoint("NEW2"),
            overdue,
            answered_not_due("A", 60),
            answered_not_due("B", 120),
            answered_not_due("C", 180),
        ];

        for _ in 0..50 {
            let pick = scheduler.choose_next(&pool, None, t0()).expect("Treffer erwartet");
            assert_eq!(pick.id, "OVER");
        }
    }

    #[test]
    fn unseen_before_answered_not_due() {
        let mut scheduler = SpacedRepetitionScheduler::with_seed(3);
        let pool = vec![waypoint("NEW"), answered_not_due("A", 60)];

        let pick = scheduler.choose_next(&pool, None, t0()).expect("Treffer erwartet");
        assert_eq!(pick.id, "NEW");
    }

    #[test]
    fn least_due_wins_beyond_jitter() {
        let mut scheduler = SpacedRepetitionScheduler::with_seed(11);
        let pool = vec![
            answered_not_due("LATE", 600),
            answered_not_due("SOON", 10),
            answered_not_due("MID", 300),
        ];

        for _ in 0..20 {
            let pick = scheduler.choose_next(&pool, None, t0()).expect("Treffer erwartet");
            assert_eq!(pick.id, "SOON");
        }
    }

    #[test]
    fn exclude_and_empty_pool() {
        let mut scheduler = SpacedRepetitionScheduler::with_seed(5);
        let pool = vec![waypoint("ONLY")];

        assert!(scheduler.choose_next(&pool, Some("ONLY"), t0()).is_none());
        assert!(scheduler.choose_next(Vec::<&Waypoint>::new(), None, t0()).is_none());
    }

    #[test]
    fn seen_but_unanswered_falls_back_to_whole_pool() {
        let mut scheduler = SpacedRepetitionScheduler::with_seed(5);
        let mut a = waypoint("A");
        a.stats.seen = true;
        let mut b = waypoint("B");
        b.stats.seen = true;
        let pool = vec![a, b];

        let pick = scheduler.choose_next(&pool, Some("A"), t0()).expect("Treffer erwartet");
        assert_eq!(pick.id, "B");
    }
}
