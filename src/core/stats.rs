//! Antwort-Statistik pro Wegpunkt und Migration älterer Speicherformate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ab dieser Anzahl korrekter Antworten in Folge gilt ein Wegpunkt als gemeistert.
pub const MASTERED_CORRECT_STREAK: u32 = 3;

/// Kanonische Statistik eines Wegpunkts.
///
/// Invariante: höchstens einer von `wrong_streak`/`correct_streak` ist ungleich 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Falsche Antworten in Folge seit der letzten richtigen
    pub wrong_streak: u32,
    /// Richtige Antworten in Folge seit der letzten falschen
    pub correct_streak: u32,
    /// Vor diesem Zeitpunkt wird der Wegpunkt nicht erneut abgefragt
    pub due_at: DateTime<Utc>,
    /// Zeitpunkt der letzten Bewertung
    pub last_shown_at: Option<DateTime<Utc>>,
    /// Wurde schon einmal als Prompt gezeigt
    pub seen: bool,
    /// Hat schon einmal eine bewertete Antwort erhalten
    pub has_answered: bool,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            wrong_streak: 0,
            correct_streak: 0,
            due_at: DateTime::<Utc>::UNIX_EPOCH,
            last_shown_at: None,
            seen: false,
            has_answered: false,
        }
    }
}

/// Lernstufe für die Statusanzeige.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MasteryTier {
    /// Noch nie beantwortet
    New,
    /// Beantwortet, aber noch nicht gefestigt
    Learning,
    /// Mindestens [`MASTERED_CORRECT_STREAK`] richtige Antworten in Folge
    Mastered,
}

impl Stats {
    /// Überfällig: schon beantwortet und `due_at` erreicht.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.has_answered && self.due_at <= now
    }

    /// Ordnet den Wegpunkt einer Lernstufe zu.
    pub fn mastery_tier(&self) -> MasteryTier {
        if !self.has_answered {
            MasteryTier::New
        } else if self.correct_streak >= MASTERED_CORRECT_STREAK {
            MasteryTier::Mastered
        } else {
            MasteryTier::Learning
        }
    }

    /// `true`, wenn die Statistik dem Standardzustand entspricht.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Zählerstände der drei Lernstufen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MasteryCounts {
    pub new: usize,
    pub learning: usize,
    pub mastered: usize,
}

impl MasteryCounts {
    /// Zählt die Stufen über eine Menge von Statistiken.
    pub fn tally<'a>(stats: impl IntoIterator<Item = &'a Stats>) -> Self {
        let mut counts = Self::default();
        for s in stats {
            match s.mastery_tier() {
                MasteryTier::New => counts.new += 1,
                MasteryTier::Learning => counts.learning += 1,
                MasteryTier::Mastered => counts.mastered += 1,
            }
        }
        counts
    }
}

/// Persistierte Form der Statistik (Zeitstempel als Epoch-Millisekunden).
///
/// Alle Felder sind optional, damit ältere Datensätze ohne `seen`,
/// `hasAnswered` oder `version` lesbar bleiben.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default)]
    pub wrong_streak: Option<u32>,
    #[serde(default)]
    pub correct_streak: Option<u32>,
    #[serde(default)]
    pub due_at: Option<i64>,
    #[serde(default)]
    pub last_shown_at: Option<i64>,
    #[serde(default)]
    pub seen: Option<bool>,
    #[serde(default)]
    pub has_answered: Option<bool>,
}

impl StoredStats {
    /// Aktuelle Formatversion (mit expliziten `seen`/`hasAnswered`).
    pub const CURRENT_VERSION: u32 = 2;

    /// Überführt einen gespeicherten Datensatz in die kanonische Form.
    ///
    /// Vorhandene Felder überschreiben die Standardwerte. Fehlen `hasAnswered`
    /// oder `seen`, werden sie aus Aktivitätssignalen (Streaks, `dueAt`,
    /// `lastShownAt`) abgeleitet: jedes Signal zählt als "beantwortet".
    pub fn migrate(self) -> Stats {
        let defaults = Stats::default();
        let wrong_streak = self.wrong_streak.unwrap_or(defaults.wrong_streak);
        let correct_streak = self.correct_streak.unwrap_or(defaults.correct_streak);
        let due_at = self
            .due_at
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or(defaults.due_at);
        let last_shown_at = self
            .last_shown_at
            .filter(|ms| *ms > 0)
            .and_then(DateTime::<Utc>::from_timestamp_millis);

        let activity = wrong_streak > 0
            || correct_streak > 0
            || self.due_at.is_some_and(|ms| ms > 0)
            || last_shown_at.is_some();
        let has_answered = self.has_answered.unwrap_or(activity);
        let seen = self.seen.unwrap_or(has_answered || last_shown_at.is_some());

        // Ältere Datensätze können beide Streaks gesetzt haben
        let wrong_streak = if correct_streak > 0 && wrong_streak > 0 {
            0
        } else {
            wrong_streak
        };

        Stats {
            wrong_streak,
            correct_streak,
            due_at,
            last_shown_at,
            seen,
            has_answered,
        }
    }
}

impl From<&Stats> for StoredStats {
    fn from(stats: &Stats) -> Self {
        Self {
            version: Some(Self::CURRENT_VERSION),
            wrong_streak: Some(stats.wrong_streak),
            correct_streak: Some(stats.correct_streak),
            due_at: Some(stats.due_at.timestamp_millis()),
            last_shown_at: stats.last_shown_at.map(|t| t.timestamp_millis()),
            seen: Some(stats.seen),
            has_answered: Some(stats.has_answered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> StoredStats {
        serde_json::from_str(json).expect("gültiger Datensatz erwartet")
    }

    #[test]
    fn current_format_round_trips() {
        let stats = Stats {
            wrong_streak: 0,
            correct_streak: 2,
            due_at: DateTime::<Utc>::from_timestamp_millis(1_700_000_900_000).unwrap_or_default(),
            last_shown_at: DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000),
            seen: true,
            has_answered: true,
        };

        let json = serde_json::to_string(&StoredStats::from(&stats)).expect("serialisierbar");
        assert!(json.contains("\"hasAnswered\":true"));

        assert_eq!(parse(&json).migrate(), stats);
    }

    #[test]
    fn empty_record_migrates_to_defaults() {
        assert!(parse("{}").migrate().is_default());
    }

    #[test]
    fn legacy_due_at_marks_answered_and_seen() {
        let stats = parse(r#"{"wrongStreak":0,"correctStreak":0,"dueAt":1700000000000,"lastShownAt":0}"#)
            .migrate();

        assert!(stats.has_answered);
        assert!(stats.seen);
        assert_eq!(stats.last_shown_at, None);
    }

    #[test]
    fn legacy_streak_marks_answered() {
        let stats = parse(r#"{"wrongStreak":2,"dueAt":0}"#).migrate();

        assert!(stats.has_answered);
        assert_eq!(stats.wrong_streak, 2);
    }

    #[test]
    fn explicit_flags_win_over_heuristic() {
        let stats = parse(r#"{"correctStreak":1,"hasAnswered":false,"seen":false}"#).migrate();

        assert!(!stats.has_answered);
        assert!(!stats.seen);
    }

    #[test]
    fn legacy_conflicting_streaks_keep_correct_streak() {
        let stats = parse(r#"{"wrongStreak":1,"correctStreak":3}"#).migrate();

        assert_eq!(stats.wrong_streak, 0);
        assert_eq!(stats.correct_streak, 3);
    }

    #[test]
    fn mastery_tiers_follow_streaks() {
        let mut stats = Stats::default();
        assert_eq!(stats.mastery_tier(), MasteryTier::New);

        stats.has_answered = true;
        stats.correct_streak = 2;
        assert_eq!(stats.mastery_tier(), MasteryTier::Learning);

        stats.correct_streak = MASTERED_CORRECT_STREAK;
        assert_eq!(stats.mastery_tier(), MasteryTier::Mastered);

        let counts = MasteryCounts::tally([&Stats::default(), &stats]);
        assert_eq!(counts, MasteryCounts { new: 1, learning: 0, mastered: 1 });
    }
}
