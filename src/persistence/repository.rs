//! Lernfortschritt und Regionsauswahl über einem [`KeyValueStore`].

use super::store::{KeyValueStore, MemoryStore};
use crate::core::{Stats, StoredStats};

/// Schlüssel der gespeicherten Regionsauswahl.
pub const ENABLED_REGIONS_KEY: &str = "enabled_regions";

/// Schlüssel der Statistik eines Wegpunkts.
pub fn stats_key(waypoint_id: &str) -> String {
    format!("stats/{}", waypoint_id)
}

/// Liest und schreibt Statistiken und Regionsauswahl (best effort).
pub struct ProgressRepository {
    store: Box<dyn KeyValueStore>,
}

impl ProgressRepository {
    /// Erstellt ein Repository über einem beliebigen Store.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Lädt die Statistik eines Wegpunkts und migriert ältere Formate.
    ///
    /// Fehlende oder unlesbare Einträge ergeben `None`.
    pub fn load_stats(&self, waypoint_id: &str) -> Option<Stats> {
        let key = stats_key(waypoint_id);
        let raw = match self.store.get(&key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("Statistik {} nicht lesbar: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str::<StoredStats>(&raw) {
            Ok(stored) => Some(stored.migrate()),
            Err(e) => {
                log::warn!("Statistik {} verworfen: {}", key, e);
                None
            }
        }
    }

    /// Schreibt die Statistik eines Wegpunkts. Gibt `false` bei Fehlern zurück.
    pub fn persist_stats(&mut self, waypoint_id: &str, stats: &Stats) -> bool {
        let key = stats_key(waypoint_id);
        let result = serde_json::to_string(&StoredStats::from(stats))
            .map_err(Into::into)
            .and_then(|json| self.store.set(&key, &json));
        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Statistik {} nicht gespeichert: {}", key, e);
                false
            }
        }
    }

    /// Lädt die gespeicherte Regionsauswahl (`None`, wenn nie gespeichert).
    pub fn load_enabled_regions(&self) -> Option<Vec<String>> {
        let raw = match self.store.get(ENABLED_REGIONS_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("Regionsauswahl nicht lesbar: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(codes) => Some(codes),
            Err(e) => {
                log::warn!("Regionsauswahl verworfen: {}", e);
                None
            }
        }
    }

    /// Schreibt die Regionsauswahl. Gibt `false` bei Fehlern zurück.
    pub fn persist_enabled_regions(&mut self, codes: &[String]) -> bool {
        let result = serde_json::to_string(codes)
            .map_err(Into::into)
            .and_then(|json| self.store.set(ENABLED_REGIONS_KEY, &json));
        match result {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Regionsauswahl nicht gespeichert: {}", e);
                false
            }
        }
    }
}

impl Default for ProgressRepository {
    fn default() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl std::fmt::Debug for ProgressRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressRepository").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[test]
    fn stats_round_trip_through_store() {
        let backend = MemoryStore::new();
        let mut repo = ProgressRepository::new(backend.clone());
        let stats = Stats {
            correct_streak: 2,
            due_at: DateTime::<Utc>::from_timestamp_millis(5_000).unwrap_or_default(),
            seen: true,
            has_answered: true,
            ..Stats::default()
        };

        assert!(repo.persist_stats("WP1", &stats));

        assert_eq!(repo.load_stats("WP1"), Some(stats));
        assert!(backend.get("stats/WP1").expect("Lesen sollte klappen").is_some());
    }

    #[test]
    fn legacy_record_is_migrated_on_load() {
        let mut backend = MemoryStore::new();
        backend
            .set("stats/OLD", r#"{"wrongStreak":1,"dueAt":1700000000000}"#)
            .expect("Schreiben sollte klappen");
        let repo = ProgressRepository::new(backend);

        let stats = repo.load_stats("OLD").expect("Statistik erwartet");

        assert!(stats.has_answered);
        assert!(stats.seen);
        assert_eq!(stats.wrong_streak, 1);
    }

    #[test]
    fn garbage_and_failures_are_swallowed() {
        let mut backend = MemoryStore::new();
        backend
            .set("stats/BAD", "not json")
            .expect("Schreiben sollte klappen");
        let repo = ProgressRepository::new(backend);
        assert!(repo.load_stats("BAD").is_none());

        let mut failing = ProgressRepository::new(MemoryStore::read_only());
        assert!(!failing.persist_stats("A", &Stats::default()));
        assert!(!failing.persist_enabled_regions(&["EDMM".to_string()]));
        assert!(failing.load_enabled_regions().is_none());
    }

    #[test]
    fn enabled_regions_round_trip() {
        let mut repo = ProgressRepository::default();
        let codes = vec!["EDGG".to_string(), "LOVV".to_string()];

        assert!(repo.persist_enabled_regions(&codes));

        assert_eq!(repo.load_enabled_regions(), Some(codes));
    }
}
