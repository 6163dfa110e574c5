use airspace_trainer::persistence::repository::stats_key;
use airspace_trainer::{
    load_from_paths, AppController, AppIntent, AppState, DataError, FileStore, KeyValueStore,
    ManualClock, MemoryStore, ProgressRepository, SessionPhase, SpacedRepetitionScheduler,
    TrainerOptions,
};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn state_with_store(store: impl KeyValueStore + 'static) -> AppState {
    let clock = ManualClock::new(
        DateTime::<Utc>::from_timestamp_millis(1_700_000_000_000)
            .expect("gültiger Zeitpunkt erwartet"),
    );
    AppState::with_parts(
        TrainerOptions::default(),
        ProgressRepository::new(store),
        Box::new(clock),
        SpacedRepetitionScheduler::with_seed(3),
    )
}

#[test]
fn test_fixture_dataset_is_cleaned_on_load() {
    let dataset = load_from_paths(&fixture("boundaries.geojson"), &fixture("waypoints.json"))
        .expect("Fixture sollte ladbar sein");

    assert_eq!(dataset.boundary_count(), 4);
    let ids: Vec<&str> = dataset.waypoints.iter().map(|wp| wp.id.as_str()).collect();
    assert_eq!(ids, ["ANORA", "BETES", "42", "NONAME"]);
    assert_eq!(dataset.waypoints[0].name, "ANORA");
    assert_eq!(dataset.waypoints[3].name, "NONAME");
    assert_eq!(dataset.waypoints[2].region_code, "LOVV");
}

#[test]
fn test_dataset_without_valid_waypoints_is_rejected() {
    let result = load_from_paths(
        &fixture("boundaries.geojson"),
        &fixture("empty_waypoints.json"),
    );

    assert!(matches!(result, Err(DataError::NoWaypoints)));
}

#[test]
fn test_missing_file_reports_path() {
    let missing = fixture("does_not_exist.json");

    let err = load_from_paths(&missing, &fixture("waypoints.json"))
        .expect_err("Fehler für fehlende Datei erwartet");

    match err {
        DataError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("Unerwarteter Fehler: {other:?}"),
    }
}

#[test]
fn test_legacy_stats_are_migrated_on_install() {
    let mut store = MemoryStore::new();
    // Altes Format ohne version/seen/hasAnswered
    store
        .set(&stats_key("ANORA"), r#"{"wrongStreak":0,"correctStreak":4,"dueAt":1}"#)
        .expect("Schreiben sollte klappen");
    store
        .set("enabled_regions", r#"["EDMM"]"#)
        .expect("Schreiben sollte klappen");

    let dataset = load_from_paths(&fixture("boundaries.geojson"), &fixture("waypoints.json"))
        .expect("Fixture sollte ladbar sein");
    let mut state = state_with_store(store);
    AppController::new()
        .handle_intent(
            &mut state,
            AppIntent::DatasetLoaded {
                dataset: Arc::new(dataset),
            },
        )
        .expect("DatasetLoaded sollte ohne Fehler durchlaufen");

    let stats = &state.dataset.waypoints["ANORA"].stats;
    assert_eq!(stats.correct_streak, 4);
    assert!(stats.has_answered);
    assert!(stats.seen);

    assert!(state.dataset.regions.is_enabled("EDMM"));
    assert!(!state.dataset.regions.is_enabled("LOVV"));
    assert_eq!(state.dataset.visible_count(), 2);
    let target = state.current_target().expect("Ziel erwartet");
    assert_eq!(target.region_code, "EDMM");
}

#[test]
fn test_file_store_keeps_progress_between_sessions() {
    let path = std::env::temp_dir().join(format!(
        "airspace_trainer_flow_{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let dataset = Arc::new(
        load_from_paths(&fixture("boundaries.geojson"), &fixture("waypoints.json"))
            .expect("Fixture sollte ladbar sein"),
    );

    let mut controller = AppController::new();
    let mut first = state_with_store(FileStore::open(&path).expect("Öffnen sollte klappen"));
    controller
        .handle_intent(
            &mut first,
            AppIntent::DatasetLoaded {
                dataset: dataset.clone(),
            },
        )
        .expect("DatasetLoaded sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut first,
            AppIntent::RegionToggled {
                code: "LOVV".into(),
                enabled: false,
            },
        )
        .expect("RegionToggled sollte ohne Fehler durchlaufen");
    let seen_target = first
        .session
        .current_target()
        .expect("Ziel erwartet")
        .to_owned();

    let mut second = state_with_store(FileStore::open(&path).expect("Öffnen sollte klappen"));
    controller
        .handle_intent(&mut second, AppIntent::DatasetLoaded { dataset })
        .expect("DatasetLoaded sollte ohne Fehler durchlaufen");

    assert!(!second.dataset.regions.is_enabled("LOVV"));
    assert!(second.dataset.waypoints[&seen_target].stats.seen);
    assert_eq!(second.session.phase(), SessionPhase::Prompting);

    let _ = std::fs::remove_file(&path);
}
