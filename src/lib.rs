//! Airspace Trainer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod data;
pub mod persistence;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DatasetState, QuizSession, SessionPhase,
    UiState, ViewState,
};
pub use core::{
    Clock, GeoProjector, ManualClock, RegionSet, SpacedRepetitionScheduler, SpatialIndex,
    SpatialMatch, Stats, SystemClock, ViewportCamera, Waypoint, WaypointRecord,
};
pub use data::{load_from_paths, load_from_str, DataError, Dataset};
pub use persistence::{FileStore, KeyValueStore, MemoryStore, ProgressRepository};
pub use shared::{RenderScene, TrainerOptions};
