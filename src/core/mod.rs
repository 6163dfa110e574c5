//! Core-Domänentypen: Projektion, Kamera, Geometrie, Wegpunkte, Statistik,
//! Scheduler, Spatial-Index und Regionen.

pub mod camera;
pub mod clock;
pub mod geometry;
pub mod projection;
pub mod regions;
pub mod scheduler;
pub mod spatial;
pub mod stats;
pub mod waypoint;

pub use camera::{PlanarBounds, ViewportCamera};
pub use clock::{Clock, ManualClock, SystemClock};
pub use geometry::{BoundaryFeature, GeoPath, Geometry, PathKind, Position};
pub use projection::{GeoBounds, GeoProjector};
pub use regions::RegionSet;
pub use scheduler::SpacedRepetitionScheduler;
pub use spatial::{SpatialIndex, SpatialMatch};
pub use stats::{MasteryCounts, MasteryTier, Stats, StoredStats};
pub use waypoint::{Waypoint, WaypointRecord};
