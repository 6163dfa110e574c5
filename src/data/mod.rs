//! Datensatz-Import: Boundary-GeoJSON und Wegpunkt-Listen.
//!
//! Der Loader liefert bereinigte Listen; Einträge ohne endliche
//! Koordinaten erreichen den Core nie.

pub mod loader;

use std::path::PathBuf;

use crate::core::{BoundaryFeature, WaypointRecord};

pub use loader::{load_from_paths, load_from_str, parse_boundaries, parse_waypoints};

/// Fehler beim Laden eines Datensatzes.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Datei konnte nicht gelesen werden
    #[error("Datei {path} konnte nicht gelesen werden: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Boundary-Quelle ist kein gültiges GeoJSON
    #[error("Boundary-GeoJSON ungültig: {0}")]
    Boundaries(#[source] serde_json::Error),
    /// Wegpunkt-Quelle ist keine gültige JSON-Liste
    #[error("Wegpunkt-Liste ungültig: {0}")]
    Waypoints(#[source] serde_json::Error),
    /// Nach dem Filtern blieb kein Wegpunkt übrig
    #[error("Datensatz enthält keine gültigen Wegpunkte")]
    NoWaypoints,
}

/// Vollständig geparster Datensatz, bereit für `install_dataset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Boundary-Features (Geometrie kann fehlen)
    pub boundaries: Vec<BoundaryFeature>,
    /// Wegpunkte mit endlichen Koordinaten und eindeutigen IDs
    pub waypoints: Vec<WaypointRecord>,
}

impl Dataset {
    /// Anzahl Boundary-Features mit Geometrie.
    pub fn boundary_count(&self) -> usize {
        self.boundaries
            .iter()
            .filter(|feature| feature.geometry.is_some())
            .count()
    }
}
