//! Parser für Boundary-FeatureCollections und Wegpunkt-Listen.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::{DataError, Dataset};
use crate::core::{BoundaryFeature, Geometry, WaypointRecord};

#[derive(Debug, Deserialize)]
struct RawFeatureCollection {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    geometry: Option<Value>,
    #[serde(default)]
    properties: Option<serde_json::Map<String, Value>>,
}

/// Wegpunkt-IDs kommen je nach Quelle als String oder Zahl.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWaypoint {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, alias = "fir", alias = "region")]
    region_code: Option<String>,
    #[serde(default, alias = "lon", alias = "lng")]
    longitude: Option<f64>,
    #[serde(default, alias = "lat")]
    latitude: Option<f64>,
}

/// Parsed eine GeoJSON-FeatureCollection.
///
/// Features mit unbekanntem oder kaputtem Geometrietyp werden übersprungen,
/// statt den ganzen Import abzubrechen.
pub fn parse_boundaries(json: &str) -> Result<Vec<BoundaryFeature>, DataError> {
    let collection: RawFeatureCollection =
        serde_json::from_str(json).map_err(DataError::Boundaries)?;

    let mut skipped = 0usize;
    let features = collection
        .features
        .into_iter()
        .map(|raw| {
            let geometry = match raw.geometry {
                None | Some(Value::Null) => None,
                Some(value) => match serde_json::from_value::<Geometry>(value) {
                    Ok(geometry) => Some(geometry),
                    Err(e) => {
                        log::debug!("Geometrie übersprungen: {}", e);
                        skipped += 1;
                        None
                    }
                },
            };
            BoundaryFeature {
                geometry,
                properties: raw.properties,
            }
        })
        .collect();

    if skipped > 0 {
        log::warn!("{} Boundary-Geometrien nicht lesbar", skipped);
    }
    Ok(features)
}

/// Parsed eine Wegpunkt-Liste und bereinigt sie.
///
/// Einträge ohne ID, Region oder endliche Koordinaten fallen heraus.
/// Bei doppelten IDs gewinnt das erste Vorkommen.
pub fn parse_waypoints(json: &str) -> Result<Vec<WaypointRecord>, DataError> {
    let raw: Vec<Value> = serde_json::from_str(json).map_err(DataError::Waypoints)?;
    let total = raw.len();

    let mut unreadable = 0usize;
    let mut seen_ids = HashSet::new();
    let mut records = Vec::with_capacity(total);
    for value in raw {
        // Einzelne kaputte Einträge (z.B. Koordinate als String) fallen nur selbst heraus
        let entry = match serde_json::from_value::<RawWaypoint>(value) {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Wegpunkt übersprungen: {}", e);
                unreadable += 1;
                continue;
            }
        };
        let Some(id) = entry.id.map(RawId::into_string) else {
            continue;
        };
        let Some(region_code) = entry.region_code.filter(|code| !code.trim().is_empty()) else {
            continue;
        };
        let (Some(longitude), Some(latitude)) = (entry.longitude, entry.latitude) else {
            continue;
        };
        if !longitude.is_finite() || !latitude.is_finite() {
            continue;
        }
        if !seen_ids.insert(id.clone()) {
            log::warn!("Doppelte Wegpunkt-ID {} ignoriert", id);
            continue;
        }

        records.push(WaypointRecord {
            name: entry.name.unwrap_or_else(|| id.clone()),
            id,
            region_code: region_code.trim().to_owned(),
            longitude,
            latitude,
        });
    }

    if records.len() < total {
        log::info!(
            "{} von {} Wegpunkten übernommen ({} nicht lesbar, Rest ungültig oder doppelt)",
            records.len(),
            total,
            unreadable
        );
    }
    Ok(records)
}

/// Parsed beide Quellen aus Strings.
pub fn load_from_str(boundaries_json: &str, waypoints_json: &str) -> Result<Dataset, DataError> {
    let boundaries = parse_boundaries(boundaries_json)?;
    let waypoints = parse_waypoints(waypoints_json)?;
    if waypoints.is_empty() {
        return Err(DataError::NoWaypoints);
    }

    Ok(Dataset {
        boundaries,
        waypoints,
    })
}

/// Liest und parsed beide Quellen von der Platte.
pub fn load_from_paths(
    boundaries_path: &Path,
    waypoints_path: &Path,
) -> Result<Dataset, DataError> {
    let boundaries_json = read_file(boundaries_path)?;
    let waypoints_json = read_file(waypoints_path)?;
    let dataset = load_from_str(&boundaries_json, &waypoints_json)?;

    log::info!(
        "Datensatz geladen: {} Boundaries, {} Wegpunkte",
        dataset.boundary_count(),
        dataset.waypoints.len()
    );
    Ok(dataset)
}

fn read_file(path: &Path) -> Result<String, DataError> {
    fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}
