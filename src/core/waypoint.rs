//! Wegpunkt: Identität, Region, Geo-Position, Planar-Position und Statistik.

use glam::DVec2;

use super::projection::GeoProjector;
use super::stats::Stats;

/// Bereinigter Wegpunkt-Datensatz aus dem Loader (Koordinaten endlich).
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointRecord {
    /// Stabile, im Datensatz eindeutige ID
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Region (FIR), zu der der Wegpunkt gehört
    pub region_code: String,
    /// Länge in Grad
    pub longitude: f64,
    /// Breite in Grad
    pub latitude: f64,
}

/// Abfragbarer Wegpunkt mit projizierter Position und eigener Statistik.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub id: String,
    pub name: String,
    pub region_code: String,
    pub longitude: f64,
    pub latitude: f64,
    /// Planar-Position (aus dem aktuellen Projektor)
    pub position: DVec2,
    /// Antwort-Statistik (gehört genau diesem Wegpunkt)
    pub stats: Stats,
}

impl Waypoint {
    /// Erstellt einen Wegpunkt und projiziert ihn sofort.
    pub fn from_record(record: WaypointRecord, projector: &GeoProjector) -> Self {
        let position = projector.project(record.longitude, record.latitude);
        Self {
            id: record.id,
            name: record.name,
            region_code: record.region_code,
            longitude: record.longitude,
            latitude: record.latitude,
            position,
            stats: Stats::default(),
        }
    }

    /// Anzeigetext für den Prompt.
    pub fn prompt_label(&self) -> String {
        format!("{} ({})", self.name, self.region_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projection::GeoBounds;

    #[test]
    fn from_record_projects_position() {
        let bounds: GeoBounds = [(8.0, 48.0), (9.0, 49.0)].into_iter().collect();
        let projector = GeoProjector::from_bounds(&bounds).expect("Projektor erwartet");
        let record = WaypointRecord {
            id: "ABTAL".into(),
            name: "ABTAL".into(),
            region_code: "EDMM".into(),
            longitude: 8.5,
            latitude: 48.5,
        };

        let waypoint = Waypoint::from_record(record, &projector);

        assert_eq!(waypoint.position, projector.project(8.5, 48.5));
        assert!(waypoint.stats.is_default());
        assert_eq!(waypoint.prompt_label(), "ABTAL (EDMM)");
    }
}
