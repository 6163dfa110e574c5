//! Use-Case-Funktionen für das Übernehmen eines geladenen Datensatzes.

use indexmap::IndexMap;

use crate::app::state::{DatasetState, PlanarPath};
use crate::app::AppState;
use crate::core::{GeoBounds, GeoProjector, RegionSet, Waypoint};
use crate::data::Dataset;

use super::{camera, quiz};

/// Übernimmt einen Datensatz vollständig oder gar nicht.
///
/// Projiziert Wegpunkte und Boundaries, stellt Statistiken und
/// Regionsauswahl aus dem Store wieder her, passt die Kamera ein
/// und wählt das erste Ziel.
pub fn install_dataset(state: &mut AppState, dataset: &Dataset) {
    let mut geo_bounds = GeoBounds::empty();
    for record in &dataset.waypoints {
        geo_bounds.include(record.longitude, record.latitude);
    }
    for feature in &dataset.boundaries {
        if let Some(geometry) = &feature.geometry {
            geometry.visit_coords(&mut |lon, lat| geo_bounds.include(lon, lat));
        }
    }

    let mut next = DatasetState {
        geo_bounds,
        ..DatasetState::default()
    };

    if let Some(projector) = GeoProjector::from_bounds(&geo_bounds) {
        next.waypoints = project_waypoints(state, dataset, &projector);
        next.boundary_paths = dataset
            .boundaries
            .iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .flat_map(|geometry| geometry.paths())
            .map(|path| PlanarPath {
                points: path
                    .points
                    .iter()
                    .map(|&(lon, lat)| projector.project(lon, lat))
                    .collect(),
                closed: path.closed,
            })
            .collect();
        next.projector = Some(projector);
    } else {
        log::warn!("Datensatz ohne endliche Koordinaten: nichts darstellbar");
    }

    next.regions = RegionSet::from_codes(next.waypoints.values().map(|wp| wp.region_code.as_str()));
    if let Some(stored) = state.progress.load_enabled_regions() {
        next.regions.restore_enabled(&stored);
    }
    next.rebuild_spatial_index();

    log::info!(
        "Datensatz übernommen: {} Wegpunkte, {} Boundary-Pfade, {} Regionen, mittlere Breite {:.2}°",
        next.waypoints.len(),
        next.boundary_paths.len(),
        next.regions.len(),
        next.geo_bounds.mean_latitude()
    );

    state.dataset = next;
    state.ui.load_error = None;
    state.session.clear_target();
    state.view.request_redraw();

    camera::reset_view(state);
    quiz::select_next_target(state, None);
}

fn project_waypoints(
    state: &AppState,
    dataset: &Dataset,
    projector: &GeoProjector,
) -> IndexMap<String, Waypoint> {
    let mut restored = 0usize;
    let waypoints = dataset
        .waypoints
        .iter()
        .map(|record| {
            let mut waypoint = Waypoint::from_record(record.clone(), projector);
            if let Some(stats) = state.progress.load_stats(&waypoint.id) {
                waypoint.stats = stats;
                restored += 1;
            }
            (waypoint.id.clone(), waypoint)
        })
        .collect();

    if restored > 0 {
        log::info!("{} Statistiken aus dem Store übernommen", restored);
    }
    waypoints
}

/// Hält einen Ladefehler fest. Es wird kein Teilzustand übernommen;
/// das Quiz bleibt für diesen Ladeversuch inert.
pub fn record_load_failure(state: &mut AppState, message: String) {
    log::error!("Datensatz konnte nicht geladen werden: {}", message);
    state.dataset = DatasetState::default();
    state.session.clear_target();
    state.ui.load_error = Some(message);
    state.view.request_redraw();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::session::SessionPhase;
    use crate::core::{BoundaryFeature, Geometry, Position, WaypointRecord};

    fn record(id: &str, region: &str, lon: f64, lat: f64) -> WaypointRecord {
        WaypointRecord {
            id: id.into(),
            name: id.into(),
            region_code: region.into(),
            longitude: lon,
            latitude: lat,
        }
    }

    #[test]
    fn install_projects_and_selects_first_target() {
        let mut state = AppState::new();
        let dataset = Dataset {
            boundaries: vec![BoundaryFeature {
                geometry: Some(Geometry::LineString {
                    coordinates: Some(vec![Position::new(10.0, 47.0), Position::new(12.0, 49.0)]),
                }),
                properties: None,
            }],
            waypoints: vec![record("A", "EDMM", 11.0, 48.0), record("B", "LOVV", 11.5, 48.2)],
        };

        install_dataset(&mut state, &dataset);

        assert!(state.dataset.projector.is_some());
        assert_eq!(state.dataset.waypoints.len(), 2);
        assert_eq!(state.dataset.boundary_paths.len(), 1);
        assert_eq!(state.dataset.spatial.len(), 2);
        assert_eq!(state.session.phase(), SessionPhase::Prompting);
        let target = state.current_target().expect("Ziel erwartet");
        assert!(target.stats.seen);
    }

    #[test]
    fn install_restores_enabled_regions() {
        let mut state = AppState::new();
        state.progress.persist_enabled_regions(&["LOVV".to_string()]);
        let dataset = Dataset {
            boundaries: Vec::new(),
            waypoints: vec![record("A", "EDMM", 11.0, 48.0), record("B", "LOVV", 14.0, 47.5)],
        };

        install_dataset(&mut state, &dataset);

        assert!(!state.dataset.regions.is_enabled("EDMM"));
        assert_eq!(state.dataset.spatial.len(), 1);
        assert_eq!(state.session.current_target(), Some("B"));
    }

    #[test]
    fn load_failure_discards_previous_dataset() {
        let mut state = AppState::new();
        install_dataset(
            &mut state,
            &Dataset {
                boundaries: Vec::new(),
                waypoints: vec![record("A", "EDMM", 11.0, 48.0)],
            },
        );

        record_load_failure(&mut state, "Netzwerkfehler".into());

        assert_eq!(state.session.phase(), SessionPhase::Idle);
        assert!(state.dataset.waypoints.is_empty());
        assert_eq!(state.prompt_text(), "Netzwerkfehler");
    }
}
