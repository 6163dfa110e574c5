//! Builder für Render-Szenen aus dem AppState.

use glam::DVec2;

use crate::app::AppState;
use crate::shared::{
    MarkerStyle, RenderScene, SceneFlash, SceneMarker, ScenePolyline, SceneStyle,
};

fn to_screen(state: &AppState, world: DVec2) -> [f32; 2] {
    let screen = state.view.camera.world_to_screen(world);
    [screen.x as f32, screen.y as f32]
}

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Ohne Projektion bleibt die Szene leer (nur Hintergrund).
pub fn build(state: &AppState) -> RenderScene {
    let mut scene = RenderScene {
        viewport_size: state.view.viewport_size,
        style: SceneStyle::from_options(&state.options),
        ..RenderScene::default()
    };
    if state.dataset.projector.is_none() {
        return scene;
    }

    scene.boundaries = state
        .dataset
        .boundary_paths
        .iter()
        .map(|path| ScenePolyline {
            points: path.points.iter().map(|&p| to_screen(state, p)).collect(),
            closed: path.closed,
        })
        .collect();

    let target_id = state.session.current_target();
    let revealing = state.session.is_revealing();
    scene.markers = state
        .dataset
        .visible_waypoints()
        .filter_map(|wp| {
            let is_target = target_id == Some(wp.id.as_str());
            let style = if is_target && revealing {
                if !state.session.reveal_visible() {
                    return None;
                }
                MarkerStyle::RevealedTarget
            } else {
                MarkerStyle::Normal
            };
            Some(SceneMarker {
                waypoint_id: wp.id.clone(),
                position: to_screen(state, wp.position),
                style,
            })
        })
        .collect();

    let now = state.clock.now();
    scene.flashes = state
        .session
        .flashes()
        .iter()
        .filter_map(|flash| {
            let waypoint = state.dataset.waypoints.get(&flash.waypoint_id)?;
            Some(SceneFlash {
                waypoint_id: flash.waypoint_id.clone(),
                position: to_screen(state, waypoint.position),
                kind: flash.kind,
                remaining: flash.remaining(now),
            })
        })
        .collect();

    scene
}
