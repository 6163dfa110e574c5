//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => {
            if state.view.viewport_size == size {
                Vec::new()
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { factor, anchor } => {
            if factor.is_finite() && factor > 0.0 {
                vec![AppCommand::ZoomCamera { factor, anchor }]
            } else {
                Vec::new()
            }
        }
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::TapRequested { screen_pos } => vec![AppCommand::JudgeTap { screen_pos }],
        AppIntent::RegionToggled { code, enabled } => {
            vec![AppCommand::SetRegionEnabled { code, enabled }]
        }
        AppIntent::AllRegionsToggled { enabled } => {
            vec![AppCommand::SetAllRegionsEnabled { enabled }]
        }
        AppIntent::SkipTargetRequested => vec![AppCommand::SkipTarget],
        AppIntent::ResetProgressRequested => vec![AppCommand::ResetProgress],
        AppIntent::DatasetLoaded { dataset } => vec![AppCommand::InstallDataset { dataset }],
        AppIntent::DatasetLoadFailed { message } => {
            vec![AppCommand::RecordLoadFailure { message }]
        }
        AppIntent::TimersElapsed => {
            let now = state.clock.now();
            match state.session.next_deadline() {
                Some(deadline) if deadline <= now => vec![AppCommand::AdvanceTimers],
                _ => Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn tap_maps_to_judge() {
        let state = AppState::new();
        let screen_pos = DVec2::new(10.0, 20.0);

        let commands = map_intent_to_commands(&state, AppIntent::TapRequested { screen_pos });

        assert!(matches!(
            commands.as_slice(),
            [AppCommand::JudgeTap { screen_pos: p }] if *p == screen_pos
        ));
    }

    #[test]
    fn invalid_zoom_factor_is_dropped() {
        let state = AppState::new();

        let commands = map_intent_to_commands(
            &state,
            AppIntent::CameraZoom {
                factor: f64::NAN,
                anchor: DVec2::ZERO,
            },
        );

        assert!(commands.is_empty());
    }

    #[test]
    fn unchanged_viewport_size_is_dropped() {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];

        let same = map_intent_to_commands(&state, AppIntent::ViewportResized { size: [800.0, 600.0] });
        let changed =
            map_intent_to_commands(&state, AppIntent::ViewportResized { size: [1024.0, 600.0] });

        assert!(same.is_empty());
        assert_eq!(changed.len(), 1);
    }

    #[test]
    fn timers_without_deadline_do_nothing() {
        let state = AppState::new();

        assert!(map_intent_to_commands(&state, AppIntent::TimersElapsed).is_empty());
    }
}
