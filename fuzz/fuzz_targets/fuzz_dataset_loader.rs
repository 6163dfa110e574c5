#![no_main]

use airspace_trainer::data::{parse_boundaries, parse_waypoints};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Darf nie paniken; übernommene Wegpunkte haben immer endliche Koordinaten
    if let Ok(records) = parse_waypoints(text) {
        assert!(records
            .iter()
            .all(|wp| wp.longitude.is_finite() && wp.latitude.is_finite()));
    }
    if let Ok(features) = parse_boundaries(text) {
        for geometry in features.iter().filter_map(|f| f.geometry.as_ref()) {
            let _ = geometry.paths();
        }
    }
});
