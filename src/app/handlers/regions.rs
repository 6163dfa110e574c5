//! Handler für die Regionsauswahl.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktiviert oder deaktiviert eine Region.
pub fn set_enabled(state: &mut AppState, code: &str, enabled: bool) {
    use_cases::regions::set_region_enabled(state, code, enabled);
}

/// Aktiviert oder deaktiviert alle Regionen.
pub fn set_all_enabled(state: &mut AppState, enabled: bool) {
    use_cases::regions::set_all_regions_enabled(state, enabled);
}
