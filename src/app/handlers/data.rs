//! Handler für Datensatz-Übernahme und Ladefehler.

use crate::app::use_cases;
use crate::app::AppState;
use crate::data::Dataset;

/// Übernimmt einen geladenen Datensatz.
pub fn install(state: &mut AppState, dataset: &Dataset) {
    use_cases::dataset::install_dataset(state, dataset);
}

/// Hält einen Ladefehler fest.
pub fn record_failure(state: &mut AppState, message: String) {
    use_cases::dataset::record_load_failure(state, message);
}
