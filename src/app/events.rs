//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use std::sync::Arc;

use glam::DVec2;

use crate::data::Dataset;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um ein Pixel-Delta verschieben
    CameraPan { delta: DVec2 },
    /// Kamera um einen Faktor zoomen, verankert an einem Screen-Punkt
    CameraZoom { factor: f64, anchor: DVec2 },
    /// Stufenweise hineinzoomen (Canvas-Mitte)
    ZoomInRequested,
    /// Stufenweise herauszoomen (Canvas-Mitte)
    ZoomOutRequested,
    /// Ansicht auf die sichtbaren Wegpunkte einpassen
    ResetViewRequested,
    /// Tap auf den Canvas (Screen-Koordinaten)
    TapRequested { screen_pos: DVec2 },
    /// Einzelne Region aktivieren/deaktivieren
    RegionToggled { code: String, enabled: bool },
    /// Alle Regionen aktivieren/deaktivieren
    AllRegionsToggled { enabled: bool },
    /// Aktuelles Ziel ohne Wertung überspringen
    SkipTargetRequested,
    /// Lernfortschritt aller Wegpunkte zurücksetzen
    ResetProgressRequested,
    /// Datensatz wurde erfolgreich geladen
    DatasetLoaded { dataset: Arc<Dataset> },
    /// Datensatz konnte nicht geladen werden
    DatasetLoadFailed { message: String },
    /// Frame-Loop meldet, dass ein Timer fällig sein könnte
    TimersElapsed,
}

/// Commands sind mutierende Operationen auf dem AppState.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Viewport-Größe setzen (passt die Kamera neu ein)
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: DVec2 },
    /// Kamera am Anker zoomen
    ZoomCamera { factor: f64, anchor: DVec2 },
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera auf die Region of Interest einpassen
    ResetView,
    /// Tap bewerten
    JudgeTap { screen_pos: DVec2 },
    /// Region aktivieren/deaktivieren
    SetRegionEnabled { code: String, enabled: bool },
    /// Alle Regionen aktivieren/deaktivieren
    SetAllRegionsEnabled { enabled: bool },
    /// Nächstes Ziel ohne Wertung wählen
    SkipTarget,
    /// Alle Statistiken auf Standardwerte setzen
    ResetProgress,
    /// Datensatz atomar übernehmen
    InstallDataset { dataset: Arc<Dataset> },
    /// Ladefehler festhalten, Quiz inert schalten
    RecordLoadFailure { message: String },
    /// Reveal-Blinken und Feedback-Pulse fortschreiben
    AdvanceTimers,
}
