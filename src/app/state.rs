//! Application State: zentrale Datenhaltung.

use glam::DVec2;
use indexmap::IndexMap;

use super::session::QuizSession;
use super::CommandLog;
use crate::core::{
    Clock, GeoBounds, GeoProjector, MasteryCounts, PlanarBounds, RegionSet,
    SpacedRepetitionScheduler, SpatialIndex, SystemClock, ViewportCamera, Waypoint,
};
use crate::persistence::ProgressRepository;
use crate::shared::TrainerOptions;

/// Platzhalter im Prompt, wenn kein Ziel existiert.
pub const NO_TARGET_PLACEHOLDER: &str = "—";
/// Prompt-Text, wenn keine Region aktiviert ist.
pub const NO_REGION_MESSAGE: &str = "Keine Region aktiviert";

/// Projizierter Boundary-Linienzug in Planar-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarPath {
    pub points: Vec<DVec2>,
    pub closed: bool,
}

/// Geladener und projizierter Datensatz.
#[derive(Debug, Clone, Default)]
pub struct DatasetState {
    /// Wegpunkte nach ID (Reihenfolge des Datensatzes)
    pub waypoints: IndexMap<String, Waypoint>,
    /// Boundary-Linienzüge in Planar-Koordinaten
    pub boundary_paths: Vec<PlanarPath>,
    /// Geo-Ausdehnung aller endlichen Koordinaten
    pub geo_bounds: GeoBounds,
    /// Projektor (None = keine endlichen Koordinaten)
    pub projector: Option<GeoProjector>,
    /// Bekannte und aktivierte Regionen
    pub regions: RegionSet,
    /// Spatial-Index über den sichtbaren Wegpunkten
    pub spatial: SpatialIndex,
}

impl DatasetState {
    /// Gibt `true` zurück, wenn ein Wegpunkt sichtbar (Region aktiv) ist.
    pub fn is_visible(&self, waypoint: &Waypoint) -> bool {
        self.regions.is_enabled(&waypoint.region_code)
    }

    /// Alle sichtbaren Wegpunkte.
    pub fn visible_waypoints(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.values().filter(|wp| self.is_visible(wp))
    }

    /// Anzahl sichtbarer Wegpunkte.
    pub fn visible_count(&self) -> usize {
        self.visible_waypoints().count()
    }

    /// Baut den Spatial-Index über den sichtbaren Wegpunkten neu.
    pub fn rebuild_spatial_index(&mut self) {
        let regions = &self.regions;
        self.spatial = SpatialIndex::from_positions(
            self.waypoints
                .values()
                .enumerate()
                .filter(|(_, wp)| regions.is_enabled(&wp.region_code))
                .map(|(index, wp)| (index, wp.position)),
        );
    }

    /// Planar-Bounds der sichtbaren Wegpunkte, sonst aller Boundaries.
    pub fn region_of_interest(&self) -> Option<PlanarBounds> {
        let waypoint_bounds: PlanarBounds = self.visible_waypoints().map(|wp| wp.position).collect();
        if !waypoint_bounds.is_empty() {
            return Some(waypoint_bounds);
        }
        let boundary_bounds: PlanarBounds = self
            .boundary_paths
            .iter()
            .flat_map(|path| path.points.iter().copied())
            .collect();
        (!boundary_bounds.is_empty()).then_some(boundary_bounds)
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Kamera (Planar → Screen)
    pub camera: ViewportCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    redraw_requested: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new(options: &TrainerOptions) -> Self {
        Self {
            camera: ViewportCamera::new(options.min_scale, options.max_scale),
            viewport_size: [0.0, 0.0],
            redraw_requested: true,
        }
    }

    /// Viewport-Größe als Vektor.
    pub fn canvas_size(&self) -> DVec2 {
        DVec2::new(self.viewport_size[0] as f64, self.viewport_size[1] as f64)
    }

    /// Markiert, dass ein Redraw nötig ist. Mehrfache Aufrufe fallen zusammen.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Liefert und löscht das Redraw-Flag (höchstens ein Redraw pro Frame).
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn redraw_pending(&self) -> bool {
        self.redraw_requested
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Fehlermeldung des letzten Ladeversuchs (ersetzt den Prompt)
    pub load_error: Option<String>,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Datensatz (Wegpunkte, Boundaries, Regionen, Index)
    pub dataset: DatasetState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Quiz-Session
    pub session: QuizSession,
    /// Spaced-Repetition-Scheduler
    pub scheduler: SpacedRepetitionScheduler,
    /// Persistenz für Statistiken und Regionsauswahl
    pub progress: ProgressRepository,
    /// Zeitquelle
    pub clock: Box<dyn Clock>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: TrainerOptions,
}

impl AppState {
    /// Erstellt einen leeren App-State mit Standard-Optionen und In-Memory-Store.
    pub fn new() -> Self {
        Self::with_parts(
            TrainerOptions::default(),
            ProgressRepository::default(),
            Box::new(SystemClock),
            SpacedRepetitionScheduler::new(),
        )
    }

    /// Erstellt einen App-State aus expliziten Abhängigkeiten.
    pub fn with_parts(
        mut options: TrainerOptions,
        progress: ProgressRepository,
        clock: Box<dyn Clock>,
        scheduler: SpacedRepetitionScheduler,
    ) -> Self {
        options.sanitize();
        Self {
            dataset: DatasetState::default(),
            view: ViewState::new(&options),
            ui: UiState::new(),
            session: QuizSession::new(),
            scheduler,
            progress,
            clock,
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Aktuelles Ziel als Wegpunkt.
    pub fn current_target(&self) -> Option<&Waypoint> {
        self.dataset.waypoints.get(self.session.current_target()?)
    }

    /// Prompt-Text für die Statuszeile.
    pub fn prompt_text(&self) -> String {
        if let Some(error) = &self.ui.load_error {
            return error.clone();
        }
        if !self.dataset.regions.is_empty() && self.dataset.regions.none_enabled() {
            return NO_REGION_MESSAGE.to_string();
        }
        match self.current_target() {
            Some(target) => target.prompt_label(),
            None => NO_TARGET_PLACEHOLDER.to_string(),
        }
    }

    /// Lernstufen der sichtbaren Wegpunkte.
    pub fn mastery_counts(&self) -> MasteryCounts {
        MasteryCounts::tally(self.dataset.visible_waypoints().map(|wp| &wp.stats))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
