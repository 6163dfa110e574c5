//! Render-Szene als expliziter Übergabevertrag zwischen App und Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.
//! Alle Koordinaten liegen bereits in Screen-Pixeln (relativ zum Canvas).

use super::options::TrainerOptions;

/// Farben und Größen, die der Painter pro Frame braucht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    pub waypoint_radius_px: f32,
    pub waypoint_color: [f32; 4],
    pub target_color: [f32; 4],
    pub success_color: [f32; 4],
    pub failure_color: [f32; 4],
    pub boundary_stroke_px: f32,
    pub boundary_color: [f32; 4],
}

impl SceneStyle {
    /// Übernimmt die Darstellungswerte aus den Optionen.
    pub fn from_options(options: &TrainerOptions) -> Self {
        Self {
            waypoint_radius_px: options.waypoint_radius_px,
            waypoint_color: options.waypoint_color,
            target_color: options.target_color,
            success_color: options.success_color,
            failure_color: options.failure_color,
            boundary_stroke_px: options.boundary_stroke_px,
            boundary_color: options.boundary_color,
        }
    }
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self::from_options(&TrainerOptions::default())
    }
}

/// Darstellungsart eines Wegpunkt-Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Normaler sichtbarer Wegpunkt
    Normal,
    /// Ziel im Reveal-Modus (sichtbare Blink-Phase)
    RevealedTarget,
}

/// Art eines Feedback-Pulses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Failure,
}

/// Ein Boundary-Linienzug in Screen-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePolyline {
    pub points: Vec<[f32; 2]>,
    /// Ring (letzter Punkt wird mit dem ersten verbunden)
    pub closed: bool,
}

/// Ein Wegpunkt-Marker in Screen-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMarker {
    pub waypoint_id: String,
    pub position: [f32; 2],
    pub style: MarkerStyle,
}

/// Ein aktiver Feedback-Puls.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFlash {
    pub waypoint_id: String,
    pub position: [f32; 2],
    pub kind: FeedbackKind,
    /// Verbleibender Anteil der Anzeigedauer (1.0 = gerade ausgelöst)
    pub remaining: f32,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Boundary-Linienzüge
    pub boundaries: Vec<ScenePolyline>,
    /// Sichtbare Wegpunkte (ohne ausgeblendetes Ziel)
    pub markers: Vec<SceneMarker>,
    /// Aktive Feedback-Pulse
    pub flashes: Vec<SceneFlash>,
    /// Farben und Größen
    pub style: SceneStyle,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas außer dem Hintergrund zu zeichnen ist.
    pub fn has_content(&self) -> bool {
        !self.boundaries.is_empty() || !self.markers.is_empty() || !self.flashes.is_empty()
    }
}
