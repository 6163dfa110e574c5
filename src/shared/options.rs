//! Zentrale Konfiguration für den Airspace-Trainer.
//!
//! `TrainerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimale Skala (Pixel pro Planar-Einheit).
pub const MIN_SCALE: f64 = 7000.0;
/// Maximale Skala (Pixel pro Planar-Einheit).
pub const MAX_SCALE: f64 = 25000.0;
/// Anteil der Canvas-Fläche, den `fit_to_bounds` ausfüllt.
pub const FIT_FILL_FACTOR: f64 = 0.9;
/// Zoom-Schritt der Zoom-Buttons.
pub const ZOOM_STEP: f64 = 1.25;
/// Exponent-Faktor für Mausrad-Zoom: `factor = exp(-delta_y · k)`.
pub const WHEEL_ZOOM_K: f64 = 0.0015;

// ── Gesten ──────────────────────────────────────────────────────────

/// Tap-Toleranz in Screen-Pixeln (unabhängig vom Zoom).
pub const TAP_TOLERANCE_PX: f64 = 22.0;
/// Ab dieser Bewegung in Pixeln wird aus einem Tap ein Drag.
pub const DRAG_THRESHOLD_PX: f64 = 8.0;
/// Mindestabstand zwischen zwei Taps.
pub const TAP_COOLDOWN_MS: u64 = 250;

// ── Quiz ────────────────────────────────────────────────────────────

/// Falsche Antworten in Folge bis zum Reveal-Modus.
pub const REVEAL_AFTER_WRONG: u32 = 3;
/// Blink-Intervall im Reveal-Modus.
pub const REVEAL_BLINK_MS: u64 = 450;
/// Anzeigedauer eines Feedback-Pulses.
pub const FEEDBACK_FLASH_MS: u64 = 700;

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius eines Wegpunkt-Markers in Pixeln.
pub const WAYPOINT_RADIUS_PX: f32 = 4.0;
/// Farbe normaler Wegpunkte (RGBA: Hellgrau).
pub const WAYPOINT_COLOR: [f32; 4] = [0.85, 0.85, 0.85, 1.0];
/// Farbe des hervorgehobenen Ziels im Reveal-Modus (RGBA: Gelb).
pub const TARGET_COLOR: [f32; 4] = [1.0, 0.85, 0.1, 1.0];
/// Farbe richtiger Antworten (RGBA: Grün).
pub const SUCCESS_COLOR: [f32; 4] = [0.2, 0.9, 0.3, 1.0];
/// Farbe falscher Antworten (RGBA: Rot).
pub const FAILURE_COLOR: [f32; 4] = [0.95, 0.2, 0.2, 1.0];
/// Linienstärke der Boundaries in Pixeln.
pub const BOUNDARY_STROKE_PX: f32 = 1.0;
/// Farbe der Boundaries (RGBA: Blau).
pub const BOUNDARY_COLOR: [f32; 4] = [0.3, 0.55, 0.9, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Trainer-Optionen.
/// Wird als `airspace_trainer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Minimale Skala
    pub min_scale: f64,
    /// Maximale Skala
    pub max_scale: f64,
    /// Füllfaktor beim Einpassen
    pub fit_fill_factor: f64,
    /// Zoom-Schritt der Buttons
    pub zoom_step: f64,
    /// Mausrad-Empfindlichkeit
    pub wheel_zoom_k: f64,

    // ── Gesten ──────────────────────────────────────────────────
    /// Tap-Toleranz in Pixeln
    pub tap_tolerance_px: f64,
    /// Drag-Schwelle in Pixeln
    pub drag_threshold_px: f64,
    /// Tap-Cooldown in Millisekunden
    pub tap_cooldown_ms: u64,

    // ── Quiz ────────────────────────────────────────────────────
    /// Falsche Antworten bis Reveal
    pub reveal_after_wrong: u32,
    /// Blink-Intervall in Millisekunden
    pub reveal_blink_ms: u64,
    /// Feedback-Dauer in Millisekunden
    pub feedback_flash_ms: u64,

    // ── Dateien ─────────────────────────────────────────────────
    /// Boundary-GeoJSON
    pub boundaries_path: PathBuf,
    /// Wegpunkt-Liste
    pub waypoints_path: PathBuf,
    /// Store-Datei für Lernfortschritt
    pub store_path: PathBuf,

    // ── Darstellung ─────────────────────────────────────────────
    pub waypoint_radius_px: f32,
    pub waypoint_color: [f32; 4],
    pub target_color: [f32; 4],
    pub success_color: [f32; 4],
    pub failure_color: [f32; 4],
    pub boundary_stroke_px: f32,
    pub boundary_color: [f32; 4],
}

impl Default for TrainerOptions {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            fit_fill_factor: FIT_FILL_FACTOR,
            zoom_step: ZOOM_STEP,
            wheel_zoom_k: WHEEL_ZOOM_K,

            tap_tolerance_px: TAP_TOLERANCE_PX,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            tap_cooldown_ms: TAP_COOLDOWN_MS,

            reveal_after_wrong: REVEAL_AFTER_WRONG,
            reveal_blink_ms: REVEAL_BLINK_MS,
            feedback_flash_ms: FEEDBACK_FLASH_MS,

            boundaries_path: PathBuf::from("assets/boundaries.geojson"),
            waypoints_path: PathBuf::from("assets/waypoints.json"),
            store_path: PathBuf::from("airspace_trainer_progress.json"),

            waypoint_radius_px: WAYPOINT_RADIUS_PX,
            waypoint_color: WAYPOINT_COLOR,
            target_color: TARGET_COLOR,
            success_color: SUCCESS_COLOR,
            failure_color: FAILURE_COLOR,
            boundary_stroke_px: BOUNDARY_STROKE_PX,
            boundary_color: BOUNDARY_COLOR,
        }
    }
}

impl TrainerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(mut opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitize();
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("airspace-trainer"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("airspace_trainer.toml")
    }

    /// Ersetzt unbrauchbare Werte durch die Standardwerte.
    ///
    /// Skalen, Füllfaktor, Zoom-Schritt und Tap-Toleranz müssen endlich und
    /// positiv sein, Blink- und Puls-Dauer größer 0. Gibt `true` zurück, wenn
    /// mindestens ein Wert ersetzt wurde.
    pub fn sanitize(&mut self) -> bool {
        let mut fixed = false;
        fixed |= positive_or_default(&mut self.min_scale, MIN_SCALE, "min_scale");
        fixed |= positive_or_default(&mut self.max_scale, MAX_SCALE, "max_scale");
        fixed |= positive_or_default(&mut self.fit_fill_factor, FIT_FILL_FACTOR, "fit_fill_factor");
        fixed |= positive_or_default(&mut self.zoom_step, ZOOM_STEP, "zoom_step");
        fixed |= positive_or_default(&mut self.tap_tolerance_px, TAP_TOLERANCE_PX, "tap_tolerance_px");
        if !self.wheel_zoom_k.is_finite() || self.wheel_zoom_k < 0.0 {
            log::warn!("Option wheel_zoom_k ungültig ({}), verwende {}", self.wheel_zoom_k, WHEEL_ZOOM_K);
            self.wheel_zoom_k = WHEEL_ZOOM_K;
            fixed = true;
        }
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            log::warn!(
                "Option drag_threshold_px ungültig ({}), verwende {}",
                self.drag_threshold_px,
                DRAG_THRESHOLD_PX
            );
            self.drag_threshold_px = DRAG_THRESHOLD_PX;
            fixed = true;
        }
        if self.reveal_blink_ms == 0 {
            log::warn!("Option reveal_blink_ms ist 0, verwende {}", REVEAL_BLINK_MS);
            self.reveal_blink_ms = REVEAL_BLINK_MS;
            fixed = true;
        }
        if self.feedback_flash_ms == 0 {
            log::warn!("Option feedback_flash_ms ist 0, verwende {}", FEEDBACK_FLASH_MS);
            self.feedback_flash_ms = FEEDBACK_FLASH_MS;
            fixed = true;
        }
        if self.reveal_after_wrong == 0 {
            log::warn!("Option reveal_after_wrong ist 0, verwende {}", REVEAL_AFTER_WRONG);
            self.reveal_after_wrong = REVEAL_AFTER_WRONG;
            fixed = true;
        }
        fixed
    }

    /// Tap-Cooldown als `chrono`-Dauer.
    pub fn tap_cooldown(&self) -> chrono::TimeDelta {
        chrono::TimeDelta::milliseconds(self.tap_cooldown_ms as i64)
    }

    /// Blink-Intervall als `chrono`-Dauer.
    pub fn reveal_blink(&self) -> chrono::TimeDelta {
        chrono::TimeDelta::milliseconds(self.reveal_blink_ms as i64)
    }

    /// Feedback-Dauer als `chrono`-Dauer.
    pub fn feedback_flash(&self) -> chrono::TimeDelta {
        chrono::TimeDelta::milliseconds(self.feedback_flash_ms as i64)
    }
}

fn positive_or_default(value: &mut f64, default: f64, name: &str) -> bool {
    if value.is_finite() && *value > 0.0 {
        return false;
    }
    log::warn!("Option {} ungültig ({}), verwende {}", name, value, default);
    *value = default;
    true
}
