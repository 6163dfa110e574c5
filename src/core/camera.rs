//! 2D-Viewport-Kamera: Planar-Koordinaten ↔ Bildschirm-Pixel.
//!
//! `screen = world · scale + offset`. Pan verschiebt den Offset direkt in
//! Pixeln, Zoom skaliert um einen Ankerpunkt.

use glam::DVec2;

use crate::shared::options::{MAX_SCALE, MIN_SCALE};

/// Achsparallele Bounds in Planar-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarBounds {
    /// Minimale Ecke
    pub min: DVec2,
    /// Maximale Ecke
    pub max: DVec2,
}

impl PlanarBounds {
    /// Leere Bounds (enthalten keinen Punkt).
    pub fn empty() -> Self {
        Self {
            min: DVec2::splat(f64::INFINITY),
            max: DVec2::splat(f64::NEG_INFINITY),
        }
    }

    /// Erweitert die Bounds um einen endlichen Punkt.
    pub fn include(&mut self, point: DVec2) {
        if !point.is_finite() {
            return;
        }
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// `true`, wenn noch kein Punkt enthalten ist.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Mittelpunkt der Bounds.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Breite und Höhe.
    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }
}

impl FromIterator<DVec2> for PlanarBounds {
    fn from_iter<I: IntoIterator<Item = DVec2>>(iter: I) -> Self {
        let mut bounds = Self::empty();
        for point in iter {
            bounds.include(point);
        }
        bounds
    }
}

/// Viewport-Kamera mit Skalierung (Pixel pro Planar-Einheit) und Pixel-Offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportCamera {
    /// Pixel pro Planar-Einheit, immer in `[min_scale, max_scale]`
    pub scale: f64,
    /// Bildschirm-Offset in Pixeln
    pub offset: DVec2,
    min_scale: f64,
    max_scale: f64,
}

impl ViewportCamera {
    /// Erstellt eine Kamera mit dem angegebenen Skalierungsbereich.
    ///
    /// Nicht endliche oder nicht positive Grenzen werden durch
    /// [`MIN_SCALE`] bzw. [`MAX_SCALE`] ersetzt.
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        let (min_scale, max_scale) = ordered_range(
            usable_scale(min_scale, MIN_SCALE),
            usable_scale(max_scale, MAX_SCALE),
        );
        Self {
            scale: min_scale,
            offset: DVec2::ZERO,
            min_scale,
            max_scale,
        }
    }

    /// Planar → Bildschirm.
    pub fn world_to_screen(&self, world: DVec2) -> DVec2 {
        world * self.scale + self.offset
    }

    /// Bildschirm → Planar (exakte Inverse zu [`Self::world_to_screen`]).
    pub fn screen_to_world(&self, screen: DVec2) -> DVec2 {
        (screen - self.offset) / self.scale
    }

    /// Verschiebt die Ansicht um ein Pixel-Delta (unabhängig vom Zoom).
    pub fn pan(&mut self, delta: DVec2) {
        if delta.is_finite() {
            self.offset += delta;
        }
    }

    /// Zoomt um `factor`, sodass der Weltpunkt unter `anchor` stehen bleibt.
    ///
    /// Gibt `false` zurück, wenn sich die geklemmte Skalierung nicht ändert.
    pub fn zoom_at(&mut self, anchor: DVec2, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 || !anchor.is_finite() {
            return false;
        }
        let new_scale = self.clamp_scale(self.scale * factor);
        if new_scale == self.scale {
            return false;
        }
        let anchored_world = self.screen_to_world(anchor);
        self.scale = new_scale;
        self.offset = anchor - anchored_world * new_scale;
        true
    }

    /// Rahmt `bounds` auf `fill_factor` der Canvas-Größe ein und zentriert sie.
    pub fn fit_to_bounds(&mut self, bounds: &PlanarBounds, canvas_size: DVec2, fill_factor: f64) {
        if bounds.is_empty() {
            return;
        }
        let size = bounds.size();
        let fit_x = canvas_size.x * fill_factor / size.x;
        let fit_y = canvas_size.y * fill_factor / size.y;
        // Entartete Bounds (Breite oder Höhe 0) liefern inf und landen auf max_scale
        let fit = fit_x.min(fit_y);
        self.scale = if fit.is_nan() {
            self.max_scale
        } else {
            self.clamp_scale(fit)
        };
        self.offset = canvas_size * 0.5 - bounds.center() * self.scale;
    }

    /// Rechnet einen Bildschirm-Radius in Planar-Einheiten um.
    ///
    /// `tolerance_world(px) · scale == px` für jede Skalierung.
    pub fn tolerance_world(&self, tolerance_px: f64) -> f64 {
        tolerance_px / self.scale
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self::new(MIN_SCALE, MAX_SCALE)
    }
}

fn usable_scale(scale: f64, fallback: f64) -> f64 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        log::warn!("Skalengrenze {} unbrauchbar, verwende {}", scale, fallback);
        fallback
    }
}

fn ordered_range(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
