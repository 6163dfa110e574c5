//! Lokale äquirektanguläre Projektion: Geo-Koordinaten → Planar-Koordinaten.
//!
//! Die Projektion ist auf das Breitenband der geladenen Daten zentriert und
//! muss nur bei neuen Daten neu berechnet werden, nie bei Pan/Zoom.

use glam::DVec2;

/// Achsparallele Geo-Bounding-Box in Grad (nur endliche Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Minimale Länge
    pub min_lon: f64,
    /// Minimale Breite
    pub min_lat: f64,
    /// Maximale Länge
    pub max_lon: f64,
    /// Maximale Breite
    pub max_lat: f64,
}

impl GeoBounds {
    /// Erstellt eine leere Box (enthält noch keinen Punkt).
    pub fn empty() -> Self {
        Self {
            min_lon: f64::INFINITY,
            min_lat: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
            max_lat: f64::NEG_INFINITY,
        }
    }

    /// Erweitert die Box um einen Punkt. Nicht-endliche Werte werden ignoriert.
    pub fn include(&mut self, lon: f64, lat: f64) {
        if !lon.is_finite() || !lat.is_finite() {
            return;
        }
        self.min_lon = self.min_lon.min(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lon = self.max_lon.max(lon);
        self.max_lat = self.max_lat.max(lat);
    }

    /// `true`, solange kein endlicher Punkt aufgenommen wurde.
    pub fn is_empty(&self) -> bool {
        self.min_lon > self.max_lon || self.min_lat > self.max_lat
    }

    /// Mittlere Breite des Bandes in Grad.
    pub fn mean_latitude(&self) -> f64 {
        (self.min_lat + self.max_lat) * 0.5
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<(f64, f64)> for GeoBounds {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut bounds = Self::empty();
        for (lon, lat) in iter {
            bounds.include(lon, lat);
        }
        bounds
    }
}

/// Projektor für eine einzelne, kleine Region.
///
/// `x = lon_rad · cos(mittlere_breite_rad)`, `y = −lat_rad`. Steigende Breite
/// wandert damit zu negativem y, also auf dem Bildschirm nach oben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoProjector {
    mean_latitude_deg: f64,
    cos_mean_latitude: f64,
}

impl GeoProjector {
    /// Baut den Projektor aus den Daten-Bounds.
    ///
    /// Gibt `None` zurück, wenn die Bounds keine endliche Koordinate enthalten
    /// ("keine Projektion verfügbar").
    pub fn from_bounds(bounds: &GeoBounds) -> Option<Self> {
        if bounds.is_empty() {
            return None;
        }
        let mean_latitude_deg = bounds.mean_latitude();
        Some(Self {
            mean_latitude_deg,
            cos_mean_latitude: mean_latitude_deg.to_radians().cos(),
        })
    }

    /// Mittlere Breite, auf die der Projektor zentriert ist (Grad).
    pub fn mean_latitude(&self) -> f64 {
        self.mean_latitude_deg
    }

    /// Projiziert (Länge, Breite) in Grad auf die Planar-Ebene.
    pub fn project(&self, lon: f64, lat: f64) -> DVec2 {
        DVec2::new(
            lon.to_radians() * self.cos_mean_latitude,
            -lat.to_radians(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_bounds_yield_no_projector() {
        assert!(GeoProjector::from_bounds(&GeoBounds::empty()).is_none());

        let only_nan: GeoBounds = [(f64::NAN, 50.0), (8.0, f64::INFINITY)]
            .into_iter()
            .collect();
        assert!(only_nan.is_empty());
        assert!(GeoProjector::from_bounds(&only_nan).is_none());
    }

    #[test]
    fn mean_latitude_uses_band_center() {
        let bounds: GeoBounds = [(6.0, 47.0), (15.0, 55.0)].into_iter().collect();
        let projector = GeoProjector::from_bounds(&bounds).expect("Projektor erwartet");

        assert_relative_eq!(projector.mean_latitude(), 51.0);
    }

    #[test]
    fn project_scales_longitude_by_cosine() {
        let bounds: GeoBounds = [(0.0, 60.0), (1.0, 60.0)].into_iter().collect();
        let projector = GeoProjector::from_bounds(&bounds).expect("Projektor erwartet");

        let p = projector.project(10.0, 60.0);
        // cos(60°) = 0.5
        assert_relative_eq!(p.x, 10f64.to_radians() * 0.5, epsilon = 1e-12);
        assert_relative_eq!(p.y, -(60f64.to_radians()), epsilon = 1e-12);
    }

    #[test]
    fn higher_latitude_maps_to_smaller_y() {
        let bounds: GeoBounds = [(8.0, 48.0), (9.0, 49.0)].into_iter().collect();
        let projector = GeoProjector::from_bounds(&bounds).expect("Projektor erwartet");

        let south = projector.project(8.5, 48.0);
        let north = projector.project(8.5, 49.0);
        assert!(north.y < south.y);
    }
}
