//! Geschlossene Geometrie-Variante (GeoJSON-Typen) mit einem einzigen,
//! erschöpfenden Traversal über alle Koordinaten.

use serde::Deserialize;

/// Eine Position `[lon, lat, ...]`. Einträge dürfen `null` sein; solche
/// Positionen gelten als entartet und werden beim Traversieren übersprungen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Position(pub Vec<Option<f64>>);

impl Position {
    /// Erstellt eine Position aus Länge/Breite.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self(vec![Some(lon), Some(lat)])
    }

    /// Länge/Breite, falls beide vorhanden und endlich.
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        let lon = (*self.0.first()?)?;
        let lat = (*self.0.get(1)?)?;
        (lon.is_finite() && lat.is_finite()).then_some((lon, lat))
    }
}

/// Geometrie eines Boundary-Features.
///
/// Fehlende `coordinates` werden als `None` akzeptiert und still ignoriert.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        #[serde(default)]
        coordinates: Option<Position>,
    },
    LineString {
        #[serde(default)]
        coordinates: Option<Vec<Position>>,
    },
    Polygon {
        #[serde(default)]
        coordinates: Option<Vec<Vec<Position>>>,
    },
    MultiPoint {
        #[serde(default)]
        coordinates: Option<Vec<Position>>,
    },
    MultiLineString {
        #[serde(default)]
        coordinates: Option<Vec<Vec<Position>>>,
    },
    MultiPolygon {
        #[serde(default)]
        coordinates: Option<Vec<Vec<Vec<Position>>>>,
    },
    GeometryCollection {
        #[serde(default)]
        geometries: Vec<Geometry>,
    },
}

/// Art eines Koordinatenzugs beim Traversieren.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Einzelpunkt
    Point,
    /// Offener Linienzug
    Line,
    /// Geschlossener Polygon-Ring
    Ring,
}

/// Linienzug mit endlichen Geo-Koordinaten `(lon, lat)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPath {
    /// Punkte in Grad
    pub points: Vec<(f64, f64)>,
    /// Ring (geschlossen) oder offene Linie
    pub closed: bool,
}

impl Geometry {
    /// Ruft `visit` für jeden Koordinatenzug auf (rekursiv über Collections).
    pub fn walk(&self, visit: &mut dyn FnMut(&[Position], PathKind)) {
        match self {
            Geometry::Point { coordinates } => {
                if let Some(point) = coordinates {
                    visit(std::slice::from_ref(point), PathKind::Point);
                }
            }
            Geometry::MultiPoint { coordinates } => {
                for point in coordinates.iter().flatten() {
                    visit(std::slice::from_ref(point), PathKind::Point);
                }
            }
            Geometry::LineString { coordinates } => {
                if let Some(line) = coordinates {
                    visit(line, PathKind::Line);
                }
            }
            Geometry::MultiLineString { coordinates } => {
                for line in coordinates.iter().flatten() {
                    visit(line, PathKind::Line);
                }
            }
            Geometry::Polygon { coordinates } => {
                for ring in coordinates.iter().flatten() {
                    visit(ring, PathKind::Ring);
                }
            }
            Geometry::MultiPolygon { coordinates } => {
                for ring in coordinates.iter().flatten().flatten() {
                    visit(ring, PathKind::Ring);
                }
            }
            Geometry::GeometryCollection { geometries } => {
                for geometry in geometries {
                    geometry.walk(visit);
                }
            }
        }
    }

    /// Ruft `visit(lon, lat)` für jede endliche Koordinate auf.
    pub fn visit_coords(&self, visit: &mut dyn FnMut(f64, f64)) {
        self.walk(&mut |positions, _| {
            for (lon, lat) in positions.iter().filter_map(Position::lon_lat) {
                visit(lon, lat);
            }
        });
    }

    /// Alle zeichenbaren Linienzüge (mindestens zwei endliche Punkte).
    pub fn paths(&self) -> Vec<GeoPath> {
        let mut paths = Vec::new();
        self.walk(&mut |positions, kind| {
            if kind == PathKind::Point {
                return;
            }
            let points: Vec<(f64, f64)> =
                positions.iter().filter_map(Position::lon_lat).collect();
            if points.len() >= 2 {
                paths.push(GeoPath {
                    points,
                    closed: kind == PathKind::Ring,
                });
            }
        });
        paths
    }
}

/// Ein Boundary-Feature aus einer FeatureCollection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoundaryFeature {
    /// Geometrie (`null` erlaubt)
    #[serde(default)]
    pub geometry: Option<Geometry>,
    /// Freie Properties des Features
    #[serde(default)]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
}
