//! Spatial-Index (KD-Tree) über den Planar-Positionen sichtbarer Wegpunkte.

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Index des Wegpunkts in der Wegpunkt-Liste des Datensatzes
    pub waypoint_index: usize,
    /// Euklidische Planar-Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index; wird bei Datensatz- oder Regionswechsel neu gebaut.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    waypoint_indices: Vec<usize>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            waypoint_indices: Vec::new(),
        }
    }

    /// Baut einen Index aus `(Wegpunkt-Index, Planar-Position)`-Paaren.
    pub fn from_positions(positions: impl IntoIterator<Item = (usize, DVec2)>) -> Self {
        let (waypoint_indices, entries): (Vec<usize>, Vec<[f64; 2]>) = positions
            .into_iter()
            .filter(|(_, p)| p.is_finite())
            .map(|(index, p)| (index, [p.x, p.y]))
            .unzip();

        let tree: KdTree<f64, 2> = (&entries).into();

        Self {
            tree,
            waypoint_indices,
        }
    }

    /// Gibt die Anzahl indexierter Wegpunkte zurück.
    pub fn len(&self) -> usize {
        self.waypoint_indices.len()
    }

    /// Gibt `true` zurück, wenn keine Wegpunkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.waypoint_indices.is_empty()
    }

    /// Findet den nächsten Wegpunkt zur Planar-Position.
    pub fn nearest(&self, query: DVec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let waypoint_index = *self.waypoint_indices.get(result.item as usize)?;

        Some(SpatialMatch {
            waypoint_index,
            distance: result.distance.sqrt(),
        })
    }

    /// Nächster Wegpunkt, aber nur innerhalb von `radius`.
    pub fn nearest_within(&self, query: DVec2, radius: f64) -> Option<SpatialMatch> {
        self.nearest(query).filter(|hit| hit.distance <= radius)
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> SpatialIndex {
        SpatialIndex::from_positions([
            (0, DVec2::new(0.0, 0.0)),
            (4, DVec2::new(10.0, 0.0)),
            (7, DVec2::new(4.0, 3.0)),
        ])
    }

    #[test]
    fn nearest_returns_expected_waypoint() {
        let nearest = sample_index()
            .nearest(DVec2::new(3.9, 2.9))
            .expect("Treffer erwartet");

        assert_eq!(nearest.waypoint_index, 7);
        assert!(nearest.distance < 0.2);
    }

    #[test]
    fn nearest_within_respects_radius() {
        let index = sample_index();

        assert!(index.nearest_within(DVec2::new(7.0, 0.0), 1.0).is_none());
        assert_eq!(
            index
                .nearest_within(DVec2::new(9.5, 0.0), 1.0)
                .map(|m| m.waypoint_index),
            Some(4)
        );
    }

    #[test]
    fn non_finite_positions_are_not_indexed() {
        let index = SpatialIndex::from_positions([(0, DVec2::new(f64::NAN, 1.0))]);

        assert!(index.is_empty());
        assert!(index.nearest(DVec2::ZERO).is_none());
    }
}
