//! Polygon-set snapshots for undo/redo.

use crate::model::{Polygon, PolygonSet};

/// An immutable copy of the polygon set at one point in history.
///
/// `revision` increases monotonically across everything a history manager
/// records, including after a reset, so two snapshots never share one.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    /// Monotonic revision number
    pub revision: u64,
    /// The captured polygons, in owner order
    pub polygons: PolygonSet,
}

impl HistorySnapshot {
    pub fn new(revision: u64, polygons: &[Polygon]) -> Self {
        Self {
            revision,
            polygons: polygons.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}
