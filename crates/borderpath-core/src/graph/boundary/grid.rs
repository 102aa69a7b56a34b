//! Uniform grid over boundary segments
//!
//! Cells are sized to the typical segment extent, so a query segment only
//! meets the handful of segments stored in the cells it overlaps.

use std::collections::HashMap;

use crate::dataset::{BoundingBox, Segment};

/// Segments spanning more cells than this per axis go to `oversized`
const MAX_CELLS_PER_AXIS: i64 = 4;

type Cell = (i64, i64);

pub(super) struct SegmentGrid {
    cell_size: f64,
    segments: Vec<Segment>,
    cells: HashMap<Cell, Vec<usize>>,
    /// Checked by every query
    oversized: Vec<usize>,
}

impl SegmentGrid {
    /// Index `segments`; `None` when there are none
    pub(super) fn new(segments: Vec<Segment>, tolerance: f64) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        let mut grid = SegmentGrid {
            cell_size: cell_size(&segments, tolerance),
            segments,
            cells: HashMap::new(),
            oversized: Vec::new(),
        };

        for (index, segment) in grid.segments.iter().enumerate() {
            let (lo, hi) = grid.cell_range(&segment.bbox());
            let width = hi.0.saturating_sub(lo.0);
            let height = hi.1.saturating_sub(lo.1);
            if width >= MAX_CELLS_PER_AXIS || height >= MAX_CELLS_PER_AXIS {
                grid.oversized.push(index);
                continue;
            }
            for x in lo.0..=hi.0 {
                for y in lo.1..=hi.1 {
                    grid.cells.entry((x, y)).or_default().push(index);
                }
            }
        }

        Some(grid)
    }

    /// Stored segments that may lie within `tolerance` of `query`.
    ///
    /// A segment spanning several cells can be yielded more than once. A query
    /// covering more cells than there are segments scans every segment.
    pub(super) fn candidates<'a>(
        &'a self,
        query: &Segment,
        tolerance: f64,
    ) -> Box<dyn Iterator<Item = &'a Segment> + 'a> {
        let (lo, hi) = self.cell_range(&query.bbox().expand(tolerance));
        let width = hi.0.saturating_sub(lo.0).saturating_add(1);
        let height = hi.1.saturating_sub(lo.1).saturating_add(1);
        if width.saturating_mul(height) > self.segments.len() as i64 {
            return Box::new(self.segments.iter());
        }

        Box::new(
            (lo.0..=hi.0)
                .flat_map(move |x| (lo.1..=hi.1).map(move |y| (x, y)))
                .filter_map(move |cell| self.cells.get(&cell))
                .flatten()
                .chain(self.oversized.iter())
                .map(move |&index| &self.segments[index]),
        )
    }

    /// True when some stored segment is within `tolerance` of `query`
    pub(super) fn any_within(&self, query: &Segment, tolerance: f64) -> bool {
        self.candidates(query, tolerance).any(|segment| segment.within(query, tolerance))
    }

    fn cell_of(&self, lon: f64, lat: f64) -> Cell {
        (
            (lon / self.cell_size).floor() as i64,
            (lat / self.cell_size).floor() as i64,
        )
    }

    fn cell_range(&self, bbox: &BoundingBox) -> (Cell, Cell) {
        (
            self.cell_of(bbox.min_lon, bbox.min_lat),
            self.cell_of(bbox.max_lon, bbox.max_lat),
        )
    }
}

/// Mean segment extent, never below the tolerance
fn cell_size(segments: &[Segment], tolerance: f64) -> f64 {
    let total: f64 = segments
        .iter()
        .map(|s| {
            let b = s.bbox();
            (b.max_lon - b.min_lon).max(b.max_lat - b.min_lat)
        })
        .sum();
    let mean = total / segments.len() as f64;
    mean.max(tolerance).max(f64::EPSILON)
}
