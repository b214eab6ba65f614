//! Segment traversal over a 3D grid.

use std::iter::FusedIterator;

use mathkit_core::{Point3, Result};

use crate::cursor::AxisCursor;
use crate::grid::GridSize3;
use crate::CellHit;

/// Walks line segments through a uniform 3D grid of box cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridTraversal3D {
    size: GridSize3,
}

impl GridTraversal3D {
    /// Fails with `InvalidConfiguration` if any dimension is not positive.
    pub fn new(width: i64, height: i64, depth: i64) -> Result<Self> {
        Self::from_size(GridSize3 {
            width,
            height,
            depth,
        })
    }

    pub fn from_size(size: GridSize3) -> Result<Self> {
        size.validate()?;
        log::debug!(
            "3D grid traversal with {}x{}x{} cells",
            size.width,
            size.height,
            size.depth
        );
        Ok(Self { size })
    }

    pub fn size(&self) -> GridSize3 {
        self.size
    }

    /// Cells crossed by the segment `start -> end`, in travel order.
    pub fn trace(&self, start: impl Into<Point3>, end: impl Into<Point3>) -> Trace3D {
        let start = start.into();
        let end = end.into();
        let trace = Trace3D {
            x: AxisCursor::new(start.x, end.x, self.size.width),
            y: AxisCursor::new(start.y, end.y, self.size.height),
            z: AxisCursor::new(start.z, end.z, self.size.depth),
            entry: start,
            started: false,
            finished: false,
        };
        log::trace!(
            "trace {} -> {}: cells {} -> {}",
            start,
            end,
            trace.cell(),
            Point3::new(trace.x.target, trace.y.target, trace.z.target)
        );
        trace
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

/// Lazy iterator returned by [`GridTraversal3D::trace`].
#[derive(Clone, Debug)]
pub struct Trace3D {
    x: AxisCursor,
    y: AxisCursor,
    z: AxisCursor,
    entry: Point3,
    started: bool,
    finished: bool,
}

impl Trace3D {
    fn cell(&self) -> Point3 {
        Point3::new(self.x.cell, self.y.cell, self.z.cell)
    }

    /// Axis whose boundary is crossed next. Ties go to X, then Y.
    ///
    /// Only axes that have not reached their target cell compete.
    fn select_axis(&self) -> Option<Axis> {
        let x_open = self.x.is_open();
        let y_open = self.y.is_open();
        let z_open = self.z.is_open();
        if x_open && (!y_open || self.x.t <= self.y.t) && (!z_open || self.x.t <= self.z.t) {
            Some(Axis::X)
        } else if y_open && (!z_open || self.y.t <= self.z.t) {
            Some(Axis::Y)
        } else if z_open {
            Some(Axis::Z)
        } else {
            None
        }
    }

    fn step(&mut self) -> bool {
        let Some(axis) = self.select_axis() else {
            return false;
        };
        let cursor = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        };
        let t = cursor.t;
        cursor.advance();
        // Every component is sampled at the selected axis's crossing.
        self.entry = Point3::new(self.x.project(t), self.y.project(t), self.z.project(t));
        true
    }

    fn remaining(&self) -> usize {
        if self.finished {
            return 0;
        }
        let steps = self.x.remaining() + self.y.remaining() + self.z.remaining();
        (steps + u64::from(!self.started)) as usize
    }
}

impl Iterator for Trace3D {
    type Item = CellHit<Point3>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.started && !self.step() {
            self.finished = true;
            log::trace!("trace finished in cell {}", self.cell());
            return None;
        }
        self.started = true;
        Some(CellHit {
            cell: self.cell(),
            entry: self.entry,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Trace3D {}

impl FusedIterator for Trace3D {}

#[cfg(test)]
mod tests {
    use super::*;
    use mathkit_core::MathError;

    fn cells(trace: Trace3D) -> Vec<(i64, i64, i64)> {
        trace.map(|h| h.cell.into_parts()).collect()
    }

    #[test]
    fn new_rejects_zero_depth() {
        assert!(matches!(
            GridTraversal3D::new(10, 10, 0),
            Err(MathError::InvalidConfiguration { axis: "depth", .. })
        ));
    }

    #[test]
    fn degenerate_segment_yields_one_hit() {
        let grid = GridTraversal3D::new(10, 10, 10).unwrap();
        let hits: Vec<_> = grid.trace((3, 4, 5), (3, 4, 5)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].cell, Point3::new(0, 0, 0));
        assert_eq!(hits[0].entry, Point3::new(3, 4, 5));
    }

    #[test]
    fn depth_aligned_segment() {
        let grid = GridTraversal3D::new(10, 10, 10).unwrap();
        let hits: Vec<_> = grid
            .trace((5, 5, 5), (5, 5, 25))
            .map(|h| (h.cell.into_parts(), h.entry.into_parts()))
            .collect();
        assert_eq!(
            hits,
            vec![
                ((0, 0, 0), (5, 5, 5)),
                ((0, 0, 1), (5, 5, 10)),
                ((0, 0, 2), (5, 5, 20))
            ]
        );
    }

    #[test]
    fn tie_break_order_is_x_then_y_then_z() {
        let grid = GridTraversal3D::new(10, 10, 10).unwrap();
        assert_eq!(
            cells(grid.trace((5, 5, 5), (15, 15, 15))),
            vec![(0, 0, 0), (1, 0, 0), (1, 1, 0), (1, 1, 1)]
        );
    }

    #[test]
    fn y_beats_z_on_tie() {
        let grid = GridTraversal3D::new(10, 10, 10).unwrap();
        assert_eq!(
            cells(grid.trace((5, 5, 5), (8, 15, 15))),
            vec![(0, 0, 0), (0, 1, 0), (0, 1, 1)]
        );
    }

    #[test]
    fn entry_points_use_selected_axis_parameter() {
        let grid = GridTraversal3D::new(10, 10, 10).unwrap();
        let hits: Vec<_> = grid
            .trace((5, 5, 5), (25, 15, 5))
            .map(|h| (h.cell.into_parts(), h.entry.into_parts()))
            .collect();
        assert_eq!(
            hits,
            vec![
                ((0, 0, 0), (5, 5, 5)),
                ((1, 0, 0), (10, 7, 5)),
                // y crossing at t = 0.5, not x's pending t = 0.75
                ((1, 1, 0), (15, 10, 5)),
                ((2, 1, 0), (20, 12, 5))
            ]
        );
    }

    #[test]
    fn negative_direction_on_all_axes() {
        let grid = GridTraversal3D::new(10, 10, 10).unwrap();
        let path = cells(grid.trace((-1, -1, -1), (-21, -11, -31)));
        assert_eq!(path.first(), Some(&(-1, -1, -1)));
        assert_eq!(path.last(), Some(&(-3, -2, -4)));
        assert_eq!(path.len(), 1 + 2 + 1 + 3);
    }

    #[test]
    fn size_hint_counts_every_cell() {
        let grid = GridTraversal3D::new(2, 3, 4).unwrap();
        let trace = grid.trace((1, 1, 1), (9, -8, 17));
        let expected = trace.len();
        assert_eq!(trace.count(), expected);
    }
}
