//! Segment traversal over a 2D grid.

use std::iter::FusedIterator;

use mathkit_core::{Point2, Result};

use crate::cursor::AxisCursor;
use crate::grid::GridSize2;
use crate::CellHit;

/// Walks line segments through a uniform 2D grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridTraversal2D {
    size: GridSize2,
}

impl GridTraversal2D {
    /// Fails with `InvalidConfiguration` if either dimension is not positive.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        Self::from_size(GridSize2 { width, height })
    }

    pub fn from_size(size: GridSize2) -> Result<Self> {
        size.validate()?;
        log::debug!(
            "2D grid traversal with {}x{} cells",
            size.width,
            size.height
        );
        Ok(Self { size })
    }

    pub fn size(&self) -> GridSize2 {
        self.size
    }

    /// Cells crossed by the segment `start -> end`, in travel order.
    ///
    /// The first item is the start cell with `start` as its entry point and
    /// the last item is the cell containing `end`.
    pub fn trace(&self, start: impl Into<Point2>, end: impl Into<Point2>) -> Trace2D {
        let start = start.into();
        let end = end.into();
        let trace = Trace2D {
            x: AxisCursor::new(start.x, end.x, self.size.width),
            y: AxisCursor::new(start.y, end.y, self.size.height),
            entry: start,
            started: false,
            finished: false,
        };
        log::trace!(
            "trace {} -> {}: cells {} -> {}",
            start,
            end,
            trace.cell(),
            Point2::new(trace.x.target, trace.y.target)
        );
        trace
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Lazy iterator returned by [`GridTraversal2D::trace`].
#[derive(Clone, Debug)]
pub struct Trace2D {
    x: AxisCursor,
    y: AxisCursor,
    entry: Point2,
    started: bool,
    finished: bool,
}

impl Trace2D {
    fn cell(&self) -> Point2 {
        Point2::new(self.x.cell, self.y.cell)
    }

    /// Axis whose boundary is crossed next; X wins ties.
    ///
    /// Axes already at their target cell are out of the running, so the
    /// walk always ends on the target cell even when the segment ends
    /// exactly on a cell corner.
    fn select_axis(&self) -> Option<Axis> {
        let x_open = self.x.is_open();
        let y_open = self.y.is_open();
        if x_open && (!y_open || self.x.t <= self.y.t) {
            Some(Axis::X)
        } else if y_open {
            Some(Axis::Y)
        } else {
            None
        }
    }

    fn step(&mut self) -> bool {
        let Some(axis) = self.select_axis() else {
            return false;
        };
        let t = match axis {
            Axis::X => self.x.t,
            Axis::Y => self.y.t,
        };
        self.entry = Point2::new(self.x.project(t), self.y.project(t));
        match axis {
            Axis::X => self.x.advance(),
            Axis::Y => self.y.advance(),
        }
        true
    }

    fn remaining(&self) -> usize {
        if self.finished {
            return 0;
        }
        let steps = self.x.remaining() + self.y.remaining();
        (steps + u64::from(!self.started)) as usize
    }
}

impl Iterator for Trace2D {
    type Item = CellHit<Point2>;

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

impl ExactSizeIterator for Trace2D {}

impl FusedIterator for Trace2D {}
