//! Per-axis traversal state shared by the 2D and 3D tracers.

use mathkit_core::scalar::{floor_div, sign_i64};

/// One axis of a traversal cursor.
///
/// `t` is the parametric distance along the segment (0 at start, 1 at end)
/// at which the next cell boundary on this axis is crossed; `delta` is the
/// parametric length of one whole cell. A zero-length axis has
/// `delta = t = +∞` and is never selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct AxisCursor {
    pub cell: i64,
    pub target: i64,
    pub t: f64,
    step: i64,
    delta: f64,
    origin: i64,
    direction: i64,
}

impl AxisCursor {
    /// `size` must be positive; grid sizes are validated before any trace.
    pub fn new(start: i64, end: i64, size: i64) -> Self {
        let cell = floor_div(start, size);
        let target = floor_div(end, size);
        let direction = end - start;
        let step = sign_i64(direction);

        let size_f = size as f64;
        // IEEE division: +inf when the axis does not move.
        let delta = size_f / direction.unsigned_abs() as f64;

        let min = cell * size;
        let max = min + size;
        let boundary = if step >= 0 {
            (max - start) as f64 / size_f
        } else {
            (start - min) as f64 / size_f
        };

        Self {
            cell,
            target,
            t: boundary * delta,
            step,
            delta,
            origin: start,
            direction,
        }
    }

    /// True while this axis still has cells to cross.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.cell != self.target
    }

    /// Cells left to cross on this axis.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.cell.abs_diff(self.target)
    }

    /// Cross the next boundary on this axis.
    #[inline]
    pub fn advance(&mut self) {
        self.t += self.delta;
        self.cell += self.step;
    }

    /// Coordinate of the segment at parametric distance `t`, truncated.
    #[inline]
    pub fn project(&self, t: f64) -> i64 {
        (self.origin as f64 + self.direction as f64 * t) as i64
    }
}
