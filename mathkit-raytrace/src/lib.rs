//! Incremental traversal of uniform grids.
//!
//! Given a grid of equally sized cells and a segment between two integer
//! points, [`GridTraversal2D::trace`] and [`GridTraversal3D::trace`] yield
//! every cell the segment passes through, in travel order, together with the
//! point at which the segment enters it. This is the classic DDA voxel walk
//! (Amanatides & Woo): per axis we track the parametric distance to the next
//! cell boundary and always cross the nearest one.
//!
//! Entry points are truncated back to integers; sub-unit precision is lost.

pub mod config;
mod cursor;
pub mod grid;
mod trace2d;
mod trace3d;

use serde::{Deserialize, Serialize};

pub use config::{get_grid_preset, GridPreset, GridTraversal, TraversalConfig};
pub use grid::{GridSize2, GridSize3};
pub use trace2d::{GridTraversal2D, Trace2D};
pub use trace3d::{GridTraversal3D, Trace3D};

/// A cell visited by a trace and the point where the segment entered it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellHit<P> {
    pub cell: P,
    pub entry: P,
}
