//! Grid configuration and presets.
//!
//! A grid is described by its cell size; two entries select the planar
//! tracer, three the volumetric one.

use mathkit_core::{MathError, Result};
use serde::{Deserialize, Serialize};

use crate::grid::{GridSize2, GridSize3};
use crate::{GridTraversal2D, GridTraversal3D};

/// Serializable description of a traversal grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Cell size per axis: `[width, height]` or `[width, height, depth]`.
    pub cell_size: Vec<i64>,
}

/// A validated tracer of either dimensionality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridTraversal {
    Planar(GridTraversal2D),
    Volumetric(GridTraversal3D),
}

impl GridTraversal {
    pub fn dimensions(&self) -> usize {
        match self {
            GridTraversal::Planar(_) => 2,
            GridTraversal::Volumetric(_) => 3,
        }
    }
}

impl TraversalConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate the cell size and build the matching tracer.
    pub fn build(&self) -> Result<GridTraversal> {
        match self.cell_size.as_slice() {
            &[width, height] => Ok(GridTraversal::Planar(GridTraversal2D::from_size(
                GridSize2 { width, height },
            )?)),
            &[width, height, depth] => Ok(GridTraversal::Volumetric(
                GridTraversal3D::from_size(GridSize3 {
                    width,
                    height,
                    depth,
                })?,
            )),
            other => Err(MathError::InvalidArgument(format!(
                "cell_size needs 2 or 3 entries, got {}",
                other.len()
            ))),
        }
    }
}

/// Named grid preset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPreset {
    /// Unique identifier used for lookup
    pub id: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    pub cell_size: &'static [i64],
}

impl GridPreset {
    pub fn config(&self) -> TraversalConfig {
        TraversalConfig {
            cell_size: self.cell_size.to_vec(),
        }
    }
}

pub static UNIT_GRID_2D: GridPreset = GridPreset {
    id: "unit_2d",
    display_name: "Unit squares",
    cell_size: &[1, 1],
};

pub static UNIT_GRID_3D: GridPreset = GridPreset {
    id: "unit_3d",
    display_name: "Unit cubes",
    cell_size: &[1, 1, 1],
};

/// 16×16 tiles, a common tilemap size.
pub static TILE_GRID_16: GridPreset = GridPreset {
    id: "tile_16",
    display_name: "16px tiles",
    cell_size: &[16, 16],
};

/// 16×16×16 chunks, a common voxel chunk size.
pub static CHUNK_GRID_16: GridPreset = GridPreset {
    id: "chunk_16",
    display_name: "16³ voxel chunks",
    cell_size: &[16, 16, 16],
};

/// Look up a grid preset by ID.
pub fn get_grid_preset(id: &str) -> Option<&'static GridPreset> {
    match id {
        "unit_2d" => Some(&UNIT_GRID_2D),
        "unit_3d" => Some(&UNIT_GRID_3D),
        "tile_16" => Some(&TILE_GRID_16),
        "chunk_16" => Some(&CHUNK_GRID_16),
        _ => None,
    }
}
