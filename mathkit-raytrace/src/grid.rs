//! Grid cell dimensions.

use mathkit_core::{MathError, Point2, Point3, Result};
use serde::{Deserialize, Serialize};

use mathkit_core::scalar::floor_div;

fn check_axis(axis: &'static str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(MathError::InvalidConfiguration { axis, value });
    }
    Ok(())
}

/// Size of one cell of a uniform 2D grid, in world units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize2 {
    pub width: i64,
    pub height: i64,
}

impl GridSize2 {
    /// Create a validated cell size. Every dimension must be positive.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    pub fn validate(&self) -> Result<()> {
        check_axis("width", self.width)?;
        check_axis("height", self.height)
    }

    /// Address of the cell containing `point`.
    pub fn cell_of(&self, point: Point2) -> Point2 {
        Point2::new(
            floor_div(point.x, self.width),
            floor_div(point.y, self.height),
        )
    }

    /// World-space corner of `cell` with the smallest coordinates.
    pub fn cell_origin(&self, cell: Point2) -> Point2 {
        Point2::new(cell.x * self.width, cell.y * self.height)
    }
}

/// Size of one cell of a uniform 3D grid, in world units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize3 {
    pub width: i64,
    pub height: i64,
    pub depth: i64,
}

impl GridSize3 {
    /// Create a validated cell size. Every dimension must be positive.
    pub fn new(width: i64, height: i64, depth: i64) -> Result<Self> {
        let size = Self {
            width,
            height,
            depth,
        };
        size.validate()?;
        Ok(size)
    }

    pub fn validate(&self) -> Result<()> {
        check_axis("width", self.width)?;
        check_axis("height", self.height)?;
        check_axis("depth", self.depth)
    }

    /// Address of the cell containing `point`.
    pub fn cell_of(&self, point: Point3) -> Point3 {
        Point3::new(
            floor_div(point.x, self.width),
            floor_div(point.y, self.height),
            floor_div(point.z, self.depth),
        )
    }

    /// World-space corner of `cell` with the smallest coordinates.
    pub fn cell_origin(&self, cell: Point3) -> Point3 {
        Point3::new(
            cell.x * self.width,
            cell.y * self.height,
            cell.z * self.depth,
        )
    }
}
