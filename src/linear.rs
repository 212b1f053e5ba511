//! Straight line sliders.

use crate::error::{require_two, Result};
use crate::vector::Vector2;

/// A linear slider's path is its control polygon.
pub fn approximate_linear(points: &[Vector2]) -> Result<Vec<Vector2>> {
    require_two(points)?;
    Ok(points.to_vec())
}
