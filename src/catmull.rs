//! Sampling of uniform catmull-rom splines.

use log::debug;
use nalgebra::Matrix2x4;

use crate::buffer::{BufferRef, FixedBuffer};
use crate::constants::CATMULL_DETAIL;
use crate::error::{require_two, Result};
use crate::vector::Vector2;

/// Cubic polynomial of the spline piece between `v2` and `v3`.
///
/// Columns are the coefficients of increasing powers of `t`.
struct CatmullSegment(Matrix2x4<f64>);

impl CatmullSegment {
    fn new(v1: &Vector2, v2: &Vector2, v3: &Vector2, v4: &Vector2) -> Self {
        let coefficients = Matrix2x4::from_columns(&[
            v2 * 2.0,
            v3 - v1,
            v1 * 2.0 - v2 * 5.0 + v3 * 4.0 - v4,
            v2 * 3.0 - v1 - v3 * 3.0 + v4,
        ]);
        CatmullSegment(coefficients * 0.5)
    }

    /// Evaluates the polynomial at `t` using horner's method.
    fn evaluate(&self, t: f64) -> Vector2 {
        let mut out = Vector2::zeros();
        for i in (1..4).rev() {
            out += self.0.column(i);
            out *= t;
        }
        out + self.0.column(0)
    }
}

/// Samples the catmull-rom spline through `points`.
///
/// Each piece between two consecutive points is sampled [`CATMULL_DETAIL`] times and every
/// sample step pushes both of its end points, so the output has
/// `2 * (points.len() - 1) * CATMULL_DETAIL` entries with every inner point repeated.
/// The first point acts as its own predecessor; past the last point the previous point is
/// reflected.
pub fn approximate_catmull(points: &[Vector2]) -> Result<Vec<Vector2>> {
    require_two(points)?;

    let buffer = FixedBuffer::from_slice(points);
    let mut output = Vec::with_capacity(2 * (points.len() - 1) * CATMULL_DETAIL);

    for i in 0..(points.len() - 1) {
        let v1 = buffer.get(i.saturating_sub(1))?;
        let v2 = buffer.get(i)?;
        let v3 = buffer.get(i + 1)?;
        let v4 = match buffer.get(i + 2) {
            Ok(v4) => BufferRef::Buffered(v4),
            Err(_) => BufferRef::Owned(v3 * 2.0 - v2),
        };

        let segment = CatmullSegment::new(v1, v2, v3, &v4);
        for c in 0..CATMULL_DETAIL {
            output.push(segment.evaluate(c as f64 / CATMULL_DETAIL as f64));
            output.push(segment.evaluate((c + 1) as f64 / CATMULL_DETAIL as f64));
        }
    }

    debug!(
        "sampled catmull spline of {} points into {} points",
        points.len(),
        output.len()
    );
    Ok(output)
}
