//! Point helpers on top of [`nalgebra::Vector2`].
//!
//! The approximators pass points around by value; these functions spell out the exact
//! semantics the path code relies on (no epsilons, no zero guards).

use nalgebra::Scalar;
use num::Float;

/// The point type used throughout the crate.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Euclidean norm `sqrt(x² + y²)`.
pub fn magnitude<K: Float + Scalar>(v: &nalgebra::Vector2<K>) -> K {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Exact component wise equality.
///
/// Callers that need a tolerance have to apply it themselves.
pub fn equal<K: Float + Scalar>(a: &nalgebra::Vector2<K>, b: &nalgebra::Vector2<K>) -> bool {
    a.x == b.x && a.y == b.y
}

/// Divides both components by the magnitude in place.
///
/// *A zero vector turns into `NaN`s!*
pub fn normalize<K: Float + Scalar>(v: &mut nalgebra::Vector2<K>) {
    let magnitude = magnitude(v);
    v.x = v.x / magnitude;
    v.y = v.y / magnitude;
}

/// Scalar product.
pub fn dot<K: Float + Scalar>(a: &nalgebra::Vector2<K>, b: &nalgebra::Vector2<K>) -> K {
    a.x * b.x + a.y * b.y
}

/// Distance between two points.
pub fn distance<K: Float + Scalar>(a: &nalgebra::Vector2<K>, b: &nalgebra::Vector2<K>) -> K {
    magnitude(&nalgebra::Vector2::new(b.x - a.x, b.y - a.y))
}

/// Rotates `v` by 90° clockwise, i.e. `(y, -x)`.
pub fn orthogonal<K: Float + Scalar>(v: &nalgebra::Vector2<K>) -> nalgebra::Vector2<K> {
    nalgebra::Vector2::new(v.y, K::zero() - v.x)
}

/// Converts a coordinate pair into a point.
pub fn from_pair((x, y): (f64, f64)) -> Vector2 {
    Vector2::new(x, y)
}

/// Converts a point into a coordinate pair.
pub fn to_pair(v: &Vector2) -> (f64, f64) {
    (v.x, v.y)
}

/// Converts a slice of coordinate pairs into points.
pub fn from_pairs(pairs: &[(f64, f64)]) -> Vec<Vector2> {
    pairs.iter().copied().map(from_pair).collect()
}

/// Converts points back into coordinate pairs.
pub fn to_pairs(points: &[Vector2]) -> Vec<(f64, f64)> {
    points.iter().map(to_pair).collect()
}
