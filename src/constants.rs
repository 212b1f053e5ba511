//! Fixed tolerances of the approximators.

/// Maximum second difference (halved) a bezier control polygon may have to count as flat.
pub const BEZIER_TOLERANCE: f64 = 0.25;

/// Number of samples taken per catmull segment.
pub const CATMULL_DETAIL: usize = 50;

/// Maximum distance between a circular arc and its chords.
pub const CIRCULAR_ARC_TOLERANCE: f64 = 0.1;

/// Twice the triangle area below which three points are treated as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-7;
