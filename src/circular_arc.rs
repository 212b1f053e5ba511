//! Fitting a circle through three points and sampling the arc between them.

use std::f64::consts::PI;

use log::debug;

use crate::bezier::approximate_bezier;
use crate::constants::{CIRCULAR_ARC_TOLERANCE, COLLINEAR_EPSILON};
use crate::error::{require_two, Result};
use crate::vector::{self, Vector2};

/// The circle through three points and the sweep from the first to the last one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircularArcProperties {
    /// Center of the circle
    pub center: Vector2,

    /// Radius of the circle
    pub radius: f64,

    /// Angle of the first point as seen from `center`
    pub theta_start: f64,

    /// Angle swept from the first to the last point, always positive
    pub theta_range: f64,

    /// `1.0` for increasing angles, `-1.0` for decreasing ones
    pub direction: f64,
}

impl CircularArcProperties {
    /// Fits the circle through `a`, `b` and `c`.
    ///
    /// Returns `None` if the points are (nearly) collinear.
    pub fn fit(a: Vector2, b: Vector2, c: Vector2) -> Option<Self> {
        if ((b.y - a.y) * (c.x - a.x) - (b.x - a.x) * (c.y - a.y)).abs() <= COLLINEAR_EPSILON {
            return None;
        }

        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        let a_sq = vector::dot(&a, &a);
        let b_sq = vector::dot(&b, &b);
        let c_sq = vector::dot(&c, &c);

        let center = Vector2::new(
            (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d,
            (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d,
        );

        let d_a = a - center;
        let d_c = c - center;

        let radius = vector::magnitude(&d_a);
        let theta_start = d_a.y.atan2(d_a.x);
        let mut theta_end = d_c.y.atan2(d_c.x);
        while theta_end < theta_start {
            theta_end += 2.0 * PI;
        }

        let mut direction = 1.0;
        let mut theta_range = theta_end - theta_start;

        // Does the arc from a to c pass b going counter clockwise or clockwise?
        let ortho_a_to_c = vector::orthogonal(&(c - a));
        if vector::dot(&ortho_a_to_c, &(b - a)) < 0.0 {
            direction = -direction;
            theta_range = 2.0 * PI - theta_range;
        }

        Some(CircularArcProperties {
            center,
            radius,
            theta_start,
            theta_range,
            direction,
        })
    }

    /// Number of points needed so no chord strays further than `tolerance` from the arc.
    ///
    /// The count is not capped. It grows with the radius, so three points that are only just
    /// short of collinear can ask for tens of thousands of samples.
    pub fn sample_count(&self, tolerance: f64) -> usize {
        if 2.0 * self.radius <= tolerance {
            return 2;
        }
        let step = 2.0 * (1.0 - tolerance / self.radius).acos();
        let count = (self.theta_range / step).ceil();
        if count.is_finite() && count > 2.0 {
            count as usize
        } else {
            2
        }
    }

    /// Point at `fraction` of the sweep.
    pub fn point_at(&self, fraction: f64) -> Vector2 {
        let theta = self.theta_start + self.direction * fraction * self.theta_range;
        Vector2::new(
            theta.cos() * self.radius + self.center.x,
            theta.sin() * self.radius + self.center.y,
        )
    }

    /// Samples the arc with equally spaced points from its start to its end.
    ///
    /// Allocates [`sample_count`](CircularArcProperties::sample_count) points, which is
    /// unbounded for huge radii.
    pub fn sample(&self, tolerance: f64) -> Vec<Vector2> {
        let count = self.sample_count(tolerance);
        (0..count)
            .map(|i| self.point_at(i as f64 / (count - 1) as f64))
            .collect()
    }
}

/// Approximates the circle through the first three control points.
///
/// If there are fewer than three points or they are collinear, all points are
/// approximated as a bezier curve instead.
pub fn approximate_circular_arc(points: &[Vector2]) -> Result<Vec<Vector2>> {
    require_two(points)?;

    let properties = match points {
        [a, b, c, ..] => CircularArcProperties::fit(*a, *b, *c),
        _ => None,
    };
    let Some(properties) = properties else {
        debug!(
            "no circle through the first three of {} points, falling back to bezier",
            points.len()
        );
        return approximate_bezier(points);
    };

    let output = properties.sample(CIRCULAR_ARC_TOLERANCE);
    debug!(
        "circular arc of radius {} sampled with {} points",
        properties.radius,
        output.len()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn collinear_points_have_no_circle() {
        let fit = CircularArcProperties::fit(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 2.0),
        );
        assert!(fit.is_none());
    }

    #[test]
    fn unit_circle() {
        let arc = CircularArcProperties::fit(
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(-1.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(arc.center, Vector2::new(0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(arc.radius, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.theta_start, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.theta_range, PI, epsilon = 1e-12);
        assert_eq!(arc.direction, 1.0);
    }

    #[test]
    fn clockwise_arc_goes_through_middle_point() {
        // Same end points as above but passing below the x axis
        let arc = CircularArcProperties::fit(
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, -1.0),
            Vector2::new(-1.0, 0.0),
        )
        .unwrap();
        assert_eq!(arc.direction, -1.0);
        assert_abs_diff_eq!(arc.theta_range, PI, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.point_at(0.5), Vector2::new(0.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn sampled_points_stay_on_circle() {
        let points = [
            Vector2::new(0.0, 0.0),
            Vector2::new(50.0, 80.0),
            Vector2::new(120.0, 10.0),
        ];
        let arc = CircularArcProperties::fit(points[0], points[1], points[2]).unwrap();
        let output = approximate_circular_arc(&points).unwrap();

        assert!(output.len() > 2);
        for p in output.iter() {
            assert!((vector::distance(&arc.center, p) - arc.radius).abs() < 1e-9);
        }
        assert_abs_diff_eq!(output[0], points[0], epsilon = 1e-9);
        assert_abs_diff_eq!(output[output.len() - 1], points[2], epsilon = 1e-9);
    }

    #[test]
    fn tiny_circle_uses_two_points() {
        let arc = CircularArcProperties::fit(
            Vector2::new(0.0, 0.0),
            Vector2::new(0.01, 0.01),
            Vector2::new(0.02, 0.0),
        )
        .unwrap();
        assert_eq!(arc.sample_count(CIRCULAR_ARC_TOLERANCE), 2);
    }

    #[test]
    fn sample_count_grows_with_radius() {
        let arc = CircularArcProperties::fit(
            Vector2::new(0.0, 0.0),
            Vector2::new(600.0, 0.001),
            Vector2::new(512.0, 0.0),
        )
        .unwrap();
        assert!(arc.radius > 1e7);
        assert!(arc.sample_count(CIRCULAR_ARC_TOLERANCE) > 10_000);
    }

    #[test]
    fn fallback_to_bezier() {
        let collinear = [
            Vector2::new(0.0, 0.0),
            Vector2::new(5.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(20.0, 5.0),
        ];
        assert_eq!(
            approximate_circular_arc(&collinear).unwrap(),
            approximate_bezier(&collinear).unwrap()
        );

        let two = [Vector2::new(0.0, 0.0), Vector2::new(3.0, 4.0)];
        assert_eq!(approximate_circular_arc(&two).unwrap(), two.to_vec());
    }

    #[test]
    fn too_few_points() {
        assert!(approximate_circular_arc(&[Vector2::new(1.0, 1.0)]).is_err());
    }
}
