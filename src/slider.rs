//! Slider paths as stored in a beatmap's hit object line.
//!
//! A slider's curve is written as `B|x:y|x:y|...`: the curve type's letter followed by the
//! control points after the hit object's own position. Repeating a control point turns it
//! into an anchor where one curve segment ends and the next one starts.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::bezier::approximate_bezier;
use crate::catmull::approximate_catmull;
use crate::circular_arc::approximate_circular_arc;
use crate::error::{PathError, Result};
use crate::length::{calculate_length, PathLength};
use crate::linear::approximate_linear;
use crate::vector::{self, Vector2};

/// How a slider's control points are turned into a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveType {
    /// `L`: straight lines between the control points
    Linear,

    /// `P`: circular arc through exactly three points
    Perfect,

    /// `B`: bezier curve per segment
    Bezier,

    /// `C`: catmull-rom spline per segment
    Catmull,
}

impl CurveType {
    /// Letter used for this type in beatmap files.
    pub fn letter(&self) -> char {
        match self {
            CurveType::Linear => 'L',
            CurveType::Perfect => 'P',
            CurveType::Bezier => 'B',
            CurveType::Catmull => 'C',
        }
    }

    /// Approximates a single segment of a path.
    ///
    /// Perfect curves only exist for exactly three points; other counts are treated as bezier.
    pub fn approximate(&self, segment: &[Vector2]) -> Result<Vec<Vector2>> {
        let path = match self {
            CurveType::Linear => approximate_linear(segment)?,
            CurveType::Perfect if segment.len() == 3 => approximate_circular_arc(segment)?,
            CurveType::Perfect | CurveType::Bezier => approximate_bezier(segment)?,
            CurveType::Catmull => approximate_catmull(segment)?,
        };
        if path.is_empty() {
            return approximate_bezier(segment);
        }
        Ok(path)
    }
}

impl FromStr for CurveType {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(CurveType::Linear),
            "P" => Ok(CurveType::Perfect),
            "B" => Ok(CurveType::Bezier),
            "C" => Ok(CurveType::Catmull),
            other => Err(PathError::Parse(format!("unknown curve type {:?}", other))),
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A control point and whether a new segment starts there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlPoint {
    /// Where the point lies
    pub position: Vector2,

    /// Whether a segment ends and the next one starts here
    pub anchor: bool,
}

/// Collapses runs of equal positions into a single anchor point.
fn collapse_anchors(positions: &[Vector2]) -> Vec<ControlPoint> {
    let mut points: Vec<ControlPoint> = Vec::with_capacity(positions.len());
    for position in positions {
        match points.last_mut() {
            Some(last) if vector::equal(&last.position, position) => last.anchor = true,
            _ => points.push(ControlPoint {
                position: *position,
                anchor: false,
            }),
        }
    }
    points
}

/// Compares two points after rounding their coordinates to 5 decimals.
fn nearly_equal(a: &Vector2, b: &Vector2) -> bool {
    let round = |x: f64| (x * 1e5).round();
    round(a.x) == round(b.x) && round(a.y) == round(b.y)
}

fn parse_coordinate(field: &str) -> Result<Vector2> {
    let (x, y) = field
        .split_once(':')
        .ok_or_else(|| PathError::Parse(format!("expected `x:y`, got {:?}", field)))?;
    let parse = |value: &str| {
        value
            .trim()
            .parse::<f64>()
            .map_err(|err| PathError::Parse(format!("bad coordinate {:?}: {}", value, err)))
    };
    Ok(Vector2::new(parse(x)?, parse(y)?))
}

/// A slider's curve description and, once calculated, its path.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPath {
    curve_type: CurveType,
    points: Vec<ControlPoint>,
    expected_distance: f64,
    calculated: Option<PathLength>,
}

impl SliderPath {
    /// Creates a path from raw control point positions.
    pub fn new(curve_type: CurveType, positions: &[Vector2], expected_distance: f64) -> Self {
        SliderPath {
            curve_type,
            points: collapse_anchors(positions),
            expected_distance,
            calculated: None,
        }
    }

    /// Parses a curve description like `B|100:50|200:50`.
    ///
    /// `start` is the hit object's position, which is the first control point,
    /// and `expected_distance` its pixel length.
    pub fn parse(curve_data: &str, start: Vector2, expected_distance: f64) -> Result<Self> {
        let mut fields = curve_data.split('|');
        let curve_type = fields
            .next()
            .filter(|field| !field.trim().is_empty())
            .ok_or_else(|| PathError::Parse("missing curve type".to_string()))?
            .parse::<CurveType>()?;

        let mut positions = vec![start];
        for field in fields {
            positions.push(parse_coordinate(field)?);
        }
        Ok(Self::new(curve_type, &positions, expected_distance))
    }

    /// How the control points are turned into a path.
    pub fn curve_type(&self) -> CurveType {
        self.curve_type
    }

    /// Control points with runs of repeated positions collapsed into anchors.
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Pixel length the calculated path is fitted to.
    pub fn expected_distance(&self) -> f64 {
        self.expected_distance
    }

    /// Positions of all control points.
    pub fn positions(&self) -> Vec<Vector2> {
        self.points.iter().map(|point| point.position).collect()
    }

    /// Approximates every segment and joins them into one path.
    ///
    /// Returns the path and the index of each segment's last point in it.
    pub fn calculate_path(&self) -> Result<(Vec<Vector2>, Vec<usize>)> {
        let positions = self.positions();
        let mut path: Vec<Vector2> = Vec::new();
        let mut segment_ends = Vec::new();

        let mut start = 0;
        for (i, point) in self.points.iter().enumerate() {
            if !point.anchor && i != 0 && i < self.points.len() - 1 {
                continue;
            }

            let segment = &positions[start..=i];
            let approximation = match segment {
                [single] => vec![*single],
                _ => self.curve_type.approximate(segment)?,
            };
            for point in approximation {
                if !matches!(path.last(), Some(last) if nearly_equal(last, &point)) {
                    path.push(point);
                }
            }

            segment_ends.push(path.len().saturating_sub(1));
            start = i;
        }

        Ok((path, segment_ends))
    }

    /// Calculates the path and fits it to the expected distance.
    pub fn calculate(&mut self) -> Result<&PathLength> {
        let (path, segment_ends) = self.calculate_path()?;
        let length = calculate_length(
            &self.positions(),
            &path,
            &segment_ends,
            self.expected_distance,
        )?;
        debug!(
            "{} slider with {} control points calculated into {} points",
            self.curve_type,
            self.points.len(),
            length.path.len()
        );
        Ok(self.calculated.insert(length))
    }

    /// Result of the last [`calculate`](SliderPath::calculate), if any.
    pub fn calculated(&self) -> Option<&PathLength> {
        self.calculated.as_ref()
    }

    /// Length of the calculated path, `0` before calculation.
    pub fn distance(&self) -> f64 {
        self.calculated.as_ref().map_or(0.0, PathLength::distance)
    }

    /// Point at `progress` (clamped to `0..=1`) of the calculated path's length.
    ///
    /// An uncalculated or empty path is located at the origin.
    pub fn position_at(&self, progress: f64) -> Vector2 {
        let Some(length) = self.calculated.as_ref() else {
            return Vector2::zeros();
        };
        let path = &length.path;
        let cumulative = &length.cumulative_length;
        let Some(first) = path.first() else {
            return Vector2::zeros();
        };

        let distance = num::clamp(progress, 0.0, 1.0) * length.distance();
        let index = cumulative.partition_point(|&d| d < distance);

        if index == 0 {
            return *first;
        }
        if index >= path.len() || index >= cumulative.len() {
            return path[path.len() - 1];
        }

        let p0 = path[index - 1];
        let p1 = path[index];
        let d0 = cumulative[index - 1];
        let d1 = cumulative[index];
        if d1 == d0 {
            return p0;
        }
        p0 + (p1 - p0) * ((distance - d0) / (d1 - d0))
    }
}
