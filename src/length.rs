//! Fitting an approximated path to the length the beatmap expects.
//!
//! Curve approximations rarely have exactly the pixel length stored in the beatmap.
//! [`calculate_length`] walks back over points that overshoot the expected length and
//! places a new last point at exactly that distance along the remaining path.

use log::debug;

use crate::error::Result;
use crate::list::GrowableList;
use crate::vector::{self, Vector2};

/// Which adjustment [`calculate_length`] had to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthAdjustment {
    /// The path already had the expected length (or was empty).
    Unchanged,

    /// The path is too short but its control points end on a repeated point.
    ///
    /// Only the cumulative table is extended; the geometry is left alone.
    ClosedLoopExtension,

    /// Every segment overshot the expected length, only the first point is left.
    TrimmedToStart,

    /// Overshooting points were dropped and the last point was moved onto the expected length.
    Interpolated,
}

/// A path together with its segment boundaries and cumulative length table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathLength {
    /// The fitted path
    pub path: Vec<Vector2>,

    /// Indices into `path` where a segment of the original curve ends
    pub segment_ends: Vec<usize>,

    /// Running sum of the distances between consecutive path points
    pub cumulative_length: Vec<f64>,

    /// How the path was fitted
    pub adjustment: LengthAdjustment,
}

impl PathLength {
    /// Total length, i.e. the last entry of the cumulative table.
    pub fn distance(&self) -> f64 {
        self.cumulative_length.last().copied().unwrap_or(0.0)
    }
}

fn finish(
    path: GrowableList<Vector2>,
    segment_ends: Vec<usize>,
    cumulative_length: GrowableList<f64>,
    adjustment: LengthAdjustment,
) -> Result<PathLength> {
    debug!(
        "path of {} points fitted to length {:?} ({:?})",
        path.len(),
        cumulative_length.last(),
        adjustment
    );
    Ok(PathLength {
        path: path.into_vec(),
        segment_ends,
        cumulative_length: cumulative_length.into_vec(),
        adjustment,
    })
}

/// Builds the cumulative length table of `path` and fits it to `expected_distance`.
///
/// `points` are the curve's control points, `path` its approximation and `segment_ends`
/// the indices in `path` where the curve's segments end. For every point removed from the
/// end of the path, the last segment end is decremented by one.
pub fn calculate_length(
    points: &[Vector2],
    path: &[Vector2],
    segment_ends: &[usize],
    expected_distance: f64,
) -> Result<PathLength> {
    let mut path = GrowableList::try_from_iter(path.iter().copied())?;
    let mut segment_ends = segment_ends.to_vec();
    let mut cumulative_length = GrowableList::new();

    if path.is_empty() {
        return finish(
            path,
            segment_ends,
            cumulative_length,
            LengthAdjustment::Unchanged,
        );
    }

    let mut calculated_length = 0.0;
    cumulative_length.append(calculated_length)?;
    for i in 0..(path.len() - 1) {
        calculated_length += vector::distance(path.get(i)?, path.get(i + 1)?);
        cumulative_length.append(calculated_length)?;
    }

    if expected_distance == calculated_length {
        return finish(
            path,
            segment_ends,
            cumulative_length,
            LengthAdjustment::Unchanged,
        );
    }

    if let [.., second_last, last] = points {
        if expected_distance > calculated_length && vector::equal(second_last, last) {
            cumulative_length.append(calculated_length)?;
            return finish(
                path,
                segment_ends,
                cumulative_length,
                LengthAdjustment::ClosedLoopExtension,
            );
        }
    }

    cumulative_length.pop_last();
    let mut end = path.len() - 1;

    while matches!(cumulative_length.last(), Some(&last) if last >= expected_distance) {
        cumulative_length.pop_last();
        path.remove(end)?;
        end -= 1;

        if let Some(segment_end) = segment_ends.last_mut() {
            *segment_end = segment_end.saturating_sub(1);
        }
    }

    if end == 0 {
        cumulative_length.append(0.0)?;
        return finish(
            path,
            segment_ends,
            cumulative_length,
            LengthAdjustment::TrimmedToStart,
        );
    }

    let from = *path.get(end - 1)?;
    let mut direction = path.get(end)? - from;
    vector::normalize(&mut direction);

    let last_length = cumulative_length.last().copied().unwrap_or(0.0);
    path.set(end, from + direction * (expected_distance - last_length))?;
    cumulative_length.append(expected_distance)?;

    finish(
        path,
        segment_ends,
        cumulative_length,
        LengthAdjustment::Interpolated,
    )
}
