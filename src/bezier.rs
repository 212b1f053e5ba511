//! Adaptive flattening of bezier curves of arbitrary degree.
//!
//! The curve is repeatedly split in halves using de castlejau's algorithm until every piece's
//! control polygon is flat enough to be emitted as is. Pieces waiting to be processed live on
//! an explicit stack; buffers of finished pieces go to a [`BufferPool`] and are reused for the
//! right halves of later splits.

use log::{debug, trace};

use crate::buffer::{BufferPool, FixedBuffer};
use crate::constants::BEZIER_TOLERANCE;
use crate::error::{require_two, PathError, Result};
use crate::vector::{self, Vector2};

/// Checks whether a control polygon deviates less than [`BEZIER_TOLERANCE`] from a line.
///
/// Every interior control point's second difference `p[i-1] - 2p[i] + p[i+1]` is compared
/// against the tolerance. Curves without interior points are always flat.
pub fn is_flat_enough(points: &[Vector2]) -> bool {
    points.windows(3).all(|window| {
        let difference = window[0] - window[1] * 2.0 + window[2];
        vector::magnitude(&difference).powi(2) <= BEZIER_TOLERANCE * BEZIER_TOLERANCE * 4.0
    })
}

/// Splits the curve `points` at `t = 0.5`.
///
/// The first `points.len()` entries of `left` and `right` receive the control points of the
/// lower and upper half. `midpoints` is scratch space for the rows of de castlejau's
/// triangle and has to be at least as long as `points`.
pub fn subdivide(
    points: &[Vector2],
    left: &mut [Vector2],
    right: &mut [Vector2],
    midpoints: &mut [Vector2],
) -> Result<()> {
    let count = points.len();
    let shortest = left.len().min(right.len()).min(midpoints.len());
    if shortest < count {
        return Err(PathError::Index {
            index: count - 1,
            len: shortest,
        });
    }

    midpoints[..count].copy_from_slice(points);
    for i in 0..count {
        left[i] = midpoints[0];
        right[count - i - 1] = midpoints[count - i - 1];

        // castlejau step
        for j in 0..(count - i - 1) {
            midpoints[j] = (midpoints[j] + midpoints[j + 1]) / 2.0;
        }
    }
    Ok(())
}

/// State of one flattening run.
///
/// All scratch buffers are sized once from the number of control points.
struct BezierApproximator<'p> {
    points: &'p [Vector2],
    output: Vec<Vector2>,
    pool: BufferPool<Vector2>,

    /// Rows of de castlejau's triangle
    midpoints: FixedBuffer<Vector2>,

    /// Left half during subdivision, both halves joined during emission
    joined: FixedBuffer<Vector2>,

    /// Right half during emission
    right: FixedBuffer<Vector2>,
}

impl<'p> BezierApproximator<'p> {
    fn new(points: &'p [Vector2]) -> Self {
        let count = points.len();
        let zero = Vector2::zeros();
        BezierApproximator {
            points,
            output: Vec::new(),
            pool: BufferPool::new(),
            midpoints: FixedBuffer::filled(count, zero),
            joined: FixedBuffer::filled(2 * count - 1, zero),
            right: FixedBuffer::filled(count, zero),
        }
    }

    fn count(&self) -> usize {
        self.points.len()
    }

    /// Flattens the whole curve into `self.output`.
    fn run(&mut self) -> Result<()> {
        let count = self.count();
        let mut to_flatten = vec![FixedBuffer::from_slice(self.points)];
        let mut max_depth = 1;

        while let Some(mut parent) = to_flatten.pop() {
            if is_flat_enough(parent.as_slice()) {
                self.emit(parent.as_slice())?;
                self.pool.release(parent);
                continue;
            }

            let mut right_child = self.pool.checkout(count, Vector2::zeros());
            subdivide(
                parent.as_slice(),
                self.joined.as_mut_slice(),
                right_child.as_mut_slice(),
                self.midpoints.as_mut_slice(),
            )?;
            parent.copy_from(&self.joined.as_slice()[..count])?;

            // Left half on top, so pieces are emitted from start to end
            to_flatten.push(right_child);
            to_flatten.push(parent);

            if to_flatten.len() > max_depth {
                max_depth = to_flatten.len();
                trace!("bezier worklist grew to {} pieces", max_depth);
            }
        }

        self.output.push(self.points[count - 1]);
        debug!(
            "flattened bezier of {} control points into {} points ({} buffers allocated, {} reused)",
            count,
            self.output.len(),
            self.pool.allocated(),
            self.pool.reused()
        );
        Ok(())
    }

    /// Emits a flat piece's points except for its very last one.
    ///
    /// The piece is split once more and each interior point is smoothed with its neighbours
    /// in the joined control polygon of both halves.
    fn emit(&mut self, piece: &[Vector2]) -> Result<()> {
        let count = piece.len();
        subdivide(
            piece,
            self.joined.as_mut_slice(),
            self.right.as_mut_slice(),
            self.midpoints.as_mut_slice(),
        )?;
        for i in 0..(count - 1) {
            let point = *self.right.get(i + 1)?;
            self.joined.set(count + i, point)?;
        }

        self.output.push(piece[0]);
        let joined = self.joined.as_slice();
        for i in 1..(count - 1) {
            let index = 2 * i;
            let p1 = joined[index - 1];
            let p2 = joined[index];
            let p3 = joined[index + 1];
            self.output.push((p1 + p2 * 2.0 + p3) * 0.25);
        }
        Ok(())
    }
}

/// Approximates the bezier curve given by `points` with a polyline.
///
/// The polyline starts and ends exactly at the first and last control point.
pub fn approximate_bezier(points: &[Vector2]) -> Result<Vec<Vector2>> {
    require_two(points)?;
    let mut approximator = BezierApproximator::new(points);
    approximator.run()?;
    Ok(approximator.output)
}
