#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod bezier;
pub mod buffer;
pub mod catmull;
pub mod circular_arc;
pub mod constants;
pub mod error;
pub mod length;
pub mod linear;
pub mod list;
pub mod slider;
pub mod vector;

pub use crate::bezier::approximate_bezier;
pub use crate::catmull::approximate_catmull;
pub use crate::circular_arc::{approximate_circular_arc, CircularArcProperties};
pub use crate::error::{PathError, Result};
pub use crate::length::{calculate_length, LengthAdjustment, PathLength};
pub use crate::linear::approximate_linear;
pub use crate::slider::{ControlPoint, CurveType, SliderPath};
pub use crate::vector::Vector2;
