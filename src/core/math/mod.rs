//! Core/common math functions for working with angles, 2D space, and line intersections.
mod base_math;
mod line_line_intersect;
mod vector2;

pub use base_math::*;
pub use line_line_intersect::offset_lines_intr;
pub use vector2::{vec2, Vector2};
