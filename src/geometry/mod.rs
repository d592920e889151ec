//! Input geometry model: the closed variant set of bufferable geometry kinds and the
//! simplification pass applied before offsetting.
mod simplify;
mod types;

pub use simplify::simplify_points;
pub use types::{Geometry, LineString, Polygon, Ring};
