//! `buffer2d` computes the raw boundary pieces of the distance-offset
//! ("buffered") region of 2D cartesian geometries.
//!
//! The crate is the piece-generation kernel of a buffering pipeline: it
//! classifies input corners, offsets every edge by a strategy-determined
//! distance, and emits typed boundary pieces (segments, joins, end caps,
//! circles, concave wedges) into a [buffer::PieceSink]. Resolving the
//! self-intersections of the raw piece set into a simple polygon is the
//! responsibility of a downstream assembler; the
//! [buffer::BufferedPieceCollection] accumulator included here performs only
//! the raw chain assembly and exposes the piece state for inspection through
//! [buffer::PieceVisitor].
//!
//! Geometric behavior (fillet shape, cap shape, per-edge distance, robust
//! point comparison) is injected per call through the [strategy] traits.
//!
//! # Examples
//!
//! ```
//! use buffer2d::buffer::{buffer, BufferConfig};
//! use buffer2d::geometry::Geometry;
//! use buffer2d::ring;
//! use buffer2d::strategy::{ConstantDistance, FuzzyEqPolicy, MiterJoin, RoundCap};
//!
//! let square = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)];
//! let rings = buffer(
//!     &Geometry::Ring(square),
//!     &ConstantDistance::new(1.0),
//!     &MiterJoin,
//!     &RoundCap::default(),
//!     &FuzzyEqPolicy::default(),
//!     &BufferConfig::default(),
//! );
//! assert_eq!(rings.len(), 1);
//! ```

#[macro_use]
mod macros;

pub mod buffer;
pub mod core;
pub mod geometry;
pub mod strategy;
