//! The piece-generation kernel: corner classification, per-edge offsetting, and per-geometry
//! dispatch, emitting typed boundary pieces into a [PieceSink].

mod collection;
mod dispatch;
mod piece;
mod point;
mod range;

pub use collection::{BufferedPieceCollection, PieceSink};
pub use dispatch::{
    buffer_geometry, buffer_linestring, buffer_point, buffer_polygon, buffer_ring,
};
pub use piece::{Piece, PieceKind, Side};
pub use point::circle_points;
pub use range::{add_join, classify_join, offset_segment_points, offset_side, JoinKind, SideEnds};

use crate::core::traits::Real;
use crate::geometry::{Geometry, Ring};
use crate::strategy::{DistanceStrategy, EndCapStrategy, JoinStrategy, RobustPolicy};

/// Tunables of the buffering run that are not part of any geometric strategy.
#[derive(Debug, Clone, Copy)]
pub struct BufferConfig<T = f64> {
    /// Vertex count used to sample the full circle around a buffered point (the closing
    /// duplicate vertex is added on top).
    pub circle_vertex_count: usize,
    /// Fuzzy equality epsilon used when chaining piece points into output rings.
    pub pos_equal_eps: T,
}

impl<T> BufferConfig<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }
}

impl<T> Default for BufferConfig<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        BufferConfig {
            circle_vertex_count: 88,
            pos_equal_eps: T::from(1e-5).unwrap(),
        }
    }
}

/// Pipeline stage handed to a [PieceVisitor].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VisitStage {
    /// All pieces are emitted, no assembly has happened yet.
    RawPieces,
    /// Piece chains are assembled into raw output rings.
    ResolvedRings,
}

/// Read-only observer of the piece collection, called once per [VisitStage].
///
/// Lets callers inspect or export intermediate state (e.g. debug visualization of the raw piece
/// set) without changing the pipeline.
pub trait PieceVisitor<T>
where
    T: Real,
{
    fn visit(&mut self, collection: &BufferedPieceCollection<T>, stage: VisitStage);
}

/// Visitor that observes nothing.
#[derive(Debug, Default, Copy, Clone)]
pub struct DefaultPieceVisitor;

impl<T> PieceVisitor<T> for DefaultPieceVisitor
where
    T: Real,
{
    #[inline]
    fn visit(&mut self, _collection: &BufferedPieceCollection<T>, _stage: VisitStage) {}
}

/// Buffer `geometry` and return the raw assembled output rings.
///
/// Each returned ring is closed (first point repeated at the end) and may self intersect; turn
/// based overlay resolution is downstream of this crate. For an areal input buffered at a
/// negative distance the rings are reversed after assembly so the output restores the input
/// winding convention.
pub fn buffer<T, D, J, E, R>(
    geometry: &Geometry<T>,
    distance: &D,
    join: &J,
    end_cap: &E,
    robust: &R,
    config: &BufferConfig<T>,
) -> Vec<Ring<T>>
where
    T: Real,
    D: DistanceStrategy<T>,
    J: JoinStrategy<T>,
    E: EndCapStrategy<T>,
    R: RobustPolicy<T>,
{
    buffer_with_visitor(
        geometry,
        distance,
        join,
        end_cap,
        robust,
        config,
        &mut DefaultPieceVisitor,
    )
}

/// Same as [buffer] with a [PieceVisitor] observing the collection after piece emission and
/// again after ring assembly.
pub fn buffer_with_visitor<T, D, J, E, R, V>(
    geometry: &Geometry<T>,
    distance: &D,
    join: &J,
    end_cap: &E,
    robust: &R,
    config: &BufferConfig<T>,
    visitor: &mut V,
) -> Vec<Ring<T>>
where
    T: Real,
    D: DistanceStrategy<T>,
    J: JoinStrategy<T>,
    E: EndCapStrategy<T>,
    R: RobustPolicy<T>,
    V: PieceVisitor<T>,
{
    let mut collection = BufferedPieceCollection::new();
    buffer_geometry(geometry, distance, join, end_cap, robust, config, &mut collection);
    visitor.visit(&collection, VisitStage::RawPieces);

    let reverse = distance.negative() && geometry.is_areal();
    collection.assemble(config.pos_equal_eps, reverse);
    visitor.visit(&collection, VisitStage::ResolvedRings);

    collection.into_rings()
}
