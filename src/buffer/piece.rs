use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Offset direction relative to a directed input edge.
///
/// `Left` is the forward walking pass; the offset vector points along the clockwise perpendicular
/// of the edge direction, so a counter clockwise ring buffered on its left side offsets outward.
/// `Right` marks the reversed pass (a linestring's second side, or a ring walked back-to-front
/// for a negative distance).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The opposite side.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Kind tag of a buffer boundary fragment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    /// Straight offset of one input edge.
    Segment,
    /// Convex corner fillet between two consecutive offset segments.
    Join,
    /// Cap closing an open end (or patching a spike corner).
    EndCap,
    /// Full circle around a buffered point.
    Circle,
    /// Direct wedge at a concave corner, left for downstream turn resolution.
    ConcaveWedge,
}

/// An atomic boundary fragment produced by the offsetting kernel.
///
/// Pieces are created once, submitted to the sink immediately, and never mutated afterwards by
/// the offsetter. Points are copies; no piece borrows into caller owned input geometry. In
/// emission order the pieces of one output ring are end-to-end connected: every piece starts at
/// the previous piece's last point (turn resolution may later discard or trim pieces, which is
/// entirely the assembler's concern).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece<T = f64> {
    pub kind: PieceKind,
    /// Ordered output boundary points of the fragment.
    pub points: Vec<Vector2<T>>,
    /// The input point this fragment originates from (corner vertex for joins/caps/wedges, edge
    /// start point for segments, the buffered point for circles).
    pub input_point: Vector2<T>,
    pub side: Side,
    /// Index of the output ring this piece belongs to.
    pub ring_index: usize,
}

impl<T> Piece<T>
where
    T: Real,
{
    #[inline]
    pub fn new(
        kind: PieceKind,
        points: Vec<Vector2<T>>,
        input_point: Vector2<T>,
        side: Side,
        ring_index: usize,
    ) -> Self {
        Piece {
            kind,
            points,
            input_point,
            side,
            ring_index,
        }
    }

    /// First output point of the fragment.
    #[inline]
    pub fn first_point(&self) -> Option<Vector2<T>> {
        self.points.first().copied()
    }

    /// Last output point of the fragment.
    #[inline]
    pub fn last_point(&self) -> Option<Vector2<T>> {
        self.points.last().copied()
    }
}
