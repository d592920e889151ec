use super::collection::PieceSink;
use super::piece::{PieceKind, Side};
use crate::core::{
    math::{directions_continue, offset_lines_intr, turn_direction, Vector2},
    traits::Real,
};
use crate::strategy::{DistanceStrategy, EndCapStrategy, JoinStrategy, RobustPolicy};

/// Classification of the corner formed by three consecutive input points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JoinKind {
    /// Left turn, the offset segments diverge and a join fillet fills the gap.
    Convex,
    /// Right turn, the offset segments overlap and a direct wedge is emitted.
    Concave,
    /// Collinear continuation, the offset segments share an endpoint.
    Continue,
    /// Collinear reversal (the path doubles back on itself).
    Spike,
}

/// Classify the corner at `p1` formed by the edges `p0 -> p1` and `p1 -> p2`.
///
/// Collinear corners split on the edge direction dot product into [JoinKind::Continue] and
/// [JoinKind::Spike].
#[inline]
pub fn classify_join<T>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>) -> JoinKind
where
    T: Real,
{
    match turn_direction(p0, p1, p2) {
        1 => JoinKind::Convex,
        -1 => JoinKind::Concave,
        _ => {
            if directions_continue(p1 - p0, p2 - p1) {
                JoinKind::Continue
            } else {
                JoinKind::Spike
            }
        }
    }
}

/// Offset both endpoints of the edge `p1 -> p2` along the clockwise perpendicular of the edge
/// direction by `offset` (a negative offset lands on the counter clockwise perpendicular).
#[inline]
pub fn offset_segment_points<T>(p1: Vector2<T>, p2: Vector2<T>, offset: T) -> (Vector2<T>, Vector2<T>)
where
    T: Real,
{
    let v = (p2 - p1).unit_perp_cw().scale(offset);
    (p1 + v, p2 + v)
}

/// Offset segment endpoints at the two extremities of one side pass, used to place end caps and
/// the wrap around join of a closed ring.
#[derive(Debug, Copy, Clone)]
pub struct SideEnds<T = f64> {
    pub first_p1: Vector2<T>,
    pub first_p2: Vector2<T>,
    pub last_p1: Vector2<T>,
    pub last_p2: Vector2<T>,
}

/// Emit the corner piece connecting two consecutive offset segments.
///
/// `p0`, `p1`, `p2` are the input corner triple; `prev_p1 -> prev_p2` is the already emitted
/// offset of `p0 -> p1` and `op1 -> op2` the offset of `p1 -> p2`. Convex corners get a join
/// fillet through the extended offset line intersection, concave corners a direct wedge routed
/// through the input corner, and spikes a cap wrapping around the reversal point. Spike caps are
/// emitted on the first pass only so a linestring's two passes over the same reversal produce a
/// single cap. A continue corner needs no piece and a convex corner whose offset lines are near
/// parallel degrades to one.
#[allow(clippy::too_many_arguments)]
pub fn add_join<T, J, E, S>(
    p0: Vector2<T>,
    p1: Vector2<T>,
    p2: Vector2<T>,
    prev_p1: Vector2<T>,
    prev_p2: Vector2<T>,
    op1: Vector2<T>,
    op2: Vector2<T>,
    offset: T,
    side: Side,
    first_pass: bool,
    join: &J,
    end_cap: &E,
    sink: &mut S,
) where
    T: Real,
    J: JoinStrategy<T>,
    E: EndCapStrategy<T>,
    S: PieceSink<T>,
{
    match classify_join(p0, p1, p2) {
        JoinKind::Convex => {
            // near parallel offset lines have no usable intersection, the offset endpoints
            // already coincide in that case
            if let Some(intr) = offset_lines_intr(prev_p1, prev_p2, op1, op2, T::fuzzy_epsilon()) {
                let mut points = Vec::new();
                join.apply(intr, p1, prev_p2, op1, offset, &mut points);
                sink.add_piece(PieceKind::Join, p1, points, side);
            }
        }
        JoinKind::Concave => {
            sink.add_piece(
                PieceKind::ConcaveWedge,
                p1,
                vec![prev_p2, p1, op1],
                side,
            );
        }
        JoinKind::Continue => {}
        JoinKind::Spike => {
            if first_pass {
                let mut points = Vec::new();
                end_cap.apply(p0, prev_p2, p1, op1, side, offset, &mut points);
                sink.add_endcap(p1, points, side);
            }
        }
    }
}

/// Walk `points` front-to-back emitting an offset segment piece per edge and a corner piece per
/// interior corner on `side`.
///
/// Consecutive input points equal under the robust policy collapse to one so zero length edges
/// never reach the corner math. Returns the extremity offset points, `None` when fewer than two
/// distinct points remain.
#[allow(clippy::too_many_arguments)]
pub fn offset_side<T, D, J, E, R, S>(
    points: &[Vector2<T>],
    side: Side,
    first_pass: bool,
    distance: &D,
    join: &J,
    end_cap: &E,
    robust: &R,
    sink: &mut S,
) -> Option<SideEnds<T>>
where
    T: Real,
    D: DistanceStrategy<T>,
    J: JoinStrategy<T>,
    E: EndCapStrategy<T>,
    R: RobustPolicy<T>,
    S: PieceSink<T>,
{
    let mut pts: Vec<Vector2<T>> = Vec::with_capacity(points.len());
    for &p in points {
        if let Some(&last) = pts.last() {
            if robust.points_equal(last, p) {
                continue;
            }
        }
        pts.push(p);
    }

    if pts.len() < 2 {
        return None;
    }

    let first_offset = distance.apply(pts[0], pts[1], side);
    let (first_p1, first_p2) = offset_segment_points(pts[0], pts[1], first_offset);
    sink.add_piece(PieceKind::Segment, pts[0], vec![first_p1, first_p2], side);

    let (mut prev_p1, mut prev_p2) = (first_p1, first_p2);
    for i in 1..(pts.len() - 1) {
        let (p0, p1, p2) = (pts[i - 1], pts[i], pts[i + 1]);
        let offset = distance.apply(p1, p2, side);
        let (op1, op2) = offset_segment_points(p1, p2, offset);
        add_join(
            p0, p1, p2, prev_p1, prev_p2, op1, op2, offset, side, first_pass, join, end_cap, sink,
        );
        sink.add_piece(PieceKind::Segment, p1, vec![op1, op2], side);
        prev_p1 = op1;
        prev_p2 = op2;
    }

    Some(SideEnds {
        first_p1,
        first_p2,
        last_p1: prev_p1,
        last_p2: prev_p2,
    })
}
