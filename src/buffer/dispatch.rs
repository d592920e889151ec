use super::collection::PieceSink;
use super::piece::{PieceKind, Side};
use super::point::circle_points;
use super::range::{add_join, offset_segment_points, offset_side};
use super::BufferConfig;
use crate::core::{math::Vector2, traits::Real};
use crate::geometry::{simplify_points, Geometry, LineString, Polygon, Ring};
use crate::strategy::{DistanceStrategy, EndCapStrategy, JoinStrategy, RobustPolicy};

fn prepare_points<T, D, R>(points: &[Vector2<T>], distance: &D, robust: &R) -> Vec<Vector2<T>>
where
    T: Real,
    D: DistanceStrategy<T>,
    R: RobustPolicy<T>,
{
    let simplified = simplify_points(points, distance.simplify_distance());
    let mut out: Vec<Vector2<T>> = Vec::with_capacity(simplified.len());
    for p in simplified {
        if let Some(&last) = out.last() {
            if robust.points_equal(last, p) {
                continue;
            }
        }
        out.push(p);
    }
    out
}

/// Buffer one closed ring into the current output ring of `sink`.
///
/// The input is simplified at the distance strategy's tolerance before offsetting. Rings left
/// with 3 or fewer points (too few for an area with the closing vertex) contribute nothing. For
/// a negative distance the ring is walked back-to-front with the side swapped, which turns every
/// corner classification inside out and offsets toward the ring interior; the produced points
/// then run opposite the input winding and are flipped back during assembly. After the side walk
/// a wrap around corner piece connects the last offset segment back to the first.
pub fn buffer_ring<T, D, J, E, R, S>(
    ring: &Ring<T>,
    distance: &D,
    join: &J,
    end_cap: &E,
    robust: &R,
    sink: &mut S,
) where
    T: Real,
    D: DistanceStrategy<T>,
    J: JoinStrategy<T>,
    E: EndCapStrategy<T>,
    R: RobustPolicy<T>,
    S: PieceSink<T>,
{
    let mut points = prepare_points(&ring.points, distance, robust);
    if points.len() >= 2 {
        // accept rings missing their closing vertex by restoring it
        let (first, last) = (points[0], points[points.len() - 1]);
        if !robust.points_equal(first, last) {
            points.push(first);
        }
    }
    if points.len() <= 3 {
        return;
    }

    let side = if distance.negative() {
        points.reverse();
        Side::Right
    } else {
        Side::Left
    };

    let ends = match offset_side(&points, side, true, distance, join, end_cap, robust, sink) {
        Some(ends) => ends,
        None => return,
    };

    // wrap around join at the ring start, connecting the offset of the closing edge to the
    // offset of the first edge
    let n = points.len();
    let (p0, p1, p2) = (points[n - 2], points[n - 1], points[1]);
    let offset = distance.apply(p1, p2, side);
    add_join(
        p0,
        p1,
        p2,
        ends.last_p1,
        ends.last_p2,
        ends.first_p1,
        ends.first_p2,
        offset,
        side,
        true,
        join,
        end_cap,
        sink,
    );
}

/// Buffer an open linestring into a single two sided ribbon ring.
///
/// The left side is walked front-to-back, capped at the far end, then the right side back-to-front
/// and capped at the near end, producing one end-to-end connected chain of pieces. Spike caps are
/// suppressed on the return pass so a reversal corner is capped exactly once.
pub fn buffer_linestring<T, D, J, E, R, S>(
    line: &LineString<T>,
    distance: &D,
    join: &J,
    end_cap: &E,
    robust: &R,
    sink: &mut S,
) where
    T: Real,
    D: DistanceStrategy<T>,
    J: JoinStrategy<T>,
    E: EndCapStrategy<T>,
    R: RobustPolicy<T>,
    S: PieceSink<T>,
{
    let points = prepare_points(&line.points, distance, robust);
    if points.len() < 2 {
        return;
    }

    sink.start_new_ring();

    let forward_side = Side::Left;
    let return_side = forward_side.opposite();

    let forward_ends = match offset_side(
        &points,
        forward_side,
        true,
        distance,
        join,
        end_cap,
        robust,
        sink,
    ) {
        Some(ends) => ends,
        None => return,
    };

    let mut reversed = points.clone();
    reversed.reverse();

    // far end cap, joining the forward pass to where the return pass will start
    let n = points.len();
    let (last, penultimate) = (points[n - 1], points[n - 2]);
    let return_offset = distance.apply(reversed[0], reversed[1], return_side);
    let (return_p1, _) = offset_segment_points(reversed[0], reversed[1], return_offset);
    let cap_offset = distance.apply(penultimate, last, forward_side);
    let mut cap = Vec::new();
    end_cap.apply(
        penultimate,
        forward_ends.last_p2,
        last,
        return_p1,
        forward_side,
        cap_offset,
        &mut cap,
    );
    sink.add_endcap(last, cap, forward_side);

    let return_ends = match offset_side(
        &reversed,
        return_side,
        false,
        distance,
        join,
        end_cap,
        robust,
        sink,
    ) {
        Some(ends) => ends,
        None => return,
    };

    // near end cap, closing the ribbon back onto the forward pass start
    let mut cap = Vec::new();
    end_cap.apply(
        points[1],
        return_ends.last_p2,
        points[0],
        forward_ends.first_p1,
        return_side,
        return_offset,
        &mut cap,
    );
    sink.add_endcap(points[0], cap, return_side);
}

/// Buffer a single point into a sampled circle ring of `config.circle_vertex_count` vertices.
///
/// A non positive distance deflates the point away entirely and produces no output.
pub fn buffer_point<T, D, S>(point: Vector2<T>, distance: &D, config: &BufferConfig<T>, sink: &mut S)
where
    T: Real,
    D: DistanceStrategy<T>,
    S: PieceSink<T>,
{
    if distance.negative() {
        return;
    }

    let radius = distance.apply(point, point, Side::Left);
    if radius <= T::zero() {
        return;
    }

    sink.start_new_ring();
    sink.add_piece(
        PieceKind::Circle,
        point,
        circle_points(point, radius, config.circle_vertex_count),
        Side::Left,
    );
}

/// Buffer a polygon: the exterior ring and every interior ring each start their own output ring.
pub fn buffer_polygon<T, D, J, E, R, S>(
    polygon: &Polygon<T>,
    distance: &D,
    join: &J,
    end_cap: &E,
    robust: &R,
    sink: &mut S,
) where
    T: Real,
    D: DistanceStrategy<T>,
    J: JoinStrategy<T>,
    E: EndCapStrategy<T>,
    R: RobustPolicy<T>,
    S: PieceSink<T>,
{
    sink.start_new_ring();
    buffer_ring(&polygon.exterior, distance, join, end_cap, robust, sink);
    for interior in &polygon.interiors {
        sink.start_new_ring();
        buffer_ring(interior, distance, join, end_cap, robust, sink);
    }
}

/// Buffer any [Geometry] into `sink`, recursing per element for the multi kinds so every element
/// feeds the same shared collection.
pub fn buffer_geometry<T, D, J, E, R, S>(
    geometry: &Geometry<T>,
    distance: &D,
    join: &J,
    end_cap: &E,
    robust: &R,
    config: &BufferConfig<T>,
    sink: &mut S,
) where
    T: Real,
    D: DistanceStrategy<T>,
    J: JoinStrategy<T>,
    E: EndCapStrategy<T>,
    R: RobustPolicy<T>,
    S: PieceSink<T>,
{
    match geometry {
        Geometry::Point(p) => buffer_point(*p, distance, config, sink),
        Geometry::LineString(line) => {
            buffer_linestring(line, distance, join, end_cap, robust, sink)
        }
        Geometry::Ring(ring) => {
            sink.start_new_ring();
            buffer_ring(ring, distance, join, end_cap, robust, sink);
        }
        Geometry::Polygon(polygon) => {
            buffer_polygon(polygon, distance, join, end_cap, robust, sink)
        }
        Geometry::MultiPoint(points) => {
            for &p in points {
                buffer_point(p, distance, config, sink);
            }
        }
        Geometry::MultiLineString(lines) => {
            for line in lines {
                buffer_linestring(line, distance, join, end_cap, robust, sink);
            }
        }
        Geometry::MultiPolygon(polygons) => {
            for polygon in polygons {
                buffer_polygon(polygon, distance, join, end_cap, robust, sink);
            }
        }
    }
}
