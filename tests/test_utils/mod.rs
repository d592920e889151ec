#![allow(dead_code)]

use buffer2d::buffer::Piece;
use buffer2d::core::math::Vector2;
use buffer2d::geometry::Ring;

/// Signed shoelace area of a closed ring, positive for counter clockwise winding.
pub fn signed_area(ring: &Ring<f64>) -> f64 {
    let pts = &ring.points;
    if pts.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for w in pts.windows(2) {
        sum += w[0].x * w[1].y - w[1].x * w[0].y;
    }
    sum / 2.0
}

/// Asserts every piece of the slice starts where the previous one ended.
pub fn assert_pieces_connected(pieces: &[&Piece<f64>]) {
    for pair in pieces.windows(2) {
        let last = pair[0].last_point().unwrap();
        let first = pair[1].first_point().unwrap();
        assert!(
            last.fuzzy_eq(first),
            "piece chain gap: {:?} -> {:?}",
            last,
            first
        );
    }
}

/// Asserts the piece chain of a ring is also closed end around.
pub fn assert_piece_chain_closed(pieces: &[&Piece<f64>]) {
    assert_pieces_connected(pieces);
    let last = pieces.last().unwrap().last_point().unwrap();
    let first = pieces.first().unwrap().first_point().unwrap();
    assert!(
        last.fuzzy_eq(first),
        "piece chain not closed: {:?} -> {:?}",
        last,
        first
    );
}

/// Asserts the ring contains a point fuzzy equal to `expected`.
pub fn assert_ring_contains_point(ring: &Ring<f64>, expected: Vector2<f64>) {
    assert!(
        ring.points.iter().any(|p| p.fuzzy_eq(expected)),
        "ring does not contain {:?}: {:?}",
        expected,
        ring.points
    );
}
