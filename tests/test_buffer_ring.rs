mod test_utils;

use buffer2d::buffer::{
    buffer, buffer_geometry, BufferConfig, BufferedPieceCollection, PieceKind, PieceSink, Side,
};
use buffer2d::core::traits::FuzzyEq;
use buffer2d::geometry::Geometry;
use buffer2d::ring;
use buffer2d::strategy::{ConstantDistance, FuzzyEqPolicy, MiterJoin, RoundJoin};
use test_utils::{assert_piece_chain_closed, assert_ring_contains_point, signed_area};

fn collect_pieces(
    geometry: &Geometry<f64>,
    distance: f64,
) -> (BufferedPieceCollection<f64>, Vec<buffer2d::geometry::Ring<f64>>) {
    let dist = ConstantDistance::new(distance);
    let config = BufferConfig::default();
    let mut collection = BufferedPieceCollection::new();
    buffer_geometry(
        geometry,
        &dist,
        &MiterJoin,
        &buffer2d::strategy::RoundCap::default(),
        &FuzzyEqPolicy::default(),
        &config,
        &mut collection,
    );
    let rings = buffer(
        geometry,
        &dist,
        &MiterJoin,
        &buffer2d::strategy::RoundCap::default(),
        &FuzzyEqPolicy::default(),
        &config,
    );
    (collection, rings)
}

#[test]
fn square_miter_inflate() {
    let square = Geometry::Ring(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
    let (collection, rings) = collect_pieces(&square, 1.0);

    // one segment per edge and one join per corner including the wrap around corner
    let pieces: Vec<_> = collection.pieces().iter().collect();
    assert_eq!(pieces.len(), 8);
    assert_eq!(
        pieces.iter().filter(|p| p.kind == PieceKind::Segment).count(),
        4
    );
    assert_eq!(pieces.iter().filter(|p| p.kind == PieceKind::Join).count(), 4);
    assert!(pieces.iter().all(|p| p.side == Side::Left));
    assert_piece_chain_closed(&pieces);

    assert_eq!(rings.len(), 1);
    let ring = &rings[0];
    assert!(ring.is_closed());
    // miter joins keep the sharp corners, the result is the 6x6 square
    assert!(signed_area(ring).fuzzy_eq(36.0));
    assert_ring_contains_point(ring, buffer2d::core::math::vec2(5.0, -1.0));
    assert_ring_contains_point(ring, buffer2d::core::math::vec2(-1.0, 5.0));
    // every segment is the input edge moved outward by exactly the distance
    for piece in pieces.iter().filter(|p| p.kind == PieceKind::Segment) {
        for pt in &piece.points {
            let outside_x = pt.x < 0.0 || pt.x > 4.0;
            let outside_y = pt.y < 0.0 || pt.y > 4.0;
            assert!(outside_x || outside_y);
        }
    }
}

#[test]
fn square_round_join_area() {
    let square = Geometry::Ring(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
    let dist = ConstantDistance::new(1.0);
    let rings = buffer(
        &square,
        &dist,
        &RoundJoin::default(),
        &buffer2d::strategy::RoundCap::default(),
        &FuzzyEqPolicy::default(),
        &BufferConfig::default(),
    );

    assert_eq!(rings.len(), 1);
    // rounded corners: 6x6 square minus the four corner squares plus the quarter circles
    let expected = 32.0 + std::f64::consts::PI;
    assert!((signed_area(&rings[0]) - expected).abs() < 1e-2);
}

#[test]
fn square_negative_distance_walks_reversed() {
    let square = Geometry::Ring(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
    let (collection, rings) = collect_pieces(&square, -1.0);

    let pieces: Vec<_> = collection.pieces().iter().collect();
    assert_eq!(pieces.len(), 8);
    // reversed walk flips every corner classification, deflating corners overlap and emit wedges
    assert_eq!(
        pieces
            .iter()
            .filter(|p| p.kind == PieceKind::ConcaveWedge)
            .count(),
        4
    );
    assert!(pieces.iter().all(|p| p.side == Side::Right));
    assert_piece_chain_closed(&pieces);
    // every wedge routes through its input corner
    for wedge in pieces.iter().filter(|p| p.kind == PieceKind::ConcaveWedge) {
        assert!(wedge.points[1].fuzzy_eq(wedge.input_point));
    }

    assert_eq!(rings.len(), 1);
    let ring = &rings[0];
    assert!(ring.is_closed());
    // offsets land one unit inside the input edges
    assert_ring_contains_point(ring, buffer2d::core::math::vec2(1.0, 0.0));
    assert_ring_contains_point(ring, buffer2d::core::math::vec2(3.0, 4.0));
}

#[test]
fn degenerate_ring_is_silent_no_op() {
    let degenerate = Geometry::Ring(ring![(0.0, 0.0), (2.0, 0.0), (0.0, 0.0)]);
    let (collection, rings) = collect_pieces(&degenerate, 1.0);
    assert!(collection.pieces().is_empty());
    assert!(rings.is_empty());
}

#[test]
fn collinear_edge_point_is_simplified_away() {
    // midpoint on the bottom edge disappears during simplification, the piece set matches the
    // plain square
    let square = Geometry::Ring(ring![
        (0.0, 0.0),
        (2.0, 0.0),
        (4.0, 0.0),
        (4.0, 4.0),
        (0.0, 4.0),
        (0.0, 0.0)
    ]);
    let (collection, rings) = collect_pieces(&square, 1.0);
    assert_eq!(collection.pieces().len(), 8);
    assert!(signed_area(&rings[0]).fuzzy_eq(36.0));
}

#[test]
fn ring_without_closing_vertex_is_closed_implicitly() {
    let open = Geometry::Ring(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    let (collection, rings) = collect_pieces(&open, 1.0);
    assert_eq!(collection.pieces().len(), 8);
    assert_eq!(rings.len(), 1);
    assert!(signed_area(&rings[0]).fuzzy_eq(36.0));
}

#[test]
fn concave_ring_corner_emits_wedge() {
    // counter clockwise L shape, the reflex corner at (2, 2) is concave
    let l_shape = Geometry::Ring(ring![
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (2.0, 2.0),
        (2.0, 4.0),
        (0.0, 4.0),
        (0.0, 0.0)
    ]);
    let (collection, _) = collect_pieces(&l_shape, 0.5);
    let wedges: Vec<_> = collection
        .pieces()
        .iter()
        .filter(|p| p.kind == PieceKind::ConcaveWedge)
        .collect();
    assert_eq!(wedges.len(), 1);
    assert!(wedges[0].input_point.fuzzy_eq(buffer2d::core::math::vec2(2.0, 2.0)));
}

#[test]
fn piece_sink_receives_rings_in_order() {
    struct CountingSink {
        rings_started: usize,
        pieces: usize,
    }

    impl PieceSink<f64> for CountingSink {
        fn start_new_ring(&mut self) {
            self.rings_started += 1;
        }

        fn add_piece(
            &mut self,
            _kind: PieceKind,
            _input_point: buffer2d::core::math::Vector2<f64>,
            points: Vec<buffer2d::core::math::Vector2<f64>>,
            _side: Side,
        ) {
            assert!(self.rings_started > 0);
            assert!(!points.is_empty());
            self.pieces += 1;
        }
    }

    let square = Geometry::Ring(ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
    let mut sink = CountingSink {
        rings_started: 0,
        pieces: 0,
    };
    buffer_geometry(
        &square,
        &ConstantDistance::new(1.0),
        &MiterJoin,
        &buffer2d::strategy::RoundCap::default(),
        &FuzzyEqPolicy::default(),
        &BufferConfig::default(),
        &mut sink,
    );
    assert_eq!(sink.rings_started, 1);
    assert_eq!(sink.pieces, 8);
}
