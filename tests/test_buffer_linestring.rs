mod test_utils;

use buffer2d::buffer::{
    buffer, buffer_geometry, BufferConfig, BufferedPieceCollection, PieceKind, Side,
};
use buffer2d::core::math::vec2;
use buffer2d::core::traits::FuzzyEq;
use buffer2d::geometry::Geometry;
use buffer2d::line_string;
use buffer2d::strategy::{ConstantDistance, FlatCap, FuzzyEqPolicy, MiterJoin, RoundCap};
use test_utils::{assert_piece_chain_closed, signed_area};

fn buffer_line_flat(
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
        &FlatCap,
        &FuzzyEqPolicy::default(),
        &config,
        &mut collection,
    );
    let rings = buffer(
        geometry,
        &dist,
        &MiterJoin,
        &FlatCap,
        &FuzzyEqPolicy::default(),
        &config,
    );
    (collection, rings)
}

#[test]
fn single_segment_flat_caps_forms_rectangle() {
    let line = Geometry::LineString(line_string![(0.0, 0.0), (4.0, 0.0)]);
    let (collection, rings) = buffer_line_flat(&line, 1.0);

    let pieces: Vec<_> = collection.pieces().iter().collect();
    assert_eq!(pieces.len(), 4);
    assert_eq!(pieces[0].kind, PieceKind::Segment);
    assert_eq!(pieces[0].side, Side::Left);
    assert_eq!(pieces[1].kind, PieceKind::EndCap);
    assert_eq!(pieces[2].kind, PieceKind::Segment);
    assert_eq!(pieces[2].side, Side::Right);
    assert_eq!(pieces[3].kind, PieceKind::EndCap);
    assert_piece_chain_closed(&pieces);

    assert_eq!(rings.len(), 1);
    let ring = &rings[0];
    assert!(ring.is_closed());
    // a 4 x 2 rectangle wound counter clockwise
    assert!(signed_area(ring).fuzzy_eq(8.0));
    assert!(ring.points.iter().any(|p| p.fuzzy_eq(vec2(0.0, -1.0))));
    assert!(ring.points.iter().any(|p| p.fuzzy_eq(vec2(4.0, 1.0))));
}

#[test]
fn single_segment_round_caps_area() {
    let line = Geometry::LineString(line_string![(0.0, 0.0), (4.0, 0.0)]);
    let rings = buffer(
        &line,
        &ConstantDistance::new(1.0),
        &MiterJoin,
        &RoundCap::default(),
        &FuzzyEqPolicy::default(),
        &BufferConfig::default(),
    );
    assert_eq!(rings.len(), 1);
    // rectangle plus two half circles
    let expected = 8.0 + std::f64::consts::PI;
    assert!((signed_area(&rings[0]) - expected).abs() < 1e-2);
}

#[test]
fn l_shaped_line_piece_sequence() {
    let line = Geometry::LineString(line_string![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]);
    let (collection, rings) = buffer_line_flat(&line, 1.0);

    let kinds: Vec<_> = collection.pieces().iter().map(|p| p.kind).collect();
    // forward pass turns left (convex), return pass sees the same corner as concave
    assert_eq!(
        kinds,
        vec![
            PieceKind::Segment,
            PieceKind::Join,
            PieceKind::Segment,
            PieceKind::EndCap,
            PieceKind::Segment,
            PieceKind::ConcaveWedge,
            PieceKind::Segment,
            PieceKind::EndCap,
        ]
    );
    let pieces: Vec<_> = collection.pieces().iter().collect();
    assert_piece_chain_closed(&pieces);

    // miter corner of the forward pass
    assert!(pieces[1].points[1].fuzzy_eq(vec2(5.0, -1.0)));
    // the return pass wedge routes through the input corner
    assert!(pieces[5].points[1].fuzzy_eq(vec2(4.0, 0.0)));

    assert_eq!(rings.len(), 1);
    assert!(rings[0].is_closed());
}

#[test]
fn spike_capped_exactly_once() {
    // the line doubles back on itself at (4, 0)
    let line = Geometry::LineString(line_string![(0.0, 0.0), (4.0, 0.0), (0.0, 0.0)]);
    let (collection, _) = buffer_line_flat(&line, 1.0);

    let spike_caps = collection
        .pieces()
        .iter()
        .filter(|p| p.kind == PieceKind::EndCap && p.input_point.fuzzy_eq(vec2(4.0, 0.0)))
        .count();
    assert_eq!(spike_caps, 1);

    // both ribbon ends cap the shared start/end point
    let end_caps = collection
        .pieces()
        .iter()
        .filter(|p| p.kind == PieceKind::EndCap && p.input_point.fuzzy_eq(vec2(0.0, 0.0)))
        .count();
    assert_eq!(end_caps, 2);
}

#[test]
fn degenerate_lines_are_silent_no_ops() {
    let single = Geometry::LineString(line_string![(1.0, 1.0)]);
    let (collection, rings) = buffer_line_flat(&single, 1.0);
    assert!(collection.pieces().is_empty());
    assert!(rings.is_empty());

    // all points equal collapse below the two point minimum
    let collapsed = Geometry::LineString(line_string![(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
    let (collection, rings) = buffer_line_flat(&collapsed, 1.0);
    assert!(collection.pieces().is_empty());
    assert!(rings.is_empty());
}

#[test]
fn asymmetric_distance_widths() {
    use buffer2d::strategy::AsymmetricDistance;

    let line = Geometry::LineString(line_string![(0.0, 0.0), (4.0, 0.0)]);
    let rings = buffer(
        &line,
        &AsymmetricDistance::new(1.0, 2.0),
        &MiterJoin,
        &FlatCap,
        &FuzzyEqPolicy::default(),
        &BufferConfig::default(),
    );
    assert_eq!(rings.len(), 1);
    let ring = &rings[0];
    // left pass offsets 1 below the line, right (reversed) pass 2 above it
    assert!(ring.points.iter().any(|p| p.fuzzy_eq(vec2(0.0, -1.0))));
    assert!(ring.points.iter().any(|p| p.fuzzy_eq(vec2(4.0, 2.0))));
    assert!(signed_area(ring).fuzzy_eq(12.0));
}
