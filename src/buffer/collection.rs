use super::piece::{Piece, PieceKind, Side};
use crate::core::{math::Vector2, traits::Real};
use crate::geometry::Ring;

/// Receiver for boundary fragments produced by the offsetting kernel.
///
/// The kernel only ever appends: it starts rings and submits pieces in emission order, and the
/// sink owns everything after that. Implement this to observe or redirect piece generation, e.g.
/// to stream pieces into a spatial index instead of collecting them.
pub trait PieceSink<T>
where
    T: Real,
{
    /// Begin a new output ring. All pieces submitted until the next call belong to it.
    fn start_new_ring(&mut self);

    /// Submit a fragment for the current ring. `input_point` is the input vertex the fragment
    /// originates from. Empty `points` are discarded.
    fn add_piece(&mut self, kind: PieceKind, input_point: Vector2<T>, points: Vec<Vector2<T>>, side: Side);

    /// Submit an end cap fragment for the current ring.
    fn add_endcap(&mut self, input_point: Vector2<T>, points: Vec<Vector2<T>>, side: Side) {
        self.add_piece(PieceKind::EndCap, input_point, points, side);
    }
}

/// Default sink collecting all pieces and assembling them into raw output rings.
#[derive(Debug, Clone, Default)]
pub struct BufferedPieceCollection<T = f64> {
    pieces: Vec<Piece<T>>,
    ring_count: usize,
    rings: Vec<Ring<T>>,
}

impl<T> BufferedPieceCollection<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        BufferedPieceCollection {
            pieces: Vec::new(),
            ring_count: 0,
            rings: Vec::new(),
        }
    }

    /// All pieces collected so far, in emission order.
    #[inline]
    pub fn pieces(&self) -> &[Piece<T>] {
        &self.pieces
    }

    /// Number of output rings started.
    #[inline]
    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    /// Pieces belonging to the output ring at `ring_index`.
    pub fn pieces_for_ring(&self, ring_index: usize) -> impl Iterator<Item = &Piece<T>> {
        self.pieces.iter().filter(move |p| p.ring_index == ring_index)
    }

    /// Chain the collected pieces into closed output rings.
    ///
    /// Pieces of a ring are end-to-end connected in emission order, so assembly concatenates
    /// their points while dropping each piece's first point when it fuzzy matches (within
    /// `pos_equal_eps`) the point already at the end of the chain. The chain is closed by
    /// appending the first point, skipped when the last point already matches it. When `reverse`
    /// is true every assembled ring is reversed, restoring the input winding after a
    /// negative distance pass walked the rings back-to-front.
    pub fn assemble(&mut self, pos_equal_eps: T, reverse: bool) {
        self.rings.clear();
        self.rings.reserve(self.ring_count);

        for ring_index in 0..self.ring_count {
            let mut points: Vec<Vector2<T>> = Vec::new();
            for piece in self.pieces.iter().filter(|p| p.ring_index == ring_index) {
                for (i, pt) in piece.points.iter().enumerate() {
                    if i == 0 {
                        if let Some(last) = points.last() {
                            if last.fuzzy_eq_eps(*pt, pos_equal_eps) {
                                continue;
                            }
                        }
                    }
                    points.push(*pt);
                }
            }

            if points.is_empty() {
                continue;
            }

            if reverse {
                points.reverse();
            }

            let first = points[0];
            if !points.last().copied().unwrap_or(first).fuzzy_eq_eps(first, pos_equal_eps) {
                points.push(first);
            }

            self.rings.push(Ring::from(points));
        }
    }

    /// Assembled rings (empty before [BufferedPieceCollection::assemble] is called).
    #[inline]
    pub fn rings(&self) -> &[Ring<T>] {
        &self.rings
    }

    #[inline]
    pub fn into_rings(self) -> Vec<Ring<T>> {
        self.rings
    }
}

impl<T> PieceSink<T> for BufferedPieceCollection<T>
where
    T: Real,
{
    #[inline]
    fn start_new_ring(&mut self) {
        self.ring_count += 1;
    }

    fn add_piece(&mut self, kind: PieceKind, input_point: Vector2<T>, points: Vec<Vector2<T>>, side: Side) {
        debug_assert!(self.ring_count > 0, "piece added before any ring was started");
        if points.is_empty() {
            return;
        }

        self.pieces.push(Piece::new(
            kind,
            points,
            input_point,
            side,
            self.ring_count - 1,
        ));
    }
}
