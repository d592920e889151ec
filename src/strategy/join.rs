use crate::core::{
    math::{angle, delta_angle, point_on_circle, Vector2},
    traits::Real,
};

/// Generates the fillet connecting two consecutive offset segments around a convex corner.
///
/// `apply` appends the fillet points to `out`, including both connecting endpoints
/// (`prev_offset_end` first, `next_offset_start` last) so the resulting piece closes the gap
/// between the adjacent segment pieces.
pub trait JoinStrategy<T>
where
    T: Real,
{
    #[allow(clippy::too_many_arguments)]
    fn apply(
        &self,
        intersection: Vector2<T>,
        corner: Vector2<T>,
        prev_offset_end: Vector2<T>,
        next_offset_start: Vector2<T>,
        distance: T,
        out: &mut Vec<Vector2<T>>,
    );
}

/// Circular arc join centered on the input corner.
///
/// The arc is sampled at a density of `points_per_circle` for a full circle, always including
/// both endpoints. For a negative distance the arc sweeps the shorter way around on the opposite
/// side of the corner, which the signed angle sweep handles without special casing.
#[derive(Debug, Copy, Clone)]
pub struct RoundJoin {
    points_per_circle: usize,
}

impl RoundJoin {
    #[inline]
    pub fn new(points_per_circle: usize) -> Self {
        RoundJoin {
            points_per_circle: points_per_circle.max(4),
        }
    }
}

impl Default for RoundJoin {
    #[inline]
    fn default() -> Self {
        RoundJoin::new(90)
    }
}

impl<T> JoinStrategy<T> for RoundJoin
where
    T: Real,
{
    fn apply(
        &self,
        _intersection: Vector2<T>,
        corner: Vector2<T>,
        prev_offset_end: Vector2<T>,
        next_offset_start: Vector2<T>,
        distance: T,
        out: &mut Vec<Vector2<T>>,
    ) {
        let radius = distance.abs();
        let a1 = angle(corner, prev_offset_end);
        let a2 = angle(corner, next_offset_start);
        // sweep from the end of the previous offset segment to the start of the next, going the
        // short way around the corner
        let sweep = delta_angle(a1, a2);

        let per_circle = T::from(self.points_per_circle).unwrap();
        let step_count = (sweep.abs() * per_circle / T::tau())
            .ceil()
            .to_usize()
            .unwrap_or(1)
            .max(1);
        let step = sweep / T::from(step_count).unwrap();

        out.push(prev_offset_end);
        for i in 1..step_count {
            let a = a1 + step * T::from(i).unwrap();
            out.push(point_on_circle(radius, corner, a));
        }
        out.push(next_offset_start);
    }
}

/// Straight miter join going through the intersection of the extended offset lines.
#[derive(Debug, Default, Copy, Clone)]
pub struct MiterJoin;

impl<T> JoinStrategy<T> for MiterJoin
where
    T: Real,
{
    fn apply(
        &self,
        intersection: Vector2<T>,
        _corner: Vector2<T>,
        prev_offset_end: Vector2<T>,
        next_offset_start: Vector2<T>,
        _distance: T,
        out: &mut Vec<Vector2<T>>,
    ) {
        out.push(prev_offset_end);
        out.push(intersection);
        out.push(next_offset_start);
    }
}
