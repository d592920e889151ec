use crate::buffer::Side;
use crate::core::{
    math::{angle, delta_angle_signed, point_on_circle, Vector2},
    traits::Real,
};

/// Closes the end of a linestring ribbon, connecting the last offset point on the current side to
/// the first offset point on the opposite side.
///
/// `apply` appends the cap points to `out` including both connecting endpoints so the piece chain
/// around the ribbon stays gap free. `penultimate` is the second to last input point of the
/// capped walk, available for cap shapes aligned with the final edge direction.
pub trait EndCapStrategy<T>
where
    T: Real,
{
    #[allow(clippy::too_many_arguments)]
    fn apply(
        &self,
        penultimate: Vector2<T>,
        end_offset: Vector2<T>,
        end_input: Vector2<T>,
        opposite_offset: Vector2<T>,
        side: Side,
        distance: T,
        out: &mut Vec<Vector2<T>>,
    );
}

/// Half circle cap centered on the linestring end point.
#[derive(Debug, Copy, Clone)]
pub struct RoundCap {
    points_per_circle: usize,
}

impl RoundCap {
    #[inline]
    pub fn new(points_per_circle: usize) -> Self {
        RoundCap {
            points_per_circle: points_per_circle.max(4),
        }
    }
}

impl Default for RoundCap {
    #[inline]
    fn default() -> Self {
        RoundCap::new(90)
    }
}

impl<T> EndCapStrategy<T> for RoundCap
where
    T: Real,
{
    fn apply(
        &self,
        _penultimate: Vector2<T>,
        end_offset: Vector2<T>,
        end_input: Vector2<T>,
        opposite_offset: Vector2<T>,
        _side: Side,
        distance: T,
        out: &mut Vec<Vector2<T>>,
    ) {
        let radius = distance.abs();
        let a1 = angle(end_input, end_offset);
        let a2 = angle(end_input, opposite_offset);
        // the two offset points are diametrically opposed so the shortest sweep is ambiguous,
        // force the polarity that wraps around the outside of the end point
        let sweep = delta_angle_signed(a1, a2, distance < T::zero());

        let per_circle = T::from(self.points_per_circle).unwrap();
        let step_count = (sweep.abs() * per_circle / T::tau())
            .ceil()
            .to_usize()
            .unwrap_or(1)
            .max(1);
        let step = sweep / T::from(step_count).unwrap();

        out.push(end_offset);
        for i in 1..step_count {
            let a = a1 + step * T::from(i).unwrap();
            out.push(point_on_circle(radius, end_input, a));
        }
        out.push(opposite_offset);
    }
}

/// Straight cap cutting across the ribbon at the linestring end point.
#[derive(Debug, Default, Copy, Clone)]
pub struct FlatCap;

impl<T> EndCapStrategy<T> for FlatCap
where
    T: Real,
{
    fn apply(
        &self,
        _penultimate: Vector2<T>,
        end_offset: Vector2<T>,
        _end_input: Vector2<T>,
        opposite_offset: Vector2<T>,
        _side: Side,
        _distance: T,
        out: &mut Vec<Vector2<T>>,
    ) {
        out.push(end_offset);
        out.push(opposite_offset);
    }
}
