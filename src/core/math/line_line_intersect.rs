use super::Vector2;
use crate::core::traits::Real;

/// Finds the intersection point of the two infinite lines through `v1`/`v2` and `u1`/`u2`.
///
/// Returns `None` when the lines are (almost) parallel under `epsilon`, including the degenerate
/// case where either point pair is coincident. Segments do not need to overlap: the join fillet
/// anchor lies beyond both offset segments at a convex corner, so the parametric solution is used
/// without any range restriction.
///
/// The implementation works on the segments in parametric equation form
/// (`P(t) = p0 + t * (p1 - p0)`) using perpendicular products.
/// http://geomalgorithms.com/a05-_intersect-1.html
/// http://mathworld.wolfram.com/PerpDotProduct.html
///
/// # Examples
///
/// ```
/// # use buffer2d::core::math::*;
/// # use buffer2d::core::traits::*;
/// let ip = offset_lines_intr(
///     Vector2::new(0.0, -1.0),
///     Vector2::new(4.0, -1.0),
///     Vector2::new(5.0, 0.0),
///     Vector2::new(5.0, 4.0),
///     1e-8,
/// )
/// .unwrap();
/// assert!(ip.fuzzy_eq(Vector2::new(5.0, -1.0)));
/// ```
pub fn offset_lines_intr<T>(
    v1: Vector2<T>,
    v2: Vector2<T>,
    u1: Vector2<T>,
    u2: Vector2<T>,
    epsilon: T,
) -> Option<Vector2<T>>
where
    T: Real,
{
    let v = v2 - v1;
    let u = u2 - u1;
    let v_pdot_u = v.perp_dot(u);

    // threshold check here to avoid almost parallel lines resulting in a very distant intersection
    if v_pdot_u.fuzzy_eq_zero_eps(epsilon) {
        return None;
    }

    let w = v1 - u1;
    let seg1_t = u.perp_dot(w) / v_pdot_u;
    Some(v1 + v.scale(seg1_t))
}
