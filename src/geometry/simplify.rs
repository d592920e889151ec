use crate::core::{
    math::{dist_squared, line_seg_closest_point, Vector2},
    traits::Real,
};

/// Simplify a point sequence with the Douglas-Peucker algorithm at the given `tolerance`.
///
/// The first and last points are always kept. A non-positive tolerance returns the input
/// unchanged. Offsetting simplifies its input first at a tolerance derived from the buffer
/// distance: sub-scale convex/concave/convex noise in the input would otherwise be amplified by
/// the offset distance into spurious self-intersections, and simplification also removes
/// duplicate points.
///
/// # Examples
///
/// ```
/// # use buffer2d::core::math::Vector2;
/// # use buffer2d::geometry::simplify_points;
/// let points = vec![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 0.001),
///     Vector2::new(2.0, 0.0),
/// ];
/// let simplified = simplify_points(&points, 0.01);
/// assert_eq!(simplified.len(), 2);
/// ```
pub fn simplify_points<T>(points: &[Vector2<T>], tolerance: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    if points.len() < 3 || tolerance <= T::zero() {
        return points.to_vec();
    }

    let tol_squared = tolerance * tolerance;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    // iterative Douglas-Peucker using an explicit stack of (start, end) index ranges
    let mut stack = Vec::new();
    stack.push((0, points.len() - 1));
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }

        let mut max_dist_squared = T::zero();
        let mut max_index = start;
        for (i, &point) in points.iter().enumerate().take(end).skip(start + 1) {
            let closest = line_seg_closest_point(points[start], points[end], point);
            let d = dist_squared(closest, point);
            if d > max_dist_squared {
                max_dist_squared = d;
                max_index = i;
            }
        }

        if max_dist_squared > tol_squared {
            keep[max_index] = true;
            stack.push((start, max_index));
            stack.push((max_index, end));
        }
    }

    points
        .iter()
        .zip(keep.iter())
        .filter_map(|(&p, &k)| if k { Some(p) } else { None })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn keeps_endpoints() {
        let points = vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(2.0, 0.0)];
        let simplified = simplify_points(&points, 0.5);
        assert_eq!(simplified, vec![vec2(0.0, 0.0), vec2(2.0, 0.0)]);
    }

    #[test]
    fn keeps_significant_corner() {
        let points = vec![
            vec2(0.0, 0.0),
            vec2(2.0, 2.0),
            vec2(4.0, 0.0),
        ];
        let simplified = simplify_points(&points, 0.5);
        assert_eq!(simplified.len(), 3);
    }

    #[test]
    fn removes_duplicate_points() {
        let points = vec![
            vec2(0.0, 0.0),
            vec2(0.0, 0.0),
            vec2(4.0, 0.0),
            vec2(4.0, 4.0),
        ];
        let simplified = simplify_points(&points, 0.001);
        assert_eq!(
            simplified,
            vec![vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(4.0, 4.0)]
        );
    }

    #[test]
    fn zero_tolerance_is_identity() {
        let points = vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(2.0, 0.0)];
        assert_eq!(simplify_points(&points, 0.0), points);
    }

    #[test]
    fn closed_ring_sequence_keeps_closing_vertex() {
        let points = vec![
            vec2(0.0, 0.0),
            vec2(4.0, 0.0),
            vec2(4.0, 4.0),
            vec2(0.0, 4.0),
            vec2(0.0, 0.0),
        ];
        let simplified = simplify_points(&points, 0.01);
        assert_eq!(simplified.len(), 5);
        assert_eq!(simplified[0], simplified[4]);
    }
}
