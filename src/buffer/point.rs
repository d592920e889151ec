use crate::core::{
    math::{point_on_circle, Vector2},
    traits::Real,
};

/// Sample a full circle of `vertex_count` points around `center`, counter clockwise from angle
/// zero, with the first point repeated at the end as the closing vertex.
pub fn circle_points<T>(center: Vector2<T>, radius: T, vertex_count: usize) -> Vec<Vector2<T>>
where
    T: Real,
{
    let vertex_count = vertex_count.max(3);
    let step = T::tau() / T::from(vertex_count).unwrap();

    let mut points = Vec::with_capacity(vertex_count + 1);
    for i in 0..vertex_count {
        points.push(point_on_circle(radius, center, step * T::from(i).unwrap()));
    }
    points.push(points[0]);
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{dist_squared, turn_value, vec2};
    use crate::core::traits::FuzzyEq;

    #[test]
    fn circle_has_closing_vertex_and_fixed_count() {
        let center = vec2(3.0, -2.0);
        let points = circle_points(center, 2.0, 88);
        assert_eq!(points.len(), 89);
        assert_fuzzy_eq!(points[0], *points.last().unwrap());
        for p in &points {
            assert!(dist_squared(center, *p).fuzzy_eq(4.0));
        }
    }

    #[test]
    fn circle_winds_counter_clockwise() {
        let center = vec2(0.0, 0.0);
        let points = circle_points(center, 1.0, 16);
        for w in points.windows(2) {
            assert!(turn_value(center, w[0], w[1]) > 0.0);
        }
    }
}
