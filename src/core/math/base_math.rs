use super::Vector2;
use crate::core::traits::Real;

/// Normalize radians to be between `0` and `2PI`, e.g. `-PI/4` becomes `7PI/4` and `5PI` becomes
/// `PI`.
///
/// # Examples
///
/// ```
/// # use buffer2d::core::math::*;
/// # use buffer2d::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(5.0 * PI).fuzzy_eq(PI));
/// assert!(normalize_radians(-PI / 4.0).fuzzy_eq(7.0 * PI / 4.0));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle <= T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Returns the smaller difference between two angles.
///
/// Result is negative if `normalize_radians(angle2 - angle1) > PI`. See [normalize_radians] for
/// more information.
#[inline]
pub fn delta_angle<T>(angle1: T, angle2: T) -> T
where
    T: Real,
{
    let mut diff = normalize_radians(angle2 - angle1);
    if diff > T::pi() {
        diff = diff - T::tau();
    }

    diff
}

/// Returns the smaller difference between two angles and applies the sign given.
///
/// This function is similar to [delta_angle] but always returns a negative result if `negative` is
/// true or a positive result if `negative` is false. This is useful for ensuring a particular
/// sweep polarity for edge cases, e.g. if `angle1` is 0 and `angle2` is PI then the delta angle
/// could be considered positive or negative ([delta_angle] always returns positive).
#[inline]
pub fn delta_angle_signed<T>(angle1: T, angle2: T, negative: bool) -> T
where
    T: Real,
{
    let diff = delta_angle(angle1, angle2);
    if negative {
        -diff.abs()
    } else {
        diff.abs()
    }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Angle of the direction vector described by `p0` to `p1`.
#[inline]
pub fn angle<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    T::atan2(p1.y - p0.y, p1.x - p0.x)
}

/// Returns the point on the circle with `radius`, `center`, and polar `angle` in radians given.
#[inline]
pub fn point_on_circle<T>(radius: T, center: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    let (s, c) = angle.sin_cos();
    Vector2::new(center.x + radius * c, center.y + radius * s)
}

/// Perpendicular dot product of the turn formed by `p0 -> p1 -> p2`.
///
/// Positive for a left (counter clockwise) turn, negative for a right (clockwise) turn, zero for
/// collinear points.
#[inline]
pub fn turn_value<T>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>) -> T
where
    T: Real,
{
    (p1.x - p0.x) * (p2.y - p0.y) - (p1.y - p0.y) * (p2.x - p0.x)
}

/// Turning predicate over three consecutive points using `epsilon` to suppress machine precision
/// noise: `1` for a left turn, `-1` for a right turn, `0` for (near) collinear points.
///
/// # Examples
///
/// ```
/// # use buffer2d::core::math::*;
/// let p0 = Vector2::new(0.0, 0.0);
/// let p1 = Vector2::new(1.0, 0.0);
/// assert_eq!(turn_direction_eps(p0, p1, Vector2::new(2.0, 1.0), 1e-8), 1);
/// assert_eq!(turn_direction_eps(p0, p1, Vector2::new(2.0, -1.0), 1e-8), -1);
/// assert_eq!(turn_direction_eps(p0, p1, Vector2::new(2.0, 0.0), 1e-8), 0);
/// ```
#[inline]
pub fn turn_direction_eps<T>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>, epsilon: T) -> i32
where
    T: Real,
{
    let v = turn_value(p0, p1, p2);
    if v.fuzzy_eq_zero_eps(epsilon) {
        0
    } else if v > T::zero() {
        1
    } else {
        -1
    }
}

/// Same as [turn_direction_eps] using default epsilon.
#[inline]
pub fn turn_direction<T>(p0: Vector2<T>, p1: Vector2<T>, p2: Vector2<T>) -> i32
where
    T: Real,
{
    turn_direction_eps(p0, p1, p2, T::fuzzy_epsilon())
}

/// Tests if two adjacent edge direction vectors continue in the same direction (dot product
/// positive). Used to split the degenerate zero-turn case into continue vs. spike.
#[inline]
pub fn directions_continue<T>(dir1: Vector2<T>, dir2: Vector2<T>) -> bool
where
    T: Real,
{
    dir1.dot(dir2) > T::zero()
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // Dot product used to find angles
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 < T::fuzzy_epsilon() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 < c1 + T::fuzzy_epsilon() {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}
