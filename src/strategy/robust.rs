use crate::core::{math::Vector2, traits::Real};

/// Point equality policy used for duplicate detection while walking input points and for chaining
/// piece points during ring assembly.
pub trait RobustPolicy<T>
where
    T: Real,
{
    fn points_equal(&self, a: Vector2<T>, b: Vector2<T>) -> bool;
}

/// Component wise fuzzy comparison with an absolute epsilon.
#[derive(Debug, Copy, Clone)]
pub struct FuzzyEqPolicy<T = f64> {
    epsilon: T,
}

impl<T> FuzzyEqPolicy<T>
where
    T: Real,
{
    #[inline]
    pub fn new(epsilon: T) -> Self {
        FuzzyEqPolicy { epsilon }
    }
}

impl<T> Default for FuzzyEqPolicy<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        FuzzyEqPolicy {
            epsilon: T::from(1e-5).unwrap(),
        }
    }
}

impl<T> RobustPolicy<T> for FuzzyEqPolicy<T>
where
    T: Real,
{
    #[inline]
    fn points_equal(&self, a: Vector2<T>, b: Vector2<T>) -> bool {
        a.fuzzy_eq_eps(b, self.epsilon)
    }
}

/// Compares points after snapping coordinates to a fixed grid, emulating integer rescaling.
///
/// Two points are equal when they land on the same grid cell at the `scale` given (cells of size
/// `1 / scale`).
#[derive(Debug, Copy, Clone)]
pub struct GridSnapPolicy<T = f64> {
    scale: T,
}

impl<T> GridSnapPolicy<T>
where
    T: Real,
{
    #[inline]
    pub fn new(scale: T) -> Self {
        GridSnapPolicy { scale }
    }

    #[inline]
    fn snap(&self, v: T) -> T {
        (v * self.scale).round()
    }
}

impl<T> RobustPolicy<T> for GridSnapPolicy<T>
where
    T: Real,
{
    #[inline]
    fn points_equal(&self, a: Vector2<T>, b: Vector2<T>) -> bool {
        self.snap(a.x) == self.snap(b.x) && self.snap(a.y) == self.snap(b.y)
    }
}
