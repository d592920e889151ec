use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An open sequence of points buffered into a two sided ribbon with end caps.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineString<T = f64> {
    pub points: Vec<Vector2<T>>,
}

impl<T> LineString<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        LineString { points: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        LineString {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Add a point to the end of the linestring.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.points.push(Vector2::new(x, y));
    }
}

impl<T> From<Vec<Vector2<T>>> for LineString<T> {
    #[inline]
    fn from(points: Vec<Vector2<T>>) -> Self {
        LineString { points }
    }
}

/// A closed sequence of points with an explicit closing vertex (first point repeated at the end).
///
/// A counter clockwise wound ring offsets outward when buffered with a positive distance. Rings
/// with 3 or fewer points (not enough for a closed area with the duplicated closing vertex)
/// contribute no buffer pieces.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ring<T = f64> {
    pub points: Vec<Vector2<T>>,
}

impl<T> Ring<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Ring { points: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Ring {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Add a point to the end of the ring.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.points.push(Vector2::new(x, y));
    }

    /// Returns true if the ring has its first point repeated at the end.
    #[inline]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.fuzzy_eq(*last),
            _ => false,
        }
    }

    /// Repeat the first point at the end if not already closed.
    #[inline]
    pub fn close(&mut self) {
        if !self.is_closed() {
            if let Some(&first) = self.points.first() {
                self.points.push(first);
            }
        }
    }
}

impl<T> From<Vec<Vector2<T>>> for Ring<T> {
    #[inline]
    fn from(points: Vec<Vector2<T>>) -> Self {
        Ring { points }
    }
}

/// A polygon: one exterior ring plus zero or more interior rings (holes).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon<T = f64> {
    pub exterior: Ring<T>,
    pub interiors: Vec<Ring<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    #[inline]
    pub fn new(exterior: Ring<T>) -> Self {
        Polygon {
            exterior,
            interiors: Vec::new(),
        }
    }

    #[inline]
    pub fn with_interiors(exterior: Ring<T>, interiors: Vec<Ring<T>>) -> Self {
        Polygon {
            exterior,
            interiors,
        }
    }
}

/// The closed set of geometry kinds accepted by the buffer entry point.
///
/// Dispatch over the kinds is a single exhaustive match (see
/// [buffer_geometry](crate::buffer::buffer_geometry)); multi variants recurse per element into the
/// same piece sink.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry<T = f64> {
    Point(Vector2<T>),
    LineString(LineString<T>),
    Ring(Ring<T>),
    Polygon(Polygon<T>),
    MultiPoint(Vec<Vector2<T>>),
    MultiLineString(Vec<LineString<T>>),
    MultiPolygon(Vec<Polygon<T>>),
}

impl<T> Geometry<T>
where
    T: Real,
{
    /// Returns true for geometry kinds enclosing area (rings and polygons).
    ///
    /// Areal output rings get their orientation corrected (reversed) after assembly when buffered
    /// at a negative distance.
    #[inline]
    pub fn is_areal(&self) -> bool {
        matches!(
            self,
            Geometry::Ring(_) | Geometry::Polygon(_) | Geometry::MultiPolygon(_)
        )
    }
}
