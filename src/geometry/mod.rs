use num_traits::Float;
use crate::errors::GeometryError;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}


/// 2D Point
/// Coordinates are opaque to the graph beyond distance computation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    /// Create a point, rejecting NaN or infinite coordinates
    pub fn new(x: f64, y: f64) -> Result<Self, GeometryError> {
        let point = Self { x, y };
        point.validate()?;
        Ok(point)
    }

    /// Check both coordinates are finite
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(())
        } else {
            Err(GeometryError::NonFinite { x: self.x, y: self.y })
        }
    }

    /// Straight line distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
