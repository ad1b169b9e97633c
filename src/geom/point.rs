use crate::Vector;
use crate::geom::EPS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A position on the 2D bench.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both points are very close to each other.
    pub fn is_close(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPS && (self.y - other.y).abs() < EPS
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        Vector::from_points(*self, *other).length()
    }

    /// Returns true if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2); // Default 2 decimals
        write!(f, "Point({:.prec$}, {:.prec$})", self.x, self.y, prec = prec)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, other: Vector) -> Self {
        Self {
            x: self.x + other.dx,
            y: self.y + other.dy,
        }
    }
}
