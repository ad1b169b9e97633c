use crate::Point;
use crate::geom::EPS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A displacement on the 2D bench.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn from_points(beg: Point, end: Point) -> Self {
        Self {
            dx: end.x - beg.x,
            dy: end.y - beg.y,
        }
    }

    /// Dot product between 2 vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Returns the length of the vector.
    pub fn length(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2)).sqrt()
    }

    pub fn is_close(&self, other: &Self) -> bool {
        (self.dx - other.dx).abs() < EPS && (self.dy - other.dy).abs() < EPS
    }

    /// Normalizes the vector (divides by its length) and returns a copy.
    ///
    /// Returns None for a zero-length vector.
    pub fn normalize(&self) -> Option<Self> {
        let len = self.length();
        if len < EPS {
            None
        } else {
            Some(Self {
                dx: self.dx / len,
                dy: self.dy / len,
            })
        }
    }

    /// Rotates the vector by 90 degrees counterclockwise.
    pub fn perpendicular(&self) -> Self {
        Self {
            dx: -self.dy,
            dy: self.dx,
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(2);
        write!(
            f,
            "Vector({:.prec$}, {:.prec$})",
            self.dx,
            self.dy,
            prec = prec
        )
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, other: Self) -> Self {
        Self::new(self.dx + other.dx, self.dy + other.dy)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, other: Self) -> Self {
        Self::new(self.dx - other.dx, self.dy - other.dy)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.dx * scalar, self.dy * scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        let v = Vector::new(3., 4.);
        assert!((v.length() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_normalize() {
        let v = Vector::new(10., 0.);
        let n = v.normalize().unwrap();
        assert!(n.is_close(&Vector::new(1., 0.)));
        assert!(Vector::new(0., 0.).normalize().is_none());
    }

    #[test]
    fn test_perpendicular() {
        let v = Vector::new(1., 0.);
        assert!(v.perpendicular().is_close(&Vector::new(0., 1.)));
        // Two rotations flip the vector
        let flipped = v.perpendicular().perpendicular();
        assert!(flipped.is_close(&Vector::new(-1., 0.)));
    }

    #[test]
    fn test_dot() {
        let a = Vector::new(1., 0.);
        let b = Vector::new(0., 1.);
        assert!(a.dot(b).abs() < EPS);
        assert!((a.dot(a) - 1.0).abs() < EPS);
    }
}
