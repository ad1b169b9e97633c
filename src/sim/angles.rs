//! Polarization angle arithmetic.
//!
//! Linear polarization is orientation, not direction: an angle and the same
//! angle plus 180 degrees describe the same state, so all polarization
//! angles are reduced to [0, 180).

/// Reduces an angle in degrees to the polarization range [0, 180).
pub fn normalize_axis(deg: f64) -> f64 {
    let r = deg % 180.0;
    if r < 0.0 {
        r + 180.0
    } else {
        r
    }
}

/// Malus's law transmission factor: cos^2 of the angle (degrees) between
/// incoming polarization and a transmission axis.
pub fn malus_factor(angle_diff_deg: f64) -> f64 {
    let c = angle_diff_deg.to_radians().cos();
    c * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_axis() {
        assert_eq!(normalize_axis(0.0), 0.0);
        assert_eq!(normalize_axis(180.0), 0.0);
        assert_eq!(normalize_axis(270.0), 90.0);
        assert_eq!(normalize_axis(-45.0), 135.0);
        assert_eq!(normalize_axis(365.0), 5.0);
    }

    #[test]
    fn test_malus_factor() {
        assert!((malus_factor(0.0) - 1.0).abs() < 1e-12);
        assert!((malus_factor(45.0) - 0.5).abs() < 1e-12);
        assert!(malus_factor(90.0) < 1e-12);
        // cos^2 is symmetric
        assert!((malus_factor(30.0) - malus_factor(-30.0)).abs() < 1e-12);
    }
}
