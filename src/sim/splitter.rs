use crate::bench::component::SplitterKind;
use crate::sim::angles::{malus_factor, normalize_axis};
use crate::sim::propagation::BeamState;

/// Forks one beam state into the (transmitted, reflected) pair leaving a
/// beam splitter.
///
/// Intensities of the two outputs always sum to the input intensity. The
/// transmitted beam keeps the incoming travel direction; the reflected beam
/// turns 90 degrees (see [`Direction::turned`](crate::sim::path::Direction)).
pub fn split(state: &BeamState, splitter: &SplitterKind) -> (BeamState, BeamState) {
    match splitter {
        SplitterKind::Polarizing { axis } => {
            let t_axis = normalize_axis(*axis);
            let r_axis = normalize_axis(*axis + 90.0);

            // Natural light carries no preferred direction, so it divides
            // equally between the two orthogonal output polarizations.
            let t_fraction = if state.unpolarized {
                0.5
            } else {
                malus_factor(state.angle - axis)
            };

            let transmitted = BeamState {
                intensity: state.intensity * t_fraction,
                angle: t_axis,
                unpolarized: false,
            };
            let reflected = BeamState {
                intensity: state.intensity * (1.0 - t_fraction),
                angle: r_axis,
                unpolarized: false,
            };
            (transmitted, reflected)
        }
        SplitterKind::NonPolarizing { ratio } => {
            let r = ratio.clamp(0.0, 1.0);
            let transmitted = BeamState {
                intensity: state.intensity * r,
                ..*state
            };
            let reflected = BeamState {
                intensity: state.intensity * (1.0 - r),
                ..*state
            };
            (transmitted, reflected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn polarized(intensity: f64, angle: f64) -> BeamState {
        BeamState {
            intensity,
            angle,
            unpolarized: false,
        }
    }

    #[test]
    fn test_polarizing_split_projects_both_axes() {
        let input = polarized(100.0, 30.0);
        let (t, r) = split(&input, &SplitterKind::Polarizing { axis: 0.0 });

        assert_abs_diff_eq!(t.intensity, 100.0 * malus_factor(30.0), epsilon = 1e-10);
        assert_abs_diff_eq!(r.intensity, 100.0 * malus_factor(60.0), epsilon = 1e-10);
        assert_eq!(t.angle, 0.0);
        assert_eq!(r.angle, 90.0);
        assert!(!t.unpolarized);
        assert!(!r.unpolarized);
    }

    #[test]
    fn test_split_conserves_energy() {
        for angle in [0.0, 17.0, 45.0, 80.0, 133.0] {
            let input = polarized(100.0, angle);
            let (t, r) = split(&input, &SplitterKind::Polarizing { axis: 25.0 });
            assert_abs_diff_eq!(t.intensity + r.intensity, 100.0, epsilon = 1e-10);

            let (t, r) = split(&input, &SplitterKind::NonPolarizing { ratio: 0.3 });
            assert_abs_diff_eq!(t.intensity + r.intensity, 100.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_polarizing_split_of_unpolarized_light() {
        let input = BeamState {
            intensity: 100.0,
            angle: 0.0,
            unpolarized: true,
        };
        let (t, r) = split(&input, &SplitterKind::Polarizing { axis: 40.0 });
        assert_abs_diff_eq!(t.intensity, 50.0, epsilon = 1e-10);
        assert_abs_diff_eq!(r.intensity, 50.0, epsilon = 1e-10);
        assert_eq!(t.angle, 40.0);
        assert_eq!(r.angle, 130.0);
        assert!(!t.unpolarized && !r.unpolarized);
    }

    #[test]
    fn test_non_polarizing_split_keeps_polarization() {
        let input = polarized(80.0, 65.0);
        let (t, r) = split(&input, &SplitterKind::NonPolarizing { ratio: 0.5 });
        assert_abs_diff_eq!(t.intensity, 40.0, epsilon = 1e-10);
        assert_abs_diff_eq!(r.intensity, 40.0, epsilon = 1e-10);
        assert_eq!(t.angle, 65.0);
        assert_eq!(r.angle, 65.0);
    }

    #[test]
    fn test_ratio_is_clamped() {
        let input = polarized(100.0, 0.0);
        let (t, r) = split(&input, &SplitterKind::NonPolarizing { ratio: 1.7 });
        assert_abs_diff_eq!(t.intensity, 100.0, epsilon = 1e-10);
        assert_abs_diff_eq!(r.intensity, 0.0, epsilon = 1e-10);
    }
}
