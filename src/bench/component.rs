use serde::{Deserialize, Serialize};

use crate::uid::UID;
use crate::Point;

/// Beam splitter behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitterKind {
    /// Splits by polarization: the transmitted beam is polarized along
    /// `axis`, the reflected beam along the orthogonal direction.
    Polarizing {
        /// Transmission axis in degrees.
        axis: f64,
    },
    /// Splits by intensity, independent of polarization.
    NonPolarizing {
        /// Transmitted fraction of the incoming intensity [0.0, 1.0].
        ratio: f64,
    },
}

/// The closed set of optical component kinds.
///
/// Each variant carries exactly the physical parameters relevant to its
/// kind, so a component can never hold properties its kind does not use.
/// All angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ComponentKind {
    /// A light source. Beams start here with full intensity.
    Emitter {
        /// Initial polarization angle in degrees. Ignored when `unpolarized`.
        polarization: f64,
        /// Natural (unpolarized) light has no single polarization angle.
        unpolarized: bool,
    },
    /// An ideal linear polarizer (Malus's law).
    Polarizer {
        /// Transmission axis in degrees.
        axis: f64,
    },
    /// A birefringent retarder (half-wave, quarter-wave, or arbitrary).
    WavePlate {
        /// Retardation in degrees (180 = half-wave, 90 = quarter-wave).
        retardation: f64,
        /// Fast axis orientation in degrees.
        fast_axis: f64,
    },
    /// A mirror. Ideal metal mirrors leave the beam state unchanged.
    Mirror {
        /// Dielectric mirrors partially polarize near Brewster's angle.
        /// Carried in the data model; reflection is currently pass-through.
        dielectric: bool,
    },
    /// A beam splitter; forks the beam into two independent beams.
    BeamSplitter(SplitterKind),
    /// A detector. Terminal: records the incoming state and absorbs the beam.
    Sensor,
    /// A lens. Focusing only affects geometry, which is not modeled, so the
    /// beam state passes through unchanged.
    Lens {
        /// Focal length in bench units.
        focal_length: f64,
    },
}

impl ComponentKind {
    /// Returns true if all numeric parameters are finite.
    ///
    /// Components with NaN or infinite parameters (e.g. mid-edit state from
    /// the external store) are treated as transparent, never as errors.
    pub fn is_well_formed(&self) -> bool {
        match self {
            ComponentKind::Emitter { polarization, .. } => polarization.is_finite(),
            ComponentKind::Polarizer { axis } => axis.is_finite(),
            ComponentKind::WavePlate {
                retardation,
                fast_axis,
            } => retardation.is_finite() && fast_axis.is_finite(),
            ComponentKind::Mirror { .. } | ComponentKind::Sensor => true,
            ComponentKind::BeamSplitter(SplitterKind::Polarizing { axis }) => axis.is_finite(),
            ComponentKind::BeamSplitter(SplitterKind::NonPolarizing { ratio }) => {
                ratio.is_finite()
            }
            ComponentKind::Lens { focal_length } => focal_length.is_finite(),
        }
    }
}

/// A component placed on the bench.
///
/// The external bench store owns component lifetime (add/remove/move/rotate);
/// the engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticalComponent {
    pub id: UID,
    pub position: Point,
    /// Orientation on the bench in degrees, [0, 360).
    pub rotation: f64,
    pub kind: ComponentKind,
}

impl OpticalComponent {
    pub fn new(kind: ComponentKind, position: Point, rotation: f64) -> Self {
        Self {
            id: UID::new(),
            position,
            rotation,
            kind,
        }
    }

    /// Creates an emitter of polarized light at the given angle.
    pub fn emitter(position: Point, polarization: f64) -> Self {
        Self::new(
            ComponentKind::Emitter {
                polarization,
                unpolarized: false,
            },
            position,
            0.0,
        )
    }

    /// Creates an emitter of natural (unpolarized) light.
    pub fn unpolarized_emitter(position: Point) -> Self {
        Self::new(
            ComponentKind::Emitter {
                polarization: 0.0,
                unpolarized: true,
            },
            position,
            0.0,
        )
    }

    pub fn polarizer(position: Point, axis: f64) -> Self {
        Self::new(ComponentKind::Polarizer { axis }, position, 0.0)
    }

    pub fn wave_plate(position: Point, retardation: f64, fast_axis: f64) -> Self {
        Self::new(
            ComponentKind::WavePlate {
                retardation,
                fast_axis,
            },
            position,
            0.0,
        )
    }

    pub fn half_wave_plate(position: Point, fast_axis: f64) -> Self {
        Self::wave_plate(position, 180.0, fast_axis)
    }

    pub fn mirror(position: Point) -> Self {
        Self::new(ComponentKind::Mirror { dielectric: false }, position, 0.0)
    }

    pub fn beam_splitter(position: Point, ratio: f64) -> Self {
        Self::new(
            ComponentKind::BeamSplitter(SplitterKind::NonPolarizing { ratio }),
            position,
            0.0,
        )
    }

    pub fn polarizing_splitter(position: Point, axis: f64) -> Self {
        Self::new(
            ComponentKind::BeamSplitter(SplitterKind::Polarizing { axis }),
            position,
            0.0,
        )
    }

    pub fn sensor(position: Point) -> Self {
        Self::new(ComponentKind::Sensor, position, 0.0)
    }

    pub fn lens(position: Point, focal_length: f64) -> Self {
        Self::new(ComponentKind::Lens { focal_length }, position, 0.0)
    }

    /// Returns true if position, rotation and all kind parameters are finite.
    pub fn is_well_formed(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.kind.is_well_formed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        let p = OpticalComponent::polarizer(Point::new(1.0, 0.0), 45.0);
        assert_eq!(p.kind, ComponentKind::Polarizer { axis: 45.0 });

        let hwp = OpticalComponent::half_wave_plate(Point::new(2.0, 0.0), 22.5);
        assert_eq!(
            hwp.kind,
            ComponentKind::WavePlate {
                retardation: 180.0,
                fast_axis: 22.5
            }
        );
    }

    #[test]
    fn test_well_formed() {
        let ok = OpticalComponent::polarizer(Point::new(0.0, 0.0), 0.0);
        assert!(ok.is_well_formed());

        let bad_axis = OpticalComponent::polarizer(Point::new(0.0, 0.0), f64::NAN);
        assert!(!bad_axis.is_well_formed());

        let bad_pos = OpticalComponent::sensor(Point::new(f64::INFINITY, 0.0));
        assert!(!bad_pos.is_well_formed());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = OpticalComponent::sensor(Point::new(0.0, 0.0));
        let b = OpticalComponent::sensor(Point::new(0.0, 0.0));
        assert_ne!(a.id, b.id);
    }
}
