use crate::bench::component::{ComponentKind, OpticalComponent};
use crate::geom::EPS;
use crate::{Point, Vector};

/// Propagation direction along one of the bench axes.
///
/// The bench assumes axis-aligned propagation: beams travel along one
/// coordinate and components are encountered in increasing order of it.
/// Splitter reflections turn 90 degrees, so all four directions occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    PosX,
    NegX,
    PosY,
    NegY,
}

impl Direction {
    /// Derives the propagation direction from a component rotation in
    /// degrees, quantized to the nearest bench axis (0 = +x, 90 = +y).
    pub fn from_rotation(rotation: f64) -> Self {
        let r = rotation.rem_euclid(360.0);
        if r < 45.0 || r >= 315.0 {
            Direction::PosX
        } else if r < 135.0 {
            Direction::PosY
        } else if r < 225.0 {
            Direction::NegX
        } else {
            Direction::NegY
        }
    }

    /// Signed coordinate along the direction of travel; ascending values
    /// are farther downstream.
    pub fn along(&self, p: Point) -> f64 {
        match self {
            Direction::PosX => p.x,
            Direction::NegX => -p.x,
            Direction::PosY => p.y,
            Direction::NegY => -p.y,
        }
    }

    /// Coordinate perpendicular to the direction of travel.
    pub fn across(&self, p: Point) -> f64 {
        match self {
            Direction::PosX | Direction::NegX => p.y,
            Direction::PosY | Direction::NegY => p.x,
        }
    }

    /// Unit vector of the direction.
    pub fn unit(&self) -> Vector {
        match self {
            Direction::PosX => Vector::new(1.0, 0.0),
            Direction::NegX => Vector::new(-1.0, 0.0),
            Direction::PosY => Vector::new(0.0, 1.0),
            Direction::NegY => Vector::new(0.0, -1.0),
        }
    }

    /// The direction a splitter's reflected beam takes: 90 degrees
    /// counterclockwise from the incoming direction.
    pub fn turned(&self) -> Self {
        match self {
            Direction::PosX => Direction::PosY,
            Direction::PosY => Direction::NegX,
            Direction::NegX => Direction::NegY,
            Direction::NegY => Direction::PosX,
        }
    }
}

/// Selects and orders the components a beam will encounter.
///
/// A component participates if its perpendicular offset from the beam axis
/// is within `tolerance` and it lies strictly ahead of `origin`. The result
/// is sorted ascending by the along-axis coordinate; the sort is stable, so
/// components at the same coordinate keep their input order (a degenerate
/// layout, resolved deterministically rather than rejected).
///
/// Emitters never join another beam's path, and malformed components
/// (non-finite parameters) are skipped as transparent.
pub fn beam_path<'a>(
    components: &'a [OpticalComponent],
    origin: Point,
    direction: Direction,
    tolerance: f64,
) -> Vec<&'a OpticalComponent> {
    let axis = direction.across(origin);
    let start = direction.along(origin);

    let mut path: Vec<&OpticalComponent> = components
        .iter()
        .filter(|c| {
            if matches!(c.kind, ComponentKind::Emitter { .. }) {
                return false;
            }
            if !c.is_well_formed() {
                log::debug!("skipping malformed component {}", c.id);
                return false;
            }
            (direction.across(c.position) - axis).abs() <= tolerance
                && direction.along(c.position) > start + EPS
        })
        .collect();

    path.sort_by(|a, b| {
        direction
            .along(a.position)
            .total_cmp(&direction.along(b.position))
    });
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpticalComponent;

    #[test]
    fn test_direction_from_rotation() {
        assert_eq!(Direction::from_rotation(0.0), Direction::PosX);
        assert_eq!(Direction::from_rotation(90.0), Direction::PosY);
        assert_eq!(Direction::from_rotation(180.0), Direction::NegX);
        assert_eq!(Direction::from_rotation(270.0), Direction::NegY);
        assert_eq!(Direction::from_rotation(350.0), Direction::PosX);
        assert_eq!(Direction::from_rotation(-90.0), Direction::NegY);
    }

    #[test]
    fn test_turned_is_counterclockwise() {
        assert_eq!(Direction::PosX.turned(), Direction::PosY);
        assert_eq!(Direction::PosY.turned(), Direction::NegX);
        assert_eq!(Direction::NegX.turned(), Direction::NegY);
        assert_eq!(Direction::NegY.turned(), Direction::PosX);
    }

    #[test]
    fn test_path_filters_and_sorts() {
        let components = vec![
            OpticalComponent::polarizer(Point::new(8.0, 0.0), 0.0),
            OpticalComponent::polarizer(Point::new(3.0, 0.0), 0.0),
            // Off axis, must be excluded
            OpticalComponent::polarizer(Point::new(5.0, 10.0), 0.0),
            // Behind the origin, must be excluded
            OpticalComponent::polarizer(Point::new(-2.0, 0.0), 0.0),
        ];

        let path = beam_path(&components, Point::new(0.0, 0.0), Direction::PosX, 1.0);
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].position.x, 3.0);
        assert_eq!(path[1].position.x, 8.0);
    }

    #[test]
    fn test_path_excludes_emitters_and_malformed() {
        let components = vec![
            OpticalComponent::emitter(Point::new(2.0, 0.0), 0.0),
            OpticalComponent::polarizer(Point::new(4.0, 0.0), f64::NAN),
            OpticalComponent::sensor(Point::new(6.0, 0.0)),
        ];

        let path = beam_path(&components, Point::new(0.0, 0.0), Direction::PosX, 1.0);
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].kind, crate::ComponentKind::Sensor);
    }

    #[test]
    fn test_path_vertical_direction() {
        let components = vec![
            OpticalComponent::sensor(Point::new(5.0, 9.0)),
            OpticalComponent::polarizer(Point::new(5.0, 4.0), 0.0),
        ];

        let path = beam_path(&components, Point::new(5.0, 1.0), Direction::PosY, 1.0);
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].position.y, 4.0);
        assert_eq!(path[1].position.y, 9.0);
    }

    #[test]
    fn test_same_coordinate_keeps_input_order() {
        let a = OpticalComponent::polarizer(Point::new(5.0, 0.0), 10.0);
        let b = OpticalComponent::polarizer(Point::new(5.0, 0.0), 20.0);
        let a_id = a.id.clone();
        let components = vec![a, b];

        let path = beam_path(&components, Point::new(0.0, 0.0), Direction::PosX, 1.0);
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].id, a_id);
    }
}
