use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::bench::component::{ComponentKind, OpticalComponent};
use crate::geom::EPS;
use crate::sim::angles::{malus_factor, normalize_axis};
use crate::sim::config::SimConfig;
use crate::sim::path::{beam_path, Direction};
use crate::sim::result::SimulationResult;
use crate::sim::splitter::split;
use crate::Point;

/// The running state of a beam during propagation.
///
/// Ephemeral: created at an emitter, transformed at each component,
/// discarded when the beam terminates. The scalar (intensity, angle) model
/// cannot represent elliptical states; quarter-wave plates use a simplified
/// constant-rotation approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamState {
    /// Fraction of source intensity on a 0-100 scale.
    pub intensity: f64,
    /// Polarization angle in degrees, [0, 180). Meaningful only while
    /// intensity is above the cutoff and the beam is not unpolarized.
    pub angle: f64,
    /// Natural light has no single polarization angle.
    pub unpolarized: bool,
}

/// A straight piece of the light path carrying one constant beam state.
///
/// Produced fresh on every run; the renderer treats the segment list as a
/// full replacement with no identity beyond the array index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSegment {
    pub from: Point,
    pub to: Point,
    pub intensity: f64,
    pub angle: f64,
    pub unpolarized: bool,
}

/// A beam waiting to be propagated: splitters push two of these.
struct PendingBeam {
    origin: Point,
    direction: Direction,
    state: BeamState,
    /// Number of splitter forks in this beam's ancestry.
    forks: usize,
}

/// Applies a polarizer with the given transmission axis (Malus's law).
fn through_polarizer(state: BeamState, axis: f64) -> BeamState {
    let axis = normalize_axis(axis);
    if state.unpolarized {
        // Natural light: half the intensity passes, whatever the axis.
        BeamState {
            intensity: state.intensity * 0.5,
            angle: axis,
            unpolarized: false,
        }
    } else {
        BeamState {
            intensity: state.intensity * malus_factor(state.angle - axis),
            angle: axis,
            unpolarized: false,
        }
    }
}

/// Applies a wave plate with the given retardation and fast axis.
///
/// A half-wave plate (180 degrees) reflects the polarization about the fast
/// axis: angle_out = 2 * fast_axis - angle_in. Other retardations scale the
/// rotation linearly, which keeps half-wave behavior exact and approximates
/// quarter-wave plates without tracking ellipticity. Unpolarized light is
/// unaffected.
fn through_wave_plate(state: BeamState, retardation: f64, fast_axis: f64) -> BeamState {
    if state.unpolarized {
        return state;
    }
    let rotation = (retardation / 180.0) * 2.0 * (fast_axis - state.angle);
    BeamState {
        angle: normalize_axis(state.angle + rotation),
        ..state
    }
}

/// A configured bench simulation over a component list.
///
/// The engine borrows the components; the external bench store owns them
/// and calls [`run`](Self::run) (or [`simulate`]) after every edit.
pub struct BenchSimulation<'a> {
    components: &'a [OpticalComponent],
    config: SimConfig,
}

impl<'a> BenchSimulation<'a> {
    pub fn new(components: &'a [OpticalComponent], config: SimConfig) -> Self {
        Self { components, config }
    }

    /// Runs the simulation for all emitters and returns segments plus
    /// sensor readings.
    ///
    /// Deterministic and infallible: malformed components are skipped,
    /// extinguished beams simply stop emitting, and the result may be empty.
    pub fn run(&self) -> SimulationResult {
        let mut result = SimulationResult::new();
        let mut queue: VecDeque<PendingBeam> = VecDeque::new();

        // Warn once per run; path ordering skips these silently on every beam.
        for component in self.components {
            if !component.is_well_formed() {
                log::warn!("skipping malformed component {}", component.id);
            }
        }

        // Seed beams in position order, not insertion order, so the output
        // segment array is invariant under permutations of the input list.
        let mut emitters: Vec<&OpticalComponent> = self
            .components
            .iter()
            .filter(|c| matches!(c.kind, ComponentKind::Emitter { .. }) && c.is_well_formed())
            .collect();
        emitters.sort_by(|a, b| {
            a.position
                .x
                .total_cmp(&b.position.x)
                .then(a.position.y.total_cmp(&b.position.y))
        });

        for component in emitters {
            if let ComponentKind::Emitter {
                polarization,
                unpolarized,
            } = component.kind
            {
                queue.push_back(PendingBeam {
                    origin: component.position,
                    direction: Direction::from_rotation(component.rotation),
                    state: BeamState {
                        intensity: self.config.source_intensity,
                        angle: normalize_axis(polarization),
                        unpolarized,
                    },
                    forks: 0,
                });
            }
        }

        while let Some(beam) = queue.pop_front() {
            self.propagate(beam, &mut result, &mut queue);
        }
        result
    }

    /// Walks one beam through its ordered component path.
    fn propagate(
        &self,
        beam: PendingBeam,
        result: &mut SimulationResult,
        queue: &mut VecDeque<PendingBeam>,
    ) {
        let path = beam_path(
            self.components,
            beam.origin,
            beam.direction,
            self.config.alignment_tolerance,
        );

        let mut pos = beam.origin;
        let mut state = beam.state;

        for component in path {
            self.emit_segment(pos, component.position, &state, result);
            pos = component.position;

            match &component.kind {
                ComponentKind::Polarizer { axis } => {
                    state = through_polarizer(state, *axis);
                }
                ComponentKind::WavePlate {
                    retardation,
                    fast_axis,
                } => {
                    state = through_wave_plate(state, *retardation, *fast_axis);
                }
                // Ideal mirrors and lenses leave the beam state unchanged.
                // Dielectric Brewster polarization is not modeled. A stray
                // emitter in the path is transparent (filtered upstream).
                ComponentKind::Mirror { .. }
                | ComponentKind::Lens { .. }
                | ComponentKind::Emitter { .. } => {}
                ComponentKind::Sensor => {
                    // Terminal: record the arriving state and absorb the beam.
                    result.record_hit(&component.id, &state);
                    return;
                }
                ComponentKind::BeamSplitter(splitter) => {
                    if beam.forks >= self.config.max_forks {
                        log::debug!("fork limit reached at splitter {}", component.id);
                        return;
                    }
                    let (transmitted, reflected) = split(&state, splitter);
                    queue.push_back(PendingBeam {
                        origin: pos,
                        direction: beam.direction,
                        state: transmitted,
                        forks: beam.forks + 1,
                    });
                    queue.push_back(PendingBeam {
                        origin: pos,
                        direction: beam.direction.turned(),
                        state: reflected,
                        forks: beam.forks + 1,
                    });
                    return;
                }
            }
        }

        // Trailing segment to the bench edge.
        let remaining = self.config.bench_extent - beam.direction.along(pos);
        if remaining > EPS {
            let end = pos + beam.direction.unit() * remaining;
            self.emit_segment(pos, end, &state, result);
        }
    }

    /// Emits one segment unless the beam is extinguished or degenerate.
    fn emit_segment(&self, from: Point, to: Point, state: &BeamState, result: &mut SimulationResult) {
        if state.intensity <= self.config.intensity_cutoff || from.is_close(&to) {
            return;
        }
        result.segments.push(BeamSegment {
            from,
            to,
            intensity: state.intensity,
            angle: state.angle,
            unpolarized: state.unpolarized,
        });
    }
}

/// Simulates the bench with default configuration and returns the
/// renderable segments for all emitters.
///
/// This is the pure recomputation seam for the external bench store: no
/// memory of prior calls, no side effects, identical input yields identical
/// output.
pub fn simulate(components: &[OpticalComponent]) -> Vec<BeamSegment> {
    BenchSimulation::new(components, SimConfig::new()).run().segments
}
