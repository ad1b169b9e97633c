use std::collections::HashMap;

use crate::sim::propagation::{BeamSegment, BeamState};
use crate::uid::UID;

/// Result of a bench simulation.
///
/// Recomputed from scratch on every run; nothing here has identity across
/// calls. Segments are a full replacement for the renderer, sensor maps are
/// keyed by the stable component id.
pub struct SimulationResult {
    /// Renderable beam segments in emission order.
    pub segments: Vec<BeamSegment>,
    /// Accumulated intensity arriving at each sensor.
    pub sensor_intensity: HashMap<UID, f64>,
    /// Number of beams that reached each sensor.
    pub hit_count: HashMap<UID, usize>,
    /// Every beam state recorded at each sensor, in arrival order.
    pub sensor_states: HashMap<UID, Vec<BeamState>>,
}

impl SimulationResult {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            sensor_intensity: HashMap::new(),
            hit_count: HashMap::new(),
            sensor_states: HashMap::new(),
        }
    }

    /// Records a beam arriving at a sensor.
    pub fn record_hit(&mut self, sensor: &UID, state: &BeamState) {
        *self.sensor_intensity.entry(sensor.clone()).or_insert(0.0) += state.intensity;
        *self.hit_count.entry(sensor.clone()).or_insert(0) += 1;
        self.sensor_states
            .entry(sensor.clone())
            .or_default()
            .push(*state);
    }

    /// Total intensity recorded at a sensor, 0 if no beam reached it.
    pub fn reading(&self, sensor: &UID) -> f64 {
        self.sensor_intensity.get(sensor).copied().unwrap_or(0.0)
    }
}

impl Default for SimulationResult {
    fn default() -> Self {
        Self::new()
    }
}
