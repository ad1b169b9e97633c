/// Configuration for a bench simulation.
pub struct SimConfig {
    /// Maximum perpendicular offset (bench units) from the beam axis for a
    /// component to participate in the path.
    pub alignment_tolerance: f64,
    /// Intensity below this threshold stops segment emission (on the 0-100
    /// scale). Extinction is a normal terminal state, not an error.
    pub intensity_cutoff: f64,
    /// Coordinate at which a beam leaving the last component ends, per axis.
    pub bench_extent: f64,
    /// Maximum number of splitter forks along any single beam lineage.
    pub max_forks: usize,
    /// Intensity assigned to every emitter at the start of propagation.
    pub source_intensity: f64,
}

impl SimConfig {
    pub fn new() -> Self {
        Self {
            alignment_tolerance: 1.0,
            intensity_cutoff: 0.05,
            bench_extent: 100.0,
            max_forks: 8,
            source_intensity: 100.0,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SimConfig::new();
        assert_eq!(config.source_intensity, 100.0);
        assert_eq!(config.max_forks, 8);
        assert!(config.intensity_cutoff > 0.0);
    }
}
