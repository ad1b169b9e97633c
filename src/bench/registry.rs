//! The fixed set of component kinds and their default parameters.
//!
//! Pure data: an external palette UI instantiates components from these
//! entries; the engine itself never consults the registry.

use crate::bench::component::{ComponentKind, SplitterKind};

/// A registry entry for one component kind.
#[derive(Debug, Clone)]
pub struct KindEntry {
    /// Short machine-friendly name.
    pub name: &'static str,
    /// Kind with default parameters, ready to place on the bench.
    pub defaults: ComponentKind,
}

/// Returns the short name of a component kind.
pub fn kind_name(kind: &ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Emitter { .. } => "emitter",
        ComponentKind::Polarizer { .. } => "polarizer",
        ComponentKind::WavePlate { .. } => "wave_plate",
        ComponentKind::Mirror { .. } => "mirror",
        ComponentKind::BeamSplitter(SplitterKind::Polarizing { .. }) => "polarizing_splitter",
        ComponentKind::BeamSplitter(SplitterKind::NonPolarizing { .. }) => "beam_splitter",
        ComponentKind::Sensor => "sensor",
        ComponentKind::Lens { .. } => "lens",
    }
}

/// Returns all placeable kinds with their default parameters.
pub fn palette() -> Vec<KindEntry> {
    vec![
        KindEntry {
            name: "emitter",
            defaults: ComponentKind::Emitter {
                polarization: 0.0,
                unpolarized: true,
            },
        },
        KindEntry {
            name: "polarizer",
            defaults: ComponentKind::Polarizer { axis: 0.0 },
        },
        KindEntry {
            name: "wave_plate",
            // Half-wave by default; 90.0 gives a quarter-wave plate.
            defaults: ComponentKind::WavePlate {
                retardation: 180.0,
                fast_axis: 0.0,
            },
        },
        KindEntry {
            name: "mirror",
            defaults: ComponentKind::Mirror { dielectric: false },
        },
        KindEntry {
            name: "beam_splitter",
            defaults: ComponentKind::BeamSplitter(SplitterKind::NonPolarizing { ratio: 0.5 }),
        },
        KindEntry {
            name: "polarizing_splitter",
            defaults: ComponentKind::BeamSplitter(SplitterKind::Polarizing { axis: 0.0 }),
        },
        KindEntry {
            name: "sensor",
            defaults: ComponentKind::Sensor,
        },
        KindEntry {
            name: "lens",
            defaults: ComponentKind::Lens { focal_length: 50.0 },
        },
    ]
}
