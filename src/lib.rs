//! Optical bench simulation engine.
//!
//! Given a set of optical components placed on a 2D bench (emitters,
//! polarizers, wave plates, mirrors, beam splitters, lenses, sensors),
//! the engine computes how light propagates through the arrangement and
//! returns renderable beam segments with per-segment intensity and
//! polarization angle.
//!
//! The engine is a pure function of the component list: it owns no state,
//! performs no I/O, and never panics on malformed input. Component
//! placement, rendering, and persistence belong to external collaborators.

pub mod bench;
pub mod geom;
pub mod sim;
mod uid;

// Prelude
pub use bench::component::{ComponentKind, OpticalComponent, SplitterKind};
pub use geom::point::Point;
pub use geom::vector::Vector;
pub use sim::config::SimConfig;
pub use sim::propagation::{simulate, BeamSegment, BeamState, BenchSimulation};
pub use sim::result::SimulationResult;
pub use uid::UID;
