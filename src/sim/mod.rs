pub mod angles;
pub mod config;
pub mod path;
pub mod propagation;
pub mod result;
pub mod splitter;
