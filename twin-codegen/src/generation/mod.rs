//! Helpers shared by renderers.

mod imports;

pub use imports::ImportCollector;
