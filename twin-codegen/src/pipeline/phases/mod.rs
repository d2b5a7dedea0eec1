//! Built-in pipeline phases.

mod classify;
mod resolve;
mod synthesize;

pub use classify::ClassifyPhase;
pub use resolve::ResolvePhase;
pub use synthesize::SynthesizePhase;

use crate::{GenerationError, pipeline::ClassContext};

/// Error for a phase that runs before its input slot is filled.
fn missing(ctx: &ClassContext<'_>, what: &str) -> GenerationError {
    GenerationError::synthesis(&ctx.class, None, format!("{what} is not available"))
}
