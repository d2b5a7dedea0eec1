use super::ClassContext;
use crate::GenerationError;

/// A step of the per-class pipeline.
///
/// Phases read and extend the context. Non-fatal issues are recorded as
/// diagnostics; an error fails the class.
pub trait Phase: Send + Sync {
    /// Used as the `phase` of diagnostics.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut ClassContext<'_>) -> Result<(), GenerationError>;
}
