//! Per-class generation pipeline.
//!
//! A [`Pipeline`] runs its phases over one [`ClassContext`]:
//!
//! - resolve: load the class and its inherited fields from the model
//! - classify: classify every field and derive its conversions
//! - synthesize: assemble the [`GeneratedClass`](twin_model::GeneratedClass)
//!
//! Non-fatal findings are recorded as [`Diagnostic`]s on the context; a
//! phase returns an error only when the class cannot be generated.
//!
//! ```ignore
//! let mut ctx = ClassContext::new(&model, &config, class, ".customer");
//! Pipeline::new().run(&mut ctx)?;
//! for warning in ctx.warnings() {
//!     eprintln!("{warning}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::ClassContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
