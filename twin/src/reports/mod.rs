//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod plan;

pub use check::CheckReport;
pub use generate::{ClassFailure, ClassSummary, FileLine, GenerateReport, PreviewFile};
pub use output::{Report, TerminalOutput};
pub use plan::{PlanClass, PlanField, PlanReport};

#[cfg(test)]
pub use output::Recorded;
