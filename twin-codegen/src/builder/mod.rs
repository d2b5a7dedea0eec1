//! Building blocks for emitting indented source text.

mod code_builder;
mod indent;
mod renderable;
mod types;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use types::TypeMapper;
