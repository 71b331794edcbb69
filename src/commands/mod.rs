//! CLI use cases. Each command writes its result to the given writer so the
//! binary and the tests share one code path.

pub mod config;
mod compare;
mod installed;
mod parse;

pub use compare::compare;
pub use installed::installed;
pub use parse::parse;
