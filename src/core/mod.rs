//! Core invoice types, totals calculation, payment terms, and formatting.
//!
//! Everything in this module is a pure computation over in-memory values:
//! no I/O, no shared state, safe to call concurrently.

mod builder;
mod calc;
mod error;
mod format;
mod terms;
mod types;

pub use builder::*;
pub use calc::*;
pub use error::*;
pub use format::*;
pub use terms::*;
pub use types::*;
