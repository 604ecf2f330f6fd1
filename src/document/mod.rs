//! Print-ready invoice document rendering.
//!
//! Turns an invoice with its parties and line items into a single
//! self-contained HTML string: embedded stylesheet, no external fetches,
//! A4 page rules, and all user-supplied text escaped at the markup
//! boundary. The output is deterministic — equal input yields
//! byte-identical markup.

mod markup;
mod render;

pub use markup::*;
pub use render::*;
