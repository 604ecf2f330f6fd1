//! # billkit
//!
//! Invoice totals calculation, payment-term resolution, and print-ready
//! invoice document rendering.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Both components are pure synchronous functions over plain values: the
//! calculation engine turns line items plus a discount/tax policy into a
//! [`core::Totals`] breakdown, and the document renderer turns an invoice
//! with its parties into a self-contained HTML document that paginates
//! cleanly at A4 when handed to an HTML-to-PDF engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use billkit::core::*;
//! use rust_decimal_macros::dec;
//!
//! let items = vec![
//!     LineItem::new("Design sprint", dec!(10), dec!(80)),
//!     LineItem::new("Hosting", dec!(1), dec!(25)),
//! ];
//!
//! let totals = calculate_invoice_total(&items, &DiscountPolicy::Fixed(dec!(25)), Some(dec!(10)));
//! assert_eq!(totals.subtotal, dec!(825));
//! assert_eq!(totals.discount_amount, dec!(25));
//! assert_eq!(totals.tax_amount, dec!(80.00));
//! assert_eq!(totals.total, dec!(880.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, totals calculation, payment terms, formatting |
//! | `document` | HTML invoice document rendering |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "document")]
pub mod document;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
