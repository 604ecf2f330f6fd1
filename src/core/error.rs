use thiserror::Error;

/// Errors surfaced by the document renderer.
///
/// The calculation engine raises no errors of its own — it is a pure
/// numeric function, and validation happens at the rendering boundary
/// where a user-facing failure message is meaningful. Both variants are
/// non-retryable without fixing the input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BillkitError {
    /// A render precondition failed: missing invoice/client/issuer
    /// record, empty item list, or blank invoice number. Raised before
    /// any layout work begins.
    #[error("invalid invoice data: {0}")]
    InvalidInvoiceData(String),

    /// Markup assembly failed unexpectedly; carries the underlying cause.
    #[error("template generation failed: {0}")]
    TemplateGeneration(String),
}
