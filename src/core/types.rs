use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice — the metadata record the calculation engine and renderer
/// operate on. Transient: constructed by the caller for a single
/// calculation or render and discarded afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number (displayed, must be non-empty to render).
    pub number: String,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Explicit due date. Takes precedence over [`Invoice::due_option`]
    /// when displaying; required by callers using [`DueOption::Custom`].
    pub due_date: Option<NaiveDate>,
    /// Symbolic payment-term policy.
    pub due_option: DueOption,
    /// Document-level discount, applied once to the combined subtotal.
    pub discount: DiscountPolicy,
    /// Invoice currency code (ISO 4217, e.g. "USD").
    pub currency_code: String,
    /// Public notes, shown on the document. Multi-line.
    pub notes: Option<String>,
    /// Payment terms free text, shown on the document. Multi-line.
    pub terms: Option<String>,
}

/// The party issuing the invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issuer {
    /// Business name.
    pub name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Postal address, multi-line free text.
    pub address: Option<String>,
}

/// The party being billed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Business or person name.
    pub name: String,
    /// Contact person, if distinct from the client name.
    pub contact_name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Postal address, multi-line free text.
    pub address: Option<String>,
}

/// One billable row of an invoice.
///
/// Quantity and rate are signed and not validated as non-negative:
/// negative lines are legitimate (credits, corrections) and flow through
/// the totals arithmetically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name, free text.
    pub name: String,
    /// Quantity.
    pub quantity: Decimal,
    /// Per-unit rate.
    pub rate: Decimal,
}

impl LineItem {
    pub fn new(name: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            rate,
        }
    }

    /// The line's extended amount: `quantity * rate`. No rounding is
    /// applied at the line level.
    pub fn amount(&self) -> Decimal {
        self.quantity * self.rate
    }
}

/// Document-level discount policy. Applied once, to the subtotal of all
/// line items combined — never per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountPolicy {
    /// No discount configured.
    None,
    /// Percentage of the subtotal.
    Percent(Decimal),
    /// Fixed amount, clamped to the subtotal during calculation.
    Fixed(Decimal),
}

impl DiscountPolicy {
    /// Discount type code as stored by callers ("percent" / "fixed").
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Percent(_) => Some("percent"),
            Self::Fixed(_) => Some("fixed"),
        }
    }

    /// Build from a stored type code and value. Unknown codes map to `None`.
    pub fn from_code(code: Option<&str>, value: Decimal) -> Self {
        match code {
            Some("percent") => Self::Percent(value),
            Some("fixed") => Self::Fixed(value),
            _ => Self::None,
        }
    }
}

/// Named tax applied once to the post-discount amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxPolicy {
    /// Display name (e.g. "VAT", "GST").
    pub name: String,
    /// Rate as a percentage (e.g. `10` for 10%).
    pub rate_percent: Decimal,
}

/// Symbolic payment-term code, resolved to a concrete due date relative
/// to the issue date by [`resolve_due_date`](crate::core::resolve_due_date).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueOption {
    /// No due date.
    #[default]
    None,
    /// Due on the issue date.
    OnReceipt,
    /// Due 7 calendar days after the issue date.
    #[serde(rename = "net_7")]
    Net7,
    /// Due 14 calendar days after the issue date.
    #[serde(rename = "net_14")]
    Net14,
    /// Due 30 calendar days after the issue date.
    #[serde(rename = "net_30")]
    Net30,
    /// The caller supplies an explicit due date; nothing to resolve.
    Custom,
}

impl DueOption {
    /// Stored string code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::OnReceipt => "on_receipt",
            Self::Net7 => "net_7",
            Self::Net14 => "net_14",
            Self::Net30 => "net_30",
            Self::Custom => "custom",
        }
    }

    /// Parse from a stored string code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "none" => Some(Self::None),
            "on_receipt" => Some(Self::OnReceipt),
            "net_7" => Some(Self::Net7),
            "net_14" => Some(Self::Net14),
            "net_30" => Some(Self::Net30),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Derived financial summary of an invoice. Recomputed fresh on every
/// call to [`calculate_invoice_total`](crate::core::calculate_invoice_total);
/// never persisted by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all line extended amounts, exact (unrounded).
    pub subtotal: Decimal,
    /// Discount applied to the subtotal. Never exceeds the subtotal.
    pub discount_amount: Decimal,
    /// Tax computed on the post-discount amount.
    pub tax_amount: Decimal,
    /// `subtotal - discount_amount + tax_amount`.
    pub total: Decimal,
}
