use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::types::{DiscountPolicy, LineItem, Totals};

/// Calculate the financial summary for a set of line items.
///
/// The subtotal is the exact sum of `quantity * rate` over all items
/// (order-independent). The discount applies once to that subtotal: a
/// percentage of it, or a fixed amount. Either form is clamped to the
/// subtotal so the post-discount amount can never go negative — a
/// percent discount could otherwise round up past an exact sub-cent
/// subtotal. Tax, when a rate is supplied, is
/// computed on the post-discount amount — never on the raw subtotal.
///
/// A configured discount whose value is exactly zero behaves identically
/// to [`DiscountPolicy::None`]: no discount is applied and downstream
/// consumers see `discount_amount == 0`.
///
/// Monetary adjustments (`discount_amount`, `tax_amount`) are rounded
/// half-up to 2 decimal places; the subtotal stays exact.
///
/// ```
/// use billkit::core::*;
/// use rust_decimal_macros::dec;
///
/// let items = [LineItem::new("Consulting", dec!(1), dec!(100))];
/// let totals = calculate_invoice_total(&items, &DiscountPolicy::Fixed(dec!(20)), Some(dec!(10)));
/// assert_eq!(totals.discount_amount, dec!(20));
/// assert_eq!(totals.tax_amount, dec!(8.00));
/// assert_eq!(totals.total, dec!(88.00));
/// ```
pub fn calculate_invoice_total(
    items: &[LineItem],
    discount: &DiscountPolicy,
    tax_rate_percent: Option<Decimal>,
) -> Totals {
    let subtotal: Decimal = items.iter().map(LineItem::amount).sum();

    let discount_amount = match *discount {
        DiscountPolicy::Percent(value) | DiscountPolicy::Fixed(value) if value.is_zero() => {
            Decimal::ZERO
        }
        DiscountPolicy::Percent(value) => {
            round_half_up(subtotal * value / dec!(100), 2).min(subtotal)
        }
        DiscountPolicy::Fixed(value) => value.min(subtotal),
        DiscountPolicy::None => Decimal::ZERO,
    };

    let after_discount = subtotal - discount_amount;

    let tax_amount = match tax_rate_percent {
        Some(rate) => round_half_up(after_discount * rate / dec!(100), 2),
        None => Decimal::ZERO,
    };

    Totals {
        subtotal,
        discount_amount,
        tax_amount,
        total: after_discount + tax_amount,
    }
}

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_items_no_totals() {
        let totals = calculate_invoice_total(&[], &DiscountPolicy::None, None);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.discount_amount, Decimal::ZERO);
        assert_eq!(totals.tax_amount, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn zero_valued_discount_is_no_discount() {
        let items = [LineItem::new("A", dec!(2), dec!(50))];
        for discount in [DiscountPolicy::Percent(dec!(0)), DiscountPolicy::Fixed(dec!(0))] {
            let totals = calculate_invoice_total(&items, &discount, None);
            assert_eq!(totals.discount_amount, Decimal::ZERO);
            assert_eq!(totals.total, dec!(100));
        }
    }

    #[test]
    fn percent_discount_rounding_cannot_exceed_subtotal() {
        // Sub-cent subtotal: 0.01 * 0.50 = 0.005; a 100% discount would
        // round to 0.01 unclamped
        let items = [LineItem::new("A", dec!(0.01), dec!(0.50))];
        let totals = calculate_invoice_total(&items, &DiscountPolicy::Percent(dec!(100)), None);
        assert_eq!(totals.discount_amount, dec!(0.005));
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn fixed_discount_clamped_to_subtotal() {
        let items = [LineItem::new("A", dec!(1), dec!(50))];
        let totals = calculate_invoice_total(&items, &DiscountPolicy::Fixed(dec!(80)), None);
        assert_eq!(totals.discount_amount, dec!(50));
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn fractional_tax_rounds_half_up() {
        // 33.33 * 7.5% = 2.49975 -> 2.50
        let items = [LineItem::new("A", dec!(1), dec!(33.33))];
        let totals = calculate_invoice_total(&items, &DiscountPolicy::None, Some(dec!(7.5)));
        assert_eq!(totals.tax_amount, dec!(2.50));
    }
}
