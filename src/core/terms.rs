use chrono::{Days, NaiveDate};

use super::types::DueOption;

/// Resolve a symbolic payment-term option to a concrete due date.
///
/// Net terms add exact calendar days to the issue date — not business
/// days, and not "one month": an invoice issued Jan 31 with net-30
/// terms falls due Mar 2 in a non-leap year. [`DueOption::None`] has no
/// due date, and [`DueOption::Custom`] resolves to `None` as well — the
/// caller supplies its own explicit date rather than having one
/// invented here.
///
/// ```
/// use billkit::core::{DueOption, resolve_due_date};
/// use chrono::NaiveDate;
///
/// let issued = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
/// let due = resolve_due_date(DueOption::Net30, issued);
/// assert_eq!(due, NaiveDate::from_ymd_opt(2023, 3, 2));
/// ```
pub fn resolve_due_date(option: DueOption, issue_date: NaiveDate) -> Option<NaiveDate> {
    match option {
        DueOption::None | DueOption::Custom => None,
        DueOption::OnReceipt => Some(issue_date),
        DueOption::Net7 => issue_date.checked_add_days(Days::new(7)),
        DueOption::Net14 => issue_date.checked_add_days(Days::new(14)),
        DueOption::Net30 => issue_date.checked_add_days(Days::new(30)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn on_receipt_is_issue_date() {
        assert_eq!(
            resolve_due_date(DueOption::OnReceipt, date(2024, 6, 5)),
            Some(date(2024, 6, 5))
        );
    }

    #[test]
    fn net_terms_add_calendar_days() {
        let issued = date(2024, 6, 5);
        assert_eq!(resolve_due_date(DueOption::Net7, issued), Some(date(2024, 6, 12)));
        assert_eq!(resolve_due_date(DueOption::Net14, issued), Some(date(2024, 6, 19)));
        assert_eq!(resolve_due_date(DueOption::Net30, issued), Some(date(2024, 7, 5)));
    }

    #[test]
    fn net_30_crosses_month_boundaries_exactly() {
        // Non-leap year: Jan 31 + 30 days = Mar 2
        assert_eq!(
            resolve_due_date(DueOption::Net30, date(2023, 1, 31)),
            Some(date(2023, 3, 2))
        );
        // Leap year: Jan 31 + 30 days = Mar 1
        assert_eq!(
            resolve_due_date(DueOption::Net30, date(2024, 1, 31)),
            Some(date(2024, 3, 1))
        );
    }

    #[test]
    fn none_and_custom_have_no_derivable_date() {
        let issued = date(2024, 6, 5);
        assert_eq!(resolve_due_date(DueOption::None, issued), None);
        assert_eq!(resolve_due_date(DueOption::Custom, issued), None);
    }
}
