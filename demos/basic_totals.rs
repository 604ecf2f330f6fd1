use billkit::core::*;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    let items = vec![
        LineItem::new("Design sprint", dec!(10), dec!(80)),
        LineItem::new("Frontend development", dec!(32.5), dec!(95)),
        LineItem::new("Hosting (monthly)", dec!(1), dec!(25)),
    ];

    let totals = calculate_invoice_total(
        &items,
        &DiscountPolicy::Percent(dec!(10)),
        Some(dec!(19)),
    );

    println!("Subtotal:  {}", format_currency(totals.subtotal, "EUR"));
    println!("Discount:  {}", format_currency(totals.discount_amount, "EUR"));
    println!("Tax:       {}", format_currency(totals.tax_amount, "EUR"));
    println!("Total:     {}", format_currency(totals.total, "EUR"));

    let issued = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
    match resolve_due_date(DueOption::Net30, issued) {
        Some(due) => println!("Due date:  {}", format_date(due)),
        None => println!("Due date:  upon receipt"),
    }
}
