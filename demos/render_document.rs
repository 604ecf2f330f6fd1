use billkit::core::*;
use billkit::document::{DocumentInput, render_invoice_document};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() {
    let issued = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();

    let input = DocumentInput {
        invoice: Some(
            InvoiceBuilder::new("INV-2024-042", issued)
                .due_option(DueOption::Net14)
                .discount(DiscountPolicy::Fixed(dec!(50)))
                .currency("EUR")
                .notes("Thank you for your business.")
                .terms("Payment within 14 days.\nLate payments accrue 2% monthly interest.")
                .build(),
        ),
        issuer: Some(
            IssuerBuilder::new("Acme Studio")
                .email("billing@acme.example")
                .phone("+49 30 12345")
                .address("Friedrichstraße 123\n10115 Berlin")
                .build(),
        ),
        client: Some(
            ClientBuilder::new("Kunde AG")
                .contact_name("Max Mustermann")
                .email("ap@kunde.example")
                .address("Marienplatz 1\n80331 München")
                .build(),
        ),
        items: vec![
            LineItem::new("Software development", dec!(80), dec!(120)),
            LineItem::new("Hosting (monthly)", dec!(1), dec!(49.90)),
        ],
        tax: Some(TaxPolicy {
            name: "VAT".into(),
            rate_percent: dec!(19),
        }),
    };

    match render_invoice_document(&input) {
        Ok(html) => println!("{html}"),
        Err(e) => eprintln!("failed to render: {e}"),
    }
}
