use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use billkit::core::*;
use billkit::document::{DocumentInput, render_invoice_document};

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn build_items(n: usize) -> Vec<LineItem> {
    (1..=n)
        .map(|i| LineItem::new(format!("Service item {i}"), dec!(5), dec!(120)))
        .collect()
}

fn build_input(lines: usize) -> DocumentInput {
    DocumentInput {
        invoice: Some(
            InvoiceBuilder::new("BENCH-001", test_date())
                .due_option(DueOption::Net30)
                .discount(DiscountPolicy::Percent(dec!(10)))
                .notes("Benchmark invoice.")
                .build(),
        ),
        issuer: Some(
            IssuerBuilder::new("Benchmark Studio")
                .address("1 Workshop Lane\nSpringfield")
                .email("billing@bench.example")
                .build(),
        ),
        client: Some(
            ClientBuilder::new("Kunde AG")
                .address("Marienplatz 1\n80331 München")
                .build(),
        ),
        items: build_items(lines),
        tax: Some(TaxPolicy {
            name: "VAT".into(),
            rate_percent: dec!(19),
        }),
    }
}

fn bench_calculate_totals(c: &mut Criterion) {
    let items_10 = build_items(10);
    let items_1000 = build_items(1000);

    c.bench_function("calculate_totals_10_lines", |b| {
        b.iter(|| {
            calculate_invoice_total(
                black_box(&items_10),
                &DiscountPolicy::Percent(dec!(10)),
                Some(dec!(19)),
            )
        })
    });

    c.bench_function("calculate_totals_1000_lines", |b| {
        b.iter(|| {
            calculate_invoice_total(
                black_box(&items_1000),
                &DiscountPolicy::Fixed(dec!(500)),
                Some(dec!(19)),
            )
        })
    });
}

fn bench_render_document(c: &mut Criterion) {
    let input_10 = build_input(10);
    let input_200 = build_input(200);

    c.bench_function("render_document_10_lines", |b| {
        b.iter(|| render_invoice_document(black_box(&input_10)).unwrap())
    });

    c.bench_function("render_document_200_lines", |b| {
        b.iter(|| render_invoice_document(black_box(&input_200)).unwrap())
    });
}

criterion_group!(benches, bench_calculate_totals, bench_render_document);
criterion_main!(benches);
