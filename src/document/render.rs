use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{
    BillkitError, Client, DiscountPolicy, Invoice, Issuer, LineItem, TaxPolicy, Totals,
    calculate_invoice_total, format_currency, format_date, format_quantity, resolve_due_date,
};

use super::markup::HtmlWriter;

/// Everything the renderer needs to produce one document.
///
/// The records come from independent external lookups (the data source
/// is the caller's concern), so each may be absent; the renderer is the
/// fail-fast validation boundary and refuses to produce a partial
/// document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentInput {
    pub invoice: Option<Invoice>,
    pub issuer: Option<Issuer>,
    pub client: Option<Client>,
    pub items: Vec<LineItem>,
    pub tax: Option<TaxPolicy>,
}

/// Embedded print stylesheet: A4 page, repeating table header, and
/// no-split markers on rows and key blocks.
const STYLESHEET: &str = "\
@page { size: A4; margin: 18mm 16mm; }\n\
body { font-family: Helvetica, Arial, sans-serif; font-size: 12px; color: #1f2430; margin: 0; }\n\
h1, h2, h3, h4 { margin: 0 0 4px 0; }\n\
p { margin: 2px 0; }\n\
.doc-header { overflow: hidden; margin-bottom: 24px; page-break-inside: avoid; }\n\
.issuer-name { font-size: 20px; float: left; }\n\
.invoice-meta { float: right; text-align: right; }\n\
.invoice-meta h2 { font-size: 14px; letter-spacing: 2px; text-transform: uppercase; color: #6b7280; }\n\
.invoice-number { font-weight: bold; }\n\
.parties { overflow: hidden; margin-bottom: 24px; page-break-inside: avoid; }\n\
.party { float: left; width: 45%; }\n\
.party h3 { font-size: 11px; text-transform: uppercase; color: #6b7280; }\n\
.party-name { font-weight: bold; }\n\
table.items { width: 100%; border-collapse: collapse; margin-bottom: 16px; }\n\
table.items thead { display: table-header-group; }\n\
table.items th { text-align: left; font-size: 11px; text-transform: uppercase; color: #6b7280; border-bottom: 2px solid #1f2430; padding: 6px 8px; }\n\
table.items td { padding: 6px 8px; vertical-align: top; }\n\
table.items tr { page-break-inside: avoid; }\n\
.row-even { background: #f3f4f6; }\n\
.row-odd { background: #ffffff; }\n\
.num, table.items th.col-qty, table.items th.col-rate, table.items th.col-amount { text-align: right; }\n\
.totals { overflow: hidden; margin-bottom: 24px; page-break-inside: avoid; }\n\
.totals table { border-collapse: collapse; margin-left: auto; width: 45%; }\n\
.totals td { padding: 4px 8px; }\n\
.totals td.label { color: #6b7280; }\n\
.grand-total td { border-top: 2px solid #1f2430; font-weight: bold; }\n\
.notes { page-break-inside: avoid; }\n\
.notes h4 { font-size: 11px; text-transform: uppercase; color: #6b7280; margin-top: 12px; }\n";

/// Render an invoice into a complete, self-contained HTML document.
///
/// Stateless: equal input produces byte-identical markup. All
/// free-text fields pass through the [`HtmlWriter`] escaping boundary
/// before they reach the output.
///
/// Fails with [`BillkitError::InvalidInvoiceData`] before any layout
/// work when the invoice, issuer, or client record is missing, the item
/// list is empty, or the invoice number is blank. Unexpected assembly
/// failures surface as [`BillkitError::TemplateGeneration`].
pub fn render_invoice_document(input: &DocumentInput) -> Result<String, BillkitError> {
    let invoice = input
        .invoice
        .as_ref()
        .ok_or_else(|| invalid("invoice record is missing"))?;
    let issuer = input
        .issuer
        .as_ref()
        .ok_or_else(|| invalid("issuer record is missing"))?;
    let client = input
        .client
        .as_ref()
        .ok_or_else(|| invalid("client record is missing"))?;
    if input.items.is_empty() {
        return Err(invalid("invoice must have at least one line item"));
    }
    if invoice.number.trim().is_empty() {
        return Err(invalid("invoice number must not be empty"));
    }

    let totals = calculate_invoice_total(
        &input.items,
        &invoice.discount,
        input.tax.as_ref().map(|t| t.rate_percent),
    );

    let due_display = match invoice.due_date {
        Some(date) => format_date(date),
        None => resolve_due_date(invoice.due_option, invoice.issue_date)
            .map(format_date)
            .unwrap_or_else(|| "Upon receipt".to_string()),
    };

    let mut w = HtmlWriter::new()?;
    w.start_element_with_attrs("html", &[("lang", "en")])?;
    w.start_element("head")?;
    w.empty_element_with_attrs("meta", &[("charset", "utf-8")])?;
    w.text_element("title", &format!("Invoice {}", invoice.number))?;
    w.text_element("style", STYLESHEET)?;
    w.end_element("head")?;
    w.start_element("body")?;

    write_header(&mut w, invoice, issuer, &due_display)?;
    write_parties(&mut w, issuer, client)?;
    write_items_table(&mut w, &input.items, &invoice.currency_code)?;
    write_totals(&mut w, invoice, input.tax.as_ref(), &totals)?;
    write_notes(&mut w, invoice)?;

    w.end_element("body")?;
    w.end_element("html")?;
    w.into_string()
}

fn invalid(message: &str) -> BillkitError {
    BillkitError::InvalidInvoiceData(message.to_string())
}

fn write_header(
    w: &mut HtmlWriter,
    invoice: &Invoice,
    issuer: &Issuer,
    due_display: &str,
) -> Result<(), BillkitError> {
    w.start_element_with_attrs("header", &[("class", "doc-header")])?;
    w.text_element_with_attrs("h1", &issuer.name, &[("class", "issuer-name")])?;
    w.start_element_with_attrs("div", &[("class", "invoice-meta")])?;
    w.text_element("h2", "Invoice")?;
    w.text_element_with_attrs(
        "p",
        &format!("#{}", invoice.number),
        &[("class", "invoice-number")],
    )?;
    w.text_element("p", &format!("Issued: {}", format_date(invoice.issue_date)))?;
    w.text_element("p", &format!("Due: {due_display}"))?;
    w.end_element("div")?;
    w.end_element("header")?;
    Ok(())
}

fn write_parties(w: &mut HtmlWriter, issuer: &Issuer, client: &Client) -> Result<(), BillkitError> {
    w.start_element_with_attrs("section", &[("class", "parties")])?;

    w.start_element_with_attrs("div", &[("class", "party")])?;
    w.text_element("h3", "Bill To")?;
    w.text_element_with_attrs("p", &client.name, &[("class", "party-name")])?;
    if let Some(contact) = &client.contact_name {
        w.text_element("p", contact)?;
    }
    write_address(w, client.address.as_deref())?;
    if let Some(email) = &client.email {
        w.text_element("p", email)?;
    }
    w.end_element("div")?;

    w.start_element_with_attrs("div", &[("class", "party")])?;
    w.text_element("h3", "From")?;
    w.text_element_with_attrs("p", &issuer.name, &[("class", "party-name")])?;
    write_address(w, issuer.address.as_deref())?;
    if let Some(email) = &issuer.email {
        w.text_element("p", email)?;
    }
    if let Some(phone) = &issuer.phone {
        w.text_element("p", phone)?;
    }
    w.end_element("div")?;

    w.end_element("section")?;
    Ok(())
}

fn write_address(w: &mut HtmlWriter, address: Option<&str>) -> Result<(), BillkitError> {
    if let Some(address) = address {
        w.start_element_with_attrs("p", &[("class", "party-address")])?;
        w.multiline_text(address)?;
        w.end_element("p")?;
    }
    Ok(())
}

fn write_items_table(
    w: &mut HtmlWriter,
    items: &[LineItem],
    currency: &str,
) -> Result<(), BillkitError> {
    w.start_element_with_attrs("table", &[("class", "items")])?;
    w.start_element("thead")?;
    w.start_element("tr")?;
    w.text_element_with_attrs("th", "Item", &[("class", "col-item")])?;
    w.text_element_with_attrs("th", "Qty", &[("class", "col-qty")])?;
    w.text_element_with_attrs("th", "Rate", &[("class", "col-rate")])?;
    w.text_element_with_attrs("th", "Amount", &[("class", "col-amount")])?;
    w.end_element("tr")?;
    w.end_element("thead")?;

    w.start_element("tbody")?;
    for (i, item) in items.iter().enumerate() {
        let row_class = if i % 2 == 0 { "row-even" } else { "row-odd" };
        w.start_element_with_attrs("tr", &[("class", row_class)])?;
        w.text_element("td", &item.name)?;
        w.text_element_with_attrs("td", &format_quantity(item.quantity), &[("class", "num")])?;
        w.text_element_with_attrs(
            "td",
            &format_currency(item.rate, currency),
            &[("class", "num")],
        )?;
        w.text_element_with_attrs(
            "td",
            &format_currency(item.amount(), currency),
            &[("class", "num")],
        )?;
        w.end_element("tr")?;
    }
    w.end_element("tbody")?;
    w.end_element("table")?;
    Ok(())
}

fn write_totals(
    w: &mut HtmlWriter,
    invoice: &Invoice,
    tax: Option<&TaxPolicy>,
    totals: &Totals,
) -> Result<(), BillkitError> {
    let currency = invoice.currency_code.as_str();

    w.start_element_with_attrs("section", &[("class", "totals")])?;
    w.start_element("table")?;

    write_totals_row(w, "Subtotal", &format_currency(totals.subtotal, currency), None)?;

    if totals.discount_amount > Decimal::ZERO {
        let label = match invoice.discount {
            DiscountPolicy::Percent(value) => format!("Discount ({}%)", value.normalize()),
            _ => "Discount".to_string(),
        };
        let value = format!("-{}", format_currency(totals.discount_amount, currency));
        write_totals_row(w, &label, &value, None)?;
    }

    if let Some(tax) = tax {
        if totals.tax_amount > Decimal::ZERO {
            let label = format!("{} ({}%)", tax.name, tax.rate_percent.normalize());
            write_totals_row(w, &label, &format_currency(totals.tax_amount, currency), None)?;
        }
    }

    write_totals_row(
        w,
        "Total",
        &format_currency(totals.total, currency),
        Some("grand-total"),
    )?;

    w.end_element("table")?;
    w.end_element("section")?;
    Ok(())
}

fn write_totals_row(
    w: &mut HtmlWriter,
    label: &str,
    value: &str,
    row_class: Option<&str>,
) -> Result<(), BillkitError> {
    match row_class {
        Some(class) => w.start_element_with_attrs("tr", &[("class", class)])?,
        None => w.start_element("tr")?,
    };
    w.text_element_with_attrs("td", label, &[("class", "label")])?;
    w.text_element_with_attrs("td", value, &[("class", "num")])?;
    w.end_element("tr")?;
    Ok(())
}

fn write_notes(w: &mut HtmlWriter, invoice: &Invoice) -> Result<(), BillkitError> {
    let notes = invoice.notes.as_deref().filter(|s| !s.trim().is_empty());
    let terms = invoice.terms.as_deref().filter(|s| !s.trim().is_empty());
    if notes.is_none() && terms.is_none() {
        return Ok(());
    }

    w.start_element_with_attrs("section", &[("class", "notes")])?;
    if let Some(text) = notes {
        w.text_element("h4", "Notes")?;
        w.start_element("p")?;
        w.multiline_text(text)?;
        w.end_element("p")?;
    }
    if let Some(text) = terms {
        w.text_element("h4", "Terms")?;
        w.start_element("p")?;
        w.multiline_text(text)?;
        w.end_element("p")?;
    }
    w.end_element("section")?;
    Ok(())
}
