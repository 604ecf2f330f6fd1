use chrono::NaiveDate;

use super::types::*;

/// Builder for [`Invoice`] records.
///
/// ```
/// use billkit::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let invoice = InvoiceBuilder::new("INV-042", NaiveDate::from_ymd_opt(2024, 6, 5).unwrap())
///     .due_option(DueOption::Net30)
///     .discount(DiscountPolicy::Percent(dec!(10)))
///     .currency("EUR")
///     .notes("Thank you for your business.")
///     .build();
/// ```
pub struct InvoiceBuilder {
    number: String,
    issue_date: NaiveDate,
    due_date: Option<NaiveDate>,
    due_option: DueOption,
    discount: DiscountPolicy,
    currency_code: String,
    notes: Option<String>,
    terms: Option<String>,
}

impl InvoiceBuilder {
    pub fn new(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            issue_date,
            due_date: None,
            due_option: DueOption::None,
            discount: DiscountPolicy::None,
            currency_code: "USD".to_string(),
            notes: None,
            terms: None,
        }
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn due_option(mut self, option: DueOption) -> Self {
        self.due_option = option;
        self
    }

    pub fn discount(mut self, discount: DiscountPolicy) -> Self {
        self.discount = discount;
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = Some(terms.into());
        self
    }

    pub fn build(self) -> Invoice {
        Invoice {
            number: self.number,
            issue_date: self.issue_date,
            due_date: self.due_date,
            due_option: self.due_option,
            discount: self.discount,
            currency_code: self.currency_code,
            notes: self.notes,
            terms: self.terms,
        }
    }
}

/// Builder for [`Issuer`] records.
pub struct IssuerBuilder {
    name: String,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
}

impl IssuerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
            address: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn build(self) -> Issuer {
        Issuer {
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
        }
    }
}

/// Builder for [`Client`] records.
pub struct ClientBuilder {
    name: String,
    contact_name: Option<String>,
    email: Option<String>,
    address: Option<String>,
}

impl ClientBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_name: None,
            email: None,
            address: None,
        }
    }

    pub fn contact_name(mut self, name: impl Into<String>) -> Self {
        self.contact_name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn build(self) -> Client {
        Client {
            name: self.name,
            contact_name: self.contact_name,
            email: self.email,
            address: self.address,
        }
    }
}
