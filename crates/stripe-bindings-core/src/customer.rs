//! Customer objects and the parameters for the `/customers` endpoints.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::expandable::Expandable;
use crate::form::{Form, FormParams};
use crate::ids::CustomerId;
use crate::list::Object;
use crate::params::{ListParams, Params, RangeQuery};

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Address line 1 (street, PO box, or company name).
    #[serde(default)]
    pub line1: Option<String>,
    /// Address line 2 (apartment, suite, unit, or building).
    #[serde(default)]
    pub line2: Option<String>,
    /// City, district, suburb, town, or village.
    #[serde(default)]
    pub city: Option<String>,
    /// State, county, province, or region.
    #[serde(default)]
    pub state: Option<String>,
    /// ZIP or postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Two-letter country code.
    #[serde(default)]
    pub country: Option<String>,
}

/// Shipping information attached to a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    /// Recipient name.
    #[serde(default)]
    pub name: Option<String>,
    /// Recipient phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Shipping address.
    #[serde(default)]
    pub address: Option<Address>,
}

/// A Stripe customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer ID.
    pub id: CustomerId,
    /// Object type (always "customer").
    #[serde(default)]
    pub object: String,
    /// Whether the object exists in live mode.
    #[serde(default)]
    pub livemode: bool,
    /// Creation time.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Customer email.
    #[serde(default)]
    pub email: Option<String>,
    /// Customer name.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Balance in the smallest currency unit. Negative is credit.
    #[serde(default)]
    pub balance: i64,
    /// Currency the customer is billed in.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Whether the latest invoice is past due.
    #[serde(default)]
    pub delinquent: bool,
    /// Default payment source, as an id or the expanded source object.
    #[serde(default)]
    pub default_source: Option<Expandable<serde_json::Value>>,
    /// Prefix for generated invoice numbers.
    #[serde(default)]
    pub invoice_prefix: Option<String>,
    /// Metadata attached to the customer.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// Shipping information.
    #[serde(default)]
    pub shipping: Option<ShippingDetails>,
    /// Set on the response to a delete.
    #[serde(default)]
    pub deleted: bool,
}

impl Object for Customer {
    fn object_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Address fields accepted when creating or updating a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParams {
    /// Address line 1.
    pub line1: Option<String>,
    /// Address line 2.
    pub line2: Option<String>,
    /// City.
    pub city: Option<String>,
    /// State or region.
    pub state: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Two-letter country code.
    pub country: Option<String>,
}

impl AddressParams {
    fn append_under(&self, prefix: &str, form: &mut Form) {
        let fields = [
            ("line1", &self.line1),
            ("line2", &self.line2),
            ("city", &self.city),
            ("state", &self.state),
            ("postal_code", &self.postal_code),
            ("country", &self.country),
        ];
        for (field, value) in fields {
            form.add_opt(&format!("{prefix}[{field}]"), value.as_deref());
        }
    }
}

/// Shipping fields accepted when creating or updating a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingDetailsParams {
    /// Recipient name.
    pub name: String,
    /// Recipient phone number.
    pub phone: Option<String>,
    /// Shipping address.
    pub address: AddressParams,
}

/// Parameters for `POST /customers` and `POST /customers/:id`.
///
/// Every field is optional; an empty value creates a blank customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerParams {
    /// Balance in the smallest currency unit.
    pub balance: Option<i64>,
    /// Free-form description.
    pub description: Option<String>,
    /// Customer email.
    pub email: Option<String>,
    /// Customer name.
    pub name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Prefix for generated invoice numbers.
    pub invoice_prefix: Option<String>,
    /// Payment source token to attach.
    pub source: Option<String>,
    /// Shipping information.
    pub shipping: Option<ShippingDetailsParams>,
    /// Common request parameters.
    pub params: Params,
}

impl FormParams for CustomerParams {
    fn append_to(&self, form: &mut Form) {
        form.add_opt("balance", self.balance);
        form.add_opt("description", self.description.as_deref());
        form.add_opt("email", self.email.as_deref());
        form.add_opt("name", self.name.as_deref());
        form.add_opt("phone", self.phone.as_deref());
        form.add_opt("invoice_prefix", self.invoice_prefix.as_deref());
        form.add_opt("source", self.source.as_deref());

        if let Some(shipping) = &self.shipping {
            form.add("shipping[name]", shipping.name.as_str());
            form.add_opt("shipping[phone]", shipping.phone.as_deref());
            shipping.address.append_under("shipping[address]", form);
        }

        self.params.append_to(form);
    }
}

/// Parameters for `GET /customers`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerListParams {
    /// Only return customers with this email.
    pub email: Option<String>,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Pagination and common parameters.
    pub list: ListParams,
}

impl FormParams for CustomerListParams {
    fn append_to(&self, form: &mut Form) {
        form.add_opt("email", self.email.as_deref());
        if let Some(created) = &self.created {
            created.append_to("created", form);
        }
        self.list.append_to(form);
    }
}
