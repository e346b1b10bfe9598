//! Core types for the Stripe bindings.
//!
//! This crate holds everything that does not touch the network:
//!
//! - **Identifiers**: `CustomerId`, `TransferId`, `RecipientId`
//! - **Resources**: `Customer`, `Transfer`, the list envelope `List<T>`, and
//!   `Expandable<T>` for fields that `expand[]` can turn into objects
//! - **Parameters**: `Params`, `ListParams` and the per-resource params
//! - **Form encoding**: `Form` and the `FormParams` trait
//! - **Error payloads**: `ErrorResponse`, `ApiErrorKind`
//!
//! # Amounts
//!
//! Amounts are `i64` in the smallest unit of the currency (cents for USD),
//! exactly as the API sends them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod currency;
pub mod customer;
pub mod error;
pub mod expandable;
pub mod form;
pub mod ids;
pub mod list;
pub mod params;
pub mod transfer;

pub use currency::Currency;
pub use customer::{
    Address, AddressParams, Customer, CustomerListParams, CustomerParams, ShippingDetails,
    ShippingDetailsParams,
};
pub use error::{ApiErrorKind, ErrorDetail, ErrorResponse};
pub use expandable::Expandable;
pub use form::{Form, FormParams};
pub use ids::{CustomerId, IdError, RecipientId, TransferId};
pub use list::{List, ListMeta, Object};
pub use params::{Filters, ListParams, Params, RangeQuery, MAX_LIST_LIMIT};
pub use transfer::{
    Transfer, TransferListParams, TransferParams, TransferStatus, TransferType,
    TransferUpdateParams,
};
