//! Async client for the Stripe REST API.
//!
//! Each resource client turns typed parameters into a form-encoded request,
//! sends it through a shared [`Backend`], and decodes the JSON response into
//! a typed object. List endpoints return a [`ListIter`] that fetches pages on
//! demand.
//!
//! # Example
//!
//! ```no_run
//! use stripe_bindings_client::{CustomerListParams, CustomerParams, StripeClient};
//!
//! # async fn example() -> Result<(), stripe_bindings_client::StripeError> {
//! let client = StripeClient::new("sk_test_...")?;
//!
//! let customer = client
//!     .customers()
//!     .create(&CustomerParams {
//!         email: Some("foo@example.com".to_string()),
//!         ..CustomerParams::default()
//!     })
//!     .await?;
//! println!("Created customer {}", customer.id);
//!
//! let mut customers = client.customers().list(&CustomerListParams::default());
//! while let Some(customer) = customers.try_next().await? {
//!     println!("{} {:?}", customer.id, customer.email);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod backend;
mod client;
mod config;
mod customers;
mod error;
mod iter;
mod transfers;

pub use backend::{ApiRequest, Backend, HttpBackend};
pub use client::StripeClient;
pub use config::{ClientConfig, DEFAULT_API_BASE};
pub use customers::Customers;
pub use error::StripeError;
pub use iter::{ListIter, PageFuture};
pub use transfers::Transfers;

pub use stripe_bindings_core::{
    Address, AddressParams, ApiErrorKind, Currency, Customer, CustomerId, CustomerListParams,
    CustomerParams, Expandable, Filters, Form, FormParams, IdError, List, ListMeta, ListParams,
    Object, Params, RangeQuery, RecipientId, ShippingDetails, ShippingDetailsParams, Transfer, TransferId,
    TransferListParams, TransferParams, TransferStatus, TransferType, TransferUpdateParams,
};
