//! The `/customers` endpoints.

use reqwest::Method;
use stripe_bindings_core::{
    Customer, CustomerId, CustomerListParams, CustomerParams, FormParams, Params,
};

use crate::client::StripeClient;
use crate::error::StripeError;
use crate::iter::ListIter;

/// Client for the `/customers` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    client: &'a StripeClient,
}

impl<'a> Customers<'a> {
    pub(crate) fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Create a customer.
    ///
    /// `POST /customers`. Default params create a blank customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn create(&self, params: &CustomerParams) -> Result<Customer, StripeError> {
        tracing::debug!(email = ?params.email, "Creating Stripe customer");
        self.client
            .request(
                Method::POST,
                "/customers".to_string(),
                Some(params.to_form()),
                Some(&params.params),
            )
            .await
    }

    /// Retrieve a customer.
    ///
    /// `GET /customers/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the customer does not exist.
    pub async fn get(
        &self,
        id: &CustomerId,
        params: Option<&Params>,
    ) -> Result<Customer, StripeError> {
        self.client
            .request(
                Method::GET,
                format!("/customers/{id}"),
                params.map(FormParams::to_form),
                params,
            )
            .await
    }

    /// Update a customer. Fields left unset are not changed.
    ///
    /// `POST /customers/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn update(
        &self,
        id: &CustomerId,
        params: &CustomerParams,
    ) -> Result<Customer, StripeError> {
        self.client
            .request(
                Method::POST,
                format!("/customers/{id}"),
                Some(params.to_form()),
                Some(&params.params),
            )
            .await
    }

    /// Delete a customer. The returned object has `deleted` set.
    ///
    /// `DELETE /customers/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the customer does not exist.
    pub async fn delete(
        &self,
        id: &CustomerId,
        params: Option<&Params>,
    ) -> Result<Customer, StripeError> {
        tracing::debug!(customer_id = %id, "Deleting Stripe customer");
        self.client
            .request(
                Method::DELETE,
                format!("/customers/{id}"),
                params.map(FormParams::to_form),
                params,
            )
            .await
    }

    /// List customers, newest first.
    ///
    /// `GET /customers`. Pages are fetched as the iterator advances.
    #[must_use]
    pub fn list(&self, params: &CustomerListParams) -> ListIter<Customer> {
        self.client
            .list("/customers", &params.list, params.to_form())
    }
}
