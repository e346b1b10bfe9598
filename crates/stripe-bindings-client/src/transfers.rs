//! The `/transfers` endpoints.

use reqwest::Method;
use stripe_bindings_core::{
    FormParams, Params, Transfer, TransferId, TransferListParams, TransferParams,
    TransferUpdateParams,
};

use crate::client::StripeClient;
use crate::error::StripeError;
use crate::iter::ListIter;

/// Client for the `/transfers` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Transfers<'a> {
    client: &'a StripeClient,
}

impl<'a> Transfers<'a> {
    pub(crate) fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Send a transfer.
    ///
    /// `POST /transfers`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn create(&self, params: &TransferParams) -> Result<Transfer, StripeError> {
        tracing::debug!(
            amount = params.amount,
            currency = %params.currency,
            recipient = %params.recipient,
            "Creating Stripe transfer"
        );
        self.client
            .request(
                Method::POST,
                "/transfers".to_string(),
                Some(params.to_form()),
                Some(&params.params),
            )
            .await
    }

    /// Retrieve a transfer.
    ///
    /// `GET /transfers/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the transfer does not exist.
    pub async fn get(
        &self,
        id: &TransferId,
        params: Option<&Params>,
    ) -> Result<Transfer, StripeError> {
        self.client
            .request(
                Method::GET,
                format!("/transfers/{id}"),
                params.map(FormParams::to_form),
                params,
            )
            .await
    }

    /// Update a transfer's description or metadata.
    ///
    /// `POST /transfers/:id`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Stripe rejects it.
    pub async fn update(
        &self,
        id: &TransferId,
        params: &TransferUpdateParams,
    ) -> Result<Transfer, StripeError> {
        self.client
            .request(
                Method::POST,
                format!("/transfers/{id}"),
                Some(params.to_form()),
                Some(&params.params),
            )
            .await
    }

    /// Cancel a pending transfer.
    ///
    /// `POST /transfers/:id/cancel`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the transfer can no longer be canceled.
    pub async fn cancel(
        &self,
        id: &TransferId,
        params: Option<&Params>,
    ) -> Result<Transfer, StripeError> {
        tracing::debug!(transfer_id = %id, "Canceling Stripe transfer");
        self.client
            .request(
                Method::POST,
                format!("/transfers/{id}/cancel"),
                params.map(FormParams::to_form),
                params,
            )
            .await
    }

    /// List transfers, newest first.
    ///
    /// `GET /transfers`. Pages are fetched as the iterator advances.
    #[must_use]
    pub fn list(&self, params: &TransferListParams) -> ListIter<Transfer> {
        self.client
            .list("/transfers", &params.list, params.to_form())
    }
}
