//! Stripe API client.

use std::fmt;
use std::sync::Arc;

use futures::FutureExt;
use reqwest::Method;
use serde::de::DeserializeOwned;
use stripe_bindings_core::{Form, List, ListParams, Object, Params};

use crate::backend::{ApiRequest, Backend, HttpBackend};
use crate::config::ClientConfig;
use crate::customers::Customers;
use crate::error::StripeError;
use crate::iter::ListIter;
use crate::transfers::Transfers;

/// Stripe API client.
///
/// Cheap to clone: clones share the same backend and connection pool.
#[derive(Clone)]
pub struct StripeClient {
    backend: Arc<dyn Backend>,
    api_key: String,
}

impl fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripeClient")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl StripeClient {
    /// Create a client for the live API with default settings.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Stripe secret API key (`sk_test_...` or `sk_live_...`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, StripeError> {
        Self::with_config(&ClientConfig::new(api_key))
    }

    /// Create a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_config(config: &ClientConfig) -> Result<Self, StripeError> {
        let backend = HttpBackend::new(config)?;
        Ok(Self::with_backend(Arc::new(backend), config.api_key.clone()))
    }

    /// Create a client from the secrets file and environment.
    ///
    /// See [`ClientConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, StripeError> {
        Self::with_config(&ClientConfig::from_env()?)
    }

    /// Create a client over a custom transport.
    #[must_use]
    pub fn with_backend(backend: Arc<dyn Backend>, api_key: impl Into<String>) -> Self {
        Self {
            backend,
            api_key: api_key.into(),
        }
    }

    /// The `/customers` endpoints.
    #[must_use]
    pub fn customers(&self) -> Customers<'_> {
        Customers::new(self)
    }

    /// The `/transfers` endpoints.
    #[must_use]
    pub fn transfers(&self) -> Transfers<'_> {
        Transfers::new(self)
    }

    /// Issue a request and decode the JSON response.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: String,
        form: Option<Form>,
        params: Option<&Params>,
    ) -> Result<T, StripeError> {
        let request = ApiRequest::new(method, path, self.api_key.as_str())
            .with_form(form)
            .with_params(params);
        let body = self.backend.call(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Build a lazy iterator over `GET path`.
    pub(crate) fn list<T>(&self, path: &'static str, list: &ListParams, form: Form) -> ListIter<T>
    where
        T: Object + DeserializeOwned + Send + 'static,
    {
        let client = self.clone();
        let params = list.params.clone();
        ListIter::new(list, form, move |form| {
            let client = client.clone();
            let params = params.clone();
            async move {
                client
                    .request::<List<T>>(Method::GET, path.to_string(), Some(form), Some(&params))
                    .await
            }
            .boxed()
        })
    }
}
