//! The HTTP transport shared by every resource client.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use stripe_bindings_core::{ApiErrorKind, ErrorResponse, Form, Params};
use url::Url;

use crate::config::ClientConfig;
use crate::error::StripeError;

/// A single API call, before transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path below the API base, starting with `/`.
    pub path: String,
    /// Secret API key.
    pub key: String,
    /// Request parameters. Sent as the query for `GET`/`DELETE`, as the body otherwise.
    pub form: Option<Form>,
    /// `Idempotency-Key` header.
    pub idempotency_key: Option<String>,
    /// `Stripe-Account` header.
    pub stripe_account: Option<String>,
}

impl ApiRequest {
    /// Create a request without parameters.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            key: key.into(),
            form: None,
            idempotency_key: None,
            stripe_account: None,
        }
    }

    /// Attach form parameters.
    #[must_use]
    pub fn with_form(mut self, form: Option<Form>) -> Self {
        self.form = form;
        self
    }

    /// Copy header-borne parameters (idempotency key, connected account).
    #[must_use]
    pub fn with_params(mut self, params: Option<&Params>) -> Self {
        if let Some(params) = params {
            self.idempotency_key.clone_from(&params.idempotency_key);
            self.stripe_account.clone_from(&params.stripe_account);
        }
        self
    }

    fn params_in_query(&self) -> bool {
        self.method == Method::GET || self.method == Method::DELETE
    }
}

/// Transport used to issue authenticated requests to the API.
///
/// Implementations return the raw JSON body of a successful response and map
/// every other response to [`StripeError`].
#[async_trait]
pub trait Backend: Send + Sync + fmt::Debug {
    /// Perform the request.
    async fn call(&self, request: ApiRequest) -> Result<String, StripeError>;
}

/// [`Backend`] over a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    api_base: String,
    api_version: Option<String>,
    user_agent: String,
    auto_idempotency_keys: bool,
}

impl HttpBackend {
    /// Build a backend from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, StripeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            user_agent: config.user_agent.clone(),
            auto_idempotency_keys: config.auto_idempotency_keys,
        })
    }

    fn url(&self, request: &ApiRequest) -> Result<Url, StripeError> {
        let mut url = Url::parse(&format!("{}{}", self.api_base, request.path))?;
        if request.params_in_query() {
            if let Some(form) = request.form.as_ref().filter(|f| !f.is_empty()) {
                url.query_pairs_mut().extend_pairs(form.iter());
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn call(&self, request: ApiRequest) -> Result<String, StripeError> {
        if request.key.trim().is_empty() {
            return Err(StripeError::Configuration(
                "no API key provided; set one on the client".into(),
            ));
        }

        let url = self.url(&request)?;
        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .basic_auth(&request.key, Option::<&str>::None)
            .header(USER_AGENT, &self.user_agent);

        if let Some(version) = &self.api_version {
            builder = builder.header("Stripe-Version", version);
        }

        let idempotency_key = request.idempotency_key.clone().or_else(|| {
            (self.auto_idempotency_keys && request.method == Method::POST)
                .then(|| uuid::Uuid::new_v4().to_string())
        });
        if let Some(key) = idempotency_key {
            builder = builder.header("Idempotency-Key", key);
        }
        if let Some(account) = &request.stripe_account {
            builder = builder.header("Stripe-Account", account);
        }

        if !request.params_in_query() {
            if let Some(form) = request.form.as_ref().filter(|f| !f.is_empty()) {
                builder = builder
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(form.encode());
            }
        }

        tracing::debug!(method = %request.method, path = %request.path, "Sending Stripe request");

        let response = builder.send().await?;
        let status = response.status();
        let request_id = response
            .headers()
            .get("request-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.text().await?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = status.as_u16(),
            request_id = ?request_id,
            "Received Stripe response"
        );

        if status.is_success() {
            return Ok(body);
        }

        let err = api_error(status, request_id, &body);
        if let StripeError::Api {
            kind,
            code,
            request_id,
            ..
        } = &err
        {
            tracing::warn!(
                status = status.as_u16(),
                kind = %kind,
                code = ?code,
                request_id = ?request_id,
                path = %request.path,
                "Stripe API returned an error"
            );
        }
        Err(err)
    }
}

/// Convert an error response into [`StripeError::Api`].
fn api_error(status: StatusCode, request_id: Option<String>, body: &str) -> StripeError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(response) => StripeError::Api {
            status: status.as_u16(),
            kind: response.error.kind,
            message: response
                .error
                .message
                .unwrap_or_else(|| format!("HTTP {status}")),
            code: response.error.code,
            param: response.error.param,
            decline_code: response.error.decline_code,
            request_id,
        },
        Err(_) => StripeError::Api {
            status: status.as_u16(),
            kind: ApiErrorKind::Unknown,
            message: format!("HTTP {status}"),
            code: None,
            param: None,
            decline_code: None,
            request_id,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(api_base: &str) -> HttpBackend {
        HttpBackend::new(&ClientConfig::new("sk_test_123").with_api_base(api_base)).unwrap()
    }

    #[test]
    fn get_params_go_in_query() {
        let mut form = Form::new();
        form.add("limit", "3");
        form.add("expand[]", "data.customer");
        let request =
            ApiRequest::new(Method::GET, "/customers", "sk_test_123").with_form(Some(form));

        let url = backend("https://api.stripe.com/v1").url(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.stripe.com/v1/customers?limit=3&expand%5B%5D=data.customer"
        );
    }

    #[test]
    fn post_params_stay_out_of_query() {
        let mut form = Form::new();
        form.add("amount", "100");
        let request =
            ApiRequest::new(Method::POST, "/transfers", "sk_test_123").with_form(Some(form));

        let url = backend("https://api.stripe.com/v1/").url(&request).unwrap();
        assert_eq!(url.as_str(), "https://api.stripe.com/v1/transfers");
    }

    #[test]
    fn empty_form_adds_no_query() {
        let request = ApiRequest::new(Method::DELETE, "/customers/cus_1", "sk_test_123")
            .with_form(Some(Form::new()));
        let url = backend("https://api.stripe.com/v1").url(&request).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn header_params_are_copied() {
        let params = Params::default()
            .with_idempotency_key("idem-1")
            .for_account("acct_1");
        let request =
            ApiRequest::new(Method::POST, "/transfers", "sk_test_123").with_params(Some(&params));

        assert_eq!(request.idempotency_key.as_deref(), Some("idem-1"));
        assert_eq!(request.stripe_account.as_deref(), Some("acct_1"));
    }

    #[test]
    fn undecodable_error_body_is_unknown() {
        let err = api_error(StatusCode::BAD_GATEWAY, None, "<html>bad gateway</html>");
        assert_eq!(err.kind(), Some(ApiErrorKind::Unknown));
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn error_body_is_decoded() {
        let err = api_error(
            StatusCode::PAYMENT_REQUIRED,
            Some("req_1".into()),
            r#"{"error":{"type":"card_error","message":"Your card was declined.","decline_code":"insufficient_funds"}}"#,
        );
        match err {
            StripeError::Api {
                kind,
                decline_code,
                request_id,
                ..
            } => {
                assert_eq!(kind, ApiErrorKind::CardError);
                assert_eq!(decline_code.as_deref(), Some("insufficient_funds"));
                assert_eq!(request_id.as_deref(), Some("req_1"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_body_without_type_keeps_message() {
        let err = api_error(
            StatusCode::BAD_REQUEST,
            None,
            r#"{"error":{"message":"Invalid integer: abc","param":"amount"}}"#,
        );
        match err {
            StripeError::Api {
                kind,
                message,
                param,
                ..
            } => {
                assert_eq!(kind, ApiErrorKind::Unknown);
                assert_eq!(message, "Invalid integer: abc");
                assert_eq!(param.as_deref(), Some("amount"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
