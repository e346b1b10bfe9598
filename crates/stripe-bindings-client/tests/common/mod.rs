//! Common test utilities for the Stripe client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use serde_json::{json, Value};
use stripe_bindings_client::{ClientConfig, StripeClient};
use wiremock::MockServer;

/// API key every test client authenticates with.
pub const TEST_API_KEY: &str = "sk_test_123";

/// A mock Stripe API and a client pointed at it.
pub struct TestHarness {
    /// The mock server standing in for `api.stripe.com`.
    pub server: MockServer,
    /// Client configured against the mock server.
    pub client: StripeClient,
}

impl TestHarness {
    /// Start a mock server and build a client for it.
    pub async fn new() -> Self {
        Self::with_config(|config| config).await
    }

    /// Start a mock server and build a client after adjusting the config.
    pub async fn with_config(adjust: impl FnOnce(ClientConfig) -> ClientConfig) -> Self {
        let server = MockServer::start().await;
        let config = adjust(
            ClientConfig::new(TEST_API_KEY).with_api_base(format!("{}/v1", server.uri())),
        );
        let client = StripeClient::with_config(&config).expect("Failed to build client");

        Self { server, client }
    }
}

/// A customer as the API returns it.
pub fn customer_json(id: &str) -> Value {
    json!({
        "id": id,
        "object": "customer",
        "livemode": false,
        "created": 1_700_000_000,
        "email": "foo@example.com",
        "name": null,
        "balance": 0,
        "delinquent": false,
        "metadata": {},
        "shipping": null
    })
}

/// A transfer as the API returns it.
pub fn transfer_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "object": "transfer",
        "livemode": false,
        "amount": 1000,
        "amount_reversed": 0,
        "currency": "usd",
        "created": 1_400_000_000,
        "date": 1_400_086_400,
        "description": "payout",
        "status": status,
        "type": "bank_account",
        "recipient": "rp_123",
        "balance_transaction": "txn_123",
        "metadata": {}
    })
}

/// A list envelope.
pub fn list_json(url: &str, data: Vec<Value>, has_more: bool) -> Value {
    json!({
        "object": "list",
        "url": url,
        "has_more": has_more,
        "data": data
    })
}

/// An error envelope.
pub fn error_json(kind: &str, message: &str, code: Option<&str>) -> Value {
    json!({
        "error": {
            "type": kind,
            "message": message,
            "code": code
        }
    })
}
