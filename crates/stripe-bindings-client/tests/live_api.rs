//! Smoke tests against the real Stripe API in test mode.
//!
//! These tests require a Stripe test key in `STRIPE_API_KEY` or
//! `.secrets/stripe.json`.
//!
//! Run with: `cargo test --test live_api -- --ignored --nocapture`

use stripe_bindings_client::{CustomerListParams, CustomerParams, ListParams, StripeClient};

fn live_client() -> StripeClient {
    StripeClient::from_env().expect("Stripe credentials not found")
}

#[tokio::test]
#[ignore = "requires Stripe API credentials"]
async fn customer_lifecycle() {
    let client = live_client();
    let email = format!("test-{}@example.com", uuid::Uuid::new_v4());

    let customer = client
        .customers()
        .create(&CustomerParams {
            email: Some(email.clone()),
            name: Some("Test User".to_string()),
            ..CustomerParams::default()
        })
        .await
        .expect("Failed to create customer");
    println!("Created Stripe customer: {}", customer.id);
    assert_eq!(customer.email.as_deref(), Some(email.as_str()));

    let fetched = client
        .customers()
        .get(&customer.id, None)
        .await
        .expect("Failed to fetch customer");
    assert_eq!(fetched.id, customer.id);

    let deleted = client
        .customers()
        .delete(&customer.id, None)
        .await
        .expect("Failed to delete customer");
    assert!(deleted.deleted);
}

#[tokio::test]
#[ignore = "requires Stripe API credentials"]
async fn list_customers_first_page() {
    let client = live_client();
    let params = CustomerListParams {
        list: ListParams::default().with_limit(3).single_page(),
        ..CustomerListParams::default()
    };

    let customers = client
        .customers()
        .list(&params)
        .collect_all()
        .await
        .expect("Failed to list customers");
    assert!(customers.len() <= 3);
}
