//! Subscription checkout.

use shared::{CheckoutRequest, CheckoutSessionResponse, SubscriptionInterval};

use super::client::ApiClient;
use super::request::ApiRequest;
use crate::core::error::Result;

/// Start a hosted checkout for `interval`. The caller redirects to the returned URL.
#[tracing::instrument(skip(client), fields(interval = interval.as_str()))]
pub async fn create_checkout_session(
    client: &ApiClient,
    interval: SubscriptionInterval,
) -> Result<CheckoutSessionResponse> {
    let request = ApiRequest::post("/api/subscriptions/checkout")
        .json(&CheckoutRequest { interval })?
        .authenticated();

    let session: CheckoutSessionResponse = client.send(request).await?;
    tracing::info!(session_id = %session.session_id, "Checkout session created");
    Ok(session)
}
