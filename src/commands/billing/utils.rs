use anyhow::Result;

use super::types::{CheckoutSessionRequest, CustomerCreationRequest};
use crate::state::http::{HttpClient, ProbeResponse};

pub const CREATE_CUSTOMER_PATH: &str = "/billing/create-customer";
pub const CREATE_CHECKOUT_SESSION_PATH: &str = "/billing/create-checkout-session";

pub async fn create_customer(
    http: &HttpClient,
    request: &CustomerCreationRequest,
) -> Result<ProbeResponse> {
    http.post_json(CREATE_CUSTOMER_PATH, request).await
}

pub async fn create_checkout_session(
    http: &HttpClient,
    request: &CheckoutSessionRequest,
) -> Result<ProbeResponse> {
    http.post_json(CREATE_CHECKOUT_SESSION_PATH, request).await
}
