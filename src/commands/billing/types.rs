use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone)]
pub struct CustomerCreationRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CustomerResponse {
    pub customer_id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct CheckoutSessionRequest {
    pub customer_id: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CheckoutSessionResponse {
    pub session_id: String,
    pub session_url: String,
}
