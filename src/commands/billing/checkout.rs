use anyhow::Result;
use clap::Parser;

use super::types::{CheckoutSessionRequest, CheckoutSessionResponse};
use super::utils::create_checkout_session;
use crate::config::DEFAULT_CUSTOMER_ID;
use crate::state::http::HttpClient;
use crate::state::State;
use crate::utils::browser::open_url;

#[derive(Debug, Parser)]
#[clap(about = "Create a checkout session for a customer and print what the API answers")]
pub struct Options {
    #[clap(
        long = "customer-id",
        help = "ID of the customer to check out",
        default_value = DEFAULT_CUSTOMER_ID
    )]
    pub customer_id: String,

    #[clap(long = "open", help = "Open the checkout session URL in a browser")]
    pub open: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            customer_id: DEFAULT_CUSTOMER_ID.to_string(),
            open: false,
        }
    }
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let session = run(&state.http, &options.customer_id).await?;

    if options.open {
        match session {
            Some(session) => open_url(&session.session_url),
            None => log::warn!("The response did not contain a checkout session URL"),
        }
    }

    Ok(())
}

/// Never fails on the API's answer, only on transport errors.
pub async fn run(http: &HttpClient, customer_id: &str) -> Result<Option<CheckoutSessionResponse>> {
    let request = CheckoutSessionRequest {
        customer_id: customer_id.to_string(),
    };

    let response = create_checkout_session(http, &request).await?;

    response.print();

    if !response.status.is_success() {
        return Ok(None);
    }

    let session = response.json::<CheckoutSessionResponse>().ok();

    if let Some(ref session) = session {
        log::debug!(
            "Checkout session {} for {customer_id}: {}",
            session.session_id,
            session.session_url
        );
    }

    Ok(session)
}
