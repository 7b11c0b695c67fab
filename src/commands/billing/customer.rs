use anyhow::Result;
use clap::Parser;

use super::types::{CustomerCreationRequest, CustomerResponse};
use super::utils::create_customer;
use crate::config::{DEFAULT_CUSTOMER_EMAIL, DEFAULT_CUSTOMER_NAME};
use crate::state::http::HttpClient;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Create a customer and print what the API answers")]
pub struct Options {
    #[clap(long = "name", help = "Name of the customer", default_value = DEFAULT_CUSTOMER_NAME)]
    pub name: String,

    #[clap(
        long = "email",
        help = "Email of the customer",
        default_value = DEFAULT_CUSTOMER_EMAIL
    )]
    pub email: String,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    run(&state.http, &options.name, &options.email).await?;

    Ok(())
}

/// Never fails on the API's answer, only on transport errors.
/// Returns the new customer's ID when the API reported one.
pub async fn run(http: &HttpClient, name: &str, email: &str) -> Result<Option<String>> {
    let request = CustomerCreationRequest {
        name: name.to_string(),
        email: email.to_string(),
    };

    let response = create_customer(http, &request).await?;

    response.print();

    if !response.status.is_success() {
        return Ok(None);
    }

    match response.json::<CustomerResponse>() {
        Ok(customer) => {
            log::debug!(
                "Created customer `{}` ({}) with ID {}",
                customer.name,
                customer.email,
                customer.customer_id
            );

            Ok(Some(customer.customer_id))
        }

        Err(error) => {
            log::debug!("Could not parse customer response: {error}");

            Ok(None)
        }
    }
}
