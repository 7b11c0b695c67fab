use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use super::billing::{checkout, customer};
use super::hello;
use crate::config::{DEFAULT_CUSTOMER_EMAIL, DEFAULT_CUSTOMER_ID, DEFAULT_CUSTOMER_NAME};
use crate::state::http::HttpClient;
use crate::state::State;
use crate::utils::elapsed_since;

#[derive(Debug, Parser)]
#[clap(about = "Run every check in order, stopping at the first failure")]
pub struct Options {
    #[clap(
        long = "chain",
        help = "Check out the customer created by the previous check instead of the default one"
    )]
    pub chain: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    run(&state.http, options.chain).await
}

pub async fn run(http: &HttpClient, chain: bool) -> Result<()> {
    let started = Instant::now();

    log::info!("Checking the API root");
    hello::run(http).await?;

    log::info!("Creating a customer");
    let created = customer::run(http, DEFAULT_CUSTOMER_NAME, DEFAULT_CUSTOMER_EMAIL).await?;

    let customer_id = checkout_customer_id(chain, created);

    log::info!("Creating a checkout session for `{customer_id}`");
    checkout::run(http, &customer_id).await?;

    log::info!("Ran 3 checks in {}", elapsed_since(started));

    Ok(())
}

fn checkout_customer_id(chain: bool, created: Option<String>) -> String {
    match (chain, created) {
        (true, Some(customer_id)) => customer_id,

        (true, None) => {
            log::warn!(
                "No customer ID in the create customer response, using `{DEFAULT_CUSTOMER_ID}`"
            );

            DEFAULT_CUSTOMER_ID.to_string()
        }

        (false, _) => DEFAULT_CUSTOMER_ID.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::billing::utils::{CREATE_CHECKOUT_SESSION_PATH, CREATE_CUSTOMER_PATH};
    use crate::config::WELCOME_MESSAGE;
    use crate::utils::mock::MockServer;

    fn billing_api(path: &str) -> (u16, String) {
        match path {
            "/" => (200, WELCOME_MESSAGE.to_string()),
            CREATE_CUSTOMER_PATH => (
                201,
                r#"{"customer_id":"cus_CHAINED","name":"John Doe","email":"john.doe@example.com"}"#
                    .to_string(),
            ),
            _ => (500, "Failed to create checkout session".to_string()),
        }
    }

    fn not_welcoming(_path: &str) -> (u16, String) {
        (404, "404 page not found".to_string())
    }

    #[test]
    fn test_checkout_customer_id() {
        assert_eq!(
            checkout_customer_id(true, Some("cus_1".to_string())),
            "cus_1"
        );
        assert_eq!(checkout_customer_id(true, None), DEFAULT_CUSTOMER_ID);
        assert_eq!(
            checkout_customer_id(false, Some("cus_1".to_string())),
            DEFAULT_CUSTOMER_ID
        );
    }

    #[tokio::test]
    async fn test_all_runs_every_check_in_order() {
        let server = MockServer::start(billing_api).await;
        let http = HttpClient::new(&server.base_url, None).unwrap();

        run(&http, false).await.unwrap();

        assert_eq!(
            server.paths(),
            vec!["/", CREATE_CUSTOMER_PATH, CREATE_CHECKOUT_SESSION_PATH]
        );
        assert_eq!(
            server.requests()[2].body,
            r#"{"customer_id":"cus_SDmP6q1aUUZcVJ"}"#
        );
    }

    #[tokio::test]
    async fn test_all_chains_customer_id() {
        let server = MockServer::start(billing_api).await;
        let http = HttpClient::new(&server.base_url, None).unwrap();

        run(&http, true).await.unwrap();

        assert_eq!(server.requests()[2].body, r#"{"customer_id":"cus_CHAINED"}"#);
    }

    #[tokio::test]
    async fn test_all_stops_at_failed_hello() {
        let server = MockServer::start(not_welcoming).await;
        let http = HttpClient::new(&server.base_url, None).unwrap();

        assert!(run(&http, false).await.is_err());
        assert_eq!(server.paths(), vec!["/"]);
    }
}
