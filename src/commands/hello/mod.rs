use anyhow::{ensure, Result};
use clap::Parser;
use reqwest::StatusCode;

use crate::config::WELCOME_MESSAGE;
use crate::state::http::{HttpClient, ProbeResponse};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Check that the API root answers with its welcome message")]
pub struct Options {}

pub async fn handle(_options: &Options, state: &State) -> Result<()> {
    run(&state.http).await
}

pub async fn run(http: &HttpClient) -> Result<()> {
    let response = http.request("GET", "/", None).await?;

    println!("{}", response.body);

    verify_welcome(&response)
}

pub fn verify_welcome(response: &ProbeResponse) -> Result<()> {
    ensure!(
        response.status == StatusCode::OK,
        "Expected HTTP 200 from `/`, got HTTP {}",
        response.status.as_u16()
    );

    ensure!(
        response.body == WELCOME_MESSAGE,
        "Expected `{WELCOME_MESSAGE}` from `/`, got `{}`",
        response.body
    );

    Ok(())
}
