pub mod http;

use std::time::Duration;

use anyhow::Result;

use self::http::HttpClient;

#[derive(Debug)]
pub struct State {
    pub http: HttpClient,
}

pub struct StateOptions {
    pub base_url: String,
    pub timeout: Option<u64>,
}

impl State {
    pub fn new(options: StateOptions) -> Result<Self> {
        let http = HttpClient::new(
            &options.base_url,
            options.timeout.map(Duration::from_secs),
        )?;

        log::debug!("Using billing API at {}", http.base_url);

        Ok(State { http })
    }
}
