mod types;

use std::time::Duration;

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client as AsyncClient, Method};
use serde::Serialize;

pub use self::types::ProbeResponse;
use crate::config::VERSION;

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: String,
    pub ua: String,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let ua = format!(
            "billing_smoke/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        let mut builder = AsyncClient::builder()
            .user_agent(ua.clone())
            .default_headers(headers);

        // no timeout unless asked for, a hung server blocks the run
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            ua,
        })
    }

    /// Turns a response into a [`ProbeResponse`] regardless of its status,
    /// non-2xx answers are data for the caller to look at, not errors.
    pub async fn handle_response(&self, response: reqwest::Response) -> Result<ProbeResponse> {
        let status = response.status();
        let body = response.text().await?;

        log::debug!("response: HTTP {status} ({} bytes)", body.len());

        Ok(ProbeResponse { status, body })
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        data: Option<(reqwest::Body, &str)>,
    ) -> Result<ProbeResponse> {
        let mut request = self.client.request(
            Method::from_bytes(method.as_bytes())?,
            format!("{}{}", self.base_url, path),
        );

        log::debug!("request: {} {} {:?}", method, path, data);

        if let Some((body, content_type)) = data {
            request = request.header(CONTENT_TYPE, content_type);

            // show body in debug mode / when developing
            #[cfg(debug_assertions)]
            log::debug!(
                "request body: {}",
                String::from_utf8_lossy(body.as_bytes().unwrap_or_default())
            );

            request = request.body(body);
        }

        let request = request.build()?;

        #[cfg(debug_assertions)]
        let now = tokio::time::Instant::now();

        let response = self.client.execute(request).await?;

        #[cfg(debug_assertions)]
        log::debug!("response in: {:#?}", now.elapsed());

        self.handle_response(response).await
    }

    pub async fn post_json<T>(&self, path: &str, data: &T) -> Result<ProbeResponse>
    where
        T: Serialize + ?Sized,
    {
        self.request(
            "POST",
            path,
            Some((serde_json::to_vec(data)?.into(), "application/json")),
        )
        .await
    }
}
