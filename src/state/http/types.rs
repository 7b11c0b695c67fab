use anyhow::Result;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Raw outcome of a single call against the billing API.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ProbeResponse {
    pub fn json<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Body first, then the bare status code.
    pub fn print(&self) {
        println!("{}", self.body);
        println!("{}", self.status.as_u16());
    }
}
