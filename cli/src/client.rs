use std::net::{Ipv4Addr, SocketAddr};

use serde::de::DeserializeOwned;
use termfocus_core::messages::{ErrorResponse, EventRequest, EventResponse, SessionsResponse};

use crate::prelude::*;

/// Thin HTTP client for a daemon on the loopback interface.
pub struct DaemonClient {
    http: reqwest::Client,
    base_url: String,
}

impl DaemonClient {
    pub fn new(port: u16) -> Self {
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
        Self {
            http: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    #[instrument(skip(self))]
    pub async fn send_event(&self, request: &EventRequest) -> Result<EventResponse> {
        let url = format!("{}/", self.base_url);
        debug!("Posting event to {url}");
        let res = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| Error::Connecting { url, source })?;
        decode(res).await
    }

    #[instrument(skip(self))]
    pub async fn list_sessions(&self) -> Result<SessionsResponse> {
        let url = format!("{}/sessions", self.base_url);
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::Connecting { url, source })?;
        decode(res).await
    }
}

async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T> {
    let status = res.status();
    if status.is_success() {
        return Ok(res.json().await?);
    }
    let reason = match res.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };
    Err(Error::Rejected {
        status: status.as_u16(),
        reason,
    })
}
