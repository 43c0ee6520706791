//! REST client for the poem store.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call fails with a transport error,
//! since the store is only reachable from the browser page.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, HTTP status codes and response envelopes are all folded
//! into `RemoteError` by the shared `poems::protocol` decoders, so the browser
//! and the CLI report failures identically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use poems::protocol::{self, Endpoint};
use poems::{PoemStore, RemoteError};

use crate::config::ApiConfig;

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "poem store is only reachable from the browser";

/// `PoemStore` backed by the browser's fetch API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpPoemStore {
    base_url: String,
}

impl HttpPoemStore {
    pub fn new(config: ApiConfig) -> Self {
        Self { base_url: config.base_url.to_owned() }
    }

    fn url(&self, endpoint: Endpoint<'_>) -> String {
        endpoint.url(&self.base_url)
    }

    /// Send one request and hand back the raw status and body.
    async fn send(&self, endpoint: Endpoint<'_>, form: Option<String>) -> Result<(u16, String), RemoteError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use poems::protocol::Method;

            let url = self.url(endpoint);
            let builder = match endpoint.method() {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Delete => Request::delete(&url),
            };
            let request = match form {
                Some(body) => builder
                    .header("Content-Type", protocol::FORM_CONTENT_TYPE)
                    .body(body)
                    .map_err(transport)?,
                None => builder.build().map_err(transport)?,
            };
            let resp = request.send().await.map_err(transport)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport)?;
            Ok((status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (self.url(endpoint), form);
            Err(RemoteError::Transport(UNAVAILABLE.to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> RemoteError {
    RemoteError::Transport(err.to_string())
}

#[async_trait(?Send)]
impl PoemStore for HttpPoemStore {
    async fn generate(&self, line_count: u32) -> Result<Vec<String>, RemoteError> {
        let lines = line_count.to_string();
        let (status, body) = self.send(Endpoint::Generate, Some(protocol::form_body(&[("lines", &lines)]))).await?;
        protocol::decode_lines(status, &body)
    }

    async fn save(&self, title: &str) -> Result<(), RemoteError> {
        let (status, body) = self.send(Endpoint::Save, Some(protocol::form_body(&[("title", title)]))).await?;
        protocol::decode_ack(status, &body)
    }

    async fn list_titles(&self) -> Result<Vec<String>, RemoteError> {
        let (status, body) = self.send(Endpoint::List, None).await?;
        protocol::decode_lines(status, &body)
    }

    async fn fetch_poem(&self, title: &str) -> Result<Vec<String>, RemoteError> {
        let (status, body) = self.send(Endpoint::Fetch(title), None).await?;
        protocol::decode_poem(title, status, &body)
    }

    async fn delete_poem(&self, title: &str) -> Result<(), RemoteError> {
        let (status, body) = self.send(Endpoint::Delete(title), None).await?;
        protocol::decode_ack(status, &body)
    }

    async fn import_poem(&self, title: &str, raw_content: &str) -> Result<(), RemoteError> {
        let form = protocol::form_body(&[("title", title), ("content", raw_content)]);
        let (status, body) = self.send(Endpoint::Import, Some(form)).await?;
        protocol::decode_ack(status, &body)
    }
}
