//! `PoemStore` over `reqwest`.
//!
//! Requests and responses go through the same `poems::protocol` encoders and
//! decoders as the browser client, so both report failures identically.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use async_trait::async_trait;
use poems::protocol::{self, Endpoint, Method};
use poems::{PoemStore, RemoteError};
use reqwest::header::CONTENT_TYPE;

#[derive(Clone, Debug)]
pub struct ReqwestPoemStore {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestPoemStore {
    /// # Errors
    ///
    /// Returns the builder error when the HTTP client cannot be set up.
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url: base_url.to_owned() })
    }

    async fn send(&self, endpoint: Endpoint<'_>, form: Option<String>) -> Result<(u16, String), RemoteError> {
        let method = match endpoint.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };
        let url = endpoint.url(&self.base_url);
        tracing::debug!(%method, %url, "poem store request");

        let request = self.client.request(method, &url);
        let request = if let Some(body) = form {
            request.header(CONTENT_TYPE, protocol::FORM_CONTENT_TYPE).body(body)
        } else {
            request
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        Ok((status, body))
    }
}

fn transport(err: reqwest::Error) -> RemoteError {
    RemoteError::Transport(err.to_string())
}

#[async_trait(?Send)]
impl PoemStore for ReqwestPoemStore {
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
