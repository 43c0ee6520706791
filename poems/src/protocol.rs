//! Wire contract of the poem store.
//!
//! Every endpoint answers with the same JSON envelope:
//! `{"status": "success" | "error", "message": "...", "data": [...]}`.
//! Transports (`gloo-net` in the browser, `reqwest` in the CLI) only move
//! bytes; building requests and decoding responses happens here so both
//! behave identically.

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;

use serde::{Deserialize, Serialize};

use crate::error::RemoteError;

/// Content type of every request body sent to the store.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Outcome marker of a response envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Response body shared by all endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: EnvelopeStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<String>,
}

/// HTTP method of an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// One remote operation, with whatever identifies its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Generate,
    Save,
    List,
    Fetch(&'a str),
    Delete(&'a str),
    Import,
}

impl Endpoint<'_> {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Generate | Self::Save | Self::Import => Method::Post,
            Self::List | Self::Fetch(_) => Method::Get,
            Self::Delete(_) => Method::Delete,
        }
    }

    /// Path relative to the store's base URL, with titles URL-escaped.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Generate => "/generate".to_owned(),
            Self::Save => "/save".to_owned(),
            Self::List => "/poems".to_owned(),
            Self::Import => "/import".to_owned(),
            Self::Fetch(title) | Self::Delete(title) => format!("/poem/{}", urlencoding::encode(title)),
        }
    }

    /// Full URL under `base`, tolerating a trailing slash on the base.
    #[must_use]
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

/// Encode `fields` as an `application/x-www-form-urlencoded` body.
#[must_use]
pub fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a response carrying lines or titles.
///
/// # Errors
///
/// Returns a [`RemoteError`] for non-success statuses, undecodable bodies and
/// error envelopes.
pub fn decode_lines(status: u16, body: &str) -> Result<Vec<String>, RemoteError> {
    decode(status, body).map(|envelope| envelope.data)
}

/// Decode a response whose only payload is the success marker.
///
/// # Errors
///
/// Same as [`decode_lines`].
pub fn decode_ack(status: u16, body: &str) -> Result<(), RemoteError> {
    decode(status, body).map(|_| ())
}

/// Decode the response to a single-poem fetch; a rejection means the store
/// has no poem under `title`.
///
/// # Errors
///
/// Returns [`RemoteError::NotFound`] for an error envelope, otherwise as
/// [`decode_lines`].
pub fn decode_poem(title: &str, status: u16, body: &str) -> Result<Vec<String>, RemoteError> {
    decode_lines(status, body).map_err(|err| match err {
        RemoteError::Rejected { message } => RemoteError::NotFound { title: title.to_owned(), message },
        RemoteError::Status(404) => RemoteError::NotFound { title: title.to_owned(), message: String::new() },
        other => other,
    })
}

fn decode(status: u16, body: &str) -> Result<Envelope, RemoteError> {
    let parsed = serde_json::from_str::<Envelope>(body);
    if !(200..300).contains(&status) {
        // Error envelopes may ride on a failing status; keep their message.
        return match parsed {
            Ok(Envelope { status: EnvelopeStatus::Error, message: Some(message), .. }) => {
                Err(RemoteError::Rejected { message })
            }
            _ => Err(RemoteError::Status(status)),
        };
    }
    let envelope = parsed.map_err(|e| RemoteError::Decode(e.to_string()))?;
    match envelope.status {
        EnvelopeStatus::Success => Ok(envelope),
        EnvelopeStatus::Error => Err(RemoteError::Rejected { message: envelope.message.unwrap_or_default() }),
    }
}
