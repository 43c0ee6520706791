//! Build-time configuration for the browser client.
//!
//! The poem store normally serves this page, so requests default to paths
//! relative to the page origin. Set `POET_API_BASE` when building to point at
//! a store on another origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Where the poem store lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing path; empty for the page origin.
    pub base_url: &'static str,
}

impl ApiConfig {
    /// Read `POET_API_BASE` as captured at compile time.
    pub fn from_build_env() -> Self {
        Self { base_url: option_env!("POET_API_BASE").unwrap_or_default() }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
