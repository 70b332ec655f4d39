//! Runtime configuration for the LinkKeeper client.
//!
//! Both URLs come from the environment with production fallbacks, mirroring
//! how every page resolves its API base at load time.

use std::env;

/// Default remote API base when `LINKKEEPER_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "https://linkkeeper-api.onrender.com/api";

/// Default app origin (used by the bookmarklet) when `LINKKEEPER_APP_URL` is unset.
pub const DEFAULT_APP_URL: &str = "https://linkkeeper-frontend-pi.vercel.app";

/// Resolved configuration: remote API base URL and the app's own origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub app_url: String,
}

impl Config {
    pub fn new(api_base_url: &str, app_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            app_url: app_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reads configuration from the environment, falling back to the hosted
    /// production endpoints.
    pub fn from_env() -> Self {
        let api = env::var("LINKKEEPER_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let app =
            env::var("LINKKEEPER_APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string());
        Self::new(&api, &app)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_APP_URL)
    }
}
