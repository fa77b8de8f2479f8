//! The API server requests are sent to.

use anyhow::{Context, Result};
use log::debug;
use std::fmt;
use url::Url;

/// Public GitHub API endpoint.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Either github.com or a GitHub Enterprise instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Server {
    #[default]
    GitHub,
    /// An Enterprise instance, given by its web URL (e.g. `https://git.corp.example`).
    Enterprise(Url),
}

impl Server {
    /// Resolves an `--api-url` override. `None` means github.com.
    pub fn from_api_url(api_url: Option<&str>) -> Result<Self> {
        let Some(api_url) = api_url else {
            return Ok(Server::GitHub);
        };
        let trimmed = api_url.trim_end_matches('/');
        if trimmed == GITHUB_API_URL {
            return Ok(Server::GitHub);
        }

        // Enterprise APIs live under /api/v3
        let base = trimmed.strip_suffix("/api/v3").unwrap_or(trimmed);
        let url = Url::parse(base).with_context(|| format!("Invalid API URL: {}", api_url))?;
        debug!("Using GitHub Enterprise server at {}", url);
        Ok(Server::Enterprise(url))
    }

    /// Base URL that request paths are appended to, without a trailing slash.
    pub fn endpoint(&self) -> String {
        match self {
            Server::GitHub => GITHUB_API_URL.to_string(),
            Server::Enterprise(url) => {
                format!("{}/api/v3", url.as_str().trim_end_matches('/'))
            }
        }
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Server::GitHub => write!(f, "github.com"),
            Server::Enterprise(url) => write!(f, "{}", url.host_str().unwrap_or(url.as_str())),
        }
    }
}
