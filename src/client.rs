//! Executing requests through a pluggable transport.
//!
//! The crate does not ship an HTTP stack. A [`Transport`] sends a method and
//! URL and hands back the raw response; [`Client`] turns that into a decoded
//! resource or an [`Error`].

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use crate::error::Error;
use crate::request::{Method, Request};
use crate::resource::{self, Resource};
use crate::server::Server;

/// A raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests over the wire (reqwest, hyper, a test double, ...).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: Method, url: &str) -> Result<Response>;
}

/// Error body returned by the API.
#[derive(Deserialize, Debug)]
struct ApiMessage {
    message: String,
}

/// Executes [`Request`]s against a [`Server`].
pub struct Client<X: Transport> {
    server: Server,
    transport: X,
}

impl<X: Transport> Client<X> {
    pub fn new(server: Server, transport: X) -> Self {
        Self { server, transport }
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    /// Sends the request and decodes the response body into `T`.
    #[tracing::instrument(skip(self))]
    pub async fn execute<T: Resource>(&self, request: &Request<T>) -> Result<T, Error> {
        let url = request.url(&self.server);
        debug!("{} {}...", request.method(), url);

        let response = self
            .transport
            .send(request.method(), &url)
            .await
            .map_err(Error::Transport)?;

        match response.status {
            404 => Err(Error::DoesNotExist(url)),
            _ if response.is_success() => Ok(resource::decode(&response.body)?),
            status => {
                let message = serde_json::from_slice::<ApiMessage>(&response.body)
                    .map(|m| m.message)
                    .unwrap_or_else(|_| String::from_utf8_lossy(&response.body).into_owned());
                debug!("{} failed with HTTP {}: {}", url, status, message);
                Err(Error::Api { status, message })
            }
        }
    }
}
