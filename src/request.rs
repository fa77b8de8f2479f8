//! API calls described as plain values.
//!
//! A [`Request`] holds the HTTP method and the server-relative path of a call,
//! and records in its type what the response decodes into. It performs no I/O;
//! see [`crate::client`] for executing one.

use anyhow::Result;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::server::Server;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PATCH" => Ok(Method::Patch),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            _ => anyhow::bail!(
                "Unknown HTTP method: {}. Expected GET, POST, PATCH, PUT, or DELETE.",
                s
            ),
        }
    }
}

/// A call to the API whose response decodes into `T`.
pub struct Request<T> {
    method: Method,
    path: String,
    response: PhantomData<fn() -> T>,
}

impl<T> Request<T> {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            response: PhantomData,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Path relative to the API endpoint, e.g. `/repos/owner/repo/releases`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Absolute URL of this request on the given server.
    pub fn url(&self, server: &Server) -> String {
        format!("{}{}", server.endpoint(), self.path)
    }
}

impl<T> Clone for Request<T> {
    fn clone(&self) -> Self {
        Self::new(self.method, self.path.clone())
    }
}

impl<T> PartialEq for Request<T> {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method && self.path == other.path
    }
}

impl<T> Eq for Request<T> {}

impl<T> Hash for Request<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.method.hash(state);
        self.path.hash(state);
    }
}

impl<T> fmt::Debug for Request<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish()
    }
}

impl<T> fmt::Display for Request<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
