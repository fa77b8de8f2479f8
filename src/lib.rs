//! Typed models for the GitHub releases API.
//!
//! Requests are built as values from a [`Repository`] and executed by a
//! [`Client`] over any [`Transport`](client::Transport); responses decode into
//! [`Release`] and [`Asset`] resources.

pub mod client;
pub mod color;
pub mod error;
pub mod id;
pub mod repository;
pub mod request;
pub mod resource;
pub mod server;

pub use client::Client;
pub use color::Color;
pub use error::{Error, Result};
pub use id::{Id, Identifiable};
pub use repository::Repository;
pub use request::{Method, Request};
pub use resource::{Asset, Release};
pub use server::Server;
