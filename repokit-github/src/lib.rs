//! Repokit GitHub - GitHub integration for repokit
//!
//! This crate implements [`repokit_core::RemoteHost`] on top of the GitHub
//! REST API.

mod client;
mod error;

pub use client::{GitHubClient, OAUTH_BASIC_PASSWORD};
pub use error::{Error, Result};
