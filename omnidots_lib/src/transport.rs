//! Pluggable HTTP transport.

use crate::error::Error;
use async_trait::async_trait;
use reqwest::{Request, Response};

/// Performs HTTP requests.
///
/// [`reqwest::Client`] implements this trait, and it is the default when no
/// transport is configured. Tests substitute their own implementation to
/// return canned responses without touching the network.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, req: Request) -> Result<Response, Error>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(&self, req: Request) -> Result<Response, Error> {
        Ok(self.execute(req).await?)
    }
}
