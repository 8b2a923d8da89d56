//! reqwest-backed transport.

use log::debug;
use url::Url;

use crate::error_handling::{categorize_reqwest_error, TransportError};

use super::{HopRequest, HopResponse, Transport};

/// Production transport over a `reqwest::Client`.
///
/// The client must be built with redirects disabled (see
/// `initialization::init_client`).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps a client that does not follow redirects.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: HopRequest) -> Result<HopResponse, TransportError> {
        let url = Url::parse(&request.uri).map_err(|e| TransportError::InvalidTarget {
            uri: request.uri.clone(),
            reason: e.to_string(),
        })?;

        let method = request.method.to_string();
        let into_error = |source: reqwest::Error| TransportError::Request {
            kind: categorize_reqwest_error(&source),
            method: method.clone(),
            uri: request.uri.clone(),
            source,
        };

        let resp = self
            .client
            .request(request.method.into(), url)
            .headers(request.headers.clone())
            .send()
            .await
            .map_err(into_error)?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.text().await.map_err(into_error)?;
        debug!(
            "{} {} -> {} ({} body bytes)",
            method,
            request.uri,
            status,
            body.len()
        );

        Ok(HopResponse {
            status,
            headers,
            body,
        })
    }
}
