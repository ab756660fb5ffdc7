//! [`HttpSend`] implementation backed by [`reqwest`].
//!
//! Timeouts, proxies and TLS are configured on the [`reqwest::Client`] passed
//! to [`ReqwestHttpSend::new`]; nothing is added on top of it.

use async_trait::async_trait;
use bookingapi_core::{Error, HttpSend, Result};
use bytes::Bytes;
use http_body_util::BodyExt;
use reqwest::{Client, Request};

/// Send booking API requests with a [`reqwest::Client`].
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("convert http request into reqwest request").with_source(e)
        })?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport(format!("send request: {e}")).with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport(format!("read response body: {e}")).with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
