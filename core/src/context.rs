// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::{Error, Result};
use bytes::Bytes;
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the transport used to execute signed requests.
///
/// ## Important
///
/// bookingapi provides NO default transport. Users MUST configure one before
/// sending requests; an unconfigured context uses a no-op implementation that
/// returns errors when called.
///
/// ## Example
///
/// ```
/// use bookingapi_core::Context;
///
/// let ctx = Context::new();
/// // ctx.with_http_send(my_http_client);
/// ```
#[derive(Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context").field("http", &self.http).finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with a no-op transport.
    pub fn new() -> Self {
        Self {
            http: Arc::new(NoopHttpSend),
        }
    }

    /// Replace the HTTP client implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Send http request and return the response.
    ///
    /// Exactly one message is handed to the transport; no retry happens here.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }
}

/// HttpSend sends one HTTP message and returns one HTTP response.
///
/// Implementations own connection lifecycle, pooling, TLS and timeouts.
/// Network level failures must be reported as [`crate::ErrorKind::Transport`];
/// any status code the server returns is a response, not an error.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// NoopHttpSend is a no-op implementation that always returns an error.
///
/// This is used when no HTTP client is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::config_invalid(
            "HTTP sending not supported: no HTTP client configured",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[derive(Debug)]
    struct EchoHttpSend;

    #[async_trait::async_trait]
    impl HttpSend for EchoHttpSend {
        async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            Ok(http::Response::new(req.into_body()))
        }
    }

    #[tokio::test]
    async fn test_default_context_has_no_transport() {
        let ctx = Context::default();
        let err = ctx
            .http_send(http::Request::new(Bytes::new()))
            .await
            .unwrap_err();
        assert_eq!(ErrorKind::ConfigInvalid, err.kind());
    }

    #[tokio::test]
    async fn test_with_http_send() {
        let ctx = Context::new().with_http_send(EchoHttpSend);
        let resp = ctx
            .http_send(http::Request::new(Bytes::from_static(b"hello")))
            .await
            .unwrap();
        assert_eq!(&b"hello"[..], resp.body().as_ref());
    }
}
