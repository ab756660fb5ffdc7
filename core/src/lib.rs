//! Core components for signed booking API requests.
//!
//! This crate provides the foundational types shared by the bookingapi
//! workspace: the error type, the transport boundary and the hashing helpers
//! request signers are built from.
//!
//! ## Overview
//!
//! - **Context**: A container that holds the [`HttpSend`] implementation used to execute requests
//! - **Traits**: [`HttpSend`] for sending one HTTP message, [`SigningCredential`] for validating credentials
//! - **Error**: A single [`Error`] with an [`ErrorKind`] callers can match on
//!
//! ## Example
//!
//! ```no_run
//! use bookingapi_core::{Context, HttpSend, Result};
//! use async_trait::async_trait;
//! use bytes::Bytes;
//!
//! #[derive(Debug)]
//! struct MyTransport;
//!
//! #[async_trait]
//! impl HttpSend for MyTransport {
//!     async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//!         // Hand the request to your HTTP client here
//!         todo!()
//!     }
//! }
//!
//! let ctx = Context::new().with_http_send(MyTransport);
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: MD5 digests, HMAC-SHA1 signatures and base64
//! - [`time`]: RFC 1123 date handling
//! - [`utils`]: Redaction of secrets in `Debug` output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, HttpSend, NoopHttpSend};

mod api;
pub use api::SigningCredential;

mod error;
pub use error::{Error, ErrorKind, Result};
