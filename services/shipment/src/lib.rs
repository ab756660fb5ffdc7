//! Signed client for the Norsk shipment booking API.
//!
//! Every request is signed with HMAC-SHA1 over a string to sign made of the
//! method, the MD5 of the JSON body, the content type, the `Date` header and
//! the resource path, and sent as `Authorization: <access_id>:<signature>`.
//!
//! - [`Client`]: one operation per endpoint, taking a builder function.
//! - [`execute()`]: sign, send and decode any [`ApiRequest`].
//! - [`build_signed_message`]: the pure part of the pipeline, for testing.

mod constants;
pub use constants::{LIVE_ENDPOINT, STAGING_ENDPOINT};

mod config;
pub use config::{ApiMode, Config};

mod credential;
pub use credential::Credential;

mod request;
pub use request::ApiRequest;

mod sign_request;
pub use sign_request::{build_signed_message, sign, string_to_sign, SigningContext};

mod outcome;
pub use outcome::{Outcome, RemoteError};

mod execute;
pub use execute::{execute, parse_response};

mod client;
pub use client::Client;

pub mod model;
