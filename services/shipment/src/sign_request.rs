//! Booking API request signing.
use std::fmt::Write;

use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use http::header::DATE;
use http::HeaderValue;
use http::Method;
use log::debug;

use super::constants::*;
use super::credential::Credential;
use super::request::ApiRequest;
use bookingapi_core::hash::base64_hmac_sha1;
use bookingapi_core::hash::hex_md5;
use bookingapi_core::time::format_http_date;
use bookingapi_core::time::DateTime;
use bookingapi_core::Result;

/// Signing context of one outgoing request.
///
/// Built from the serialized body right before sending and dropped once the
/// message is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext<'a> {
    /// HTTP method.
    pub method: &'a Method,
    /// Lowercase hex MD5 of the transmitted body.
    pub body_digest: String,
    /// Content type sent with the body.
    pub content_type: &'a str,
    /// Signing time, also sent as `Date`.
    pub time: DateTime,
    /// Logical resource path.
    pub path: &'a str,
}

impl<'a> SigningContext<'a> {
    /// Build a signing context over the exact body bytes that will be sent.
    pub fn new(
        method: &'a Method,
        body: &[u8],
        content_type: &'a str,
        path: &'a str,
        time: DateTime,
    ) -> Self {
        Self {
            method,
            body_digest: hex_md5(body),
            content_type,
            time,
            path,
        }
    }

    /// Construct string to sign
    ///
    /// ## Format
    ///
    /// ```text
    /// VERB + "\n" +
    /// hex(MD5(Body)) + "\n" +
    /// Content-Type + "\n" +
    /// Date + "\n" +
    /// Path
    /// ```
    ///
    /// Fields are not escaped, `content_type` and `path` must not contain
    /// newlines.
    pub fn string_to_sign(&self) -> Result<String> {
        let mut s = String::new();
        writeln!(&mut s, "{}", self.method.as_str())?;
        writeln!(&mut s, "{}", self.body_digest)?;
        writeln!(&mut s, "{}", self.content_type)?;
        writeln!(&mut s, "{}", format_http_date(self.time))?;
        write!(&mut s, "{}", self.path)?;

        debug!("string to sign: {}", &s);
        Ok(s)
    }
}

/// Build the string to sign for a request.
///
/// Shorthand for [`SigningContext::new`] followed by
/// [`SigningContext::string_to_sign`].
pub fn string_to_sign(
    method: &Method,
    body: &[u8],
    content_type: &str,
    path: &str,
    time: DateTime,
) -> Result<String> {
    SigningContext::new(method, body, content_type, path, time).string_to_sign()
}

/// Sign a string to sign with the signing key.
///
/// Returns base64 of `HMAC-SHA1(signing_key, string_to_sign)`, fails with
/// `KeyInvalid` for an empty key.
pub fn sign(signing_key: &[u8], string_to_sign: &str) -> Result<String> {
    base64_hmac_sha1(signing_key, string_to_sign.as_bytes())
}

/// Build the signed HTTP message for `req`.
///
/// The body is serialized exactly once. Those bytes are digested into the
/// string to sign and become the message body, and `time` is used for both
/// the signature and the `Date` header.
pub fn build_signed_message<R: ApiRequest>(
    endpoint: &str,
    req: &R,
    cred: &Credential,
    time: DateTime,
) -> Result<http::Request<Bytes>> {
    let body = Bytes::from(serde_json::to_vec(req)?);

    let method = req.method();
    let path = req.path();
    let ctx = SigningContext::new(&method, &body, CONTENT_TYPE_JSON, &path, time);
    let signature = sign(&cred.signing_key, &ctx.string_to_sign()?)?;

    let url = format!("{}{}", endpoint.trim_end_matches('/'), path);
    debug!("build signed request: {} {}", method, url);

    let uri: http::Uri = url.parse()?;

    let mut message = http::Request::builder()
        .method(method.clone())
        .uri(uri)
        .body(body)?;

    let headers = message.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
    headers.insert(DATE, format_http_date(ctx.time).parse()?);
    headers.insert(AUTHORIZATION, {
        let mut value: HeaderValue = format!("{}:{}", cred.access_id, signature).parse()?;
        value.set_sensitive(true);

        value
    });

    Ok(message)
}
