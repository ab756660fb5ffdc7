//! Request executor: sign, send, decode.
use bytes::Bytes;
use http::StatusCode;
use log::debug;
use serde::de::DeserializeOwned;

use super::credential::Credential;
use super::model::ErrorResponse;
use super::outcome::{Outcome, RemoteError};
use super::request::ApiRequest;
use super::sign_request::build_signed_message;
use bookingapi_core::time::DateTime;
use bookingapi_core::{Context, Error, Result, SigningCredential};

/// Execute one signed request against `endpoint`.
///
/// Credentials are checked before anything is serialized or sent. Exactly
/// one message is handed to the transport, there is no retry.
pub async fn execute<R: ApiRequest>(
    ctx: &Context,
    endpoint: &str,
    cred: Option<&Credential>,
    req: &R,
    time: DateTime,
) -> Result<Outcome<R::Response>> {
    let cred = match cred {
        Some(cred) if cred.is_valid() => cred,
        _ => {
            return Err(Error::credential_missing(
                "access id and signing key must be set before sending requests",
            ))
        }
    };

    let message = build_signed_message(endpoint, req, cred, time)?;
    let resp = ctx.http_send(message).await?;

    parse_response(resp)
}

/// Map a response to an [`Outcome`].
///
/// 2xx bodies are parsed into `T`, everything else into [`ErrorResponse`].
pub fn parse_response<T: DeserializeOwned>(
    resp: http::Response<Bytes>,
) -> Result<Outcome<T>> {
    let status = resp.status();
    let body = resp.into_body();
    debug!("got response: {status}, {} bytes", body.len());

    if status.is_success() {
        decode(status, &body).map(Outcome::Success)
    } else {
        decode::<ErrorResponse>(status, &body)
            .map(|error| Outcome::Failure(RemoteError { status, error }))
    }
}

fn decode<T: DeserializeOwned>(status: StatusCode, body: &Bytes) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        Error::deserialization(
            format!("decode response with status {status}: {e}"),
            String::from_utf8_lossy(body),
        )
        .with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookShipmentResponse;
    use bookingapi_core::ErrorKind;

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn test_parse_success() {
        let outcome: Outcome<BookShipmentResponse> =
            parse_response(response(200, r#"{"Barcode":"1641620934","Label":"Fw=="}"#)).unwrap();
        let resp = outcome.success().unwrap();
        assert_eq!("1641620934", resp.barcode);
        assert_eq!(vec![23], resp.label);
    }

    #[test]
    fn test_parse_failure() {
        let outcome: Outcome<BookShipmentResponse> =
            parse_response(response(401, r#"{"Message":"Signature mismatch"}"#)).unwrap();
        let err = outcome.failure().unwrap();
        assert_eq!(StatusCode::UNAUTHORIZED, err.status);
        assert_eq!(Some("Signature mismatch"), err.error.message.as_deref());
    }

    #[test]
    fn test_parse_garbage_on_success_status() {
        let err = parse_response::<BookShipmentResponse>(response(200, "<html>oops</html>"))
            .unwrap_err();
        assert_eq!(ErrorKind::Deserialization, err.kind());
        assert_eq!(Some("<html>oops</html>"), err.raw_body());
    }

    #[test]
    fn test_parse_empty_error_body() {
        let err = parse_response::<BookShipmentResponse>(response(503, "")).unwrap_err();
        assert_eq!(ErrorKind::Deserialization, err.kind());
        assert_eq!(Some(""), err.raw_body());
    }
}
