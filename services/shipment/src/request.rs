use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use bookingapi_core::{Error, Result};

/// ApiRequest is a fully built request for one booking API endpoint.
///
/// The value itself is the JSON body. `path` is the logical resource path
/// used both in the string to sign and, appended to the base endpoint, as
/// the request URL.
pub trait ApiRequest: Serialize + Send + Sync {
    /// Body type of a successful response.
    type Response: DeserializeOwned + Send;

    /// HTTP method of this endpoint.
    fn method(&self) -> Method;

    /// Signing path, e.g. `/api/shipment/` or `/api/shipment/{barcode}/dimensions`.
    fn path(&self) -> String;
}

/// Check a barcode that is going to be spliced into a signing path.
///
/// Only ASCII alphanumerics and `-_~` are accepted, so the segment goes on
/// the wire exactly as it was signed.
pub(crate) fn require_barcode(barcode: Option<String>) -> Result<String> {
    let barcode = barcode.ok_or_else(|| Error::request_invalid("barcode is required"))?;
    if barcode.is_empty() {
        return Err(Error::request_invalid("barcode must not be empty"));
    }
    if !barcode
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '~'))
    {
        return Err(Error::request_invalid(format!(
            "barcode {barcode:?} can't be used in a request path"
        )));
    }
    Ok(barcode)
}
