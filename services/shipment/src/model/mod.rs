//! JSON models exchanged with the booking API.
//!
//! Field names are PascalCase on the wire, `None` fields are omitted and
//! byte payloads travel as base64 strings.

mod book_shipment;
pub use book_shipment::*;

mod dimensions;
pub use dimensions::*;

mod label;
pub use label::*;

mod scan_image;
pub use scan_image::*;

use serde::{Deserialize, Serialize};

/// Error body returned with a non-2xx status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ErrorResponse {
    /// Human readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine readable code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Per field validation failures.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorDetail>,
}

/// One validation failure inside an [`ErrorResponse`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ErrorDetail {
    /// Field the failure refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// What is wrong with it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Label document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelFormat {
    /// PDF document.
    Pdf,
    /// Zebra printer language.
    Zpl,
    /// PNG image.
    Png,
}

/// Label paper size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSize {
    /// A4 sheet.
    A4,
    /// A6 sheet.
    A6,
    /// 4x6 inch thermal label.
    Label4x6,
}

/// Serde adapter for byte payloads sent as base64 strings.
///
/// `null` and missing values decode to an empty vector.
pub(crate) mod base64_bytes {
    use bookingapi_core::hash::{base64_decode, base64_encode};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&base64_encode(v))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(Vec::new()),
            Some(s) => base64_decode(&s).map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_enums_serialize_by_name() {
        assert_eq!(r#""Pdf""#, serde_json::to_string(&LabelFormat::Pdf).unwrap());
        assert_eq!(r#""A4""#, serde_json::to_string(&LabelSize::A4).unwrap());
        assert_eq!(
            LabelSize::Label4x6,
            serde_json::from_str::<LabelSize>(r#""Label4x6""#).unwrap()
        );
    }

    #[test]
    fn test_error_response_tolerates_missing_fields() {
        let resp: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(ErrorResponse::default(), resp);

        let resp: ErrorResponse = serde_json::from_str(
            r#"{"Message":"Validation failed","ErrorCode":"E400","Errors":[{"Field":"Barcode","Message":"Required"}]}"#,
        )
        .unwrap();
        assert_eq!(Some("Validation failed"), resp.message.as_deref());
        assert_eq!(Some("E400"), resp.error_code.as_deref());
        assert_eq!(Some("Barcode"), resp.errors[0].field.as_deref());
    }
}
