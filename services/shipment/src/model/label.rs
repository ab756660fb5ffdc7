use http::Method;
use serde::{Deserialize, Serialize};

use super::base64_bytes;
use super::{LabelFormat, LabelSize};
use crate::constants::SHIPMENT_PATH;
use crate::request::{require_barcode, ApiRequest};
use bookingapi_core::Result;

/// Label of a booked shipment: `GET /api/shipment/{barcode}/label`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentLabelRequest {
    barcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_format: Option<LabelFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_size: Option<LabelSize>,
}

impl ShipmentLabelRequest {
    /// Start building a label request.
    pub fn builder() -> ShipmentLabelRequestBuilder {
        ShipmentLabelRequestBuilder::default()
    }

    /// Barcode of the shipment.
    pub fn barcode(&self) -> &str {
        &self.barcode
    }
}

impl ApiRequest for ShipmentLabelRequest {
    type Response = ShipmentLabelResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("{SHIPMENT_PATH}{}/label", self.barcode)
    }
}

/// Builder for [`ShipmentLabelRequest`].
#[derive(Debug, Clone, Default)]
pub struct ShipmentLabelRequestBuilder {
    barcode: Option<String>,
    label_format: Option<LabelFormat>,
    label_size: Option<LabelSize>,
}

impl ShipmentLabelRequestBuilder {
    /// Set the barcode of the shipment.
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Set the label format.
    pub fn with_label_format(mut self, format: LabelFormat) -> Self {
        self.label_format = Some(format);
        self
    }

    /// Set the label size.
    pub fn with_label_size(mut self, size: LabelSize) -> Self {
        self.label_size = Some(size);
        self
    }

    /// Build the request, the barcode is required.
    pub fn build(self) -> Result<ShipmentLabelRequest> {
        Ok(ShipmentLabelRequest {
            barcode: require_barcode(self.barcode)?,
            label_format: self.label_format,
            label_size: self.label_size,
        })
    }
}

/// Label document of a shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShipmentLabelResponse {
    /// Carrier barcode.
    pub barcode: String,
    /// Format of `label`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_format: Option<LabelFormat>,
    /// Label document bytes.
    #[serde(with = "base64_bytes")]
    pub label: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request() {
        let req = ShipmentLabelRequest::builder()
            .with_barcode("703794488001")
            .with_label_format(LabelFormat::Pdf)
            .with_label_size(LabelSize::A4)
            .build()
            .unwrap();
        assert_eq!("/api/shipment/703794488001/label", req.path());
        assert_eq!(
            r#"{"Barcode":"703794488001","LabelFormat":"Pdf","LabelSize":"A4"}"#,
            serde_json::to_string(&req).unwrap()
        );
    }

    #[test]
    fn test_response() {
        let resp: ShipmentLabelResponse =
            serde_json::from_str(r#"{"Barcode":"703794488001","LabelFormat":"Zpl","Label":"Fw=="}"#)
                .unwrap();
        assert_eq!(Some(LabelFormat::Zpl), resp.label_format);
        assert_eq!(vec![23], resp.label);
    }
}
