use http::Method;
use serde::{Deserialize, Serialize};

use super::base64_bytes;
use crate::constants::SHIPMENT_PATH;
use crate::request::{require_barcode, ApiRequest};
use bookingapi_core::Result;

/// Scanned image of a booked shipment: `GET /api/shipment/{barcode}/image`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentScanImageRequest {
    barcode: String,
}

impl ShipmentScanImageRequest {
    /// Start building a scan image request.
    pub fn builder() -> ShipmentScanImageRequestBuilder {
        ShipmentScanImageRequestBuilder::default()
    }

    /// Barcode of the shipment.
    pub fn barcode(&self) -> &str {
        &self.barcode
    }
}

impl ApiRequest for ShipmentScanImageRequest {
    type Response = ShipmentScanImageResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("{SHIPMENT_PATH}{}/image", self.barcode)
    }
}

/// Builder for [`ShipmentScanImageRequest`].
#[derive(Debug, Clone, Default)]
pub struct ShipmentScanImageRequestBuilder {
    barcode: Option<String>,
}

impl ShipmentScanImageRequestBuilder {
    /// Set the barcode of the shipment.
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Build the request, the barcode is required.
    pub fn build(self) -> Result<ShipmentScanImageRequest> {
        Ok(ShipmentScanImageRequest {
            barcode: require_barcode(self.barcode)?,
        })
    }
}

/// Image taken when the shipment was scanned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShipmentScanImageResponse {
    /// Carrier barcode.
    pub barcode: String,
    /// MIME type of `image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Image bytes.
    #[serde(with = "base64_bytes")]
    pub image: Vec<u8>,
}
