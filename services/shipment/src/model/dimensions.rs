use http::Method;
use serde::{Deserialize, Serialize};

use crate::constants::SHIPMENT_PATH;
use crate::request::{require_barcode, ApiRequest};
use bookingapi_core::Result;

/// Measured dimensions of a booked shipment:
/// `GET /api/shipment/{barcode}/dimensions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentDimensionRequest {
    barcode: String,
}

impl ShipmentDimensionRequest {
    /// Start building a dimensions request.
    pub fn builder() -> ShipmentDimensionRequestBuilder {
        ShipmentDimensionRequestBuilder::default()
    }

    /// Barcode of the shipment.
    pub fn barcode(&self) -> &str {
        &self.barcode
    }
}

impl ApiRequest for ShipmentDimensionRequest {
    type Response = ShipmentDimensionResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("{SHIPMENT_PATH}{}/dimensions", self.barcode)
    }
}

/// Builder for [`ShipmentDimensionRequest`].
#[derive(Debug, Clone, Default)]
pub struct ShipmentDimensionRequestBuilder {
    barcode: Option<String>,
}

impl ShipmentDimensionRequestBuilder {
    /// Set the barcode of the shipment.
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Build the request, the barcode is required.
    pub fn build(self) -> Result<ShipmentDimensionRequest> {
        Ok(ShipmentDimensionRequest {
            barcode: require_barcode(self.barcode)?,
        })
    }
}

/// Dimensions of every piece of a shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShipmentDimensionResponse {
    /// Barcode assigned by Norsk.
    pub norsk_barcode: String,
    /// Carrier barcode.
    pub barcode: String,
    /// Measured pieces.
    pub pieces: Vec<Dimensions>,
}

/// Measurement of one piece. Sizes in cm, weights in kg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Dimensions {
    /// Barcode of the piece.
    pub barcode: String,
    /// Location of the measurement image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Depth.
    pub depth: f64,
    /// Height.
    pub height: f64,
    /// Width.
    pub width: f64,
    /// Actual weight.
    pub weight: f64,
    /// Volumetric weight.
    pub volume_weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookingapi_core::ErrorKind;

    #[test]
    fn test_path_uses_barcode() {
        let req = ShipmentDimensionRequest::builder()
            .with_barcode("509125319001")
            .build()
            .unwrap();
        assert_eq!(Method::GET, req.method());
        assert_eq!("/api/shipment/509125319001/dimensions", req.path());
        assert_eq!(
            r#"{"Barcode":"509125319001"}"#,
            serde_json::to_string(&req).unwrap()
        );
    }

    #[test]
    fn test_barcode_required() {
        let err = ShipmentDimensionRequest::builder().build().unwrap_err();
        assert_eq!(ErrorKind::RequestInvalid, err.kind());
    }

    #[test]
    fn test_response() {
        let resp: ShipmentDimensionResponse = serde_json::from_str(
            r#"{"NorskBarcode":"509125319001","Barcode":"1641620934","Pieces":[{"Barcode":"1641620934","ImageUrl":"api/1641620934/Image","Depth":30.5,"Height":16.0,"VolumeWeight":1.0,"Width":2.0,"Weight":1}]}"#,
        )
        .unwrap();
        assert_eq!("509125319001", resp.norsk_barcode);
        assert_eq!(1, resp.pieces.len());
        assert_eq!(30.5, resp.pieces[0].depth);
        assert_eq!(Some("api/1641620934/Image"), resp.pieces[0].image_url.as_deref());
    }
}
