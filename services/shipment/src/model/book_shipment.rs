use http::Method;
use serde::{Deserialize, Serialize};

use super::base64_bytes;
use super::{LabelFormat, LabelSize};
use crate::constants::SHIPMENT_PATH;
use crate::request::ApiRequest;
use bookingapi_core::Result;

/// Book a new shipment: `POST /api/shipment/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookShipmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    barcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_format: Option<LabelFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label_size: Option<LabelSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    receiver: Option<Address>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    parcels: Vec<Parcel>,
}

impl BookShipmentRequest {
    /// Start building a book shipment request.
    pub fn builder() -> BookShipmentRequestBuilder {
        BookShipmentRequestBuilder::default()
    }

    /// Barcode requested for this shipment, if any.
    pub fn barcode(&self) -> Option<&str> {
        self.barcode.as_deref()
    }

    /// Parcels of this shipment.
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }
}

impl ApiRequest for BookShipmentRequest {
    type Response = BookShipmentResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        SHIPMENT_PATH.to_string()
    }
}

/// Builder for [`BookShipmentRequest`].
#[derive(Debug, Clone, Default)]
pub struct BookShipmentRequestBuilder {
    barcode: Option<String>,
    reference: Option<String>,
    service_code: Option<String>,
    label_format: Option<LabelFormat>,
    label_size: Option<LabelSize>,
    sender: Option<Address>,
    receiver: Option<Address>,
    parcels: Vec<Parcel>,
}

impl BookShipmentRequestBuilder {
    /// Set the barcode to book the shipment under.
    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Set the customer reference.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Set the carrier service code.
    pub fn with_service_code(mut self, service_code: impl Into<String>) -> Self {
        self.service_code = Some(service_code.into());
        self
    }

    /// Set the format of the returned label.
    pub fn with_label_format(mut self, format: LabelFormat) -> Self {
        self.label_format = Some(format);
        self
    }

    /// Set the size of the returned label.
    pub fn with_label_size(mut self, size: LabelSize) -> Self {
        self.label_size = Some(size);
        self
    }

    /// Set the sender address.
    pub fn with_sender(mut self, sender: Address) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Set the receiver address.
    pub fn with_receiver(mut self, receiver: Address) -> Self {
        self.receiver = Some(receiver);
        self
    }

    /// Add a parcel to the shipment.
    pub fn with_parcel(mut self, parcel: Parcel) -> Self {
        self.parcels.push(parcel);
        self
    }

    /// Build the request.
    pub fn build(self) -> Result<BookShipmentRequest> {
        Ok(BookShipmentRequest {
            barcode: self.barcode,
            reference: self.reference,
            service_code: self.service_code,
            label_format: self.label_format,
            label_size: self.label_size,
            sender: self.sender,
            receiver: self.receiver,
            parcels: self.parcels,
        })
    }
}

/// Postal address of a sender or receiver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    /// Contact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// First address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    /// Second address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// ISO 3166 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One physical parcel of a shipment. Weight in kg, sizes in cm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parcel {
    /// Weight.
    pub weight: f64,
    /// Length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Content description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response of a successful booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BookShipmentResponse {
    /// Barcode assigned by Norsk.
    pub norsk_barcode: String,
    /// Carrier barcode.
    pub barcode: String,
    /// Shipment label document.
    #[serde(with = "base64_bytes")]
    pub label: Vec<u8>,
    /// Customs and archive documents.
    pub archive_documents: Vec<ArchiveDocument>,
    /// One entry per booked parcel.
    pub items: Vec<ShipmentBookingItem>,
}

/// Archived document attached to a booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ArchiveDocument {
    /// Document name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw document bytes.
    #[serde(with = "base64_bytes")]
    pub contents: Vec<u8>,
}

/// A booked parcel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShipmentBookingItem {
    /// Carrier barcode of the parcel.
    pub barcode: String,
    /// Barcode assigned by Norsk.
    pub norsk_barcode: String,
    /// Barcode printed for scanning.
    pub scan_barcode: String,
    /// Parcel label.
    #[serde(with = "base64_bytes")]
    pub label: Vec<u8>,
    /// Weight in kg.
    pub weight: f64,
}
