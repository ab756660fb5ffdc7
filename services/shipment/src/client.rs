use bookingapi_core::time::{now, DateTime};
use bookingapi_core::{Context, Error, Result, SigningCredential};

use super::config::{ApiMode, Config, Endpoints};
use super::credential::Credential;
use super::execute::execute;
use super::model::*;
use super::outcome::Outcome;
use super::request::ApiRequest;

/// Client for the shipment booking API.
///
/// Configure it once (transport, credential, mode) and share it: every
/// operation takes `&self` and captures its own signing time.
///
/// ```no_run
/// use bookingapi_core::Context;
/// use bookingapi_http_send_reqwest::ReqwestHttpSend;
/// use bookingapi_shipment::{Client, Outcome};
///
/// # async fn example() -> bookingapi_core::Result<()> {
/// let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
/// let mut client = Client::new(ctx).authenticate("my-access-id", "my-signing-key");
/// client.use_staging_api();
///
/// match client
///     .book_shipment(|b| b.with_barcode("703451258001"))
///     .await?
/// {
///     Outcome::Success(resp) => println!("booked {}", resp.norsk_barcode),
///     Outcome::Failure(err) => println!("rejected with {}: {:?}", err.status, err.error),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    credential: Option<Credential>,
    mode: ApiMode,
    endpoints: Endpoints,
    time: Option<DateTime>,
}

impl Client {
    /// Create a client without credentials against the live API.
    pub fn new(ctx: Context) -> Self {
        Self {
            ctx,
            credential: None,
            mode: ApiMode::Live,
            endpoints: Endpoints::default(),
            time: None,
        }
    }

    /// Create a client from config.
    pub fn from_config(ctx: Context, config: Config) -> Self {
        Self {
            ctx,
            credential: config.credential(),
            mode: config.mode,
            endpoints: Endpoints::from_config(&config),
            time: None,
        }
    }

    /// Set the credential used to sign every request.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Set the credential from its access id and signing key.
    ///
    /// The access id comes first and is sent in clear in front of the
    /// signature. The signing key comes second and is the HMAC key that never
    /// leaves the process. Use [`Client::with_credential`] with named fields
    /// when the order could be mistaken.
    pub fn authenticate(self, access_id: impl Into<String>, signing_key: impl AsRef<[u8]>) -> Self {
        self.with_credential(Credential::new(access_id, signing_key))
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Send following requests to the live API.
    pub fn use_live_api(&mut self) {
        self.mode = ApiMode::Live;
    }

    /// Send following requests to the staging API.
    pub fn use_staging_api(&mut self) {
        self.mode = ApiMode::Staging;
    }

    /// Current mode.
    pub fn mode(&self) -> ApiMode {
        self.mode
    }

    /// Base address requests are currently sent to.
    pub fn endpoint(&self) -> &str {
        self.endpoints.get(self.mode)
    }

    /// Book a shipment.
    pub async fn book_shipment(
        &self,
        configure: impl FnOnce(BookShipmentRequestBuilder) -> BookShipmentRequestBuilder,
    ) -> Result<Outcome<BookShipmentResponse>> {
        self.require_credential()?;
        let req = configure(BookShipmentRequest::builder()).build()?;
        self.send(&req).await
    }

    /// Get the measured dimensions of a booked shipment.
    pub async fn get_shipment_dimensions(
        &self,
        configure: impl FnOnce(ShipmentDimensionRequestBuilder) -> ShipmentDimensionRequestBuilder,
    ) -> Result<Outcome<ShipmentDimensionResponse>> {
        self.require_credential()?;
        let req = configure(ShipmentDimensionRequest::builder()).build()?;
        self.send(&req).await
    }

    /// Get the label of a booked shipment.
    pub async fn get_shipment_label(
        &self,
        configure: impl FnOnce(ShipmentLabelRequestBuilder) -> ShipmentLabelRequestBuilder,
    ) -> Result<Outcome<ShipmentLabelResponse>> {
        self.require_credential()?;
        let req = configure(ShipmentLabelRequest::builder()).build()?;
        self.send(&req).await
    }

    /// Get the scanned image of a booked shipment.
    pub async fn get_shipment_scan_image(
        &self,
        configure: impl FnOnce(ShipmentScanImageRequestBuilder) -> ShipmentScanImageRequestBuilder,
    ) -> Result<Outcome<ShipmentScanImageResponse>> {
        self.require_credential()?;
        let req = configure(ShipmentScanImageRequest::builder()).build()?;
        self.send(&req).await
    }

    fn require_credential(&self) -> Result<&Credential> {
        match &self.credential {
            Some(cred) if cred.is_valid() => Ok(cred),
            _ => Err(Error::credential_missing(
                "access id and signing key must be set before sending requests",
            )),
        }
    }

    /// Sign and send any built request.
    ///
    /// Credentials are checked before the request is signed, operations
    /// check them before the request is even built.
    pub async fn send<R: ApiRequest>(&self, req: &R) -> Result<Outcome<R::Response>> {
        let cred = self.require_credential()?;
        let time = self.time.unwrap_or_else(now);
        execute(
            &self.ctx,
            self.endpoint(),
            Some(cred),
            req,
            time,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LIVE_ENDPOINT, STAGING_ENDPOINT};
    use bookingapi_core::ErrorKind;

    #[test]
    fn test_mode_switch() {
        let mut client = Client::new(Context::new());
        assert_eq!(ApiMode::Live, client.mode());
        assert_eq!(LIVE_ENDPOINT, client.endpoint());

        client.use_staging_api();
        assert_eq!(STAGING_ENDPOINT, client.endpoint());

        client.use_live_api();
        assert_eq!(LIVE_ENDPOINT, client.endpoint());
    }

    #[test]
    fn test_from_config() {
        let client = Client::from_config(
            Context::new(),
            Config::new()
                .with_access_id("xxxx")
                .with_signing_key("xxxxxxx")
                .with_mode(ApiMode::Staging)
                .with_staging_endpoint("http://localhost:9000"),
        );
        assert_eq!(ApiMode::Staging, client.mode());
        assert_eq!("http://localhost:9000", client.endpoint());
        assert!(client.credential.is_some());
    }

    #[tokio::test]
    async fn test_credential_checked_before_builder() {
        let client = Client::new(Context::new());
        let err = client.get_shipment_dimensions(|b| b).await.unwrap_err();
        assert_eq!(ErrorKind::CredentialMissing, err.kind());

        let client = Client::new(Context::new()).authenticate("", "xxxxxxx");
        let err = client.get_shipment_label(|b| b).await.unwrap_err();
        assert_eq!(ErrorKind::CredentialMissing, err.kind());
    }

    #[tokio::test]
    async fn test_builder_error_with_credential() {
        let client = Client::new(Context::new()).authenticate("xxxx", "xxxxxxx");
        let err = client.get_shipment_dimensions(|b| b).await.unwrap_err();
        assert_eq!(ErrorKind::RequestInvalid, err.kind());

        let err = client
            .get_shipment_scan_image(|b| b.with_barcode(".."))
            .await
            .unwrap_err();
        assert_eq!(ErrorKind::RequestInvalid, err.kind());
    }

    #[test]
    fn test_authenticate_argument_order() {
        let client = Client::new(Context::new()).authenticate("xxxx", "xxxxxxx");
        let cred = client.credential.expect("credential must be set");
        assert_eq!("xxxx", cred.access_id);
        assert_eq!(b"xxxxxxx".to_vec(), cred.signing_key);
    }

    #[tokio::test]
    async fn test_unauthenticated() {
        let client = Client::new(Context::new());
        let err = client
            .book_shipment(|b| b.with_barcode("703451258001"))
            .await
            .unwrap_err();
        assert_eq!(ErrorKind::CredentialMissing, err.kind());
    }
}
