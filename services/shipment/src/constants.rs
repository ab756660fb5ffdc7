// Endpoints
/// Base address of the production API.
pub const LIVE_ENDPOINT: &str = "http://api.norsk-global.com";
/// Base address of the staging API.
pub const STAGING_ENDPOINT: &str = "http://dev-api.norsk-global.com";

// Signing paths
pub const SHIPMENT_PATH: &str = "/api/shipment/";

// Headers
pub const CONTENT_TYPE_JSON: &str = "application/json";
