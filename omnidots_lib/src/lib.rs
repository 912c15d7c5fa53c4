//! Omnidots Honeycomb API client library.
//!
//! Provides a typed client for the Honeycomb sensor-monitoring REST API:
//! list sensors and fetch peak vibration records. [`ApiClient`] stamps the
//! API token onto every request and decodes the JSON envelopes; [`Client`]
//! is the raw layer underneath for callers that want the plain HTTP
//! responses or custom request editors.

pub mod client;
pub mod error;
pub mod model;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{ApiClient, Client, ClientBuilder, RequestEditorFn};
pub use error::Error;
pub use model::{
    ErrorResponse, Location, MeasuringPoint, PeakRecord, PeakRecordsResponse, Sensor,
    SuccessResponse,
};
pub use request::GetPeakRecordsParams;
pub use response::{ApiResponse, GetPeakRecordsResponse, ListSensorsResponse};
pub use transport::Transport;

/// Library version for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Production Honeycomb endpoint.
pub const DEFAULT_SERVER: &str = "http://honeycomb.omnidots.com/api/v1";
