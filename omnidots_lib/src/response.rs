//! Response parsing.
//!
//! The whole body is read into memory, then the decode target is selected by
//! a four-way switch on (content type contains "json", status in {200, 400,
//! 500}). A combination outside that set is not an error: all typed fields
//! stay `None` and the caller interprets the raw body and status itself.

use crate::error::Error;
use crate::model::{ErrorResponse, PeakRecordsResponse, SuccessResponse};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Typed result of `list_sensors`.
pub type ListSensorsResponse = ApiResponse<SuccessResponse>;

/// Typed result of `get_peak_records`.
pub type GetPeakRecordsResponse = ApiResponse<PeakRecordsResponse>;

/// A fully read response with the raw body and status retained alongside the
/// decoded envelope. At most one of the `json*` fields is populated; none of
/// them means the response was not understood.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub body: Vec<u8>,
    pub status: StatusCode,
    pub json200: Option<T>,
    pub json400: Option<ErrorResponse>,
    pub json500: Option<ErrorResponse>,
}

/// Parse an HTTP response from a `list_sensors` call.
pub async fn parse_list_sensors_response(
    rsp: reqwest::Response,
) -> Result<ListSensorsResponse, Error> {
    ApiResponse::from_http("list_sensors", rsp).await
}

/// Parse an HTTP response from a `get_peak_records` call.
pub async fn parse_get_peak_records_response(
    rsp: reqwest::Response,
) -> Result<GetPeakRecordsResponse, Error> {
    ApiResponse::from_http("get_peak_records", rsp).await
}

impl<T: DeserializeOwned> ApiResponse<T> {
    pub(crate) async fn from_http(
        operation: &'static str,
        rsp: reqwest::Response,
    ) -> Result<Self, Error> {
        let status = rsp.status();
        let content_type = rsp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let body = rsp.bytes().await?.to_vec();

        let mut parsed = ApiResponse {
            body,
            status,
            json200: None,
            json400: None,
            json500: None,
        };
        match (content_type.contains("json"), status.as_u16()) {
            (true, 200) => parsed.json200 = Some(decode(operation, &parsed.body)?),
            (true, 400) => parsed.json400 = Some(decode(operation, &parsed.body)?),
            (true, 500) => parsed.json500 = Some(decode(operation, &parsed.body)?),
            _ => debug!(
                %status,
                content_type,
                operation,
                "response did not match a typed decode target"
            ),
        }
        Ok(parsed)
    }
}

fn decode<D: DeserializeOwned>(operation: &'static str, body: &[u8]) -> Result<D, Error> {
    serde_json::from_slice(body).map_err(|source| Error::Decode { operation, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> reqwest::Response {
        let mut builder = http::Response::builder().status(status);
        if let Some(ct) = content_type {
            builder = builder.header("Content-Type", ct);
        }
        reqwest::Response::from(builder.body(body.to_string()).unwrap())
    }

    #[tokio::test]
    async fn ok_json_populates_json200() {
        let body = r#"{"ok": true, "sensors": [{"name": "SensorXYZ"}]}"#;
        let parsed = parse_list_sensors_response(response(200, Some("application/json"), body))
            .await
            .unwrap();
        let success = parsed.json200.unwrap();
        assert!(success.ok);
        assert_eq!(success.sensors.as_ref().unwrap().len(), 1);
        assert_eq!(
            success.sensors.unwrap()[0].name.as_deref(),
            Some("SensorXYZ")
        );
        assert!(parsed.json400.is_none());
        assert!(parsed.json500.is_none());
        assert_eq!(parsed.status.as_u16(), 200);
        assert_eq!(parsed.body, body.as_bytes());
    }

    // The vendor sometimes sends a bare "json" content type.
    #[tokio::test]
    async fn bare_json_content_type_matches() {
        let body = r#"{"ok": true, "sensors": []}"#;
        let parsed = parse_list_sensors_response(response(200, Some("json"), body))
            .await
            .unwrap();
        assert!(parsed.json200.is_some());
    }

    #[tokio::test]
    async fn client_error_populates_json400_only() {
        let body = r#"{"ok": false, "message": "missing token", "help": "pass ?token="}"#;
        let parsed = parse_list_sensors_response(response(400, Some("application/json"), body))
            .await
            .unwrap();
        assert!(parsed.json200.is_none());
        assert!(parsed.json500.is_none());
        let err = parsed.json400.unwrap();
        assert!(!err.ok);
        assert_eq!(err.message.as_deref(), Some("missing token"));
    }

    #[tokio::test]
    async fn server_error_populates_json500_only() {
        let body = r#"{"ok": false, "message": "internal error"}"#;
        let parsed =
            parse_get_peak_records_response(response(500, Some("application/json"), body))
                .await
                .unwrap();
        assert!(parsed.json200.is_none());
        assert!(parsed.json400.is_none());
        assert_eq!(
            parsed.json500.unwrap().message.as_deref(),
            Some("internal error")
        );
    }

    #[tokio::test]
    async fn non_json_content_type_yields_no_typed_fields() {
        let body = "<html>went wrong</html>";
        let parsed = parse_list_sensors_response(response(200, Some("text/html"), body))
            .await
            .unwrap();
        assert!(parsed.json200.is_none());
        assert!(parsed.json400.is_none());
        assert!(parsed.json500.is_none());
        assert_eq!(parsed.body, body.as_bytes());
        assert_eq!(parsed.status.as_u16(), 200);
    }

    #[tokio::test]
    async fn missing_content_type_yields_no_typed_fields() {
        let parsed = parse_list_sensors_response(response(200, None, r#"{"ok": true}"#))
            .await
            .unwrap();
        assert!(parsed.json200.is_none());
    }

    #[tokio::test]
    async fn unrecognized_status_yields_no_typed_fields() {
        let parsed = parse_list_sensors_response(response(
            404,
            Some("application/json"),
            r#"{"ok": false}"#,
        ))
        .await
        .unwrap();
        assert!(parsed.json200.is_none());
        assert!(parsed.json400.is_none());
        assert!(parsed.json500.is_none());
        assert_eq!(parsed.status.as_u16(), 404);
    }

    #[tokio::test]
    async fn malformed_json_body_is_a_decode_error() {
        let result =
            parse_list_sensors_response(response(200, Some("application/json"), "{not json"))
                .await;
        match result {
            Err(Error::Decode { operation, .. }) => assert_eq!(operation, "list_sensors"),
            other => panic!("expected decode error, got {:?}", other.map(|r| r.status)),
        }
    }
}
