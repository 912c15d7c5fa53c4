//! Outbound request construction for the two Honeycomb operations.

use crate::error::Error;
use reqwest::{Method, Request};
use url::Url;

/// Query parameters for `get_peak_records`.
///
/// `end_time` is included in the query string only when supplied; the server
/// treats its absence as "up to now". Values are sent verbatim, range
/// validation is left to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetPeakRecordsParams {
    /// ID of the measuring point.
    pub measuring_point_id: i64,
    /// Start time in milliseconds since epoch.
    pub start_time: i64,
    /// End time in milliseconds since epoch (optional).
    pub end_time: Option<i64>,
}

/// Build a GET request for `list_sensors`. Fixed path, no parameters.
pub fn list_sensors_request(server: &Url) -> Result<Request, Error> {
    let url = server.join("list_sensors")?;
    Ok(Request::new(Method::GET, url))
}

/// Build a GET request for `get_peak_records` with the given parameters.
pub fn get_peak_records_request(
    server: &Url,
    params: &GetPeakRecordsParams,
) -> Result<Request, Error> {
    let mut url = server.join("get_peak_records")?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair(
            "measuring_point_id",
            &params.measuring_point_id.to_string(),
        );
        query.append_pair("start_time", &params.start_time.to_string());
        if let Some(end_time) = params.end_time {
            query.append_pair("end_time", &end_time.to_string());
        }
    }
    Ok(Request::new(Method::GET, url))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> Url {
        Url::parse("http://honeycomb.omnidots.com/api/v1/").unwrap()
    }

    #[test]
    fn list_sensors_resolves_against_server_path() {
        let req = list_sensors_request(&server()).unwrap();
        assert_eq!(req.method(), Method::GET);
        assert_eq!(
            req.url().as_str(),
            "http://honeycomb.omnidots.com/api/v1/list_sensors"
        );
        assert!(req.url().query().is_none());
    }

    #[test]
    fn peak_records_query_without_end_time() {
        let params = GetPeakRecordsParams {
            measuring_point_id: 42,
            start_time: 1664817730000,
            end_time: None,
        };
        let req = get_peak_records_request(&server(), &params).unwrap();
        assert_eq!(req.url().path(), "/api/v1/get_peak_records");
        assert_eq!(
            req.url().query(),
            Some("measuring_point_id=42&start_time=1664817730000")
        );
    }

    #[test]
    fn peak_records_query_with_end_time_verbatim() {
        let params = GetPeakRecordsParams {
            measuring_point_id: 42,
            start_time: 1664817730000,
            end_time: Some(1664904130000),
        };
        let req = get_peak_records_request(&server(), &params).unwrap();
        assert_eq!(
            req.url().query(),
            Some("measuring_point_id=42&start_time=1664817730000&end_time=1664904130000")
        );
    }

    #[test]
    fn negative_values_pass_through() {
        let params = GetPeakRecordsParams {
            measuring_point_id: -1,
            start_time: -5,
            end_time: None,
        };
        let req = get_peak_records_request(&server(), &params).unwrap();
        assert_eq!(req.url().query(), Some("measuring_point_id=-1&start_time=-5"));
    }
}
