//! dog.ceo breed list provider.
//!
//! Resolves breeds against the public [Dog API](https://dog.ceo/dog-api/).
//!
//! # API Endpoint
//!
//! `GET {base_url}/breed/{breed}/list`
//!
//! A known breed answers with:
//!
//! ```text
//! { "message": ["afghan", "basset"], "status": "success" }
//! ```
//!
//! and an unknown one with:
//!
//! ```text
//! { "status": "error", "message": "Breed not found (main breed does not exist)", "code": 404 }
//! ```
//!
//! Every failure (blank input, transport error, HTTP status, unexpected JSON)
//! is reported as [`BreedNotFound`]; the cause is only logged.

use serde::Deserialize;
use tracing::debug;

use crate::provider::{BreedFetcher, BreedNotFound, HttpClient, SubBreeds};

/// Default base URL of the Dog API.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Response envelope shared by success and error answers.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: serde_json::Value,
}

/// Breed fetcher backed by the dog.ceo HTTP API.
///
/// # Example
///
/// ```no_run
/// use dogapi::provider::{BreedFetcher, DogCeoFetcher, ReqwestClient};
///
/// let client = ReqwestClient::new().unwrap();
/// let fetcher = DogCeoFetcher::new(client);
/// let hounds = fetcher.sub_breeds(Some("hound"));
/// ```
pub struct DogCeoFetcher<C: HttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: HttpClient> DogCeoFetcher<C> {
    /// Creates a fetcher against the public dog.ceo endpoint.
    pub fn new(http_client: C) -> Self {
        Self::with_base_url(http_client, DEFAULT_BASE_URL)
    }

    /// Creates a fetcher against a custom base URL (mirrors, local stubs).
    pub fn with_base_url(http_client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    /// The base URL requests are built from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The HTTP client used for requests.
    pub fn http_client(&self) -> &C {
        &self.http_client
    }

    fn build_url(&self, breed: &str) -> String {
        format!("{}/breed/{}/list", self.base_url, breed.to_lowercase())
    }

    /// Extracts the sub-breed list from a response body.
    ///
    /// Returns `None` when the body is not a successful breed list.
    fn parse_body(body: &[u8]) -> Option<Vec<String>> {
        let response: ApiResponse = match serde_json::from_slice(body) {
            Ok(r) => r,
            Err(e) => {
                debug!(error = %e, "Malformed Dog API response");
                return None;
            }
        };

        let success = response
            .status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("success"));
        if !success {
            debug!(status = ?response.status, "Dog API reported failure");
            return None;
        }

        match response.message {
            serde_json::Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            other => {
                debug!(message = %other, "Dog API message is not a list");
                None
            }
        }
    }
}

impl<C: HttpClient> BreedFetcher for DogCeoFetcher<C> {
    fn sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds, BreedNotFound> {
        let name = match breed {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(BreedNotFound::new(breed)),
        };

        let url = self.build_url(name);
        let body = self.http_client.get(&url).map_err(|e| {
            debug!(error = %e, url = %url, "Dog API request failed");
            BreedNotFound::new(breed)
        })?;

        Self::parse_body(&body)
            .map(SubBreeds::from)
            .ok_or_else(|| BreedNotFound::new(breed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{HttpError, MockHttpClient};

    const HOUND_BODY: &str = r#"{"message":["afghan","basset","blood"],"status":"success"}"#;
    const ERROR_BODY: &str =
        r#"{"status":"error","message":"Breed not found (main breed does not exist)","code":404}"#;

    #[test]
    fn test_url_construction() {
        let provider = DogCeoFetcher::new(MockHttpClient::ok(HOUND_BODY));
        assert_eq!(
            provider.build_url("Hound"),
            "https://dog.ceo/api/breed/hound/list"
        );
    }

    #[test]
    fn test_custom_base_url_trims_slash() {
        let provider =
            DogCeoFetcher::with_base_url(MockHttpClient::ok(HOUND_BODY), "http://localhost:8080/api/");
        assert_eq!(provider.base_url(), "http://localhost:8080/api");
        assert_eq!(
            provider.build_url("pug"),
            "http://localhost:8080/api/breed/pug/list"
        );
    }

    #[test]
    fn test_success_preserves_order() {
        let provider = DogCeoFetcher::new(MockHttpClient::ok(HOUND_BODY));

        let result = provider.sub_breeds(Some("hound")).unwrap();
        assert_eq!(&*result, ["afghan", "basset", "blood"]);
    }

    #[test]
    fn test_success_empty_list() {
        let provider = DogCeoFetcher::new(MockHttpClient::ok(
            r#"{"message":[],"status":"success"}"#,
        ));

        let result = provider.sub_breeds(Some("pug")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_status_is_case_insensitive() {
        let provider = DogCeoFetcher::new(MockHttpClient::ok(
            r#"{"message":["x"],"status":"SUCCESS"}"#,
        ));
        assert!(provider.sub_breeds(Some("a")).is_ok());
    }

    #[test]
    fn test_error_body_is_not_found() {
        let provider = DogCeoFetcher::new(MockHttpClient::ok(ERROR_BODY));

        let err = provider.sub_breeds(Some("Unicorn")).unwrap_err();
        assert_eq!(err.breed(), Some("Unicorn"));
    }

    #[test]
    fn test_missing_status_is_not_found() {
        let provider = DogCeoFetcher::new(MockHttpClient::ok(r#"{"message":["a"]}"#));
        assert!(provider.sub_breeds(Some("hound")).is_err());
    }

    #[test]
    fn test_non_list_message_is_not_found() {
        let provider = DogCeoFetcher::new(MockHttpClient::ok(
            r#"{"message":"nope","status":"success"}"#,
        ));
        assert!(provider.sub_breeds(Some("hound")).is_err());
    }

    #[test]
    fn test_non_string_element_is_not_found() {
        let provider = DogCeoFetcher::new(MockHttpClient::ok(
            r#"{"message":["a", 3],"status":"success"}"#,
        ));
        assert!(provider.sub_breeds(Some("hound")).is_err());
    }

    #[test]
    fn test_malformed_json_is_not_found() {
        let provider = DogCeoFetcher::new(MockHttpClient::ok("<html>oops</html>"));
        assert!(provider.sub_breeds(Some("hound")).is_err());
    }

    #[test]
    fn test_http_error_is_not_found() {
        let provider = DogCeoFetcher::new(MockHttpClient::err(HttpError::Status {
            status: 404,
            url: "https://dog.ceo/api/breed/unicorn/list".to_string(),
        }));

        let err = provider.sub_breeds(Some("unicorn")).unwrap_err();
        assert_eq!(err, BreedNotFound::new(Some("unicorn")));
    }

    #[test]
    fn test_transport_error_is_not_found() {
        let provider = DogCeoFetcher::new(MockHttpClient::err(HttpError::Request(
            "connection refused".to_string(),
        )));
        assert!(provider.sub_breeds(Some("hound")).is_err());
    }

    #[test]
    fn test_absent_and_blank_skip_request() {
        let provider = DogCeoFetcher::new(MockHttpClient::ok(HOUND_BODY));

        assert_eq!(
            provider.sub_breeds(None).unwrap_err(),
            BreedNotFound::new(None)
        );
        assert!(provider.sub_breeds(Some("")).is_err());
        assert!(provider.sub_breeds(Some("   ")).is_err());
        assert!(provider.http_client.requested_urls().is_empty());
    }

    #[test]
    fn test_requests_lowercased_breed() {
        let provider = DogCeoFetcher::new(MockHttpClient::ok(HOUND_BODY));

        provider.sub_breeds(Some("HOUND")).unwrap();
        assert_eq!(
            provider.http_client.requested_urls(),
            vec!["https://dog.ceo/api/breed/hound/list"]
        );
    }
}
