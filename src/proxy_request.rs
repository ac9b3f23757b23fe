//! A normalized view over an API Gateway proxy event.
//!
//! API Gateway may hand a Lambda its request body either as plain text or
//! base64-encoded, depending on the transport and the configured binary media
//! types. [`ProxyRequest::decoded_body`] centralizes that ambiguity; every
//! JSON accessor except [`ProxyRequest::body_string_map`] routes through it,
//! so callers should treat `decoded_body` as the canonical read path.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::errors::EventError;

/// One inbound API Gateway proxy invocation, as delivered by the runtime.
///
/// Field names follow the proxy-event JSON. Header keys are kept
/// case-sensitive, exactly as delivered. The record is plain data: construct
/// it per request, read it while handling, drop it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyRequest {
    pub body: String,
    pub is_base64_encoded: bool,
    pub headers: HashMap<String, String>,
    pub path_parameters: HashMap<String, String>,
    pub query_string_parameters: HashMap<String, String>,
    pub multi_value_query_string_parameters: HashMap<String, Vec<String>>,
}

impl ProxyRequest {
    /// Return the request body as text, base64-decoding it first if the
    /// event says it arrived encoded.
    pub fn decoded_body(&self) -> Result<String, EventError> {
        if !self.is_base64_encoded {
            return Ok(self.body.clone());
        }

        let bytes = STANDARD
            .decode(&self.body)
            .map_err(|source| EventError::Decode {
                body: self.body.clone(),
                source,
            })?;
        String::from_utf8(bytes).map_err(|source| EventError::Utf8 { source })
    }

    /// Like [`Self::decoded_body`], but for contexts where a malformed body
    /// is itself a programming error.
    ///
    /// # Panics
    ///
    /// Panics if the body cannot be decoded. Do not reach for this on a
    /// recoverable path.
    pub fn expect_body(&self) -> String {
        match self.decoded_body() {
            Ok(body) => body,
            Err(err) => panic!("{err}"),
        }
    }

    /// Pull the credential out of the `Authorization` header.
    ///
    /// Expects the usual `<scheme> <token>` shape and returns the token
    /// part verbatim, without validating the scheme. Returns `None` when the
    /// header is absent or the value doesn't split into exactly two parts.
    pub fn authorization_token(&self) -> Option<&str> {
        let value = self.headers.get("Authorization")?;
        let mut parts = value.split(' ');
        let _scheme = parts.next()?;
        let token = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Some(token)
    }

    /// Parse the body as a JSON object whose values are all strings.
    ///
    /// Reads the *raw* body: a base64-encoded body is not decoded first.
    /// This asymmetry with the other accessors is preserved for
    /// compatibility with existing callers.
    pub fn body_string_map(&self) -> Result<HashMap<String, String>, EventError> {
        serde_json::from_str(&self.body).map_err(|source| EventError::Parse { source })
    }

    /// Parse the (decoded) body as a JSON object with arbitrary values.
    pub fn body_object_map(&self) -> Result<HashMap<String, Value>, EventError> {
        let body = self.decoded_body()?;
        serde_json::from_str(&body).map_err(|source| EventError::Parse { source })
    }

    /// Deserialize the (decoded) body into a caller-supplied shape.
    pub fn parse_body<T: DeserializeOwned>(&self) -> Result<T, EventError> {
        let body = self.decoded_body()?;
        serde_json::from_str(&body).map_err(|source| EventError::Parse { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_body(body: &str, is_base64_encoded: bool) -> ProxyRequest {
        ProxyRequest {
            body: body.to_owned(),
            is_base64_encoded,
            ..Default::default()
        }
    }

    fn with_auth_header(value: &str) -> ProxyRequest {
        let mut req = ProxyRequest::default();
        req.headers
            .insert("Authorization".to_owned(), value.to_owned());
        req
    }

    #[test]
    fn plain_body_passes_through_unchanged() {
        let req = with_body("hello there", false);
        assert_eq!(req.decoded_body().unwrap(), "hello there");
    }

    #[test]
    fn base64_body_round_trips() {
        let original = "{\"plate\": \"b41215\"}";
        let req = with_body(&STANDARD.encode(original), true);
        assert_eq!(req.decoded_body().unwrap(), original);
    }

    #[test]
    fn invalid_base64_is_a_decode_error() {
        let req = with_body("not-valid-base64!!", true);
        let err = req.decoded_body().unwrap_err();
        assert!(matches!(err, EventError::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn decoded_non_utf8_is_rejected() {
        // 0xFF 0xFE is not valid UTF-8.
        let req = with_body(&STANDARD.encode([0xffu8, 0xfe]), true);
        let err = req.decoded_body().unwrap_err();
        assert!(matches!(err, EventError::Utf8 { .. }), "got {err:?}");
    }

    #[test]
    #[should_panic(expected = "base64 decoding body")]
    fn expect_body_panics_on_bad_encoding() {
        with_body("not-valid-base64!!", true).expect_body();
    }

    #[test]
    fn token_extracted_from_two_part_header() {
        let req = with_auth_header("Bearer abc123");
        assert_eq!(req.authorization_token(), Some("abc123"));
    }

    #[test]
    fn one_part_header_yields_no_token() {
        let req = with_auth_header("Bearer");
        assert_eq!(req.authorization_token(), None);
    }

    #[test]
    fn three_part_header_yields_no_token() {
        let req = with_auth_header("Bearer abc 123");
        assert_eq!(req.authorization_token(), None);
    }

    #[test]
    fn missing_header_yields_no_token() {
        assert_eq!(ProxyRequest::default().authorization_token(), None);
    }

    #[test]
    fn header_lookup_is_case_sensitive() {
        let mut req = ProxyRequest::default();
        req.headers
            .insert("authorization".to_owned(), "Bearer abc123".to_owned());
        assert_eq!(req.authorization_token(), None);
    }

    #[test]
    fn object_map_keeps_dynamic_value_types() {
        let req = with_body("{\"a\": \"1\", \"b\": 2}", false);
        let map = req.body_object_map().unwrap();
        assert_eq!(map["a"], Value::String("1".to_owned()));
        assert_eq!(map["b"], Value::from(2));
    }

    #[test]
    fn object_map_decodes_base64_first() {
        let req = with_body(&STANDARD.encode("{\"a\": true}"), true);
        let map = req.body_object_map().unwrap();
        assert_eq!(map["a"], Value::Bool(true));
    }

    #[test]
    fn string_map_parses_raw_body() {
        let req = with_body("{\"a\": \"1\", \"b\": \"2\"}", false);
        let map = req.body_string_map().unwrap();
        assert_eq!(map["a"], "1");
        assert_eq!(map["b"], "2");
    }

    #[test]
    fn string_map_rejects_non_string_values() {
        let req = with_body("{\"a\": 2}", false);
        let err = req.body_string_map().unwrap_err();
        assert!(matches!(err, EventError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn string_map_does_not_base64_decode() {
        // Pins the raw-body behavior: a valid encoded JSON object still
        // fails to parse because the base64 text itself is not JSON.
        let req = with_body(&STANDARD.encode("{\"a\": \"1\"}"), true);
        assert!(req.body_string_map().is_err());
        assert!(req.body_object_map().is_ok());
    }

    #[test]
    fn parse_body_fills_a_typed_target() {
        #[derive(Deserialize)]
        struct Payload {
            name: String,
            count: u32,
        }

        let req = with_body(&STANDARD.encode("{\"name\": \"x\", \"count\": 3}"), true);
        let payload: Payload = req.parse_body().unwrap();
        assert_eq!(payload.name, "x");
        assert_eq!(payload.count, 3);
    }

    #[test]
    fn deserializes_from_proxy_event_json() {
        let event = r#"{
            "body": "ping",
            "isBase64Encoded": false,
            "headers": {"Authorization": "Bearer tok"},
            "pathParameters": {"id": "41"},
            "queryStringParameters": {"q": "x"},
            "multiValueQueryStringParameters": {"q": ["x", "y"]}
        }"#;
        let req: ProxyRequest = serde_json::from_str(event).unwrap();
        assert_eq!(req.body, "ping");
        assert_eq!(req.authorization_token(), Some("tok"));
        assert_eq!(req.path_parameters["id"], "41");
        assert_eq!(req.multi_value_query_string_parameters["q"].len(), 2);
    }
}
