//! Error taxonomy for the request decorator and the parameter client.
//!
//! Every variant keeps the underlying cause reachable through `source()`;
//! nothing is logged here and nothing is swallowed. Propagation is the
//! caller's job.

use thiserror::Error;

/// Boxed error type for store-seam failures. Same alias that
/// `lambda_runtime::Error` expands to.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures produced while interpreting an API Gateway proxy event.
#[derive(Debug, Error)]
pub enum EventError {
    /// The body was flagged as base64-encoded but didn't decode.
    #[error("base64 decoding body {body:?}; {source}")]
    Decode {
        /// The offending body text, echoed for diagnosis.
        body: String,
        #[source]
        source: base64::DecodeError,
    },

    /// The body decoded to bytes that are not valid UTF-8.
    #[error("decoded body is not valid UTF-8; {source}")]
    Utf8 {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The body (or decoded body) was not the expected JSON shape.
    #[error("parsing body as JSON; {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

/// Failures produced by the SSM parameter client.
#[derive(Debug, Error)]
pub enum ParameterError {
    /// The parameter name was empty or too short to be a real name.
    #[error("getting parameter; invalid name {name:?}")]
    InvalidName {
        /// The rejected name, before normalization.
        name: String,
    },

    /// The store call itself failed (network, permissions, throttling,
    /// deadline). Never retried here.
    #[error("getting parameter; {source}")]
    Transport {
        #[source]
        source: BoxError,
    },

    /// The store answered the call but supplied no value. Distinct from a
    /// transport failure: it signals a store-side inconsistency.
    #[error("getting parameter; store returned no value")]
    MissingValue,

    /// The write path is a stub. Always returned by the write operations,
    /// never transient.
    #[error("writing parameter; not implemented")]
    NotImplemented,
}
