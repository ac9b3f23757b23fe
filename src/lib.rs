//! Helper libraries for AWS Lambda functions.
//!
//! This crate bundles two small, independent helpers that kept getting
//! rewritten in every function:
//!
//! - [`ProxyRequest`], a decorator over the API Gateway proxy event that
//!   normalizes base64 body decoding, bearer-token extraction, and JSON body
//!   parsing;
//! - [`SsmParameterClient`], a thin reader for the Systems Manager Parameter
//!   Store with path-style name normalization and a fixed decrypt-on-read
//!   policy chosen at construction.
//!
//! Neither depends on the other. Both are plain request/response wrappers:
//! at most one network round-trip per call, no caching, no retries, and no
//! internal logging. Errors come back typed (see [`errors`]) with the
//! underlying cause attached for unwrapping.
//!
//! Two executables are built from this crate: `lambda-helpers-proxyevent`,
//! a Lambda entry point that serves proxy events, and
//! `lambda-helpers-oneshot`, which reads a single parameter from the
//! command line and is useful for local testing.

pub mod errors;
pub mod proxy_request;
pub mod ssm;

pub use errors::{EventError, ParameterError};
pub use proxy_request::ProxyRequest;
pub use ssm::{ParameterStore, SsmParameterClient};
