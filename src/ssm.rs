//! A thin client for the Systems Manager Parameter Store.
//!
//! The client does one thing per call: validate the name, normalize it to
//! the path-style form SSM expects, fetch, and interpret the result. There
//! is no caching and no retry; every read is a fresh round-trip, and a
//! failure from the store is surfaced to the caller as-is.

use std::future::Future;
use std::time::Duration;

use crate::errors::{BoxError, ParameterError};

/// The seam to the remote store. Lets tests stand in for the real SSM
/// client without touching the network.
pub trait ParameterStore {
    /// Fetch a parameter's string value. `Ok(None)` means the store
    /// answered the call but supplied no value.
    fn fetch(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> impl Future<Output = Result<Option<String>, BoxError>> + Send;
}

impl ParameterStore for aws_sdk_ssm::Client {
    async fn fetch(&self, name: &str, with_decryption: bool) -> Result<Option<String>, BoxError> {
        let out = self
            .get_parameter()
            .name(name)
            .with_decryption(with_decryption)
            .send()
            .await?;
        Ok(out.parameter.and_then(|p| p.value))
    }
}

/// Reads (and nominally writes) named string parameters.
///
/// The encryption mode is fixed at construction: when `encrypted` is true,
/// every read asks the store to decrypt the value at rest. The client holds
/// no mutable state, so a single instance can be shared freely across
/// concurrent tasks.
#[derive(Debug, Clone)]
pub struct SsmParameterClient<S = aws_sdk_ssm::Client> {
    store: S,
    encrypted: bool,
}

impl SsmParameterClient {
    /// Build a client backed by the real SSM service, with credentials and
    /// region taken from the ambient environment.
    pub async fn from_env(encrypted: bool) -> Self {
        let config = aws_config::load_from_env().await;
        Self::new(aws_sdk_ssm::Client::new(&config), encrypted)
    }
}

impl<S: ParameterStore> SsmParameterClient<S> {
    pub fn new(store: S, encrypted: bool) -> Self {
        SsmParameterClient { store, encrypted }
    }

    /// Read one parameter's string value.
    ///
    /// Names are path-style: a missing leading `/` is prepended before the
    /// lookup (SSM rejects bare names with a permission error otherwise).
    /// Cancellation is dropping the returned future; see
    /// [`Self::read_string_with_timeout`] for a deadline-bounded form.
    pub async fn read_string(&self, name: &str) -> Result<String, ParameterError> {
        if name.len() <= 1 {
            return Err(ParameterError::InvalidName {
                name: name.to_owned(),
            });
        }

        let name = if name.starts_with('/') {
            name.to_owned()
        } else {
            format!("/{name}")
        };

        let value = self
            .store
            .fetch(&name, self.encrypted)
            .await
            .map_err(|source| ParameterError::Transport { source })?;

        value.ok_or(ParameterError::MissingValue)
    }

    /// Like [`Self::read_string`], but gives up after `timeout`. Expiry is
    /// reported as a transport failure, same as any other store-call error.
    pub async fn read_string_with_timeout(
        &self,
        name: &str,
        timeout: Duration,
    ) -> Result<String, ParameterError> {
        match tokio::time::timeout(timeout, self.read_string(name)).await {
            Ok(result) => result,
            Err(elapsed) => Err(ParameterError::Transport {
                source: elapsed.into(),
            }),
        }
    }

    /// Write one parameter's string value. Not implemented: present so a
    /// read-only client can satisfy a read/write contract, and always fails
    /// without issuing a store call.
    pub async fn write_string(&self, _name: &str, _value: &str) -> Result<(), ParameterError> {
        Err(ParameterError::NotImplemented)
    }

    /// Deadline-bounded form of [`Self::write_string`]. Same fixed failure.
    pub async fn write_string_with_timeout(
        &self,
        name: &str,
        value: &str,
        _timeout: Duration,
    ) -> Result<(), ParameterError> {
        self.write_string(name, value).await
    }
}
