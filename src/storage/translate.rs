use std::{
    fmt::{Debug, Display},
    future::Future,
};

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use thiserror::Error;

use crate::error::CheckError;

/// Errors that can tell whether they are a request-level rejection by the
/// storage service (access denied, no such key, bad request...).
pub trait ClientErrorSource {
    /// The service's message when this is a client error, `None` otherwise.
    fn client_error(&self) -> Option<String>;
}

impl<E, R> ClientErrorSource for SdkError<E, R>
where
    E: ProvideErrorMetadata + Display,
{
    fn client_error(&self) -> Option<String> {
        match self {
            SdkError::ServiceError(service) => {
                let err = service.err();
                let message = err
                    .message()
                    .or(err.code())
                    .map_or_else(|| err.to_string(), str::to_string);
                Some(message)
            }
            _ => None,
        }
    }
}

/// Outcome of a failed storage call after translation.
#[derive(Debug, Error)]
pub enum Translated<E> {
    /// A client error, reclassified as [`CheckError::StorageClient`].
    #[error(transparent)]
    Client(CheckError),

    /// Anything else, passed through untouched.
    #[error(transparent)]
    Other(E),
}

impl<E> Translated<E> {
    pub fn check_error(&self) -> Option<&CheckError> {
        match self {
            Translated::Client(err) => Some(err),
            Translated::Other(_) => None,
        }
    }

    pub fn into_other(self) -> Option<E> {
        match self {
            Translated::Client(_) => None,
            Translated::Other(err) => Some(err),
        }
    }
}

/// Runs `op` and applies the failure policy of every storage call: client
/// errors are logged and become [`CheckError::StorageClient`], all other
/// errors are logged and returned as they are.
pub async fn logged<T, E, F, Fut>(operation: &'static str, op: F) -> Result<T, Translated<E>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: ClientErrorSource + Debug + Display,
{
    let err = match op().await {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };

    if let Some(message) = err.client_error() {
        tracing::error!(operation, error = %err, details = ?err, "S3 client error");
        Err(Translated::Client(CheckError::StorageClient(message)))
    } else {
        tracing::error!(operation, error = %err, details = ?err, "S3 call failed");
        Err(Translated::Other(err))
    }
}
