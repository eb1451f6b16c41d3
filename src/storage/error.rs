use aws_sdk_s3::{error::SdkError, operation::get_object::GetObjectError};
use thiserror::Error;

use crate::storage::translate::ClientErrorSource;

/// Failure of a full-object fetch, before translation.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Boxed, the SDK error dwarfs the other variant.
    #[error(transparent)]
    Request(Box<SdkError<GetObjectError>>),

    /// The body stream broke after the service accepted the request.
    #[error("failed to read object body: {0}")]
    Body(#[from] std::io::Error),
}

impl From<SdkError<GetObjectError>> for FetchError {
    fn from(err: SdkError<GetObjectError>) -> Self {
        FetchError::Request(Box::new(err))
    }
}

impl ClientErrorSource for FetchError {
    fn client_error(&self) -> Option<String> {
        match self {
            FetchError::Request(err) => err.client_error(),
            FetchError::Body(_) => None,
        }
    }
}
