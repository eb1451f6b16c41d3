pub mod client;
pub mod error;
pub mod object;
pub mod translate;


pub use client::ObjectStoreClient;
pub use error::FetchError;
pub use object::{ObjectData, S3Object, S3ObjectMetadata};
pub use translate::{ClientErrorSource, Translated, logged};
