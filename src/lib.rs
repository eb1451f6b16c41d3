#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! S3 check functions for the monitoring worker: HEAD and GET against a
//! bucket, with storage client failures reported as [`CheckError`]s.

pub mod config;
pub mod error;
pub mod plugin;
pub mod region;
pub mod storage;
pub mod util;

pub use config::S3Config;
pub use error::{CheckError, NotificationError, SecurityError};
pub use plugin::{FactoryContext, FunctionFactory, S3Function, S3FunctionFactory};
pub use region::{RegionError, RegionResolver};
pub use storage::{ObjectStoreClient, S3Object, S3ObjectMetadata, Translated};
