use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Region},
    error::SdkError,
    operation::head_object::HeadObjectError,
};
use bytes::Bytes;
use tokio::io::AsyncReadExt;

use crate::{
    config::S3Config,
    region::{RegionError, RegionResolver},
    storage::{
        error::FetchError,
        object::{S3Object, S3ObjectMetadata},
        translate::{Translated, logged},
    },
};

/// S3 access bound to a single region for its whole lifetime.
#[derive(Debug, Clone)]
pub struct ObjectStoreClient {
    region: String,
    client: Client,
}

impl ObjectStoreClient {
    /// Binds a client to `region`, or to the instance's region when none is
    /// given. A failed region lookup is returned as is.
    pub async fn connect(region: Option<&str>, config: &S3Config) -> Result<Self, RegionError> {
        let region = RegionResolver::new(config).resolve(region).await?;

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.clone()))
            .load()
            .await;
        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        builder.set_force_path_style(Some(config.force_path_style));
        builder.set_endpoint_url(config.endpoint_url.clone());

        let client = Client::from_conf(builder.build());
        tracing::info!(%region, endpoint = ?config.endpoint_url, "S3 client ready");
        Ok(Self::from_client(region, client))
    }

    pub fn from_client(region: impl Into<String>, client: Client) -> Self {
        Self {
            region: region.into(),
            client,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Metadata of `bucket`/`key` without transferring the content, so it is
    /// fine for objects of any size.
    pub async fn head_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<S3ObjectMetadata, Translated<SdkError<HeadObjectError>>> {
        tracing::debug!(bucket, key, "HEAD object");
        logged("head_object", || async move {
            self.client
                .head_object()
                .bucket(bucket)
                .key(key)
                .send()
                .await
                .map(S3ObjectMetadata::from)
        })
        .await
    }

    /// Reads the whole object into memory.
    pub async fn get_object(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<S3Object, Translated<FetchError>> {
        tracing::debug!(bucket, key, "GET object");
        logged("get_object", || self.fetch(bucket, key)).await
    }

    async fn fetch(&self, bucket: &str, key: &str) -> Result<S3Object, FetchError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;
        let expected = output
            .content_length()
            .and_then(|len| usize::try_from(len).ok());

        // staging lives only for this call and is dropped on every early return
        let mut staging = Vec::with_capacity(expected.unwrap_or_default());
        let mut body = output.body.into_async_read();
        body.read_to_end(&mut staging).await?;

        tracing::debug!(bucket, key, size = staging.len(), "Object fetched");
        Ok(S3Object::new(Bytes::from(staging)))
    }
}
