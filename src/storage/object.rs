use std::borrow::Cow;

use aws_sdk_s3::{
    operation::head_object::HeadObjectOutput,
    primitives::DateTimeFormat,
    types::{ServerSideEncryption, StorageClass},
};
use bytes::Bytes;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectData {
    Present(Bytes),
    Absent,
}

/// Content of an S3 object, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Object {
    data: ObjectData,
}

impl S3Object {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: ObjectData::Present(data.into()),
        }
    }

    pub fn absent() -> Self {
        Self {
            data: ObjectData::Absent,
        }
    }

    pub fn exists(&self) -> bool {
        matches!(self.data, ObjectData::Present(_))
    }

    /// Size in bytes, or -1 if the object does not exist.
    pub fn size(&self) -> i64 {
        match &self.data {
            ObjectData::Present(bytes) => i64::try_from(bytes.len()).unwrap_or(i64::MAX),
            ObjectData::Absent => -1,
        }
    }

    pub fn bytes(&self) -> Option<&Bytes> {
        match &self.data {
            ObjectData::Present(bytes) => Some(bytes),
            ObjectData::Absent => None,
        }
    }

    /// The content as text. Invalid UTF-8 sequences are replaced, the rest is
    /// returned as stored.
    pub fn text(&self) -> Option<Cow<'_, str>> {
        self.bytes().map(|bytes| String::from_utf8_lossy(bytes))
    }

    /// Parses the content as JSON. A missing object is `Ok(None)`; content
    /// that is not JSON is an error.
    pub fn json(&self) -> Result<Option<Value>, serde_json::Error> {
        match &self.data {
            ObjectData::Present(bytes) => serde_json::from_slice(bytes).map(Some),
            ObjectData::Absent => Ok(None),
        }
    }
}

/// Fields of a HEAD response, keyed the way S3 names them (`ContentLength`,
/// `ETag`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct S3ObjectMetadata {
    record: Map<String, Value>,
}

impl S3ObjectMetadata {
    pub fn new(record: Map<String, Value>) -> Self {
        Self { record }
    }

    /// Any field at all counts, even without `ContentLength`.
    pub fn exists(&self) -> bool {
        !self.record.is_empty()
    }

    pub fn size(&self) -> i64 {
        self.record
            .get("ContentLength")
            .and_then(Value::as_i64)
            .unwrap_or(-1)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.record.get(field)
    }

    pub fn record(&self) -> &Map<String, Value> {
        &self.record
    }
}

impl From<HeadObjectOutput> for S3ObjectMetadata {
    fn from(output: HeadObjectOutput) -> Self {
        let last_modified = output
            .last_modified()
            .and_then(|t| t.fmt(DateTimeFormat::DateTime).ok());
        let encoding = output.content_encoding();
        let storage_class = output.storage_class().map(StorageClass::as_str);
        let encryption = output
            .server_side_encryption()
            .map(ServerSideEncryption::as_str);
        let user_metadata = output
            .metadata()
            .filter(|m| !m.is_empty())
            .and_then(|m| serde_json::to_value(m).ok());

        let mut record = Map::new();
        let mut put = |field: &str, value: Option<Value>| {
            if let Some(value) = value {
                record.insert(field.to_string(), value);
            }
        };

        put("ContentLength", output.content_length().map(Value::from));
        put("ContentType", output.content_type().map(Value::from));
        put("ContentEncoding", encoding.map(Value::from));
        put("CacheControl", output.cache_control().map(Value::from));
        put("AcceptRanges", output.accept_ranges().map(Value::from));
        put("ETag", output.e_tag().map(Value::from));
        put("LastModified", last_modified.map(Value::from));
        put("VersionId", output.version_id().map(Value::from));
        put("DeleteMarker", output.delete_marker().map(Value::from));
        put("StorageClass", storage_class.map(Value::from));
        put("ServerSideEncryption", encryption.map(Value::from));
        put("Metadata", user_metadata);

        Self { record }
    }
}
