use thiserror::Error;

/// Failures raised by check functions. The worker records the rendered
/// message of any of these as the failed check's result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("{0}")]
    Failed(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Insufficient permissions for user {user} to access {entity}")]
    InsufficientPermissions { user: String, entity: String },

    #[error("JMX Query failed: {0}")]
    JmxQuery(String),

    #[error("HTTP request failed for {url}: {message}")]
    Http { message: String, url: String },

    #[error("DB operation {operation} failed: {message}")]
    Db { message: String, operation: String },

    #[error("Result size error: {0}")]
    ResultSize(String),

    #[error("Storage Client Error: {0}")]
    StorageClient(String),
}

impl CheckError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn insufficient_permissions(user: impl Into<String>, entity: impl Into<String>) -> Self {
        Self::InsufficientPermissions {
            user: user.into(),
            entity: entity.into(),
        }
    }

    pub fn jmx_query(message: impl Into<String>) -> Self {
        Self::JmxQuery(message.into())
    }

    pub fn http(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn db(message: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::Db {
            message: message.into(),
            operation: operation.into(),
        }
    }

    pub fn result_size(message: impl Into<String>) -> Self {
        Self::ResultSize(message.into())
    }

    pub fn storage_client(message: impl Into<String>) -> Self {
        Self::StorageClient(message.into())
    }

    /// Stable name of the error kind, as reported next to the message.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::Failed(_) => "CheckError",
            CheckError::Configuration(_) => "ConfigurationError",
            CheckError::InsufficientPermissions { .. } => "InsufficientPermissionsError",
            CheckError::JmxQuery(_) => "JmxQueryError",
            CheckError::Http { .. } => "HttpError",
            CheckError::Db { .. } => "DbError",
            CheckError::ResultSize(_) => "ResultSizeError",
            CheckError::StorageClient(_) => "StorageClientError",
        }
    }
}

/// Raised by notification plugins, outside the check failure family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct NotificationError(pub String);

/// Raised when a check touches something it is not allowed to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SecurityError(pub String);
