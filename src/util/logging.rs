use tracing_subscriber::EnvFilter;

// the SDK is chatty at info
const DEFAULT_DIRECTIVES: &str = "info,aws_config=warn,aws_smithy_runtime=warn,aws_sdk_s3=warn";

pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs the process-wide subscriber. Meant to be called once by the host
/// worker at startup; a second call returns an error instead of panicking.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter()) // uses RUST_LOG when set
        .with_target(true) // shows the module path
        .with_level(true) // shows log level
        .try_init()
}
