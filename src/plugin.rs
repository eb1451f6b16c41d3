use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{config::S3Config, error::CheckError, region::RegionError, storage::ObjectStoreClient};

/// Names the worker makes available when it instantiates check functions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactoryContext {
    #[serde(default)]
    pub entity: Entity,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The monitored entity a check runs against.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A plugin that hands check functions to the worker.
pub trait FunctionFactory {
    type Function;

    /// Receives the worker configuration once, before any `create`.
    fn configure(&mut self, conf: &HashMap<String, String>) -> Result<(), CheckError>;

    fn create(&self, ctx: &FactoryContext) -> Self::Function;
}

#[derive(Debug, Clone, Default)]
pub struct S3FunctionFactory {
    config: S3Config,
}

impl S3FunctionFactory {
    pub fn config(&self) -> &S3Config {
        &self.config
    }
}

impl FunctionFactory for S3FunctionFactory {
    type Function = S3Function;

    fn configure(&mut self, conf: &HashMap<String, String>) -> Result<(), CheckError> {
        self.config = S3Config::from_conf(conf)?;
        tracing::debug!(config = ?self.config, "S3 function factory configured");
        Ok(())
    }

    fn create(&self, ctx: &FactoryContext) -> S3Function {
        S3Function {
            region: ctx.entity.region.clone(),
            config: self.config.clone(),
        }
    }
}

/// `ObjectStoreClient` constructor with the entity's region already applied.
#[derive(Debug, Clone)]
pub struct S3Function {
    region: Option<String>,
    config: S3Config,
}

impl S3Function {
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub async fn connect(&self) -> Result<ObjectStoreClient, RegionError> {
        ObjectStoreClient::connect(self.region(), &self.config).await
    }
}
