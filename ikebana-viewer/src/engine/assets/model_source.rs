use super::flower_model::FlowerModel;
use crate::error::LoadError;
use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

const MAX_MODEL_BYTES: u64 = 64 * 1024 * 1024;

/// Anything that can turn a catalog asset path into a parsed model.
///
/// Implementations block; `ModelLoader` runs them on the IO task pool.
pub trait ModelSource: Send + Sync + 'static {
    fn load(&self, path: &str) -> Result<FlowerModel, LoadError>;
}

/// Reads models from a local directory. Catalog paths are rooted at the
/// server's document root, so the leading `/` is stripped.
pub struct DirectoryModelSource {
    root: PathBuf,
}

impl DirectoryModelSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ModelSource for DirectoryModelSource {
    fn load(&self, path: &str) -> Result<FlowerModel, LoadError> {
        let file = self.root.join(path.trim_start_matches('/'));
        let bytes = std::fs::read(&file).map_err(|source| LoadError::Io {
            path: file.display().to_string(),
            source,
        })?;
        FlowerModel::from_gltf_slice(path, &bytes)
    }
}

/// Fetches models from the optimizer's static file server.
pub struct HttpModelSource {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpModelSource {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl ModelSource for HttpModelSource {
    fn load(&self, path: &str) -> Result<FlowerModel, LoadError> {
        let fetch_error = |message: String| LoadError::Fetch {
            path: path.to_string(),
            message,
        };

        let response = self
            .agent
            .get(&self.url(path))
            .call()
            .map_err(|err| fetch_error(err.to_string()))?;

        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(MAX_MODEL_BYTES)
            .read_to_end(&mut bytes)
            .map_err(|err| fetch_error(err.to_string()))?;

        FlowerModel::from_gltf_slice(path, &bytes)
    }
}

/// Shared handle to the configured model source.
#[derive(Resource, Clone)]
pub struct ModelLoader {
    source: Arc<dyn ModelSource>,
}

impl ModelLoader {
    pub fn new(source: impl ModelSource) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Start loading `path` on the IO task pool.
    pub fn spawn(&self, path: String) -> Task<Result<FlowerModel, LoadError>> {
        let source = Arc::clone(&self.source);
        IoTaskPool::get().spawn(async move { source.load(&path) })
    }
}
