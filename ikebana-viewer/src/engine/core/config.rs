use crate::engine::assets::model_source::{DirectoryModelSource, HttpModelSource, ModelLoader};
use bevy::prelude::*;
use constants::endpoints::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_URL};
use std::path::PathBuf;
use std::time::Duration;

/// Where flower and vase models come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRoot {
    /// Static file server of the optimizer.
    Server,
    /// Local directory mirroring the server's document root.
    Directory(PathBuf),
}

/// Startup configuration, assembled from command-line flags.
#[derive(Resource, Debug, Clone)]
pub struct ViewerConfig {
    pub server_url: String,
    pub asset_root: AssetRoot,
    /// Flower type the optimizer must include; empty for none.
    pub forced_flower: String,
    /// Vase name; empty for no vase.
    pub vase: String,
    pub request_timeout: Duration,
    /// Request a run as soon as the app starts.
    pub auto_start: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            asset_root: AssetRoot::Server,
            forced_flower: String::new(),
            vase: String::new(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            auto_start: true,
        }
    }
}

impl ViewerConfig {
    pub fn model_loader(&self) -> ModelLoader {
        match &self.asset_root {
            AssetRoot::Server => {
                ModelLoader::new(HttpModelSource::new(&self.server_url, self.request_timeout))
            }
            AssetRoot::Directory(root) => ModelLoader::new(DirectoryModelSource::new(root.clone())),
        }
    }
}
