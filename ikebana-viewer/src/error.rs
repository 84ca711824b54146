use thiserror::Error;

/// Failure to obtain a usable flower or vase model.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no model is registered for flower type '{0}'")]
    UnknownFlowerType(String),
    #[error("failed to read model '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to fetch model '{path}': {message}")]
    Fetch { path: String, message: String },
    #[error("failed to parse model '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: gltf::Error,
    },
    #[error("model '{0}' contains no mesh geometry")]
    Empty(String),
}

/// Failure that ends an optimization run or an upload.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("network error: {0}")]
    Network(String),
    #[error("protocol error: {0}")]
    Protocol(String),
}

impl RunError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }
}

impl From<serde_json::Error> for RunError {
    fn from(err: serde_json::Error) -> Self {
        Self::Protocol(err.to_string())
    }
}
