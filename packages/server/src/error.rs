//! Server start-up and runtime errors.

use thiserror::Error;

use crate::{config::ConfigError, infrastructure::hint_catalog::HintCatalogError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    HintCatalog(#[from] HintCatalogError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
