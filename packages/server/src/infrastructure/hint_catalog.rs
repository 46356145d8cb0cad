//! Static hint catalog served to controllers.
//!
//! Loaded once at start-up from a JSON file holding a list of `{id, title, text}` entries.
//! The realtime core never looks at it: controllers pick a hint client-side and send its
//! text with `updateHint` like any free-text hint.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HintCatalogError {
    #[error("failed to read hint file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid hint file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Hint identifier, numeric or textual depending on how the catalog was authored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HintId {
    Number(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintEntry {
    pub id: HintId,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HintCatalog {
    entries: Vec<HintEntry>,
}

impl HintCatalog {
    pub fn from_json(json: &str) -> Result<Self, HintCatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn load(path: &Path) -> Result<Self, HintCatalogError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| HintCatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            "Loaded {} hints from {}",
            catalog.entries.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn entries(&self) -> &[HintEntry] {
        &self.entries
    }
}
