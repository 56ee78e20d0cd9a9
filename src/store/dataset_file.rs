// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::Dataset;

pub const DEFAULT_DATA_PATH: &str = "data/vouch_book.json";
pub const DATA_PATH_ENV: &str = "VOUCHBOOK_DATA";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("json error at {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } => path,
        }
    }
}

/// Location of a `vouch_book.json` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFile {
    path: PathBuf,
}

impl DatasetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// An explicit path wins, then `VOUCHBOOK_DATA`, then `data/vouch_book.json`.
    pub fn resolve(explicit: Option<&str>) -> Self {
        Self::resolve_with_env(explicit, std::env::var(DATA_PATH_ENV).ok().as_deref())
    }

    fn resolve_with_env(explicit: Option<&str>, env: Option<&str>) -> Self {
        let path = explicit
            .or(env.filter(|value| !value.trim().is_empty()))
            .unwrap_or(DEFAULT_DATA_PATH);
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Dataset, StoreError> {
        let bytes = fs::read(&self.path).map_err(|source| {
            tracing::warn!(path = %self.path.display(), error = %source, "dataset read failed");
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        let dataset: Dataset = serde_json::from_slice(&bytes).map_err(|source| {
            tracing::warn!(path = %self.path.display(), error = %source, "dataset parse failed");
            StoreError::Json {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::info!(
            path = %self.path.display(),
            users = dataset.users().len(),
            generated_at = dataset.generated_at(),
            "dataset loaded"
        );
        Ok(dataset)
    }
}
