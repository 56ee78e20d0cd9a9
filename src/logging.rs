// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Process-wide `tracing` subscriber setup.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "vouchbook=info";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Nothing is installed; every event is dropped.
    Off,
    Stderr,
    /// Appends to the file, creating it if needed.
    File(PathBuf),
}

/// Installs the global subscriber, filtered by `RUST_LOG` (default `vouchbook=info`).
pub fn init(target: &LogTarget) -> Result<(), Box<dyn Error>> {
    let filter = env_filter(std::env::var("RUST_LOG").ok().as_deref());

    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .map_err(|err| err as Box<dyn Error>),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|err| err as Box<dyn Error>)
        }
    }
}

/// Blank or unparsable directives fall back to [`DEFAULT_FILTER`].
fn env_filter(raw: Option<&str>) -> EnvFilter {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
