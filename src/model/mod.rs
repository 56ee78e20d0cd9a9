// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A dataset holds aggregate totals plus an ordered list of users, each with the repositories
//! that vouched for (or denounced) them.

pub mod dataset;
#[cfg(test)]
pub(crate) mod fixtures;

pub use dataset::{Dataset, RepoEntry, Totals, UserRecord};
