// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// A precomputed vouch book, as produced by the upstream dataset builder.
///
/// Loaded once and never mutated afterwards; views borrow users out of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    generated_at: String,
    totals: Totals,
    users: Vec<UserRecord>,
}

impl Dataset {
    pub fn new(generated_at: impl Into<String>, totals: Totals, users: Vec<UserRecord>) -> Self {
        Self {
            generated_at: generated_at.into(),
            totals,
            users,
        }
    }

    /// Raw creation timestamp, exactly as stored.
    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    #[cfg(test)]
    pub(crate) fn user(&self, user_key: &str) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.user_key == user_key)
    }

    /// Key of the first stored user; the initial selection for a fresh view.
    pub fn first_user_key(&self) -> Option<&str> {
        self.users.first().map(|user| user.user_key.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub repos: u64,
    pub unique_users: u64,
    pub active_edges: u64,
    pub denounced_edges: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_key: String,
    pub user: String,
    pub score: f64,
    pub active_repo_count: u64,
    pub denounced_repo_count: u64,
    pub stars_total: u64,
    pub repos: Vec<RepoEntry>,
}

impl UserRecord {
    pub fn new(user_key: impl Into<String>, user: impl Into<String>, score: f64) -> Self {
        Self {
            user_key: user_key.into(),
            user: user.into(),
            score,
            active_repo_count: 0,
            denounced_repo_count: 0,
            stars_total: 0,
            repos: Vec::new(),
        }
    }

    pub fn with_counts(mut self, active: u64, denounced: u64, stars_total: u64) -> Self {
        self.active_repo_count = active;
        self.denounced_repo_count = denounced;
        self.stars_total = stars_total;
        self
    }

    pub fn with_repo(mut self, repo: RepoEntry) -> Self {
        self.repos.push(repo);
        self
    }
}

/// One vouch (or denouncement) of a user, as recorded in a single repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    /// `owner/name`.
    pub repo: String,
    pub stars: u64,
    pub denounced: bool,
    pub path: String,
    /// The unparsed source line, kept for auditing.
    pub raw_entry: String,
}

impl RepoEntry {
    pub fn new(
        repo: impl Into<String>,
        stars: u64,
        denounced: bool,
        path: impl Into<String>,
        raw_entry: impl Into<String>,
    ) -> Self {
        Self {
            repo: repo.into(),
            stars,
            denounced,
            path: path.into(),
            raw_entry: raw_entry.into(),
        }
    }
}
