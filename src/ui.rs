// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! View state shared by every front end.
//!
//! The state holds already-normalized values; raw input parsing lives in [`crate::ops`].

use smol_str::SmolStr;

use crate::model::Dataset;
use crate::query::SortKey;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    rev: u64,
    search: String,
    sort_by: SortKey,
    min_repos: u64,
    selected_key: Option<SmolStr>,
}

impl ViewState {
    /// Default filters with the first stored user selected.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        Self {
            selected_key: dataset.first_user_key().map(SmolStr::new),
            ..Self::default()
        }
    }

    /// Bumped on every effective change.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    pub fn min_repos(&self) -> u64 {
        self.min_repos
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.selected_key.as_deref()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if self.search == search {
            return;
        }
        self.search = search;
        self.bump();
    }

    pub fn set_sort_by(&mut self, sort_by: SortKey) {
        if self.sort_by == sort_by {
            return;
        }
        self.sort_by = sort_by;
        self.bump();
    }

    pub fn set_min_repos(&mut self, min_repos: u64) {
        if self.min_repos == min_repos {
            return;
        }
        self.min_repos = min_repos;
        self.bump();
    }

    pub fn set_selected_key(&mut self, selected_key: Option<&str>) {
        if self.selected_key.as_deref() == selected_key {
            return;
        }
        self.selected_key = selected_key.map(SmolStr::new);
        self.bump();
    }

    fn bump(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }
}
