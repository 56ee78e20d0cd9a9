// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input events and the update-and-render cycle.
//!
//! Front ends translate raw control values into [`ViewEvent`]s. [`Leaderboard::dispatch`] is the
//! single entry point that mutates the view and re-renders every fragment.

use std::sync::Arc;

use crate::model::{Dataset, UserRecord};
use crate::query::{derive_view, selected_user, SortKey};
use crate::render::{render_detail, render_metrics, render_table, RenderedView};
use crate::ui::ViewState;

/// A raw input, as read from a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Free-text search box contents.
    SearchInput(String),
    /// Sort selector value (`score`, `user`, `active_repo_count`, `stars_total`).
    SortInput(String),
    /// Minimum active repos field contents.
    MinReposInput(String),
    /// A leaderboard row was picked.
    SelectRow(String),
}

/// Search text is matched trimmed and lowercased.
pub fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parses the minimum-repos field.
///
/// Reads an optional sign and the leading run of ASCII digits after any leading whitespace;
/// trailing text is ignored (`"12 repos"` is `12`). No digits, or a negative value, yields `0`.
/// Values past `u64::MAX` saturate.
pub fn parse_min_repos(raw: &str) -> u64 {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 || negative {
        return 0;
    }

    rest[..digits_len].parse::<u64>().unwrap_or(u64::MAX)
}

/// Applies one event to `view`. Returns `true` when the view changed.
pub fn apply_event(view: &mut ViewState, event: ViewEvent) -> bool {
    let rev = view.rev();
    match event {
        ViewEvent::SearchInput(raw) => view.set_search(normalize_search(&raw)),
        ViewEvent::SortInput(raw) => view.set_sort_by(SortKey::from_input(&raw)),
        ViewEvent::MinReposInput(raw) => view.set_min_repos(parse_min_repos(&raw)),
        ViewEvent::SelectRow(user_key) => view.set_selected_key(Some(&user_key)),
    }
    view.rev() != rev
}

/// A loaded dataset together with the view over it.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    dataset: Arc<Dataset>,
    view: ViewState,
}

impl Leaderboard {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let view = ViewState::for_dataset(&dataset);
        Self { dataset, view }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Applies `event` without rendering; used to replay a batch of inputs.
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        tracing::debug!(?event, "view event");
        apply_event(&mut self.view, event)
    }

    /// Applies `event`, then re-renders every fragment.
    pub fn dispatch(&mut self, event: ViewEvent) -> RenderedView {
        self.apply(event);
        self.render()
    }

    /// Selects and reconciles; every front end calls this once per frame before drawing.
    pub fn derive(&mut self) -> DerivedView<'_> {
        let visible = derive_view(&self.dataset, &mut self.view);
        DerivedView {
            dataset: &self.dataset,
            view: &self.view,
            visible,
        }
    }

    /// One full render pass: select, reconcile, then metrics, table and detail.
    pub fn render(&mut self) -> RenderedView {
        let derived = self.derive();

        RenderedView {
            metrics: render_metrics(derived.dataset),
            table_body: render_table(&derived.visible, derived.view),
            detail: render_detail(derived.selected()),
        }
    }
}

/// The visible users of one frame, with the view they were reconciled against.
#[derive(Debug)]
pub struct DerivedView<'a> {
    pub dataset: &'a Dataset,
    pub view: &'a ViewState,
    pub visible: Vec<&'a UserRecord>,
}

impl<'a> DerivedView<'a> {
    pub fn selected(&self) -> Option<&'a UserRecord> {
        selected_user(&self.visible, self.view)
    }

    /// Position of the selected user within `visible`.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.view.selected_key()?;
        self.visible.iter().position(|user| user.user_key == selected)
    }
}
