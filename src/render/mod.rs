// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Presentation of a derived view.
//!
//! The HTML presenter produces the metrics, table and detail fragments; the TUI draws the same
//! three regions from the shared helpers here.

use chrono::{Local, TimeZone};

use crate::model::Dataset;

pub mod format;
pub mod html;
pub(crate) mod text;

pub use format::{
    encode_uri_component, format_count, format_generated_at, format_generated_at_in,
    format_score, repo_url,
};
pub use html::{
    escape_html, page_query, render_detail, render_load_error, render_metrics, render_page,
    render_table, RenderedView,
};

pub const NO_MATCH_MESSAGE: &str = "No users match the current filters.";
pub const EMPTY_DETAIL_MESSAGE: &str = "Select a user to inspect vouch sources.";

/// Labeled summary values, in display order, with the date in the viewer's local zone.
pub fn metric_items(dataset: &Dataset) -> [(&'static str, String); 5] {
    metric_items_in(dataset, &Local)
}

pub fn metric_items_in<Tz: TimeZone>(dataset: &Dataset, tz: &Tz) -> [(&'static str, String); 5] {
    let totals = dataset.totals();
    [
        ("Updated", format_generated_at_in(dataset.generated_at(), tz)),
        ("Repos", format_count(totals.repos)),
        ("Users", format_count(totals.unique_users)),
        ("Active Vouches", format_count(totals.active_edges)),
        ("Denounced", format_count(totals.denounced_edges)),
    ]
}
