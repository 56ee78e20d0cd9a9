// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTML fragments for the leaderboard page.
//!
//! Each fragment is rendered independently. Every string that comes from the dataset or from
//! user input passes through [`escape_html`] before it is interpolated.

use crate::model::{Dataset, RepoEntry, UserRecord};
use crate::query::SortKey;
use crate::ui::ViewState;

use super::format::{encode_uri_component, format_count, format_score, repo_url};
use super::{metric_items, EMPTY_DETAIL_MESSAGE, NO_MATCH_MESSAGE};

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Five labeled summary values.
pub fn render_metrics(dataset: &Dataset) -> String {
    let mut out = String::new();
    for (label, value) in metric_items(dataset) {
        out.push_str(&format!(
            r#"
      <article class="metric">
        <div class="metric-label">{}</div>
        <div class="metric-value">{}</div>
      </article>"#,
            escape_html(label),
            escape_html(&value),
        ));
    }
    out
}

/// Table body rows for `visible`, in order.
///
/// Each row links back to the page with the current filters and itself selected, which is the
/// markup-only form of a row click.
pub fn render_table(visible: &[&UserRecord], view: &ViewState) -> String {
    if visible.is_empty() {
        return format!(
            r#"
      <tr><td colspan="6">{}</td></tr>
    "#,
            escape_html(NO_MATCH_MESSAGE)
        );
    }

    let mut out = String::new();
    for (idx, user) in visible.iter().enumerate() {
        let selected_class =
            if view.selected_key() == Some(user.user_key.as_str()) { "is-selected" } else { "" };
        let denounced_class = if user.denounced_repo_count > 0 { "denounced" } else { "" };
        let href = page_query(view, Some(&user.user_key));
        out.push_str(&format!(
            r#"
        <tr class="{selected_class}" data-key="{key}">
          <td>{rank}</td>
          <td><a class="user-link" href="{href}">{name}</a></td>
          <td class="score">{score}</td>
          <td>{active}</td>
          <td class="{denounced_class}">{denounced}</td>
          <td>{stars}</td>
        </tr>
      "#,
            key = escape_html(&user.user_key),
            rank = idx + 1,
            href = escape_html(&href),
            name = escape_html(&user.user),
            score = format_score(user.score),
            active = user.active_repo_count,
            denounced = user.denounced_repo_count,
            stars = format_count(user.stars_total),
        ));
    }
    out
}

/// Detail panel for the (already reconciled) selected user.
pub fn render_detail(selected: Option<&UserRecord>) -> String {
    let Some(user) = selected else {
        return format!(r#"<p class="detail-empty">{}</p>"#, escape_html(EMPTY_DETAIL_MESSAGE));
    };

    let mut repos = String::new();
    for repo in &user.repos {
        repos.push_str(&render_repo_item(repo));
    }

    format!(
        r#"
    <div class="detail-header">
      <h2 class="detail-name">{name}</h2>
      <div class="score">{score}</div>
    </div>
    <p class="repo-meta">
      {active} active repos, {denounced} denounced, {stars} weighted stars.
    </p>
    <ul class="repo-list">
      {repos}
    </ul>
  "#,
        name = escape_html(&user.user),
        score = format_score(user.score),
        active = user.active_repo_count,
        denounced = user.denounced_repo_count,
        stars = format_count(user.stars_total),
    )
}

fn render_repo_item(repo: &RepoEntry) -> String {
    let status = if repo.denounced {
        r#"<span class="denounced">denounced</span>"#
    } else {
        "<span>active</span>"
    };

    format!(
        r#"
            <li class="repo-item">
              <div class="repo-top">
                <a class="repo-name" href="{href}" target="_blank" rel="noreferrer">{name}</a>
                <span>{status}</span>
              </div>
              <div class="repo-meta">
                {stars} stars • {path} • {raw}
              </div>
            </li>
          "#,
        href = escape_html(&repo_url(&repo.repo)),
        name = escape_html(&repo.repo),
        stars = format_count(repo.stars),
        path = escape_html(&repo.path),
        raw = escape_html(&repo.raw_entry),
    )
}

/// The page that replaces the whole interface when the dataset cannot be loaded.
pub fn render_load_error(data_path: &str, error: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Vouch Book</title></head>
<body><main class="page"><p>Failed to load data file: <code>{}</code></p><p>{}</p></main></body>
</html>
"#,
        escape_html(data_path),
        escape_html(error),
    )
}

/// Already-rendered fragments for one pass over the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub metrics: String,
    pub table_body: String,
    pub detail: String,
}

/// Full page: controls, leaderboard header row, and the three fragments.
pub fn render_page(view: &ViewState, rendered: &RenderedView) -> String {
    let mut sort_options = String::new();
    for key in SortKey::ALL {
        let selected = if key == view.sort_by() { " selected" } else { "" };
        sort_options.push_str(&format!(
            r#"<option value="{}"{selected}>{}</option>"#,
            key.as_str(),
            escape_html(key.label()),
        ));
    }

    // Keeps the selection across form submissions; reconciliation still applies on render.
    let select_field = view
        .selected_key()
        .map(|key| {
            format!(
                r#"
      <input type="hidden" name="select" value="{}">"#,
                escape_html(key)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Vouch Book</title>
</head>
<body>
  <main class="page">
    <section id="metrics" class="metrics">{metrics}</section>
    <form class="controls" method="get" action="">
      <input id="searchInput" type="search" name="search" placeholder="Search users" value="{search}">
      <select id="sortSelect" name="sort">{sort_options}</select>
      <input id="minReposInput" type="number" name="min_repos" min="0" value="{min_repos}">{select_field}
      <button type="submit">Apply</button>
    </form>
    <div class="layout">
      <table class="leaderboard">
        <thead>
          <tr><th>#</th><th>User</th><th>Score</th><th>Active</th><th>Denounced</th><th>Stars</th></tr>
        </thead>
        <tbody id="leaderboardBody">{table_body}</tbody>
      </table>
      <aside id="detailPanel" class="detail">{detail}</aside>
    </div>
  </main>
</body>
</html>
"#,
        metrics = rendered.metrics,
        search = escape_html(view.search()),
        min_repos = view.min_repos(),
        table_body = rendered.table_body,
        detail = rendered.detail,
    )
}

/// Query string reproducing `view`'s filters, optionally selecting `select`.
pub fn page_query(view: &ViewState, select: Option<&str>) -> String {
    let mut query = format!(
        "?search={}&sort={}&min_repos={}",
        encode_uri_component(view.search()),
        view.sort_by().as_str(),
        view.min_repos(),
    );
    if let Some(select) = select {
        query.push_str(&format!("&select={}", encode_uri_component(select)));
    }
    query
}
