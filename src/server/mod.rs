// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Local HTTP front end.
//!
//! `GET /` renders the full page for the view described by the query string; `GET
//! /data/vouch_book.json` returns the loaded dataset. Each request builds its own view over the
//! shared, immutable dataset.

use std::io;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::model::Dataset;
use crate::ops::{Leaderboard, ViewEvent};
use crate::render::{render_load_error, render_page};
use crate::store::{DatasetFile, StoreError};

pub const DEFAULT_HTTP_PORT: u16 = 27436;

#[derive(Debug)]
enum Loaded {
    Ready(Arc<Dataset>),
    Failed { data_path: String, error: String },
}

#[derive(Debug, Clone)]
pub struct AppState {
    loaded: Arc<Loaded>,
}

impl AppState {
    pub fn ready(dataset: Arc<Dataset>) -> Self {
        Self {
            loaded: Arc::new(Loaded::Ready(dataset)),
        }
    }

    /// State that answers every page request with the load error.
    pub fn failed(file: &DatasetFile, error: &StoreError) -> Self {
        Self {
            loaded: Arc::new(Loaded::Failed {
                data_path: file.path().display().to_string(),
                error: error.to_string(),
            }),
        }
    }

    pub fn from_load(file: &DatasetFile, result: Result<Dataset, StoreError>) -> Self {
        match result {
            Ok(dataset) => Self::ready(Arc::new(dataset)),
            Err(err) => Self::failed(file, &err),
        }
    }
}

/// Query string of the page; the same names the page's form submits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub min_repos: Option<String>,
    pub select: Option<String>,
}

impl PageParams {
    fn into_events(self) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        if let Some(search) = self.search {
            events.push(ViewEvent::SearchInput(search));
        }
        if let Some(sort) = self.sort {
            events.push(ViewEvent::SortInput(sort));
        }
        if let Some(min_repos) = self.min_repos {
            events.push(ViewEvent::MinReposInput(min_repos));
        }
        if let Some(select) = self.select {
            events.push(ViewEvent::SelectRow(select));
        }
        events
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page))
        .route("/data/vouch_book.json", get(data))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "serving leaderboard at http://{addr}/");
    axum::serve(listener, router(state)).with_graceful_shutdown(shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

async fn page(State(state): State<AppState>, Query(params): Query<PageParams>) -> Response {
    let dataset = match state.loaded.as_ref() {
        Loaded::Ready(dataset) => Arc::clone(dataset),
        Loaded::Failed { data_path, error } => {
            return (StatusCode::SERVICE_UNAVAILABLE, Html(render_load_error(data_path, error)))
                .into_response();
        }
    };

    let mut board = Leaderboard::new(dataset);
    for event in params.into_events() {
        board.apply(event);
    }
    let rendered = board.render();
    tracing::debug!(
        search = board.view().search(),
        sort = %board.view().sort_by(),
        min_repos = board.view().min_repos(),
        selected = board.view().selected_key().unwrap_or(""),
        "page rendered"
    );

    Html(render_page(board.view(), &rendered)).into_response()
}

async fn data(State(state): State<AppState>) -> Response {
    match state.loaded.as_ref() {
        Loaded::Ready(dataset) => Json(dataset.as_ref()).into_response(),
        Loaded::Failed { error, .. } => {
            (StatusCode::SERVICE_UNAVAILABLE, error.clone()).into_response()
        }
    }
}
