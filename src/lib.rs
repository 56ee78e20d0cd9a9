// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Vouchbook: a read-only leaderboard over a precomputed vouch dataset.
//!
//! The dataset is loaded once ([`store`]), filtered and ranked per view ([`query`]), and presented
//! as an interactive terminal UI ([`tui`]), a static HTML page, or a small local HTTP server
//! ([`server`]). All front ends drive the same [`ops::Leaderboard`].

pub mod logging;
pub mod model;
pub mod ops;
pub mod query;
pub mod render;
pub mod server;
pub mod store;
pub mod tui;
pub mod ui;
