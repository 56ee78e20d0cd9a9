// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic view queries over a loaded dataset (filtering, ordering, selection).

pub mod reconcile;
pub mod select;

pub use reconcile::{derive_view, reconcile_selection, reconciled_key, selected_user};
pub use select::{compare_display_names, compare_users, matches_filter, select, SortKey};
