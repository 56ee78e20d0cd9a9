// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Dataset, UserRecord};
use crate::ui::ViewState;

use super::select;

/// The key the selection should point at, given what is visible.
///
/// Keeps `selected` when it is visible, otherwise falls back to the first visible user.
pub fn reconciled_key<'a>(visible: &[&'a UserRecord], selected: Option<&str>) -> Option<&'a str> {
    if let Some(selected) = selected {
        if let Some(user) = visible.iter().find(|user| user.user_key == selected) {
            return Some(user.user_key.as_str());
        }
    }

    visible.first().map(|user| user.user_key.as_str())
}

/// Points `view`'s selection at a visible user. Returns `true` when the selection moved.
pub fn reconcile_selection(view: &mut ViewState, visible: &[&UserRecord]) -> bool {
    let target = reconciled_key(visible, view.selected_key());
    if target == view.selected_key() {
        return false;
    }

    tracing::debug!(
        from = view.selected_key().unwrap_or(""),
        to = target.unwrap_or(""),
        "selection reconciled"
    );
    view.set_selected_key(target);
    true
}

/// Runs the selector and reconciles the selection against its output.
///
/// This is the per-render derivation step: every frame calls it before drawing details.
pub fn derive_view<'a>(dataset: &'a Dataset, view: &mut ViewState) -> Vec<&'a UserRecord> {
    let visible = select(dataset, view);
    reconcile_selection(view, &visible);
    visible
}

/// The selected user among `visible`, if any.
pub fn selected_user<'a>(visible: &[&'a UserRecord], view: &ViewState) -> Option<&'a UserRecord> {
    let selected = view.selected_key()?;
    visible.iter().copied().find(|user| user.user_key == selected)
}
