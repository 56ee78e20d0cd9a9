// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::dataset::{Dataset, RepoEntry, Totals, UserRecord};

/// Three users: two tied on score, one with no active repos.
///
/// | key   | user  | score | active | denounced | stars |
/// |-------|-------|-------|--------|-----------|-------|
/// | alice | Alice | 9.1   | 2      | 0         | 500   |
/// | bob   | Bob   | 9.1   | 5      | 1         | 100   |
/// | carol | Carol | 3.0   | 0      | 0         | 0     |
pub(crate) fn three_users() -> Dataset {
    let alice = UserRecord::new("alice", "Alice", 9.1)
        .with_counts(2, 0, 500)
        .with_repo(RepoEntry::new("acme/widgets", 400, false, "VOUCHED.td", "+ alice"))
        .with_repo(RepoEntry::new("acme/gears", 100, false, "VOUCHED.td", "+ alice"));
    let bob = UserRecord::new("bob", "Bob", 9.1)
        .with_counts(5, 1, 100)
        .with_repo(RepoEntry::new("tools/hammer", 100, false, ".github/VOUCHED.td", "+ bob"))
        .with_repo(RepoEntry::new("tools/saw", 0, true, ".github/VOUCHED.td", "- bob spam"));
    let carol = UserRecord::new("carol", "Carol", 3.0);

    Dataset::new(
        "2026-03-15T12:00:00Z",
        Totals {
            repos: 4,
            unique_users: 3,
            active_edges: 7,
            denounced_edges: 1,
        },
        vec![carol, bob, alice],
    )
}

/// A single user whose every string field carries markup.
pub(crate) fn hostile_user() -> Dataset {
    let user = UserRecord::new("<script>k</script>", "<script>alert('x')</script> & co", 1.0)
        .with_counts(1, 0, 10)
        .with_repo(RepoEntry::new(
            "evil/<b>repo</b>",
            10,
            false,
            "path/\"quoted\"",
            "+ <img src=x onerror=alert(1)> & more",
        ));
    Dataset::new("<b>not a date</b>", Totals::default(), vec![user])
}

/// `count` users with spread-out scores and counts, deterministic (no RNG).
pub(crate) fn generated(count: usize) -> Dataset {
    let users = (0..count)
        .map(|idx| {
            let active = (idx % 17) as u64;
            let denounced = (idx % 5 == 0) as u64;
            let stars = ((idx * 7919) % 100_000) as u64;
            let score = ((idx * 31) % 1000) as f64 / 10.0;
            let mut user = UserRecord::new(format!("user-{idx}"), format!("User {idx:05}"), score)
                .with_counts(active, denounced, stars);
            for repo_idx in 0..(active.min(3) as usize) {
                user = user.with_repo(RepoEntry::new(
                    format!("org-{repo_idx}/repo-{idx}"),
                    stars / 3,
                    false,
                    "VOUCHED.td",
                    format!("+ user-{idx}"),
                ));
            }
            user
        })
        .collect::<Vec<_>>();

    Dataset::new(
        "2026-01-01T00:00:00Z",
        Totals {
            repos: count as u64 * 3,
            unique_users: count as u64,
            active_edges: users.iter().map(|user| user.active_repo_count).sum(),
            denounced_edges: users.iter().map(|user| user.denounced_repo_count).sum(),
        },
        users,
    )
}
