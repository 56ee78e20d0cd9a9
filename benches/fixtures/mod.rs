// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::time::Duration;

use criterion::Criterion;
use vouchbook::model::{Dataset, RepoEntry, Totals, UserRecord};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::Large];

    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn user_count(self) -> usize {
        match self {
            Self::Small => 100,
            Self::Medium => 2_000,
            Self::Large => 20_000,
        }
    }
}

pub fn dataset(case: Case) -> Dataset {
    let count = case.user_count();
    let mut active_edges = 0u64;
    let mut denounced_edges = 0u64;

    let users = (0..count)
        .map(|idx| {
            let active = (idx % 23) as u64;
            let denounced = (idx % 7 == 0) as u64;
            let stars = ((idx * 7919) % 250_000) as u64;
            let score = ((idx * 37) % 10_000) as f64 / 100.0;
            active_edges += active;
            denounced_edges += denounced;

            let mut user = UserRecord::new(
                format!("user-{idx}"),
                format!("{} Maintainer {idx:06}", if idx % 3 == 0 { "the" } else { "The" }),
                score,
            )
            .with_counts(active, denounced, stars);
            for repo_idx in 0..(active.min(4) as usize) {
                user = user.with_repo(RepoEntry::new(
                    format!("org-{}/repo-{repo_idx}", idx % 97),
                    stars / 4,
                    repo_idx == 0 && denounced == 1,
                    ".github/VOUCHED.td",
                    format!("+ user-{idx} maintains things"),
                ));
            }
            user
        })
        .collect::<Vec<_>>();

    Dataset::new(
        "2026-01-01T00:00:00Z",
        Totals {
            repos: 97,
            unique_users: count as u64,
            active_edges,
            denounced_edges,
        },
        users,
    )
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<usize>().ok()).unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<u64>().ok()).unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let sample_size = env_usize("BENCH_SAMPLE_SIZE", 60).clamp(10, 200);
    let warmup_secs = env_u64("BENCH_WARMUP_SECS", 3).clamp(1, 60);
    let measurement_secs = env_u64("BENCH_MEASUREMENT_SECS", 5).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
}
