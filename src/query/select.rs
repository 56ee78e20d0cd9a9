// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vouchbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vouchbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;
use std::fmt;

use memchr::memmem;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::model::{Dataset, UserRecord};
use crate::ui::ViewState;

/// Leaderboard ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Score,
    User,
    ActiveRepoCount,
    StarsTotal,
}

impl SortKey {
    pub const ALL: [SortKey; 4] =
        [SortKey::Score, SortKey::User, SortKey::ActiveRepoCount, SortKey::StarsTotal];

    /// Maps a raw selector value to a sort key. Unknown values sort by score.
    pub fn from_input(raw: &str) -> Self {
        match raw {
            "user" => Self::User,
            "active_repo_count" => Self::ActiveRepoCount,
            "stars_total" => Self::StarsTotal,
            _ => Self::Score,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::User => "user",
            Self::ActiveRepoCount => "active_repo_count",
            Self::StarsTotal => "stars_total",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Score => "Score",
            Self::User => "User",
            Self::ActiveRepoCount => "Active repos",
            Self::StarsTotal => "Weighted stars",
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Self::Score => Self::User,
            Self::User => Self::ActiveRepoCount,
            Self::ActiveRepoCount => Self::StarsTotal,
            Self::StarsTotal => Self::Score,
        }
    }

    pub fn cycle_back(self) -> Self {
        match self {
            Self::Score => Self::StarsTotal,
            Self::User => Self::Score,
            Self::ActiveRepoCount => Self::User,
            Self::StarsTotal => Self::ActiveRepoCount,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the users visible under `view`, in display order.
///
/// Pure: the dataset is only borrowed, and the same inputs always yield the same list.
pub fn select<'a>(dataset: &'a Dataset, view: &ViewState) -> Vec<&'a UserRecord> {
    let needle = view.search().to_lowercase();
    let finder = (!needle.is_empty()).then(|| memmem::Finder::new(needle.as_bytes()));

    let mut users = dataset
        .users()
        .iter()
        .filter(|user| matches_filter(user, view.min_repos(), finder.as_ref()))
        .collect::<Vec<_>>();

    let sort_by = view.sort_by();
    users.sort_by(|a, b| compare_users(sort_by, a, b));
    users
}

/// `finder` must search for an already lowercased needle; `None` accepts every name.
pub fn matches_filter(
    user: &UserRecord,
    min_repos: u64,
    finder: Option<&memmem::Finder<'_>>,
) -> bool {
    if user.active_repo_count < min_repos {
        return false;
    }

    let Some(finder) = finder else {
        return true;
    };

    finder.find(user.user.to_lowercase().as_bytes()).is_some()
        || finder.find(user.user_key.to_lowercase().as_bytes()).is_some()
}

pub fn compare_users(sort_by: SortKey, a: &UserRecord, b: &UserRecord) -> Ordering {
    match sort_by {
        SortKey::User => compare_display_names(&a.user, &b.user),
        SortKey::ActiveRepoCount => b
            .active_repo_count
            .cmp(&a.active_repo_count)
            .then_with(|| b.score.total_cmp(&a.score))
            .then_with(|| compare_display_names(&a.user, &b.user)),
        SortKey::StarsTotal => b
            .stars_total
            .cmp(&a.stars_total)
            .then_with(|| b.score.total_cmp(&a.score))
            .then_with(|| compare_display_names(&a.user, &b.user)),
        SortKey::Score => b
            .score
            .total_cmp(&a.score)
            .then_with(|| compare_display_names(&a.user, &b.user)),
    }
}

/// Collation-style name order: accent- and case-insensitive first, then accents, then lowercase
/// before uppercase.
pub fn compare_display_names(a: &str, b: &str) -> Ordering {
    folded(a)
        .cmp(folded(b))
        .then_with(|| lowered(a).cmp(lowered(b)))
        .then_with(|| b.cmp(a))
}

fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().filter(|ch| !is_combining_mark(*ch)).flat_map(char::to_lowercase)
}

fn lowered(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{compare_display_names, select, SortKey};
    use crate::model::{fixtures, Dataset, Totals, UserRecord};
    use crate::ui::ViewState;

    fn keys(users: &[&UserRecord]) -> Vec<String> {
        users.iter().map(|user| user.user_key.clone()).collect()
    }

    fn view_sorted_by(sort_by: SortKey) -> ViewState {
        let mut view = ViewState::default();
        view.set_sort_by(sort_by);
        view
    }

    #[test]
    fn default_view_sorts_by_score_with_name_tiebreak() {
        let dataset = fixtures::three_users();
        let users = select(&dataset, &ViewState::default());
        assert_eq!(keys(&users), vec!["alice", "bob", "carol"]);
    }

    #[rstest]
    #[case(SortKey::Score, &["alice", "bob", "carol"])]
    #[case(SortKey::User, &["alice", "bob", "carol"])]
    #[case(SortKey::ActiveRepoCount, &["bob", "alice", "carol"])]
    #[case(SortKey::StarsTotal, &["alice", "bob", "carol"])]
    fn sorts_by_each_key(#[case] sort_by: SortKey, #[case] expected: &[&str]) {
        let dataset = fixtures::three_users();
        let users = select(&dataset, &view_sorted_by(sort_by));
        assert_eq!(keys(&users), expected);
    }

    #[test]
    fn min_repos_hides_users_below_threshold() {
        let dataset = fixtures::three_users();
        let mut view = ViewState::default();
        view.set_min_repos(1);
        assert_eq!(keys(&select(&dataset, &view)), vec!["alice", "bob"]);

        view.set_min_repos(3);
        assert_eq!(keys(&select(&dataset, &view)), vec!["bob"]);

        view.set_min_repos(6);
        assert!(select(&dataset, &view).is_empty());
    }

    #[test]
    fn search_matches_name_or_key_case_insensitively() {
        let dataset = Dataset::new(
            "",
            Totals::default(),
            vec![
                UserRecord::new("gh:12", "Octo Cat", 1.0),
                UserRecord::new("octo-bot", "Robot", 2.0),
                UserRecord::new("zz", "Other", 3.0),
            ],
        );
        let mut view = ViewState::default();
        view.set_search("OCTO");

        assert_eq!(keys(&select(&dataset, &view)), vec!["octo-bot", "gh:12"]);
    }

    #[test]
    fn widening_search_never_grows_visible_set() {
        let dataset = fixtures::generated(200);
        let mut view = ViewState::default();
        let mut previous = select(&dataset, &view).len();

        for query in ["u", "us", "user", "user 0", "user 001", "user 0019"] {
            view.set_search(query);
            let visible = select(&dataset, &view);
            assert!(visible.len() <= previous, "{query:?} grew the visible set");
            for user in &visible {
                assert!(
                    user.user.to_lowercase().contains(query)
                        || user.user_key.to_lowercase().contains(query)
                );
            }
            previous = visible.len();
        }
    }

    #[test]
    fn generated_dataset_orderings_are_monotonic() {
        let dataset = fixtures::generated(500);

        let by_score = select(&dataset, &view_sorted_by(SortKey::Score));
        for pair in by_score.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(compare_display_names(&pair[0].user, &pair[1].user).is_le());
            }
        }

        let by_active = select(&dataset, &view_sorted_by(SortKey::ActiveRepoCount));
        for pair in by_active.windows(2) {
            assert!(pair[0].active_repo_count >= pair[1].active_repo_count);
            if pair[0].active_repo_count == pair[1].active_repo_count {
                assert!(pair[0].score >= pair[1].score);
            }
        }

        let by_stars = select(&dataset, &view_sorted_by(SortKey::StarsTotal));
        for pair in by_stars.windows(2) {
            assert!(pair[0].stars_total >= pair[1].stars_total);
            if pair[0].stars_total == pair[1].stars_total {
                assert!(pair[0].score >= pair[1].score);
            }
        }
    }

    #[test]
    fn selecting_twice_is_deterministic_and_leaves_dataset_order_alone() {
        let dataset = fixtures::three_users();
        let view = view_sorted_by(SortKey::StarsTotal);

        let first = keys(&select(&dataset, &view));
        let second = keys(&select(&dataset, &view));
        assert_eq!(first, second);

        let stored = dataset.users().iter().map(|user| user.user_key.as_str()).collect::<Vec<_>>();
        assert_eq!(stored, vec!["carol", "bob", "alice"]);
    }

    #[test]
    fn empty_dataset_selects_nothing() {
        let dataset = Dataset::new("", Totals::default(), Vec::new());
        assert!(select(&dataset, &ViewState::default()).is_empty());
    }

    #[test]
    fn display_names_compare_like_a_collator() {
        let mut names = vec!["bob", "Alice", "alice", "Bob", "carol"];
        names.sort_by(|a, b| compare_display_names(a, b));
        assert_eq!(names, vec!["alice", "Alice", "bob", "Bob", "carol"]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let mut names = vec!["zed", "élan", "eve", "Émile", "elan", "Zoë", "zoe"];
        names.sort_by(|a, b| compare_display_names(a, b));
        assert_eq!(names, vec!["elan", "élan", "Émile", "eve", "zed", "zoe", "Zoë"]);
    }

    #[test]
    fn user_sort_places_accented_names_before_later_letters() {
        let dataset = Dataset::new(
            "",
            Totals::default(),
            vec![
                UserRecord::new("z", "zed", 1.0),
                UserRecord::new("e1", "élan", 1.0),
                UserRecord::new("e2", "eve", 1.0),
            ],
        );
        let users = select(&dataset, &view_sorted_by(SortKey::User));
        assert_eq!(keys(&users), vec!["e1", "e2", "z"]);

        let users = select(&dataset, &ViewState::default());
        assert_eq!(keys(&users), vec!["e1", "e2", "z"]);
    }

    #[rstest]
    #[case("score", SortKey::Score)]
    #[case("user", SortKey::User)]
    #[case("active_repo_count", SortKey::ActiveRepoCount)]
    #[case("stars_total", SortKey::StarsTotal)]
    #[case("bogus", SortKey::Score)]
    #[case("", SortKey::Score)]
    fn sort_key_from_input(#[case] raw: &str, #[case] expected: SortKey) {
        assert_eq!(SortKey::from_input(raw), expected);
    }

    #[test]
    fn sort_key_cycles_through_all_keys() {
        let mut key = SortKey::Score;
        for expected in SortKey::ALL.iter().skip(1).chain(std::iter::once(&SortKey::Score)) {
            key = key.cycle();
            assert_eq!(key, *expected);
        }
        for key in SortKey::ALL {
            assert_eq!(key.cycle().cycle_back(), key);
            assert_eq!(SortKey::from_input(key.as_str()), key);
        }
    }
}
