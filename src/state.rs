//! Query state for the news browser, modeled as a pure state machine.
//!
//! UI events feed [`apply`], which returns the next state; the caller then
//! derives a [`FetchPlan`] and issues exactly one fetch per settled state.
//! Keeping the transitions pure makes the filter rules (search and category
//! are mutually exclusive, any filter change resets the page) testable
//! without a UI harness.

use crate::category::Category;

/// The inputs that determine which upstream request to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub search: String,
    pub category: Category,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            category: Category::General,
        }
    }
}

/// A user-driven change to the query state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
    CategorySelected(Category),
    SearchChanged(String),
    PageSelected(u32),
    NextPage,
    PrevPage,
}

/// Pure transition function: applies an event and returns the next state.
pub fn apply(mut state: QueryState, event: QueryEvent) -> QueryState {
    match event {
        QueryEvent::CategorySelected(category) => {
            // Selecting a category while a search is active would be
            // ambiguous, so the search is cleared.
            state.category = category;
            state.search.clear();
            state.page = 1;
        }
        QueryEvent::SearchChanged(query) => {
            state.search = query;
            state.page = 1;
        }
        QueryEvent::PageSelected(page) => {
            if page >= 1 {
                state.page = page;
            }
        }
        QueryEvent::NextPage => {
            state.page += 1;
        }
        QueryEvent::PrevPage => {
            if state.page > 1 {
                state.page -= 1;
            }
        }
    }
    state
}

/// Which upstream endpoint a state resolves to. A non-empty search term
/// takes precedence over the selected category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    Search { query: String, page: u32 },
    TopHeadlines { category: Category, page: u32 },
}

impl FetchPlan {
    pub fn for_state(state: &QueryState) -> FetchPlan {
        if state.search.is_empty() {
            FetchPlan::TopHeadlines {
                category: state.category,
                page: state.page,
            }
        } else {
            FetchPlan::Search {
                query: state.search.clone(),
                page: state.page,
            }
        }
    }
}

/// Guards against out-of-order fetch responses.
///
/// Each issued fetch takes a token from [`FetchSequencer::issue`]; a response
/// is applied only if [`FetchSequencer::accept`] still considers its token
/// the latest. A slow response for page N arriving after page N+1 was
/// requested is discarded instead of overwriting fresher articles.
#[derive(Debug, Default)]
pub struct FetchSequencer {
    latest: u64,
}

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the token for a fetch about to be issued.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// True when `token` belongs to the most recently issued fetch.
    pub fn accept(&self, token: u64) -> bool {
        token == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = QueryState::default();
        assert_eq!(state.page, 1);
        assert!(state.search.is_empty());
        assert_eq!(state.category, Category::General);
    }

    #[test]
    fn test_category_change_clears_search_and_resets_page() {
        let state = QueryState {
            page: 4,
            search: "climate".to_string(),
            category: Category::General,
        };

        let state = apply(state, QueryEvent::CategorySelected(Category::Science));

        assert_eq!(state.category, Category::Science);
        assert!(state.search.is_empty());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_search_change_keeps_category_and_resets_page() {
        let state = QueryState {
            page: 7,
            search: String::new(),
            category: Category::Sports,
        };

        let state = apply(state, QueryEvent::SearchChanged("olympics".to_string()));

        assert_eq!(state.search, "olympics");
        assert_eq!(state.category, Category::Sports);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_navigation() {
        let state = apply(QueryState::default(), QueryEvent::NextPage);
        assert_eq!(state.page, 2);

        let state = apply(state, QueryEvent::PageSelected(9));
        assert_eq!(state.page, 9);

        let state = apply(state, QueryEvent::PrevPage);
        assert_eq!(state.page, 8);
    }

    #[test]
    fn test_prev_page_is_noop_on_first_page() {
        let state = apply(QueryState::default(), QueryEvent::PrevPage);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_zero_selection_ignored() {
        let state = apply(QueryState::default(), QueryEvent::PageSelected(0));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_search_takes_precedence_in_plan() {
        let state = QueryState {
            page: 2,
            search: "rust".to_string(),
            category: Category::Technology,
        };

        assert_eq!(
            FetchPlan::for_state(&state),
            FetchPlan::Search {
                query: "rust".to_string(),
                page: 2,
            }
        );
    }

    #[test]
    fn test_empty_search_plans_category_browse() {
        let state = QueryState {
            page: 3,
            search: String::new(),
            category: Category::Business,
        };

        assert_eq!(
            FetchPlan::for_state(&state),
            FetchPlan::TopHeadlines {
                category: Category::Business,
                page: 3,
            }
        );
    }

    #[test]
    fn test_plan_derivation_is_idempotent() {
        let state = QueryState {
            page: 5,
            search: "elections".to_string(),
            category: Category::Nation,
        };

        assert_eq!(FetchPlan::for_state(&state), FetchPlan::for_state(&state));
    }

    #[test]
    fn test_clearing_search_falls_back_to_category() {
        let state = QueryState {
            page: 1,
            search: "space".to_string(),
            category: Category::Science,
        };

        let state = apply(state, QueryEvent::SearchChanged(String::new()));

        assert_eq!(
            FetchPlan::for_state(&state),
            FetchPlan::TopHeadlines {
                category: Category::Science,
                page: 1,
            }
        );
    }

    mod sequencer_tests {
        use super::*;

        #[test]
        fn test_latest_token_accepted() {
            let mut seq = FetchSequencer::new();
            let token = seq.issue();
            assert!(seq.accept(token));
        }

        #[test]
        fn test_stale_token_discarded() {
            let mut seq = FetchSequencer::new();
            let stale = seq.issue();
            let fresh = seq.issue();

            // The page-N response resolving after page-N+1 was requested.
            assert!(!seq.accept(stale));
            assert!(seq.accept(fresh));
        }

        #[test]
        fn test_tokens_are_monotonic() {
            let mut seq = FetchSequencer::new();
            let a = seq.issue();
            let b = seq.issue();
            let c = seq.issue();
            assert!(a < b && b < c);
        }
    }
}
