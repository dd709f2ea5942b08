//! Event query engine: filtering and ordering of a candidate set.
//!
//! The engine is a pure function over its inputs. It never mutates the
//! candidate list and keeps no state between calls, so callers can re-run
//! it on every keystroke or filter change without coordination.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EventHubError, EventHubResult};
use crate::event::{Category, Event};

/// User-controlled filter and sort selections for a listing view.
///
/// The defaults match an untouched listing: empty search, every category,
/// every price tier, candidate order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    pub search_term: String,
    pub category: CategoryFilter,
    pub price: PriceFilter,
    pub sort: SortKey,
}

/// Category selection: the "All" wildcard or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }

    /// Parse a user-supplied category filter. "all" (any casing) is the
    /// wildcard; anything else must be a known category label.
    pub fn from_arg(s: &str) -> EventHubResult<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::Only(s.parse()?))
    }
}

/// Price tier selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceFilter {
    #[default]
    All,
    Free,
    Paid,
}

impl PriceFilter {
    pub fn matches(&self, price: f64) -> bool {
        match self {
            PriceFilter::All => true,
            PriceFilter::Free => price == 0.0,
            PriceFilter::Paid => price > 0.0,
        }
    }

    pub fn from_arg(s: &str) -> EventHubResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(PriceFilter::All),
            "free" => Ok(PriceFilter::Free),
            "paid" => Ok(PriceFilter::Paid),
            other => Err(EventHubError::InvalidFilter(format!(
                "expected all, free, or paid, got '{other}'"
            ))),
        }
    }
}

/// Ordering applied to the kept set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Candidate order. The fixture order stands in for recency since
    /// event dates are display text, not timestamps.
    #[default]
    Latest,
    /// Descending by attendee count.
    Popular,
    /// Ascending by price.
    PriceAsc,
    /// Descending by price.
    PriceDesc,
}

impl SortKey {
    /// Parse a user-supplied sort key. Unrecognized values fall back to
    /// `Latest`, matching the listing view's switch default.
    pub fn from_arg(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "popular" => SortKey::Popular,
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            _ => SortKey::Latest,
        }
    }
}

/// Apply a query to a candidate set, producing a new filtered, ordered view.
///
/// The three predicates (search term, category, price tier) are conjunctive.
/// The sort is stable: ties keep the candidate set's relative order, and
/// `Latest` leaves it untouched. Input events are never mutated or validated;
/// a malformed event (say, a negative price) flows through as-is.
pub fn search(events: &[Event], query: &QueryParams) -> Vec<Event> {
    let term = query.search_term.to_lowercase();

    let mut matched: Vec<Event> = events
        .iter()
        .filter(|event| matches_term(event, &term))
        .filter(|event| query.category.matches(event.category))
        .filter(|event| query.price.matches(event.price))
        .cloned()
        .collect();

    match query.sort {
        SortKey::Latest => {}
        SortKey::Popular => matched.sort_by(|a, b| b.attendees.cmp(&a.attendees)),
        SortKey::PriceAsc => matched.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => matched.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    debug!(candidates = events.len(), matched = matched.len(), "applied event query");

    matched
}

/// Case-insensitive substring match over title, description, and tags.
///
/// `term` must already be lowercased. An empty term matches every event.
/// There is no trimming or tokenization beyond the substring check.
fn matches_term(event: &Event, term: &str) -> bool {
    event.title.to_lowercase().contains(term)
        || event.description.to_lowercase().contains(term)
        || event.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}

/// Number of events per category, in the fixed category order.
///
/// Categories with no events are included with a count of zero.
pub fn category_counts(events: &[Event]) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let count = events.iter().filter(|e| e.category == category).count();
            (category, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(id: &str, title: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            full_description: None,
            date: "March 15, 2025".to_string(),
            time: None,
            location: "San Francisco, CA".to_string(),
            address: None,
            attendees: 0,
            max_attendees: 100,
            image: None,
            category: Category::Tech,
            tags: vec![],
            price: 0.0,
            speakers: vec![],
        }
    }

    /// The two-event set used by the listing-view examples.
    fn sample_pair() -> Vec<Event> {
        let mut conference = make_event("1", "Tech Conference");
        conference.attendees = 245;
        conference.price = 199.0;
        conference.category = Category::Tech;
        conference.tags = vec!["AI".to_string()];

        let mut meetup = make_event("2", "Startup Meetup");
        meetup.attendees = 156;
        meetup.price = 0.0;
        meetup.category = Category::Business;
        meetup.tags = vec!["Startups".to_string()];

        vec![conference, meetup]
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.id.as_str()).collect()
    }

    // --- default query ---

    #[test]
    fn default_query_keeps_everything_in_order() {
        let events = sample_pair();
        let result = search(&events, &QueryParams::default());
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let result = search(&[], &QueryParams::default());
        assert!(result.is_empty());
    }

    #[test]
    fn output_is_a_subset_of_input() {
        let events = sample_pair();
        let query = QueryParams {
            search_term: "tech".to_string(),
            ..QueryParams::default()
        };
        let result = search(&events, &query);
        assert!(result.len() <= events.len());
        assert!(result.iter().all(|e| events.contains(e)));
    }

    #[test]
    fn same_query_twice_gives_identical_output() {
        let events = sample_pair();
        let query = QueryParams {
            sort: SortKey::Popular,
            price: PriceFilter::Paid,
            ..QueryParams::default()
        };
        assert_eq!(search(&events, &query), search(&events, &query));
    }

    // --- search term ---

    #[test]
    fn search_matches_title_substring_case_insensitively() {
        let events = sample_pair();
        let query = QueryParams {
            search_term: "tech".to_string(),
            ..QueryParams::default()
        };
        assert_eq!(ids(&search(&events, &query)), vec!["1"]);
    }

    #[test]
    fn search_matches_description() {
        let mut events = sample_pair();
        events[1].description = "Network with entrepreneurs".to_string();
        let query = QueryParams {
            search_term: "ENTREPRENEURS".to_string(),
            ..QueryParams::default()
        };
        assert_eq!(ids(&search(&events, &query)), vec!["2"]);
    }

    #[test]
    fn search_matches_any_tag() {
        let events = sample_pair();
        let query = QueryParams {
            search_term: "startups".to_string(),
            ..QueryParams::default()
        };
        assert_eq!(ids(&search(&events, &query)), vec!["2"]);
    }

    #[test]
    fn empty_term_matches_everything() {
        let events = sample_pair();
        let query = QueryParams {
            search_term: String::new(),
            ..QueryParams::default()
        };
        assert_eq!(search(&events, &query).len(), 2);
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let events = sample_pair();
        let query = QueryParams {
            search_term: " tech".to_string(),
            ..QueryParams::default()
        };
        // No title or tag contains " tech" with the leading space
        assert!(search(&events, &query).is_empty());
    }

    // --- category ---

    #[test]
    fn category_filter_is_exact() {
        let events = sample_pair();
        let query = QueryParams {
            category: CategoryFilter::Only(Category::Business),
            ..QueryParams::default()
        };
        assert_eq!(ids(&search(&events, &query)), vec!["2"]);
    }

    #[test]
    fn category_with_no_events_gives_empty_output() {
        let events = sample_pair();
        let query = QueryParams {
            category: CategoryFilter::Only(Category::Design),
            ..QueryParams::default()
        };
        assert!(search(&events, &query).is_empty());
    }

    // --- price ---

    #[test]
    fn free_keeps_only_zero_priced_events() {
        let events = sample_pair();
        let query = QueryParams {
            price: PriceFilter::Free,
            ..QueryParams::default()
        };
        let result = search(&events, &query);
        assert_eq!(ids(&result), vec!["2"]);
        assert_eq!(result[0].title, "Startup Meetup");
    }

    #[test]
    fn paid_requires_a_positive_price() {
        let events = sample_pair();
        let query = QueryParams {
            price: PriceFilter::Paid,
            ..QueryParams::default()
        };
        assert_eq!(ids(&search(&events, &query)), vec!["1"]);
    }

    #[test]
    fn negative_price_flows_through_unvalidated() {
        let mut events = sample_pair();
        events[0].price = -5.0;
        // Not free, not paid: a negative price fails both tiers
        let free = QueryParams { price: PriceFilter::Free, ..QueryParams::default() };
        let paid = QueryParams { price: PriceFilter::Paid, ..QueryParams::default() };
        assert_eq!(ids(&search(&events, &free)), vec!["2"]);
        assert_eq!(ids(&search(&events, &paid)), Vec::<&str>::new());
        // But it still appears under the wildcard tier
        assert_eq!(search(&events, &QueryParams::default()).len(), 2);
    }

    // --- conjunction ---

    #[test]
    fn predicates_are_conjunctive() {
        let events = sample_pair();
        // "Tech Conference" matches the term but is paid; nothing passes both
        let query = QueryParams {
            search_term: "tech".to_string(),
            price: PriceFilter::Free,
            ..QueryParams::default()
        };
        assert!(search(&events, &query).is_empty());
    }

    // --- sorting ---

    #[test]
    fn popular_sorts_by_descending_attendees() {
        let events = sample_pair();
        let query = QueryParams {
            sort: SortKey::Popular,
            ..QueryParams::default()
        };
        let result = search(&events, &query);
        assert_eq!(ids(&result), vec!["1", "2"]);
        assert!(result.windows(2).all(|w| w[0].attendees >= w[1].attendees));
    }

    #[test]
    fn price_asc_sorts_by_ascending_price() {
        let events = sample_pair();
        let query = QueryParams {
            sort: SortKey::PriceAsc,
            ..QueryParams::default()
        };
        let result = search(&events, &query);
        assert_eq!(ids(&result), vec!["2", "1"]);
    }

    #[test]
    fn price_desc_sorts_by_descending_price() {
        let events = sample_pair();
        let query = QueryParams {
            sort: SortKey::PriceDesc,
            ..QueryParams::default()
        };
        assert_eq!(ids(&search(&events, &query)), vec!["1", "2"]);
    }

    #[test]
    fn ties_preserve_candidate_order() {
        let mut events = vec![
            make_event("a", "First"),
            make_event("b", "Second"),
            make_event("c", "Third"),
        ];
        events[0].attendees = 50;
        events[1].attendees = 50;
        events[2].attendees = 99;

        let query = QueryParams {
            sort: SortKey::Popular,
            ..QueryParams::default()
        };
        assert_eq!(ids(&search(&events, &query)), vec!["c", "a", "b"]);
    }

    #[test]
    fn latest_never_reorders_the_kept_set() {
        let mut events = sample_pair();
        events.reverse();
        let result = search(&events, &QueryParams::default());
        assert_eq!(ids(&result), vec!["2", "1"]);
    }

    // --- purity ---

    #[test]
    fn input_events_are_not_mutated() {
        let events = sample_pair();
        let before = events.clone();
        let query = QueryParams {
            sort: SortKey::PriceDesc,
            price: PriceFilter::Paid,
            ..QueryParams::default()
        };
        let _ = search(&events, &query);
        assert_eq!(events, before);
    }

    // --- argument parsing ---

    #[test]
    fn unknown_sort_key_falls_back_to_latest() {
        assert_eq!(SortKey::from_arg("newest"), SortKey::Latest);
        assert_eq!(SortKey::from_arg(""), SortKey::Latest);
        assert_eq!(SortKey::from_arg("POPULAR"), SortKey::Popular);
        assert_eq!(SortKey::from_arg("price-asc"), SortKey::PriceAsc);
    }

    #[test]
    fn category_arg_wildcard_and_labels() {
        assert_eq!(CategoryFilter::from_arg("all").unwrap(), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_arg("ALL").unwrap(), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_arg("Design").unwrap(),
            CategoryFilter::Only(Category::Design)
        );
        assert!(CategoryFilter::from_arg("Gardening").is_err());
    }

    #[test]
    fn price_arg_rejects_unknown_tiers() {
        assert_eq!(PriceFilter::from_arg("free").unwrap(), PriceFilter::Free);
        assert_eq!(PriceFilter::from_arg("Paid").unwrap(), PriceFilter::Paid);
        assert!(PriceFilter::from_arg("cheap").is_err());
    }

    // --- category counts ---

    #[test]
    fn counts_cover_every_category() {
        let events = sample_pair();
        let counts = category_counts(&events);
        assert_eq!(counts.len(), Category::ALL.len());
        assert!(counts.contains(&(Category::Tech, 1)));
        assert!(counts.contains(&(Category::Business, 1)));
        assert!(counts.contains(&(Category::Design, 0)));
    }
}
