//! Country search: region filtering, text matching and result ordering
//!
//! The engine is a pure function over the full country list. It never
//! mutates its input and every evaluation starts from the same base
//! list, so a region change cannot compound against a previous text
//! filter's output (or vice versa). Results are returned as indices
//! into the caller-owned list.

use crate::db::Country;
use std::time::{Duration, Instant};

/// Filter the full country list by region and free-text query.
///
/// - `region`: exact, case-sensitive match against the record's region
///   field. `None` or an empty string means no region constraint.
/// - `query`: trimmed and case-folded here. Matching is substring-based
///   on the country name; names that *start with* the query rank ahead
///   of names that merely contain it, with ties broken by
///   case-insensitive name comparison. An empty query leaves the
///   region-filtered set in its original relative order.
///
/// An empty result is a normal outcome, not an error.
pub fn filter_and_sort(countries: &[Country], region: Option<&str>, query: &str) -> Vec<usize> {
    let region = region.filter(|r| !r.is_empty());
    let query = query.trim().to_lowercase();

    let mut indices: Vec<usize> = countries
        .iter()
        .enumerate()
        .filter(|(_, c)| region.is_none_or(|r| c.region == r))
        .filter(|(_, c)| query.is_empty() || c.name.to_lowercase().contains(&query))
        .map(|(i, _)| i)
        .collect();

    if !query.is_empty() {
        indices.sort_by(|&a, &b| {
            let name_a = countries[a].name.to_lowercase();
            let name_b = countries[b].name.to_lowercase();
            let starts_a = name_a.starts_with(&query);
            let starts_b = name_b.starts_with(&query);
            starts_b.cmp(&starts_a).then_with(|| name_a.cmp(&name_b))
        });
    }

    indices
}

/// Coalesces rapid repeated triggers into a single delayed evaluation.
///
/// Each keystroke resets the pending deadline; `poll` fires at most once
/// when the quiet period has elapsed. An explicit submit (Enter) cancels
/// the pending deadline and the caller evaluates immediately.
pub struct Debouncer {
    deadline: Option<Instant>,
    delay: Duration,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            deadline: None,
            delay,
        }
    }

    /// Schedule (or reschedule) an evaluation `delay` after `now`.
    pub fn reset(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any pending evaluation. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Returns true exactly once when the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the pending deadline, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn country(name: &str, region: &str) -> Country {
        Country {
            id: 0,
            name: name.to_string(),
            alpha3_code: String::new(),
            native_name: String::new(),
            region: region.to_string(),
            subregion: String::new(),
            capital: String::new(),
            population: None,
            area: None,
            top_level_domain: Vec::new(),
            currencies: Vec::new(),
            languages: Vec::new(),
            borders: Vec::new(),
            flags: Default::default(),
        }
    }

    fn names(countries: &[Country], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| countries[i].name.clone()).collect()
    }

    fn sample() -> Vec<Country> {
        vec![
            country("Germany", "Europe"),
            country("Ghana", "Africa"),
            country("Georgia", "Asia"),
        ]
    }

    #[test]
    fn no_constraints_returns_input_unchanged() {
        let list = sample();
        let result = filter_and_sort(&list, None, "");
        assert_eq!(result, vec![0, 1, 2]);
    }

    #[test]
    fn empty_region_string_means_no_constraint() {
        let list = sample();
        assert_eq!(filter_and_sort(&list, Some(""), ""), vec![0, 1, 2]);
    }

    #[test]
    fn region_filter_preserves_original_order() {
        let list = vec![
            country("Sweden", "Europe"),
            country("Kenya", "Africa"),
            country("Albania", "Europe"),
            country("Norway", "Europe"),
        ];
        let result = filter_and_sort(&list, Some("Europe"), "");
        // Original relative order, no alphabetical re-sort
        assert_eq!(names(&list, &result), vec!["Sweden", "Albania", "Norway"]);
    }

    #[test]
    fn region_match_is_exact_and_case_sensitive() {
        let list = vec![country("Kenya", "Africa"), country("Fiji", "africa")];
        let result = filter_and_sort(&list, Some("Africa"), "");
        assert_eq!(names(&list, &result), vec!["Kenya"]);
    }

    #[test]
    fn query_matches_substring_not_just_prefix() {
        let list = vec![
            country("Argentina", "Americas"),
            country("Hungary", "Europe"),
            country("Chad", "Africa"),
        ];
        let result = filter_and_sort(&list, None, "gar");
        assert_eq!(names(&list, &result), vec!["Hungary"]);
    }

    #[test]
    fn prefix_matches_rank_before_substring_matches() {
        let list = vec![
            country("Equatorial Guinea", "Africa"),
            country("Guinea", "Africa"),
            country("Papua New Guinea", "Oceania"),
            country("Guinea-Bissau", "Africa"),
        ];
        let result = filter_and_sort(&list, None, "guinea");
        // Starts-with group first (alphabetical), contains group after
        // (alphabetical), regardless of full-name alphabetical order.
        assert_eq!(
            names(&list, &result),
            vec![
                "Guinea",
                "Guinea-Bissau",
                "Equatorial Guinea",
                "Papua New Guinea",
            ]
        );
    }

    #[test]
    fn starts_with_ties_fall_back_to_alphabetical() {
        let list = sample();
        // All three contain "g" and all three start with it once folded;
        // the tie is broken alphabetically, not by input order.
        let result = filter_and_sort(&list, None, "g");
        assert_eq!(names(&list, &result), vec!["Georgia", "Germany", "Ghana"]);
    }

    #[test]
    fn ger_matches_only_germany() {
        let list = sample();
        let result = filter_and_sort(&list, None, "ger");
        assert_eq!(names(&list, &result), vec!["Germany"]);
    }

    #[test]
    fn query_is_trimmed_and_case_folded() {
        let list = sample();
        assert_eq!(
            names(&list, &filter_and_sort(&list, None, "  GER  ")),
            vec!["Germany"]
        );
        // Whitespace-only query means no text constraint
        assert_eq!(filter_and_sort(&list, None, "   "), vec![0, 1, 2]);
    }

    #[test]
    fn region_and_query_compose_with_and_semantics() {
        let list = vec![
            country("Germany", "Europe"),
            country("Georgia", "Asia"),
            country("Greece", "Europe"),
        ];
        let result = filter_and_sort(&list, Some("Europe"), "ge");
        assert_eq!(names(&list, &result), vec!["Germany"]);
    }

    #[test]
    fn every_result_contains_the_query() {
        let list = vec![
            country("United Kingdom", "Europe"),
            country("United States", "Americas"),
            country("Tanzania", "Africa"),
            country("Kiribati", "Oceania"),
        ];
        let result = filter_and_sort(&list, None, "it");
        assert!(!result.is_empty());
        for &i in &result {
            assert!(list[i].name.to_lowercase().contains("it"));
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let list = sample();
        let first = filter_and_sort(&list, Some("Europe"), "ge");
        let second = filter_and_sort(&list, Some("Europe"), "ge");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_list_is_not_an_error() {
        let result = filter_and_sort(&[], Some("Europe"), "xyz");
        assert_eq!(result, Vec::<usize>::new());
    }

    #[test]
    fn record_with_empty_region_never_matches_a_region_filter() {
        let list = vec![country("Atlantis", ""), country("Kenya", "Africa")];
        assert_eq!(
            names(&list, &filter_and_sort(&list, Some("Africa"), "")),
            vec!["Kenya"]
        );
        // But it still participates when no region is selected
        assert_eq!(filter_and_sort(&list, None, "").len(), 2);
    }

    #[test]
    fn debouncer_fires_once_after_quiet_period() {
        let mut debounce = Debouncer::new(Duration::from_millis(500));
        let t0 = Instant::now();

        debounce.reset(t0);
        assert!(!debounce.poll(t0 + Duration::from_millis(499)));
        assert!(debounce.poll(t0 + Duration::from_millis(500)));
        // Fires at most once
        assert!(!debounce.poll(t0 + Duration::from_millis(501)));
    }

    #[test]
    fn debouncer_reset_postpones_the_deadline() {
        let mut debounce = Debouncer::new(Duration::from_millis(500));
        let t0 = Instant::now();

        debounce.reset(t0);
        debounce.reset(t0 + Duration::from_millis(400));
        assert!(!debounce.poll(t0 + Duration::from_millis(700)));
        assert!(debounce.poll(t0 + Duration::from_millis(900)));
    }

    #[test]
    fn debouncer_cancel_drops_pending_evaluation() {
        let mut debounce = Debouncer::new(Duration::from_millis(500));
        let t0 = Instant::now();

        assert!(!debounce.cancel());
        debounce.reset(t0);
        assert!(debounce.cancel());
        assert!(!debounce.poll(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn debouncer_reports_remaining_time() {
        let mut debounce = Debouncer::new(Duration::from_millis(500));
        let t0 = Instant::now();

        assert_eq!(debounce.remaining(t0), None);
        debounce.reset(t0);
        assert_eq!(
            debounce.remaining(t0 + Duration::from_millis(200)),
            Some(Duration::from_millis(300))
        );
        // Past the deadline the remaining time saturates to zero
        assert_eq!(
            debounce.remaining(t0 + Duration::from_millis(600)),
            Some(Duration::ZERO)
        );
    }
}
