//! Filter pipeline
//!
//! Search, category and price predicates, ANDed together. Filtering is stable
//! and never touches the source collection.

use super::Listable;
use std::collections::BTreeSet;

/// Upper bound of the default (unfiltered) price range
pub const DEFAULT_MAX_PRICE: f64 = 1000.0;

/// Inclusive price bounds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Narrower than the default range
    pub fn is_restricted(&self) -> bool {
        self.min > 0.0 || self.max < DEFAULT_MAX_PRICE
    }
}

/// Preset shown in the quick filter panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricePreset {
    pub label: &'static str,
    pub range: PriceRange,
}

pub const PRICE_PRESETS: [PricePreset; 3] = [
    PricePreset { label: "Under $20", range: PriceRange { min: 0.0, max: 20.0 } },
    PricePreset { label: "$20 - $50", range: PriceRange { min: 20.0, max: 50.0 } },
    PricePreset { label: "$50 - $100", range: PriceRange { min: 50.0, max: 100.0 } },
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name or description
    pub search_term: String,
    /// Exact category label; `None` or empty matches everything
    pub category: Option<String>,
    pub price_range: PriceRange,
}

impl FilterCriteria {
    /// Any predicate narrower than "show everything"
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.category_filter().is_some() || self.price_range.is_restricted()
    }

    fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Test one item against every predicate
    pub fn matches<T: Listable + ?Sized>(&self, item: &T) -> bool {
        self.matches_with_needle(item, &self.search_term.to_lowercase())
    }

    fn matches_with_needle<T: Listable + ?Sized>(&self, item: &T, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || item.name().to_lowercase().contains(needle)
            || item.description().to_lowercase().contains(needle);

        let matches_category = match self.category_filter() {
            Some(category) => item.category() == category,
            None => true,
        };

        matches_search && matches_category && self.price_range.contains(item.price())
    }
}

/// Criteria together with a revision bumped on every effective edit
///
/// Two different criteria can select the same items, so the lists key their
/// position resets on the revision rather than on the filtered result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub criteria: FilterCriteria,
    pub revision: u64,
}

impl FilterState {
    /// Apply `edit`; returns false and leaves the revision alone when the
    /// criteria come out unchanged
    pub fn update(&mut self, edit: impl FnOnce(&mut FilterCriteria)) -> bool {
        let mut next = self.criteria.clone();
        edit(&mut next);
        if next == self.criteria {
            return false;
        }
        self.criteria = next;
        self.revision = self.revision.wrapping_add(1);
        true
    }
}

/// Items matching `criteria`, in source order
pub fn apply<T>(items: &[T], criteria: &FilterCriteria) -> Vec<T>
where
    T: Listable + Clone,
{
    let needle = criteria.search_term.to_lowercase();
    items
        .iter()
        .filter(|item| criteria.matches_with_needle(*item, &needle))
        .cloned()
        .collect()
}

/// Sorted, de-duplicated category labels
pub fn categories<T: Listable>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.category())
        .filter(|category| !category.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Parse a price bound typed by the user
///
/// Input that is not a finite number keeps `fallback`; negative values
/// clamp to zero. Never fails.
pub fn parse_price_bound(input: &str, fallback: f64) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.max(0.0),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Book {
        id: u32,
        name: &'static str,
        description: &'static str,
        category: &'static str,
        price: f64,
    }

    impl Listable for Book {
        fn id(&self) -> u32 {
            self.id
        }
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> &str {
            self.description
        }
        fn category(&self) -> &str {
            self.category
        }
        fn price(&self) -> f64 {
            self.price
        }
    }

    fn books() -> Vec<Book> {
        vec![
            Book { id: 1, name: "The Great Gatsby", description: "A classic tale of the American Dream", category: "Fiction", price: 12.99 },
            Book { id: 2, name: "Sapiens", description: "A brief history of humankind", category: "History", price: 18.99 },
            Book { id: 3, name: "Clean Code", description: "A handbook of agile software craftsmanship", category: "Technology", price: 45.99 },
            Book { id: 4, name: "Brief History of Time", description: "From the Big Bang to black holes", category: "Science", price: 17.99 },
            Book { id: 5, name: "1984", description: "A dystopian novel", category: "Fiction", price: 14.99 },
        ]
    }

    fn ids(items: &[Book]) -> Vec<u32> {
        items.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_gatsby_scenario() {
        let criteria = FilterCriteria {
            search_term: "gatsby".to_string(),
            category: None,
            price_range: PriceRange::new(0.0, 1000.0),
        };
        assert_eq!(ids(&apply(&books(), &criteria)), vec![1]);
    }

    #[test]
    fn test_search_matches_name_or_description() {
        let criteria = FilterCriteria { search_term: "HISTORY".to_string(), ..Default::default() };
        // "Sapiens" matches on description, "Brief History of Time" on name
        assert_eq!(ids(&apply(&books(), &criteria)), vec![2, 4]);
    }

    #[test]
    fn test_category_and_price_are_anded() {
        let criteria = FilterCriteria {
            category: Some("Fiction".to_string()),
            price_range: PriceRange::new(13.0, 20.0),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&books(), &criteria)), vec![5]);
    }

    #[test]
    fn test_empty_category_matches_all() {
        let criteria = FilterCriteria { category: Some(String::new()), ..Default::default() };
        assert_eq!(apply(&books(), &criteria).len(), 5);
        assert!(!criteria.is_active());
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let criteria = FilterCriteria {
            price_range: PriceRange::new(12.99, 14.99),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&books(), &criteria)), vec![1, 5]);
    }

    #[test]
    fn test_apply_is_idempotent_and_stable() {
        let source = books();
        let criteria = FilterCriteria { search_term: "a".to_string(), ..Default::default() };
        let once = apply(&source, &criteria);
        let twice = apply(&once, &criteria);
        assert_eq!(once, twice);

        let mut sorted = ids(&once);
        sorted.sort();
        assert_eq!(ids(&once), sorted);
        assert_eq!(source, books());
    }

    #[test]
    fn test_no_results_is_empty_not_error() {
        let criteria = FilterCriteria { search_term: "zzz".to_string(), ..Default::default() };
        assert!(apply(&books(), &criteria).is_empty());
    }

    #[test]
    fn test_revision_bumps_even_when_result_is_unchanged() {
        let source = books();
        let mut state = FilterState::default();
        let before = apply(&source, &state.criteria);

        // Every book matches an empty category string and the full price range
        assert!(state.update(|c| c.category = Some(String::new())));
        assert_eq!(state.revision, 1);
        assert_eq!(apply(&source, &state.criteria), before);

        // Every book mentions an "a" somewhere
        assert!(state.update(|c| c.search_term = "a".to_string()));
        assert_eq!(state.revision, 2);
        assert_eq!(apply(&source, &state.criteria), before);
    }

    #[test]
    fn test_noop_edit_keeps_revision() {
        let mut state = FilterState::default();
        assert!(!state.update(|c| *c = FilterCriteria::default()));
        assert!(!state.update(|c| c.price_range = PriceRange::default()));
        assert_eq!(state.revision, 0);

        state.update(|c| c.search_term = "rust".to_string());
        assert!(!state.update(|c| c.search_term = "rust".to_string()));
        assert_eq!(state.revision, 1);
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterCriteria::default().is_active());
        assert!(FilterCriteria { search_term: "x".into(), ..Default::default() }.is_active());
        assert!(FilterCriteria { category: Some("Art".into()), ..Default::default() }.is_active());
        assert!(FilterCriteria { price_range: PriceRange::new(5.0, 1000.0), ..Default::default() }.is_active());
    }

    #[test]
    fn test_categories_sorted_unique() {
        assert_eq!(categories(&books()), vec!["Fiction", "History", "Science", "Technology"]);
    }

    #[test]
    fn test_parse_price_bound() {
        assert_eq!(parse_price_bound("25.5", 0.0), 25.5);
        assert_eq!(parse_price_bound(" 40 ", 0.0), 40.0);
        assert_eq!(parse_price_bound("abc", 1000.0), 1000.0);
        assert_eq!(parse_price_bound("", 0.0), 0.0);
        assert_eq!(parse_price_bound("-5", 10.0), 0.0);
        assert_eq!(parse_price_bound("NaN", 7.0), 7.0);
        assert_eq!(parse_price_bound("inf", 7.0), 7.0);
    }
}
