use contracts::domain::a001_filter_criteria::aggregate::FilterCriteria;
use leptos::prelude::*;

/// Criteria of the catalog view currently on screen.
///
/// Owned by the app root, filled by the product list from search results
/// and read by the filters sheet.
#[derive(Clone, Copy)]
pub struct FilterCriteriaStore {
    pub criteria: RwSignal<FilterCriteria>,
}

impl FilterCriteriaStore {
    pub fn new() -> Self {
        Self {
            criteria: RwSignal::new(FilterCriteria::default()),
        }
    }

    pub fn replace(&self, criteria: FilterCriteria) {
        log::debug!(
            "Filter criteria: {} providers, {} categories, price {:?}..{:?}",
            criteria.providers.len(),
            criteria.categories.len(),
            criteria.min_price,
            criteria.max_price
        );
        self.criteria.set(criteria);
    }
}

impl Default for FilterCriteriaStore {
    fn default() -> Self {
        Self::new()
    }
}
