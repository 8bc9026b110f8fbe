//! Filter selection state and the operations that move it.
//!
//! The criteria (what the catalog offers) are read-only here; the selection
//! (what the user picked so far) changes only through the methods below.

use contracts::domain::a001_filter_criteria::aggregate::{FilterCriteria, FilterOption};
use contracts::enums::sort_method::SortMethod;
use contracts::usecases::u501_product_search::ProductQuery;

/// `min`/`max` hold `0.0` until the criteria bounds have been adopted.
pub const UNSET_PRICE: f64 = 0.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected_provider_ids: Vec<String>,
    pub selected_category_ids: Vec<String>,
    pub min: f64,
    pub max: f64,
}

/// Request forwarded to the screen hosting the filters
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    Apply {
        sort: SortMethod,
        selection: SelectionState,
    },
    Clear {
        sort: SortMethod,
    },
}

/// True when the criteria offer anything to filter by
pub fn has_active_criteria(criteria: &FilterCriteria) -> bool {
    !criteria.is_empty()
}

/// Price controls only make sense for a non-degenerate range
pub fn show_price_range(criteria: &FilterCriteria) -> bool {
    matches!(criteria.price_bounds(), Some((min, max)) if min != max)
}

/// Number typed into a price field.
///
/// Blank input reads as zero; anything unparsable is `None`.
fn parse_price(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn toggle_id(ids: &mut Vec<String>, item: &FilterOption) {
    match ids.iter().position(|id| *id == item.id) {
        Some(index) => {
            ids.remove(index);
        }
        None => ids.push(item.id.clone()),
    }
}

impl SelectionState {
    pub fn is_provider_selected(&self, id: &str) -> bool {
        self.selected_provider_ids.iter().any(|p| p == id)
    }

    pub fn is_category_selected(&self, id: &str) -> bool {
        self.selected_category_ids.iter().any(|c| c == id)
    }

    pub fn toggle_provider(&mut self, item: &FilterOption) {
        toggle_id(&mut self.selected_provider_ids, item);
    }

    pub fn toggle_category(&mut self, item: &FilterOption) {
        toggle_id(&mut self.selected_category_ids, item);
    }

    /// Both bounds from one slider gesture
    pub fn set_range(&mut self, [min, max]: [f64; 2]) {
        self.min = min;
        self.max = max;
    }

    /// Free-text minimum; anything not above the floor becomes the floor
    pub fn set_min_text(&mut self, text: &str, criteria: &FilterCriteria) {
        let floor = criteria.min_price.unwrap_or(UNSET_PRICE);
        self.min = match parse_price(text) {
            Some(value) if value > floor => value,
            _ => floor,
        };
    }

    /// Free-text maximum; anything not below the ceiling becomes the ceiling
    pub fn set_max_text(&mut self, text: &str, criteria: &FilterCriteria) {
        let parsed = parse_price(text);
        match criteria.max_price {
            Some(ceiling) => {
                self.max = match parsed {
                    Some(value) if value < ceiling => value,
                    _ => ceiling,
                };
            }
            None => {
                if let Some(value) = parsed {
                    self.max = value;
                }
            }
        }
    }

    /// Adopt the criteria bounds for whichever side is still unset
    pub fn initialize_from(&mut self, criteria: &FilterCriteria) {
        if let Some((floor, ceiling)) = criteria.price_bounds() {
            if self.max == UNSET_PRICE {
                self.max = ceiling;
            }
            if self.min == UNSET_PRICE {
                self.min = floor;
            }
        }
    }

    /// Back to "nothing selected" within the current criteria
    pub fn reset(&mut self, criteria: &FilterCriteria) {
        let (min, max) = criteria
            .price_bounds()
            .unwrap_or((UNSET_PRICE, UNSET_PRICE));
        *self = SelectionState {
            min,
            max,
            ..Default::default()
        };
    }

    pub fn apply(&self, sort: SortMethod) -> FilterAction {
        FilterAction::Apply {
            sort,
            selection: self.clone(),
        }
    }

    pub fn clear(&self, sort: SortMethod) -> FilterAction {
        FilterAction::Clear { sort }
    }

    /// Number of filter groups narrowing the search (badge on the filter button)
    pub fn active_count(&self, criteria: &FilterCriteria) -> usize {
        let price_narrowed = match criteria.price_bounds() {
            Some((floor, ceiling)) if floor != ceiling => self.min > floor || self.max < ceiling,
            _ => false,
        };
        [
            !self.selected_provider_ids.is_empty(),
            !self.selected_category_ids.is_empty(),
            price_narrowed,
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    /// Search query for this selection; prices only when they can be chosen
    pub fn to_query(&self, sort: SortMethod, criteria: &FilterCriteria) -> ProductQuery {
        let with_prices = show_price_range(criteria);
        ProductQuery {
            sort,
            providers: self.selected_provider_ids.clone(),
            categories: self.selected_category_ids.clone(),
            min_price: with_prices.then_some(self.min),
            max_price: with_prices.then_some(self.max),
            pincode: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(min: Option<f64>, max: Option<f64>) -> FilterCriteria {
        FilterCriteria {
            providers: vec![
                FilterOption::new("p1", "Fresh Mart"),
                FilterOption::new("p2", "Daily Needs"),
            ],
            categories: vec![FilterOption::new("c1", "Grocery")],
            min_price: min,
            max_price: max,
        }
    }

    #[test]
    fn test_toggle_provider_adds_then_removes() {
        let c = criteria(None, None);
        let mut s = SelectionState::default();
        s.toggle_provider(&c.providers[0]);
        s.toggle_provider(&c.providers[1]);
        assert_eq!(s.selected_provider_ids, vec!["p1", "p2"]);
        assert!(s.is_provider_selected("p1"));

        s.toggle_provider(&c.providers[0]);
        assert_eq!(s.selected_provider_ids, vec!["p2"]);
        assert!(!s.is_provider_selected("p1"));
    }

    #[test]
    fn test_toggle_twice_restores_contents() {
        let c = criteria(None, None);
        let mut s = SelectionState {
            selected_provider_ids: vec!["p2".into(), "p9".into()],
            selected_category_ids: vec!["c7".into()],
            ..Default::default()
        };
        let before = s.clone();

        s.toggle_provider(&c.providers[0]);
        s.toggle_provider(&c.providers[0]);
        s.toggle_category(&c.categories[0]);
        s.toggle_category(&c.categories[0]);

        assert_eq!(s, before);
    }

    #[test]
    fn test_toggle_removing_changes_order_but_not_contents() {
        let c = criteria(None, None);
        let mut s = SelectionState {
            selected_provider_ids: vec!["p1".into(), "p2".into()],
            ..Default::default()
        };
        s.toggle_provider(&c.providers[0]);
        s.toggle_provider(&c.providers[0]);

        let mut ids = s.selected_provider_ids.clone();
        assert_eq!(ids, vec!["p2", "p1"]);
        ids.sort();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[test]
    fn test_set_range_sets_both_bounds() {
        let mut s = SelectionState::default();
        s.set_range([15.0, 80.0]);
        assert_eq!((s.min, s.max), (15.0, 80.0));
    }

    #[test]
    fn test_min_text_at_or_below_floor_is_clamped_to_floor() {
        let c = criteria(Some(10.0), Some(100.0));
        let mut s = SelectionState {
            min: 40.0,
            max: 100.0,
            ..Default::default()
        };
        s.set_min_text("5", &c);
        assert_eq!(s.min, 10.0);

        s.min = 40.0;
        s.set_min_text("10", &c);
        assert_eq!(s.min, 10.0);

        s.set_min_text("25.5", &c);
        assert_eq!(s.min, 25.5);
    }

    #[test]
    fn test_min_text_garbage_is_floor() {
        let c = criteria(Some(10.0), Some(100.0));
        let mut s = SelectionState::default();
        s.set_min_text("abc", &c);
        assert_eq!(s.min, 10.0);
        s.set_min_text("", &c);
        assert_eq!(s.min, 10.0);
    }

    #[test]
    fn test_max_text_at_or_above_ceiling_is_clamped_to_ceiling() {
        let c = criteria(Some(10.0), Some(100.0));
        let mut s = SelectionState {
            min: 10.0,
            max: 60.0,
            ..Default::default()
        };
        s.set_max_text("250", &c);
        assert_eq!(s.max, 100.0);

        s.max = 60.0;
        s.set_max_text("100", &c);
        assert_eq!(s.max, 100.0);

        s.set_max_text("75", &c);
        assert_eq!(s.max, 75.0);

        s.set_max_text("1e3x", &c);
        assert_eq!(s.max, 100.0);
    }

    #[test]
    fn test_initialize_only_fills_unset_bounds() {
        let c = criteria(Some(10.0), Some(100.0));

        let mut fresh = SelectionState::default();
        fresh.initialize_from(&c);
        assert_eq!((fresh.min, fresh.max), (10.0, 100.0));

        let mut adjusted = SelectionState {
            min: 30.0,
            max: UNSET_PRICE,
            ..Default::default()
        };
        adjusted.initialize_from(&c);
        assert_eq!((adjusted.min, adjusted.max), (30.0, 100.0));
    }

    #[test]
    fn test_initialize_without_both_bounds_is_noop() {
        let mut s = SelectionState::default();
        s.initialize_from(&criteria(Some(10.0), None));
        assert_eq!(s, SelectionState::default());
    }

    #[test]
    fn test_has_active_criteria() {
        let empty = FilterCriteria {
            providers: vec![],
            categories: vec![],
            min_price: None,
            max_price: None,
        };
        assert!(!has_active_criteria(&empty));

        let only_price = FilterCriteria {
            max_price: Some(50.0),
            ..empty.clone()
        };
        assert!(has_active_criteria(&only_price));
        assert!(has_active_criteria(&criteria(None, None)));
    }

    #[test]
    fn test_price_range_hidden_when_bounds_equal() {
        assert!(!show_price_range(&criteria(Some(99.0), Some(99.0))));
        assert!(!show_price_range(&criteria(Some(10.0), None)));
        assert!(!show_price_range(&criteria(None, None)));
        assert!(show_price_range(&criteria(Some(0.0), Some(99.0))));
    }

    #[test]
    fn test_reset_clears_ids_and_restores_bounds() {
        let c = criteria(Some(10.0), Some(100.0));
        let mut s = SelectionState {
            selected_provider_ids: vec!["p1".into()],
            selected_category_ids: vec!["c1".into()],
            min: 20.0,
            max: 30.0,
        };
        s.reset(&c);
        assert_eq!(
            s,
            SelectionState {
                min: 10.0,
                max: 100.0,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_apply_and_clear_actions() {
        let s = SelectionState {
            selected_provider_ids: vec!["p1".into()],
            ..Default::default()
        };
        assert_eq!(
            s.apply(SortMethod::PriceLowToHigh),
            FilterAction::Apply {
                sort: SortMethod::PriceLowToHigh,
                selection: s.clone(),
            }
        );
        assert_eq!(
            s.clear(SortMethod::Relevance),
            FilterAction::Clear {
                sort: SortMethod::Relevance
            }
        );
    }

    #[test]
    fn test_to_query_includes_prices_only_for_real_range() {
        let s = SelectionState {
            selected_provider_ids: vec!["p1".into()],
            selected_category_ids: vec![],
            min: 20.0,
            max: 90.0,
        };

        let q = s.to_query(SortMethod::NameAscending, &criteria(Some(10.0), Some(100.0)));
        assert_eq!(q.providers, vec!["p1"]);
        assert_eq!(q.min_price, Some(20.0));
        assert_eq!(q.max_price, Some(90.0));

        let q = s.to_query(SortMethod::NameAscending, &criteria(Some(50.0), Some(50.0)));
        assert_eq!(q.min_price, None);
        assert_eq!(q.max_price, None);
    }

    #[test]
    fn test_active_count() {
        let c = criteria(Some(10.0), Some(100.0));
        let mut s = SelectionState {
            min: 10.0,
            max: 100.0,
            ..Default::default()
        };
        assert_eq!(s.active_count(&c), 0);

        s.toggle_category(&c.categories[0]);
        s.set_range([10.0, 60.0]);
        assert_eq!(s.active_count(&c), 2);
    }
}
