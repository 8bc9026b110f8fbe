use serde::{Deserialize, Serialize};

/// A single selectable filter value (provider or category)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub name: String,
}

impl FilterOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Filterable values available for the current catalog view.
///
/// Sent by the catalog server together with every product search result.
/// When both prices are present `min_price <= max_price`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub providers: Vec<FilterOption>,

    #[serde(default)]
    pub categories: Vec<FilterOption>,

    #[serde(rename = "minPrice", default)]
    pub min_price: Option<f64>,

    #[serde(rename = "maxPrice", default)]
    pub max_price: Option<f64>,
}

impl FilterCriteria {
    /// Both price bounds, if the catalog reports them.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    /// Whether there is anything to filter by at all.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
            && self.categories.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_prices() {
        let json = r#"{
            "providers": [{"id": "p1", "name": "Fresh Mart"}],
            "categories": [],
            "minPrice": 10,
            "maxPrice": 250.5
        }"#;
        let criteria: FilterCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.providers, vec![FilterOption::new("p1", "Fresh Mart")]);
        assert_eq!(criteria.price_bounds(), Some((10.0, 250.5)));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let criteria: FilterCriteria = serde_json::from_str("{}").unwrap();
        assert!(criteria.is_empty());
        assert_eq!(criteria.price_bounds(), None);
    }

    #[test]
    fn test_null_prices() {
        let json = r#"{"providers": [], "categories": [], "minPrice": null, "maxPrice": 40}"#;
        let criteria: FilterCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.price_bounds(), None);
        assert!(!criteria.is_empty());
    }
}
