use crate::enums::sort_method::SortMethod;
use serde::{Deserialize, Serialize};

/// Query for `GET /api/products`, sent as a URL query string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductQuery {
    pub sort: SortMethod,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub providers: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,

    /// Delivery area; search results are scoped to sellers serving it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

impl ProductQuery {
    /// Query carrying only the ordering (used after filters are cleared)
    pub fn sorted_by(sort: SortMethod) -> Self {
        Self {
            sort,
            ..Default::default()
        }
    }

    pub fn with_pincode(mut self, pincode: Option<String>) -> Self {
        self.pincode = pincode;
        self
    }
}
