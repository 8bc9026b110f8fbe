use crate::domain::a001_filter_criteria::aggregate::FilterCriteria;
use crate::domain::a003_product::aggregate::ProductItem;
use serde::{Deserialize, Serialize};

/// Result page of a product search together with the criteria the
/// catalog offers for further narrowing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSearchResponse {
    #[serde(default)]
    pub items: Vec<ProductItem>,

    #[serde(default)]
    pub filters: FilterCriteria,
}
