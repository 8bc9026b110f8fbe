use crate::shared::api_error::ApiError;
use crate::shared::api_utils::get_json;
use crate::shared::config::PRODUCT_SEARCH_PATH;
use contracts::usecases::u501_product_search::{ProductQuery, ProductSearchResponse};

/// Request path for `query`, e.g. `/api/products?sort=relevance`
pub fn product_search_path(query: &ProductQuery) -> String {
    let query_string = serde_qs::to_string(query).unwrap_or_default();
    format!("{}?{}", PRODUCT_SEARCH_PATH, query_string)
}

pub async fn search_products(query: &ProductQuery) -> Result<ProductSearchResponse, ApiError> {
    get_json::<ProductSearchResponse>(&product_search_path(query)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::sort_method::SortMethod;

    #[test]
    fn test_path_carries_sort_and_pincode() {
        let query = ProductQuery::sorted_by(SortMethod::PriceLowToHigh)
            .with_pincode(Some("560001".to_string()));
        let path = product_search_path(&query);

        assert!(path.starts_with("/api/products?"));
        assert!(path.contains("sort=price_low_to_high"));
        assert!(path.contains("pincode=560001"));
        assert!(!path.contains("min_price"));
    }
}
