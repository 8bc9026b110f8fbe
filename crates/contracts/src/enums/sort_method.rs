use serde::{Deserialize, Serialize};

/// Product list ordering requested from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMethod {
    #[default]
    Relevance,
    PriceLowToHigh,
    PriceHighToLow,
    NameAscending,
    NameDescending,
}

impl SortMethod {
    pub fn all() -> [SortMethod; 5] {
        [
            SortMethod::Relevance,
            SortMethod::PriceLowToHigh,
            SortMethod::PriceHighToLow,
            SortMethod::NameAscending,
            SortMethod::NameDescending,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            SortMethod::Relevance => "relevance",
            SortMethod::PriceLowToHigh => "price_low_to_high",
            SortMethod::PriceHighToLow => "price_high_to_low",
            SortMethod::NameAscending => "name_ascending",
            SortMethod::NameDescending => "name_descending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMethod::Relevance => "Relevance",
            SortMethod::PriceLowToHigh => "Price: low to high",
            SortMethod::PriceHighToLow => "Price: high to low",
            SortMethod::NameAscending => "Name: A to Z",
            SortMethod::NameDescending => "Name: Z to A",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_matches_serde_name() {
        for method in SortMethod::all() {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.code()));
            assert_eq!(SortMethod::from_code(method.code()), Some(method));
        }
        assert_eq!(SortMethod::from_code("newest"), None);
    }
}
