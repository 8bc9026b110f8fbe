use crate::shared::lenient;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Catalog item as listed by product search.
///
/// Policy flags use the ONDC attribute names the sellers publish. Their
/// values are kept as sent (sellers mix bools and strings); a key present
/// with `null` stays `Some(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductItem {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub provider_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,

    #[serde(
        rename = "@ondc/org/returnable",
        default,
        deserialize_with = "lenient::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub returnable: Option<Value>,

    #[serde(
        rename = "@ondc/org/cancellable",
        default,
        deserialize_with = "lenient::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub cancellable: Option<Value>,

    #[serde(
        rename = "@ondc/org/available_on_cod",
        default,
        deserialize_with = "lenient::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub available_on_cod: Option<Value>,

    /// Sellers send either a number or a string here; rendered verbatim.
    #[serde(
        rename = "AvailableQuantity",
        default,
        deserialize_with = "lenient::present",
        skip_serializing_if = "Option::is_none"
    )]
    pub available_quantity: Option<Value>,

    #[serde(
        rename = "@ondc/org/statutory_reqs_packaged_commodities",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub packaged_commodity: Option<PackagedCommodity>,
}

/// Statutory declarations for packaged commodities; scalars read as text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackagedCommodity {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub manufacturer_or_packer_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub net_quantity_or_measure_of_commodity_in_pkg: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub month_year_of_manufacture_packing_import: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub imported_product_country_of_origin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ondc_attributes() {
        let json = r#"{
            "id": "sku-1",
            "name": "Basmati rice 5kg",
            "@ondc/org/returnable": false,
            "@ondc/org/available_on_cod": true,
            "AvailableQuantity": 12,
            "@ondc/org/statutory_reqs_packaged_commodities": {
                "manufacturer_or_packer_name": "Agro Foods",
                "net_quantity_or_measure_of_commodity_in_pkg": "5 kg"
            }
        }"#;
        let item: ProductItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.returnable, Some(Value::from(false)));
        assert_eq!(item.cancellable, None);
        assert_eq!(item.available_on_cod, Some(Value::from(true)));
        assert_eq!(item.available_quantity, Some(Value::from(12)));
        let commodity = item.packaged_commodity.unwrap();
        assert_eq!(commodity.manufacturer_or_packer_name.as_deref(), Some("Agro Foods"));
        assert_eq!(commodity.imported_product_country_of_origin, None);
    }

    #[test]
    fn test_mixed_seller_types_decode() {
        let json = r#"[
            {"id": "a", "@ondc/org/returnable": "true", "price": "49.00"},
            {"id": "b", "@ondc/org/cancellable": null, "AvailableQuantity": "99+",
             "@ondc/org/statutory_reqs_packaged_commodities": {"net_quantity_or_measure_of_commodity_in_pkg": 500}}
        ]"#;
        let items: Vec<ProductItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].returnable, Some(Value::from("true")));
        assert_eq!(items[0].price, Some(49.0));
        assert_eq!(items[1].cancellable, Some(Value::Null));
        let commodity = items[1].packaged_commodity.as_ref().unwrap();
        assert_eq!(
            commodity.net_quantity_or_measure_of_commodity_in_pkg.as_deref(),
            Some("500")
        );
    }
}
