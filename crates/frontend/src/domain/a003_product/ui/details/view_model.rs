//! Rows of the product details panel.

use contracts::domain::a003_product::aggregate::ProductItem;
use contracts::shared::lenient::truthy;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

impl DetailRow {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Strings as they are, null as nothing, anything else in its JSON form
fn verbatim(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Policy flags the seller declared, in display order.
///
/// A declared key always gets a row, even when its value is null.
pub fn policy_rows(item: &ProductItem) -> Vec<DetailRow> {
    let flags = [
        ("Returnable", &item.returnable),
        ("Cancellable", &item.cancellable),
        ("Cash on delivery", &item.available_on_cod),
    ];

    let mut rows: Vec<DetailRow> = flags
        .into_iter()
        .filter_map(|(label, flag)| {
            flag.as_ref()
                .map(|value| DetailRow::new(label, yes_no(truthy(value))))
        })
        .collect();

    if let Some(quantity) = &item.available_quantity {
        rows.push(DetailRow::new("Available quantity", verbatim(quantity)));
    }
    rows
}

/// Statutory declarations; `None` when the item carries none at all.
///
/// Blank fields are skipped, so the section can exist with no rows.
pub fn statutory_rows(item: &ProductItem) -> Option<Vec<DetailRow>> {
    let commodity = item.packaged_commodity.as_ref()?;
    let fields = [
        ("Manufacturer / packer", &commodity.manufacturer_or_packer_name),
        ("Net quantity", &commodity.net_quantity_or_measure_of_commodity_in_pkg),
        ("Month / year of manufacture", &commodity.month_year_of_manufacture_packing_import),
        ("Country of origin", &commodity.imported_product_country_of_origin),
    ];

    Some(
        fields
            .into_iter()
            .filter_map(|(label, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| DetailRow::new(label, v))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_product::aggregate::PackagedCommodity;

    fn labels(rows: &[DetailRow]) -> Vec<&'static str> {
        rows.iter().map(|r| r.label).collect()
    }

    #[test]
    fn test_only_declared_flags_render() {
        let item = ProductItem {
            cancellable: Some(Value::from(true)),
            available_on_cod: Some(Value::from(false)),
            ..Default::default()
        };
        let rows = policy_rows(&item);
        assert_eq!(labels(&rows), vec!["Cancellable", "Cash on delivery"]);
        assert_eq!(rows[0].value, "Yes");
        assert_eq!(rows[1].value, "No");
    }

    #[test]
    fn test_policy_order_and_quantity_verbatim() {
        let item = ProductItem {
            returnable: Some(Value::from(false)),
            cancellable: Some(Value::from(false)),
            available_on_cod: Some(Value::from(true)),
            available_quantity: Some(Value::from(12)),
            ..Default::default()
        };
        let rows = policy_rows(&item);
        assert_eq!(
            labels(&rows),
            vec!["Returnable", "Cancellable", "Cash on delivery", "Available quantity"]
        );
        assert_eq!(rows[3].value, "12");

        let item = ProductItem {
            available_quantity: Some(Value::from("99+")),
            ..Default::default()
        };
        assert_eq!(policy_rows(&item)[0].value, "99+");
    }

    #[test]
    fn test_string_and_null_flags() {
        let item = ProductItem {
            returnable: Some(Value::from("true")),
            cancellable: Some(Value::from("false")),
            available_on_cod: Some(Value::Null),
            ..Default::default()
        };
        let rows = policy_rows(&item);
        assert_eq!(
            labels(&rows),
            vec!["Returnable", "Cancellable", "Cash on delivery"]
        );
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["Yes", "No", "No"]);
    }

    #[test]
    fn test_no_statutory_section_without_commodity() {
        assert_eq!(statutory_rows(&ProductItem::default()), None);
    }

    #[test]
    fn test_statutory_rows_skip_blank_values() {
        let item = ProductItem {
            packaged_commodity: Some(PackagedCommodity {
                manufacturer_or_packer_name: Some("Agro Foods".into()),
                net_quantity_or_measure_of_commodity_in_pkg: Some("".into()),
                month_year_of_manufacture_packing_import: None,
                imported_product_country_of_origin: Some("India".into()),
            }),
            ..Default::default()
        };
        let rows = statutory_rows(&item).unwrap();
        assert_eq!(labels(&rows), vec!["Manufacturer / packer", "Country of origin"]);
        assert_eq!(rows[1].value, "India");
    }

    #[test]
    fn test_empty_commodity_keeps_section() {
        let item = ProductItem {
            packaged_commodity: Some(PackagedCommodity::default()),
            ..Default::default()
        };
        assert_eq!(statutory_rows(&item), Some(Vec::new()));
    }
}
