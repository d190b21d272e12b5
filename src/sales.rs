use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use std::path::Path;

use crate::{
    amount::Amount,
    catalogue::Catalogue,
    input::{read_json, Input, LoadError},
    issues::Issues,
};

/// Defines the JSON format of one sales record.
#[derive(Debug, Deserialize)]
struct Record {
    #[serde(rename = "Product")]
    product: Option<Value>,
    #[serde(rename = "Quantity")]
    quantity: Option<Value>,
}

/// A validated sales record: some quantity of a named product.
#[derive(Debug, Eq, PartialEq)]
pub struct Sale {
    pub product: String,
    pub quantity: u32,
}

/// Why a sales record was left out of the total.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("not an object")]
    NotAnObject,
    #[error("missing product")]
    MissingProduct,
    #[error("invalid product {0}")]
    InvalidProduct(Value),
    #[error("missing quantity")]
    MissingQuantity,
    #[error("invalid quantity {0}")]
    InvalidQuantity(Value),
    #[error("negative quantity {0}")]
    NegativeQuantity(i64),
    #[error("unknown product {0:?}")]
    UnknownProduct(String),
}

impl TryFrom<Value> for Sale {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(RecordError::NotAnObject);
        }
        let record: Record =
            serde_json::from_value(value).map_err(|_| RecordError::NotAnObject)?;
        let product = match record.product {
            None => return Err(RecordError::MissingProduct),
            Some(Value::String(product)) => product.trim().to_string(),
            Some(other) => return Err(RecordError::InvalidProduct(other)),
        };
        let quantity = record.quantity.ok_or(RecordError::MissingQuantity)?;
        let Some(signed) = parse_quantity(&quantity) else {
            return Err(RecordError::InvalidQuantity(quantity));
        };
        if signed < 0 {
            return Err(RecordError::NegativeQuantity(signed));
        }
        let quantity = u32::try_from(signed).map_err(|_| RecordError::InvalidQuantity(quantity))?;
        Ok(Sale { product, quantity })
    }
}

/// Accepts a JSON integer, a float with no fractional part, or a string
/// holding an integer.
#[allow(clippy::cast_possible_truncation)]
fn parse_quantity(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            (f.fract() == 0.0 && f.abs() < 9.0e18).then(|| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reads the sales records at `path`.
///
/// The file must hold a JSON document; if that document is not a list, an
/// issue is added to `issues` and no records are returned.
///
/// # Errors
///
/// Returns errors if the file does not exist, cannot be read, or is not
/// valid JSON.
pub fn read_sales(path: impl AsRef<Path>, issues: &mut Issues) -> Result<Vec<Value>, LoadError> {
    let path = path.as_ref();
    match read_json(Input::Sales, path)? {
        Value::Array(records) => {
            log::debug!("read {} sales records from {}", records.len(), path.display());
            Ok(records)
        }
        _ => {
            issues.push(format!(
                "{} file {} does not contain a list; no sales counted",
                Input::Sales,
                path.display()
            ));
            Ok(Vec::new())
        }
    }
}

/// Totals `records` using prices from `catalogue`.
///
/// Each record that is invalid, or names a product missing from the
/// catalogue, contributes nothing to the total and adds one issue, naming
/// the record's index, to `issues`.
pub fn total_sales(catalogue: &Catalogue, records: Vec<Value>, issues: &mut Issues) -> Amount {
    let mut total = Amount::default();
    let mut counted = 0;
    for (index, value) in records.into_iter().enumerate() {
        let priced = Sale::try_from(value).and_then(|sale| {
            catalogue
                .price(&sale.product)
                .map(|price| price * sale.quantity)
                .ok_or(RecordError::UnknownProduct(sale.product))
        });
        match priced {
            Ok(amount) => {
                total += amount;
                counted += 1;
            }
            Err(e) => issues.push(format!("sales record {index}: {e}")),
        }
    }
    log::debug!("counted {counted} sales records, total {total}");
    total
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn catalogue() -> Catalogue {
        let mut issues = Issues::new();
        Catalogue::from_file("testdata/catalogue.json", &mut issues).unwrap()
    }

    fn records(value: Value) -> Vec<Value> {
        match value {
            Value::Array(records) => records,
            _ => panic!("test data must be a list"),
        }
    }

    #[test]
    fn total_sales_fn_sums_matched_records_and_reports_unknown_products() {
        let mut issues = Issues::new();
        let records = read_sales("testdata/sales.json", &mut issues).unwrap();
        let total = total_sales(&catalogue(), records, &mut issues);
        assert_eq!(total, Amount::new(35.0));
        assert_eq!(
            issues.iter().collect::<Vec<_>>(),
            vec!["sales record 2: unknown product \"C\""]
        );
    }

    #[test]
    fn total_sales_fn_returns_zero_for_no_records() {
        let mut issues = Issues::new();
        let total = total_sales(&catalogue(), Vec::new(), &mut issues);
        assert_eq!(total, Amount::default());
        assert!(issues.is_empty());
    }

    #[test]
    fn total_sales_fn_skips_invalid_records_in_order() {
        let mut issues = Issues::new();
        let total = total_sales(
            &catalogue(),
            records(json!([
                [1, 2],
                {"Quantity": 1},
                {"Product": "A"},
                {"Product": "A", "Quantity": "lots"},
                {"Product": "A", "Quantity": -2},
                {"Product": "A", "Quantity": 1.5},
                {"Product": 5, "Quantity": 1},
                {"Product": "Z", "Quantity": 1},
                {"Product": null, "Quantity": 1},
                {"Product": " B ", "Quantity": "4"},
                {"Product": "A", "Quantity": 2.0},
            ])),
            &mut issues,
        );
        assert_eq!(total, Amount::new(30.0));
        assert_eq!(
            issues.iter().collect::<Vec<_>>(),
            vec![
                "sales record 0: not an object",
                "sales record 1: missing product",
                "sales record 2: missing quantity",
                "sales record 3: invalid quantity \"lots\"",
                "sales record 4: negative quantity -2",
                "sales record 5: invalid quantity 1.5",
                "sales record 6: invalid product 5",
                "sales record 7: unknown product \"Z\"",
                "sales record 8: missing product",
            ]
        );
    }

    #[test]
    fn read_sales_fn_records_issue_when_root_is_not_a_list() {
        let mut issues = Issues::new();
        let records = read_sales("testdata/not_a_list.json", &mut issues).unwrap();
        assert!(records.is_empty());
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn read_sales_fn_returns_error_for_malformed_file() {
        let mut issues = Issues::new();
        let err = read_sales("testdata/malformed.json", &mut issues).unwrap_err();
        assert!(matches!(err, LoadError::Json { input: Input::Sales, .. }));
    }

    #[test]
    fn sale_try_from_fn_rejects_quantities_out_of_range() {
        assert_eq!(
            Sale::try_from(json!({"Product": "A", "Quantity": 5_000_000_000_i64})),
            Err(RecordError::InvalidQuantity(json!(5_000_000_000_i64)))
        );
        assert_eq!(
            Sale::try_from(json!({"Product": "A", "Quantity": 0})),
            Ok(Sale {
                product: "A".into(),
                quantity: 0
            })
        );
    }
}
