use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use std::{collections::HashMap, path::Path};

use crate::{
    amount::Amount,
    input::{read_json, Input, LoadError},
    issues::Issues,
};

/// Defines the JSON format of one price catalogue entry.
///
/// The product name may be given as either `title` or `Product`; a `null`
/// value counts as absent.
#[derive(Debug, Deserialize)]
struct Entry {
    title: Option<Value>,
    #[serde(rename = "Product")]
    product: Option<Value>,
    price: Option<Value>,
}

/// Why a catalogue entry was left out of the catalogue.
#[derive(Debug, Error, PartialEq)]
pub enum EntryError {
    #[error("not an object")]
    NotAnObject,
    #[error("missing product name")]
    MissingName,
    #[error("invalid product name {0}")]
    InvalidName(Value),
    #[error("missing price")]
    MissingPrice,
    #[error("invalid price {0}")]
    InvalidPrice(Value),
    #[error("negative price {0}")]
    NegativePrice(f64),
}

/// Maps product names to unit prices.
///
/// To load a catalogue from a JSON file, use [`Catalogue::from_file`].
#[derive(Debug, Default)]
pub struct Catalogue {
    prices: HashMap<String, Amount>,
}

impl Catalogue {
    /// Reads the price catalogue at `path`.
    ///
    /// The file must hold a JSON list of objects, each with a product name
    /// (under `title` or `Product`) and a non-negative `price`:
    ///
    /// ```json
    /// [{"title": "Widget", "price": 2.5}, {"Product": "Gadget", "price": "10"}]
    /// ```
    ///
    /// Entries that don't fit this format are skipped, and an issue naming
    /// the entry's index is added to `issues`. When a name appears more than
    /// once, the last price given for it is used.
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// * The file does not exist or cannot be read
    /// * The file is not valid JSON
    /// * The JSON document is not a list
    /// * No entry in the list is valid
    pub fn from_file(path: impl AsRef<Path>, issues: &mut Issues) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let Value::Array(entries) = read_json(Input::Catalogue, path)? else {
            return Err(LoadError::NotAList {
                input: Input::Catalogue,
                path: path.to_path_buf(),
            });
        };
        let catalogue = Self::from_entries(entries, issues);
        if catalogue.is_empty() {
            return Err(LoadError::EmptyCatalogue {
                path: path.to_path_buf(),
            });
        }
        log::debug!("loaded {} products from {}", catalogue.len(), path.display());
        Ok(catalogue)
    }

    /// Builds a catalogue from already-parsed JSON entries, recording an
    /// issue for each entry that is skipped.
    pub fn from_entries(entries: Vec<Value>, issues: &mut Issues) -> Self {
        let mut catalogue = Self::default();
        for (index, value) in entries.into_iter().enumerate() {
            match parse_entry(value) {
                Ok((name, price)) => {
                    catalogue.prices.insert(name, price);
                }
                Err(e) => issues.push(format!("price catalogue entry {index}: {e}")),
            }
        }
        catalogue
    }

    /// Returns the unit price of the product called `name`, if listed.
    #[must_use]
    pub fn price(&self, name: &str) -> Option<Amount> {
        self.prices.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

fn parse_entry(value: Value) -> Result<(String, Amount), EntryError> {
    if !value.is_object() {
        return Err(EntryError::NotAnObject);
    }
    let entry: Entry = serde_json::from_value(value).map_err(|_| EntryError::NotAnObject)?;
    let name = match entry.title.or(entry.product) {
        None => return Err(EntryError::MissingName),
        Some(Value::String(name)) if !name.trim().is_empty() => name.trim().to_string(),
        Some(other) => return Err(EntryError::InvalidName(other)),
    };
    let price = entry.price.ok_or(EntryError::MissingPrice)?;
    let price = parse_price(&price).ok_or(EntryError::InvalidPrice(price))?;
    if price < 0.0 {
        return Err(EntryError::NegativePrice(price));
    }
    Ok((name, Amount::new(price)))
}

/// Accepts a JSON number or a string holding a decimal number.
fn parse_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    price.is_finite().then_some(price)
}
