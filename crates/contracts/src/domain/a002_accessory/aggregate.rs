//! Accessories attached to a single-product tab.
//!
//! The list is the source of truth for both the visible table and the hidden
//! `accessories_data_<i>` field; the hidden value is always produced by
//! [`AccessoryList::to_hidden`]. Records get a stable [`AccessoryId`] when they
//! enter the list and removal is keyed by that id, never by table position.
//! The id stays in memory: the wire format is `{name, code, price}`.

use crate::shared::price_format::{parse_number, to_fixed_2};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessoryId(Uuid);

impl AccessoryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for AccessoryId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    #[serde(skip)]
    pub id: AccessoryId,
    pub name: String,
    #[serde(default)]
    pub code: String,
    /// Two decimals, dot separated (`"12.50"`)
    #[serde(default = "zero_price", deserialize_with = "price_from_wire")]
    pub price: String,
}

fn zero_price() -> String {
    "0.00".to_string()
}

/// Older offers stored the price as a JSON number.
fn price_from_wire<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WirePrice {
        Text(String),
        Number(f64),
    }

    Ok(match WirePrice::deserialize(deserializer)? {
        WirePrice::Text(text) => text,
        WirePrice::Number(n) => to_fixed_2(n),
    })
}

/// Raw values of the three "add accessory" inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessoryDraft {
    pub name: String,
    pub code: String,
    pub price: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum AccessoryError {
    #[error("Il nome dell'accessorio è obbligatorio")]
    NameRequired,
    #[error("Prezzo dell'accessorio non valido: {0}")]
    InvalidPrice(String),
}

impl AccessoryDraft {
    /// Validate and normalise the draft into a new record.
    ///
    /// A blank price becomes `"0.00"`; otherwise the leading number is kept
    /// with two decimals. Text without any number is rejected.
    pub fn into_accessory(self) -> Result<Accessory, AccessoryError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AccessoryError::NameRequired);
        }

        let price = if self.price.trim().is_empty() {
            zero_price()
        } else {
            parse_number(&self.price)
                .map(to_fixed_2)
                .ok_or_else(|| AccessoryError::InvalidPrice(self.price.clone()))?
        };

        Ok(Accessory {
            id: AccessoryId::new(),
            name: name.to_string(),
            code: self.code.trim().to_string(),
            price,
        })
    }
}

#[derive(Debug, Error)]
pub enum HiddenDataError {
    #[error("accessory data is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("accessory data is not an array")]
    NotAnArray,
    #[error("accessory record is malformed: {0}")]
    InvalidRecord(#[source] serde_json::Error),
}

/// Result of [`AccessoryList::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The table already had rows; nothing was touched.
    AlreadyLoaded,
    /// The table was rebuilt with this many rows.
    Loaded(usize),
    /// The hidden value was unreadable and has been reset to `[]`.
    Reset,
}

/// Result of [`AccessoryList::validate_on_submit`]. Never blocks submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCheck {
    /// Value that should be submitted for the hidden field.
    pub hidden: String,
    pub submitted_len: usize,
    pub visible_rows: usize,
    /// The hidden value was replaced with `[]`.
    pub coerced: bool,
}

impl SubmitCheck {
    pub fn is_consistent(&self) -> bool {
        self.submitted_len == self.visible_rows
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessoryList {
    items: Vec<Accessory>,
}

impl AccessoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a hidden field value into records with fresh ids.
    pub fn parse_hidden(raw: &str) -> Result<Vec<Accessory>, HiddenDataError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(HiddenDataError::InvalidJson)?;
        if !value.is_array() {
            return Err(HiddenDataError::NotAnArray);
        }
        serde_json::from_value(value).map_err(HiddenDataError::InvalidRecord)
    }

    /// Build the table from the hidden field value.
    ///
    /// Does nothing when rows are already present, so calling it twice never
    /// duplicates rows. An unreadable value empties the list and must be
    /// written back as `[]` by the caller via [`Self::to_hidden`].
    pub fn load(&mut self, raw: &str) -> LoadOutcome {
        if !self.items.is_empty() {
            return LoadOutcome::AlreadyLoaded;
        }

        match Self::parse_hidden(raw) {
            Ok(items) => {
                let count = items.len();
                self.items = items;
                log::debug!("Loaded {} accessories", count);
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                log::error!("Error loading accessories: {}", e);
                self.items.clear();
                LoadOutcome::Reset
            }
        }
    }

    /// Append a record built from `draft`.
    pub fn add(&mut self, draft: AccessoryDraft) -> Result<&Accessory, AccessoryError> {
        let accessory = draft.into_accessory()?;
        self.items.push(accessory);
        let idx = self.items.len() - 1;
        Ok(&self.items[idx])
    }

    /// Remove the record with `id`. Unknown ids leave the list untouched.
    pub fn remove(&mut self, id: AccessoryId) -> Option<Accessory> {
        match self.position(id) {
            Some(pos) => Some(self.items.remove(pos)),
            None => {
                log::warn!("Accessory {} not found, nothing removed", id.as_string());
                None
            }
        }
    }

    pub fn position(&self, id: AccessoryId) -> Option<usize> {
        self.items.iter().position(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Accessory> {
        self.items.iter()
    }

    pub fn ids(&self) -> Vec<AccessoryId> {
        self.items.iter().map(|a| a.id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialized value for the hidden field.
    pub fn to_hidden(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_string())
    }

    /// Re-check the hidden value right before the form is posted.
    ///
    /// Anything that is not a JSON array is replaced with `[]`. A length that
    /// differs from the visible rows is only reported.
    pub fn validate_on_submit(&self, raw: &str) -> SubmitCheck {
        let visible_rows = self.items.len();
        let parsed = serde_json::from_str::<serde_json::Value>(raw);

        let (hidden, submitted_len, coerced) = match parsed {
            Ok(serde_json::Value::Array(values)) => (raw.to_string(), values.len(), false),
            Ok(_) => {
                log::warn!("Accessories data is not an array, resetting to empty array");
                ("[]".to_string(), 0, true)
            }
            Err(e) => {
                log::error!("Error validating accessories data: {}", e);
                ("[]".to_string(), 0, true)
            }
        };

        if submitted_len != visible_rows {
            log::warn!(
                "Mismatch between accessories array ({}) and table rows ({})",
                submitted_len,
                visible_rows
            );
        }

        SubmitCheck {
            hidden,
            submitted_len,
            visible_rows,
            coerced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, code: &str, price: &str) -> AccessoryDraft {
        AccessoryDraft {
            name: name.to_string(),
            code: code.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_add_normalises_price() {
        let mut list = AccessoryList::new();
        let added = list.add(draft("  Staffa ", " ST-1 ", "12.5")).unwrap();
        assert_eq!(added.name, "Staffa");
        assert_eq!(added.code, "ST-1");
        assert_eq!(added.price, "12.50");
        assert_eq!(list.len(), 1);

        let added = list.add(draft("Vite", "V-2", "1.125")).unwrap();
        assert_eq!(added.price, "1.13");
    }

    #[test]
    fn test_add_blank_price_defaults_to_zero() {
        let mut list = AccessoryList::new();
        list.add(draft("Cavo", "", "")).unwrap();
        list.add(draft("Spina", "", "   ")).unwrap();
        assert!(list.iter().all(|a| a.price == "0.00"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_requires_name() {
        let mut list = AccessoryList::new();
        assert_eq!(
            list.add(draft("   ", "X", "3")).unwrap_err(),
            AccessoryError::NameRequired
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_rejects_non_numeric_price() {
        let mut list = AccessoryList::new();
        let err = list.add(draft("Cavo", "", "tbd")).unwrap_err();
        assert_eq!(err, AccessoryError::InvalidPrice("tbd".to_string()));
        assert!(list.is_empty());

        // a numeric prefix is accepted
        assert_eq!(list.add(draft("Cavo", "", "7€")).unwrap().price, "7.00");
    }

    #[test]
    fn test_hidden_value_uses_wire_shape() {
        let mut list = AccessoryList::new();
        list.add(draft("Staffa", "ST-1", "12")).unwrap();
        assert_eq!(
            list.to_hidden(),
            r#"[{"name":"Staffa","code":"ST-1","price":"12.00"}]"#
        );
        assert_eq!(AccessoryList::new().to_hidden(), "[]");
    }

    #[test]
    fn test_load_builds_rows() {
        let mut list = AccessoryList::new();
        let raw = r#"[{"name":"A","code":"1","price":"1.00"},{"name":"B","code":"2","price":2.5}]"#;
        assert_eq!(list.load(raw), LoadOutcome::Loaded(2));
        let prices: Vec<_> = list.iter().map(|a| a.price.as_str()).collect();
        assert_eq!(prices, vec!["1.00", "2.50"]);
    }

    #[test]
    fn test_load_twice_is_noop() {
        let mut list = AccessoryList::new();
        let raw = r#"[{"name":"A","code":"","price":"1.00"}]"#;
        assert_eq!(list.load(raw), LoadOutcome::Loaded(1));
        assert_eq!(list.load(raw), LoadOutcome::AlreadyLoaded);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_load_resets_on_garbage() {
        let mut list = AccessoryList::new();
        assert_eq!(list.load("{not json"), LoadOutcome::Reset);
        assert_eq!(list.to_hidden(), "[]");

        let mut list = AccessoryList::new();
        assert_eq!(list.load(r#"{"name":"A"}"#), LoadOutcome::Reset);
        assert!(list.is_empty());
    }

    #[test]
    fn test_loaded_records_get_distinct_ids() {
        let mut list = AccessoryList::new();
        list.load(r#"[{"name":"A"},{"name":"A"}]"#);
        let ids = list.ids();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_remove_by_position_matches_row() {
        let mut list = AccessoryList::new();
        for name in ["A", "B", "C"] {
            list.add(draft(name, "", "1")).unwrap();
        }
        let row_1 = list.ids()[1];
        let removed = list.remove(row_1).unwrap();
        assert_eq!(removed.name, "B");
        let names: Vec<_> = list.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_all_leaves_empty_array() {
        let mut list = AccessoryList::new();
        list.add(draft("A", "", "1")).unwrap();
        list.add(draft("B", "", "2")).unwrap();
        for id in list.ids() {
            list.remove(id);
        }
        assert!(list.is_empty());
        assert_eq!(list.to_hidden(), "[]");
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = AccessoryList::new();
        list.add(draft("A", "", "1")).unwrap();
        assert!(list.remove(AccessoryId::new()).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_submit_check_consistent() {
        let mut list = AccessoryList::new();
        list.add(draft("A", "", "1")).unwrap();
        let check = list.validate_on_submit(&list.to_hidden());
        assert!(check.is_consistent());
        assert!(!check.coerced);
        assert_eq!(check.hidden, list.to_hidden());
    }

    #[test]
    fn test_submit_check_coerces_non_array() {
        let list = AccessoryList::new();
        let check = list.validate_on_submit(r#"{"a":1}"#);
        assert!(check.coerced);
        assert_eq!(check.hidden, "[]");

        let check = list.validate_on_submit("garbage");
        assert!(check.coerced);
        assert_eq!(check.hidden, "[]");
    }

    #[test]
    fn test_submit_check_reports_mismatch() {
        let mut list = AccessoryList::new();
        list.add(draft("A", "", "1")).unwrap();
        let check = list.validate_on_submit("[]");
        assert!(!check.is_consistent());
        assert!(!check.coerced);
        assert_eq!(check.hidden, "[]");
        assert_eq!(check.visible_rows, 1);
    }
}
