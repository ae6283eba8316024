//! Initial page data embedded by the server.
//!
//! The server renders the offer as JSON into
//! `<script id="offer-bootstrap" type="application/json">`. The shape follows
//! the stored offer document, which was produced from form posts, so most
//! values are strings and some may be `null` or numbers.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid offer bootstrap data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Any scalar as text; `null` becomes empty, arrays and objects keep their
/// JSON text.
fn text_of(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?))
}

/// Checkbox values arrive as booleans or as the form value `"on"`.
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => matches!(s.as_str(), "on" | "true" | "1"),
        Value::Number(n) => n.as_i64().unwrap_or(0) != 0,
        _ => false,
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferBootstrap {
    #[serde(default, deserialize_with = "lenient_text")]
    pub offer_number: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub customer: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub customer_email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub offer_description: String,
    #[serde(default)]
    pub is_edit: bool,
    #[serde(default)]
    pub tabs: Vec<TabData>,
    #[serde(default)]
    pub alerts: Vec<FlashAlert>,
}

impl OfferBootstrap {
    pub fn from_json(raw: &str) -> Result<Self, BootstrapError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TabData {
    SingleProduct(SingleProductData),
    MultiProduct(MultiProductData),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SingleProductData {
    #[serde(default, deserialize_with = "lenient_text")]
    pub product_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub product_code: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub unit_price: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub quantity: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub discount: String,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub discount_flag: bool,
    #[serde(default, deserialize_with = "lenient_text")]
    pub power_w: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub volts: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub size: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub posizione: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub product_image_path: String,
    /// Raw value for the hidden accessories field; an inline array is kept as
    /// its JSON text.
    #[serde(default, alias = "accessories", deserialize_with = "lenient_text")]
    pub accessories_data: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MultiProductData {
    #[serde(default)]
    pub products: Vec<Vec<Value>>,
}

/// Flash message rendered above the form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlashAlert {
    #[serde(default)]
    pub category: String,
    pub message: String,
}

impl FlashAlert {
    /// Alerts whose category carries `alert-permanent` are never dismissed.
    pub fn is_permanent(&self) -> bool {
        self.category.split_whitespace().any(|c| c == "alert-permanent")
    }

    /// Bootstrap contextual class, e.g. `success` -> `alert-success`.
    pub fn level_class(&self) -> String {
        let level = self
            .category
            .split_whitespace()
            .find(|c| !c.starts_with("alert-"))
            .unwrap_or("info");
        format!("alert-{}", level)
    }
}

/// Positional row `[name, model, price, quantity, description]` as text.
pub(crate) fn row_columns(values: Vec<Value>) -> [String; 5] {
    let mut columns: [String; 5] = Default::default();
    for (slot, value) in columns.iter_mut().zip(values) {
        *slot = text_of(value);
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_stored_offer() {
        let raw = r#"{
            "offer_number": "2024-015",
            "date": null,
            "customer": "ACME",
            "tabs": [
                {"type": "single_product", "product_name": "Forno", "unit_price": "1200",
                 "quantity": 2, "discount": "5", "discount_flag": "on",
                 "accessories_data": [{"name": "Staffa", "code": "S1", "price": "10.00"}]},
                {"type": "multi_product", "products": [["Lampada", "L1", "20", "3", ""]]}
            ],
            "alerts": [{"category": "success alert-permanent", "message": "Salvata"}]
        }"#;
        let data = OfferBootstrap::from_json(raw).unwrap();
        assert_eq!(data.offer_number, "2024-015");
        assert_eq!(data.date, "");
        assert_eq!(data.tabs.len(), 2);

        match &data.tabs[0] {
            TabData::SingleProduct(tab) => {
                assert_eq!(tab.quantity, "2");
                assert!(tab.discount_flag);
                assert!(tab.accessories_data.starts_with('['));
            }
            other => panic!("unexpected tab {:?}", other),
        }
        match &data.tabs[1] {
            TabData::MultiProduct(tab) => assert_eq!(tab.products.len(), 1),
            other => panic!("unexpected tab {:?}", other),
        }
        assert!(data.alerts[0].is_permanent());
    }

    #[test]
    fn test_empty_object_is_new_offer() {
        let data = OfferBootstrap::from_json("{}").unwrap();
        assert!(data.tabs.is_empty());
        assert!(!data.is_edit);
    }

    #[test]
    fn test_garbage_is_error() {
        assert!(OfferBootstrap::from_json("<html>").is_err());
    }

    #[test]
    fn test_alert_classes() {
        let alert = FlashAlert {
            category: "danger".to_string(),
            message: "Errore".to_string(),
        };
        assert!(!alert.is_permanent());
        assert_eq!(alert.level_class(), "alert-danger");

        let alert = FlashAlert {
            category: String::new(),
            message: "x".to_string(),
        };
        assert_eq!(alert.level_class(), "alert-info");
    }

    #[test]
    fn test_row_columns_pads_and_stringifies() {
        let row = row_columns(vec![Value::from("A"), Value::from(12.5)]);
        assert_eq!(row[0], "A");
        assert_eq!(row[1], "12.5");
        assert_eq!(row[4], "");
    }
}
