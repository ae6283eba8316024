//! Discounted price of a single-product line.

use crate::shared::price_format::{format_euro, parse_number_or};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountInput {
    pub price: f64,
    pub quantity: f64,
    pub discount_percent: f64,
    pub enabled: bool,
}

impl DiscountInput {
    /// Build from raw field text. Unreadable or zero values fall back to
    /// price 0, quantity 1 and discount 0.
    pub fn from_raw(price: &str, quantity: &str, discount: &str, enabled: bool) -> Self {
        Self {
            price: parse_number_or(price, 0.0),
            quantity: parse_number_or(quantity, 1.0),
            discount_percent: parse_number_or(discount, 0.0),
            enabled,
        }
    }

    /// Price times quantity, before any discount.
    pub fn gross(&self) -> f64 {
        self.price * self.quantity
    }

    /// `None` while the discount toggle is off.
    pub fn discounted_price(&self) -> Option<f64> {
        if !self.enabled {
            return None;
        }
        let gross = self.gross();
        Some(gross - gross * (self.discount_percent / 100.0))
    }

    /// What the line contributes to the offer total.
    pub fn line_price(&self) -> f64 {
        self.discounted_price().unwrap_or_else(|| self.gross())
    }
}

/// Text shown under the discount field.
pub fn discount_label(amount: f64) -> String {
    format!("Prezzo scontato: {}", format_euro(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_enabled() {
        let input = DiscountInput::from_raw("100", "2", "10", true);
        let value = input.discounted_price().unwrap();
        assert!((value - 180.0).abs() < 1e-9);
        assert_eq!(discount_label(value), "Prezzo scontato: 180,00 €");
    }

    #[test]
    fn test_discount_disabled_hides_amount() {
        let input = DiscountInput::from_raw("100", "2", "10", false);
        assert_eq!(input.discounted_price(), None);
        assert_eq!(input.line_price(), 200.0);
    }

    #[test]
    fn test_defaults_for_unreadable_fields() {
        let input = DiscountInput::from_raw("abc", "", "x", true);
        assert_eq!(input.price, 0.0);
        assert_eq!(input.quantity, 1.0);
        assert_eq!(input.discount_percent, 0.0);
        assert_eq!(input.discounted_price(), Some(0.0));
    }

    #[test]
    fn test_zero_quantity_counts_as_one() {
        let input = DiscountInput::from_raw("50", "0", "0", true);
        assert_eq!(input.discounted_price(), Some(50.0));
    }
}
