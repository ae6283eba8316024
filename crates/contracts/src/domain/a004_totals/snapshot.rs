//! Grand total of an offer.
//!
//! The total is captured once when the page loads and is not recomputed when
//! fields change afterwards.

use crate::shared::price_format::{format_price, parse_number, round_half_up};

/// A priced line item as rendered on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricedItem {
    /// `data-price` of a single-product tab
    SingleProduct { price: f64 },
    /// `data-total` of a multi-product tab
    MultiProductSubtotal { total: f64 },
}

impl PricedItem {
    /// Read a `data-price` attribute; unreadable values count as 0.
    pub fn single_from_attr(raw: &str) -> Self {
        PricedItem::SingleProduct {
            price: parse_number(raw).unwrap_or(0.0),
        }
    }

    /// Read a `data-total` attribute; unreadable values count as 0.
    pub fn multi_from_attr(raw: &str) -> Self {
        PricedItem::MultiProductSubtotal {
            total: parse_number(raw).unwrap_or(0.0),
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            PricedItem::SingleProduct { price } => *price,
            PricedItem::MultiProductSubtotal { total } => *total,
        }
    }
}

/// Round to the nearest multiple of `step`, halves going up.
pub fn round_to_step(value: f64, step: f64) -> f64 {
    if step <= 0.0 || !step.is_finite() {
        return value;
    }
    round_half_up(value / step) * step
}

#[derive(Debug, Clone, PartialEq)]
pub struct TotalsSnapshot {
    pub items: Vec<PricedItem>,
    pub grand_total: f64,
    pub rounded_total: f64,
}

impl TotalsSnapshot {
    /// `None` when the page has no priced line items.
    pub fn capture(items: Vec<PricedItem>, rounding_step: f64) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let grand_total: f64 = items.iter().map(PricedItem::amount).sum();
        Some(Self {
            rounded_total: round_to_step(grand_total, rounding_step),
            grand_total,
            items,
        })
    }

    /// Text of the `totalPrice` element.
    pub fn display_total(&self) -> String {
        format!("€ {}", format_price(self.rounded_total))
    }
}
