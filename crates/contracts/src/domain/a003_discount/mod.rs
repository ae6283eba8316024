pub mod calculator;

pub use calculator::{discount_label, DiscountInput};
