pub mod a001_offer;
pub mod a002_accessory;
pub mod a003_discount;
pub mod a004_totals;
