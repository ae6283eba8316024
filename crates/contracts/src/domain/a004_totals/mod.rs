pub mod snapshot;

pub use snapshot::{round_to_step, PricedItem, TotalsSnapshot};
