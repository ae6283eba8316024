//! Sections of the offer form

mod header;
mod multi_product;
mod single_product;

pub use header::HeaderSection;
pub use multi_product::MultiProductTab;
pub use single_product::SingleProductTab;
