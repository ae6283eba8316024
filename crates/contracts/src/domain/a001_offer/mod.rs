pub mod aggregate;
pub mod bootstrap;
pub mod field_names;
pub mod validation;

pub use aggregate::{
    HeaderField, MultiProductRow, MultiProductState, OfferHeader, OfferPageState, RowColumn,
    SingleField, SingleProductState, TabKind, TabState,
};
pub use bootstrap::{BootstrapError, FlashAlert, OfferBootstrap, TabData};
pub use validation::{RequiredField, RequiredFieldsError};
