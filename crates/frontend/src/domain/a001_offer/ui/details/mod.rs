//! Offer form UI Module
//!
//! MVVM layout:
//! - model.rs: page data embedded by the server
//! - view_model.rs: page state with commands
//! - view.rs: Leptos component (pure UI)
//! - tabs/: header section and the two product tab kinds

mod model;
mod tabs;
mod view;
mod view_model;

pub use view::OfferFormPage;
pub use view_model::OfferFormVm;
