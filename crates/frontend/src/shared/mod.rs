pub mod components;
pub mod config;
pub mod date_utils;
pub mod dom;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
pub mod theme;
