pub mod auto_expand;
pub mod char_counter;
pub mod config;
pub mod date;
pub mod numeric_field;
pub mod price_format;
pub mod theme;
