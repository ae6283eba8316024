pub mod auto_expand;
pub mod card_animated;
pub mod char_counter;
pub mod flash_alerts;
pub mod ui;
