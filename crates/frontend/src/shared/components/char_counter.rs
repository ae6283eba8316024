//! Live "n/max caratteri" counter shown under bounded text fields.

use crate::shared::config::use_ui_config;
use contracts::shared::char_counter::{counter_id, CounterState};
use leptos::prelude::*;

#[component]
pub fn CharCounter(
    /// Id of the field being counted.
    field_id: String,
    #[prop(into)] text: Signal<String>,
    max_length: usize,
) -> impl IntoView {
    let ratio = use_ui_config().counter.warning_ratio;
    let state = Memo::new(move |_| CounterState::measure(&text.get(), max_length, ratio));

    view! {
        <small
            id=counter_id(&field_id)
            class=move || format!("form-text char-counter {}", state.get().css_class())
        >
            {move || state.get().label()}
        </small>
    }
}
