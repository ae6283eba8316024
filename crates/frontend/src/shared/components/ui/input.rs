use contracts::shared::numeric_field::{normalize_number_input, NumberStep};
use leptos::prelude::*;

/// Input component with label support.
///
/// With `step` set the control becomes a number field whose value is
/// normalized (`12.5` -> `12.50`) when it loses focus.
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, also receives the normalized number on change
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "date", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Makes this a number field
    #[prop(optional)]
    step: Option<NumberStep>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(into)]
    id: String,
    /// Form field name; controls without one are not submitted
    #[prop(optional, into)]
    name: Option<String>,
    /// Marks the control with `is-invalid`
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || match step {
        Some(_) => "number".to_string(),
        None => input_type.get().unwrap_or_else(|| "text".to_string()),
    };
    let additional_class = move || class.get().unwrap_or_default();
    let invalid_class = move || if invalid.get().unwrap_or(false) { "is-invalid" } else { "" };

    let label_for = id.clone();

    view! {
        <div class="mb-3 form__group">
            {move || label.get().map(|l| view! {
                <label class="form-label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <input
                id=id
                name=name
                class=move || format!("form-control {} {}", invalid_class(), additional_class())
                type=input_t
                step=step.map(NumberStep::as_attr)
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=move || disabled.get().unwrap_or(false)
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:change=move |ev| {
                    let (Some(step), Some(handler)) = (step, on_input) else {
                        return;
                    };
                    if let Some(normalized) = normalize_number_input(&event_target_value(&ev), step) {
                        handler.run(normalized);
                    }
                }
            />
        </div>
    }
}
