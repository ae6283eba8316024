use super::super::auto_expand::use_auto_expand;
use super::super::char_counter::CharCounter;
use contracts::shared::auto_expand::ExpandStyle;
use contracts::shared::char_counter::counter_limit;
use leptos::html;
use leptos::prelude::*;

/// Textarea component with label support, optional auto-expand and a
/// character counter whenever `maxlength` or `counter_max` is set.
#[component]
pub fn Textarea(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Textarea value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    #[prop(optional)]
    maxlength: Option<usize>,
    /// Counter maximum without a `maxlength` attribute
    #[prop(optional)]
    counter_max: Option<usize>,
    /// Grow with the content
    #[prop(optional)]
    expand: Option<ExpandStyle>,
    /// Used as both `id` and form `name`
    #[prop(into)]
    id: String,
    /// Marks the control with `is-invalid`
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    /// Omit the label wrapper, for table cells
    #[prop(optional)]
    bare: bool,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Textarea>::new();
    let resize = expand.map(|style| use_auto_expand(node_ref, style));

    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(if bare { 1 } else { 3 });
    let expand_class = expand.map(ExpandStyle::css_class).unwrap_or_default();
    let invalid_class = move || if invalid.get().unwrap_or(false) { "is-invalid" } else { "" };

    let counter = counter_limit(maxlength, counter_max)
        .map(|max| view! { <CharCounter field_id=id.clone() text=value max_length=max /> });

    let label_for = id.clone();
    let name = id.clone();

    view! {
        <div class=if bare { "" } else { "mb-3 form__group" }>
            {move || label.get().filter(|_| !bare).map(|l| view! {
                <label class="form-label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <textarea
                node_ref=node_ref
                id=id
                name=name
                class=move || format!("form-control {} {}", expand_class, invalid_class())
                placeholder=textarea_placeholder
                required=required
                rows=textarea_rows
                maxlength=maxlength.map(|m| m.to_string())
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                    if let Some(resize) = resize {
                        resize();
                    }
                }
            ></textarea>
            {counter}
        </div>
    }
}
