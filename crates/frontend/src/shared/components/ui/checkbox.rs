use leptos::prelude::*;

/// Checkbox component
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Used as both `id` and form `name`
    #[prop(into)]
    id: String,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let label_for = id.clone();
    let name = id.clone();

    view! {
        <div class=move || format!("form-check {}", additional_class())>
            <input
                id=id
                name=name
                type="checkbox"
                value="on"
                class="form-check-input"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form-check-label" for=label_for>
                {label}
            </label>
        </div>
    }
}
