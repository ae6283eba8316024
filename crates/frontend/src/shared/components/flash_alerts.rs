//! Server flash messages shown above the form.

use crate::shared::config::use_ui_config;
use crate::shared::icons::icon;
use contracts::domain::a001_offer::FlashAlert;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Renders the alerts and dismisses the non-permanent ones after the
/// configured delay.
#[component]
pub fn FlashAlerts(alerts: Vec<FlashAlert>) -> impl IntoView {
    let dismiss_after_ms = use_ui_config().alerts.dismiss_after_ms;
    let has_transient = alerts.iter().any(|a| !a.is_permanent());
    let visible = RwSignal::new(alerts.into_iter().enumerate().collect::<Vec<_>>());

    if has_transient {
        Timeout::new(dismiss_after_ms, move || {
            visible.try_update(|list| list.retain(|(_, alert)| alert.is_permanent()));
        })
        .forget();
    }

    let dismiss = move |key: usize| visible.update(|list| list.retain(|(k, _)| *k != key));

    view! {
        <div class="flash-alerts">
            <For
                each=move || visible.get()
                key=|(key, _)| *key
                children=move |(key, alert)| {
                    let class = format!("alert {} alert-dismissible fade show", alert.level_class());
                    view! {
                        <div class=class role="alert">
                            {alert.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Chiudi"
                                on:click=move |_| dismiss(key)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
