use crate::domain::a001_offer::ui::details::OfferFormPage;
use crate::shared::config::load_ui_config;
use crate::shared::theme::{ThemeProvider, ThemeToggle};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Page-level settings, shared with every component below.
    provide_context(load_ui_config());

    view! {
        <ThemeProvider>
            <div class="offer-toolbar">
                <ThemeToggle />
            </div>
            <OfferFormPage />
        </ThemeProvider>
    }
}
