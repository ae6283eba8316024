//! CardAnimated: Thaw Card with an appear animation.
//!
//! The `card-appear` keyframes come from the page stylesheet.
//!
//! ```ignore
//! <CardAnimated title="Cliente">
//!     <p>"..."</p>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] with the `card-appear` animation and an optional heading.
#[component]
pub fn CardAnimated(
    /// Section heading.
    #[prop(optional, into)]
    title: Option<String>,
    /// Extra classes on the card root.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class=format!("offer-card {}", class) attr:style="animation: card-appear 0.28s ease-out both;">
            {title.map(|t| view! { <h4 class="details-section__title">{t}</h4> })}
            {children()}
        </Card>
    }
}
