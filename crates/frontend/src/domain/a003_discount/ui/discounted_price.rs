use contracts::domain::a001_offer::{field_names, OfferPageState};
use contracts::domain::a003_discount::discount_label;
use leptos::prelude::*;

/// Live discounted line price of a single-product tab. Rendered only while
/// the discount is enabled.
#[component]
pub fn DiscountedPrice(page: RwSignal<OfferPageState>, tab_index: u32) -> impl IntoView {
    let amount = Memo::new(move |_| {
        page.with(|p| {
            p.discount_input(tab_index)
                .and_then(|input| input.discounted_price())
        })
    });

    view! {
        {move || amount.get().map(|value| view! {
            <div id=field_names::discounted_price(tab_index) class="discounted-price text-success fw-bold mb-3">
                {discount_label(value)}
            </div>
        })}
    }
}
