//! Offer total, as captured when the page was loaded.

use crate::shared::components::card_animated::CardAnimated;
use contracts::domain::a001_offer::field_names;
use contracts::domain::a004_totals::{PricedItem, TotalsSnapshot};
use contracts::shared::price_format::{format_euro, to_fixed_2};
use leptos::prelude::*;

#[component]
pub fn GrandTotal(snapshot: Option<TotalsSnapshot>) -> impl IntoView {
    let Some(snapshot) = snapshot else {
        return ().into_any();
    };

    let lines = snapshot
        .items
        .iter()
        .enumerate()
        .map(|(n, item)| match *item {
            PricedItem::SingleProduct { price } => view! {
                <li class="product-price" data-price=to_fixed_2(price)>
                    {format!("Prodotto {}: {}", n + 1, format_euro(price))}
                </li>
            }
            .into_any(),
            PricedItem::MultiProductSubtotal { total } => view! {
                <li class="multi-product-total" data-total=to_fixed_2(total)>
                    {format!("Tabella {}: {}", n + 1, format_euro(total))}
                </li>
            }
            .into_any(),
        })
        .collect_view();

    let exact = (snapshot.rounded_total != snapshot.grand_total).then(|| {
        view! {
            <small class="text-muted">
                {format!("Importo esatto: {}", format_euro(snapshot.grand_total))}
            </small>
        }
    });

    view! {
        <CardAnimated title="Riepilogo" class="offer-totals">
            <ul class="list-unstyled mb-2">{lines}</ul>
            <h3 class="mb-0">
                "Totale: "
                <span id=field_names::TOTAL_PRICE>{snapshot.display_total()}</span>
            </h3>
            {exact}
        </CardAnimated>
    }
    .into_any()
}
