use super::model::load_bootstrap;
use super::tabs::{HeaderSection, MultiProductTab, SingleProductTab};
use super::view_model::OfferFormVm;
use crate::domain::a004_totals::ui::GrandTotal;
use crate::shared::components::flash_alerts::FlashAlerts;
use crate::shared::components::ui::Button;
use crate::shared::config::use_ui_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_offer::{field_names, TabKind};
use contracts::shared::date::format_display_date;
use leptos::prelude::*;

#[component]
pub fn OfferFormPage() -> impl IntoView {
    let mut bootstrap = load_bootstrap();
    let alerts = std::mem::take(&mut bootstrap.alerts);
    let vm = OfferFormVm::new(bootstrap, use_ui_config());
    vm.apply_default_date();

    let is_edit = vm.page.with_untracked(|p| p.is_edit);
    let subtitle = vm.page.with_untracked(|p| {
        is_edit.then(|| {
            format!(
                "N. {} del {}",
                p.header.offer_number,
                format_display_date(&p.header.date)
            )
        })
    });
    // Taken once at load; edits made on this page do not change it.
    let totals = vm.page.with_untracked(|p| p.totals().cloned());
    let tab_indices = vm.tab_indices();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        vm.check_accessories();
        if vm.validate_for_submit().is_err() {
            ev.prevent_default();
            return;
        }
        log::info!("Submitting offer");
    };

    view! {
        <PageFrame page_id="a001_offer--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h2>{if is_edit { "Modifica offerta" } else { "Nuova offerta" }}</h2>
                {subtitle.map(|s| view! { <p class="text-muted mb-0">{s}</p> })}
            </div>

            <div class="page__content">
                <FlashAlerts alerts=alerts />

                <form
                    id=field_names::OFFER_FORM
                    method="post"
                    enctype="multipart/form-data"
                    novalidate=true
                    on:submit=handle_submit
                >
                    {move || vm.error.get().map(|e| view! {
                        <div class="alert alert-danger" role="alert">{e}</div>
                    })}

                    <HeaderSection vm=vm />

                    <For
                        each=move || tab_indices.get()
                        key=|i| *i
                        children=move |i| match vm.tab_kind(i) {
                            Some(TabKind::SingleProduct) => view! { <SingleProductTab vm=vm index=i /> }.into_any(),
                            Some(TabKind::MultiProduct) => view! { <MultiProductTab vm=vm index=i /> }.into_any(),
                            None => ().into_any(),
                        }
                    />

                    <div class="d-flex gap-2 mb-4">
                        <Button
                            id=field_names::ADD_SINGLE_PRODUCT_BTN
                            variant="secondary"
                            title="Aggiungi un prodotto con prezzo, sconto e accessori"
                            on_click=Callback::new(move |_| vm.add_single_tab())
                        >
                            {icon("plus")}
                            " "{TabKind::SingleProduct.label()}
                        </Button>
                        <Button
                            id=field_names::ADD_MULTI_PRODUCT_BTN
                            variant="secondary"
                            title="Aggiungi una tabella di prodotti"
                            on_click=Callback::new(move |_| vm.add_multi_tab())
                        >
                            {icon("plus")}
                            " "{TabKind::MultiProduct.label()}
                        </Button>
                    </div>

                    <GrandTotal snapshot=totals />

                    <div class="d-flex justify-content-end mt-3">
                        <Button button_type="submit" variant="success">
                            {icon("save")}
                            {if is_edit { " Salva modifiche" } else { " Crea offerta" }}
                        </Button>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
