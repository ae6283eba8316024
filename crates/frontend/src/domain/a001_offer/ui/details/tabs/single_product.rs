//! Single-product tab: one product with price, discount, photo and accessories

use super::super::view_model::OfferFormVm;
use crate::domain::a002_accessory::ui::AccessoryManager;
use crate::domain::a003_discount::ui::DiscountedPrice;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{Button, Checkbox, Input, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a001_offer::{field_names, SingleField, TabKind};
use contracts::shared::auto_expand::ExpandStyle;
use contracts::shared::numeric_field::NumberStep;
use leptos::prelude::*;

const DESCRIPTION_MAX_LEN: usize = 1000;

#[component]
pub fn SingleProductTab(vm: OfferFormVm, index: u32) -> impl IntoView {
    let i = index;
    let kind = TabKind::SingleProduct;
    let discount_enabled = vm.discount_enabled(i);
    let image_path = vm.image_path(i);

    let text = move |field: SingleField, label: &'static str| {
        view! {
            <Input
                id=field.id(i)
                name=field.id(i)
                label=label
                value=vm.single_value(i, field)
                on_input=Callback::new(move |v| vm.set_single(i, field, v))
            />
        }
    };

    let number = move |field: SingleField, label: &'static str, step: NumberStep| {
        view! {
            <Input
                id=field.id(i)
                name=field.id(i)
                label=label
                step=step
                value=vm.single_value(i, field)
                on_input=Callback::new(move |v| vm.set_single(i, field, v))
            />
        }
    };

    view! {
        <CardAnimated class="product-tab" title=format!("{} #{}", kind.label(), i + 1)>
            <div data-tab-index=i.to_string() data-tab-type=kind.as_str()>
                <input
                    type="hidden"
                    id=field_names::tab_type(i)
                    name=field_names::tab_type(i)
                    value=kind.as_str()
                />

                <div class="row">
                    <div class="col-md-6">
                        <Input
                            id=SingleField::ProductName.id(i)
                            name=SingleField::ProductName.id(i)
                            label="Nome prodotto"
                            required=true
                            value=vm.single_value(i, SingleField::ProductName)
                            invalid=vm.is_invalid(SingleField::ProductName.id(i))
                            on_input=Callback::new(move |v| vm.set_single(i, SingleField::ProductName, v))
                        />
                    </div>
                    <div class="col-md-6">
                        {text(SingleField::ProductCode, "Codice prodotto")}
                    </div>
                </div>

                <div class="row">
                    <div class="col-md-4">
                        {number(SingleField::UnitPrice, "Prezzo unitario (€)", NumberStep::Money)}
                    </div>
                    <div class="col-md-4">
                        {number(SingleField::Quantity, "Quantità", NumberStep::Integer)}
                    </div>
                    <div class="col-md-4">
                        <Checkbox
                            id=field_names::discount_flag(i)
                            label="Applica sconto"
                            class="discount-checkbox"
                            checked=discount_enabled
                            on_change=Callback::new(move |checked| vm.set_discount_flag(i, checked))
                        />
                        <Input
                            id=SingleField::Discount.id(i)
                            name=SingleField::Discount.id(i)
                            label="Sconto (%)"
                            step=NumberStep::Money
                            disabled=Signal::derive(move || !discount_enabled.get())
                            value=vm.single_value(i, SingleField::Discount)
                            on_input=Callback::new(move |v| vm.set_single(i, SingleField::Discount, v))
                        />
                        <DiscountedPrice page=vm.page tab_index=i />
                    </div>
                </div>

                <Textarea
                    id=SingleField::Description.id(i)
                    label="Descrizione"
                    value=vm.single_value(i, SingleField::Description)
                    on_input=Callback::new(move |v| vm.set_single(i, SingleField::Description, v))
                    maxlength=DESCRIPTION_MAX_LEN
                    expand=ExpandStyle::FreeForm
                />

                <div class="row">
                    <div class="col-md-3">{text(SingleField::PowerW, "Potenza (W)")}</div>
                    <div class="col-md-3">{text(SingleField::Volts, "Volt")}</div>
                    <div class="col-md-3">{text(SingleField::Size, "Dimensioni")}</div>
                    <div class="col-md-3">{text(SingleField::Posizione, "Posizione")}</div>
                </div>

                <div class="mb-3">
                    <label class="form-label" for=field_names::product_image(i)>"Immagine prodotto"</label>
                    <input
                        type="file"
                        class="form-control"
                        accept="image/*"
                        id=field_names::product_image(i)
                        name=field_names::product_image(i)
                    />
                    {move || {
                        let path = image_path.get();
                        (!path.is_empty()).then(|| view! {
                            <input
                                type="hidden"
                                id=field_names::existing_image(i)
                                name=field_names::existing_image(i)
                                value=path.clone()
                            />
                            <img class="img-thumbnail mt-2 product-image-preview" src=path alt="Immagine attuale" />
                        })
                    }}
                </div>

                <AccessoryManager page=vm.page tab_index=i />

                <div class="d-flex justify-content-end">
                    <Button
                        variant="danger"
                        size="sm"
                        class="remove-tab-btn"
                        title="Rimuovi questo prodotto dall'offerta"
                        on_click=Callback::new(move |_| vm.remove_tab(i))
                    >
                        {icon("trash")}
                        " Rimuovi"
                    </Button>
                </div>
            </div>
        </CardAnimated>
    }
}
