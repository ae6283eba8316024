//! Customer and offer header fields

use super::super::view_model::OfferFormVm;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{Checkbox, Input, Textarea};
use contracts::domain::a001_offer::{field_names, HeaderField};
use contracts::shared::auto_expand::ExpandStyle;
use leptos::prelude::*;

const OFFER_DESCRIPTION_MAX_LEN: usize = 500;

#[component]
pub fn HeaderSection(vm: OfferFormVm) -> impl IntoView {
    let field = move |field: HeaderField, label: &'static str, input_type: &'static str, required: bool| {
        view! {
            <Input
                id=field.id()
                name=field.id()
                label=label
                input_type=input_type
                required=required
                value=vm.header_value(field)
                invalid=vm.is_invalid(field.id())
                on_input=Callback::new(move |v| vm.set_header(field, v))
            />
        }
    };

    view! {
        <CardAnimated title="Dati offerta" class="offer-header">
            <div class="row">
                <div class="col-md-4">
                    {field(HeaderField::OfferNumber, "Numero offerta", "text", true)}
                    <Checkbox
                        id=field_names::UPDATE_COUNTER
                        label="Aggiorna contatore offerte"
                        checked=vm.update_counter()
                        on_change=Callback::new(move |checked| vm.set_update_counter(checked))
                    />
                </div>
                <div class="col-md-4">
                    {field(HeaderField::Date, "Data", "date", true)}
                </div>
                <div class="col-md-4">
                    {field(HeaderField::Customer, "Cliente", "text", true)}
                </div>
            </div>
            <div class="row">
                <div class="col-md-6">
                    {field(HeaderField::CustomerEmail, "Email cliente", "email", false)}
                </div>
                <div class="col-md-6">
                    {field(HeaderField::Address, "Indirizzo", "text", false)}
                </div>
            </div>
            <Textarea
                id=HeaderField::OfferDescription.id()
                label="Descrizione offerta"
                value=vm.header_value(HeaderField::OfferDescription)
                on_input=Callback::new(move |v| vm.set_header(HeaderField::OfferDescription, v))
                maxlength=OFFER_DESCRIPTION_MAX_LEN
                expand=ExpandStyle::FreeForm
            />
        </CardAnimated>
    }
}
