//! Accessory list of a single-product tab.
//!
//! The list in the page state is authoritative. The table and the hidden
//! `accessories_data_<i>` field are both rendered from it, so they cannot
//! drift apart.

use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use contracts::domain::a001_offer::{field_names, OfferPageState};
use contracts::domain::a002_accessory::{AccessoryDraft, AccessoryId};
use contracts::shared::numeric_field::NumberStep;
use contracts::shared::price_format::format_price_text;
use leptos::prelude::*;

#[component]
pub fn AccessoryManager(page: RwSignal<OfferPageState>, tab_index: u32) -> impl IntoView {
    let i = tab_index;
    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let items = Memo::new(move |_| {
        page.with(|p| {
            p.single(i)
                .map(|t| t.accessories.iter().cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });
    let hidden = Memo::new(move |_| {
        page.with(|p| {
            p.single(i)
                .map(|t| t.accessories.to_hidden())
                .unwrap_or_else(|| "[]".to_string())
        })
    });

    let handle_add = move |_: leptos::ev::MouseEvent| {
        let draft = AccessoryDraft {
            name: name.get_untracked(),
            code: code.get_untracked(),
            price: price.get_untracked(),
        };
        let mut outcome = None;
        page.update(|p| {
            outcome = p
                .accessories_mut(i)
                .map(|list| list.add(draft).map(|a| a.name.clone()));
        });

        match outcome {
            Some(Ok(added)) => {
                log::debug!("Accessory '{}' added to tab {}", added, i);
                name.set(String::new());
                code.set(String::new());
                price.set(String::new());
                error.set(None);
            }
            Some(Err(e)) => {
                log::warn!("Accessory rejected on tab {}: {}", i, e);
                error.set(Some(e.to_string()));
            }
            None => log::warn!("Tab {} has no accessory list", i),
        }
    };

    let handle_remove = move |id: AccessoryId| {
        page.update(|p| {
            if let Some(removed) = p.accessories_mut(i).and_then(|list| list.remove(id)) {
                log::debug!("Accessory '{}' removed from tab {}", removed.name, i);
            }
        });
    };

    view! {
        <div class="accessories-section mb-3">
            <h5>"Accessori"</h5>

            <div class="row g-2 align-items-end">
                <div class="col-md-4">
                    <Input
                        id=field_names::accessory_name(i)
                        label="Nome accessorio"
                        value=name
                        on_input=Callback::new(move |v| name.set(v))
                    />
                </div>
                <div class="col-md-3">
                    <Input
                        id=field_names::accessory_code(i)
                        label="Codice"
                        value=code
                        on_input=Callback::new(move |v| code.set(v))
                    />
                </div>
                <div class="col-md-3">
                    <Input
                        id=field_names::accessory_price(i)
                        label="Prezzo (€)"
                        step=NumberStep::Money
                        value=price
                        on_input=Callback::new(move |v| price.set(v))
                    />
                </div>
                <div class="col-md-2 mb-3">
                    <Button
                        variant="secondary"
                        class="add-accessory-btn w-100"
                        on_click=Callback::new(handle_add)
                    >
                        {icon("plus")}
                        " Aggiungi"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="invalid-feedback d-block">{e}</div>
            })}

            <input
                type="hidden"
                id=field_names::accessories_data(i)
                name=field_names::accessories_data(i)
                prop:value=move || hidden.get()
            />

            <table id=field_names::accessories_table(i) class="table table-sm accessories-table">
                <thead>
                    <tr>
                        <th>"Nome"</th>
                        <th>"Codice"</th>
                        <th>"Prezzo"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|accessory| accessory.id
                        children=move |accessory| {
                            let id = accessory.id;
                            view! {
                                <tr data-accessory-id=id.as_string()>
                                    <td>{accessory.name}</td>
                                    <td>{accessory.code}</td>
                                    <td>{format!("{} €", format_price_text(&accessory.price))}</td>
                                    <td class="text-end">
                                        <Button
                                            variant="danger"
                                            size="sm"
                                            class="remove-accessory-btn"
                                            title="Rimuovi accessorio"
                                            on_click=Callback::new(move |_| handle_remove(id))
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
