//! Multi-product tab: a table of product rows

use super::super::view_model::OfferFormVm;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use contracts::domain::a001_offer::{field_names, RowColumn, TabKind};
use contracts::shared::auto_expand::ExpandStyle;
use contracts::shared::numeric_field::NumberStep;
use leptos::prelude::*;

#[component]
pub fn MultiProductTab(vm: OfferFormVm, index: u32) -> impl IntoView {
    let i = index;
    let kind = TabKind::MultiProduct;
    let row_count = vm.row_count(i);
    // No hard limit on table descriptions, the counter shows the default.
    let description_max_len = vm.config().counter.default_max_len;

    let cell = move |column: RowColumn, row: usize| {
        let id = column.id(i, row);
        let value = vm.row_value(i, row, column);
        let on_input = Callback::new(move |v| vm.set_row(i, row, column, v));

        match column {
            RowColumn::Description => view! {
                <td>
                    <Textarea
                        id=id
                        value=value
                        on_input=on_input
                        counter_max=description_max_len
                        expand=ExpandStyle::Table
                        bare=true
                    />
                </td>
            }
            .into_any(),
            RowColumn::Price | RowColumn::Quantity => {
                let step = if column == RowColumn::Price {
                    NumberStep::Money
                } else {
                    NumberStep::Integer
                };
                view! {
                    <td>
                        <Input id=id.clone() name=id value=value on_input=on_input step=step class="form-control-sm" />
                    </td>
                }
                .into_any()
            }
            RowColumn::Name | RowColumn::Model => view! {
                <td>
                    <Input id=id.clone() name=id value=value on_input=on_input class="form-control-sm" />
                </td>
            }
            .into_any(),
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

                <table class="table table-sm multi-product-table">
                    <thead>
                        <tr>
                            {RowColumn::ALL.iter().map(|c| view! { <th>{c.label()}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || 0..row_count.get()
                            key=|row| *row
                            children=move |row| view! {
                                <tr>
                                    {RowColumn::ALL.into_iter().map(|column| cell(column, row)).collect_view()}
                                </tr>
                            }
                        />
                    </tbody>
                </table>

                <div class="d-flex justify-content-between">
                    <Button
                        variant="secondary"
                        size="sm"
                        class="add-row-btn"
                        on_click=Callback::new(move |_| vm.add_row(i))
                    >
                        {icon("plus")}
                        " Aggiungi riga"
                    </Button>
                    <Button
                        variant="danger"
                        size="sm"
                        class="remove-tab-btn"
                        title="Rimuovi questa tabella dall'offerta"
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
