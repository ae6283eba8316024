//! ViewModel for the offer form
//!
//! The whole page lives in one `RwSignal<OfferPageState>`; components read
//! slices of it through derived signals and write back through the commands
//! below. UI-only state (invalid controls, error banner) sits next to it.

use crate::shared::date_utils::today_local;
use crate::shared::dom;
use contracts::domain::a001_offer::field_names;
use contracts::domain::a001_offer::{
    HeaderField, OfferBootstrap, OfferPageState, RequiredFieldsError, RowColumn, SingleField,
    TabKind,
};
use contracts::shared::config::UiConfig;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct OfferFormVm {
    pub page: RwSignal<OfferPageState>,

    // === UI State ===
    /// Ids of controls currently marked `is-invalid`
    pub invalid: RwSignal<Vec<String>>,
    pub error: RwSignal<Option<String>>,
    config: StoredValue<UiConfig>,
}

impl OfferFormVm {
    pub fn new(bootstrap: OfferBootstrap, config: UiConfig) -> Self {
        let page = OfferPageState::from_bootstrap(bootstrap, &config);
        log::info!(
            "Offer form ready: {} tab(s), edit={}",
            page.tab_indices().len(),
            page.is_edit
        );
        Self {
            page: RwSignal::new(page),
            invalid: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> UiConfig {
        self.config.get_value()
    }

    // === Derived signals ===

    pub fn tab_indices(&self) -> Signal<Vec<u32>> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.tab_indices()))
    }

    pub fn tab_kind(&self, i: u32) -> Option<TabKind> {
        self.page.with_untracked(|p| p.tab(i).map(|t| t.kind()))
    }

    pub fn is_invalid(&self, id: impl Into<String>) -> Signal<bool> {
        let invalid = self.invalid;
        let id = id.into();
        Signal::derive(move || invalid.with(|list| list.contains(&id)))
    }

    pub fn header_value(&self, field: HeaderField) -> Signal<String> {
        let page = self.page;
        Signal::derive(move || page.with(|p| field.get(&p.header).to_string()))
    }

    pub fn update_counter(&self) -> Signal<bool> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.header.update_counter))
    }

    pub fn single_value(&self, i: u32, field: SingleField) -> Signal<String> {
        let page = self.page;
        Signal::derive(move || {
            page.with(|p| p.single(i).map(|t| field.get(t).to_string()).unwrap_or_default())
        })
    }

    pub fn discount_enabled(&self, i: u32) -> Signal<bool> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.single(i).is_some_and(|t| t.discount_flag)))
    }

    pub fn image_path(&self, i: u32) -> Signal<String> {
        let page = self.page;
        Signal::derive(move || {
            page.with(|p| p.single(i).map(|t| t.image_path.clone()).unwrap_or_default())
        })
    }

    pub fn row_count(&self, i: u32) -> Signal<usize> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.multi(i).map(|t| t.rows.len()).unwrap_or(0)))
    }

    pub fn row_value(&self, i: u32, row: usize, column: RowColumn) -> Signal<String> {
        let page = self.page;
        Signal::derive(move || {
            page.with(|p| {
                p.multi(i)
                    .and_then(|t| t.rows.get(row))
                    .map(|r| column.get(r).to_string())
                    .unwrap_or_default()
            })
        })
    }

    // === Commands ===

    pub fn set_header(&self, field: HeaderField, value: String) {
        let mut flipped = false;
        self.page.update(|p| {
            if field == HeaderField::OfferNumber {
                flipped = p.header.edit_offer_number(value);
            } else {
                field.set(&mut p.header, value);
            }
        });
        if flipped {
            log::debug!("Offer number edited, counter update requested");
        }
        self.clear_invalid(field.id());
    }

    pub fn set_update_counter(&self, checked: bool) {
        self.page.update(|p| p.header.update_counter = checked);
    }

    /// Fill an empty offer date with today's date.
    pub fn apply_default_date(&self) {
        let Some(today) = today_local() else {
            log::warn!("Could not read the local date");
            return;
        };
        let mut applied = false;
        self.page.update(|p| applied = p.header.apply_default_date(today));
        if applied {
            log::debug!("Offer date defaulted to today");
        }
    }

    pub fn set_single(&self, i: u32, field: SingleField, value: String) {
        self.page.update(|p| {
            if let Some(tab) = p.single_mut(i) {
                field.set(tab, value);
            }
        });
        self.clear_invalid(&field.id(i));
    }

    pub fn set_discount_flag(&self, i: u32, enabled: bool) {
        self.page.update(|p| {
            if let Some(tab) = p.single_mut(i) {
                tab.discount_flag = enabled;
            }
        });
    }

    pub fn set_row(&self, i: u32, row: usize, column: RowColumn, value: String) {
        self.page.update(|p| {
            if let Some(r) = p.multi_mut(i).and_then(|t| t.rows.get_mut(row)) {
                column.set(r, value);
            }
        });
    }

    pub fn add_row(&self, i: u32) {
        self.page.update(|p| {
            if let Some(tab) = p.multi_mut(i) {
                tab.add_row();
            }
        });
    }

    pub fn add_single_tab(&self) {
        let mut index = 0;
        self.page.update(|p| index = p.add_single_tab());
        log::info!("Added single-product tab {}", index);
        self.focus_after_settle(field_names::product_name(index));
    }

    pub fn add_multi_tab(&self) {
        let rows = self.config.with_value(|c| c.multi_product.default_rows);
        let mut index = 0;
        self.page.update(|p| index = p.add_multi_tab(rows));
        log::info!("Added multi-product tab {} with {} rows", index, rows);
        self.focus_after_settle(RowColumn::Name.id(index, 0));
    }

    pub fn remove_tab(&self, i: u32) {
        let mut removed = false;
        self.page.update(|p| removed = p.remove_tab(i));
        if removed {
            let name_id = field_names::product_name(i);
            self.invalid.update(|list| list.retain(|id| *id != name_id));
            log::info!("Removed tab {}", i);
        } else {
            log::warn!("Tab {} not found", i);
        }
    }

    /// A freshly added tab is in the DOM only after the current render pass.
    fn focus_after_settle(&self, id: String) {
        let delay = self.config.with_value(|c| c.tabs.settle_delay_ms);
        Timeout::new(delay, move || dom::scroll_to_and_focus(&id)).forget();
    }

    pub fn clear_invalid(&self, id: &str) {
        if self.invalid.with_untracked(|list| list.iter().any(|i| i == id)) {
            self.invalid.update(|list| list.retain(|i| i != id));
        }
        if self.invalid.with_untracked(Vec::is_empty) && self.error.with_untracked(Option::is_some) {
            self.error.set(None);
        }
    }

    // === Submit ===

    /// Compare each accessory list with what its hidden field actually holds.
    /// A field that does not hold a JSON array is reset to `[]`.
    pub fn check_accessories(&self) {
        let indices = self.page.with_untracked(|p| p.tab_indices());
        for i in indices {
            let id = field_names::accessories_data(i);
            let Some(raw) = dom::input_value(&id) else {
                continue;
            };
            let Some(check) = self.page.with_untracked(|p| {
                p.single(i)
                    .map(|t| t.accessories.validate_on_submit(&raw))
            }) else {
                continue;
            };
            if check.coerced {
                dom::set_input_value(&id, &check.hidden);
            }
        }
    }

    /// Required-field check. On failure marks the controls, shows the
    /// message and moves focus to the first one.
    pub fn validate_for_submit(&self) -> Result<(), RequiredFieldsError> {
        let result = self.page.with_untracked(|p| p.validate_required());
        match &result {
            Ok(()) => {
                self.invalid.set(Vec::new());
                self.error.set(None);
            }
            Err(e) => {
                log::debug!("Submit blocked, missing: {:?}", e.invalid);
                self.invalid.set(e.invalid.clone());
                self.error.set(Some(e.to_string()));
                if let Some(first) = e.first() {
                    dom::scroll_to_and_focus(first);
                }
            }
        }
        result
    }
}
