//! Page state of the offer form.
//!
//! One explicit object holds the header, every product tab keyed by its index
//! and the totals snapshot taken at load. The frontend renders from it and
//! mutates it through the methods here; nothing is recovered from element ids.

use super::bootstrap::{row_columns, OfferBootstrap, SingleProductData, TabData};
use super::field_names;
use super::validation::{self, RequiredField, RequiredFieldsError};
use crate::domain::a002_accessory::{AccessoryList, LoadOutcome};
use crate::domain::a003_discount::DiscountInput;
use crate::domain::a004_totals::{PricedItem, TotalsSnapshot};
use crate::shared::config::UiConfig;
use crate::shared::date::default_date;
use crate::shared::price_format::parse_number_or;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    SingleProduct,
    MultiProduct,
}

impl TabKind {
    /// Value of the `tab_<i>type_` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            TabKind::SingleProduct => "single_product",
            TabKind::MultiProduct => "multi_product",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabKind::SingleProduct => "Prodotto singolo",
            TabKind::MultiProduct => "Prodotti multipli",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferHeader {
    pub offer_number: String,
    /// Number proposed by the server; editing away from it asks the server to
    /// move its counter.
    pub offer_number_default: String,
    pub update_counter: bool,
    pub date: String,
    pub customer: String,
    pub customer_email: String,
    pub address: String,
    pub offer_description: String,
}

impl OfferHeader {
    /// Store a hand-edited offer number. Returns `true` when this edit turned
    /// the update-counter flag on.
    pub fn edit_offer_number(&mut self, value: String) -> bool {
        let switch_on = !value.trim().is_empty() && value != self.offer_number_default;
        self.offer_number = value;
        if switch_on && !self.update_counter {
            self.update_counter = true;
            return true;
        }
        false
    }

    /// Fill an empty date with `today`.
    pub fn apply_default_date(&mut self, today: NaiveDate) -> bool {
        match default_date(&self.date, today) {
            Some(date) => {
                self.date = date;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SingleProductState {
    pub product_name: String,
    pub product_code: String,
    pub unit_price: String,
    pub quantity: String,
    pub description: String,
    pub discount: String,
    pub discount_flag: bool,
    pub power_w: String,
    pub volts: String,
    pub size: String,
    pub posizione: String,
    pub image_path: String,
    pub accessories: AccessoryList,
}

impl Default for SingleProductState {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            product_code: String::new(),
            unit_price: String::new(),
            quantity: "1".to_string(),
            description: String::new(),
            discount: "0".to_string(),
            discount_flag: false,
            power_w: String::new(),
            volts: String::new(),
            size: String::new(),
            posizione: String::new(),
            image_path: String::new(),
            accessories: AccessoryList::new(),
        }
    }
}

impl SingleProductState {
    fn from_data(data: SingleProductData) -> Self {
        let mut accessories = AccessoryList::new();
        let raw = if data.accessories_data.trim().is_empty() {
            "[]"
        } else {
            data.accessories_data.as_str()
        };
        if accessories.load(raw) == LoadOutcome::Reset {
            log::warn!("Accessory data for '{}' reset to []", data.product_name);
        }

        let defaults = Self::default();
        Self {
            product_name: data.product_name,
            product_code: data.product_code,
            unit_price: data.unit_price,
            quantity: if data.quantity.is_empty() {
                defaults.quantity
            } else {
                data.quantity
            },
            description: data.description,
            discount: if data.discount.is_empty() {
                defaults.discount
            } else {
                data.discount
            },
            discount_flag: data.discount_flag,
            power_w: data.power_w,
            volts: data.volts,
            size: data.size,
            posizione: data.posizione,
            image_path: data.product_image_path,
            accessories,
        }
    }

    pub fn discount_input(&self) -> DiscountInput {
        DiscountInput::from_raw(
            &self.unit_price,
            &self.quantity,
            &self.discount,
            self.discount_flag,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiProductRow {
    pub name: String,
    pub model: String,
    pub price: String,
    pub quantity: String,
    pub description: String,
}

impl MultiProductRow {
    /// Rows without a name are ignored by the server.
    pub fn is_filled(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn subtotal(&self) -> f64 {
        parse_number_or(&self.price, 0.0) * parse_number_or(&self.quantity, 1.0)
    }
}

impl From<[String; 5]> for MultiProductRow {
    fn from(columns: [String; 5]) -> Self {
        let [name, model, price, quantity, description] = columns;
        Self {
            name,
            model,
            price,
            quantity,
            description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiProductState {
    pub rows: Vec<MultiProductRow>,
}

impl MultiProductState {
    /// `rows`, padded with blank rows up to `min_rows`.
    pub fn with_rows(mut rows: Vec<MultiProductRow>, min_rows: usize) -> Self {
        while rows.len() < min_rows {
            rows.push(MultiProductRow::default());
        }
        Self { rows }
    }

    pub fn add_row(&mut self) -> usize {
        self.rows.push(MultiProductRow::default());
        self.rows.len() - 1
    }

    /// Sum of the filled rows, the tab's `data-total`.
    pub fn subtotal(&self) -> f64 {
        self.rows
            .iter()
            .filter(|r| r.is_filled())
            .map(MultiProductRow::subtotal)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabState {
    Single(SingleProductState),
    Multi(MultiProductState),
}

impl TabState {
    pub fn kind(&self) -> TabKind {
        match self {
            TabState::Single(_) => TabKind::SingleProduct,
            TabState::Multi(_) => TabKind::MultiProduct,
        }
    }

    /// Line item contributed to the grand total.
    pub fn priced_item(&self) -> PricedItem {
        match self {
            TabState::Single(tab) => PricedItem::SingleProduct {
                price: tab.discount_input().line_price(),
            },
            TabState::Multi(tab) => PricedItem::MultiProductSubtotal {
                total: tab.subtotal(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferPageState {
    pub header: OfferHeader,
    pub is_edit: bool,
    tabs: BTreeMap<u32, TabState>,
    totals: Option<TotalsSnapshot>,
}

impl OfferPageState {
    /// Build the page state from server data and take the totals snapshot.
    pub fn from_bootstrap(data: OfferBootstrap, config: &UiConfig) -> Self {
        let header = OfferHeader {
            offer_number_default: data.offer_number.clone(),
            offer_number: data.offer_number,
            update_counter: false,
            date: data.date,
            customer: data.customer,
            customer_email: data.customer_email,
            address: data.address,
            offer_description: data.offer_description,
        };

        let min_rows = config.multi_product.default_rows;
        let tabs = data
            .tabs
            .into_iter()
            .enumerate()
            .map(|(i, tab)| {
                let state = match tab {
                    TabData::SingleProduct(single) => {
                        TabState::Single(SingleProductState::from_data(single))
                    }
                    TabData::MultiProduct(multi) => {
                        let rows = multi
                            .products
                            .into_iter()
                            .map(|values| MultiProductRow::from(row_columns(values)))
                            .collect();
                        TabState::Multi(MultiProductState::with_rows(rows, min_rows))
                    }
                };
                (i as u32, state)
            })
            .collect();

        let mut page = Self {
            header,
            is_edit: data.is_edit,
            tabs,
            totals: None,
        };
        page.totals = TotalsSnapshot::capture(page.priced_items(), config.totals.rounding_step);
        page
    }

    pub fn tab_indices(&self) -> Vec<u32> {
        self.tabs.keys().copied().collect()
    }

    pub fn tab(&self, i: u32) -> Option<&TabState> {
        self.tabs.get(&i)
    }

    pub fn tab_mut(&mut self, i: u32) -> Option<&mut TabState> {
        self.tabs.get_mut(&i)
    }

    pub fn single(&self, i: u32) -> Option<&SingleProductState> {
        match self.tabs.get(&i) {
            Some(TabState::Single(tab)) => Some(tab),
            _ => None,
        }
    }

    pub fn single_mut(&mut self, i: u32) -> Option<&mut SingleProductState> {
        match self.tabs.get_mut(&i) {
            Some(TabState::Single(tab)) => Some(tab),
            _ => None,
        }
    }

    pub fn multi(&self, i: u32) -> Option<&MultiProductState> {
        match self.tabs.get(&i) {
            Some(TabState::Multi(tab)) => Some(tab),
            _ => None,
        }
    }

    pub fn multi_mut(&mut self, i: u32) -> Option<&mut MultiProductState> {
        match self.tabs.get_mut(&i) {
            Some(TabState::Multi(tab)) => Some(tab),
            _ => None,
        }
    }

    pub fn accessories_mut(&mut self, i: u32) -> Option<&mut AccessoryList> {
        self.single_mut(i).map(|tab| &mut tab.accessories)
    }

    /// Discount inputs of tab `i`; `None` for unknown or multi-product tabs.
    pub fn discount_input(&self, i: u32) -> Option<DiscountInput> {
        self.single(i).map(SingleProductState::discount_input)
    }

    /// Indices are never reused while the page is open.
    pub fn next_tab_index(&self) -> u32 {
        self.tabs.keys().next_back().map(|i| i + 1).unwrap_or(0)
    }

    pub fn add_single_tab(&mut self) -> u32 {
        let i = self.next_tab_index();
        self.tabs
            .insert(i, TabState::Single(SingleProductState::default()));
        i
    }

    pub fn add_multi_tab(&mut self, rows: usize) -> u32 {
        let i = self.next_tab_index();
        self.tabs
            .insert(i, TabState::Multi(MultiProductState::with_rows(Vec::new(), rows)));
        i
    }

    pub fn remove_tab(&mut self, i: u32) -> bool {
        self.tabs.remove(&i).is_some()
    }

    pub fn priced_items(&self) -> Vec<PricedItem> {
        self.tabs.values().map(TabState::priced_item).collect()
    }

    /// Snapshot taken in [`Self::from_bootstrap`]; later edits do not update it.
    pub fn totals(&self) -> Option<&TotalsSnapshot> {
        self.totals.as_ref()
    }

    /// Required controls in document order.
    pub fn required_fields(&self) -> Vec<RequiredField> {
        let mut fields = vec![
            RequiredField::new(field_names::OFFER_NUMBER, self.header.offer_number.as_str()),
            RequiredField::new(field_names::DATE, self.header.date.as_str()),
            RequiredField::new(field_names::CUSTOMER, self.header.customer.as_str()),
        ];
        for (i, tab) in &self.tabs {
            if let TabState::Single(single) = tab {
                fields.push(RequiredField::new(
                    field_names::product_name(*i),
                    single.product_name.as_str(),
                ));
            }
        }
        fields
    }

    pub fn validate_required(&self) -> Result<(), RequiredFieldsError> {
        validation::validate(&self.required_fields())
    }
}

/// Text controls of the offer header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    OfferNumber,
    Date,
    Customer,
    CustomerEmail,
    Address,
    OfferDescription,
}

impl HeaderField {
    pub fn id(&self) -> &'static str {
        match self {
            HeaderField::OfferNumber => field_names::OFFER_NUMBER,
            HeaderField::Date => field_names::DATE,
            HeaderField::Customer => field_names::CUSTOMER,
            HeaderField::CustomerEmail => field_names::CUSTOMER_EMAIL,
            HeaderField::Address => field_names::ADDRESS,
            HeaderField::OfferDescription => field_names::OFFER_DESCRIPTION,
        }
    }

    pub fn get<'a>(&self, header: &'a OfferHeader) -> &'a str {
        match self {
            HeaderField::OfferNumber => &header.offer_number,
            HeaderField::Date => &header.date,
            HeaderField::Customer => &header.customer,
            HeaderField::CustomerEmail => &header.customer_email,
            HeaderField::Address => &header.address,
            HeaderField::OfferDescription => &header.offer_description,
        }
    }

    /// The offer number goes through [`OfferHeader::edit_offer_number`].
    pub fn set(&self, header: &mut OfferHeader, value: String) {
        match self {
            HeaderField::OfferNumber => {
                header.edit_offer_number(value);
            }
            HeaderField::Date => header.date = value,
            HeaderField::Customer => header.customer = value,
            HeaderField::CustomerEmail => header.customer_email = value,
            HeaderField::Address => header.address = value,
            HeaderField::OfferDescription => header.offer_description = value,
        }
    }
}

/// Text controls of a single-product tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleField {
    ProductName,
    ProductCode,
    UnitPrice,
    Quantity,
    Description,
    Discount,
    PowerW,
    Volts,
    Size,
    Posizione,
}

impl SingleField {
    pub fn id(&self, i: u32) -> String {
        match self {
            SingleField::ProductName => field_names::product_name(i),
            SingleField::ProductCode => field_names::product_code(i),
            SingleField::UnitPrice => field_names::unit_price(i),
            SingleField::Quantity => field_names::quantity(i),
            SingleField::Description => field_names::description(i),
            SingleField::Discount => field_names::discount(i),
            SingleField::PowerW => field_names::power_w(i),
            SingleField::Volts => field_names::volts(i),
            SingleField::Size => field_names::size(i),
            SingleField::Posizione => field_names::posizione(i),
        }
    }

    pub fn get<'a>(&self, tab: &'a SingleProductState) -> &'a str {
        match self {
            SingleField::ProductName => &tab.product_name,
            SingleField::ProductCode => &tab.product_code,
            SingleField::UnitPrice => &tab.unit_price,
            SingleField::Quantity => &tab.quantity,
            SingleField::Description => &tab.description,
            SingleField::Discount => &tab.discount,
            SingleField::PowerW => &tab.power_w,
            SingleField::Volts => &tab.volts,
            SingleField::Size => &tab.size,
            SingleField::Posizione => &tab.posizione,
        }
    }

    pub fn set(&self, tab: &mut SingleProductState, value: String) {
        let slot = match self {
            SingleField::ProductName => &mut tab.product_name,
            SingleField::ProductCode => &mut tab.product_code,
            SingleField::UnitPrice => &mut tab.unit_price,
            SingleField::Quantity => &mut tab.quantity,
            SingleField::Description => &mut tab.description,
            SingleField::Discount => &mut tab.discount,
            SingleField::PowerW => &mut tab.power_w,
            SingleField::Volts => &mut tab.volts,
            SingleField::Size => &mut tab.size,
            SingleField::Posizione => &mut tab.posizione,
        };
        *slot = value;
    }
}

/// Columns of a multi-product row, in server order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowColumn {
    Name,
    Model,
    Price,
    Quantity,
    Description,
}

impl RowColumn {
    pub const ALL: [RowColumn; 5] = [
        RowColumn::Name,
        RowColumn::Model,
        RowColumn::Price,
        RowColumn::Quantity,
        RowColumn::Description,
    ];

    /// Middle part of `product_<i><column>__<row>`.
    pub fn key(&self) -> &'static str {
        match self {
            RowColumn::Name => "name",
            RowColumn::Model => "model",
            RowColumn::Price => "price",
            RowColumn::Quantity => "quantity",
            RowColumn::Description => "description",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RowColumn::Name => "Prodotto",
            RowColumn::Model => "Modello",
            RowColumn::Price => "Prezzo",
            RowColumn::Quantity => "Quantità",
            RowColumn::Description => "Descrizione",
        }
    }

    pub fn id(&self, i: u32, row: usize) -> String {
        field_names::row_field(i, self.key(), row)
    }

    pub fn get<'a>(&self, row: &'a MultiProductRow) -> &'a str {
        match self {
            RowColumn::Name => &row.name,
            RowColumn::Model => &row.model,
            RowColumn::Price => &row.price,
            RowColumn::Quantity => &row.quantity,
            RowColumn::Description => &row.description,
        }
    }

    pub fn set(&self, row: &mut MultiProductRow, value: String) {
        let slot = match self {
            RowColumn::Name => &mut row.name,
            RowColumn::Model => &mut row.model,
            RowColumn::Price => &mut row.price,
            RowColumn::Quantity => &mut row.quantity,
            RowColumn::Description => &mut row.description,
        };
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_accessory::AccessoryDraft;

    fn bootstrap(raw: &str) -> OfferPageState {
        OfferPageState::from_bootstrap(
            OfferBootstrap::from_json(raw).unwrap(),
            &UiConfig::default(),
        )
    }

    #[test]
    fn test_loads_tabs_in_order() {
        let page = bootstrap(
            r#"{"tabs": [
                {"type": "single_product", "product_name": "Forno", "unit_price": "100"},
                {"type": "multi_product", "products": [["Lampada", "", "10", "2", ""]]}
            ]}"#,
        );
        assert_eq!(page.tab_indices(), vec![0, 1]);
        assert_eq!(page.tab(0).unwrap().kind(), TabKind::SingleProduct);
        assert_eq!(page.single(0).unwrap().quantity, "1");
        assert_eq!(page.multi(1).unwrap().rows.len(), 3);
        assert!(page.single(1).is_none());
    }

    #[test]
    fn test_snapshot_sums_line_items() {
        let page = bootstrap(
            r#"{"tabs": [
                {"type": "single_product", "product_name": "A", "unit_price": "100",
                 "quantity": "2", "discount": "10", "discount_flag": true},
                {"type": "single_product", "product_name": "B", "unit_price": "45"},
                {"type": "multi_product", "products": [["C", "", "4", "2", ""], ["", "", "99", "1", ""]]}
            ]}"#,
        );
        let totals = page.totals().unwrap();
        assert_eq!(totals.grand_total, 180.0 + 45.0 + 8.0);
        assert_eq!(totals.rounded_total, 230.0);
    }

    #[test]
    fn test_snapshot_is_not_reactive() {
        let mut page = bootstrap(
            r#"{"tabs": [{"type": "single_product", "product_name": "A", "unit_price": "123"}]}"#,
        );
        let before = page.totals().cloned();

        page.single_mut(0).unwrap().unit_price = "999".to_string();
        page.add_single_tab();

        assert_eq!(page.totals().cloned(), before);
        assert_eq!(page.totals().unwrap().rounded_total, 120.0);
    }

    #[test]
    fn test_no_tabs_no_snapshot() {
        assert!(bootstrap("{}").totals().is_none());
    }

    #[test]
    fn test_broken_accessory_data_reset() {
        let page = bootstrap(
            r#"{"tabs": [{"type": "single_product", "product_name": "A", "accessories_data": "[oops"}]}"#,
        );
        let tab = page.single(0).unwrap();
        assert!(tab.accessories.is_empty());
        assert_eq!(tab.accessories.to_hidden(), "[]");
    }

    #[test]
    fn test_tab_indices_grow() {
        let mut page = OfferPageState::default();
        assert_eq!(page.add_single_tab(), 0);
        assert_eq!(page.add_multi_tab(3), 1);
        assert!(page.remove_tab(0));
        assert_eq!(page.add_single_tab(), 2);
        assert_eq!(page.tab_indices(), vec![1, 2]);
        assert!(!page.remove_tab(7));
    }

    #[test]
    fn test_accessories_per_tab() {
        let mut page = OfferPageState::default();
        let a = page.add_single_tab();
        let b = page.add_single_tab();
        page.accessories_mut(a)
            .unwrap()
            .add(AccessoryDraft {
                name: "Staffa".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(page.single(a).unwrap().accessories.len(), 1);
        assert!(page.single(b).unwrap().accessories.is_empty());
        assert!(page.accessories_mut(99).is_none());
    }

    #[test]
    fn test_discount_input_for_unknown_tab() {
        let mut page = OfferPageState::default();
        let multi = page.add_multi_tab(3);
        assert!(page.discount_input(multi).is_none());
        assert!(page.discount_input(42).is_none());
    }

    #[test]
    fn test_required_fields_order() {
        let mut page = OfferPageState::default();
        page.header.offer_number = "15".to_string();
        page.header.date = "2024-01-01".to_string();
        page.add_multi_tab(3);
        page.add_single_tab();

        let err = page.validate_required().unwrap_err();
        assert_eq!(err.invalid, vec!["customer", "product_1name_"]);

        page.header.customer = "ACME".to_string();
        page.single_mut(1).unwrap().product_name = "Forno".to_string();
        assert!(page.validate_required().is_ok());
    }

    #[test]
    fn test_offer_number_edit_flips_counter() {
        let mut header = OfferHeader {
            offer_number: "15".to_string(),
            offer_number_default: "15".to_string(),
            ..Default::default()
        };
        assert!(!header.edit_offer_number("15".to_string()));
        assert!(!header.edit_offer_number("   ".to_string()));
        assert!(!header.update_counter);

        assert!(header.edit_offer_number("20".to_string()));
        assert!(header.update_counter);
        // already on
        assert!(!header.edit_offer_number("21".to_string()));
    }

    #[test]
    fn test_default_date() {
        let mut header = OfferHeader::default();
        let today = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        assert!(header.apply_default_date(today));
        assert_eq!(header.date, "2025-02-03");
        assert!(!header.apply_default_date(today));
    }

    #[test]
    fn test_multi_rows() {
        let mut multi = MultiProductState::with_rows(Vec::new(), 3);
        assert_eq!(multi.add_row(), 3);
        multi.rows[0].name = "A".to_string();
        multi.rows[0].price = "2.5".to_string();
        multi.rows[0].quantity = "4".to_string();
        multi.rows[1].price = "100".to_string();
        assert_eq!(multi.subtotal(), 10.0);
    }

    #[test]
    fn test_field_bindings() {
        let mut page = OfferPageState::default();
        let i = page.add_single_tab();
        let tab = page.single_mut(i).unwrap();
        SingleField::UnitPrice.set(tab, "12.50".to_string());
        assert_eq!(SingleField::UnitPrice.get(tab), "12.50");
        assert_eq!(SingleField::UnitPrice.id(i), "unit_0price_");

        let mut row = MultiProductRow::default();
        RowColumn::Price.set(&mut row, "3".to_string());
        assert_eq!(row.price, "3");
        assert_eq!(RowColumn::Description.id(2, 1), "product_2description__1");

        HeaderField::OfferNumber.set(&mut page.header, "99".to_string());
        assert!(page.header.update_counter);
        assert_eq!(HeaderField::OfferNumber.get(&page.header), "99");
    }
}
