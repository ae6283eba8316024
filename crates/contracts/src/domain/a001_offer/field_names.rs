//! Field names of the offer form.
//!
//! These are shared with the server that parses the POST body, so they are
//! used verbatim as both `id` and `name` of the rendered controls. Several of
//! them carry the tab index in the middle (`unit_0price_`), which is how the
//! server expects them.

pub const OFFER_FORM: &str = "offerForm";
pub const OFFER_NUMBER: &str = "offer_number";
pub const UPDATE_COUNTER: &str = "update_counter";
pub const DATE: &str = "date";
pub const CUSTOMER: &str = "customer";
pub const CUSTOMER_EMAIL: &str = "customer_email";
pub const ADDRESS: &str = "address";
pub const OFFER_DESCRIPTION: &str = "offer_description";
pub const TOTAL_PRICE: &str = "totalPrice";
pub const ADD_SINGLE_PRODUCT_BTN: &str = "addSingleProductBtn";
pub const ADD_MULTI_PRODUCT_BTN: &str = "addMultiProductBtn";

pub fn tab_type(i: u32) -> String {
    format!("tab_{}type_", i)
}

pub fn product_name(i: u32) -> String {
    format!("product_{}name_", i)
}

pub fn product_code(i: u32) -> String {
    format!("product_{}code_", i)
}

pub fn unit_price(i: u32) -> String {
    format!("unit_{}price_", i)
}

pub fn quantity(i: u32) -> String {
    format!("quantity_{}", i)
}

pub fn description(i: u32) -> String {
    format!("description_{}", i)
}

pub fn discount(i: u32) -> String {
    format!("discount_{}", i)
}

pub fn discount_flag(i: u32) -> String {
    format!("discount_flag_{}", i)
}

pub fn discounted_price(i: u32) -> String {
    format!("discounted_price_{}", i)
}

pub fn power_w(i: u32) -> String {
    format!("power_{}w_", i)
}

pub fn volts(i: u32) -> String {
    format!("volts_{}", i)
}

pub fn size(i: u32) -> String {
    format!("size_{}", i)
}

pub fn posizione(i: u32) -> String {
    format!("posizione_{}", i)
}

/// File input for a new product photo.
pub fn product_image(i: u32) -> String {
    format!("product_{}image_", i)
}

pub fn existing_image(i: u32) -> String {
    format!("existing_image_{}", i)
}

pub fn accessories_data(i: u32) -> String {
    format!("accessories_data_{}", i)
}

pub fn accessories_table(i: u32) -> String {
    format!("accessories_table_{}", i)
}

pub fn accessory_name(i: u32) -> String {
    format!("accessory_name_{}", i)
}

pub fn accessory_code(i: u32) -> String {
    format!("accessory_code_{}", i)
}

pub fn accessory_price(i: u32) -> String {
    format!("accessory_price_{}", i)
}

/// Column of a multi-product row: `product_<tab>name__<row>`.
pub fn row_field(i: u32, column: &str, row: usize) -> String {
    format!("product_{}{}__{}", i, column, row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_field_names() {
        assert_eq!(tab_type(0), "tab_0type_");
        assert_eq!(unit_price(2), "unit_2price_");
        assert_eq!(power_w(1), "power_1w_");
        assert_eq!(discount_flag(3), "discount_flag_3");
        assert_eq!(accessories_data(0), "accessories_data_0");
    }

    #[test]
    fn test_row_field_names() {
        assert_eq!(row_field(1, "name", 0), "product_1name__0");
        assert_eq!(row_field(1, "description", 4), "product_1description__4");
    }
}
