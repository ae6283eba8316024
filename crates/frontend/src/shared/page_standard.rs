//! Page category constants.
//!
//! Every page root declares an `id` in the format `{entity}--{category}`
//! (e.g. `"a001_offer--detail"`) and `data-page-category` with one of the
//! constants below.

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_offer--detail"));
        assert!(!is_valid_page_id("a001_offer"));
        assert!(!is_valid_page_id("--detail"));
    }
}
