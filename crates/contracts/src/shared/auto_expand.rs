//! Sizing policy for auto-expanding textareas.

/// The two textarea styles that grow with their content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandStyle {
    /// Free-form text, collapses to `auto` before measuring.
    FreeForm,
    /// Cells inside product tables, collapse to a fixed row height.
    Table,
}

impl ExpandStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            ExpandStyle::FreeForm => "auto-expand",
            ExpandStyle::Table => "auto-expand-table",
        }
    }

    /// Height applied before reading `scrollHeight`.
    pub fn baseline(self, table_baseline_px: u32) -> String {
        match self {
            ExpandStyle::FreeForm => "auto".to_string(),
            ExpandStyle::Table => format!("{}px", table_baseline_px),
        }
    }

    /// Table cells keep their baseline until they hold some text.
    pub fn sizes_on_mount(self, has_content: bool) -> bool {
        match self {
            ExpandStyle::FreeForm => true,
            ExpandStyle::Table => has_content,
        }
    }
}

pub fn height_px(scroll_height: i32) -> String {
    format!("{}px", scroll_height.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baselines() {
        assert_eq!(ExpandStyle::FreeForm.baseline(38), "auto");
        assert_eq!(ExpandStyle::Table.baseline(38), "38px");
    }

    #[test]
    fn test_initial_sizing() {
        assert!(ExpandStyle::FreeForm.sizes_on_mount(false));
        assert!(!ExpandStyle::Table.sizes_on_mount(false));
        assert!(ExpandStyle::Table.sizes_on_mount(true));
    }

    #[test]
    fn test_height_px() {
        assert_eq!(height_px(120), "120px");
        assert_eq!(height_px(-4), "0px");
    }
}
