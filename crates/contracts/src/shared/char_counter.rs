//! Character counter for bounded-length text fields.

/// Maximum shown by a textarea's counter, `None` for no counter.
///
/// A bounded textarea counts against its own `maxlength`. Table cells have no
/// hard limit and count against `fallback` instead, which never becomes a
/// `maxlength` attribute.
pub fn counter_limit(max_length: Option<usize>, fallback: Option<usize>) -> Option<usize> {
    max_length.or(fallback)
}

/// Id of the counter element that belongs to `field_id`.
pub fn counter_id(field_id: &str) -> String {
    format!("counter_{}", field_id)
}

/// Snapshot of a counter for the current field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub length: usize,
    pub max_length: usize,
    pub near_limit: bool,
}

impl CounterState {
    /// Measure `text` against `max_length`; `near_limit` flips at
    /// `warning_ratio` of the maximum.
    ///
    /// Length is in UTF-16 code units, the unit the browser's `maxlength`
    /// enforces.
    pub fn measure(text: &str, max_length: usize, warning_ratio: f64) -> Self {
        let length = text.encode_utf16().count();
        Self {
            length,
            max_length,
            near_limit: length as f64 >= max_length as f64 * warning_ratio,
        }
    }

    pub fn label(&self) -> String {
        format!("{}/{} caratteri", self.length, self.max_length)
    }

    pub fn css_class(&self) -> &'static str {
        if self.near_limit {
            "text-danger"
        } else {
            "text-muted"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_textarea_uses_own_limit() {
        assert_eq!(counter_limit(Some(500), None), Some(500));
        assert_eq!(counter_limit(Some(500), Some(200)), Some(500));
        assert_eq!(counter_limit(None, None), None);
    }

    #[test]
    fn test_unbounded_table_cell_counts_against_fallback() {
        assert_eq!(counter_limit(None, Some(200)), Some(200));
        let long = "a".repeat(250);
        let state = CounterState::measure(&long, 200, 0.9);
        assert_eq!(state.label(), "250/200 caratteri");
        assert!(state.near_limit);
    }

    #[test]
    fn test_warning_threshold() {
        let below = CounterState::measure(&"a".repeat(89), 100, 0.9);
        assert!(!below.near_limit);
        assert_eq!(below.css_class(), "text-muted");

        let at = CounterState::measure(&"a".repeat(90), 100, 0.9);
        assert!(at.near_limit);
        assert_eq!(at.css_class(), "text-danger");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let state = CounterState::measure("perché", 10, 0.9);
        assert_eq!(state.length, 6);
        assert_eq!(state.label(), "6/10 caratteri");
    }

    #[test]
    fn test_counts_utf16_units_like_maxlength() {
        let text = format!("{}\u{1F600}", "a".repeat(198));
        let state = CounterState::measure(&text, 200, 0.9);
        assert_eq!(state.length, 200);
        assert_eq!(state.label(), "200/200 caratteri");
    }

    #[test]
    fn test_counter_id() {
        assert_eq!(counter_id("description_0"), "counter_description_0");
    }
}
