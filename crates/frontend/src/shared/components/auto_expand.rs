//! Textareas that grow with their content.

use crate::shared::config::use_ui_config;
use contracts::shared::auto_expand::{height_px, ExpandStyle};
use leptos::html::Textarea;
use leptos::prelude::*;
use web_sys::HtmlTextAreaElement;

/// Collapse to the baseline, then grow to fit the content.
pub fn resize(textarea: &HtmlTextAreaElement, style: ExpandStyle, table_baseline_px: u32) {
    let css = web_sys::HtmlElement::style(textarea);
    let _ = css.set_property("height", &style.baseline(table_baseline_px));
    let _ = css.set_property("height", &height_px(textarea.scroll_height()));
}

/// Size the textarea once it is mounted. Further resizing happens in the
/// `input` handler returned here.
pub fn use_auto_expand(node_ref: NodeRef<Textarea>, style: ExpandStyle) -> impl Fn() + Copy {
    let baseline = use_ui_config().textarea.table_baseline_px;

    Effect::new(move |_| {
        if let Some(textarea) = node_ref.get() {
            if style.sizes_on_mount(!textarea.value().is_empty()) {
                resize(&textarea, style, baseline);
            }
        }
    });

    move || {
        if let Some(textarea) = node_ref.get_untracked() {
            resize(&textarea, style, baseline);
        }
    }
}
