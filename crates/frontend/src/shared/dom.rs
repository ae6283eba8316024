//! Small helpers around `web_sys` for reading and focusing page elements.

use wasm_bindgen::JsCast;
use web_sys::{
    window, Document, HtmlElement, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Text content of an element, typically an embedded `<script>` data block.
pub fn script_text(id: &str) -> Option<String> {
    document()?
        .get_element_by_id(id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

/// Current DOM value of an `<input>`, which may differ from the rendered one
/// if something outside of the app wrote to it.
pub fn input_value(id: &str) -> Option<String> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

pub fn set_input_value(id: &str, value: &str) {
    if let Some(input) = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(value);
    }
}

/// Smooth-scroll the element to the middle of the viewport and focus it.
pub fn scroll_to_and_focus(id: &str) {
    let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
        log::warn!("Element #{} not found", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);

    if let Ok(html) = element.dyn_into::<HtmlElement>() {
        let _ = html.focus();
    }
}
