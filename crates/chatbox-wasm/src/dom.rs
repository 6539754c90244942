use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

/// Element the widget cannot work without
pub fn required(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("chat widget: no element with id '{}'", id)))
}

pub fn required_input(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    required(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("chat widget: '{}' is not an <input>", id)))
}

/// Optional input element; `None` when absent or of another type
pub fn optional_input(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

/// A `tag` element with `class` and, if given, text content
pub fn element(document: &Document, tag: &str, class: &str, text: Option<&str>) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    if text.is_some() {
        element.set_text_content(text);
    }
    Ok(element)
}

/// Pin the container's scroll position to its newest child
pub fn pin_to_bottom(container: &Element) {
    if let Some(container) = container.dyn_ref::<HtmlElement>() {
        container.set_scroll_top(container.scroll_height());
    }
}
