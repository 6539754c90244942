use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub mod app;
pub mod backend;
pub mod dom;
pub mod storage;
pub mod view;

/// Module start: route panics and `log` output to the browser console
/// before any widget code runs
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::debug!("chat widget module loaded");
}

/// Wire up the chat widget on the current page: apply the saved theme,
/// replay stored history and attach the input handlers
#[wasm_bindgen]
pub fn init_chat_widget() -> Result<(), JsValue> {
    log::info!("Attaching chat widget");
    app::ChatWidget::new()?.start()
}

fn document() -> Result<Document, JsValue> {
    let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("chat widget needs a browser window"))?;
    window
        .document()
        .ok_or_else(|| JsValue::from_str("chat widget needs a document"))
}
