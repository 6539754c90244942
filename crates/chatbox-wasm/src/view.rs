use chatbox_client::ChatView;
use chatbox_types::{Fragment, MessageBlock, Theme, TurnView, LOADING_TEXT};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::dom;

/// Id of the message container
pub const CHAT_BOX_ID: &str = "chatBox";

/// Id of the theme checkbox
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Renders the conversation into the page's message container
pub struct DomView {
    document: Document,
    chat_box: Element,
    body: Option<HtmlElement>,
    theme_toggle: Option<HtmlInputElement>,
    loading: Option<Element>,
}

impl DomView {
    pub fn new(document: Document) -> Result<Self, JsValue> {
        let chat_box = dom::required(&document, CHAT_BOX_ID)?;
        let body = document.body();
        let theme_toggle = dom::optional_input(&document, THEME_TOGGLE_ID);

        Ok(Self {
            document,
            chat_box,
            body,
            theme_toggle,
            loading: None,
        })
    }

    fn render_block(&self, block: &MessageBlock) -> Result<(), JsValue> {
        let message_div = dom::element(&self.document, "div", &block.class_name(), None)?;

        // One span per line with explicit <br> between them; setting the
        // whole text at once would collapse the newlines
        for fragment in &block.fragments {
            match fragment {
                Fragment::Text(text) => {
                    let span = dom::element(&self.document, "span", "", Some(text))?;
                    message_div.append_child(&span)?;
                }
                Fragment::LineBreak => {
                    let br = self.document.create_element("br")?;
                    message_div.append_child(&br)?;
                }
            }
        }

        self.chat_box.append_child(&message_div)?;
        Ok(())
    }
}

impl TurnView for DomView {
    fn append_block(&mut self, block: &MessageBlock) {
        if let Err(e) = self.render_block(block) {
            log::error!("Failed to render message: {:?}", e);
        }
    }
}

impl ChatView for DomView {
    fn show_loading(&mut self) {
        let created = dom::element(&self.document, "div", "chat-message ai-message loading", Some(LOADING_TEXT))
            .and_then(|element| {
                self.chat_box.append_child(&element)?;
                Ok(element)
            });

        match created {
            Ok(element) => self.loading = Some(element),
            Err(e) => log::error!("Failed to show loading indicator: {:?}", e),
        }
    }

    fn hide_loading(&mut self) {
        if let Some(element) = self.loading.take() {
            element.remove();
        }
    }

    fn apply_theme(&mut self, theme: Theme) {
        if let Some(body) = &self.body {
            if let Err(e) = body.class_list().toggle_with_force("dark", theme.is_dark()) {
                log::error!("Failed to apply theme: {:?}", e);
            }
        }
        if let Some(toggle) = &self.theme_toggle {
            toggle.set_checked(theme.is_dark());
        }
    }

    fn scroll_to_bottom(&mut self) {
        dom::pin_to_bottom(&self.chat_box);
    }
}
