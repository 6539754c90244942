use std::cell::RefCell;
use std::rc::Rc;

use chatbox_client::{ChatBackend, ChatView, ConversationController, PendingExchange, Submission};
use chatbox_store::KeyValueStore;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlInputElement};

use crate::backend::FetchBackend;
use crate::dom;
use crate::storage::LocalStorage;
use crate::view::{DomView, THEME_TOGGLE_ID};

/// Id of the message input
pub const USER_INPUT_ID: &str = "userInput";

/// Id of the optional send button
const SEND_BUTTON_ID: &str = "sendButton";

type WidgetController = ConversationController<Rc<FetchBackend>, Rc<LocalStorage>, DomView>;

/// The chat widget bound to the current page
pub struct ChatWidget {
    document: Document,
    backend: Rc<FetchBackend>,
    controller: Rc<RefCell<WidgetController>>,
}

impl ChatWidget {
    pub fn new() -> Result<Self, JsValue> {
        let document = crate::document()?;
        let backend = Rc::new(FetchBackend::new());
        let storage = Rc::new(LocalStorage::open());
        let view = DomView::new(document.clone())?;

        let controller = ConversationController::new(Rc::clone(&backend), storage, view);

        Ok(Self {
            document,
            backend,
            controller: Rc::new(RefCell::new(controller)),
        })
    }

    pub fn start(self) -> Result<(), JsValue> {
        let replayed = self.controller.borrow_mut().load();
        log::info!("Restored {} chat messages", replayed);

        self.setup_message_input()?;
        self.setup_send_button()?;
        self.setup_theme_toggle()?;

        Ok(())
    }

    fn setup_message_input(&self) -> Result<(), JsValue> {
        let input = dom::required(&self.document, USER_INPUT_ID)?;
        let document = self.document.clone();
        let backend = Rc::clone(&self.backend);
        let controller = Rc::clone(&self.controller);

        let closure = Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Enter" {
                spawn_send(document.clone(), Rc::clone(&backend), Rc::clone(&controller));
            }
        }) as Box<dyn FnMut(_)>);

        input.add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }

    fn setup_send_button(&self) -> Result<(), JsValue> {
        let Some(button) = self.document.get_element_by_id(SEND_BUTTON_ID) else {
            return Ok(());
        };
        let document = self.document.clone();
        let backend = Rc::clone(&self.backend);
        let controller = Rc::clone(&self.controller);

        let closure = Closure::wrap(Box::new(move || {
            spawn_send(document.clone(), Rc::clone(&backend), Rc::clone(&controller));
        }) as Box<dyn FnMut()>);

        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }

    fn setup_theme_toggle(&self) -> Result<(), JsValue> {
        let Some(toggle) = self.document.get_element_by_id(THEME_TOGGLE_ID) else {
            return Ok(());
        };
        let controller = Rc::clone(&self.controller);

        let closure = Closure::wrap(Box::new(move || {
            let theme = controller.borrow_mut().toggle_theme();
            log::info!("Theme switched to {}", theme);
        }) as Box<dyn FnMut()>);

        toggle.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }
}

fn spawn_send(document: Document, backend: Rc<FetchBackend>, controller: Rc<RefCell<WidgetController>>) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = send_message_handler(document, backend, controller).await {
            log::error!("Failed to send message: {:?}", e);
        }
    });
}

/// Start an exchange with the input's text. The input is cleared only when
/// the message was accepted; a busy controller leaves the typed text in place.
pub fn begin_from_input<B, S, V>(
    controller: &mut ConversationController<B, S, V>,
    input: &HtmlInputElement,
) -> Option<PendingExchange>
where
    B: ChatBackend,
    S: KeyValueStore + Clone,
    V: ChatView,
{
    match controller.begin(&input.value()) {
        Submission::Ready(pending) => {
            input.set_value("");
            Some(pending)
        }
        Submission::Ignored => None,
        Submission::Busy => {
            log::debug!("Still waiting for the previous reply");
            None
        }
    }
}

async fn send_message_handler(
    document: Document,
    backend: Rc<FetchBackend>,
    controller: Rc<RefCell<WidgetController>>,
) -> Result<(), JsValue> {
    let input = dom::required_input(&document, USER_INPUT_ID)?;

    // The borrow ends before the await so other handlers stay usable
    let Some(pending) = begin_from_input(&mut controller.borrow_mut(), &input) else {
        return Ok(());
    };

    let result = backend.send(&pending.message).await;
    controller.borrow_mut().finish(result);

    Ok(())
}
