use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent, Node};

const MOUSE_DOWN_EVENT: &str = "mousedown";

type MouseDownClosure = Closure<dyn Fn(MouseEvent)>;

/// A document-wide `mousedown` listener that lives as long as this value.
///
/// Dropping the guard removes exactly the closure it registered, so a
/// component holding one releases the listener on every path that drops it:
/// being hidden, being unmounted, or having its reactive owner disposed.
pub struct OutsideClickListener {
    document: Document,
    closure: MouseDownClosure,
}

impl OutsideClickListener {
    /// Registers `handler` for every `mousedown` dispatched anywhere in the document.
    ///
    /// Returns `None` when there is no document or the browser rejects the listener.
    #[must_use]
    pub fn attach(handler: impl Fn(MouseEvent) + 'static) -> Option<Self> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            leptos::logging::warn!("No document available, outside clicks will not be detected");
            return None;
        };

        let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn(MouseEvent)>);
        if let Err(err) = document.add_event_listener_with_callback(MOUSE_DOWN_EVENT, closure.as_ref().unchecked_ref()) {
            leptos::logging::warn!("Failed to attach outside-click listener: {err:?}");
            return None;
        }

        crate::log!("Attached outside-click listener");
        Some(Self { document, closure })
    }
}

impl Drop for OutsideClickListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(MOUSE_DOWN_EVENT, self.closure.as_ref().unchecked_ref());
        crate::log!("Detached outside-click listener");
    }
}

/// The event target as a DOM node, if it is one.
#[must_use]
pub fn event_target_node(event: &MouseEvent) -> Option<Node> {
    event.target().and_then(|t| t.dyn_into::<Node>().ok())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().and_then(|w| w.document()).expect("document")
    }

    fn dispatch_mouse_down(target: &web_sys::EventTarget) {
        let init = web_sys::MouseEventInit::new();
        init.set_bubbles(true);
        let event = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).expect("mouse event");
        target.dispatch_event(&event).expect("dispatch");
    }

    #[wasm_bindgen_test]
    fn test_listener_receives_document_mouse_downs() {
        let body = document().body().expect("body");
        let count = Rc::new(Cell::new(0u32));

        let counter = count.clone();
        let listener = OutsideClickListener::attach(move |_| counter.set(counter.get() + 1));
        assert!(listener.is_some());

        dispatch_mouse_down(&body);
        dispatch_mouse_down(&body);
        assert_eq!(count.get(), 2);
    }

    #[wasm_bindgen_test]
    fn test_dropping_listener_detaches_it() {
        let body = document().body().expect("body");
        let count = Rc::new(Cell::new(0u32));

        let counter = count.clone();
        let listener = OutsideClickListener::attach(move |_| counter.set(counter.get() + 1));
        dispatch_mouse_down(&body);
        assert_eq!(count.get(), 1);

        drop(listener);
        dispatch_mouse_down(&body);
        assert_eq!(count.get(), 1);
    }

    #[wasm_bindgen_test]
    fn test_event_target_node_reports_dispatch_target() {
        let body = document().body().expect("body");
        let seen = Rc::new(Cell::new(false));

        let seen_in_handler = seen.clone();
        let expected = body.clone();
        let _listener = OutsideClickListener::attach(move |ev| {
            let target = event_target_node(&ev);
            let body_node: &Node = &expected;
            seen_in_handler.set(target.as_ref() == Some(body_node));
        });

        dispatch_mouse_down(&body);
        assert!(seen.get());
    }
}
