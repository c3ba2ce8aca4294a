use crate::outside_click::{event_target_node, OutsideClickListener};
use leptos::{component, create_effect, create_node_ref, html, on_cleanup, view, ChildrenFn, IntoView, MaybeSignal, Show, SignalGet, SignalGetUntracked};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Full-viewport backdrop layer
pub const BACKDROP_CLASS: &str = "Modal";
/// Content box for the default variant
pub const CONTENT_BOX_CLASS: &str = "Modal__ModalContentBox";
/// Content box for the order details variant
pub const ORDER_DETAILS_CONTENT_BOX_CLASS: &str = "Modal__ModalContentBoxOrderDetails";
/// Innermost container holding the caller's children
pub const BODY_CLASS: &str = "Modal-ModalMainContentBox";

/// Label that selects [`ModalVariant::OrderDetails`] when variants arrive as strings
pub const ORDER_DETAILS_LABEL: &str = "OrderDetails";

type ListenerSlot = Rc<RefCell<Option<OutsideClickListener>>>;

/// Visual styling mode of the modal's content box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ModalVariant {
    #[default]
    Default,
    OrderDetails,
}

impl ModalVariant {
    /// Maps a loosely-typed label onto a variant. Only an exact
    /// `"OrderDetails"` is recognized; everything else is `Default`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ORDER_DETAILS_LABEL {
            Self::OrderDetails
        } else {
            Self::Default
        }
    }

    #[must_use]
    pub const fn content_box_class(self) -> &'static str {
        match self {
            Self::Default => CONTENT_BOX_CLASS,
            Self::OrderDetails => ORDER_DETAILS_CONTENT_BOX_CLASS,
        }
    }
}

impl From<&str> for ModalVariant {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl From<String> for ModalVariant {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

/// Overlay that renders `children` in a content box above a backdrop while
/// `visible` is true, and calls `on_close_requested` for every mouse-down
/// landing outside the content box.
///
/// The document listener only exists while the modal is visible; it is
/// removed when the modal hides and when the component is unmounted.
#[component]
#[must_use]
pub fn Modal(
    #[prop(into)] visible: MaybeSignal<bool>,
    #[prop(into, optional)] variant: MaybeSignal<ModalVariant>,
    on_close_requested: impl Fn() + 'static,
    children: ChildrenFn,
) -> impl IntoView {
    let content_root = create_node_ref::<html::Div>();
    let on_close_requested = Rc::new(on_close_requested);
    let listener: ListenerSlot = Rc::new(RefCell::new(None));

    create_effect({
        let listener = listener.clone();
        move |_| {
            if !visible.get() {
                // Dropping the guard detaches the document listener
                listener.borrow_mut().take();
                return;
            }
            if listener.borrow().is_some() {
                return;
            }

            crate::log!("Modal shown with variant {:?}", variant.get_untracked());
            let on_close_requested = on_close_requested.clone();
            *listener.borrow_mut() = OutsideClickListener::attach(move |ev| {
                let target = event_target_node(&ev);
                let inside = content_root.get_untracked()
                    .is_some_and(|el| el.contains(target.as_ref()));
                if inside {
                    return;
                }
                on_close_requested();
            });
        }
    });

    on_cleanup(move || {
        listener.borrow_mut().take();
    });

    view! {
        <Show when=move || visible.get()>
            <div>
                <div class=BACKDROP_CLASS>
                    <div class=move || variant.get().content_box_class() node_ref=content_root>
                        <div class=BODY_CLASS>
                            {children()}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
