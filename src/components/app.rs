use leptos::{component, create_rw_signal, view, IntoView, SignalSet};
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use crate::components::modal::{Modal, ModalVariant};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let show_summary = create_rw_signal(false);
    let show_order_details = create_rw_signal(false);

    view! {
        <Stylesheet id="leptos" href="/pkg/shared_components.css"/>
        <Title text="Shared Components"/>

        <div class="app">
            <button on:click=move |_| show_summary.set(true)>"Show summary"</button>
            <button on:click=move |_| show_order_details.set(true)>"Show order details"</button>

            <Modal
                visible=show_summary
                on_close_requested=move || show_summary.set(false)
            >
                <p>"Click anywhere outside this box to close it."</p>
            </Modal>

            <Modal
                visible=show_order_details
                variant=ModalVariant::OrderDetails
                on_close_requested=move || show_order_details.set(false)
            >
                <h3>"Order #1042"</h3>
                <ul>
                    <li>"2 x Espresso"</li>
                    <li>"1 x Croissant"</li>
                </ul>
            </Modal>
        </div>
    }
}
