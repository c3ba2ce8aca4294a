pub mod components;
pub mod logging;
pub mod outside_click;

pub use components::app::App;
pub use components::modal::{Modal, ModalVariant};
