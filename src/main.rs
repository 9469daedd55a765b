//! Standalone reel page rendered with Yew.

use slot_reel::components::{demo_items, SlotMachine};
use slot_reel::dom::install_context_menu_guard;
use std::rc::Rc;
use yew::prelude::*;

#[function_component]
pub fn App() -> Html {
    let items = use_memo((), |_| demo_items());
    html! {
        <SlotMachine items={Rc::clone(&items)} />
    }
}

/// Entry point: guards the context menu and renders the App component.
fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = install_context_menu_guard(&gloo_utils::document()) {
        log::warn!("Context menu guard not installed: {:?}", err);
    }
    yew::Renderer::<App>::new().render();
}
