//! Yew view components for the standalone reel page.
//!
//! The page renders the same markup a host page would provide (reel,
//! shuffle container, labeled images), then drives it through
//! [`crate::dom::spin_document`] once mounted.

use crate::config::{ReelConfig, DEMO_IMAGE_DIR, DEMO_ITEM_COUNT};
use crate::dom;
use crate::reel::CenterOutcome;
use std::rc::Rc;
use yew::prelude::*;

/// One image on the reel.
#[derive(Clone, PartialEq)]
pub struct ReelItem {
    pub label: String,
    pub src: String,
}

/// Items used by the standalone page: `Prize 01` .. `Prize NN`.
pub fn demo_items() -> Vec<ReelItem> {
    (1..=DEMO_ITEM_COUNT)
        .map(|n| ReelItem {
            label: format!("Prize {:02}", n),
            src: format!("{}/prize-{:02}.png", DEMO_IMAGE_DIR, n),
        })
        .collect()
}

/// Renders the reel items in their initial order.
fn render_items(items: &[ReelItem]) -> Html {
    items
        .iter()
        .map(|item| {
            html! {
                <img class="reel-item" src={item.src.clone()} alt={item.label.clone()} />
            }
        })
        .collect::<Html>()
}

#[derive(Properties, PartialEq)]
pub struct SlotMachineProps {
    pub items: Rc<Vec<ReelItem>>,
    #[prop_or_default]
    pub config: Rc<ReelConfig>,
}

/// Reel plus a status line. Spins once after the first render.
#[function_component(SlotMachine)]
pub fn slot_machine(props: &SlotMachineProps) -> Html {
    let status = use_state(|| None::<String>);

    {
        let status = status.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let settled = status.clone();
            let result = dom::spin_document(config, move |outcome: CenterOutcome| {
                dom::report(&outcome);
                settled.set(Some(outcome.to_string()));
            });
            if let Err(err) = result {
                dom::report_failure(&err);
                status.set(Some(err.to_string()));
            }
            || ()
        });
    }

    let oncontextmenu = Callback::from(|e: MouseEvent| dom::suppress_context_menu(&e));
    let container_id = props.config.container_id.clone();

    html! {
        <div class="slot-machine" {oncontextmenu}>
            <div class="reel-window">
                <div class="reel">
                    <div id={container_id}>
                        { render_items(&props.items) }
                    </div>
                </div>
                <div class="reel-pointer"></div>
            </div>
            <p class="center-label">
                { status.as_deref().unwrap_or("Spinning...") }
            </p>
        </div>
    }
}
