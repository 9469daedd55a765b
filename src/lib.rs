//! Slot-machine reel effect for the browser.
//!
//! On page ready the children of the shuffle container are reordered at
//! random, the reel slides to a random stopping offset, and once the
//! transition has settled the alt text of the image nearest the middle of the
//! reel is written to the console. The right-click menu is disabled for the
//! page.
//!
//! Hosts that keep their own markup call [`attach`] from JavaScript; the
//! binary target renders a self-contained Yew page instead.

use log::{info, warn};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod reel;

pub use config::ReelConfig;
pub use error::ReelError;
pub use reel::{
    center_index, pick_offset, resolve_center, shuffle_order, spin, CenterOutcome, ReelState,
    ReelSurface,
};

thread_local! {
    /// Set by the first [`attach`] with a valid config; later calls are no-ops.
    static ATTACHED: Cell<bool> = const { Cell::new(false) };
}

/// `true` for the first caller only.
fn claim_attach() -> bool {
    ATTACHED.with(|attached| !attached.replace(true))
}

fn run_and_report(config: Rc<ReelConfig>) {
    if let Err(err) = dom::spin_document(config, |outcome| dom::report(&outcome)) {
        dom::report_failure(&err);
    }
}

/// Install the context-menu guard and spin the reel once the page is ready.
///
/// `config_json` may override any field of [`ReelConfig`]; pass nothing for
/// the defaults. Throws if the configuration is invalid. Only the first call
/// installs anything; repeated calls log a warning and return.
#[wasm_bindgen]
pub fn attach(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = Rc::new(ReelConfig::from_optional_json(config_json.as_deref())?);
    if !claim_attach() {
        warn!("Reel already attached, ignoring repeated attach");
        return Ok(());
    }
    let document = gloo_utils::document();

    dom::install_context_menu_guard(&document)?;
    info!("Reel attached, waiting for DOMContentLoaded");
    dom::when_ready(&document, move || run_and_report(config))
}

/// Spin the reel right away, without waiting for the ready signal.
#[wasm_bindgen]
pub fn spin_now(config_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = Rc::new(ReelConfig::from_optional_json(config_json.as_deref())?);
    dom::spin_document(config, |outcome| dom::report(&outcome))?;
    Ok(())
}
