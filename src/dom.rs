//! Browser glue: the live-DOM [`ReelSurface`], event wiring, and the settle
//! timer that reports the centered image.

use crate::config::ReelConfig;
use crate::error::ReelError;
use crate::reel::{self, CenterOutcome, ReelSurface};
use gloo_timers::future::TimeoutFuture;
use log::{debug, error, info};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement};

/// The container, reel and image list of the current page.
pub struct DomReel {
    document: Document,
    container: Element,
    reel: HtmlElement,
    image_selector: String,
}

impl DomReel {
    /// Look up the container and reel described by `config`.
    pub fn locate(document: &Document, config: &ReelConfig) -> Result<Self, ReelError> {
        let container = document
            .get_element_by_id(&config.container_id)
            .ok_or_else(|| ReelError::MissingContainer(config.container_id.clone()))?;

        let reel = document
            .query_selector(&config.reel_selector)
            .map_err(|_| ReelError::InvalidSelector(config.reel_selector.clone()))?
            .ok_or_else(|| ReelError::MissingReel(config.reel_selector.clone()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ReelError::NotStylable(config.reel_selector.clone()))?;

        Ok(Self {
            document: document.clone(),
            container,
            reel,
            image_selector: config.image_selector.clone(),
        })
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), ReelError> {
        self.reel
            .style()
            .set_property(property, value)
            .map_err(|_| ReelError::StyleRejected(property.to_string()))
    }
}

impl ReelSurface for DomReel {
    fn item_count(&self) -> usize {
        self.container.child_element_count() as usize
    }

    /// Every index in `order` is resolved before any node moves, so a bad
    /// permutation leaves the container untouched. A failing `append_child`
    /// part way through can still leave it partly permuted, with all members
    /// in place.
    fn reorder(&mut self, order: &[usize]) -> Result<(), ReelError> {
        let children = self.container.children();
        let items: Vec<Element> = (0..children.length())
            .filter_map(|i| children.item(i))
            .collect();
        if order.len() != items.len() {
            return Err(ReelError::ReorderFailed(format!(
                "order has {} entries for {} children",
                order.len(),
                items.len()
            )));
        }
        let moves = order
            .iter()
            .map(|&idx| {
                items
                    .get(idx)
                    .ok_or_else(|| ReelError::ReorderFailed(format!("no child at index {}", idx)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Appending an attached node moves it, so walking `order` rebuilds the
        // sequence without creating or dropping anything.
        for item in moves {
            self.container
                .append_child(item)
                .map_err(|e| ReelError::ReorderFailed(format!("{:?}", e)))?;
        }
        Ok(())
    }

    fn translate(&mut self, offset_px: f64, transition: &str) -> Result<(), ReelError> {
        self.set_style("transition", transition)?;
        self.set_style("transform", &format!("translateX({}px)", offset_px))
    }

    fn reel_width(&self) -> f64 {
        self.reel.client_width() as f64
    }

    fn label_at(&self, index: usize) -> Option<String> {
        let index = u32::try_from(index).ok()?;
        self.document
            .query_selector_all(&self.image_selector)
            .ok()?
            .get(index)?
            .dyn_into::<HtmlImageElement>()
            .ok()
            .map(|img| img.alt())
    }
}

/// Cancel the default action of a `contextmenu` event.
pub fn suppress_context_menu(event: &Event) {
    event.prevent_default();
}

/// Disable the right-click menu for the whole document.
pub fn install_context_menu_guard(document: &Document) -> Result<(), JsValue> {
    let handler = Closure::<dyn FnMut(Event)>::new(|event: Event| suppress_context_menu(&event));
    document.add_event_listener_with_callback(
        "contextmenu",
        handler.as_ref().unchecked_ref::<js_sys::Function>(),
    )?;
    // Lives for the page's lifetime.
    handler.forget();
    Ok(())
}

/// Run `f` once the document structure is ready; immediately if it already is.
pub fn when_ready<F>(document: &Document, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        debug!("Document already parsed, running immediately");
        f();
        return Ok(());
    }
    let callback = Closure::once_into_js(f);
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        callback.unchecked_ref::<js_sys::Function>(),
    )
}

/// Write the report line to the browser console.
pub fn report(outcome: &CenterOutcome) {
    info!("Center resolved at index {}", outcome.index());
    web_sys::console::log_1(&JsValue::from_str(&outcome.to_string()));
}

/// Write a failed spin to the browser console.
pub fn report_failure(err: &ReelError) {
    error!("Reel spin aborted: {}", err);
    web_sys::console::error_1(&JsValue::from(err.clone()));
}

/// Shuffle and animate the reel on the current page, then hand the settled
/// outcome to `on_settled` after `config.settle_delay_ms`. The delay cannot be
/// cancelled.
pub fn spin_document<F>(config: Rc<ReelConfig>, on_settled: F) -> Result<(), ReelError>
where
    F: FnOnce(CenterOutcome) + 'static,
{
    let document = gloo_utils::document();
    let mut surface = DomReel::locate(&document, &config)?;
    let state = reel::spin(&mut surface, &config, &mut rand::rng())?;
    info!(
        "Reel moving to {:.2}px, settling in {}ms",
        state.offset_px, config.settle_delay_ms
    );

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(config.settle_delay_ms).await;
        let outcome = reel::resolve_center(&surface, &state, &config);
        on_settled(outcome);
    });
    Ok(())
}
