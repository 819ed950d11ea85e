//! Browser bridge for sitewire.
//!
//! On load the page is scanned once, the controllers are built from what was
//! found, and one binding per controller forwards DOM events into them.

mod apply;
mod bindings;
mod listener;
mod logging;
mod mount;
mod registry;

use std::cell::RefCell;
use std::rc::Rc;

use sitewire_core::controllers::footer;
use sitewire_core::{Site, SiteConfig};
use sitewire_protocol::selectors;
use tracing::{error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::apply::apply;
use crate::bindings::Binding;
use crate::mount::Mount;
use crate::registry::Registry;

struct Mounted {
    mount: Rc<Mount>,
    bindings: Vec<Box<dyn Binding>>,
}

impl Mounted {
    fn detach(mut self) {
        for binding in &mut self.bindings {
            binding.detach();
        }
        self.mount.site.borrow_mut().shutdown();
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = mount_page(window, document) {
                error!(error = ?e, "mount failed");
            }
        });
        target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }
    mount_page(window, document)
}

/// Scan the current document and wire every controller, replacing any
/// previous mount. Call again after swapping page content.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    logging::init();
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    mount_page(window, document)
}

/// Remove every listener and observer installed by [`mount`].
#[wasm_bindgen]
pub fn unmount() {
    if let Some(mounted) = MOUNTED.with(|m| m.borrow_mut().take()) {
        mounted.detach();
        info!("unmounted");
    }
}

/// Id of the section whose nav link is currently highlighted.
#[wasm_bindgen]
pub fn active_section() -> Option<String> {
    MOUNTED.with(|m| {
        let mounted = m.borrow();
        let site = mounted.as_ref()?.mount.site.borrow();
        site.active_section().map(str::to_owned)
    })
}

/// Transient UI state as JSON, for debugging from the browser console.
#[wasm_bindgen]
pub fn snapshot_json() -> Result<String, JsError> {
    MOUNTED.with(|m| {
        let mounted = m.borrow();
        let mounted = mounted
            .as_ref()
            .ok_or_else(|| JsError::new("sitewire is not mounted"))?;
        let snapshot = mounted.mount.site.borrow().snapshot();
        serde_json::to_string(&snapshot).map_err(|e| JsError::new(&e.to_string()))
    })
}

fn load_config(document: &Document) -> SiteConfig {
    let Some(text) = document
        .get_element_by_id(selectors::CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            error!(%e, "invalid inline config, using defaults");
            SiteConfig::default()
        }
    }
}

fn mount_page(window: Window, document: Document) -> Result<(), JsValue> {
    unmount();

    let registry = Registry::scan(&document)?;
    let outline = registry.outline();
    let mut site = Site::new(&outline, load_config(&document));
    let hash = window.location().hash().unwrap_or_default();
    let boot = site.boot(&hash, footer::current_year());

    let mount = Rc::new(Mount {
        window,
        document,
        registry,
        site: RefCell::new(site),
    });
    apply(&mount.registry, &mount.window, &boot)?;

    let mut bindings = bindings::all();
    if let Err(e) = bindings.iter_mut().try_for_each(|b| b.attach(&mount)) {
        bindings.iter_mut().for_each(|b| b.detach());
        return Err(e);
    }

    info!(
        sections = outline.sections.len(),
        nav_links = outline.nav_links.len(),
        tabs = outline.tabs.len(),
        dropdowns = outline.dropdowns.len(),
        carousels = outline.carousels,
        "page mounted"
    );
    MOUNTED.with(|m| *m.borrow_mut() = Some(Mounted { mount, bindings }));
    Ok(())
}
