use std::cell::RefCell;

use sitewire_core::Site;
use sitewire_protocol::{DomCommand, ScrollMetrics};
use tracing::{error, warn};
use web_sys::{Document, Window};

use crate::apply::apply;
use crate::registry::Registry;

/// Shared context handed to every binding: the page, its element handles,
/// and the controllers.
pub struct Mount {
    pub window: Window,
    pub document: Document,
    pub registry: Registry,
    pub site: RefCell<Site>,
}

impl Mount {
    /// Run one controller reaction and apply what it emits.
    ///
    /// The site borrow is released before the DOM is touched, so commands
    /// that synchronously raise further events cannot re-enter it.
    pub fn dispatch(&self, react: impl FnOnce(&mut Site) -> Vec<DomCommand>) {
        let commands = match self.site.try_borrow_mut() {
            Ok(mut site) => react(&mut *site),
            Err(_) => {
                warn!("event dropped while site was busy");
                return;
            }
        };
        if let Err(e) = apply(&self.registry, &self.window, &commands) {
            error!(error = ?e, "failed to apply commands");
        }
    }

    pub fn scroll_metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y: self.window.scroll_y().unwrap_or(0.0),
            viewport_height: self
                .window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0),
            document_height: self
                .document
                .body()
                .map_or(0.0, |body| f64::from(body.offset_height())),
        }
    }
}
