use std::rc::Rc;

use sitewire_core::controllers::Direction;
use sitewire_protocol::selectors;
use wasm_bindgen::JsValue;
use web_sys::Element;

use super::Binding;
use crate::listener::Listener;
use crate::mount::Mount;

#[derive(Default)]
pub struct CarouselBinding {
    listeners: Vec<Listener>,
}

/// Rendered width of the first card on the track, if any.
fn card_width(track: &Element) -> Option<f64> {
    let card = track.query_selector(selectors::CAROUSEL_CARD).ok()??;
    Some(card.get_bounding_client_rect().width())
}

impl Binding for CarouselBinding {
    fn attach(&mut self, mount: &Rc<Mount>) -> Result<(), JsValue> {
        for (index, parts) in mount.registry.carousels.iter().enumerate() {
            for (control, direction) in [(&parts.prev, Direction::Prev), (&parts.next, Direction::Next)]
            {
                let m = Rc::clone(mount);
                let track = parts.track.clone();
                self.listeners.push(Listener::new(control.as_ref(), "click", move |_| {
                    let width = card_width(&track);
                    m.dispatch(|site| site.on_carousel(index, direction, width));
                })?);
            }
        }
        Ok(())
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}
