use std::rc::Rc;

use sitewire_core::controllers::NavEvent;
use wasm_bindgen::JsValue;

use super::Binding;
use crate::listener::{Listener, event_node, is_escape};
use crate::mount::Mount;

#[derive(Default)]
pub struct NavBinding {
    listeners: Vec<Listener>,
}

impl Binding for NavBinding {
    fn attach(&mut self, mount: &Rc<Mount>) -> Result<(), JsValue> {
        let registry = &mount.registry;
        let (Some(nav), Some(toggle)) = (&registry.nav, &registry.nav_toggle) else {
            return Ok(());
        };

        let m = Rc::clone(mount);
        self.listeners.push(Listener::new(toggle.as_ref(), "click", move |_| {
            m.dispatch(|site| site.on_nav(NavEvent::ToggleClick));
        })?);

        for anchor in &registry.nav_anchors {
            let m = Rc::clone(mount);
            self.listeners.push(Listener::new(anchor.as_ref(), "click", move |_| {
                m.dispatch(|site| site.on_nav(NavEvent::LinkClick));
            })?);
        }

        let m = Rc::clone(mount);
        let (nav, toggle) = (nav.clone(), toggle.clone());
        self.listeners.push(Listener::new(
            mount.document.as_ref(),
            "click",
            move |event| {
                let node = event_node(&event);
                let inside = nav.contains(node.as_ref()) || toggle.contains(node.as_ref());
                m.dispatch(|site| site.on_nav(NavEvent::DocumentClick { inside }));
            },
        )?);

        let m = Rc::clone(mount);
        self.listeners.push(Listener::new(
            mount.document.as_ref(),
            "keydown",
            move |event| {
                if is_escape(&event) {
                    m.dispatch(|site| site.on_nav(NavEvent::Escape));
                }
            },
        )?);
        Ok(())
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}
