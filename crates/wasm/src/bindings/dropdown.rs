use std::rc::Rc;

use sitewire_core::controllers::DropdownEvent;
use wasm_bindgen::JsValue;

use super::Binding;
use crate::listener::{Listener, event_node, is_escape};
use crate::mount::Mount;

#[derive(Default)]
pub struct DropdownBinding {
    listeners: Vec<Listener>,
}

impl Binding for DropdownBinding {
    fn attach(&mut self, mount: &Rc<Mount>) -> Result<(), JsValue> {
        let dropdowns = &mount.registry.dropdowns;
        if dropdowns.is_empty() {
            return Ok(());
        }

        for (index, parts) in dropdowns.iter().enumerate() {
            if let Some(toggle) = &parts.toggle {
                let m = Rc::clone(mount);
                self.listeners.push(Listener::new(toggle.as_ref(), "click", move |_| {
                    m.dispatch(|site| site.on_dropdown(DropdownEvent::Toggle(index)));
                })?);
            }
            for (option, el) in parts.options.iter().enumerate() {
                let m = Rc::clone(mount);
                self.listeners.push(Listener::new(el.as_ref(), "click", move |_| {
                    m.dispatch(|site| {
                        site.on_dropdown(DropdownEvent::Choose {
                            dropdown: index,
                            option,
                        })
                    });
                })?);
            }
        }

        let m = Rc::clone(mount);
        self.listeners.push(Listener::new(
            mount.document.as_ref(),
            "click",
            move |event| {
                let node = event_node(&event);
                let inside = m
                    .registry
                    .dropdowns
                    .iter()
                    .any(|d| d.root.contains(node.as_ref()));
                if !inside {
                    m.dispatch(|site| site.on_dropdown(DropdownEvent::OutsideClick));
                }
            },
        )?);

        let m = Rc::clone(mount);
        self.listeners.push(Listener::new(
            mount.document.as_ref(),
            "keydown",
            move |event| {
                if is_escape(&event) {
                    m.dispatch(|site| site.on_dropdown(DropdownEvent::Escape));
                }
            },
        )?);
        Ok(())
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}
