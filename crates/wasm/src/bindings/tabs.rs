use std::rc::Rc;

use wasm_bindgen::JsValue;

use super::Binding;
use crate::listener::Listener;
use crate::mount::Mount;

#[derive(Default)]
pub struct TabsBinding {
    listeners: Vec<Listener>,
}

impl Binding for TabsBinding {
    fn attach(&mut self, mount: &Rc<Mount>) -> Result<(), JsValue> {
        for (index, button) in mount.registry.tab_buttons.iter().enumerate() {
            let m = Rc::clone(mount);
            self.listeners.push(Listener::new(button.as_ref(), "click", move |_| {
                m.dispatch(|site| site.on_tab(index));
            })?);
        }
        Ok(())
    }

    fn detach(&mut self) {
        self.listeners.clear();
    }
}
