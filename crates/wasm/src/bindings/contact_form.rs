use std::rc::Rc;

use wasm_bindgen::JsValue;

use super::Binding;
use crate::listener::Listener;
use crate::mount::Mount;

#[derive(Default)]
pub struct ContactFormBinding {
    listener: Option<Listener>,
}

impl Binding for ContactFormBinding {
    fn attach(&mut self, mount: &Rc<Mount>) -> Result<(), JsValue> {
        let Some(form) = &mount.registry.contact_form else {
            return Ok(());
        };
        let m = Rc::clone(mount);
        self.listener = Some(Listener::new(form.as_ref(), "submit", move |event| {
            event.prevent_default();
            m.dispatch(|site| site.on_submit());
        })?);
        Ok(())
    }

    fn detach(&mut self) {
        self.listener = None;
    }
}
