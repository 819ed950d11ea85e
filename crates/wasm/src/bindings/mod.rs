//! One binding per controller. A binding wires browser events to its
//! controller on `attach` and removes everything it installed on `detach`.

mod carousel;
mod contact_form;
mod dropdown;
mod nav;
mod tabs;
mod tracker;

use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::mount::Mount;

pub use carousel::CarouselBinding;
pub use contact_form::ContactFormBinding;
pub use dropdown::DropdownBinding;
pub use nav::NavBinding;
pub use tabs::TabsBinding;
pub use tracker::TrackerBinding;

pub trait Binding {
    /// Install listeners. Missing elements are skipped silently.
    fn attach(&mut self, mount: &Rc<Mount>) -> Result<(), JsValue>;

    /// Remove every listener and observer installed by `attach`.
    fn detach(&mut self);
}

pub fn all() -> Vec<Box<dyn Binding>> {
    vec![
        Box::new(NavBinding::default()),
        Box::new(TrackerBinding::default()),
        Box::new(TabsBinding::default()),
        Box::new(DropdownBinding::default()),
        Box::new(CarouselBinding::default()),
        Box::new(ContactFormBinding::default()),
    ]
}
