use sitewire_protocol::DomCommand;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlFormElement, ScrollBehavior, ScrollToOptions, Window};

use crate::registry::Registry;

/// Apply commands in order. Targets that did not resolve at mount time are
/// skipped.
pub fn apply(registry: &Registry, window: &Window, commands: &[DomCommand]) -> Result<(), JsValue> {
    for command in commands {
        if let DomCommand::Alert { message } = command {
            window.alert_with_message(message)?;
            continue;
        }
        let Some(el) = command.target().and_then(|t| registry.resolve(t)) else {
            continue;
        };
        match command {
            DomCommand::SetClass { class, on, .. } => {
                el.class_list().toggle_with_force(class.as_str(), *on)?;
            }
            DomCommand::SetAttribute { name, value, .. } => {
                el.set_attribute(name.as_str(), value)?;
            }
            DomCommand::SetText { text, .. } => el.set_text_content(Some(text)),
            DomCommand::ScrollBy { left, smooth, .. } => {
                let options = ScrollToOptions::new();
                options.set_left(*left);
                if *smooth {
                    options.set_behavior(ScrollBehavior::Smooth);
                }
                el.scroll_by_with_scroll_to_options(&options);
            }
            DomCommand::ResetForm { .. } => {
                if let Some(form) = el.dyn_ref::<HtmlFormElement>() {
                    form.reset();
                }
            }
            DomCommand::Alert { .. } => {}
        }
    }
    Ok(())
}
