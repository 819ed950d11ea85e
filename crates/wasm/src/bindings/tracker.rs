use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use sitewire_core::model::IntersectionEntry;
use sitewire_core::scheduler::FrameTick;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use tracing::{debug, error};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use super::Binding;
use crate::listener::Listener;
use crate::mount::Mount;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A live observer over every section. Disconnects when dropped.
struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Feeds section visibility into the tracker and rebuilds the observer
/// once layout settles after a resize.
#[derive(Default)]
pub struct TrackerBinding {
    listeners: Vec<Listener>,
    observer: Rc<RefCell<Option<SectionObserver>>>,
    frame: FrameCallback,
    pending_frame: Rc<Cell<Option<i32>>>,
    window: Option<Window>,
}

fn observe_sections(mount: &Rc<Mount>) -> Result<Option<SectionObserver>, JsValue> {
    let (margin, thresholds) = {
        let site = mount.site.borrow();
        let Some(window) = site.observation_window() else {
            return Ok(None);
        };
        (window.root_margin(), window.thresholds.clone())
    };

    let m = Rc::clone(mount);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let entries: Vec<IntersectionEntry> = entries
                .iter()
                .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|e| IntersectionEntry {
                    id: e.target().id(),
                    is_intersecting: e.is_intersecting(),
                    ratio: e.intersection_ratio(),
                })
                .collect();
            let scroll = m.scroll_metrics();
            m.dispatch(|site| site.on_intersections(&entries, scroll));
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&margin);
    let list = Array::new();
    for threshold in thresholds {
        list.push(&JsValue::from_f64(threshold));
    }
    options.set_threshold(&list);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for section in &mount.registry.sections {
        observer.observe(section);
    }
    Ok(Some(SectionObserver {
        observer,
        _callback: callback,
    }))
}

fn request_frame(window: &Window, frame: &FrameCallback, pending: &Cell<Option<i32>>) {
    let callback: Option<js_sys::Function> = frame
        .borrow()
        .as_ref()
        .map(|c| c.as_ref().unchecked_ref::<js_sys::Function>().clone());
    let Some(callback) = callback else {
        return;
    };
    match window.request_animation_frame(&callback) {
        Ok(id) => pending.set(Some(id)),
        Err(e) => error!(error = ?e, "requestAnimationFrame failed"),
    }
}

impl Binding for TrackerBinding {
    fn attach(&mut self, mount: &Rc<Mount>) -> Result<(), JsValue> {
        // Fragment changes highlight links even on pages without sections.
        let m = Rc::clone(mount);
        self.listeners.push(Listener::new(
            mount.window.as_ref(),
            "hashchange",
            move |_| {
                let hash = m.window.location().hash().unwrap_or_default();
                m.dispatch(|site| site.on_hash_change(&hash));
            },
        )?);

        if mount.registry.sections.is_empty() {
            return Ok(());
        }
        self.window = Some(mount.window.clone());

        // Replace any previous observer before creating the next one.
        self.observer.borrow_mut().take();
        *self.observer.borrow_mut() = observe_sections(mount)?;

        let m = Rc::clone(mount);
        let observer = Rc::clone(&self.observer);
        let frame = Rc::clone(&self.frame);
        let pending = Rc::clone(&self.pending_frame);
        *self.frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
            pending.set(None);
            let tick = m
                .site
                .borrow_mut()
                .on_frame(|| m.registry.header_height());
            match tick {
                FrameTick::Pending => request_frame(&m.window, &frame, &pending),
                FrameTick::Fire => {
                    observer.borrow_mut().take();
                    match observe_sections(&m) {
                        Ok(next) => {
                            debug!("section observer rebuilt");
                            *observer.borrow_mut() = next;
                        }
                        Err(e) => error!(error = ?e, "section observer rebuild failed"),
                    }
                }
                FrameTick::Idle => {}
            }
        }));

        let m = Rc::clone(mount);
        let frame = Rc::clone(&self.frame);
        let pending = Rc::clone(&self.pending_frame);
        self.listeners.push(Listener::new(
            mount.window.as_ref(),
            "resize",
            move |_| {
                let needs_frame = m.site.borrow_mut().on_resize();
                if needs_frame {
                    request_frame(&m.window, &frame, &pending);
                }
            },
        )?);
        Ok(())
    }

    fn detach(&mut self) {
        self.listeners.clear();
        if let (Some(window), Some(id)) = (&self.window, self.pending_frame.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        // The frame closure holds a handle to its own slot; clearing the
        // slot breaks that cycle.
        self.frame.borrow_mut().take();
        self.observer.borrow_mut().take();
        self.window = None;
    }
}
