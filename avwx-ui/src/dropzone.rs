//! Drag-and-drop adapter for upload zones.
//!
//! Listeners are attached straight to the zone element with `web-sys`.
//! A drop hands the files to the zone's `<input type="file">` and fires
//! `change` on it, so dropped and picked files share one code path.
//! Dropping the binding removes every listener it added.

use crate::dom;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, Event};

/// Class set on the zone while a drag hovers over it.
pub const DRAG_OVER_CLASS: &str = "drag-over";

type Listener = Closure<dyn FnMut(Event)>;

pub struct DropZoneBinding {
    zone: Element,
    listeners: Vec<(&'static str, Listener)>,
}

fn highlight(zone: &Element, on: bool) {
    let classes = zone.class_list();
    let _ = if on {
        classes.add_1(DRAG_OVER_CLASS)
    } else {
        classes.remove_1(DRAG_OVER_CLASS)
    };
}

impl DropZoneBinding {
    /// Bind the zone `zone_id` to the input `input_id`. `None` if the zone
    /// is not in the document yet.
    pub fn bind(zone_id: &str, input_id: &str) -> Option<Self> {
        let zone = dom::document()?.get_element_by_id(zone_id)?;
        let mut listeners: Vec<(&'static str, Listener)> = Vec::new();

        for name in ["dragenter", "dragover"] {
            let target = zone.clone();
            let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                event.prevent_default();
                event.stop_propagation();
                highlight(&target, true);
            });
            listeners.push((name, listener));
        }

        let target = zone.clone();
        let leave = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            event.stop_propagation();
            highlight(&target, false);
        });
        listeners.push(("dragleave", leave));

        let target = zone.clone();
        let input_id = input_id.to_string();
        let drop = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            event.stop_propagation();
            highlight(&target, false);
            let files = event
                .dyn_ref::<DragEvent>()
                .and_then(DragEvent::data_transfer)
                .and_then(|transfer| transfer.files());
            match files {
                Some(files) if files.length() > 0 => {
                    if let Err(e) = dom::attach_files(&input_id, &files) {
                        warn!("drop on {} failed: {}", input_id, dom::js_error_message(e));
                    }
                }
                _ => {}
            }
        });
        listeners.push(("drop", drop));

        for (name, listener) in &listeners {
            if let Err(e) =
                zone.add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
            {
                warn!("could not bind {} on {}: {}", name, zone_id, dom::js_error_message(e));
            }
        }

        Some(Self { zone, listeners })
    }
}

impl Drop for DropZoneBinding {
    fn drop(&mut self) {
        for (name, listener) in &self.listeners {
            let _ = self
                .zone
                .remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref());
        }
    }
}
