//! In-process [`EventTarget`] with named channels, for demos, tests,
//! and headless services that want window-style listener wiring.
//!
//! ```rust
//! use hark_core::*;
//! use hark_emitter::Emitter;
//!
//! let bus = Emitter::shared();
//! let cleanup = bind_listener(bus.clone(), "tick", handler(|e| {
//!     assert_eq!(e.name(), "tick");
//! }))
//! .mount();
//!
//! bus.emit(&Event::new("tick"));
//! cleanup.run();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use hark_core::event::{Event, EventHandler, EventName};
use hark_core::target::EventTarget;

#[derive(Default)]
pub struct Emitter {
    listeners: RefCell<HashMap<EventName, Vec<EventHandler>>>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Rc`-wrapped emitter, ready to pass to `bind_*` as a target.
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Dispatches to every listener of `event.name()`, in registration
    /// order. Dispatch walks a snapshot, so a handler may add or remove
    /// listeners mid-emit; such changes apply from the next emit on.
    pub fn emit(&self, event: &Event) {
        let snapshot: Vec<EventHandler> = self
            .listeners
            .borrow()
            .get(event.name())
            .cloned()
            .unwrap_or_default();
        log::debug!("emit '{}' to {} listener(s)", event.name(), snapshot.len());
        for handler in &snapshot {
            handler.call(event);
        }
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.borrow().get(event).map_or(0, Vec::len)
    }
}

impl EventTarget for Emitter {
    fn add_listener(&self, event: &str, handler: &EventHandler) {
        self.listeners
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push(handler.clone());
    }

    fn remove_listener(&self, event: &str, handler: &EventHandler) {
        let mut listeners = self.listeners.borrow_mut();
        let Some(handlers) = listeners.get_mut(event) else {
            log::debug!("remove_listener('{event}'): no such channel");
            return;
        };
        // first matching registration only, so double-adds need double-removes
        if let Some(pos) = handlers
            .iter()
            .position(|h| EventHandler::ptr_eq(h, handler))
        {
            handlers.remove(pos);
            if handlers.is_empty() {
                listeners.remove(event);
            }
        } else {
            log::debug!("remove_listener('{event}'): handler not registered");
        }
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listeners = self.listeners.borrow();
        let mut map = f.debug_map();
        for (name, handlers) in listeners.iter() {
            map.entry(name, &handlers.len());
        }
        map.finish()
    }
}
