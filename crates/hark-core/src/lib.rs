//! # Listener Bindings
//!
//! Hark turns an event target's add/remove pair into a mount/cleanup
//! pair, the shape an effect hook expects. A [`Binding`] is the inert
//! description; mounting it attaches the listeners and returns a
//! [`Cleanup`] that detaches exactly what was attached.
//!
//! ## Binding a target
//!
//! Any type that implements [`EventTarget`] can be bound. Removal goes
//! by handler identity, so the cleanup only ever touches its own
//! registrations:
//!
//! ```rust
//! use hark_core::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[derive(Default)]
//! struct Bus {
//!     listeners: RefCell<Vec<(String, EventHandler)>>,
//! }
//!
//! impl EventTarget for Bus {
//!     fn add_listener(&self, event: &str, handler: &EventHandler) {
//!         self.listeners.borrow_mut().push((event.into(), handler.clone()));
//!     }
//!     fn remove_listener(&self, event: &str, handler: &EventHandler) {
//!         self.listeners.borrow_mut().retain(|(n, h)| {
//!             !(n == event && EventHandler::ptr_eq(h, handler))
//!         });
//!     }
//! }
//!
//! let bus = Rc::new(Bus::default());
//!
//! let cleanup = bind_listener(bus.clone(), "resize", handler(|_| {})).mount();
//! assert_eq!(bus.listeners.borrow().len(), 1);
//!
//! cleanup.run();
//! assert!(bus.listeners.borrow().is_empty());
//! ```
//!
//! ## Listener maps
//!
//! [`ListenerMap`] carries several listeners for one target, in
//! insertion order. `bind_all_*` accepts a map, an array of pairs, or
//! `None` for no listeners at all:
//!
//! ```rust
//! use hark_core::*;
//!
//! let listeners = ListenerMap::new()
//!     .on("pointermove", handler(|_| {}))
//!     .on("pointerup", handler(|_| {}));
//!
//! let unmount = bind_all_window_listeners(listeners).mount();
//! unmount.run();
//! ```
//!
//! ## The window target
//!
//! `bind_window_listener` / `bind_all_window_listeners` go through a
//! per-thread window target. Install the real one once with
//! [`install_window_target`]; without one, bindings land on a headless
//! stub that warns and ignores registration, so the same code runs in
//! tests and server-side contexts without a window.

pub mod binding;
pub mod cleanup;
pub mod event;
pub mod map;
pub mod prelude;
pub mod target;
pub mod tests;
pub mod window;

pub use binding::*;
pub use cleanup::*;
pub use event::*;
pub use map::*;
pub use prelude::*;
pub use target::*;
pub use window::*;
