use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::binding::{Binding, bind_all_listeners, bind_listener};
use crate::event::{EventHandler, EventName};
use crate::map::ListenerMap;
use crate::target::{EventTarget, TargetRef};

thread_local! {
    static WINDOW_TARGET: RefCell<Option<TargetRef>> = RefCell::new(None);
}

#[derive(Debug, Error)]
pub enum WindowTargetError {
    /// A target is already in place, either a real one or the headless
    /// stub left behind by an earlier [`window_target`] call.
    #[error("window target already installed")]
    AlreadyInstalled,
}

/// Installs the target that window-level bindings attach to.
///
/// Call once, early. Each thread has its own slot, so installing on one
/// thread leaves the others on the headless stub.
pub fn install_window_target(target: TargetRef) -> Result<(), WindowTargetError> {
    WINDOW_TARGET.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return Err(WindowTargetError::AlreadyInstalled);
        }
        *slot = Some(target);
        Ok(())
    })
}

/// The installed window target, or the headless stub when none was
/// installed. Resolution is sticky: the first call fills the slot and
/// decides for the rest of the thread.
pub fn window_target() -> TargetRef {
    WINDOW_TARGET.with(|slot| {
        let mut slot = slot.borrow_mut();
        Rc::clone(slot.get_or_insert_with(|| {
            log::warn!("no window target installed; falling back to headless stub");
            Rc::new(HeadlessTarget)
        }))
    })
}

/// Stand-in window for environments without one. Registration calls
/// warn and do nothing, so window-level bindings mount harmlessly in
/// tests and server-side code.
#[derive(Debug, Default)]
pub struct HeadlessTarget;

impl EventTarget for HeadlessTarget {
    fn add_listener(&self, event: &str, _handler: &EventHandler) {
        log::warn!("headless window: add_listener('{event}') ignored");
    }

    fn remove_listener(&self, event: &str, _handler: &EventHandler) {
        log::warn!("headless window: remove_listener('{event}') ignored");
    }
}

/// [`bind_listener`] against the window target.
pub fn bind_window_listener(event: impl Into<EventName>, handler: EventHandler) -> Binding {
    bind_listener(window_target(), event, handler)
}

/// [`bind_all_listeners`] against the window target.
pub fn bind_all_window_listeners(listeners: impl Into<ListenerMap>) -> Binding {
    bind_all_listeners(window_target(), listeners)
}
