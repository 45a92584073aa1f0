use std::rc::Rc;

use crate::cleanup::Cleanup;
use crate::event::{EventHandler, EventName};
use crate::map::ListenerMap;
use crate::target::{EventTarget, TargetRef};

/// A target plus the listeners to attach to it.
///
/// Nothing touches the target until [`mount`](Binding::mount); the value
/// can be built, cloned, and stored freely before that. Each mount
/// attaches every listener in map order and hands back a [`Cleanup`]
/// that detaches exactly those registrations, so mount/cleanup pairs
/// from separate mounts never interfere.
#[derive(Clone)]
pub struct Binding {
    target: TargetRef,
    listeners: ListenerMap,
}

impl Binding {
    pub fn new(target: TargetRef, listeners: impl Into<ListenerMap>) -> Self {
        Self {
            target,
            listeners: listeners.into(),
        }
    }

    /// Attaches all listeners and returns the cleanup that detaches them.
    pub fn mount(&self) -> Cleanup {
        for (name, handler) in self.listeners.iter() {
            log::debug!("attach '{name}'");
            self.target.add_listener(name, handler);
        }
        let target = Rc::clone(&self.target);
        let listeners = self.listeners.clone();
        Cleanup::new(move || {
            for (name, handler) in listeners.iter() {
                log::debug!("detach '{name}'");
                target.remove_listener(name, handler);
            }
        })
    }

    /// Effect-shaped view of the binding: call to mount, run the
    /// returned [`Cleanup`] to unmount. Calling again remounts.
    pub fn into_effect(self) -> impl Fn() -> Cleanup + 'static {
        move || self.mount()
    }

    pub fn listeners(&self) -> &ListenerMap {
        &self.listeners
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

/// Binds one handler to one event on `target`.
pub fn bind_listener(
    target: TargetRef,
    event: impl Into<EventName>,
    handler: EventHandler,
) -> Binding {
    Binding::new(target, ListenerMap::new().on(event, handler))
}

/// Binds every entry of `listeners` to `target`.
pub fn bind_all_listeners(target: TargetRef, listeners: impl Into<ListenerMap>) -> Binding {
    Binding::new(target, listeners)
}
