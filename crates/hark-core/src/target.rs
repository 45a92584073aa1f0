use std::rc::Rc;

use crate::event::EventHandler;

/// Anything listeners can be attached to.
///
/// Registration takes `&self`: targets are shared behind `Rc`, so
/// implementors keep their listener storage in interior mutability
/// (typically a `RefCell`).
///
/// Removal matches by handler identity ([`EventHandler::ptr_eq`]), and a
/// remove call for a handler that was never added must be a no-op. That
/// contract is what lets a [`Binding`](crate::binding::Binding) undo
/// exactly the registrations it made and nothing else.
pub trait EventTarget {
    fn add_listener(&self, event: &str, handler: &EventHandler);
    fn remove_listener(&self, event: &str, handler: &EventHandler);
}

pub type TargetRef = Rc<dyn EventTarget>;
