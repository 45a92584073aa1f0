use std::any::Any;
use std::rc::Rc;

pub type EventName = String;

/// A dispatched occurrence: a name plus an optional payload.
#[derive(Clone)]
pub struct Event {
    name: EventName,
    detail: Option<Rc<dyn Any>>,
}

impl Event {
    pub fn new(name: impl Into<EventName>) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }

    pub fn with_detail(name: impl Into<EventName>, detail: impl Any) -> Self {
        Self {
            name: name.into(),
            detail: Some(Rc::new(detail)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Payload downcast; `None` when absent or of a different type.
    pub fn detail<T: Any>(&self) -> Option<&T> {
        self.detail.as_deref().and_then(|d| d.downcast_ref())
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("detail", &self.detail.is_some())
            .finish()
    }
}

/// Shared callback invoked when a matching event fires.
///
/// Clones share the same underlying closure, so a clone compares equal
/// under [`EventHandler::ptr_eq`]. Identity is what a target matches on
/// when a listener is removed.
#[derive(Clone)]
pub struct EventHandler(Rc<dyn Fn(&Event)>);

impl EventHandler {
    pub fn new(f: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }

    /// True when both handlers wrap the same closure allocation.
    pub fn ptr_eq(a: &EventHandler, b: &EventHandler) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl std::fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHandler").finish_non_exhaustive()
    }
}

pub fn handler(f: impl Fn(&Event) + 'static) -> EventHandler {
    EventHandler::new(f)
}
