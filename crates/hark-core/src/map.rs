use smallvec::SmallVec;

use crate::event::{EventHandler, EventName};

/// Ordered event-name -> handler pairs for a single target.
///
/// Order is insertion order and is what [`Binding::mount`] walks when it
/// attaches and detaches listeners. Inserting a name that is already
/// present replaces the handler in place, keeping the original position.
///
/// [`Binding::mount`]: crate::binding::Binding::mount
#[derive(Clone, Default)]
pub struct ListenerMap {
    entries: SmallVec<[(EventName, EventHandler); 4]>,
}

impl ListenerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert.
    pub fn on(mut self, name: impl Into<EventName>, handler: EventHandler) -> Self {
        self.insert(name, handler);
        self
    }

    pub fn insert(&mut self, name: impl Into<EventName>, handler: EventHandler) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = handler;
        } else {
            self.entries.push((name, handler));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EventHandler)> {
        self.entries.iter().map(|(n, h)| (n.as_str(), h))
    }
}

impl std::fmt::Debug for ListenerMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(name, _)| name))
            .finish()
    }
}

/// `None` means no listeners at all; the binding mounts to a no-op.
impl From<Option<ListenerMap>> for ListenerMap {
    fn from(map: Option<ListenerMap>) -> Self {
        map.unwrap_or_default()
    }
}

impl<S: Into<EventName>, const N: usize> From<[(S, EventHandler); N]> for ListenerMap {
    fn from(entries: [(S, EventHandler); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<S: Into<EventName>> From<Vec<(S, EventHandler)>> for ListenerMap {
    fn from(entries: Vec<(S, EventHandler)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<S: Into<EventName>> FromIterator<(S, EventHandler)> for ListenerMap {
    fn from_iter<I: IntoIterator<Item = (S, EventHandler)>>(iter: I) -> Self {
        let mut map = ListenerMap::new();
        for (name, handler) in iter {
            map.insert(name, handler);
        }
        map
    }
}
