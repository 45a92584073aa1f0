use std::cell::RefCell;
use std::rc::Rc;

/// Undo side of a binding: detaches the listeners the mount attached.
#[derive(Clone)]
pub struct Cleanup(Rc<RefCell<Option<Box<dyn FnOnce()>>>>);

impl Cleanup {
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(Box::new(f)))))
    }

    /// Runs at most once (safe to call multiple times).
    pub fn run(&self) {
        if let Some(f) = self.0.borrow_mut().take() {
            f()
        }
    }

    /// True once [`run`](Cleanup::run) has consumed the closure.
    pub fn is_done(&self) -> bool {
        self.0.borrow().is_none()
    }
}

impl std::fmt::Debug for Cleanup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cleanup")
            .field("done", &self.is_done())
            .finish()
    }
}
