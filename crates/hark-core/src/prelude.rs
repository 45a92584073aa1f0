pub use crate::binding::{Binding, bind_all_listeners, bind_listener};
pub use crate::cleanup::Cleanup;
pub use crate::event::{Event, EventHandler, EventName, handler};
pub use crate::map::ListenerMap;
pub use crate::target::{EventTarget, TargetRef};
pub use crate::window::{
    HeadlessTarget, WindowTargetError, bind_all_window_listeners, bind_window_listener,
    install_window_target, window_target,
};
