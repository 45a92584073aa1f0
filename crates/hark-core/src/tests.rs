#[cfg(test)]
mod tests {
    use crate::binding::{bind_all_listeners, bind_listener};
    use crate::event::{Event, EventHandler, handler};
    use crate::map::ListenerMap;
    use crate::target::{EventTarget, TargetRef};
    use crate::window::{bind_all_window_listeners, bind_window_listener, install_window_target};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingTarget {
        added: RefCell<Vec<(String, EventHandler)>>,
        removed: RefCell<Vec<(String, EventHandler)>>,
    }

    impl EventTarget for RecordingTarget {
        fn add_listener(&self, event: &str, handler: &EventHandler) {
            self.added
                .borrow_mut()
                .push((event.to_string(), handler.clone()));
        }

        fn remove_listener(&self, event: &str, handler: &EventHandler) {
            self.removed
                .borrow_mut()
                .push((event.to_string(), handler.clone()));
        }
    }

    #[test]
    fn test_bind_listener_roundtrip() {
        let target = Rc::new(RecordingTarget::default());
        let on_resize = handler(|_| {});

        let binding = bind_listener(target.clone(), "resize", on_resize.clone());
        let cleanup = binding.mount();

        {
            let added = target.added.borrow();
            assert_eq!(added.len(), 1);
            assert_eq!(added[0].0, "resize");
            assert!(EventHandler::ptr_eq(&added[0].1, &on_resize));
        }
        assert!(target.removed.borrow().is_empty());

        cleanup.run();

        let removed = target.removed.borrow();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].0, "resize");
        assert!(EventHandler::ptr_eq(&removed[0].1, &on_resize));
    }

    #[test]
    fn test_cleanup_runs_at_most_once() {
        let target = Rc::new(RecordingTarget::default());
        let cleanup = bind_listener(target.clone(), "resize", handler(|_| {})).mount();

        cleanup.run();
        cleanup.run();
        cleanup.run();

        assert_eq!(target.removed.borrow().len(), 1);
        assert!(cleanup.is_done());
    }

    #[test]
    fn test_mount_twice_registers_twice() {
        let target = Rc::new(RecordingTarget::default());
        let binding = bind_listener(target.clone(), "resize", handler(|_| {}));

        let first = binding.mount();
        let second = binding.mount();
        assert_eq!(target.added.borrow().len(), 2);

        // each cleanup undoes its own mount
        first.run();
        assert_eq!(target.removed.borrow().len(), 1);
        second.run();
        assert_eq!(target.removed.borrow().len(), 2);
    }

    #[test]
    fn test_bind_all_preserves_order() {
        let target = Rc::new(RecordingTarget::default());
        let on_move = handler(|_| {});
        let on_up = handler(|_| {});

        let cleanup = bind_all_listeners(
            target.clone(),
            [("pointermove", on_move.clone()), ("pointerup", on_up.clone())],
        )
        .mount();

        {
            let added = target.added.borrow();
            assert_eq!(added.len(), 2);
            assert_eq!(added[0].0, "pointermove");
            assert!(EventHandler::ptr_eq(&added[0].1, &on_move));
            assert_eq!(added[1].0, "pointerup");
            assert!(EventHandler::ptr_eq(&added[1].1, &on_up));
        }

        cleanup.run();

        let removed = target.removed.borrow();
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].0, "pointermove");
        assert!(EventHandler::ptr_eq(&removed[0].1, &on_move));
        assert_eq!(removed[1].0, "pointerup");
        assert!(EventHandler::ptr_eq(&removed[1].1, &on_up));
    }

    #[test]
    fn test_empty_map_mounts_to_noop() {
        let target = Rc::new(RecordingTarget::default());
        let cleanup = bind_all_listeners(target.clone(), ListenerMap::new()).mount();

        assert!(target.added.borrow().is_empty());
        cleanup.run();
        assert!(target.removed.borrow().is_empty());
    }

    #[test]
    fn test_absent_map_mounts_to_noop() {
        let target = Rc::new(RecordingTarget::default());
        let cleanup = bind_all_listeners(target.clone(), None).mount();

        assert!(target.added.borrow().is_empty());
        cleanup.run();
        assert!(target.removed.borrow().is_empty());
    }

    #[test]
    fn test_listener_map_replaces_in_place() {
        let second = handler(|_| {});

        let map = ListenerMap::new()
            .on("resize", handler(|_| {}))
            .on("scroll", handler(|_| {}))
            .on("resize", second.clone());

        assert_eq!(map.len(), 2);
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries[0].0, "resize");
        assert!(EventHandler::ptr_eq(entries[0].1, &second));
        assert_eq!(entries[1].0, "scroll");
    }

    #[test]
    fn test_into_effect_remounts_each_call() {
        let target = Rc::new(RecordingTarget::default());
        let effect = bind_listener(target.clone(), "resize", handler(|_| {})).into_effect();

        let first = effect();
        first.run();
        let second = effect();
        second.run();

        assert_eq!(target.added.borrow().len(), 2);
        assert_eq!(target.removed.borrow().len(), 2);
    }

    #[test]
    fn test_window_binding_uses_installed_target() {
        let target = Rc::new(RecordingTarget::default());
        install_window_target(target.clone()).unwrap();

        let cleanup = bind_window_listener("resize", handler(|_| {})).mount();
        assert_eq!(target.added.borrow().len(), 1);
        cleanup.run();
        assert_eq!(target.removed.borrow().len(), 1);
    }

    #[test]
    fn test_window_bind_all_uses_installed_target() {
        let target = Rc::new(RecordingTarget::default());
        install_window_target(target.clone()).unwrap();

        let cleanup = bind_all_window_listeners(
            ListenerMap::new()
                .on("resize", handler(|_| {}))
                .on("blur", handler(|_| {})),
        )
        .mount();

        assert_eq!(target.added.borrow().len(), 2);
        cleanup.run();
        assert_eq!(target.removed.borrow().len(), 2);
    }

    #[test]
    fn test_headless_fallback_is_sticky() {
        // No install: mounting falls back to the stub without panicking.
        let cleanup = bind_window_listener("resize", handler(|_| {})).mount();
        cleanup.run();

        // The fallback filled the slot, so a late install is rejected.
        let target = Rc::new(RecordingTarget::default());
        assert!(install_window_target(target).is_err());
    }

    #[test]
    fn test_install_window_target_twice_fails() {
        let a: TargetRef = Rc::new(RecordingTarget::default());
        let b: TargetRef = Rc::new(RecordingTarget::default());
        assert!(install_window_target(a).is_ok());
        assert!(install_window_target(b).is_err());
    }

    #[test]
    fn test_event_detail_downcast() {
        let resize = Event::with_detail("resize", (800u32, 600u32));
        assert_eq!(resize.name(), "resize");
        assert_eq!(resize.detail::<(u32, u32)>(), Some(&(800, 600)));
        assert!(resize.detail::<String>().is_none());

        let plain = Event::new("scroll");
        assert!(plain.detail::<(u32, u32)>().is_none());
    }
}
