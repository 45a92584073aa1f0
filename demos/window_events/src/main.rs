use hark_core::prelude::*;
use hark_emitter::Emitter;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The emitter plays the window: install it once, then window-level
    // bindings attach to it.
    let window = Emitter::shared();
    install_window_target(window.clone())?;

    let on_resize = handler(|e: &Event| {
        if let Some(&(w, h)) = e.detail::<(u32, u32)>() {
            log::info!("resize: {w}x{h}");
        }
    });
    let on_redraw = handler(|_| log::info!("redraw requested"));

    let binding = bind_all_window_listeners(
        ListenerMap::new()
            .on("resize", on_resize)
            .on("redraw", on_redraw),
    );

    let cleanup = binding.mount();
    window.emit(&Event::with_detail("resize", (1280u32, 720u32)));
    window.emit(&Event::new("redraw"));

    cleanup.run();
    window.emit(&Event::new("redraw")); // nobody listening anymore

    // A thread that never installs a window lands on the headless stub:
    // mounting there warns and does nothing.
    std::thread::spawn(|| {
        let cleanup = bind_window_listener("resize", handler(|_| {})).mount();
        cleanup.run();
    })
    .join()
    .map_err(|_| anyhow::anyhow!("headless demo thread panicked"))?;

    Ok(())
}
