//! Scroll tracking for the fixed navbar.

use leptos::prelude::*;
use leptos::__reexports::send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

/// Offset in pixels past which the navbar drops its transparent treatment.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Strict step function of the current offset. No hysteresis.
pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Watches the window's vertical scroll offset.
///
/// Registers a single `scroll` listener when the owning component mounts
/// and removes it again when that component is unmounted, so remounting
/// never accumulates listeners. The signal starts out `false` and only
/// changes when a scroll event arrives; without a window (or if
/// registration fails) it keeps its last value.
pub fn use_scrolled() -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            log::warn!("no window available, navbar stays transparent");
            return;
        };

        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            if let Some(window) = web_sys::window() {
                if let Ok(offset) = window.scroll_y() {
                    set_scrolled.set(is_past_threshold(offset));
                }
            }
        });

        // `on_cleanup` requires `Send + Sync`, which the wasm-bindgen `Closure`
        // is not. WASM is single-threaded, so wrapping it lets the closure
        // satisfy the bound without ever being touched off-thread.
        let on_scroll = SendWrapper::new(on_scroll);

        if window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
            .is_err()
        {
            return;
        }

        // The closure moves into the cleanup, keeping it alive exactly as
        // long as the listener is attached.
        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    on_scroll.as_ref().unchecked_ref(),
                );
            }
        });
    });

    scrolled
}
