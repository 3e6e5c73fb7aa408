//! Single-shot animation-frame scheduling.
//!
//! Used to flip newly mounted content into its settled pose one frame after
//! the hidden pose has been committed, so CSS transitions actually run.

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Run `callback` on the next animation frame. Falls back to invoking the
/// callback immediately when no window (or scheduling) is available, so the
/// content still settles into its final pose.
#[cfg(feature = "csr")]
pub fn on_next_frame(callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        callback();
        return;
    };
    let closure = Closure::once_into_js(move |_timestamp: f64| callback());
    if window
        .request_animation_frame(closure.unchecked_ref())
        .is_err()
    {
        log::warn!("animation frame scheduling unavailable");
    }
}
