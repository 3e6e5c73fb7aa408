//! One-shot viewport intersection observation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin wrapper over `IntersectionObserver` so components can ask "tell me
//! once when this element is sufficiently on screen" without touching
//! web-sys directly. Browser-only; native builds compile this module empty.

#[cfg(feature = "csr")]
use std::cell::Cell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Owns a live observation. Dropping the handle disconnects the observer,
/// so a callback can never fire against an unmounted component.
#[cfg(feature = "csr")]
pub struct InViewHandle {
    observer: web_sys::IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array)>,
}

#[cfg(feature = "csr")]
impl Drop for InViewHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe `target` and invoke `on_enter(ratio)` at most once, on the first
/// entry whose intersection ratio reaches `threshold` (inclusive).
///
/// The at-most-once policy is enforced by an explicit fired guard rather
/// than trusting the primitive, so the callback stays single-shot even if
/// the browser reports several qualifying entries in one batch.
///
/// Returns `None` if the observer cannot be constructed; callers treat that
/// as "content never reveals", a visual-only degradation.
#[cfg(feature = "csr")]
pub fn observe_once(
    target: &web_sys::Element,
    threshold: f64,
    mut on_enter: impl FnMut(f64) + 'static,
) -> Option<InViewHandle> {
    let threshold = threshold.clamp(0.0, 1.0);
    let fired = Rc::new(Cell::new(false));

    let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new({
        let fired = Rc::clone(&fired);
        move |entries: js_sys::Array| {
            if fired.get() {
                return;
            }
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let ratio = entry.intersection_ratio();
                if ratio >= threshold {
                    fired.set(true);
                    on_enter(ratio);
                    break;
                }
            }
        }
    });

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));

    let observer = match web_sys::IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("intersection observer unavailable: {err:?}");
            return None;
        }
    };
    observer.observe(target);

    Some(InViewHandle { observer, _on_intersect: on_intersect })
}
