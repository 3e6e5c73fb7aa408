//! One-shot reveal animation wrapper.
//!
//! DESIGN
//! ======
//! `RevealOnView` wraps arbitrary children in a `<div>` whose inline style
//! interpolates between a hidden and a visible pose via a CSS transition.
//! The pose is driven by a small one-way latch (`RevealState`): ungated
//! instances are visible from mount, gated instances stay hidden until the
//! element first intersects the viewport by at least a configured fraction.
//! Once visible, an instance never reverts, regardless of further scrolling.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::prelude::*;

/// Base start offset in seconds added to every instance's configured delay,
/// so a batch of simultaneously mounted reveals does not start in lockstep.
pub const BASE_DELAY_SECONDS: f64 = 0.04;

/// Latching visibility state for a single mounted reveal instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    gate_enabled: bool,
    visible_threshold: f64,
    has_been_visible: bool,
}

impl RevealState {
    /// Create the initial (not yet latched) state. The threshold is clamped
    /// into `0.0..=1.0`; values outside that range are meaningless to the
    /// intersection primitive.
    #[must_use]
    pub fn new(gate_enabled: bool, visible_threshold: f64) -> Self {
        Self {
            gate_enabled,
            visible_threshold: visible_threshold.clamp(0.0, 1.0),
            has_been_visible: false,
        }
    }

    /// Whether the wrapped content should currently render in its visible
    /// pose. Ungated instances are always visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.gate_enabled || self.has_been_visible
    }

    #[must_use]
    pub fn gate_enabled(&self) -> bool {
        self.gate_enabled
    }

    #[must_use]
    pub fn has_been_visible(&self) -> bool {
        self.has_been_visible
    }

    #[must_use]
    pub fn visible_threshold(&self) -> f64 {
        self.visible_threshold
    }

    /// Record an observed intersection ratio. Returns `true` only on the
    /// transition that latches the state visible; the comparison is
    /// inclusive (`ratio >= threshold`) and repeat or sub-threshold
    /// observations never un-latch.
    pub fn record_intersection(&mut self, ratio: f64) -> bool {
        if self.has_been_visible || ratio < self.visible_threshold {
            return false;
        }
        self.has_been_visible = true;
        true
    }
}

/// The pair of inline-style poses a reveal interpolates between.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionShape {
    pub hidden: String,
    pub visible: String,
}

impl TransitionShape {
    /// Default shape: slide up from `y_offset_px`, fade in from fully
    /// transparent, and sharpen from `blur_radius`.
    #[must_use]
    pub fn blur_fade(y_offset_px: f64, blur_radius: &str) -> Self {
        Self {
            hidden: format!(
                "transform: translateY({}px); opacity: 0; filter: blur({blur_radius});",
                format_css_number(y_offset_px)
            ),
            visible: "transform: translateY(0px); opacity: 1; filter: blur(0px);".to_owned(),
        }
    }
}

/// Effective transition start offset: the caller-supplied delay plus the
/// fixed base offset applied inside the component.
#[must_use]
pub fn effective_delay_seconds(delay_seconds: f64) -> f64 {
    BASE_DELAY_SECONDS + delay_seconds
}

/// CSS `transition` declaration covering the three animated properties.
#[must_use]
pub fn transition_style(duration_seconds: f64, delay_seconds: f64, easing: &str) -> String {
    let duration = format_css_number(duration_seconds);
    let delay = format_css_number(effective_delay_seconds(delay_seconds));
    format!(
        "transition: transform {duration}s {easing} {delay}s, \
         opacity {duration}s {easing} {delay}s, \
         filter {duration}s {easing} {delay}s;"
    )
}

/// Format a float for CSS, rounding away accumulated f64 noise
/// (0.04 + 0.2 must print as 0.24, not 0.24000000000000002).
#[must_use]
pub fn format_css_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    format!("{rounded}")
}

/// Content wrapper applying a one-shot translate + opacity + blur fade-in,
/// either on mount or gated on first viewport entry.
#[component]
pub fn RevealOnView(
    /// Extra class on the wrapping `<div>`.
    #[prop(optional, into)]
    class: String,
    /// Transition length in seconds.
    #[prop(default = 0.4)]
    duration_seconds: f64,
    /// Extra delay before the transition starts, on top of the base offset.
    #[prop(default = 0.0)]
    delay_seconds: f64,
    /// Hidden-pose vertical displacement in pixels.
    #[prop(default = 6.0)]
    y_offset_px: f64,
    /// When true, wait for first viewport entry instead of revealing on mount.
    #[prop(default = false)]
    gate_on_visibility: bool,
    /// Fraction of the element that must intersect the viewport to reveal.
    #[prop(default = 0.5)]
    visible_threshold: f64,
    /// Hidden-pose blur amount, as a CSS length.
    #[prop(default = "6px".to_owned(), into)]
    blur_radius: String,
    /// Transition timing function.
    #[prop(default = "ease-out".to_owned(), into)]
    easing: String,
    /// Replacement hidden/visible pose pair for callers that need a
    /// different animation entirely.
    #[prop(optional)]
    shape: Option<TransitionShape>,
    children: Children,
) -> impl IntoView {
    let state = RwSignal::new(RevealState::new(gate_on_visibility, visible_threshold));
    // Flips on the first animation frame so the CSS transition plays even
    // for ungated instances, which are in the visible state from mount.
    let settled = RwSignal::new(false);
    let node_ref = NodeRef::<leptos::html::Div>::new();

    let shape = shape.unwrap_or_else(|| TransitionShape::blur_fade(y_offset_px, &blur_radius));
    let timing = transition_style(duration_seconds, delay_seconds, &easing);

    #[cfg(feature = "csr")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::util::in_view::{InViewHandle, observe_once};
        use crate::util::raf::on_next_frame;

        on_next_frame(move || {
            let _ = settled.try_set(true);
        });

        if gate_on_visibility {
            let subscription: Rc<RefCell<Option<InViewHandle>>> = Rc::new(RefCell::new(None));

            let register = Rc::clone(&subscription);
            Effect::new(move || {
                if state.get().has_been_visible() {
                    // Latched; the subscription has no further business.
                    register.borrow_mut().take();
                    return;
                }
                if register.borrow().is_some() {
                    return;
                }
                let Some(el) = node_ref.get() else {
                    return;
                };
                let observed = observe_once(&el, visible_threshold, move |ratio| {
                    let _ = state.try_update(|s| s.record_intersection(ratio));
                });
                *register.borrow_mut() = observed;
            });

            let retired = Rc::clone(&subscription);
            on_cleanup(move || {
                retired.borrow_mut().take();
            });
        }
    }

    #[cfg(not(feature = "csr"))]
    let _ = settled.try_set(true);

    let style = move || {
        let pose = if settled.get() && state.get().is_visible() {
            shape.visible.clone()
        } else {
            shape.hidden.clone()
        };
        format!("{pose} {timing}")
    };

    view! {
        <div class=class node_ref=node_ref style=style>
            {children()}
        </div>
    }
}
