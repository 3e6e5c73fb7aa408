//! Floating dark mode toggle.

use leptos::prelude::*;

use crate::util::dark_mode;

/// Button that applies the stored theme on mount and flips it on click.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let dark = RwSignal::new(false);

    // Runs once on mount: no reactive reads inside.
    Effect::new(move || {
        let preferred = dark_mode::read_preference();
        dark_mode::apply(preferred);
        dark.set(preferred);
    });

    let on_toggle = move |_| {
        let next = dark_mode::toggle(dark.get_untracked());
        dark.set(next);
    };

    view! {
        <button class="theme-toggle" on:click=on_toggle aria-label="Toggle dark mode">
            {move || if dark.get() { "\u{2600}" } else { "\u{263e}" }}
        </button>
    }
}
