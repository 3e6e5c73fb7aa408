//! Avatar image with initials fallback.

use leptos::prelude::*;

/// Round avatar: shows the image when a URL is configured, otherwise the
/// visitor sees the initials as a fallback.
#[component]
pub fn Avatar(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(into)] fallback: String,
) -> impl IntoView {
    view! {
        <span class="avatar">
            {if src.is_empty() {
                view! { <span class="avatar__fallback">{fallback}</span> }.into_any()
            } else {
                view! { <img class="avatar__image" src=src alt=alt/> }.into_any()
            }}
        </span>
    }
}
