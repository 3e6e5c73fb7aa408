//! Small pill label used for skills and technology tags.

use leptos::prelude::*;

#[component]
pub fn Badge(#[prop(into)] label: String) -> impl IntoView {
    view! { <span class="badge">{label}</span> }
}
