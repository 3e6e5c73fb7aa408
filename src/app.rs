//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::theme_toggle::ThemeToggle;
use crate::data::resume::DATA;
use crate::pages::home::HomePage;

/// Root component: document metadata, theme toggle, and the one page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=DATA.name/>
        <ThemeToggle/>
        <HomePage/>
    }
}
