//! Publication entries.

use leptos::prelude::*;

use crate::data::resume::Publication;

#[component]
pub fn PublicationCard(publication: &'static Publication) -> impl IntoView {
    view! {
        <a class="publication-card" href=publication.link target="_blank" rel="noopener noreferrer">
            <div class="publication-card__heading">
                <h3 class="publication-card__title">{publication.title}</h3>
                <span class="publication-card__year">{publication.year}</span>
            </div>
            <div class="publication-card__venue">
                {publication.kind} " · " {publication.venue}
            </div>
            <p class="publication-card__description">{publication.description}</p>
        </a>
    }
}
