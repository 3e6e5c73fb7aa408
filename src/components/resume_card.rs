//! Work experience and education rows.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::badge::Badge;

/// A dated entry with a logo, heading, optional badges, and a description.
/// Shared by the work and education sections.
#[component]
pub fn ResumeCard(
    #[prop(into)] logo_url: String,
    #[prop(into)] alt_text: String,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: String,
    #[prop(into)] href: String,
    #[prop(optional)] badges: Vec<&'static str>,
    #[prop(into)] period: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    let initials = title.chars().next().map(String::from).unwrap_or_default();

    view! {
        <a class="resume-card" href=href target="_blank" rel="noopener noreferrer">
            <Avatar src=logo_url alt=alt_text fallback=initials/>
            <div class="resume-card__body">
                <div class="resume-card__heading">
                    <h3 class="resume-card__title">{title}</h3>
                    {(!badges.is_empty())
                        .then(|| {
                            view! {
                                <span class="resume-card__badges">
                                    {badges
                                        .into_iter()
                                        .map(|badge| view! { <Badge label=badge/> })
                                        .collect::<Vec<_>>()}
                                </span>
                            }
                        })}
                    <span class="resume-card__period">{period}</span>
                </div>
                {(!subtitle.is_empty())
                    .then(|| view! { <div class="resume-card__subtitle">{subtitle}</div> })}
                {(!description.is_empty())
                    .then(|| view! { <p class="resume-card__description">{description}</p> })}
            </div>
        </a>
    }
}
