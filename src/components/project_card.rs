//! Project cards for the projects grid.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::data::resume::{Project, ProjectLink};

/// Card showing a project's image, dates, description, technology tags,
/// and external links.
#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="project-card">
            <a class="project-card__media" href=project.href target="_blank" rel="noopener noreferrer">
                {(!project.image.is_empty())
                    .then(|| view! { <img class="project-card__image" src=project.image alt=project.title/> })}
            </a>
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <span class="project-card__dates">{project.dates}</span>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__tags">
                    {project
                        .technologies
                        .iter()
                        .map(|tag| view! { <Badge label=*tag/> })
                        .collect::<Vec<_>>()}
                </div>
                {(!project.links.is_empty())
                    .then(|| {
                        view! {
                            <div class="project-card__links">
                                {project
                                    .links
                                    .iter()
                                    .map(|link| view! { <ProjectLinkChip link=link/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
fn ProjectLinkChip(link: &'static ProjectLink) -> impl IntoView {
    view! {
        <a class="project-card__link" href=link.href target="_blank" rel="noopener noreferrer">
            {link.kind.label()}
        </a>
    }
}
