//! Single-page portfolio layout.
//!
//! ARCHITECTURE
//! ============
//! The page walks the static resume record section by section and wraps
//! every block in `RevealOnView`. Sections near the top of the page reveal
//! on mount with staggered delays; below-the-fold sections gate their
//! reveal on first viewport entry. A section renders only when its backing
//! data is non-empty.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::badge::Badge;
use crate::components::markdown::Markdown;
use crate::components::project_card::ProjectCard;
use crate::components::publication_card::PublicationCard;
use crate::components::resume_card::ResumeCard;
use crate::components::reveal::RevealOnView;
use crate::data::resume::{DATA, first_name, period};

/// Per-section delay step in seconds.
const SECTION_STEP: f64 = 0.04;
/// Additional per-item delay within a list section.
const ITEM_STAGGER: f64 = 0.05;

fn section_delay(step: u32) -> f64 {
    f64::from(step) * SECTION_STEP
}

#[allow(clippy::cast_precision_loss)]
fn item_delay(step: u32, index: usize) -> f64 {
    section_delay(step) + index as f64 * ITEM_STAGGER
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page">
            <Hero/>
            <About/>
            <Work/>
            <EducationSection/>
            <Skills/>
            <Projects/>
            <Publications/>
            <Courses/>
            <Contact/>
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="hero__intro">
                <RevealOnView delay_seconds=section_delay(1) y_offset_px=8.0>
                    <h1 class="hero__name">{format!("Hi, I'm {} \u{1f44b}", first_name(&DATA))}</h1>
                </RevealOnView>
                {(!DATA.description.is_empty())
                    .then(|| {
                        view! {
                            <RevealOnView delay_seconds=section_delay(1)>
                                <p class="hero__description">{DATA.description}</p>
                            </RevealOnView>
                        }
                    })}
            </div>
            <RevealOnView delay_seconds=section_delay(1)>
                <Avatar src=DATA.avatar_url alt=DATA.name fallback=DATA.initials/>
            </RevealOnView>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    (!DATA.summary.is_empty()).then(|| {
        view! {
            <section id="about" class="section">
                <RevealOnView delay_seconds=section_delay(3)>
                    <h2 class="section__title">"About"</h2>
                </RevealOnView>
                <RevealOnView delay_seconds=section_delay(4)>
                    <Markdown source=DATA.summary class="section__prose"/>
                </RevealOnView>
            </section>
        }
    })
}

#[component]
fn Work() -> impl IntoView {
    (!DATA.work.is_empty()).then(|| {
        view! {
            <section id="work" class="section">
                <RevealOnView delay_seconds=section_delay(5)>
                    <h2 class="section__title">"Work Experience"</h2>
                </RevealOnView>
                {DATA
                    .work
                    .iter()
                    .enumerate()
                    .map(|(index, work)| {
                        view! {
                            <RevealOnView delay_seconds=item_delay(6, index)>
                                <ResumeCard
                                    logo_url=work.logo_url
                                    alt_text=work.company
                                    title=work.company
                                    subtitle=work.title
                                    href=work.href
                                    badges=work.badges.to_vec()
                                    period=period(work.start, work.end)
                                    description=work.description
                                />
                            </RevealOnView>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        }
    })
}

#[component]
fn EducationSection() -> impl IntoView {
    (!DATA.education.is_empty()).then(|| {
        view! {
            <section id="education" class="section">
                <RevealOnView delay_seconds=section_delay(7)>
                    <h2 class="section__title">"Education"</h2>
                </RevealOnView>
                {DATA
                    .education
                    .iter()
                    .enumerate()
                    .map(|(index, edu)| {
                        view! {
                            <RevealOnView delay_seconds=item_delay(8, index)>
                                <ResumeCard
                                    logo_url=edu.logo_url
                                    alt_text=edu.school
                                    title=edu.school
                                    subtitle=edu.degree
                                    href=edu.href
                                    period=period(edu.start, Some(edu.end))
                                    description=edu.description
                                />
                            </RevealOnView>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        }
    })
}

#[component]
fn Skills() -> impl IntoView {
    (!DATA.skills.is_empty()).then(|| {
        view! {
            <section id="skills" class="section">
                <RevealOnView delay_seconds=section_delay(9)>
                    <h2 class="section__title">"Skills"</h2>
                </RevealOnView>
                <div class="skills__list">
                    {DATA
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            view! {
                                <RevealOnView delay_seconds=item_delay(10, index)>
                                    <Badge label=*skill/>
                                </RevealOnView>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                {(!DATA.soft_skills.is_empty())
                    .then(|| {
                        view! {
                            <div class="skills__list skills__list--soft">
                                {DATA
                                    .soft_skills
                                    .iter()
                                    .enumerate()
                                    .map(|(index, skill)| {
                                        view! {
                                            <RevealOnView delay_seconds=item_delay(10, index)>
                                                <Badge label=*skill/>
                                            </RevealOnView>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })}
            </section>
        }
    })
}

#[component]
fn Projects() -> impl IntoView {
    (!DATA.projects.is_empty()).then(|| {
        view! {
            <section id="projects" class="section section--projects">
                <RevealOnView delay_seconds=section_delay(11) gate_on_visibility=true>
                    <div class="section__header">
                        <span class="section__eyebrow">"My Projects"</span>
                        <h2 class="section__headline">"Check out my latest work"</h2>
                        <p class="section__lede">
                            "I've worked on a variety of projects, from simple websites to \
                             complex web applications. Here are a few of my favorites."
                        </p>
                    </div>
                </RevealOnView>
                <div class="projects__grid">
                    {DATA
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <RevealOnView
                                    delay_seconds=item_delay(12, index)
                                    gate_on_visibility=true
                                    visible_threshold=0.3
                                >
                                    <ProjectCard project=project/>
                                </RevealOnView>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        }
    })
}

#[component]
fn Publications() -> impl IntoView {
    (!DATA.publications.is_empty()).then(|| {
        view! {
            <section id="publications" class="section">
                <RevealOnView delay_seconds=section_delay(13) gate_on_visibility=true>
                    <h2 class="section__title">"Publications"</h2>
                </RevealOnView>
                {DATA
                    .publications
                    .iter()
                    .enumerate()
                    .map(|(index, publication)| {
                        view! {
                            <RevealOnView
                                delay_seconds=item_delay(14, index)
                                gate_on_visibility=true
                                visible_threshold=0.3
                            >
                                <PublicationCard publication=publication/>
                            </RevealOnView>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        }
    })
}

#[component]
fn Courses() -> impl IntoView {
    (!DATA.courses.is_empty()).then(|| {
        view! {
            <section id="courses" class="section">
                <RevealOnView delay_seconds=section_delay(15) gate_on_visibility=true>
                    <h2 class="section__title">"Courses & Certifications"</h2>
                </RevealOnView>
                <ul class="courses__list">
                    {DATA
                        .courses
                        .iter()
                        .enumerate()
                        .map(|(index, course)| {
                            view! {
                                <RevealOnView
                                    delay_seconds=item_delay(16, index)
                                    gate_on_visibility=true
                                    visible_threshold=0.3
                                >
                                    <li class="courses__item">
                                        <a href=course.certificate target="_blank" rel="noopener noreferrer">
                                            {course.title}
                                        </a>
                                        <span class="courses__meta">
                                            {course.provider} " · " {course.year}
                                        </span>
                                    </li>
                                </RevealOnView>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
        }
    })
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <footer id="contact" class="contact">
            <RevealOnView delay_seconds=section_delay(17) gate_on_visibility=true visible_threshold=0.3>
                <h2 class="section__title">"Get in Touch"</h2>
                <p class="contact__location">
                    <a href=DATA.location_link target="_blank" rel="noopener noreferrer">
                        {DATA.location}
                    </a>
                </p>
                <div class="contact__links">
                    <a class="contact__link" href=format!("mailto:{}", DATA.contact.email)>
                        {DATA.contact.email}
                    </a>
                    <a class="contact__link" href=format!("tel:{}", DATA.contact.tel)>
                        {DATA.contact.tel}
                    </a>
                    {DATA
                        .contact
                        .social
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    class="contact__link"
                                    href=social.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {social.name}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </RevealOnView>
        </footer>
    }
}
