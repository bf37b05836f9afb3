use leptos::prelude::*;

use crate::content::{
    Card, SectionId, CONTACT_LINKS, DESIGN_CARDS, DESIGN_TOOLS, FEATURED_PROJECT, GENRES,
    PROFILE, SKILLS, SOCIAL_CARDS, STATS, STRENGTHS, TOOL_CARDS,
};

use super::reveal::{Section, SkillBar};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
fn Heading(label: &'static str, title: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <div class="section-label">"✦ " {label}</div>
        <h2 class="section-title">{title} <br /> <em>{accent}</em></h2>
    }
}

#[component]
fn CardView(card: Card, #[prop(optional)] compact: bool) -> impl IntoView {
    view! {
        <div class=if compact { "card p-6" } else { "card" }>
            <div class="card-icon">{card.icon}</div>
            <div class="card-title">{card.title}</div>
            <p class="card-text">{card.text}</p>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Section id=SectionId::About>
            <Heading label="Introduction" title="Crafting Code" accent="& Creativity" />
            <div class="grid-2 gap-16">
                <div>
                    <p class="about-text">
                        "I'm a " <strong>"4th Year CSE student"</strong> " at "
                        {PROFILE.university}
                        ", building at the intersection of software engineering, AI, and visual design."
                    </p>
                    <p class="about-text">
                        "From developing " <strong>"AI-powered Telegram bots"</strong>
                        " to shooting portraits and designing brand visuals, I believe the best digital experiences are both technically sound and visually compelling."
                    </p>
                    <p class="about-text">
                        "Beyond code, I serve as " <strong>{PROFILE.position}</strong> " at "
                        {PROFILE.organization}
                        ", because technology should ultimately empower communities."
                    </p>
                    <div class="mt-8">
                        <div class="section-label mb-4">"Strengths"</div>
                        <div class="flex flex-wrap">
                            {STRENGTHS
                                .iter()
                                .map(|s| view! { <span class="tag">{*s}</span> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div>
                    <div class="grid grid-cols-2 gap-4 mb-8">
                        {STATS
                            .iter()
                            .map(|s| {
                                view! {
                                    <div class="stat">
                                        <span class="stat-num">{s.figure}</span>
                                        <span class="stat-label">{s.label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="card">
                        <div class="card-title">"🎓 Education"</div>
                        <p class="card-text">
                            {PROFILE.degree} <br />
                            <span class="text-gold">{PROFILE.university}</span> <br />
                            "Expected Graduation: " {PROFILE.graduation}
                        </p>
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <Section id=SectionId::Skills class="bg-white/[0.01]">
            <Heading label="Capabilities" title="Technical" accent="Arsenal" />
            <div class="grid-2 gap-16">
                <div>
                    <div class="section-label mb-6">"Proficiency"</div>
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillBar skill=*skill index /> })
                        .collect_view()}
                </div>
                <div>
                    <div class="section-label mb-6">"Tools & Technologies"</div>
                    <div class="grid grid-cols-1 gap-4">
                        {TOOL_CARDS
                            .iter()
                            .map(|card| view! { <CardView card=*card compact=true /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let project = FEATURED_PROJECT;

    view! {
        <Section id=SectionId::Projects>
            <Heading label="Work" title="Featured" accent="Projects" />
            <div class="project-card">
                <div class="project-header">
                    <div class="project-tech">{project.tech}</div>
                    <div class="project-name">{project.name}</div>
                    <p class="project-desc">{project.description}</p>
                </div>
                <div class="project-features">
                    {project
                        .features
                        .iter()
                        .map(|f| view! { <span class="feature-tag">{*f}</span> })
                        .collect_view()}
                </div>
                <div class="project-footer">
                    <span class="project-credit">{project.credit}</span>
                    <a
                        class="project-link"
                        href=project.repo_url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "View on GitHub →"
                    </a>
                </div>
            </div>
            <div class="placeholder-note">
                <p>"More projects in progress"</p>
            </div>
        </Section>
    }
}

#[component]
pub fn Design() -> impl IntoView {
    view! {
        <Section id=SectionId::Design>
            <Heading label="Visual Work" title="Design &" accent="Aesthetics" />
            <div class="grid gap-6 grid-cols-[repeat(auto-fit,minmax(250px,1fr))]">
                {DESIGN_CARDS.iter().map(|card| view! { <CardView card=*card /> }).collect_view()}
            </div>
            <div class="mt-12 flex flex-wrap gap-4">
                {DESIGN_TOOLS
                    .iter()
                    .map(|(label, tool)| {
                        view! {
                            <div class="tool-panel">
                                <div class="section-label mb-2">{*label}</div>
                                <div class="panel-title">{*tool}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Section>
    }
}

#[component]
pub fn Photography() -> impl IntoView {
    view! {
        <Section id=SectionId::Photography>
            <Heading label="Through the Lens" title="Photography" accent="Portfolio" />
            <div class="grid-2 gap-16 items-center">
                <div>
                    <p class="about-text">
                        "Photography for me is about finding the extraordinary in the ordinary: the interplay of "
                        <strong>"light and shadow"</strong>
                        ", the fleeting expression, the quiet landscape."
                    </p>
                    <p class="about-text">
                        "I work primarily in " <strong>"nature and portrait photography"</strong>
                        ", with an emphasis on composition, natural light, and visual storytelling."
                    </p>
                    <div class="mt-10">
                        <a
                            class="btn btn-outline"
                            href=PROFILE.instagram
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "View Portfolio on Instagram →"
                        </a>
                    </div>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    {GENRES
                        .iter()
                        .map(|g| {
                            view! {
                                <div class="card genre-tile">
                                    <div class="genre-icon">{g.icon}</div>
                                    <div class="card-title">{g.name}</div>
                                    <p class="card-text text-sm">{g.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn Social() -> impl IntoView {
    view! {
        <Section id=SectionId::Social>
            <Heading label="Community" title="Social Work &" accent="Leadership" />
            <div class="grid-2 gap-16">
                <div>
                    <div class="org-panel">
                        <div class="section-label">"Organization"</div>
                        <div class="panel-title mb-2">{PROFILE.organization}</div>
                        <div class="panel-caption">{PROFILE.position}</div>
                    </div>
                    <p class="about-text">
                        "True impact comes from combining technical expertise with "
                        <strong>"genuine community engagement"</strong> ". Through "
                        {PROFILE.organization}
                        ", I coordinate events, support student initiatives, and lead teams toward meaningful social outcomes."
                    </p>
                </div>
                <div class="grid grid-cols-1 gap-4">
                    {SOCIAL_CARDS
                        .iter()
                        .map(|card| view! { <CardView card=*card compact=true /> })
                        .collect_view()}
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <Section id=SectionId::Contact>
            <Heading label="Connect" title="Get in" accent="Touch" />
            <div class="grid-2 gap-16">
                <div>
                    <p class="about-text mb-12">
                        "Open to collaboration, freelance projects, and conversations about technology, design, and community. Let's build something meaningful together."
                    </p>
                    {CONTACT_LINKS
                        .iter()
                        .map(|c| {
                            let (target, rel) = if c.is_external() {
                                (Some("_blank"), Some("noopener noreferrer"))
                            } else {
                                (None, None)
                            };
                            view! {
                                <a class="contact-link" href=c.href target=target rel=rel>
                                    <span class="contact-icon">{c.icon}</span>
                                    <span class="contact-label">{c.label}</span>
                                    <span class="contact-value">{c.value}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-col gap-6">
                    <div class="quote-panel">
                        <div class="section-label mb-4">"Currently"</div>
                        <p class="quote">"\"" {PROFILE.currently} "\""</p>
                    </div>
                    <div class="location-panel">
                        <div class="section-label">"Location"</div>
                        <div class="panel-title">{PROFILE.location} ", " {PROFILE.country}</div>
                        <div class="panel-note">{PROFILE.availability}</div>
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="footer-inner">
                <div class="footer-name">{PROFILE.full_name()}</div>
                <div>
                    "© " {BUILD_YEAR} " · Built with Rust & Leptos · " {PROFILE.location} ", "
                    {PROFILE.country}
                </div>
                <div class="footer-roles">{PROFILE.role_line()}</div>
            </div>
        </footer>
    }
}
