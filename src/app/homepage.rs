use leptos::prelude::*;
use leptos_meta::Title;

use super::animations::{Counter, Particles, Reveal, SkillBar};
use super::contact::ContactSection;
use super::header::scroll_to_section;
use super::projects::{ProjectCard, PROJECTS};
use super::typing::TypingText;
use crate::config::SiteConfig;

const SERVICES: [(&str, &str, &str); 3] = [
    (
        "💻",
        "Web Development",
        "Responsive, fast websites built with modern HTML, CSS and JavaScript frameworks.",
    ),
    (
        "🎨",
        "UI/UX Design",
        "Clean interfaces designed around how people actually use them.",
    ),
    (
        "🛠️",
        "Maintenance",
        "Keeping existing sites up to date, secure and running smoothly.",
    ),
];

const SKILLS: [(&str, &[(&str, u8)]); 2] = [
    (
        "Frontend",
        &[("HTML & CSS", 90), ("JavaScript", 80), ("Rust / WASM", 60)],
    ),
    (
        "Backend & Tools",
        &[("PHP & MySQL", 75), ("Git", 80), ("Figma", 70)],
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    view! {
        <Title text="Portfolio" />
        <section id="home" class="hero">
            <Particles />
            <div class="hero-content">
                <p class="greeting">"Hello, I'm"</p>
                <h1 class="hero-name">{config.owner.clone()}</h1>
                <h2 class="hero-role">
                    <TypingText />
                </h2>
                <button
                    class="btn"
                    on:click=move |_| {
                        scroll_to_section("contact");
                    }
                >
                    "Hire Me"
                </button>
            </div>
        </section>

        <section id="about" class="section">
            <h2 class="section-title">"About Me"</h2>
            <div class="about-grid">
                <Reveal class="info-card">
                    <p>
                        "I'm an IT student who loves turning ideas into things people can click on. Most days you'll find me building web apps, sketching interfaces, or learning a new language."
                    </p>
                </Reveal>
                <Reveal class="info-card stats">
                    <Counter target=12 label="Projects" />
                    <Counter target=3 label="Years Coding" />
                    <Counter target=8 label="Technologies" />
                </Reveal>
            </div>
        </section>

        <section id="services" class="section">
            <h2 class="section-title">"Services"</h2>
            <div class="services-grid">
                {SERVICES
                    .into_iter()
                    .map(|(icon, title, text)| {
                        view! {
                            <Reveal class="service-card">
                                <div class="service-icon">{icon}</div>
                                <h3>{title}</h3>
                                <p>{text}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section id="skills" class="section">
            <h2 class="section-title">"Skills"</h2>
            <div class="skills-grid">
                {SKILLS
                    .into_iter()
                    .map(|(category, skills)| {
                        view! {
                            <Reveal class="skill-category">
                                <h3>{category}</h3>
                                {skills
                                    .iter()
                                    .map(|(name, level)| view! { <SkillBar name=*name level=*level /> })
                                    .collect_view()}
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section id="projects" class="section">
            <h2 class="section-title">"Projects"</h2>
            <div class="projects-grid">
                {PROJECTS
                    .into_iter()
                    .map(|project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </section>

        <ContactSection />
    }
}
