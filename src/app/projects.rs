use leptos::{ev::MouseEvent, html, prelude::*};

use super::animations::Reveal;
use crate::motion::{Tilt, TILT_RESET_TRANSFORM};

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Portfolio Website",
        description: "This site: server rendered with Leptos and hydrated to WebAssembly, with a contact form that delivers straight to my inbox.",
        tags: &["Rust", "Leptos", "WASM"],
        link: None,
    },
    Project {
        title: "Student Information System",
        description: "Enrollment, grading and class scheduling for a small campus, built as a capstone project.",
        tags: &["PHP", "MySQL", "Bootstrap"],
        link: None,
    },
    Project {
        title: "Weather Dashboard",
        description: "Responsive forecast dashboard pulling live data from a public weather API.",
        tags: &["JavaScript", "REST", "CSS Grid"],
        link: None,
    },
];

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let card = NodeRef::<html::Div>::new();
    let (transform, set_transform) = signal(TILT_RESET_TRANSFORM.to_string());

    let on_move = move |ev: MouseEvent| {
        let el = if let Some(el) = card.get_untracked() {
            el
        } else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let tilt = Tilt::from_pointer(
            ev.client_x() as f64 - rect.left(),
            ev.client_y() as f64 - rect.top(),
            rect.width(),
            rect.height(),
        );
        set_transform.set(tilt.transform());
    };

    view! {
        <Reveal class="project-card-wrapper">
            <div
                class="project-card"
                node_ref=card
                style:transform=move || transform.get()
                on:mousemove=on_move
                on:mouseleave=move |_| set_transform.set(TILT_RESET_TRANSFORM.to_string())
            >
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="tags">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="tag">{*tag}</span> })
                        .collect_view()}
                </div>
                {project
                    .link
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="project-link">
                                "View project →"
                            </a>
                        }
                    })}
            </div>
        </Reveal>
    }
}
