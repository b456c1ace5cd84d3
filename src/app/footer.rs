use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::header::smooth_scroll_to;
use crate::config::SiteConfig;
use crate::scroll;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (built, year) = chrono::DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| (t.format("%b %e %Y").to_string(), t.format("%Y").to_string()))
        .unwrap_or_default();

    view! {
        <footer class="footer">
            <p>{format!("© {year} {}. All rights reserved.", config.owner)}</p>
            <p class="text-muted">
                <a href=format!("mailto:{}", config.contact_email)>{config.contact_email.clone()}</a>
                " · built " {built}
            </p>
        </footer>
        <BackToTop />
    }
}

#[component]
fn BackToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    view! {
        <button
            class="back-top"
            class:visible=move || scroll::back_to_top_visible(scroll_y.get())
            aria-label="Back to top"
            on:click=move |_| smooth_scroll_to(0.0)
        >
            "↑"
        </button>
    }
}
