use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config::SiteConfig;
use crate::scroll::{self, SectionBounds};

pub const SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

pub fn smooth_scroll_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Smooth-scrolls so `#id` sits just below the fixed header. False when
/// there is no such section.
pub fn scroll_to_section(id: &str) -> bool {
    let section = if let Some(s) = section_bounds(id) {
        s
    } else {
        log::warn!("no section #{id} to scroll to");
        return false;
    };
    smooth_scroll_to(scroll::nav_target(section.top));
    true
}

fn section_bounds(id: &str) -> Option<SectionBounds> {
    let el = document()
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some(SectionBounds {
        id: id.to_string(),
        top: el.offset_top() as f64,
        height: el.offset_height() as f64,
    })
}

#[component]
pub fn Header() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(None::<String>);
    let (progress, set_progress) = signal(0.0_f64);

    // geometry only exists in the browser, so read it from an effect
    Effect::new(move |_| {
        let y = scroll_y.get();
        let sections = SECTIONS
            .iter()
            .filter_map(|(id, _)| section_bounds(id))
            .collect::<Vec<_>>();
        set_active.set(scroll::active_section(&sections, y).map(str::to_string));

        if let Some(root) = document().document_element() {
            set_progress.set(scroll::scroll_progress(
                root.scroll_top() as f64,
                root.scroll_height() as f64,
                root.client_height() as f64,
            ));
        }
    });

    let go_to = move |ev: MouseEvent, id: &str| {
        ev.prevent_default();
        if scroll_to_section(id) {
            set_menu_open.set(false);
        }
    };

    view! {
        <div class="progress-bar" style:width=move || format!("{}%", progress.get())></div>
        <header class="header" class:scrolled=move || scroll::header_scrolled(scroll_y.get())>
            <nav class="nav">
                <a href="#home" class="logo" on:click=move |ev| go_to(ev, "home")>
                    {config.owner.clone()}
                </a>
                <ul class="nav-list" class:active=move || menu_open.get()>
                    {SECTIONS
                        .into_iter()
                        .map(|(id, label)| {
                            view! {
                                <li>
                                    <NavLink
                                        id
                                        label
                                        active=Signal::derive(move || {
                                            active.get().as_deref() == Some(id)
                                        })
                                        on_click=Callback::new(move |ev| go_to(ev, id))
                                    />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="hamburger"
                    class:active=move || menu_open.get()
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}

#[component]
fn NavLink(
    id: &'static str,
    label: &'static str,
    active: Signal<bool>,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <a
            href=format!("#{id}")
            class="nav-link"
            class:active=move || active.get()
            on:click=move |ev| on_click.run(ev)
        >
            {label}
        </a>
    }
}
