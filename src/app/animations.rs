use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::{self, Particle, COUNTER_TICK_MS, PARTICLE_COUNT, SKILL_FILL_DELAY_MS};

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const HALF_VISIBLE: f64 = 0.5;

/// Fades and slides its children in the first time they scroll into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|e| e.is_intersecting()) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![REVEAL_THRESHOLD])
            .root_margin(REVEAL_ROOT_MARGIN.to_string()),
    );

    view! {
        <div node_ref=target class=format!("reveal {class}") class:revealed=move || revealed.get()>
            {children()}
        </div>
    }
}

#[component]
pub fn SkillBar(name: &'static str, level: u8) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (filled, set_filled) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if filled.get_untracked() || !entries.iter().any(|e| e.is_intersecting()) {
                return;
            }
            set_timeout(
                move || set_filled.set(true),
                Duration::from_millis(SKILL_FILL_DELAY_MS),
            );
        },
        UseIntersectionObserverOptions::default().thresholds(vec![HALF_VISIBLE]),
    );

    view! {
        <div class="skill">
            <div class="skill-info">
                <span>{name}</span>
                <span>{format!("{level}%")}</span>
            </div>
            <div class="bar" node_ref=target>
                <div
                    class="fill"
                    data-width=level.to_string()
                    style:width=move || if filled.get() { format!("{level}%") } else { "0%".to_string() }
                ></div>
            </div>
        </div>
    }
}

/// Counts up from zero to `target` once it is half on screen.
#[component]
pub fn Counter(target: u32, label: &'static str) -> impl IntoView {
    let el = NodeRef::<html::Span>::new();
    let (value, set_value) = signal(0_u32);
    let started = StoredValue::new(false);
    let ticker = StoredValue::new(None::<IntervalHandle>);

    use_intersection_observer_with_options(
        el,
        move |entries, _| {
            if started.get_value() || !entries.iter().any(|e| e.is_intersecting()) {
                return;
            }
            started.set_value(true);
            let tick = move || {
                let next = motion::counter_next(value.get_untracked(), target);
                set_value.set(next);
                if next >= target {
                    if let Some(h) = ticker.get_value() {
                        h.clear();
                    }
                }
            };
            match set_interval_with_handle(tick, Duration::from_millis(COUNTER_TICK_MS)) {
                Ok(h) => ticker.set_value(Some(h)),
                Err(e) => {
                    log::error!("couldn't start counter: {e:?}");
                    set_value.set(target);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![HALF_VISIBLE]),
    );

    on_cleanup(move || {
        if let Some(Some(h)) = ticker.try_get_value() {
            h.clear();
        }
    });

    view! {
        <div class="stat">
            <span class="counter" data-target=target.to_string() node_ref=el>
                {move || value.get()}
            </span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

#[component]
pub fn Particles() -> impl IntoView {
    let (particles, set_particles) = signal(Vec::<Particle>::new());

    // random positions would never match the server render, so fill after mount
    Effect::new(move |_| {
        set_particles.set(motion::particles(PARTICLE_COUNT, js_sys::Math::random));
    });

    view! {
        <div id="particles" class="particles">
            {move || {
                particles
                    .get()
                    .into_iter()
                    .map(|p| view! { <div class="particle" style=p.style()></div> })
                    .collect_view()
            }}
        </div>
    }
}
