use std::time::Duration;

use leptos::prelude::*;

const HIDE_AFTER: Duration = Duration::from_millis(1000);
// matches the fade-out transition in input.css
const REMOVE_AFTER_HIDE: Duration = Duration::from_millis(500);

#[component]
pub fn Loader() -> impl IntoView {
    let (hidden, set_hidden) = signal(false);
    let (removed, set_removed) = signal(false);

    Effect::new(move |_| {
        set_timeout(
            move || {
                set_hidden.set(true);
                set_timeout(move || set_removed.set(true), REMOVE_AFTER_HIDE);
            },
            HIDE_AFTER,
        );
    });

    view! {
        <Show when=move || !removed.get()>
            <div id="loader" class="loader" class:hidden=move || hidden.get()>
                <div class="loader-spinner"></div>
            </div>
        </Show>
    }
}
