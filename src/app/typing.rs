use std::time::Duration;

use leptos::{html, prelude::*};

use crate::config::SiteConfig;
use crate::typewriter::{self, Scheduler, TextSink, TypewriterHandle};

/// Runs scheduled steps on the browser's timer queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) {
        set_timeout(task, delay);
    }
}

/// Writes straight into an element's text content.
pub struct ElementSink(web_sys::Element);

impl TextSink for ElementSink {
    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

#[component]
pub fn TypingText() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let roles = config.typing.roles.clone();
    let timing = config.typing.timing;
    let target = NodeRef::<html::Span>::new();
    let handle = StoredValue::new(None::<TypewriterHandle>);

    Effect::new(move |_| {
        // tracked so that we start once the span is mounted
        let el = target.get();
        if handle.with_value(Option::is_some) {
            return;
        }
        let sink = el.map(|el| ElementSink(el.into()));
        match typewriter::start(roles.clone(), sink, timing, BrowserScheduler) {
            Ok(started) => handle.set_value(started),
            Err(e) => log::error!("typing effect not started: {e}"),
        }
    });

    on_cleanup(move || {
        if let Some(Some(h)) = handle.try_get_value() {
            h.stop();
        }
    });

    view! {
        <span class="typing" node_ref=target></span>
        <span class="cursor">"|"</span>
    }
}
