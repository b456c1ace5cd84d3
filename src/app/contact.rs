use std::time::Duration;

use leptos::{html, prelude::*, task::spawn_local};

use super::animations::Reveal;
use crate::config::SiteConfig;
use crate::contact::{
    self, ContactForm, FormStatus, SendCounter, StatusKind, SUCCESS_STATUS_TIMEOUT_MS,
};

const SUBMIT_LABEL: &str = "Send Message";
const SENDING_LABEL: &str = "Sending...";

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let contact_email = config.contact_email.clone();
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(None::<FormStatus>);
    let (sending, set_sending) = signal(false);
    let sends = StoredValue::new(SendCounter::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let (name, email, message) = match (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) {
            (Some(n), Some(e), Some(m)) => (n.value(), e.value(), m.value()),
            _ => return,
        };
        let form = ContactForm::new(&name, &email, &message);
        let params = match contact::prepare(
            &form,
            &config.email_js,
            &config.contact_email,
            chrono::Utc::now(),
        ) {
            Ok(p) => p,
            Err(e) => {
                if !e.is_validation() {
                    log::error!("contact form: {e}");
                }
                set_status.set(Some(FormStatus::failed(&e, &config.contact_email)));
                return;
            }
        };

        let mut ticket = 0;
        sends.update_value(|s| ticket = s.next());
        set_sending.set(true);
        set_status.set(Some(FormStatus::sending()));
        let config = config.clone();
        spawn_local(async move {
            match contact::deliver(&config.email_js, &params).await {
                Ok(()) => {
                    set_status.set(Some(FormStatus::sent(&params)));
                    if let Some(form) = form_ref.get_untracked() {
                        form.reset();
                    }
                    set_timeout(
                        move || {
                            let latest = sends
                                .try_with_value(|s| s.is_current(ticket))
                                .unwrap_or(false);
                            let still_success = latest
                                && status
                                    .get_untracked()
                                    .is_some_and(|s| s.kind == StatusKind::Success);
                            if still_success {
                                set_status.set(None);
                            }
                        },
                        Duration::from_millis(SUCCESS_STATUS_TIMEOUT_MS),
                    );
                }
                Err(e) => {
                    log::error!("contact form: {e}");
                    set_status.set(Some(FormStatus::failed(&e, &config.contact_email)));
                }
            }
            set_sending.set(false);
        });
    };

    view! {
        <section id="contact" class="section">
            <h2 class="section-title">"Get In Touch"</h2>
            <div class="contact-grid">
                <Reveal class="content-box">
                    <h3>"Let's work together"</h3>
                    <p>
                        "Have a project in mind or just want to say hi? Drop me a message and I'll get back to you."
                    </p>
                    <p>
                        "📧 " <a href=format!("mailto:{contact_email}")>{contact_email.clone()}</a>
                    </p>
                </Reveal>
                <form id="contactForm" class="contact-form" node_ref=form_ref on:submit=on_submit>
                    <input
                        id="from_name"
                        node_ref=name_ref
                        type="text"
                        placeholder="Your Name"
                        autocomplete="name"
                    />
                    <input
                        id="from_email"
                        node_ref=email_ref
                        type="email"
                        placeholder="Your Email"
                        autocomplete="email"
                    />
                    <textarea
                        id="message"
                        node_ref=message_ref
                        rows="6"
                        placeholder="Your Message"
                    ></textarea>
                    <button id="submitBtn" type="submit" class="btn" disabled=move || sending.get()>
                        <span>{move || if sending.get() { SENDING_LABEL } else { SUBMIT_LABEL }}</span>
                    </button>
                    {move || {
                        status
                            .get()
                            .map(|s| {
                                view! {
                                    <div id="formStatus" class=s.kind.as_str()>
                                        {s.message}
                                    </div>
                                }
                            })
                    }}
                </form>
            </div>
        </section>
    }
}
