#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod contact;
pub mod motion;
pub mod scroll;
pub mod typewriter;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    banner();
    leptos::mount::hydrate_body(App);
}

#[cfg(feature = "hydrate")]
fn banner() {
    let config = config::SiteConfig::from_build_env();
    log::info!("🚀 {} Portfolio", config.owner);
    log::info!("💼 Looking for a developer? Let's connect!");
    log::info!("📧 {}", config.contact_email);
    if !config.email_js.is_configured() {
        log::warn!("⚠️ Email service not configured, the contact form will not send");
    }
}
