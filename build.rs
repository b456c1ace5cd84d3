fn main() {
    // Stamp the build so the footer can show when the site was last deployed
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Credentials are baked into the WASM bundle, rebuild when they change
    for var in [
        "EMAILJS_SERVICE_ID",
        "EMAILJS_TEMPLATE_ID",
        "EMAILJS_PUBLIC_KEY",
        "PORTFOLIO_CONTACT_EMAIL",
        "PORTFOLIO_SITE_CONFIG",
    ] {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
