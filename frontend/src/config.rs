/// Base address of the contact-intake service, baked in at build time.
/// Set `BACKEND_URL` when running `trunk build` to point at a deployment.
const CONFIGURED_BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

#[cfg(debug_assertions)]
fn default_backend_url() -> &'static str {
    "http://localhost:8001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
fn default_backend_url() -> &'static str {
    ""  // Production, same origin
}

pub fn get_backend_url() -> &'static str {
    CONFIGURED_BACKEND_URL.unwrap_or_else(default_backend_url)
}

