#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000" // Local development server
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "" // Same-origin in production
}
