pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod store;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

/// Console log level, from `NAVKAR_LOG_LEVEL` at build time
fn log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(log::Level::Debug)
}

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log_level(option_env!("NAVKAR_LOG_LEVEL")));
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

#[cfg(test)]
mod tests {
    use super::log_level;

    #[test]
    fn test_log_level_from_env_value() {
        assert_eq!(log_level(None), log::Level::Debug);
        assert_eq!(log_level(Some("warn")), log::Level::Warn);
        assert_eq!(log_level(Some(" INFO ")), log::Level::Info);
        assert_eq!(log_level(Some("loud")), log::Level::Debug);
    }
}
