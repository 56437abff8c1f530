use leptos::mount::mount_to_body;
use leptos::prelude::*;
use music_ai_web::{App, ClientConfig};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = ClientConfig::from_document();
    let level = config.log_level().unwrap_or(log::Level::Debug);
    console_log::init_with_level(level).expect("Failed to initialize logger");

    if let Some(e) = config_error {
        log::warn!("Ignoring page config: {}", e);
    }
    log::info!("Music AI studio starting (api: {})", config.api_base);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
