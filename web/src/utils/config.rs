//! Loads [`AppConfig`] from the JSON block embedded in `index.html`.

use lib_core::config::{init_config, AppConfig};

use super::constants::CONFIG_ELEMENT_ID;

/// Read, validate and install the app configuration.
///
/// A missing block means defaults. An invalid one is logged and replaced by
/// defaults, so a bad deploy never blocks the forms.
pub fn load_app_config() {
    let config = match read_config_block() {
        Some(text) if !text.trim().is_empty() => AppConfig::from_json(&text).unwrap_or_else(|err| {
            log::warn!("Ignoring app config: {}", err);
            AppConfig::default()
        }),
        _ => AppConfig::default(),
    };

    log::debug!("App config: {:?}", config);
    if let Err(err) = init_config(config) {
        log::warn!("{}", err);
    }
}

fn read_config_block() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content()
}
