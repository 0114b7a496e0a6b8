use shared::DialogConfig;

use crate::services::dom::document;
use crate::services::logging::Logger;

/// Id of the inline `<script type="application/json">` holding configuration
pub const CONFIG_ELEMENT_ID: &str = "dialog-config";

/// Read configuration from the page. Missing element means defaults; bad
/// JSON is reported and also falls back to defaults.
pub fn load_config() -> DialogConfig {
    let Some(text) = document()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
    else {
        return DialogConfig::default();
    };

    if text.trim().is_empty() {
        return DialogConfig::default();
    }

    match DialogConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            Logger::warn_with_component("config", &format!("{}; using defaults", e));
            DialogConfig::default()
        }
    }
}
