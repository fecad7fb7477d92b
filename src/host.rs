/// Async wrappers over the browser APIs in host.js

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::storage::{Settings, SETTINGS_KEYS};
use crate::tab_data::HostTab;

// Import JS bridge functions
#[wasm_bindgen(module = "/host.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getCurrentWindowTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getHighlightedTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getTabGroupTitle(group_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(keys: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn writeClipboard(text: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn copyViaOffscreen(text: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn sleep(ms: u32) -> Result<(), JsValue>;

    fn showBadge(text: &str, color: &str, clear_after_ms: u32);

    #[wasm_bindgen(catch)]
    async fn createContextMenu(id: &str, title: &str) -> Result<(), JsValue>;
}

/// Which tabs a copy action works on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TabScope {
    CurrentWindow,
    Highlighted,
}

/// Reply sent back by the offscreen document in offscreen.js
#[derive(Debug, Deserialize)]
struct CopyResponse {
    #[serde(default)]
    success: bool,
}

pub async fn load_tabs(scope: TabScope) -> Result<Vec<HostTab>, String> {
    let result = match scope {
        TabScope::CurrentWindow => getCurrentWindowTabs().await,
        TabScope::Highlighted => getHighlightedTabs().await,
    };
    let tabs_js = result.map_err(|e| format!("Failed to get tabs: {:?}", e))?;
    serde_wasm_bindgen::from_value(tabs_js).map_err(|e| format!("Failed to parse tabs: {:?}", e))
}

/// Fetch the display title of every tab group present in `tabs`
///
/// Groups whose lookup fails are left out of the map and logged.
pub async fn load_group_titles(tabs: &[HostTab]) -> HashMap<String, String> {
    let mut seen = HashSet::new();
    let mut titles = HashMap::new();

    for tab in tabs.iter().filter(|t| t.is_grouped()) {
        if !seen.insert(tab.group_id) {
            continue;
        }
        match getTabGroupTitle(tab.group_id).await {
            Ok(title) => {
                titles.insert(tab.group_id.to_string(), title.as_string().unwrap_or_default());
            }
            Err(e) => log::warn!("Could not read tab group {}: {:?}", tab.group_id, e),
        }
    }

    titles
}

/// Load settings, falling back to defaults when storage is unreadable
pub async fn load_settings() -> Settings {
    let keys = match serde_wasm_bindgen::to_value(&SETTINGS_KEYS) {
        Ok(keys) => keys,
        Err(e) => {
            log::error!("Failed to serialize settings keys: {:?}", e);
            return Settings::default();
        }
    };

    match getStorage(keys).await {
        Ok(value) if !value.is_null() && !value.is_undefined() => {
            serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
                log::warn!("Stored settings unreadable, using defaults: {:?}", e);
                Settings::default()
            })
        }
        Ok(_) => Settings::default(),
        Err(e) => {
            log::warn!("Failed to load settings: {:?}", e);
            Settings::default()
        }
    }
}

pub async fn save_settings(settings: &Settings) -> Result<(), String> {
    let value = serde_wasm_bindgen::to_value(settings)
        .map_err(|e| format!("Failed to serialize settings: {:?}", e))?;

    setStorage(value)
        .await
        .map_err(|e| format!("Failed to save settings: {:?}", e))
}

/// Copy from a page that has clipboard access (the popup)
pub async fn write_clipboard(text: &str) -> Result<(), String> {
    writeClipboard(text)
        .await
        .map_err(|e| format!("Clipboard write failed: {:?}", e))
}

/// Copy from the background worker through an offscreen document
pub async fn copy_via_offscreen(text: &str) -> Result<(), String> {
    let response = copyViaOffscreen(text)
        .await
        .map_err(|e| format!("Offscreen copy failed: {:?}", e))?;

    if response.is_undefined() {
        return Err("No offscreen document answered the copy request".to_string());
    }
    let response: CopyResponse = serde_wasm_bindgen::from_value(response)
        .map_err(|e| format!("Bad offscreen response: {:?}", e))?;

    check_copy_response(&response)
}

fn check_copy_response(response: &CopyResponse) -> Result<(), String> {
    if response.success {
        Ok(())
    } else {
        Err("Offscreen document could not write the clipboard".to_string())
    }
}

/// Add an entry to the toolbar icon's context menu
pub async fn create_context_menu(id: &str, title: &str) -> Result<(), String> {
    createContextMenu(id, title)
        .await
        .map_err(|e| format!("Failed to create context menu: {:?}", e))
}

pub async fn delay(ms: u32) {
    if let Err(e) = sleep(ms).await {
        log::warn!("Timer failed: {:?}", e);
    }
}

/// Flash a check mark on the toolbar icon
pub fn show_copied_badge() {
    showBadge("\u{2713}", "#4CAF50", 2000);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_response_success() {
        let response: CopyResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();

        assert!(check_copy_response(&response).is_ok());
    }

    #[test]
    fn test_copy_response_failure() {
        let response: CopyResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(check_copy_response(&response).is_err());

        let response: CopyResponse = serde_json::from_str("{}").unwrap();
        assert!(check_copy_response(&response).is_err());
    }
}
