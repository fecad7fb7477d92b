/// Tab URL Copier - Chrome Extension that copies tab URLs as a list or CSV
/// Built with Rust + WASM + Yew

mod background;
mod host;
pub mod format;
pub mod i18n;
pub mod operations;
pub mod storage;
pub mod tab_data;
pub mod ui;

use std::collections::HashMap;

use wasm_bindgen::prelude::*;

use crate::storage::Settings;
use crate::tab_data::{HostTab, TabRecord};

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Called from background.js when the extension is installed or updated
#[wasm_bindgen]
pub async fn create_context_menu() -> Result<(), JsValue> {
    background::create_context_menu().await.map_err(|e| {
        log::error!("{}", e);
        JsValue::from_str(&e)
    })
}

// Called from background.js for every context-menu click
#[wasm_bindgen]
pub async fn handle_menu_click(menu_item_id: String) -> Result<(), JsValue> {
    background::handle_menu_click(&menu_item_id).await.map_err(|e| {
        log::error!("Error copying tabs: {}", e);
        JsValue::from_str(&e)
    })
}

/// Format browser tab objects with the given group titles and settings
///
/// `group_titles` maps group ids to titles; `settings` may be undefined, in
/// which case the defaults apply.
#[wasm_bindgen]
pub fn format_tabs(tabs: JsValue, group_titles: JsValue, settings: JsValue) -> Result<String, JsValue> {
    let tabs: Vec<HostTab> = serde_wasm_bindgen::from_value(tabs)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse tabs: {:?}", e)))?;

    let group_titles: HashMap<String, String> = if group_titles.is_undefined() || group_titles.is_null() {
        HashMap::new()
    } else {
        serde_wasm_bindgen::from_value(group_titles)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse group titles: {:?}", e)))?
    };

    let settings: Settings = if settings.is_undefined() || settings.is_null() {
        Settings::default()
    } else {
        serde_wasm_bindgen::from_value(settings)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse settings: {:?}", e)))?
    };

    let options = settings
        .format_options()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let records: Vec<TabRecord> = tabs.iter().map(HostTab::to_record).collect();

    format::format_snapshot(&records, &group_titles, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}
