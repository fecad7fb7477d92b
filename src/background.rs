/// Context-menu action: copy the highlighted tabs of the current window

use crate::format::format_snapshot;
use crate::host::{self, TabScope};
use crate::tab_data::{HostTab, TabRecord};

/// Id of the toolbar context-menu entry
pub const COPY_MENU_ID: &str = "copy-selected-tabs";

/// Register the context-menu entry, titled in the configured language
pub async fn create_context_menu() -> Result<(), String> {
    let settings = host::load_settings().await;
    let title = settings.language().ui_text().context_menu_copy_selected;

    host::create_context_menu(COPY_MENU_ID, title).await
}

pub fn is_copy_menu_item(menu_item_id: &str) -> bool {
    menu_item_id == COPY_MENU_ID
}

/// Dispatch a context-menu click; entries owned by others are ignored
pub async fn handle_menu_click(menu_item_id: &str) -> Result<(), String> {
    if is_copy_menu_item(menu_item_id) {
        copy_selected_tabs().await
    } else {
        log::debug!("Ignoring context menu item {}", menu_item_id);
        Ok(())
    }
}

pub async fn copy_selected_tabs() -> Result<(), String> {
    let settings = host::load_settings().await;
    let options = settings
        .format_options()
        .map_err(|e| format!("Invalid settings: {}", e))?;

    let tabs = host::load_tabs(TabScope::Highlighted).await?;
    if tabs.is_empty() {
        log::info!("No highlighted tabs to copy");
        return Ok(());
    }

    let titles = host::load_group_titles(&tabs).await;
    let records: Vec<TabRecord> = tabs.iter().map(HostTab::to_record).collect();
    let text = format_snapshot(&records, &titles, &options).map_err(|e| e.to_string())?;

    host::copy_via_offscreen(&text).await?;
    host::show_copied_badge();
    log::info!("Copied {} tabs as {}", records.len(), options.output_format);

    Ok(())
}
