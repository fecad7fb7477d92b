/// Popup UI for Tab URL Copier

use std::collections::HashMap;

use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::format::{format_snapshot, OutputFormat};
use crate::host::{self, TabScope};
use crate::operations::group_tabs;
use crate::storage::Settings;
use crate::tab_data::{HostTab, TabRecord};
use crate::ui::components::{CopiedToast, DelimiterPicker, FormatToggle, OptionCheckbox};

const NOTIFICATION_MS: u32 = 2500;

#[derive(Clone, PartialEq)]
enum AppState {
    Loading,
    Idle,
    Error(String),
}

/// Tabs of the current window as captured when the popup opened
#[derive(Clone, PartialEq, Default)]
struct Snapshot {
    tabs: Vec<TabRecord>,
    group_titles: HashMap<String, String>,
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Loading);
    let snapshot = use_state(Snapshot::default);
    let settings = use_state(Settings::default);
    let copied = use_state(|| false);

    // Load settings and tabs on mount
    {
        let state = state.clone();
        let snapshot = snapshot.clone();
        let settings = settings.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                settings.set(host::load_settings().await);

                match load_snapshot().await {
                    Ok(data) => {
                        snapshot.set(data);
                        state.set(AppState::Idle);
                    }
                    Err(e) => {
                        log::error!("{}", e);
                        state.set(AppState::Error(e));
                    }
                }
            });
            || ()
        });
    }

    // Apply a settings change and persist it
    let update_settings = {
        let settings = settings.clone();
        move |change: Box<dyn Fn(&mut Settings)>| {
            let mut next = (*settings).clone();
            change(&mut next);
            settings.set(next.clone());
            spawn_local(async move {
                if let Err(e) = host::save_settings(&next).await {
                    log::error!("{}", e);
                }
            });
        }
    };

    let on_format = {
        let update_settings = update_settings.clone();
        Callback::from(move |format: OutputFormat| {
            update_settings(Box::new(move |s: &mut Settings| s.set_format(format)));
        })
    };

    let on_delimiter = {
        let update_settings = update_settings.clone();
        Callback::from(move |delimiter: String| {
            update_settings(Box::new(move |s: &mut Settings| s.csv_delimiter = delimiter.clone()));
        })
    };

    let on_grouping = {
        let update_settings = update_settings.clone();
        Callback::from(move |checked: bool| {
            update_settings(Box::new(move |s: &mut Settings| s.use_grouping = checked));
        })
    };

    let on_title = {
        let update_settings = update_settings.clone();
        Callback::from(move |checked: bool| {
            update_settings(Box::new(move |s: &mut Settings| s.show_title = checked));
        })
    };

    let language = settings.language();
    let text = language.ui_text();
    let grouped = group_tabs(&snapshot.tabs);
    let count_text = language.tab_count_text(grouped.tab_count(), grouped.group_count());

    let options = settings.format_options();
    let preview = options
        .as_ref()
        .map_err(|e| e.to_string())
        .and_then(|o| format_snapshot(&snapshot.tabs, &snapshot.group_titles, o).map_err(|e| e.to_string()));
    let selected_format = options
        .as_ref()
        .map(|o| o.output_format)
        .unwrap_or(OutputFormat::List);

    let on_copy = {
        let state = state.clone();
        let copied = copied.clone();
        let output = preview.clone().unwrap_or_default();

        Callback::from(move |_| {
            let state = state.clone();
            let copied = copied.clone();
            let output = output.clone();

            spawn_local(async move {
                match host::write_clipboard(&output).await {
                    Ok(_) => {
                        log::info!("Copied {} bytes", output.len());
                        copied.set(true);
                        host::delay(NOTIFICATION_MS).await;
                        copied.set(false);
                    }
                    Err(e) => {
                        state.set(AppState::Error(e));
                    }
                }
            });
        })
    };

    let is_busy = matches!(*state, AppState::Loading);

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Tab URL Copier"}</h1>
            <p class="tab-count">{count_text}</p>

            <FormatToggle {language} selected={selected_format} on_select={on_format} />

            if selected_format == OutputFormat::Csv {
                <DelimiterPicker {language} selected={settings.csv_delimiter.clone()} on_select={on_delimiter} />
            }

            <div class="options">
                <OptionCheckbox label={text.group_by_tab_group} checked={settings.use_grouping} on_toggle={on_grouping} />
                <OptionCheckbox label={text.include_titles} checked={settings.show_title} on_toggle={on_title} />
            </div>

            // Status display
            {match &*state {
                AppState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                AppState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={text.error} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                AppState::Idle => html! {}
            }}

            {match &preview {
                Ok(output) => html! { <pre id="output" class="output">{output.clone()}</pre> },
                Err(e) => html! {
                    <Alert r#type={AlertType::Warning} title={text.settings} inline={true}>
                        {e.clone()}
                    </Alert>
                },
            }}

            <Button onclick={on_copy} disabled={is_busy || preview.is_err()} variant={ButtonVariant::Primary} block={true}>
                {text.copy}
            </Button>

            <CopiedToast {language} visible={*copied} />
        </div>
    }
}

async fn load_snapshot() -> Result<Snapshot, String> {
    let tabs = host::load_tabs(TabScope::CurrentWindow).await?;
    let group_titles = host::load_group_titles(&tabs).await;

    Ok(Snapshot {
        tabs: tabs.iter().map(HostTab::to_record).collect(),
        group_titles,
    })
}
