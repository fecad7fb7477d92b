/// Reusable UI components

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::format::OutputFormat;
use crate::i18n::{Language, UiText};

/// Delimiters offered in the CSV options; `None` captions use the localized tab name
pub const DELIMITERS: [(&str, Option<&str>); 4] =
    [(",", Some(",")), (";", Some(";")), ("|", Some("|")), ("\t", None)];

/// Button caption for a delimiter value
pub fn delimiter_caption(value: &str, text: &UiText) -> String {
    DELIMITERS
        .iter()
        .find(|(v, _)| *v == value)
        .and_then(|(_, caption)| *caption)
        .map(str::to_string)
        .unwrap_or_else(|| if value == "\t" { text.tab_delimiter.to_string() } else { value.to_string() })
}

#[derive(Properties, PartialEq)]
pub struct FormatToggleProps {
    pub language: Language,
    pub selected: OutputFormat,
    pub on_select: Callback<OutputFormat>,
}

#[function_component(FormatToggle)]
pub fn format_toggle(props: &FormatToggleProps) -> Html {
    let text = props.language.ui_text();
    let button = |format: OutputFormat, caption: &'static str| {
        let on_select = props.on_select.clone();
        let class = if props.selected == format { "format-btn active" } else { "format-btn" };
        html! {
            <button class={class} onclick={Callback::from(move |_| on_select.emit(format))}>
                {caption}
            </button>
        }
    };

    html! {
        <div class="format-toggle">
            {button(OutputFormat::List, text.list_format)}
            {button(OutputFormat::Csv, text.csv_format)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DelimiterPickerProps {
    pub language: Language,
    pub selected: String,
    pub on_select: Callback<String>,
}

#[function_component(DelimiterPicker)]
pub fn delimiter_picker(props: &DelimiterPickerProps) -> Html {
    let text = props.language.ui_text();

    html! {
        <div class="csv-option visible">
            <span class="option-label">{text.delimiter}</span>
            {for DELIMITERS.iter().map(|(value, _)| {
                let on_select = props.on_select.clone();
                let caption = delimiter_caption(value, text);
                let value = value.to_string();
                let class = if props.selected == value { "delimiter-btn active" } else { "delimiter-btn" };
                html! {
                    <button class={class} onclick={Callback::from(move |_| on_select.emit(value.clone()))}>
                        {caption}
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OptionCheckboxProps {
    pub label: AttrValue,
    pub checked: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(OptionCheckbox)]
pub fn option_checkbox(props: &OptionCheckboxProps) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_toggle.emit(input.checked());
        })
    };

    html! {
        <label class="option-checkbox">
            <input type="checkbox" checked={props.checked} {onchange} />
            {props.label.clone()}
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct CopiedToastProps {
    pub language: Language,
    pub visible: bool,
}

#[function_component(CopiedToast)]
pub fn copied_toast(props: &CopiedToastProps) -> Html {
    let class = if props.visible { "notification show" } else { "notification" };

    html! {
        <div class={class}>{format!("\u{2713} {}", props.language.ui_text().copied)}</div>
    }
}
