/// Rendering grouped tabs as list or CSV text
///
/// Both formats walk the same order: every tab of every group in stored
/// order, then the ungrouped tabs. Nothing here keeps state between calls.
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::operations::{group_tabs, name_groups_from};
use crate::tab_data::{GroupedTabs, TabRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unsupported output format: {0:?}")]
    UnsupportedFormat(String),
    #[error("CSV delimiter must be a single character, got {0:?}")]
    InvalidDelimiter(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    List,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::List => "list",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(OutputFormat::List),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(FormatError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Everything that changes how a snapshot is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub output_format: OutputFormat,
    pub grouping_enabled: bool,
    pub include_title: bool,
    pub csv_delimiter: char,
    pub no_group_label: String,
    pub untitled_group_label: String,
}

/// Parse a stored delimiter setting into the single character it names
pub fn parse_delimiter(value: &str) -> Result<char, FormatError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FormatError::InvalidDelimiter(value.to_string())),
    }
}

/// Quote a CSV field if it contains the delimiter, a quote or a newline
pub fn escape_csv_field(value: &str, delimiter: char) -> String {
    if value.contains(delimiter) || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Every tab paired with the label of the group it belongs to
fn labeled_tabs<'a>(
    data: &'a GroupedTabs,
    options: &'a FormatOptions,
) -> impl Iterator<Item = (&'a str, &'a TabRecord)> {
    let grouped = data
        .groups
        .iter()
        .flat_map(|group| group.tabs.iter().map(move |tab| (group.name.as_str(), tab)));
    let ungrouped = data
        .ungrouped
        .iter()
        .map(move |tab| (options.no_group_label.as_str(), tab));
    grouped.chain(ungrouped)
}

/// Render one record per tab: group line, optional title, URL, blank line
pub fn render_list(data: &GroupedTabs, options: &FormatOptions) -> String {
    let mut output = String::new();

    for (label, tab) in labeled_tabs(data, options) {
        if options.grouping_enabled {
            output.push_str(label);
            output.push('\n');
        }
        if options.include_title {
            output.push_str(&tab.title);
            output.push('\n');
        }
        output.push_str(&tab.url);
        output.push_str("\n\n");
    }

    output
}

/// Render one delimited line per tab
pub fn render_csv(data: &GroupedTabs, options: &FormatOptions) -> String {
    let d = options.csv_delimiter;
    let separator = d.to_string();
    let mut output = String::new();

    for (label, tab) in labeled_tabs(data, options) {
        let mut fields = Vec::with_capacity(3);
        if options.grouping_enabled {
            fields.push(escape_csv_field(label, d));
        }
        if options.include_title {
            fields.push(escape_csv_field(&tab.title, d));
        }
        fields.push(escape_csv_field(&tab.url, d));

        output.push_str(&fields.join(separator.as_str()));
        output.push('\n');
    }

    output
}

/// Render in whichever format the options select
///
/// Unknown format names are rejected when the options are built (see
/// [`OutputFormat::from_str`]), so every `OutputFormat` renders; the
/// `Result` keeps the same error type as the rest of the pipeline.
pub fn render(data: &GroupedTabs, options: &FormatOptions) -> Result<String, FormatError> {
    let text = match options.output_format {
        OutputFormat::List => render_list(data, options),
        OutputFormat::Csv => render_csv(data, options),
    };
    Ok(text)
}

/// Group, name and render one tab snapshot
///
/// `group_titles` maps group keys to the titles the host returned; groups
/// without an entry get the untitled label.
pub fn format_snapshot(
    tabs: &[TabRecord],
    group_titles: &HashMap<String, String>,
    options: &FormatOptions,
) -> Result<String, FormatError> {
    let grouped = name_groups_from(group_tabs(tabs), group_titles, &options.untitled_group_label);
    render(&grouped, options)
}
