/// Settings persisted in chrome.storage.local

use serde::{Deserialize, Serialize};

use crate::format::{parse_delimiter, FormatError, FormatOptions, OutputFormat};
use crate::i18n::Language;

/// Storage keys read back when loading settings
pub const SETTINGS_KEYS: [&str; 5] = ["format", "useGrouping", "showTitle", "csvDelimiter", "language"];

/// User settings; any key missing from storage takes its default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub format: String,
    pub use_grouping: bool,
    pub show_title: bool,
    pub csv_delimiter: String,
    pub language: String,
}

impl Settings {
    pub fn new() -> Self {
        Settings {
            format: OutputFormat::List.as_str().to_string(),
            use_grouping: true,
            show_title: true,
            csv_delimiter: ",".to_string(),
            language: Language::Ru.code().to_string(),
        }
    }

    pub fn language(&self) -> Language {
        Language::from_code(&self.language)
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format.as_str().to_string();
    }

    /// Build formatter options with labels for the configured language
    pub fn format_options(&self) -> Result<FormatOptions, FormatError> {
        let language = self.language();
        Ok(FormatOptions {
            output_format: self.format.parse()?,
            grouping_enabled: self.use_grouping,
            include_title: self.show_title,
            csv_delimiter: parse_delimiter(&self.csv_delimiter)?,
            no_group_label: language.no_group_label().to_string(),
            untitled_group_label: language.untitled_label().to_string(),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::new();

        assert_eq!(settings.format, "list");
        assert!(settings.use_grouping);
        assert!(settings.show_title);
        assert_eq!(settings.csv_delimiter, ",");
        assert_eq!(settings.language(), Language::Ru);
    }

    #[test]
    fn test_partial_storage_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"format": "csv", "csvDelimiter": ";"}"#).unwrap();

        assert_eq!(settings.format, "csv");
        assert_eq!(settings.csv_delimiter, ";");
        assert!(settings.use_grouping);
        assert!(settings.show_title);
        assert_eq!(settings.language, "ru");
    }

    #[test]
    fn test_empty_storage() {
        let settings: Settings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_format_options() {
        let settings = Settings {
            format: "csv".to_string(),
            use_grouping: false,
            show_title: true,
            csv_delimiter: "|".to_string(),
            language: "en".to_string(),
        };

        let options = settings.format_options().unwrap();

        assert_eq!(options.output_format, OutputFormat::Csv);
        assert!(!options.grouping_enabled);
        assert!(options.include_title);
        assert_eq!(options.csv_delimiter, '|');
        assert_eq!(options.no_group_label, "No Group");
        assert_eq!(options.untitled_group_label, "Untitled");
    }

    #[test]
    fn test_format_options_unsupported_format() {
        let mut settings = Settings::new();
        settings.format = "html".to_string();

        assert_eq!(
            settings.format_options(),
            Err(FormatError::UnsupportedFormat("html".to_string()))
        );
    }

    #[test]
    fn test_format_options_bad_delimiter() {
        let mut settings = Settings::new();
        settings.csv_delimiter = String::new();

        assert!(matches!(settings.format_options(), Err(FormatError::InvalidDelimiter(_))));
    }

    #[test]
    fn test_set_format() {
        let mut settings = Settings::new();
        settings.set_format(OutputFormat::Csv);

        assert_eq!(settings.format, "csv");
    }

    #[test]
    fn test_serialization() {
        let settings = Settings::new();

        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"useGrouping\":true"));
        assert!(json.contains("\"csvDelimiter\":\",\""));

        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, settings);
    }
}
