/// Localized labels and tab-count text

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ru,
    En,
}

/// Strings shown by the popup and the context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    pub list_format: &'static str,
    pub csv_format: &'static str,
    pub delimiter: &'static str,
    pub tab_delimiter: &'static str,
    pub group_by_tab_group: &'static str,
    pub include_titles: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
    pub error: &'static str,
    pub settings: &'static str,
    pub context_menu_copy_selected: &'static str,
}

const UI_TEXT_RU: UiText = UiText {
    list_format: "Список",
    csv_format: "CSV",
    delimiter: "Разделитель",
    tab_delimiter: "Таб",
    group_by_tab_group: "Группировать по группам вкладок",
    include_titles: "Включать заголовки",
    copy: "Копировать",
    copied: "Скопировано в буфер обмена",
    error: "Ошибка",
    settings: "Настройки",
    context_menu_copy_selected: "Копировать выделенные вкладки",
};

const UI_TEXT_EN: UiText = UiText {
    list_format: "List",
    csv_format: "CSV",
    delimiter: "Delimiter",
    tab_delimiter: "Tab",
    group_by_tab_group: "Group by tab group",
    include_titles: "Include titles",
    copy: "Copy",
    copied: "Copied to clipboard",
    error: "Error",
    settings: "Settings",
    context_menu_copy_selected: "Copy selected tabs",
};

impl Language {
    /// Unknown codes fall back to Russian
    pub fn from_code(code: &str) -> Language {
        match code.to_lowercase().as_str() {
            "en" => Language::En,
            _ => Language::Ru,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// Label written for tabs outside any tab group
    pub fn no_group_label(&self) -> &'static str {
        match self {
            Language::Ru => "Без группы",
            Language::En => "No Group",
        }
    }

    /// Label written for tab groups the user never named
    pub fn untitled_label(&self) -> &'static str {
        match self {
            Language::Ru => "Без названия",
            Language::En => "Untitled",
        }
    }

    pub fn ui_text(&self) -> &'static UiText {
        match self {
            Language::Ru => &UI_TEXT_RU,
            Language::En => &UI_TEXT_EN,
        }
    }

    /// Summary like "5 вкладок · 2 группы"
    pub fn tab_count_text(&self, tabs: usize, groups: usize) -> String {
        let mut text = format!("{} {}", tabs, self.tabs_word(tabs));
        if groups > 0 {
            text.push_str(&format!(" · {} {}", groups, self.groups_word(groups)));
        }
        text
    }

    fn tabs_word(&self, n: usize) -> &'static str {
        match self {
            Language::Ru => pluralize_ru(n, "вкладка", "вкладки", "вкладок"),
            Language::En => pluralize_en(n, "tab", "tabs"),
        }
    }

    fn groups_word(&self, n: usize) -> &'static str {
        match self {
            Language::Ru => pluralize_ru(n, "группа", "группы", "групп"),
            Language::En => pluralize_en(n, "group", "groups"),
        }
    }
}

/// Russian plural forms: 1, 21 → one; 2-4, 22 → few; 0, 5-20, 111 → many
pub fn pluralize_ru<'a>(n: usize, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if (11..=19).contains(&mod100) {
        many
    } else if mod10 == 1 {
        one
    } else if (2..=4).contains(&mod10) {
        few
    } else {
        many
    }
}

fn pluralize_en<'a>(n: usize, one: &'a str, other: &'a str) -> &'a str {
    if n == 1 { one } else { other }
}
