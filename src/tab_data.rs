/// Data structures for Tab URL Copier
use serde::{Deserialize, Deserializer};

/// Group id the browser reports for tabs outside any tab group
pub const TAB_GROUP_ID_NONE: i32 = -1;

/// A browser tab as reported by the host tab API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostTab {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default = "no_group")]
    pub group_id: i32,
}

fn no_group() -> i32 {
    TAB_GROUP_ID_NONE
}

/// Tabs that are still loading report `null` for title or url
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl HostTab {
    pub fn is_grouped(&self) -> bool {
        self.group_id != TAB_GROUP_ID_NONE
    }

    /// Capture the fields the formatter needs
    pub fn to_record(&self) -> TabRecord {
        let group_key = if self.is_grouped() {
            Some(self.group_id.to_string())
        } else {
            None
        };
        TabRecord::new(self.title.clone(), self.url.clone(), group_key)
    }
}

/// One tab as seen by the formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRecord {
    pub title: String,
    pub url: String,
    pub group_key: Option<String>,
}

impl TabRecord {
    pub fn new(title: String, url: String, group_key: Option<String>) -> TabRecord {
        TabRecord {
            title,
            url,
            group_key,
        }
    }
}

/// Tabs sharing one tab group, in their original order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub name: String,
    pub tabs: Vec<TabRecord>,
}

/// A tab snapshot partitioned by tab group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedTabs {
    pub groups: Vec<Group>,
    pub ungrouped: Vec<TabRecord>,
}

impl GroupedTabs {
    pub fn tab_count(&self) -> usize {
        self.groups.iter().map(|g| g.tabs.len()).sum::<usize>() + self.ungrouped.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
