/// Tab operations: grouping by tab group and group naming

use std::collections::HashMap;
use std::fmt::Display;

use crate::tab_data::{Group, GroupedTabs, TabRecord};

/// Partition tabs by tab group in a single pass
///
/// Groups appear in the order their key is first seen. Tabs keep their
/// relative order inside each group and inside the ungrouped list.
/// Group names are left empty; see [`resolve_group_names`].
pub fn group_tabs(tabs: &[TabRecord]) -> GroupedTabs {
    let mut groups: Vec<Group> = Vec::new();
    let mut index_by_key: HashMap<&str, usize> = HashMap::new();
    let mut ungrouped = Vec::new();

    for tab in tabs {
        match tab.group_key.as_deref() {
            Some(key) => {
                let idx = *index_by_key.entry(key).or_insert_with(|| {
                    groups.push(Group {
                        key: key.to_string(),
                        name: String::new(),
                        tabs: Vec::new(),
                    });
                    groups.len() - 1
                });
                groups[idx].tabs.push(tab.clone());
            }
            None => ungrouped.push(tab.clone()),
        }
    }

    GroupedTabs { groups, ungrouped }
}

/// Fill in group display names from the host
///
/// A failed or empty lookup falls back to `untitled_label` for that group
/// only; the remaining groups are still looked up.
pub fn resolve_group_names<F, E>(
    grouped: GroupedTabs,
    mut lookup: F,
    untitled_label: &str,
) -> GroupedTabs
where
    F: FnMut(&str) -> Result<String, E>,
    E: Display,
{
    let groups = grouped
        .groups
        .into_iter()
        .map(|group| {
            let name = match lookup(&group.key) {
                Ok(name) if !name.is_empty() => name,
                Ok(_) => untitled_label.to_string(),
                Err(e) => {
                    log::warn!("Group {} name lookup failed: {}", group.key, e);
                    untitled_label.to_string()
                }
            };
            Group { name, ..group }
        })
        .collect();

    GroupedTabs {
        groups,
        ungrouped: grouped.ungrouped,
    }
}

/// Look up names from titles already fetched from the host
///
/// Keys missing from `titles` count as failed lookups.
pub fn name_groups_from(
    grouped: GroupedTabs,
    titles: &HashMap<String, String>,
    untitled_label: &str,
) -> GroupedTabs {
    resolve_group_names(
        grouped,
        |key| {
            titles
                .get(key)
                .cloned()
                .ok_or_else(|| format!("no title for group {}", key))
        },
        untitled_label,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_tab(title: &str, url: &str, group: Option<&str>) -> TabRecord {
        TabRecord {
            title: title.to_string(),
            url: url.to_string(),
            group_key: group.map(|g| g.to_string()),
        }
    }

    fn mixed_tabs() -> Vec<TabRecord> {
        vec![
            create_test_tab("A", "http://a", Some("g2")),
            create_test_tab("B", "http://b", None),
            create_test_tab("C", "http://c", Some("g1")),
            create_test_tab("D", "http://d", Some("g2")),
            create_test_tab("E", "http://e", None),
            create_test_tab("F", "http://f", Some("g1")),
        ]
    }

    #[test]
    fn test_group_tabs_empty() {
        let grouped = group_tabs(&[]);

        assert!(grouped.groups.is_empty());
        assert!(grouped.ungrouped.is_empty());
    }

    #[test]
    fn test_group_tabs_encounter_order() {
        let grouped = group_tabs(&mixed_tabs());

        let keys: Vec<&str> = grouped.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["g2", "g1"]);
    }

    #[test]
    fn test_group_tabs_preserves_order_within_groups() {
        let grouped = group_tabs(&mixed_tabs());

        let titles = |tabs: &[TabRecord]| tabs.iter().map(|t| t.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles(&grouped.groups[0].tabs), vec!["A", "D"]);
        assert_eq!(titles(&grouped.groups[1].tabs), vec!["C", "F"]);
        assert_eq!(titles(&grouped.ungrouped), vec!["B", "E"]);
    }

    #[test]
    fn test_group_tabs_partitions_every_tab() {
        let tabs = mixed_tabs();
        let grouped = group_tabs(&tabs);

        assert_eq!(grouped.tab_count(), tabs.len());
        for tab in &tabs {
            let in_groups = grouped
                .groups
                .iter()
                .flat_map(|g| g.tabs.iter())
                .filter(|t| *t == tab)
                .count();
            let in_ungrouped = grouped.ungrouped.iter().filter(|t| *t == tab).count();
            assert_eq!(in_groups + in_ungrouped, 1, "tab {} placed once", tab.title);
        }
        for group in &grouped.groups {
            assert!(group.tabs.iter().all(|t| t.group_key.as_deref() == Some(group.key.as_str())));
        }
    }

    #[test]
    fn test_group_tabs_duplicate_urls_kept() {
        let tabs = vec![
            create_test_tab("A", "http://a", None),
            create_test_tab("A", "http://a", None),
        ];

        let grouped = group_tabs(&tabs);

        assert_eq!(grouped.ungrouped.len(), 2);
    }

    #[test]
    fn test_resolve_group_names() {
        let grouped = group_tabs(&mixed_tabs());

        let named = resolve_group_names(
            grouped,
            |key| -> Result<String, String> {
                match key {
                    "g1" => Ok("Work".to_string()),
                    _ => Ok("Research".to_string()),
                }
            },
            "Untitled",
        );

        assert_eq!(named.groups[0].name, "Research");
        assert_eq!(named.groups[1].name, "Work");
        assert_eq!(named.ungrouped.len(), 2);
    }

    #[test]
    fn test_resolve_group_names_failure_is_isolated() {
        let tabs = vec![
            create_test_tab("A", "http://a", Some("g1")),
            create_test_tab("B", "http://b", Some("g2")),
            create_test_tab("C", "http://c", Some("g3")),
        ];
        let mut calls = Vec::new();

        let named = resolve_group_names(
            group_tabs(&tabs),
            |key| {
                calls.push(key.to_string());
                if key == "g2" {
                    Err("group closed")
                } else {
                    Ok(format!("Group {}", key))
                }
            },
            "Untitled",
        );

        assert_eq!(calls, vec!["g1", "g2", "g3"]);
        assert_eq!(named.groups[0].name, "Group g1");
        assert_eq!(named.groups[1].name, "Untitled");
        assert_eq!(named.groups[2].name, "Group g3");
    }

    #[test]
    fn test_resolve_group_names_empty_title() {
        let tabs = vec![create_test_tab("A", "http://a", Some("g1"))];

        let named = resolve_group_names(
            group_tabs(&tabs),
            |_| Ok::<_, String>(String::new()),
            "Без названия",
        );

        assert_eq!(named.groups[0].name, "Без названия");
    }

    #[test]
    fn test_name_groups_from_map() {
        let tabs = vec![
            create_test_tab("A", "http://a", Some("1")),
            create_test_tab("B", "http://b", Some("2")),
        ];
        let mut titles = HashMap::new();
        titles.insert("1".to_string(), "Work".to_string());

        let named = name_groups_from(group_tabs(&tabs), &titles, "Untitled");

        assert_eq!(named.groups[0].name, "Work");
        assert_eq!(named.groups[1].name, "Untitled");
    }
}
