//! Substring search over entry names

use crate::model::ListEntry;

/// Keep entries whose name contains `query` (case-sensitive)
///
/// An empty query returns the input untouched, which doubles as "show all".
pub fn filter_by_name(entries: Vec<ListEntry>, query: &str) -> Vec<ListEntry> {
    if query.is_empty() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|entry| entry.name.contains(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    fn entries(names: &[&str]) -> Vec<ListEntry> {
        names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| ListEntry::from_item(Item::new(i as i64, 1, Some(name))))
            .collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let input = entries(&["Item 3", "Other 1", "Item 21"]);
        assert_eq!(filter_by_name(input.clone(), ""), input);
    }

    #[test]
    fn test_substring_match_keeps_order() {
        let input = entries(&["Item 210", "Item 3", "Item 21", "Thing 121"]);
        let names: Vec<String> = filter_by_name(input, "21")
            .into_iter()
            .map(|e| e.name)
            .collect();

        assert_eq!(names, vec!["Item 210", "Item 21", "Thing 121"]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let input = entries(&["Item 1", "item 2"]);
        let result = filter_by_name(input, "item");

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "item 2");
    }

    #[test]
    fn test_no_match() {
        let input = entries(&["Item 1", "Item 2"]);
        assert!(filter_by_name(input, "zzz").is_empty());
    }
}
