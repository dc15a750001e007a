//! Drop items that cannot be displayed

use crate::model::{Item, ListEntry};

/// Keep items whose name is present and non-empty, in input order
pub fn clean(items: Vec<Item>) -> Vec<ListEntry> {
    let total = items.len();
    let entries: Vec<ListEntry> = items.into_iter().filter_map(ListEntry::from_item).collect();

    tracing::debug!(
        "Cleaned item list: kept {} of {} ({} without a name)",
        entries.len(),
        total,
        total - entries.len()
    );

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_preserves_order_of_survivors() {
        let items = vec![
            Item::new(1, 3, Some("Item 1")),
            Item::new(2, 1, None),
            Item::new(3, 2, Some("Item 3")),
            Item::new(4, 1, Some("")),
            Item::new(5, 1, Some("Item 5")),
        ];

        let ids: Vec<i64> = clean(items).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_clean_empty_input() {
        assert!(clean(Vec::new()).is_empty());
    }

    #[test]
    fn test_clean_all_invalid() {
        let items = vec![Item::new(1, 1, None), Item::new(2, 2, Some(""))];
        assert!(clean(items).is_empty());
    }
}
