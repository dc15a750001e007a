//! Item records as received from the endpoint and as shown to the user

use serde::{Deserialize, Serialize};

/// One catalog entry exactly as decoded from the remote JSON
///
/// `name` may be `null` or missing on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,

    /// Grouping key, sent as `listId`
    #[serde(rename = "listId")]
    pub group_id: i64,

    #[serde(default)]
    pub name: Option<String>,
}

impl Item {
    pub fn new(id: i64, group_id: i64, name: Option<&str>) -> Self {
        Self {
            id,
            group_id,
            name: name.map(str::to_string),
        }
    }
}

/// A cleaned entry: the name is always present and non-empty
///
/// Constructed only through [`ListEntry::from_item`], which the cleaner uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: i64,
    #[serde(rename = "listId")]
    pub group_id: i64,
    pub name: String,
}

impl ListEntry {
    /// Keep an item only if it carries a non-empty name
    pub fn from_item(item: Item) -> Option<Self> {
        match item.name {
            Some(name) if !name.is_empty() => Some(Self {
                id: item.id,
                group_id: item.group_id,
                name,
            }),
            _ => None,
        }
    }

    /// Display text for this entry
    pub fn row(&self) -> Row {
        Row::from(self)
    }
}

/// The three text fields a list row shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub list_id: String,
    pub name: String,
    pub id: String,
}

impl From<&ListEntry> for Row {
    fn from(entry: &ListEntry) -> Self {
        Self {
            list_id: format!("List Id: {}", entry.group_id),
            name: format!("Name: {}", entry.name),
            id: format!("ID: {}", entry.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_decodes_wire_names() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[
                {"id": 755, "listId": 2, "name": ""},
                {"id": 203, "listId": 2, "name": null},
                {"id": 684, "listId": 1, "name": "Item 684"},
                {"id": 9, "listId": 3}
            ]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name.as_deref(), Some(""));
        assert_eq!(items[1].name, None);
        assert_eq!(items[2], Item::new(684, 1, Some("Item 684")));
        assert_eq!(items[3].name, None);
    }

    #[test]
    fn test_from_item_rejects_missing_and_empty_names() {
        assert!(ListEntry::from_item(Item::new(1, 1, None)).is_none());
        assert!(ListEntry::from_item(Item::new(2, 1, Some(""))).is_none());

        let entry = ListEntry::from_item(Item::new(3, 4, Some(" "))).unwrap();
        assert_eq!(entry.name, " ");
        assert_eq!(entry.group_id, 4);
    }

    #[test]
    fn test_row_text() {
        let entry = ListEntry::from_item(Item::new(276, 1, Some("Item 276"))).unwrap();
        let row = entry.row();

        assert_eq!(row.list_id, "List Id: 1");
        assert_eq!(row.name, "Name: Item 276");
        assert_eq!(row.id, "ID: 276");
    }

    #[test]
    fn test_entry_serializes_with_wire_names() {
        let entry = ListEntry::from_item(Item::new(7, 2, Some("Item 7"))).unwrap();
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["listId"], 2);
        assert_eq!(json["name"], "Item 7");
    }
}
