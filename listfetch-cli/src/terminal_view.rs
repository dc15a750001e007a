//! Terminal rendering of the ordered list
//!
//! Data goes to the wrapped writer (stdout in the binary); the loading
//! indicator goes to stderr so piped output stays clean.

use anyhow::Result;
use clap::ValueEnum;
use listfetch_core::{ListEntry, ListView, Row};
use std::io::Write;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use tracing::{debug, error};

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rounded table
    Table,
    /// One line per row: "List Id: .. | Name: .. | ID: .."
    Plain,
    /// JSON array of entries
    Json,
}

/// Table row for list results
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "List Id")]
    list_id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: i64,
}

/// Render entries in the requested format
pub fn render(entries: &[ListEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
        OutputFormat::Plain => Ok(entries
            .iter()
            .map(|entry| {
                let Row { list_id, name, id } = entry.row();
                format!("{list_id} | {name} | {id}")
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => {
            if entries.is_empty() {
                return Ok("No items found.".to_string());
            }

            let table_rows: Vec<EntryRow> = entries
                .iter()
                .map(|entry| EntryRow {
                    list_id: entry.group_id,
                    name: entry.name.clone(),
                    id: entry.id,
                })
                .collect();

            Ok(Table::new(&table_rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()))
                .to_string())
        }
    }
}

/// [`ListView`] that prints each loaded list
pub struct TerminalView<W: Write> {
    out: W,
    format: OutputFormat,
    loading: bool,
    shown: usize,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            loading: false,
            shown: 0,
        }
    }

    /// Entries currently on screen
    pub fn shown(&self) -> usize {
        self.shown
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ListView for TerminalView<W> {
    fn clear(&mut self) {
        self.shown = 0;
    }

    fn show_loading(&mut self) {
        if !self.loading {
            eprintln!("Loading items...");
        }
        self.loading = true;
    }

    fn show_entries(&mut self, entries: &[ListEntry]) {
        let rendered = match render(entries, self.format) {
            Ok(rendered) => rendered,
            Err(e) => {
                error!("Failed to render {} entries: {:#}", entries.len(), e);
                return;
            }
        };

        if let Err(e) = writeln!(self.out, "{rendered}").and_then(|_| self.out.flush()) {
            error!("Failed to write results: {}", e);
            return;
        }

        self.shown = entries.len();
        debug!("Displayed {} entries", self.shown);
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listfetch_core::Item;

    fn entries() -> Vec<ListEntry> {
        vec![
            ListEntry::from_item(Item::new(2, 1, Some("Item 5"))).unwrap(),
            ListEntry::from_item(Item::new(1, 2, Some("Item 21"))).unwrap(),
        ]
    }

    #[test]
    fn test_plain_uses_row_text() {
        let text = render(&entries(), OutputFormat::Plain).unwrap();
        assert_eq!(
            text,
            "List Id: 1 | Name: Item 5 | ID: 2\nList Id: 2 | Name: Item 21 | ID: 1"
        );
    }

    #[test]
    fn test_json_keeps_order_and_wire_names() {
        let text = render(&entries(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value[0]["listId"], 1);
        assert_eq!(value[1]["name"], "Item 21");
    }

    #[test]
    fn test_table_has_headers() {
        let text = render(&entries(), OutputFormat::Table).unwrap();
        assert!(text.contains("List Id"));
        assert!(text.contains("Item 21"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            render(&[], OutputFormat::Table).unwrap(),
            "No items found."
        );
    }

    #[test]
    fn test_view_writes_loaded_entries() {
        let mut view = TerminalView::new(Vec::new(), OutputFormat::Plain);

        view.show_loading();
        assert!(view.is_loading());
        view.show_entries(&entries());
        view.hide_loading();

        assert!(!view.is_loading());
        assert_eq!(view.shown(), 2);

        let out = String::from_utf8(view.into_inner()).unwrap();
        assert!(out.contains("Name: Item 5"));
    }
}
