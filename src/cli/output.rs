//! Output formatting utilities

use crate::domain::DiaryEntry;

/// Shown in place of blocks when an entry has none
pub const NO_CHANGES: &str = "(No changes)";

/// Format entry titles with their indices for display
pub fn format_entry_list(titles: &[String]) -> String {
    // Parsed diaries always hold at least one entry; library callers may not
    if titles.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (index, title) in titles.iter().enumerate() {
        output.push_str(&format!("{:>3}  {}\n", index, title));
    }
    output
}

/// Format one entry as plain text: title, blocks, then narrative
pub fn format_entry(entry: &DiaryEntry) -> String {
    let mut output = String::new();
    output.push_str(&entry.title);
    output.push_str("\n\n");

    if entry.blocks.is_empty() {
        output.push_str(NO_CHANGES);
        output.push('\n');
    } else {
        for block in &entry.blocks {
            output.push_str(&format!("== {} ==\n", block.title.trim()));
            for line in &block.lines {
                output.push_str(line);
                output.push('\n');
            }
            output.push('\n');
        }
    }

    if !entry.text.is_empty() {
        if entry.blocks.is_empty() {
            output.push('\n');
        }
        output.push_str(&entry.narrative());
        output.push('\n');
    }

    output
}
