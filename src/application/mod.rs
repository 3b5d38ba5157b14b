//! Application layer - Use cases and orchestration

pub mod export;
pub mod list_entries;
pub mod manage_config;
pub mod open_diary;
pub mod show_entry;

pub use export::{ExportFormat, ExportOptions, ExportService};
pub use list_entries::list_entries;
pub use manage_config::ConfigService;
pub use open_diary::open_diary;
pub use show_entry::{EntryRequest, ShowEntryService};
