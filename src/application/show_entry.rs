//! Show entry use case

use crate::domain::selection::{resolve_requested, step};
use crate::domain::{DiaryEntry, DiaryParser};
use crate::error::Result;
use crate::infrastructure::DiarySource;

use super::open_diary::open_diary;

/// Which entry to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryRequest {
    /// Requested index; missing or out of range means the first entry
    pub index: Option<usize>,

    /// Relative move from the resolved index, wrapping around
    pub offset: isize,
}

/// Service for selecting a single entry
pub struct ShowEntryService {
    parser: DiaryParser,
}

impl ShowEntryService {
    pub fn new(parser: DiaryParser) -> Self {
        ShowEntryService { parser }
    }

    /// Resolve the request and return the chosen entry with its index.
    ///
    /// Returns `None` for a diary without entries.
    pub fn execute(
        &self,
        source: &DiarySource,
        request: EntryRequest,
    ) -> Result<Option<(usize, DiaryEntry)>> {
        let entries = open_diary(source, self.parser)?;
        Ok(Self::select(entries, request))
    }

    pub fn select(entries: Vec<DiaryEntry>, request: EntryRequest) -> Option<(usize, DiaryEntry)> {
        let len = entries.len();
        let resolved = resolve_requested(request.index, len)?;
        let index = step(resolved, request.offset, len);
        log::debug!(
            "requested {:?} with offset {} selects entry {} of {}",
            request.index,
            request.offset,
            index,
            len
        );
        entries.into_iter().nth(index).map(|entry| (index, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(count: usize) -> Vec<DiaryEntry> {
        (0..count)
            .map(|i| DiaryEntry::new(format!("Entry: Year 1, day {}", i + 1), vec![], vec![]))
            .collect()
    }

    #[test]
    fn test_select_requested_index() {
        let request = EntryRequest {
            index: Some(1),
            offset: 0,
        };
        let (index, entry) = ShowEntryService::select(entries(3), request).unwrap();
        assert_eq!(index, 1);
        assert_eq!(entry.title, "Entry: Year 1, day 2");
    }

    #[test]
    fn test_select_out_of_range_shows_first() {
        let request = EntryRequest {
            index: Some(10),
            offset: 0,
        };
        let (index, _) = ShowEntryService::select(entries(3), request).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_select_with_wrapping_offset() {
        let prev = EntryRequest {
            index: Some(0),
            offset: -1,
        };
        assert_eq!(ShowEntryService::select(entries(3), prev).unwrap().0, 2);

        let next = EntryRequest {
            index: Some(2),
            offset: 1,
        };
        assert_eq!(ShowEntryService::select(entries(3), next).unwrap().0, 0);
    }

    #[test]
    fn test_select_from_empty() {
        assert!(ShowEntryService::select(vec![], EntryRequest::default()).is_none());
    }
}
