//! HTML rendering of diary entries
//!
//! Labeled blocks are rendered as plain preformatted content. Narrative text is
//! rendered as Markdown with task lists enabled. Raw HTML embedded in the
//! narrative is escaped instead of passed through, links and images with
//! `javascript:`, `vbscript:` or `data:` targets point at `#`, and task-list items (and
//! lists made only of task items) get a `checkbox` class for styling.

use crate::domain::selection::resolve_requested;
use crate::domain::{DiaryBlock, DiaryEntry};
use pulldown_cmark::{html, CowStr, Event, Options, Parser as MdParser, Tag, TagEnd};

use super::output::NO_CHANGES;

/// Escape text for use inside an HTML element
fn escape_text(text: &str) -> String {
    let mut out = String::new();
    html::push_html(&mut out, std::iter::once(Event::Text(CowStr::Borrowed(text))));
    out
}

/// URL schemes that execute script or embed content when followed
const UNSAFE_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

fn is_unsafe_url(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    UNSAFE_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_unsafe_url(&url) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Turn raw HTML into literal text so it is escaped on output, and point
/// script-bearing link and image targets at `#`
fn neutralize_raw_html(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

/// For every event index, whether that list or item start gets the
/// `checkbox` class.
///
/// An item qualifies when its first child is a task marker. An unordered list
/// qualifies when all of its direct items qualify.
fn checkbox_marks(events: &[Event<'_>]) -> Vec<bool> {
    struct OpenList {
        start: usize,
        unordered: bool,
        items: usize,
        checkbox_items: usize,
    }

    let mut marks = vec![false; events.len()];
    let mut lists: Vec<OpenList> = Vec::new();

    for (index, event) in events.iter().enumerate() {
        match event {
            Event::Start(Tag::List(first_number)) => lists.push(OpenList {
                start: index,
                unordered: first_number.is_none(),
                items: 0,
                checkbox_items: 0,
            }),
            Event::Start(Tag::Item) => {
                let is_task = matches!(events.get(index + 1), Some(Event::TaskListMarker(_)));
                marks[index] = is_task;
                if let Some(list) = lists.last_mut() {
                    list.items += 1;
                    if is_task {
                        list.checkbox_items += 1;
                    }
                }
            }
            Event::End(TagEnd::List(_)) => {
                if let Some(list) = lists.pop() {
                    marks[list.start] =
                        list.unordered && list.items > 0 && list.items == list.checkbox_items;
                }
            }
            _ => {}
        }
    }

    marks
}

/// Render narrative Markdown to HTML
pub fn render_narrative(text: &str) -> String {
    let events: Vec<Event<'_>> = MdParser::new_ext(text, Options::ENABLE_TASKLISTS)
        .map(neutralize_raw_html)
        .collect();
    let marks = checkbox_marks(&events);

    let events = events
        .into_iter()
        .zip(marks)
        .map(|(event, checkbox)| match event {
            Event::Start(Tag::Item) if checkbox => Event::Html("<li class=\"checkbox\">".into()),
            Event::Start(Tag::List(None)) if checkbox => {
                Event::Html("<ul class=\"checkbox\">\n".into())
            }
            other => other,
        });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

fn render_block(block: &DiaryBlock) -> String {
    format!(
        "<div class=\"block\"><h3>{}</h3><div class=\"block-content\">{}</div></div>\n",
        escape_text(&block.title),
        escape_text(&block.lines.join("\n"))
    )
}

/// Render one entry: blocks on the left, narrative on the right
pub fn render_entry(entry: &DiaryEntry) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<h2 class=\"entry-title\">{}</h2>\n",
        escape_text(&entry.title)
    ));

    out.push_str("<div class=\"left\">\n");
    if entry.blocks.is_empty() {
        out.push_str(NO_CHANGES);
        out.push('\n');
    } else {
        for block in &entry.blocks {
            out.push_str(&render_block(block));
        }
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"right\">\n");
    out.push_str(&render_narrative(&entry.narrative()));
    out.push_str("</div>\n");

    out
}

/// Render a standalone page with a sidebar of titles and every entry
pub fn render_page(entries: &[DiaryEntry]) -> String {
    let active = resolve_requested(None, entries.len());

    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Diary</title>\n</head>\n<body>\n",
    );

    out.push_str("<nav id=\"sidebar\">\n");
    for (index, entry) in entries.iter().enumerate() {
        let class = if Some(index) == active {
            "entry active"
        } else {
            "entry"
        };
        out.push_str(&format!(
            "<a class=\"{}\" href=\"#entry-{}\">{}</a>\n",
            class,
            index,
            escape_text(&entry.title)
        ));
    }
    out.push_str("</nav>\n<main>\n");

    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "<section class=\"entry-content\" id=\"entry-{}\">\n",
            index
        ));
        out.push_str(&render_entry(entry));
        out.push_str("</section>\n");
    }

    out.push_str("</main>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn test_render_narrative_markdown() {
        let html = render_narrative("Felt *tired* today.");
        assert_eq!(html, "<p>Felt <em>tired</em> today.</p>\n");
    }

    #[test]
    fn test_render_narrative_escapes_raw_html() {
        let html = render_narrative("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let html = render_narrative("<div onclick=\"x()\">block</div>");
        assert!(!html.contains("<div"));
        assert!(html.contains("&lt;div"));
    }

    #[test]
    fn test_render_narrative_defuses_script_urls() {
        let html = render_narrative("[click](javascript:alert(document.cookie)) ![i](javascript:x)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains("<a href=\"#\">click</a>"));
        assert!(html.contains("<img src=\"#\""));

        let html = render_narrative("[a](JavaScript:x) [b](vbscript:y) [c](data:text/html,z)");
        assert!(!html.to_lowercase().contains("script:"));
        assert!(!html.contains("data:"));
    }

    #[test]
    fn test_render_narrative_keeps_ordinary_links() {
        let html = render_narrative("[wiki](https://cdda.example/wiki) [notes](notes.md)");
        assert!(html.contains("href=\"https://cdda.example/wiki\""));
        assert!(html.contains("href=\"notes.md\""));
    }

    #[test]
    fn test_unsafe_url_detection() {
        assert!(is_unsafe_url("javascript:alert(1)"));
        assert!(is_unsafe_url("  JAVASCRIPT:alert(1)"));
        assert!(is_unsafe_url("data:image/png;base64,AAAA"));
        assert!(!is_unsafe_url("https://example.com/javascript:"));
        assert!(!is_unsafe_url("#entry-1"));
    }

    #[test]
    fn test_task_list_gets_checkbox_classes() {
        let html = render_narrative("- [ ] find water\n- [x] build fire\n");
        assert!(html.contains("<ul class=\"checkbox\">"));
        assert_eq!(html.matches("<li class=\"checkbox\">").count(), 2);
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn test_mixed_list_marks_only_task_items() {
        let html = render_narrative("- [ ] find water\n- eat\n");
        assert!(html.contains("<ul>"));
        assert!(!html.contains("<ul class=\"checkbox\">"));
        assert_eq!(html.matches("<li class=\"checkbox\">").count(), 1);
    }

    #[test]
    fn test_plain_list_untouched() {
        let html = render_narrative("- one\n- two\n");
        assert!(!html.contains("checkbox"));
    }

    #[test]
    fn test_render_entry_blocks_and_no_changes() {
        let entry = DiaryEntry::new(
            "Entry: Year 1, day 3".to_string(),
            vec![DiaryBlock::new(
                "Kills:".to_string(),
                vec!["<zombie>".to_string()],
            )],
            vec![],
        );
        let html = render_entry(&entry);
        assert!(html.contains("<h3>Kills:</h3>"));
        assert!(html.contains("<div class=\"block-content\">&lt;zombie&gt;</div>"));

        let bare = DiaryEntry::new("Entry: Year 1, day 4".to_string(), vec![], vec![]);
        assert!(render_entry(&bare).contains("(No changes)"));
    }

    #[test]
    fn test_render_page_marks_first_entry_active() {
        let entries = vec![
            DiaryEntry::new("Entry: Year 1, day 1".to_string(), vec![], vec![]),
            DiaryEntry::new("Entry: Year 1, day 2".to_string(), vec![], vec![]),
        ];
        let html = render_page(&entries);
        assert!(html.contains("<a class=\"entry active\" href=\"#entry-0\">Entry: Year 1, day 1</a>"));
        assert!(html.contains("<a class=\"entry\" href=\"#entry-1\">Entry: Year 1, day 2</a>"));
        assert!(html.contains("id=\"entry-1\""));
    }
}
