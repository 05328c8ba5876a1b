use crate::metadata::VideoMetadata;

pub const REPORT_HEADER: &str = "| Thumbnail URL | Video Name | Video Description |";
const REPORT_SEPARATOR: &str = "|---|---|---|";
const ELLIPSIS: &str = "...";

pub fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Cut `value` to `max_chars` characters, the last three replaced by `...`.
pub fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = value.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Markdown table built up one video at a time.
#[derive(Debug, Clone)]
pub struct Report {
    description_max_chars: usize,
    rows: Vec<String>,
}

impl Report {
    pub fn new(description_max_chars: usize) -> Self {
        Self {
            description_max_chars,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, meta: &VideoMetadata) {
        let description = truncate(&meta.description, self.description_max_chars);
        self.rows.push(format!(
            "| {} | {} | {} |",
            escape_cell(&meta.thumbnail_url),
            escape_cell(&meta.title),
            escape_cell(&description),
        ));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in [REPORT_HEADER, REPORT_SEPARATOR]
            .into_iter()
            .chain(self.rows.iter().map(String::as_str))
        {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
