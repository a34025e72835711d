//! Result line formatting

use crate::search::ResultItem;
use crate::types::{LineFormat, OptionStringExt};
use regex::Regex;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::LazyLock;

static LINE_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[\r\n]+\s*").unwrap());

/// Which fields of a result end up on its line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Append the snippet, flattened to one line
    pub include_snippet: bool,
    /// Append the image context link and thumbnail link
    pub include_image_links: bool,
    /// Text or JSON rendering
    pub format: LineFormat,
}

/// One rendered result line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedLine(String);

impl FormattedLine {
    /// The line text, without a trailing newline
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the line, returning its text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Render one result as a line.
///
/// Title and link are always present. Optional segments that are missing
/// or empty are left out rather than rendered blank. Line breaks inside
/// any field are collapsed, so one result is always one line.
pub fn format_line(item: &ResultItem, options: &OutputOptions) -> FormattedLine {
    let title = single_line(&item.title);
    let link = single_line(&item.link);
    let snippet = options
        .include_snippet
        .then(|| item.snippet.as_deref().map(single_line))
        .flatten()
        .none_if_empty();

    let (context_link, thumbnail_link) = match (&item.image, options.include_image_links) {
        (Some(image), true) => (
            image.context_link.as_deref().map(single_line).none_if_empty(),
            image.thumbnail_link.as_deref().map(single_line).none_if_empty(),
        ),
        _ => (None, None),
    };

    match options.format {
        LineFormat::Text => {
            let mut line = format!("{title} {link}");
            for segment in [snippet, context_link, thumbnail_link].into_iter().flatten() {
                line.push(' ');
                line.push_str(&segment);
            }
            FormattedLine(line)
        }
        LineFormat::Json => {
            let mut object = Map::new();
            object.insert("title".into(), Value::String(title));
            object.insert("link".into(), Value::String(link));
            if let Some(snippet) = snippet {
                object.insert("snippet".into(), Value::String(snippet));
            }
            if let Some(link) = context_link {
                object.insert("context_link".into(), Value::String(link));
            }
            if let Some(link) = thumbnail_link {
                object.insert("thumbnail_link".into(), Value::String(link));
            }
            FormattedLine(Value::Object(object).to_string())
        }
    }
}

/// Collapse every line break, with the whitespace around it, into one space
fn single_line(text: &str) -> String {
    LINE_BREAK_REGEX.replace_all(text, " ").trim().to_string()
}
