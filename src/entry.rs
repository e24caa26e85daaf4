use std::collections::HashMap;

use chrono::NaiveDateTime;

/// One reader comment attached to an entry. Fully populated in a single
/// parsing pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub author: String,
    /// Parsed from the export but never rendered
    pub email: String,
    /// Empty when the commenter left no URL
    pub url: String,
    pub date: NaiveDateTime,
    pub content: String,
}

/// One blog post from the export stream: header fields, accumulated body
/// and comments. Values in `header` for table-mapped fields are stored
/// pre-quoted; `date` and `markup` are stored as-is.
#[derive(Debug)]
pub struct Entry {
    pub date: Option<NaiveDateTime>,
    pub header: HashMap<String, String>,
    pub content: String,
    pub comments: Vec<Comment>,
    pub convert_breaks: bool,
}

impl Entry {
    pub fn new() -> Entry {
        Entry {
            date: None,
            header: HashMap::new(),
            content: String::new(),
            comments: vec![],
            convert_breaks: false,
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Entry::new()
    }
}
