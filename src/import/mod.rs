use lazy_static::lazy_static;
use regex::Regex;

pub mod comment_parser;
pub mod field_table;
pub mod header_parser;
pub mod line_cursor;
pub mod markers;
pub mod section_parser;

/// Splits a `KEY: value` line around its first colon. The value is trimmed,
/// the key is not. Lines without a colon yield None.
pub fn split_field_line(line: &str) -> Option<(&str, &str)> {
    lazy_static! {
        static ref FIELD_REGEX: Regex = Regex::new(r"^(?P<key>[^:]+):(?P<value>.*)$").unwrap();
    }

    let res = FIELD_REGEX.captures(line).and_then(|cap| {
        let key = cap.name("key").map(|key| key.as_str());
        let val = cap.name("value").map(|val| val.as_str().trim());
        match (key, val) {
            (Some(key), Some(val)) => Some((key, val)),
            _ => None,
        }
    });

    res
}
