use std::io;
use std::io::{BufRead, ErrorKind};

use crate::entry::Entry;
use crate::import::comment_parser::parse_comment;
use crate::import::line_cursor::LineCursor;
use crate::import::markers::{ENTRY_MARKER, SECTION_MARKER};

/// Reads named sections in a loop until the entry marker, routing each to
/// its handler. Runs after the entry header has been consumed.
pub fn parse_sections<R: BufRead>(cursor: &mut LineCursor<R>, entry: &mut Entry) -> io::Result<()> {
    loop {
        let name = match next_section(cursor)? {
            Some(name) => name,
            None => return Ok(()),
        };

        match name.as_str() {
            "BODY:" | "EXTENDED BODY:" => read_body(cursor, entry)?,
            "EXCERPT:" | "KEYWORDS:" | "PING:" => skip_section(cursor)?,
            "COMMENT:" => {
                let comment = parse_comment(cursor)?;
                entry.comments.push(comment);
            }
            _ => {
                return Err(io::Error::new(
                    ErrorKind::InvalidData,
                    format!("line {}: unknown section `{}`", cursor.line_no(), name),
                ));
            }
        }
    }
}

/// Next section name, or None once the entry marker is reached. Every opened
/// entry must be closed, so exhaustion here fails.
fn next_section<R: BufRead>(cursor: &mut LineCursor<R>) -> io::Result<Option<String>> {
    loop {
        let line = match cursor.next_line()? {
            Some(line) => line,
            None => {
                return Err(io::Error::new(
                    ErrorKind::UnexpectedEof,
                    "Unexpected end of file before the entry was closed",
                ));
            }
        };

        if line == ENTRY_MARKER {
            return Ok(None);
        }
        if !line.is_empty() {
            return Ok(Some(line));
        }
    }
}

/// Accumulates body lines until the section marker, applying the
/// break-to-paragraph policy. Lines already opening a paragraph tag pass
/// through untouched.
fn read_body<R: BufRead>(cursor: &mut LineCursor<R>, entry: &mut Entry) -> io::Result<()> {
    while let Some(line) = cursor.next_line()? {
        if line == SECTION_MARKER {
            return Ok(());
        }

        if entry.convert_breaks && !line.starts_with("<p ") && !line.starts_with("<p>") {
            if line.is_empty() {
                continue;
            }
            entry.content.push_str("<p>");
            entry.content.push_str(&line);
            entry.content.push_str("</p>\n");
        } else {
            entry.content.push_str(&line);
            entry.content.push('\n');
        }
    }

    Err(io::Error::new(ErrorKind::UnexpectedEof, "Unterminated body section"))
}

fn skip_section<R: BufRead>(cursor: &mut LineCursor<R>) -> io::Result<()> {
    while let Some(line) = cursor.next_line()? {
        if line == SECTION_MARKER {
            return Ok(());
        }
    }

    Err(io::Error::new(ErrorKind::UnexpectedEof, "Unexpected end of section"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn parse(input: &str, convert_breaks: bool) -> io::Result<Entry> {
        let mut cursor = LineCursor::new(Cursor::new(input.to_string()));
        let mut entry = Entry::new();
        entry.convert_breaks = convert_breaks;
        parse_sections(&mut cursor, &mut entry)?;
        Ok(entry)
    }

    #[test]
    fn test_body_with_break_conversion() {
        let input = "BODY:\nhello\n\n<p>raw</p>\n-----\n--------\n";
        let entry = parse(input, true).unwrap();
        assert_eq!(entry.content, "<p>hello</p>\n<p>raw</p>\n");
    }

    #[test]
    fn test_body_without_break_conversion() {
        let input = "BODY:\nhello\n\n<p>raw</p>\n-----\n--------\n";
        let entry = parse(input, false).unwrap();
        assert_eq!(entry.content, "hello\n\n<p>raw</p>\n");
    }

    #[test]
    fn test_attributed_paragraph_is_not_rewrapped() {
        let input = "BODY:\n<p class=\"lead\">styled</p>\n-----\n--------\n";
        let entry = parse(input, true).unwrap();
        assert_eq!(entry.content, "<p class=\"lead\">styled</p>\n");
    }

    #[test]
    fn test_extended_body_feeds_the_same_accumulator() {
        let input = "BODY:\nmain part\n-----\nEXTENDED BODY:\nextended part\n-----\n--------\n";
        let entry = parse(input, true).unwrap();
        assert_eq!(entry.content, "<p>main part</p>\n<p>extended part</p>\n");
    }

    #[test]
    fn test_ignorable_sections_are_skipped() {
        let input = "EXCERPT:\nshort version\n-----\nKEYWORDS:\none two\n-----\nPING:\npayload\n-----\n--------\n";
        let entry = parse(input, true).unwrap();
        assert_eq!(entry.content, "");
        assert!(entry.comments.is_empty());
    }

    #[test]
    fn test_comment_section_appends_comment() {
        let input = "COMMENT:\n\
                     AUTHOR: Bruno\n\
                     EMAIL: bruno@example.com\n\
                     IP: 127.0.0.1\n\
                     URL: http://example.com/bruno\n\
                     DATE: 01/03/2006 8:00:00 AM\n\
                     Nice post!\n\
                     -----\n\
                     --------\n";
        let entry = parse(input, false).unwrap();
        assert_eq!(entry.comments.len(), 1);
        assert_eq!(entry.comments[0].author, "Bruno");
        assert_eq!(entry.comments[0].content, "<p>Nice post!</p>\n");
    }

    #[test]
    fn test_unknown_section_fails() {
        let err = parse("FOOTNOTES:\nx\n-----\n--------\n", false).unwrap_err();
        assert_eq!(err.to_string(), "line 1: unknown section `FOOTNOTES:`");
    }

    #[test]
    fn test_unterminated_body_fails() {
        let err = parse("BODY:\nhello\n", false).unwrap_err();
        assert_eq!(err.to_string(), "Unterminated body section");
    }

    #[test]
    fn test_missing_entry_marker_fails() {
        let err = parse("BODY:\nhello\n-----\n", false).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
