use std::io;
use std::io::{BufRead, ErrorKind};

use crate::entry::Comment;
use crate::import::line_cursor::LineCursor;
use crate::import::markers::SECTION_MARKER;
use crate::import::split_field_line;
use crate::text_utils::parse_export_date;

/// Parses one COMMENT section: four labeled header lines in fixed order,
/// the date, then free text until the section marker. Comment bodies are
/// always paragraph-wrapped, regardless of the entry's break conversion.
pub fn parse_comment<R: BufRead>(cursor: &mut LineCursor<R>) -> io::Result<Comment> {
    let author = comment_field(cursor, "AUTHOR")?;
    let email = comment_field(cursor, "EMAIL")?;
    comment_field(cursor, "IP")?;
    let url = comment_field(cursor, "URL")?;

    let date_str = comment_field(cursor, "DATE")?;
    let date = match parse_export_date(&date_str) {
        Ok(d) => d,
        Err(e) => {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("line {}: parsing comment date: {}", cursor.line_no(), e),
            ));
        }
    };

    let mut content = String::new();
    while let Some(line) = cursor.next_line()? {
        if line == SECTION_MARKER {
            return Ok(Comment {
                author,
                email,
                url,
                date,
                content,
            });
        }
        if !line.is_empty() {
            content.push_str("<p>");
            content.push_str(&line);
            content.push_str("</p>\n");
        }
    }

    Err(io::Error::new(ErrorKind::UnexpectedEof, "Unterminated comment body"))
}

fn comment_field<R: BufRead>(cursor: &mut LineCursor<R>, key: &str) -> io::Result<String> {
    let line = match cursor.next_line()? {
        Some(line) => line,
        None => {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                format!("Expecting {} in comment header", key),
            ));
        }
    };

    let (k, v) = match split_field_line(&line) {
        Some(kv) => kv,
        None => {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("line {}: wrong format for comment {}", cursor.line_no(), key),
            ));
        }
    };
    if k != key {
        return Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("line {}: expected {}, got {}", cursor.line_no(), key, k),
        ));
    }

    Ok(v.to_string())
}
