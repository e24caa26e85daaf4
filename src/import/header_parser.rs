use std::io;
use std::io::{BufRead, ErrorKind};

use crate::entry::Entry;
use crate::import::field_table::{lookup, FieldKind};
use crate::import::line_cursor::LineCursor;
use crate::import::markers::SECTION_MARKER;
use crate::import::split_field_line;
use crate::text_utils::{format_header_date, parse_export_date, quote_value};

#[derive(Debug, PartialEq)]
pub enum HeaderEnd {
    /// The header block ended at its section marker and sections follow
    SectionsFollow,
    /// The stream ran out before this entry produced any header content,
    /// meaning there are no more entries
    EndOfStream,
}

/// Consumes `KEY: value` lines into the entry until the section marker.
/// Blank lines are skipped. Exhaustion after partial header content is a
/// truncated export and fails.
pub fn parse_entry_header<R: BufRead>(cursor: &mut LineCursor<R>, entry: &mut Entry) -> io::Result<HeaderEnd> {
    let mut consumed = false;

    loop {
        let line = match cursor.next_line()? {
            Some(line) => line,
            None => {
                if consumed {
                    return Err(io::Error::new(
                        ErrorKind::UnexpectedEof,
                        "Unexpected end of file inside an entry header",
                    ));
                }
                return Ok(HeaderEnd::EndOfStream);
            }
        };

        if line == SECTION_MARKER {
            return Ok(HeaderEnd::SectionsFollow);
        }
        if line.is_empty() {
            continue;
        }

        consumed = true;
        header_item(&line, cursor.line_no(), entry)?;
    }
}

fn header_item(line: &str, line_no: u64, entry: &mut Entry) -> io::Result<()> {
    let (key, val) = match split_field_line(line) {
        Some(kv) => kv,
        None => {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("line {}: unexpected `{}` in entry header", line_no, line),
            ));
        }
    };

    match lookup(key) {
        Some(FieldKind::Mapped(name)) => {
            entry.header.insert(name.to_string(), quote_value(val));
        }
        Some(FieldKind::Dropped) => {}
        Some(FieldKind::Date) => {
            let date = match parse_export_date(val) {
                Ok(d) => d,
                Err(e) => {
                    return Err(io::Error::new(ErrorKind::InvalidData, format!("line {}: {}", line_no, e)));
                }
            };
            entry.header.insert("date".to_string(), format_header_date(&date));
            entry.date = Some(date);
        }
        Some(FieldKind::Markup) => apply_markup(val, line_no, entry)?,
        None => {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("line {}: unknown header key `{}`", line_no, key),
            ));
        }
    }

    Ok(())
}

fn apply_markup(val: &str, line_no: u64, entry: &mut Entry) -> io::Result<()> {
    match val {
        "markdown" | "markdown_with_smartypants" => {
            entry.header.insert("markup".to_string(), "markdown".to_string());
        }
        "1" | "__default__" => entry.convert_breaks = true,
        "0" => entry.convert_breaks = false,
        "textile" | "textile_2" => {
            entry.header.insert("markup".to_string(), "textile".to_string());
        }
        _ => {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("line {}: unsupported markup {}", line_no, val),
            ));
        }
    }

    Ok(())
}
