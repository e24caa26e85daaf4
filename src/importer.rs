use std::fs;
use std::io;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use spdlog::info;

use crate::config::Config;
use crate::entry::Entry;
use crate::import::header_parser::{parse_entry_header, HeaderEnd};
use crate::import::line_cursor::LineCursor;
use crate::import::section_parser::parse_sections;
use crate::view::entry_renderer::EntryRenderer;

pub struct ImportStats {
    pub entries: usize,
    pub comments: usize,
}

/// Parses one entry block from the stream, or None once the export is
/// exhausted.
pub fn next_entry<R: BufRead>(cursor: &mut LineCursor<R>) -> io::Result<Option<Entry>> {
    let mut entry = Entry::new();
    match parse_entry_header(cursor, &mut entry)? {
        HeaderEnd::EndOfStream => Ok(None),
        HeaderEnd::SectionsFollow => {
            parse_sections(cursor, &mut entry)?;
            Ok(Some(entry))
        }
    }
}

/// Drains the export stream, writing one rendered file per entry into
/// out_dir. Any failure aborts the run; files already written stay behind.
pub fn import_reader<R: BufRead>(reader: R, out_dir: &Path, config: &Config) -> Result<ImportStats> {
    let renderer = EntryRenderer::new(config.textile_command(), config.output_extension())?;
    let mut cursor = LineCursor::new(reader);
    let mut stats = ImportStats {
        entries: 0,
        comments: 0,
    };

    while let Some(entry) = next_entry(&mut cursor)? {
        stats.comments += entry.comments.len();
        let rendered = renderer.render(entry)?;

        info!("Writing {}", rendered.file_name);
        let path = out_dir.join(&rendered.file_name);
        fs::write(&path, &rendered.bytes).with_context(|| format!("Error writing {}", path.display()))?;
        stats.entries += 1;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::io::Cursor;
    use std::process;

    use crate::test_data::{EXPORT_DATA, EXPORT_DATA_MALFORMED};

    use super::*;

    fn parse_all(input: &str) -> io::Result<Vec<Entry>> {
        let mut cursor = LineCursor::new(Cursor::new(input.to_string()));
        let mut entries = vec![];
        while let Some(entry) = next_entry(&mut cursor)? {
            entries.push(entry);
        }
        Ok(entries)
    }

    #[test]
    fn test_parses_all_entries() {
        let entries = parse_all(EXPORT_DATA).unwrap();
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.header.get("title").unwrap(), "\"Hello world\"");
        assert_eq!(
            first.content,
            "<p>First paragraph.</p>\n<p>Second paragraph.</p>\n<p>Extended part.</p>\n"
        );
        assert_eq!(first.comments.len(), 1);
        assert_eq!(first.comments[0].author, "Bruno");

        let second = &entries[1];
        assert_eq!(second.content, "<p>Already html.</p>\n");
        assert!(second.comments.is_empty());
    }

    #[test]
    fn test_rendered_stream_end_to_end() {
        let mut entries = parse_all(EXPORT_DATA).unwrap();
        let renderer = EntryRenderer::new("redcloth", ".html").unwrap();

        let rendered = renderer.render(entries.remove(0)).unwrap();
        assert_eq!(rendered.file_name, "2006-01-02-hello-world.html");
    }

    #[test]
    fn test_malformed_header_aborts() {
        let err = parse_all(EXPORT_DATA_MALFORMED).unwrap_err();
        assert!(err.to_string().contains("in entry header"));
    }

    #[test]
    fn test_import_reader_writes_files() {
        let out_dir = env::temp_dir().join(format!("mtimport_test_{}", process::id()));
        fs::create_dir_all(&out_dir).unwrap();

        let stats = import_reader(Cursor::new(EXPORT_DATA.to_string()), &out_dir, &Config::default()).unwrap();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.comments, 1);

        let first = fs::read_to_string(out_dir.join("2006-01-02-hello-world.html")).unwrap();
        assert!(first.starts_with("---\n"));
        assert!(first.contains("title: \"Hello world\"\n"));
        assert!(!first.contains("permalink"));
        assert!(first.contains("<div class=\"comments\">"));

        let second = fs::read_to_string(out_dir.join("2007-02-03-second-post.html")).unwrap();
        assert!(second.contains("<p>Already html.</p>\n"));

        fs::remove_dir_all(&out_dir).unwrap();
    }
}
