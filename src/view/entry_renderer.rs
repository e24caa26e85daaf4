use std::io;
use std::io::ErrorKind;
use std::mem;

use spdlog::info;

use crate::entry::Entry;
use crate::text_utils::{format_file_date, unquote_value};
use crate::view::comment_renderer::CommentRenderer;
use crate::view::textile::textile_to_html;

#[derive(Debug)]
pub struct RenderedEntry {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Renders a fully parsed entry into its output bytes and filename. The
/// permalink names the file and is dropped from the front matter; a textile
/// body goes through the external converter first.
pub struct EntryRenderer {
    textile_command: String,
    output_extension: String,
    comment_renderer: CommentRenderer,
}

impl EntryRenderer {
    pub fn new(textile_command: &str, output_extension: &str) -> io::Result<EntryRenderer> {
        Ok(EntryRenderer {
            textile_command: textile_command.to_string(),
            output_extension: output_extension.to_string(),
            comment_renderer: CommentRenderer::new()?,
        })
    }

    pub fn render(&self, mut entry: Entry) -> io::Result<RenderedEntry> {
        let permalink = match entry.header.remove("permalink") {
            Some(p) => p,
            None => return Err(io::Error::new(ErrorKind::InvalidData, "No permalink in entry")),
        };
        let permalink = match unquote_value(&permalink) {
            Ok(p) => p,
            Err(e) => return Err(io::Error::new(ErrorKind::InvalidData, e)),
        };

        let date = match entry.date {
            Some(d) => d,
            None => {
                return Err(io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Entry {} has no DATE field", permalink),
                ));
            }
        };
        let file_name = format!(
            "{}-{}{}",
            format_file_date(&date),
            permalink.replace('_', "-"),
            self.output_extension
        );

        let mut body = mem::take(&mut entry.content);
        if entry.header.get("markup").map(String::as_str) == Some("textile") {
            body = textile_to_html(&self.textile_command, &body)?;
            entry.header.remove("markup");
            info!("Converted textile body for {}", file_name);
        }

        let mut header_lines: Vec<String> = entry
            .header
            .iter()
            .map(|(k, v)| format!("{}: {}\n", k, v))
            .collect();
        header_lines.sort();

        let mut buf = String::new();
        buf.push_str("---\n");
        for line in &header_lines {
            buf.push_str(line);
        }
        buf.push_str("---\n");
        buf.push_str(&body);
        if !entry.comments.is_empty() {
            buf.push_str("\n\n");
            buf.push_str(&self.comment_renderer.render(&entry.comments));
        }

        Ok(RenderedEntry {
            file_name,
            bytes: buf.into_bytes(),
        })
    }
}
