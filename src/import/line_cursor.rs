use std::io;
use std::io::BufRead;

/// Walks an export stream line by line. Once the underlying reader is
/// exhausted, next_line keeps returning None; a read failure is a transport
/// error and surfaces as-is.
pub struct LineCursor<R: BufRead> {
    reader: R,
    line_no: u64,
    eof: bool,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(reader: R) -> LineCursor<R> {
        LineCursor {
            reader,
            line_no: 0,
            eof: false,
        }
    }

    /// Returns the next line without its trailing newline
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.eof {
            return Ok(None);
        }

        let mut buf = String::new();
        let read = self.reader.read_line(&mut buf)?;
        if read == 0 {
            self.eof = true;
            return Ok(None);
        }

        self.line_no += 1;
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }

        Ok(Some(buf))
    }

    /// 1-based number of the last line returned, for diagnostics
    pub fn line_no(&self) -> u64 {
        self.line_no
    }
}
