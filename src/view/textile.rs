use std::io;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// Pipes a textile body through the external converter and returns the HTML
/// it produces. The converter reads its whole input before emitting output.
pub fn textile_to_html(command: &str, body: &str) -> io::Result<String> {
    let mut child = Command::new(command)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .map_err(|e| io::Error::new(e.kind(), format!("Failed to launch textile converter {}: {}", command, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(body.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(io::Error::new(
            ErrorKind::Other,
            format!("Textile converter {} exited with status {}", command, output.status),
        ));
    }

    match String::from_utf8(output.stdout) {
        Ok(html) => Ok(html),
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidData,
            format!("Textile converter {} produced invalid UTF-8: {}", command, e),
        )),
    }
}
