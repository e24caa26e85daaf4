use chrono::NaiveDateTime;

const EXPORT_DATE_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Parses the export timestamp format, e.g. `01/02/2006 3:04:05 PM`
pub fn parse_export_date(buf: &str) -> Result<NaiveDateTime, String> {
    match NaiveDateTime::parse_from_str(buf, EXPORT_DATE_FORMAT) {
        Ok(x) => Ok(x),
        Err(e) => Err(format!("Unable to parse date time {}: {}", buf, e)),
    }
}

/// Canonical front-matter form of an entry date. Export timestamps carry no
/// zone, so the offset field is pinned to +00:00.
pub fn format_header_date(date_time: &NaiveDateTime) -> String {
    date_time.format("%Y-%m-%d %H:%M:%S +00:00").to_string()
}

pub fn format_file_date(date_time: &NaiveDateTime) -> String {
    date_time.format("%Y-%m-%d").to_string()
}

pub fn format_comment_date(date_time: &NaiveDateTime) -> String {
    date_time.format("%Y-%m-%d %H:%M").to_string()
}

/// Quotes a header value as a string literal, the form downstream front
/// matter consumers expect for scalar values.
pub fn quote_value(val: &str) -> String {
    format!("{:?}", val)
}

/// Inverse of quote_value
pub fn unquote_value(val: &str) -> Result<String, String> {
    let inner = match val.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        Some(x) => x,
        None => return Err(format!("Value {} is not a quoted string", val)),
    };

    let mut res = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            res.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => res.push('\n'),
            Some('t') => res.push('\t'),
            Some('r') => res.push('\r'),
            Some('0') => res.push('\0'),
            Some('\\') => res.push('\\'),
            Some('"') => res.push('"'),
            Some('\'') => res.push('\''),
            Some('u') => {
                let rest = chars.as_str();
                let braced = match rest.strip_prefix('{') {
                    Some(x) => x,
                    None => return Err(format!("Bad unicode escape in {}", val)),
                };
                let end = match braced.find('}') {
                    Some(x) => x,
                    None => return Err(format!("Bad unicode escape in {}", val)),
                };
                let code = match u32::from_str_radix(&braced[..end], 16) {
                    Ok(x) => x,
                    Err(e) => return Err(format!("Bad unicode escape in {}: {}", val, e)),
                };
                match char::from_u32(code) {
                    Some(ch) => res.push(ch),
                    None => return Err(format!("Bad unicode escape in {}", val)),
                }
                chars = braced[end + 1..].chars();
            }
            Some(other) => return Err(format!("Unknown escape \\{} in {}", other, val)),
            None => return Err(format!("Truncated escape in {}", val)),
        }
    }

    Ok(res)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_parse_export_date() {
        let date_time = parse_export_date("01/02/2006 3:04:05 PM").unwrap();
        assert_eq!(date_time.year(), 2006);
        assert_eq!(date_time.month(), 1);
        assert_eq!(date_time.day(), 2);
        assert_eq!(date_time.hour(), 15);
        assert_eq!(date_time.minute(), 4);
        assert_eq!(date_time.second(), 5);

        let date_time = parse_export_date("12/31/1999 12:00:01 AM").unwrap();
        assert_eq!(date_time.hour(), 0);

        assert!(parse_export_date("2006-01-02 15:04:05").is_err());
        assert!(parse_export_date("01/02/2006").is_err());
    }

    #[test]
    fn test_format_dates() {
        let date_time = parse_export_date("01/02/2006 3:04:05 PM").unwrap();
        assert_eq!(format_header_date(&date_time), "2006-01-02 15:04:05 +00:00");
        assert_eq!(format_file_date(&date_time), "2006-01-02");
        assert_eq!(format_comment_date(&date_time), "2006-01-02 15:04");
    }

    #[test]
    fn test_quote_value() {
        assert_eq!(quote_value("my_post"), "\"my_post\"");
        assert_eq!(quote_value("He said \"hi\""), "\"He said \\\"hi\\\"\"");
    }

    #[test]
    fn test_unquote_value() {
        assert_eq!(unquote_value("\"my_post\"").unwrap(), "my_post");
        assert_eq!(unquote_value("\"He said \\\"hi\\\"\"").unwrap(), "He said \"hi\"");
        assert!(unquote_value("my_post").is_err());

        let quoted = quote_value("tabs\tand\nbreaks");
        assert_eq!(unquote_value(&quoted).unwrap(), "tabs\tand\nbreaks");
    }
}
