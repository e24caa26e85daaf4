#[cfg(test)]
pub const EXPORT_DATA: &str = "AUTHOR: Ana Souza
TITLE: Hello world
BASENAME: hello_world
STATUS: Publish
ALLOW COMMENTS: 1
CONVERT BREAKS: 1
DATE: 01/02/2006 3:04:05 PM
-----
BODY:
First paragraph.

Second paragraph.
-----
EXTENDED BODY:
Extended part.
-----
COMMENT:
AUTHOR: Bruno
EMAIL: bruno@example.com
IP: 127.0.0.1
URL: http://example.com/bruno
DATE: 01/03/2006 8:00:00 AM
Nice post!
-----
--------
AUTHOR: Ana Souza
TITLE: Second post
BASENAME: second_post
STATUS: Publish
CONVERT BREAKS: 0
DATE: 02/03/2007 10:00:00 AM
-----
BODY:
<p>Already html.</p>
-----
EXCERPT:
A short version that the importer discards.
-----
--------
";

#[cfg(test)]
pub const EXPORT_DATA_MALFORMED: &str = "AUTHOR: Ana Souza
TITLE without a colon
-----
BODY:
never reached
-----
--------
";
