use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::entry::Comment;
use crate::text_utils::format_comment_date;

const COMMENTS_TPL: &str = r#"<div class="comments">
{{#comments}}<div class="comment">
<div class="comment-header">
<span class="comment-author">{{#has_url}}<a rel="nofollow" href="{{url}}">{{author}}</a>{{/has_url}}{{^has_url}}{{author}}{{/has_url}}</span> <span class="comment-date">{{date}}</span>
</div>
<div class="comment-body">
{{{content}}}</div>
</div>
{{/comments}}</div>
"#;

#[derive(ramhorns::Content)]
struct CommentView<'a> {
    author: &'a str,
    url: &'a str,
    has_url: bool,
    date: String,
    content: &'a str,
}

#[derive(ramhorns::Content)]
struct CommentsBlock<'a> {
    comments: Vec<CommentView<'a>>,
}

pub struct CommentRenderer {
    template: Template<'static>,
}

impl CommentRenderer {
    pub fn new() -> io::Result<CommentRenderer> {
        let template = match Template::new(COMMENTS_TPL) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing comment block template: {}", e)));
            }
        };

        Ok(CommentRenderer { template })
    }

    pub fn render(&self, comments: &[Comment]) -> String {
        let comments: Vec<CommentView> = comments
            .iter()
            .map(|c| CommentView {
                author: c.author.as_str(),
                url: c.url.as_str(),
                has_url: !c.url.is_empty(),
                date: format_comment_date(&c.date),
                content: c.content.as_str(),
            })
            .collect();

        self.template.render(&CommentsBlock { comments })
    }
}

#[cfg(test)]
mod tests {
    use crate::text_utils::parse_export_date;

    use super::*;

    fn comment(author: &str, url: &str, content: &str) -> Comment {
        Comment {
            author: author.to_string(),
            email: "".to_string(),
            url: url.to_string(),
            date: parse_export_date("01/03/2006 8:00:00 AM").unwrap(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_author_with_url_renders_as_link() {
        let renderer = CommentRenderer::new().unwrap();
        let comments = vec![comment("Bruno", "http://example.com/bruno", "<p>Nice post!</p>\n")];
        let res = renderer.render(&comments);
        assert_eq!(res, r#"<div class="comments">
<div class="comment">
<div class="comment-header">
<span class="comment-author"><a rel="nofollow" href="http://example.com/bruno">Bruno</a></span> <span class="comment-date">2006-01-03 08:00</span>
</div>
<div class="comment-body">
<p>Nice post!</p>
</div>
</div>
</div>
"#);
    }

    #[test]
    fn test_author_without_url_renders_plain() {
        let renderer = CommentRenderer::new().unwrap();
        let comments = vec![comment("Carla", "", "<p>Hello</p>\n")];
        let res = renderer.render(&comments);
        assert_eq!(res, r#"<div class="comments">
<div class="comment">
<div class="comment-header">
<span class="comment-author">Carla</span> <span class="comment-date">2006-01-03 08:00</span>
</div>
<div class="comment-body">
<p>Hello</p>
</div>
</div>
</div>
"#);
    }

    #[test]
    fn test_comments_keep_input_order() {
        let renderer = CommentRenderer::new().unwrap();
        let comments = vec![
            comment("First", "", "<p>one</p>\n"),
            comment("Second", "", "<p>two</p>\n"),
        ];
        let res = renderer.render(&comments);
        let first = res.find("First").unwrap();
        let second = res.find("Second").unwrap();
        assert!(first < second);
    }
}
