use std::collections::HashMap;

use lazy_static::lazy_static;

/// How a legacy header key is handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Value stored pre-quoted under the mapped front-matter name
    Mapped(&'static str),
    /// Recognized but carries no output representation
    Dropped,
    /// Entry timestamp, parsed and canonicalized
    Date,
    /// The CONVERT BREAKS markup/normalization selector
    Markup,
}

lazy_static! {
    static ref ENTRY_FIELDS: HashMap<&'static str, FieldKind> = {
        let mut m = HashMap::new();
        m.insert("AUTHOR", FieldKind::Mapped("author"));
        m.insert("TITLE", FieldKind::Mapped("title"));
        m.insert("BASENAME", FieldKind::Mapped("permalink"));
        m.insert("STATUS", FieldKind::Mapped("status"));
        m.insert("ALLOW COMMENTS", FieldKind::Dropped);
        m.insert("ALLOW PINGS", FieldKind::Dropped);
        m.insert("PRIMARY CATEGORY", FieldKind::Mapped("primary_category"));
        m.insert("CATEGORY", FieldKind::Mapped("category"));
        m.insert("TAGS", FieldKind::Mapped("tags"));
        m.insert("DATE", FieldKind::Date);
        m.insert("CONVERT BREAKS", FieldKind::Markup);
        m
    };
}

pub fn lookup(key: &str) -> Option<FieldKind> {
    ENTRY_FIELDS.get(key).copied()
}
