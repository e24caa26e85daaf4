/// Ends a named section and the entry header block
pub const SECTION_MARKER: &str = "-----";

/// Separates whole entries in the export stream
pub const ENTRY_MARKER: &str = "--------";
