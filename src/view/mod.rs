pub mod comment_renderer;
pub mod entry_renderer;
pub mod textile;
