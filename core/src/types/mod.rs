pub(crate) mod document;
pub use document::Document;

pub(crate) mod title;
pub use title::{MAX_TITLE_LENGTH, Title, TitleError};
