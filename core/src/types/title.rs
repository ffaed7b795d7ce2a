use nutype::nutype;

pub const MAX_TITLE_LENGTH: usize = 256;

/// Unique key of a stored document.
///
/// Surrounding whitespace is trimmed; an empty result is rejected, so every
/// stored title has at least one character to score against.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_TITLE_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Title(String);
