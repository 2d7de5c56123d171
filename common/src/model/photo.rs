/// A candidate profile picture as selected by the user.
///
/// Only the declared media type is inspected; the bytes are carried through
/// untouched for preview generation and submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl Photo {
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Image acceptance check: the declared media type must be `image/*`.
    pub fn is_image(&self) -> bool {
        self.media_type
            .split_once('/')
            .is_some_and(|(kind, subtype)| kind.eq_ignore_ascii_case("image") && !subtype.is_empty())
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
