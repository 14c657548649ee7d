// Owned chunk of text, tagged with the state it was grouped under

/// A chunk of text copied out of its input.
///
/// `pos` and `len` are byte offsets into the original input. They are kept
/// separately from `text` because a chunk boundary may fall inside a
/// multi-byte UTF-8 sequence, in which case `text` holds replacement
/// characters and its length differs from `len`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token<S> {
    /// State the chunk was reported under.
    pub state: S,

    /// Text content, lossily decoded.
    pub text: String,

    /// Byte offset of the first byte.
    pub pos: usize,

    /// Length in bytes.
    pub len: usize,
}

impl<S> Token<S> {
    /// Copy `bytes[pos..pos + len]` into a token.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds for `bytes`.
    pub fn from_bytes(state: S, bytes: &[u8], pos: usize, len: usize) -> Self {
        let text = String::from_utf8_lossy(&bytes[pos..pos + len]).into_owned();
        Self {
            state,
            text,
            pos,
            len,
        }
    }

    /// Byte offset one past the last byte.
    pub fn end(&self) -> usize {
        self.pos + self.len
    }

    /// Text with control characters escaped, for single-line display.
    pub fn escaped_text(&self) -> String {
        self.text
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
            .replace('\u{0B}', "\\v")
            .replace('\u{0C}', "\\f")
    }
}
