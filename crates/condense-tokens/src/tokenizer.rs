/// Whether `byte` belongs to a word token.
///
/// Word characters are all ASCII, so scanning bytes never splits a UTF-8
/// sequence: every non-ASCII byte is a separator.
#[inline]
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'\''
}

/// Lazy iterator over the lowercase word tokens of a string.
///
/// Cloning is cheap and yields an independent cursor, so a token stream can
/// be restarted by calling [`tokenize`] again or cloning before consumption.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

/// Tokenize `text` into lowercase words.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

impl<'a> Tokens<'a> {
    /// Next raw (not lowercased) word slice.
    fn next_span(&mut self) -> Option<&'a str> {
        let bytes = self.text.as_bytes();
        let start = self.pos + bytes[self.pos..].iter().position(|&b| is_word_byte(b))?;
        let end = bytes[start..]
            .iter()
            .position(|&b| !is_word_byte(b))
            .map_or(bytes.len(), |offset| start + offset);
        self.pos = end;
        Some(&self.text[start..end])
    }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_span().map(str::to_ascii_lowercase)
    }

    fn count(mut self) -> usize {
        let mut n = 0;
        while self.next_span().is_some() {
            n += 1;
        }
        n
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}
