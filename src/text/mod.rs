// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Codepoint-indexed strings.
//!
//! `Text` wraps a `String` and addresses it by codepoint rather than by
//! byte: `length`, `substring`, `range`, `pos` and the `offset_*`
//! accessors all count Unicode scalar values. `bytes_count` is the one
//! byte-level measure, taken in the wrapper's `Encoding`.
//!
//! Offsets are generic over `TryInto<usize>`, so callers holding signed
//! indices get `InvalidOffset` for negative values instead of a panic.

mod encoding;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::Error;
use crate::error::Result;

pub use encoding::Encoding;

/// A string addressed by codepoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Text {
    text: String,
    encoding: Encoding,
}

/// Validate a caller-supplied offset.
fn offset<I: TryInto<usize>>(index: I) -> Result<usize> {
    return index.try_into().map_err(|_| Error::InvalidOffset);
}

impl Text {
    /// Wrap a string, measured as UTF-8.
    pub fn new(text: impl Into<String>) -> Text {
        return Text::with_encoding(text, Encoding::Utf8);
    }

    /// Wrap a string, measured in `encoding`.
    pub fn with_encoding(text: impl Into<String>, encoding: Encoding) -> Text {
        return Text {
            text: text.into(),
            encoding,
        };
    }

    /// Decode raw bytes.
    ///
    /// With no encoding given, the encoding is taken from a leading BOM,
    /// which is skipped, falling back to UTF-8. With an explicit encoding
    /// every byte is decoded, so a leading U+FEFF stays in the text.
    pub fn from_bytes(bytes: &[u8], encoding: Option<Encoding>) -> Result<Text> {
        let (encoding, bom) = match encoding {
            Some(encoding) => (encoding, 0),
            None => Encoding::detect(bytes),
        };
        let text = encoding.decode(&bytes[bom..])?;
        trace!(%encoding, bom, len = text.len(), "decoded text");
        return Ok(Text { text, encoding });
    }

    /// Encode the text in its encoding, without a BOM.
    ///
    /// A text that itself starts with U+FEFF reads back intact through
    /// `from_bytes` with an explicit encoding; without one, that leading
    /// U+FEFF is taken as a BOM.
    pub fn to_bytes(&self) -> Vec<u8> {
        return self.encoding.encode(&self.text);
    }

    /// The encoding used by `bytes_count` and `to_bytes`.
    #[inline]
    pub fn encoding(&self) -> Encoding {
        return self.encoding;
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        return &self.text;
    }

    pub fn into_string(self) -> String {
        return self.text;
    }

    /// Iterate over the codepoints.
    pub fn chars(&self) -> std::str::Chars<'_> {
        return self.text.chars();
    }

    /// Split into pieces.
    ///
    /// An empty separator yields one string per codepoint. Otherwise the
    /// text is cut at each literal occurrence of `separator`.
    pub fn split(&self, separator: &str) -> Vec<String> {
        if separator.is_empty() {
            return self.text.chars().map(String::from).collect();
        }
        return self.text.split(separator).map(String::from).collect();
    }

    /// Number of codepoints.
    pub fn length(&self) -> usize {
        return self.text.chars().count();
    }

    /// Number of bytes the text occupies in its encoding.
    pub fn bytes_count(&self) -> usize {
        return self.encoding.encoded_len(&self.text);
    }

    /// Codepoints `[start, start + length)`, or `[start, end)` when
    /// `length` is `None`. Starting past the end gives an empty string.
    pub fn substring<I>(&self, start: I, length: Option<usize>) -> Result<String>
    where
        I: TryInto<usize>,
    {
        let start = offset(start)?;
        return Ok(self.slice(start, length).to_string());
    }

    /// Codepoints `[start, end]`, both ends inclusive.
    ///
    /// An `end` before `start` gives an empty string.
    pub fn range<I, J>(&self, start: I, end: J) -> Result<String>
    where
        I: TryInto<usize>,
        J: TryInto<usize>,
    {
        let start = offset(start)?;
        let end = offset(end)?;
        if end < start {
            return Ok(String::new());
        }
        return Ok(self.slice(start, Some((end - start).saturating_add(1))).to_string());
    }

    /// Codepoint offset of the first occurrence of `search`.
    pub fn pos(&self, search: &str) -> Option<usize> {
        let byte = self.text.find(search)?;
        return Some(self.text[..byte].chars().count());
    }

    /// Append the string form of `value`.
    pub fn append(&mut self, value: impl fmt::Display) -> &mut Text {
        self.text.push_str(&value.to_string());
        return self;
    }

    /// Prepend the string form of `value`.
    pub fn prepend(&mut self, value: impl fmt::Display) -> &mut Text {
        self.text.insert_str(0, &value.to_string());
        return self;
    }

    /// Check if `index` addresses a codepoint.
    pub fn offset_exists<I: TryInto<usize>>(&self, index: I) -> Result<bool> {
        let index = offset(index)?;
        return Ok(index < self.length());
    }

    /// The codepoint at `index`, if any.
    pub fn offset_get<I: TryInto<usize>>(&self, index: I) -> Result<Option<char>> {
        let index = offset(index)?;
        return Ok(self.text.chars().nth(index));
    }

    /// Write `value` at `index`.
    ///
    /// An empty value deletes the codepoint at `index`. Index 0 prepends
    /// and an index at or past the end appends. Anywhere else, `value`
    /// goes in right after the codepoint at `index`.
    pub fn offset_set<I: TryInto<usize>>(&mut self, index: I, value: &str) -> Result<&mut Text> {
        let index = offset(index)?;
        if value.is_empty() {
            return self.offset_unset(index);
        }
        if index == 0 {
            return Ok(self.prepend(value));
        }
        match self.text.char_indices().nth(index.saturating_add(1)) {
            Some((byte, _)) => self.text.insert_str(byte, value),
            None => self.text.push_str(value),
        }
        return Ok(self);
    }

    /// Delete the codepoint at `index`. Out-of-range indices are ignored.
    pub fn offset_unset<I: TryInto<usize>>(&mut self, index: I) -> Result<&mut Text> {
        let index = offset(index)?;
        if let Some((byte, c)) = self.text.char_indices().nth(index) {
            self.text.replace_range(byte..byte + c.len_utf8(), "");
        }
        return Ok(self);
    }

    /// Borrow codepoints `[start, start + length)`, clamped to the text.
    fn slice(&self, start: usize, length: Option<usize>) -> &str {
        let from = self.byte_offset(0, start);
        let to = match length {
            Some(length) => self.byte_offset(from, length),
            None => self.text.len(),
        };
        return &self.text[from..to];
    }

    /// Byte offset `count` codepoints after byte offset `from`.
    fn byte_offset(&self, from: usize, count: usize) -> usize {
        return self.text[from..]
            .char_indices()
            .nth(count)
            .map_or(self.text.len(), |(byte, _)| from + byte);
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.text);
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Text {
        return Text::new(text);
    }
}

impl From<String> for Text {
    fn from(text: String) -> Text {
        return Text::new(text);
    }
}

impl FromStr for Text {
    type Err = Infallible;

    fn from_str(text: &str) -> std::result::Result<Text, Infallible> {
        return Ok(Text::new(text));
    }
}

impl AsRef<str> for Text {
    fn as_ref(&self) -> &str {
        return &self.text;
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        return self.text == other;
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        return self.text == *other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_offsets_walk_codepoints() {
        let text = Text::new("aé€😀");
        assert_eq!(text.byte_offset(0, 0), 0);
        assert_eq!(text.byte_offset(0, 1), 1);
        assert_eq!(text.byte_offset(0, 2), 3);
        assert_eq!(text.byte_offset(3, 1), 6);
        assert_eq!(text.byte_offset(0, 4), 10);
        assert_eq!(text.byte_offset(0, 99), 10);
    }

    #[test]
    fn slice_clamps() {
        let text = Text::new("héllo");
        assert_eq!(text.slice(1, Some(3)), "éll");
        assert_eq!(text.slice(3, None), "lo");
        assert_eq!(text.slice(4, Some(10)), "o");
        assert_eq!(text.slice(9, Some(1)), "");
    }

    #[test]
    fn offsets_reject_negatives() {
        assert_eq!(offset(-1i32), Err(Error::InvalidOffset));
        assert_eq!(offset(i64::MIN), Err(Error::InvalidOffset));
        assert_eq!(offset(3u8), Ok(3));
        assert_eq!(offset(7usize), Ok(7));
    }
}
