// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Unicode encodings a `Text` can be read from, written to, and measured in.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::error::Result;

/// A Unicode transfer encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl Encoding {
    /// Every supported encoding, UTF-32 ahead of UTF-16 so BOM sniffing
    /// sees `FF FE 00 00` before `FF FE`.
    pub const ALL: [Encoding; 5] = [
        Encoding::Utf32Le,
        Encoding::Utf32Be,
        Encoding::Utf8,
        Encoding::Utf16Le,
        Encoding::Utf16Be,
    ];

    /// The byte-order mark for this encoding.
    pub fn bom(self) -> &'static [u8] {
        return match self {
            Encoding::Utf8 => &[0xEF, 0xBB, 0xBF],
            Encoding::Utf16Le => &[0xFF, 0xFE],
            Encoding::Utf16Be => &[0xFE, 0xFF],
            Encoding::Utf32Le => &[0xFF, 0xFE, 0x00, 0x00],
            Encoding::Utf32Be => &[0x00, 0x00, 0xFE, 0xFF],
        };
    }

    /// The canonical name, e.g. `UTF-16LE`.
    pub fn name(self) -> &'static str {
        return match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf32Le => "UTF-32LE",
            Encoding::Utf32Be => "UTF-32BE",
        };
    }

    /// Detect an encoding from a leading byte-order mark.
    ///
    /// Returns the encoding and the BOM length. Input without a BOM is
    /// taken as UTF-8.
    pub fn detect(bytes: &[u8]) -> (Encoding, usize) {
        for encoding in Encoding::ALL {
            let bom = encoding.bom();
            if bytes.starts_with(bom) {
                return (encoding, bom.len());
            }
        }
        return (Encoding::Utf8, 0);
    }

    /// Size of `text` in bytes when written in this encoding, without a BOM.
    pub fn encoded_len(self, text: &str) -> usize {
        return match self {
            Encoding::Utf8 => text.len(),
            Encoding::Utf16Le | Encoding::Utf16Be => text.encode_utf16().count() * 2,
            Encoding::Utf32Le | Encoding::Utf32Be => text.chars().count() * 4,
        };
    }

    /// Write `text` in this encoding, without a BOM.
    pub fn encode(self, text: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.encoded_len(text));
        match self {
            Encoding::Utf8 => bytes.extend_from_slice(text.as_bytes()),
            Encoding::Utf16Le => {
                for unit in text.encode_utf16() {
                    bytes.extend(unit.to_le_bytes());
                }
            }
            Encoding::Utf16Be => {
                for unit in text.encode_utf16() {
                    bytes.extend(unit.to_be_bytes());
                }
            }
            Encoding::Utf32Le => {
                for c in text.chars() {
                    bytes.extend((c as u32).to_le_bytes());
                }
            }
            Encoding::Utf32Be => {
                for c in text.chars() {
                    bytes.extend((c as u32).to_be_bytes());
                }
            }
        }
        return bytes;
    }

    /// Read `bytes` in this encoding. The bytes must not include a BOM.
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        return match self {
            Encoding::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|_| Error::InvalidEncoding),
            Encoding::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
            Encoding::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
            Encoding::Utf32Le => decode_utf32(bytes, u32::from_le_bytes),
            Encoding::Utf32Be => decode_utf32(bytes, u32::from_be_bytes),
        };
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::InvalidEncoding);
    }
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    return char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|_| Error::InvalidEncoding);
}

fn decode_utf32(bytes: &[u8], unit: fn([u8; 4]) -> u32) -> Result<String> {
    if bytes.len() % 4 != 0 {
        return Err(Error::InvalidEncoding);
    }
    return bytes
        .chunks_exact(4)
        .map(|quad| char::from_u32(unit([quad[0], quad[1], quad[2], quad[3]])))
        .collect::<Option<String>>()
        .ok_or(Error::InvalidEncoding);
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

impl FromStr for Encoding {
    type Err = Error;

    /// Accepts names like `UTF-8`, `utf8`, or `utf-16le`.
    fn from_str(name: &str) -> Result<Encoding> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        return match normalized.as_str() {
            "UTF8" => Ok(Encoding::Utf8),
            "UTF16LE" => Ok(Encoding::Utf16Le),
            "UTF16BE" | "UTF16" => Ok(Encoding::Utf16Be),
            "UTF32LE" => Ok(Encoding::Utf32Le),
            "UTF32BE" | "UTF32" => Ok(Encoding::Utf32Be),
            _ => Err(Error::InvalidEncoding),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "aé€😀";

    #[test]
    fn detect_by_bom() {
        assert_eq!(Encoding::detect(b"\xEF\xBB\xBFabc"), (Encoding::Utf8, 3));
        assert_eq!(Encoding::detect(b"\xFF\xFEa\x00"), (Encoding::Utf16Le, 2));
        assert_eq!(Encoding::detect(b"\xFE\xFF\x00a"), (Encoding::Utf16Be, 2));
        assert_eq!(Encoding::detect(b"\xFF\xFE\x00\x00a\x00\x00\x00"), (Encoding::Utf32Le, 4));
        assert_eq!(Encoding::detect(b"\x00\x00\xFE\xFF"), (Encoding::Utf32Be, 4));
        assert_eq!(Encoding::detect(b"plain"), (Encoding::Utf8, 0));
        assert_eq!(Encoding::detect(b""), (Encoding::Utf8, 0));
    }

    #[test]
    fn encoded_lengths() {
        assert_eq!(Encoding::Utf8.encoded_len(SAMPLE), 1 + 2 + 3 + 4);
        assert_eq!(Encoding::Utf16Le.encoded_len(SAMPLE), (1 + 1 + 1 + 2) * 2);
        assert_eq!(Encoding::Utf32Be.encoded_len(SAMPLE), 4 * 4);
    }

    #[test]
    fn every_encoding_reads_back_what_it_writes() {
        for encoding in Encoding::ALL {
            let bytes = encoding.encode(SAMPLE);
            assert_eq!(bytes.len(), encoding.encoded_len(SAMPLE), "{encoding}");
            assert_eq!(encoding.decode(&bytes).unwrap(), SAMPLE, "{encoding}");
        }
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(Encoding::Utf8.decode(b"\xC3"), Err(Error::InvalidEncoding));
        assert_eq!(Encoding::Utf16Le.decode(b"a"), Err(Error::InvalidEncoding));
        // Lone high surrogate.
        assert_eq!(Encoding::Utf16Be.decode(b"\xD8\x00"), Err(Error::InvalidEncoding));
        assert_eq!(Encoding::Utf32Le.decode(b"\x00\xD8\x00\x00"), Err(Error::InvalidEncoding));
        assert_eq!(Encoding::Utf32Le.decode(b"abc"), Err(Error::InvalidEncoding));
    }

    #[test]
    fn names_parse() {
        assert_eq!("UTF-8".parse::<Encoding>(), Ok(Encoding::Utf8));
        assert_eq!("utf8".parse::<Encoding>(), Ok(Encoding::Utf8));
        assert_eq!("utf_16le".parse::<Encoding>(), Ok(Encoding::Utf16Le));
        assert_eq!("UTF-32".parse::<Encoding>(), Ok(Encoding::Utf32Be));
        assert_eq!("latin1".parse::<Encoding>(), Err(Error::InvalidEncoding));
        assert_eq!(Encoding::Utf16Be.to_string(), "UTF-16BE");
    }
}
