//! Splitting text into letters.
//!
//! A letter here is one Unicode scalar value. The Arabic alphabet is
//! multi-byte in UTF-8, so nothing in the crate indexes strings by byte.

/// Number of bytes in the UTF-8 sequence introduced by `lead`.
///
/// Continuation bytes and invalid leads count as a single byte so a corrupt
/// stream still makes progress.
#[must_use]
pub const fn unit_len(lead: u8) -> usize {
    if lead & 0x80 == 0x00 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

/// Split raw bytes into UTF-8 units using only the leading-byte rule.
///
/// A sequence that would run past the end of the buffer is cut to one byte.
#[must_use]
pub fn split_bytes(bytes: &[u8]) -> Vec<&[u8]> {
    let mut units = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let mut len = unit_len(bytes[i]);
        if i + len > bytes.len() {
            len = 1;
        }
        units.push(&bytes[i..i + len]);
        i += len;
    }
    units
}

/// Decode `bytes`, dropping every unit that is not valid UTF-8 on its own.
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> String {
    split_bytes(bytes)
        .into_iter()
        .filter_map(|unit| std::str::from_utf8(unit).ok())
        .collect()
}

/// Split a string into one slice per letter.
#[must_use]
pub fn split(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(start, c)| &text[start..start + c.len_utf8()])
        .collect()
}

/// Letter count of `text`.
#[must_use]
pub fn len(text: &str) -> usize {
    text.chars().count()
}
