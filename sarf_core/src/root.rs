use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alphabet;
use crate::error::RootError;
use crate::graphemes;

/// Letters in every root.
pub const ROOT_LEN: usize = 3;

/// Ordering key of a root: `p1 * 900 + p2 * 30 + p3` over alphabet ranks.
///
/// Spellings that fold to the same ranks share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RootKey(u32);

impl RootKey {
    /// Key of `root`, or `None` unless it is exactly three known letters.
    #[must_use]
    pub fn of(root: &str) -> Option<Self> {
        let mut chars = root.chars();
        let (Some(a), Some(b), Some(c), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            return None;
        };
        Some(Self::from_ranks(
            alphabet::rank(a)?,
            alphabet::rank(b)?,
            alphabet::rank(c)?,
        ))
    }

    #[must_use]
    pub const fn from_ranks(p1: u8, p2: u8, p3: u8) -> Self {
        Self(p1 as u32 * 900 + p2 as u32 * 30 + p3 as u32)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// A triliteral root whose letters are all in the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Root {
    text: String,
    letters: [char; ROOT_LEN],
    key: RootKey,
}

impl Root {
    /// Validate `text` as a root. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `RootError` if the text is not exactly three alphabet letters.
    pub fn parse(text: &str) -> Result<Self, RootError> {
        let text = text.trim();
        let chars: Vec<char> = text.chars().collect();
        let letters: [char; ROOT_LEN] =
            chars
                .as_slice()
                .try_into()
                .map_err(|_| RootError::WrongLength {
                    root: text.to_string(),
                    found: graphemes::len(text),
                })?;

        let mut ranks = [0u8; ROOT_LEN];
        for (rank, letter) in ranks.iter_mut().zip(letters) {
            *rank = alphabet::rank(letter).ok_or_else(|| RootError::UnknownLetter {
                root: text.to_string(),
                letter,
            })?;
        }

        Ok(Self {
            text: text.to_string(),
            letters,
            key: RootKey::from_ranks(ranks[0], ranks[1], ranks[2]),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The radicals in order.
    #[must_use]
    pub const fn letters(&self) -> [char; ROOT_LEN] {
        self.letters
    }

    #[must_use]
    pub const fn key(&self) -> RootKey {
        self.key
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl TryFrom<String> for Root {
    type Error = RootError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Root> for String {
    fn from(root: Root) -> Self {
        root.text
    }
}

impl std::str::FromStr for Root {
    type Err = RootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_parse_valid_root() {
        let root = Root::parse(" كتب ").expect("valid root");
        assert_eq!(root.as_str(), "كتب");
        assert_eq!(root.letters(), ['ك', 'ت', 'ب']);
        assert_eq!(root.key().value(), 22 * 900 + 3 * 30 + 2);
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            Root::parse("كاتب"),
            Err(RootError::WrongLength {
                root: "كاتب".to_string(),
                found: 4
            })
        );
        assert!(matches!(
            Root::parse(""),
            Err(RootError::WrongLength { found: 0, .. })
        ));
    }

    #[test]
    fn test_parse_unknown_letter() {
        assert_eq!(
            Root::parse("xyz"),
            Err(RootError::UnknownLetter {
                root: "xyz".to_string(),
                letter: 'x'
            })
        );
    }

    #[test]
    fn test_key_ordering_follows_alphabet() {
        let keys: Vec<Option<RootKey>> = ["درس", "زرع", "كتب"]
            .iter()
            .map(|r| RootKey::of(r))
            .collect();
        assert!(keys.iter().all(Option::is_some));
        assert!(keys[0] < keys[1]);
        assert!(keys[1] < keys[2]);
    }

    #[test]
    fn test_key_folds_variants() {
        assert_eq!(RootKey::of("أكل"), RootKey::of("اكل"));
        assert_eq!(RootKey::of("ab"), None);
        assert_eq!(RootKey::of("كتبب"), None);
    }
}
