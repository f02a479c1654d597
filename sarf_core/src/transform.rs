//! Root + pattern → word, and back.

use serde::{Deserialize, Serialize};

use crate::graphemes;
use crate::pattern::{Pattern, Token};
use crate::root::{ROOT_LEN, Root};

/// How extraction treats the literal letters of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralMode {
    /// Literal positions must hold the template's letter.
    #[default]
    Strict,
    /// Literal positions may hold anything; only length and slots count.
    Lenient,
}

/// Substitute the radicals of `root` into the slots of `pattern`.
///
/// The result has exactly as many letters as the template.
#[must_use]
pub fn generate(root: &Root, pattern: &Pattern) -> String {
    let radicals = root.letters();
    pattern
        .tokens()
        .iter()
        .map(|token| match *token {
            Token::Literal(c) => c,
            Token::Slot(radical) => radicals[radical.index()],
        })
        .collect()
}

/// Recover the root that `pattern` would have turned into `word`.
///
/// Returns `None` when the lengths differ, when a repeated slot captures two
/// different letters, when (in strict mode) a literal does not match, or when
/// the captured letters are not a valid root.
#[must_use]
pub fn extract(word: &str, pattern: &Pattern, mode: LiteralMode) -> Option<Root> {
    let letters = graphemes::split(word.trim());
    let tokens = pattern.tokens();
    if letters.len() != tokens.len() {
        return None;
    }

    let mut radicals: [Option<char>; ROOT_LEN] = [None; ROOT_LEN];
    for (letter, token) in letters.iter().zip(tokens) {
        let mut chars = letter.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return None;
        };
        match *token {
            Token::Literal(expected) => {
                if mode == LiteralMode::Strict && letter != expected {
                    return None;
                }
            }
            Token::Slot(radical) => {
                let slot = &mut radicals[radical.index()];
                match *slot {
                    Some(captured) if captured != letter => return None,
                    _ => *slot = Some(letter),
                }
            }
        }
    }

    let [Some(first), Some(second), Some(third)] = radicals else {
        return None;
    };
    Root::parse(&String::from_iter([first, second, third])).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(text: &str) -> Root {
        Root::parse(text).unwrap_or_else(|e| panic!("{e}"))
    }

    fn pattern(name: &str) -> Pattern {
        Pattern::new(name, "", "").unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn test_generate_active_participle() {
        assert_eq!(generate(&root("كتب"), &pattern("فاعل")), "كاتب");
    }

    #[test]
    fn test_generate_passive_participle() {
        assert_eq!(generate(&root("كتب"), &pattern("مفعول")), "مكتوب");
    }

    #[test]
    fn test_generate_form_eight() {
        assert_eq!(generate(&root("جمع"), &pattern("افتعل")), "اجتمع");
    }

    #[test]
    fn test_generate_is_length_preserving() {
        let p = pattern("تفعيل");
        let word = generate(&root("درس"), &p);
        assert_eq!(graphemes::len(&word), p.tokens().len());
    }

    #[test]
    fn test_extract_inverse() {
        let p = pattern("مفعول");
        assert_eq!(extract("مكتوب", &p, LiteralMode::Strict), Some(root("كتب")));
    }

    #[test]
    fn test_extract_length_mismatch() {
        assert_eq!(extract("كاتب", &pattern("مفعول"), LiteralMode::Lenient), None);
    }

    #[test]
    fn test_extract_literal_mismatch_depends_on_mode() {
        let p = pattern("مفعول");
        assert_eq!(extract("مكتاب", &p, LiteralMode::Strict), None);
        assert_eq!(extract("مكتاب", &p, LiteralMode::Lenient), Some(root("كتب")));
    }

    #[test]
    fn test_extract_repeated_slot_must_agree() {
        // doubled second radical
        let p = pattern("فععل");
        assert_eq!(extract("قتتل", &p, LiteralMode::Strict), Some(root("قتل")));
        assert_eq!(extract("قتسل", &p, LiteralMode::Strict), None);
    }

    #[test]
    fn test_extract_rejects_letters_outside_alphabet() {
        assert_eq!(extract("xay", &pattern("فعل"), LiteralMode::Lenient), None);
    }
}
