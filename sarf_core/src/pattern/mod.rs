//! Word templates.
//!
//! A template is a sequence of literal letters and radical slots. Templates
//! written as text use the conventional placeholders ف ع ل for the first,
//! second and third radical; every other letter is a literal. A pattern that
//! needs one of those letters as a literal is built from explicit tokens.

mod defaults;
mod store;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PatternError;

pub use defaults::default_patterns;
pub use store::{Iter, PatternStore, PatternTableOptions, djb2};

/// One of the three radical positions of a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Radical {
    First,
    Second,
    Third,
}

impl Radical {
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    /// Zero-based position in the root.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }

    /// Placeholder letter used for this slot in textual templates.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::First => 'ف',
            Self::Second => 'ع',
            Self::Third => 'ل',
        }
    }

    #[must_use]
    pub const fn from_marker(letter: char) -> Option<Self> {
        match letter {
            'ف' => Some(Self::First),
            'ع' => Some(Self::Second),
            'ل' => Some(Self::Third),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    Literal(char),
    Slot(Radical),
}

/// Parse a textual template into tokens.
#[must_use]
pub fn parse_template(template: &str) -> Vec<Token> {
    template
        .chars()
        .map(|c| Radical::from_marker(c).map_or(Token::Literal(c), Token::Slot))
        .collect()
}

/// Declarative form of a pattern, as found in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub name: String,
    #[serde(default)]
    pub structure: String,
    #[serde(default)]
    pub description: String,
}

/// A registered word template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    name: String,
    tokens: Vec<Token>,
    structure: String,
    description: String,
}

impl Pattern {
    /// Create a pattern whose template is its own name.
    ///
    /// # Errors
    /// Returns `PatternError` if the name is empty or lacks one of the slots.
    pub fn new(
        name: impl Into<String>,
        structure: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let name = name.into().trim().to_string();
        let tokens = parse_template(&name);
        Self::from_tokens(name, tokens, structure, description)
    }

    /// Create a pattern from an explicit token list. The name is trimmed.
    ///
    /// # Errors
    /// Returns `PatternError` if the name is empty or a slot is missing.
    pub fn from_tokens(
        name: impl Into<String>,
        tokens: Vec<Token>,
        structure: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(PatternError::Empty);
        }
        if let Some(missing) = Radical::ALL
            .into_iter()
            .find(|radical| !tokens.contains(&Token::Slot(*radical)))
        {
            return Err(PatternError::MissingSlot {
                name,
                radical: missing.as_str(),
            });
        }
        Ok(Self {
            name,
            tokens,
            structure: structure.into(),
            description: description.into(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Structural class label, e.g. `CVCCVC`.
    #[must_use]
    pub fn structure(&self) -> &str {
        &self.structure
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Template rendered with slot placeholders.
    #[must_use]
    pub fn template(&self) -> String {
        self.tokens
            .iter()
            .map(|token| match *token {
                Token::Literal(c) => c,
                Token::Slot(radical) => radical.marker(),
            })
            .collect()
    }
}

impl TryFrom<PatternSpec> for Pattern {
    type Error = PatternError;

    fn try_from(spec: PatternSpec) -> Result<Self, Self::Error> {
        Self::new(spec.name, spec.structure, spec.description)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template() {
        assert_eq!(
            parse_template("مفعول"),
            vec![
                Token::Literal('م'),
                Token::Slot(Radical::First),
                Token::Slot(Radical::Second),
                Token::Literal('و'),
                Token::Slot(Radical::Third),
            ]
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_new_pattern() {
        let pattern = Pattern::new("فاعل", "VCCCVC", "Active participle")
            .expect("valid pattern");
        assert_eq!(pattern.name(), "فاعل");
        assert_eq!(pattern.tokens().len(), 4);
        assert_eq!(pattern.template(), "فاعل");
    }

    #[test]
    fn test_missing_slot() {
        let result = Pattern::new("فعا", "", "");
        assert_eq!(
            result,
            Err(PatternError::MissingSlot {
                name: "فعا".to_string(),
                radical: "third"
            })
        );
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(Pattern::new("  ", "", ""), Err(PatternError::Empty));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_from_tokens_allows_literal_placeholder_letters() {
        // a literal ف prefix ahead of explicit slots
        let tokens = vec![
            Token::Literal('ف'),
            Token::Slot(Radical::First),
            Token::Slot(Radical::Second),
            Token::Slot(Radical::Third),
        ];
        let pattern = Pattern::from_tokens("ف+فعل", tokens, "", "")
            .expect("valid tokens");
        assert_eq!(pattern.tokens()[0], Token::Literal('ف'));
    }

    #[test]
    fn test_from_tokens_trims_name() {
        let tokens = vec![
            Token::Slot(Radical::First),
            Token::Slot(Radical::Second),
            Token::Slot(Radical::Third),
        ];
        let pattern = Pattern::from_tokens(" جذر ", tokens.clone(), "", "");
        assert!(pattern.is_ok_and(|p| p.name() == "جذر"));
        assert_eq!(
            Pattern::from_tokens("   ", tokens, "", ""),
            Err(PatternError::Empty)
        );
    }

    #[test]
    fn test_pattern_spec_conversion() {
        let spec = PatternSpec {
            name: "فعال".to_string(),
            structure: "CVCVC".to_string(),
            description: String::new(),
        };
        let pattern = Pattern::try_from(spec);
        assert!(pattern.is_ok_and(|p| p.structure() == "CVCVC"));
    }
}
