//! Tokenizer for expression text.
//!
//! The lexer never fails: characters that start no token are skipped, leaving
//! character-level checks to [`validate`][crate::validate::validate].

use std::fmt;
use std::ops::Range;

use crate::operator::{self, BinaryOp, Operator, UnaryOp};
use crate::types::Var;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Variable(Var),
    Constant(bool),
    Unary(UnaryOp),
    Binary(BinaryOp),
    LeftParen,
    RightParen,
    /// An alphanumeric run that is not a variable, keyword or constant, kept verbatim.
    Word(String),
}

impl Token {
    /// Variables and constants.
    pub fn is_atom(&self) -> bool {
        matches!(self, Token::Variable(_) | Token::Constant(_))
    }

    pub fn operator(&self) -> Option<Operator> {
        match *self {
            Token::Unary(op) => Some(Operator::Unary(op)),
            Token::Binary(op) => Some(Operator::Binary(op)),
            _ => None,
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Unary(op) => Token::Unary(op),
            Operator::Binary(op) => Token::Binary(op),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(var) => write!(f, "{}", var),
            Token::Constant(value) => write!(f, "{}", *value as u8),
            Token::Unary(op) => write!(f, "{}", op),
            Token::Binary(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
            Token::Word(word) => write!(f, "{}", word),
        }
    }
}

/// A token together with its byte range in the source text.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub span: Range<usize>,
}

/// Iterator over the tokens of an expression text.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn word(&mut self) -> Token {
        let rest = &self.input[self.pos..];
        let len = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        let raw = &rest[..len];
        self.pos += len;
        classify_word(raw)
    }
}

fn classify_word(raw: &str) -> Token {
    if let Some(op) = operator::keyword(raw) {
        return op.into();
    }
    match raw.to_ascii_uppercase().as_str() {
        "1" | "TRUE" => return Token::Constant(true),
        "0" | "FALSE" => return Token::Constant(false),
        _ => {}
    }
    let mut chars = raw.chars();
    match (chars.next().and_then(Var::new), chars.next()) {
        (Some(var), None) => Token::Variable(var),
        _ => Token::Word(raw.to_string()),
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Spanned;

    fn next(&mut self) -> Option<Spanned> {
        loop {
            let rest = &self.input[self.pos..];
            let c = rest.chars().next()?;
            let start = self.pos;

            let token = if c.is_ascii_alphanumeric() {
                Some(self.word())
            } else if c == '(' {
                self.pos += 1;
                Some(Token::LeftParen)
            } else if c == ')' {
                self.pos += 1;
                Some(Token::RightParen)
            } else if let Some((op, len)) = operator::match_symbol(rest) {
                self.pos += len;
                Some(op.into())
            } else {
                self.pos += c.len_utf8();
                None
            };

            if let Some(token) = token {
                return Some(Spanned {
                    token,
                    span: start..self.pos,
                });
            }
        }
    }
}

/// Splits `text` into tokens, dropping unrecognised characters.
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::new(text).map(|s| s.token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn var(c: char) -> Token {
        Token::Variable(Var::new(c).unwrap())
    }

    #[test]
    fn test_simple() {
        let tokens = tokenize("(A ∧ B) ∨ ¬C");
        assert_eq!(
            tokens,
            vec![
                Token::LeftParen,
                var('A'),
                Token::Binary(BinaryOp::And),
                var('B'),
                Token::RightParen,
                Token::Binary(BinaryOp::Or),
                Token::Unary(UnaryOp::Not),
                var('C'),
            ]
        );
    }

    #[test]
    fn test_aliases_without_spaces() {
        assert_eq!(tokenize("a&&b"), tokenize("A ∧ B"));
        assert_eq!(tokenize("a->b"), tokenize("A → B"));
        assert_eq!(tokenize("a<=>b"), tokenize("A ↔ B"));
        assert_eq!(tokenize("!a|b"), tokenize("¬A ∨ B"));
        assert_eq!(tokenize("a ^ b"), tokenize("A ⊕ B"));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(tokenize("A and not B"), tokenize("A ∧ ¬B"));
        assert_eq!(tokenize("A XNOR B"), tokenize("A ↔ B"));
        assert_eq!(tokenize("A nand B")[1], Token::Binary(BinaryOp::Nand));
        assert_eq!(tokenize("A NOR B")[1], Token::Binary(BinaryOp::Nor));
    }

    #[test]
    fn test_constants() {
        assert_eq!(
            tokenize("1 0 true FALSE"),
            vec![
                Token::Constant(true),
                Token::Constant(false),
                Token::Constant(true),
                Token::Constant(false),
            ]
        );
    }

    #[test]
    fn test_words_preserved() {
        assert_eq!(
            tokenize("Ab ∧ 10"),
            vec![
                Token::Word("Ab".to_string()),
                Token::Binary(BinaryOp::And),
                Token::Word("10".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_characters_dropped() {
        assert_eq!(tokenize("A $ B"), vec![var('A'), var('B')]);
        assert_eq!(tokenize("A < B"), vec![var('A'), var('B')]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_spans() {
        let spans: Vec<_> = Lexer::new("A -> ¬B").map(|s| s.span).collect();
        assert_eq!(spans, vec![0..1, 2..4, 5..7, 7..8]);
    }

    #[test]
    fn test_display() {
        let text: Vec<String> = tokenize("a & true -> x").iter().map(|t| t.to_string()).collect();
        assert_eq!(text, vec!["A", "∧", "1", "→", "X"]);
    }
}
