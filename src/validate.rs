//! Syntax validation.
//!
//! Checks run in a fixed order and the first failure is returned:
//!
//! 1. non-empty text,
//! 2. balanced parentheses,
//! 3. every character in the accepted alphabet,
//! 4. no binary operator first or last,
//! 5. no negation last,
//! 6. no unknown multi-character words,
//! 7. operands and operators alternate correctly.
//!
//! The last check makes every validated text evaluable.

use log::debug;

use crate::error::ValidationError;
use crate::operator;
use crate::token::{Lexer, Spanned, Token};

pub fn validate(text: &str) -> Result<(), ValidationError> {
    debug!("validate({:?})", text);

    if text.trim().is_empty() {
        return Err(ValidationError::EmptyExpression);
    }
    if !is_balanced(text) {
        return Err(ValidationError::UnbalancedParentheses);
    }
    let invalid = invalid_characters(text);
    if !invalid.is_empty() {
        return Err(ValidationError::InvalidCharacters(invalid));
    }

    let tokens: Vec<Spanned> = Lexer::new(text).collect();
    check_operator_placement(&tokens)?;
    check_words(&tokens)?;
    check_sequence(&tokens)
}

/// Parentheses never close below depth zero and end at depth zero.
pub fn is_balanced(text: &str) -> bool {
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || c == '(' || c == ')' || operator::is_symbol_char(c)
}

/// Sorted, deduplicated characters outside the accepted alphabet.
pub fn invalid_characters(text: &str) -> Vec<char> {
    let mut invalid: Vec<char> = text.chars().filter(|&c| !is_allowed(c)).collect();
    invalid.sort_unstable();
    invalid.dedup();
    invalid
}

fn check_operator_placement(tokens: &[Spanned]) -> Result<(), ValidationError> {
    let last = tokens.len().saturating_sub(1);

    for (i, spanned) in tokens.iter().enumerate() {
        if let Token::Binary(op) = spanned.token {
            if i == 0 || i == last {
                return Err(ValidationError::MisplacedBinaryOperator {
                    op,
                    position: spanned.span.start,
                });
            }
        }
    }

    if let Some(spanned) = tokens.last() {
        if let Token::Unary(_) = spanned.token {
            return Err(ValidationError::DanglingUnaryOperator {
                position: spanned.span.start,
            });
        }
    }

    Ok(())
}

fn check_words(tokens: &[Spanned]) -> Result<(), ValidationError> {
    for spanned in tokens {
        if let Token::Word(word) = &spanned.token {
            return Err(ValidationError::UnknownToken {
                token: word.clone(),
                position: spanned.span.start,
            });
        }
    }
    Ok(())
}

fn check_sequence(tokens: &[Spanned]) -> Result<(), ValidationError> {
    let mut expect_operand = true;

    for spanned in tokens {
        let ok = match (&spanned.token, expect_operand) {
            (Token::Variable(_) | Token::Constant(_), true) => {
                expect_operand = false;
                true
            }
            (Token::Unary(_) | Token::LeftParen, true) => true,
            (Token::Binary(_), false) => {
                expect_operand = true;
                true
            }
            (Token::RightParen, false) => true,
            _ => false,
        };
        if !ok {
            return Err(ValidationError::UnexpectedToken {
                token: spanned.token.to_string(),
                position: spanned.span.start,
            });
        }
    }

    if expect_operand {
        return Err(ValidationError::IncompleteExpression);
    }
    Ok(())
}
