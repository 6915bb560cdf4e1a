//! Infix to postfix conversion and stack evaluation.

use log::debug;

use crate::error::EvalError;
use crate::token::{tokenize, Token};
use crate::types::{Assignment, Var};

/// Source of variable values during evaluation.
pub trait Valuation {
    fn value(&self, var: Var) -> Result<bool, EvalError>;
}

/// Unbound variables evaluate to `false`.
impl Valuation for Assignment {
    fn value(&self, var: Var) -> Result<bool, EvalError> {
        Ok(Assignment::value(self, var))
    }
}

/// Unbound variables are an error.
pub struct Strict<'a>(pub &'a Assignment);

impl Valuation for Strict<'_> {
    fn value(&self, var: Var) -> Result<bool, EvalError> {
        self.0.get(var).ok_or(EvalError::UnboundVariable(var))
    }
}

/// Converts infix tokens to postfix order (shunting-yard).
///
/// Binary operators of equal precedence are left-associative. Negation is a
/// prefix operator and never pops the stack. Unmatched parentheses are passed
/// through to the output, where evaluation rejects them.
pub fn to_postfix<I>(tokens: I) -> Vec<Token>
where
    I: IntoIterator<Item = Token>,
{
    let mut output = Vec::new();
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Variable(_) | Token::Constant(_) | Token::Word(_) => output.push(token),
            Token::LeftParen | Token::Unary(_) => stack.push(token),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => output.push(top),
                    None => {
                        output.push(Token::RightParen);
                        break;
                    }
                }
            },
            Token::Binary(op) => {
                while let Some(top) = stack.last() {
                    match top.operator() {
                        Some(top_op) if top_op.precedence() >= op.precedence() => {
                            output.extend(stack.pop());
                        }
                        _ => break,
                    }
                }
                stack.push(token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        output.push(top);
    }

    debug!("to_postfix(...) -> {} tokens", output.len());
    output
}

/// Evaluates a postfix token sequence.
pub fn evaluate_postfix<V>(postfix: &[Token], valuation: &V) -> Result<bool, EvalError>
where
    V: Valuation + ?Sized,
{
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Variable(var) => stack.push(valuation.value(*var)?),
            Token::Constant(value) => stack.push(*value),
            Token::Unary(op) => {
                let operand = stack.pop().ok_or(EvalError::MissingOperand)?;
                stack.push(op.apply(operand));
            }
            Token::Binary(op) => {
                let (right, left) = match (stack.pop(), stack.pop()) {
                    (Some(right), Some(left)) => (right, left),
                    _ => return Err(EvalError::MissingOperands(*op)),
                };
                stack.push(op.apply(left, right));
            }
            Token::Word(word) => return Err(EvalError::UnknownToken(word.clone())),
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::MalformedExpression {
                    remaining: stack.len(),
                })
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::MalformedExpression {
            remaining: stack.len(),
        }),
    }
}

/// Tokenizes, converts and evaluates `text` in one go.
pub fn evaluate<V>(text: &str, valuation: &V) -> Result<bool, EvalError>
where
    V: Valuation + ?Sized,
{
    let postfix = to_postfix(tokenize(text));
    evaluate_postfix(&postfix, valuation)
}
