//! Error types for validation, evaluation and table generation.

use thiserror::Error;

use crate::operator::BinaryOp;
use crate::types::Var;

/// Reasons an expression text fails validation.
///
/// Positions are byte offsets into the original text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Text is empty or whitespace only.
    #[error("expression cannot be empty")]
    EmptyExpression,

    /// A `)` without a matching `(`, or an unclosed `(`.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    /// Characters outside the accepted alphabet, sorted and deduplicated.
    #[error("invalid characters: {}", join_chars(.0))]
    InvalidCharacters(Vec<char>),

    /// A binary operator at the very start or end of the expression.
    #[error("binary operator '{op}' at invalid position {position}")]
    MisplacedBinaryOperator { op: BinaryOp, position: usize },

    /// A negation with nothing after it.
    #[error("unary operator '¬' at end of expression")]
    DanglingUnaryOperator { position: usize },

    /// A multi-character word that is neither an operator keyword nor a constant.
    #[error("invalid variable/operator name '{token}' at position {position}")]
    UnknownToken { token: String, position: usize },

    /// Two tokens that cannot follow each other, e.g. two operands in a row.
    #[error("unexpected '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },

    /// The expression ends where an operand is required.
    #[error("expression is incomplete: operand expected at end")]
    IncompleteExpression,
}

fn join_chars(chars: &[char]) -> String {
    chars.iter().map(char::to_string).collect::<Vec<_>>().join(", ")
}

/// Failures while evaluating a postfix token sequence.
///
/// Validated expressions never produce these, but raw token streams can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Negation applied to an empty operand stack.
    #[error("missing operand for negation")]
    MissingOperand,

    /// Binary operator with fewer than two operands available.
    #[error("missing operands for operator '{0}'")]
    MissingOperands(BinaryOp),

    /// The operand stack did not end with exactly one value.
    #[error("malformed expression: {remaining} values left on the stack")]
    MalformedExpression { remaining: usize },

    /// A word that is not a variable, constant or operator.
    #[error("unknown token '{0}'")]
    UnknownToken(String),

    /// Variable missing from a strict assignment.
    #[error("variable {0} is not assigned")]
    UnboundVariable(Var),
}

/// Errors of whole-expression operations such as truth table generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid expression: {0}")]
    Invalid(#[from] ValidationError),

    #[error("error evaluating expression: {0}")]
    Evaluation(#[from] EvalError),

    /// Truth table would exceed the configured variable limit.
    #[error("expression has {count} variables, the limit is {limit}")]
    TooManyVariables { count: usize, limit: usize },
}

/// Errors parsing an [`Assignment`][crate::types::Assignment] from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssignmentParseError {
    #[error("expected NAME=VALUE, got '{0}'")]
    MissingValue(String),

    #[error("invalid variable name '{0}'")]
    InvalidVariable(String),

    #[error("invalid truth value '{0}'")]
    InvalidValue(String),
}
