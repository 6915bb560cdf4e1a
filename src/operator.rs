//! The operator alphabet.
//!
//! Every operator has one canonical symbol and a set of accepted spellings.
//! Spellings made of letters are keywords and match whole words only
//! (case-insensitively); the rest are symbols and match longest-first.
//!
//! | operator | canonical | spellings                  | precedence |
//! |----------|-----------|----------------------------|------------|
//! | NOT      | `¬`       | `¬ ~ ! NOT`                | 4          |
//! | AND      | `∧`       | `∧ & && AND`               | 3          |
//! | XOR      | `⊕`       | `⊕ ^ XOR`                  | 3          |
//! | NAND     | `↑`       | `↑ NAND`                   | 3          |
//! | OR       | `∨`       | `∨ \| \|\| OR`             | 2          |
//! | NOR      | `↓`       | `↓ NOR`                    | 2          |
//! | IMPLIES  | `→`       | `→ -> => IMP IMPLIES`      | 1          |
//! | IFF      | `↔`       | `↔ <-> <=> XNOR IFF`       | 1          |

use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Not,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Implies,
    Iff,
    Xor,
    Nand,
    Nor,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl UnaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "¬",
        }
    }

    pub const fn precedence(self) -> u8 {
        match self {
            UnaryOp::Not => 4,
        }
    }

    pub const fn apply(self, operand: bool) -> bool {
        match self {
            UnaryOp::Not => !operand,
        }
    }
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 7] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Implies,
        BinaryOp::Iff,
        BinaryOp::Xor,
        BinaryOp::Nand,
        BinaryOp::Nor,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "∧",
            BinaryOp::Or => "∨",
            BinaryOp::Implies => "→",
            BinaryOp::Iff => "↔",
            BinaryOp::Xor => "⊕",
            BinaryOp::Nand => "↑",
            BinaryOp::Nor => "↓",
        }
    }

    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::And | BinaryOp::Xor | BinaryOp::Nand => 3,
            BinaryOp::Or | BinaryOp::Nor => 2,
            BinaryOp::Implies | BinaryOp::Iff => 1,
        }
    }

    /// Truth function of the operator.
    pub const fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BinaryOp::And => left && right,
            BinaryOp::Or => left || right,
            BinaryOp::Implies => !left || right,
            BinaryOp::Iff => left == right,
            BinaryOp::Xor => left != right,
            BinaryOp::Nand => !(left && right),
            BinaryOp::Nor => !(left || right),
        }
    }
}

impl Operator {
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Unary(op) => op.symbol(),
            Operator::Binary(op) => op.symbol(),
        }
    }

    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Unary(op) => op.precedence(),
            Operator::Binary(op) => op.precedence(),
        }
    }

    pub const fn arity(self) -> usize {
        match self {
            Operator::Unary(_) => 1,
            Operator::Binary(_) => 2,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

const NOT: Operator = Operator::Unary(UnaryOp::Not);
const AND: Operator = Operator::Binary(BinaryOp::And);
const OR: Operator = Operator::Binary(BinaryOp::Or);
const IMPLIES: Operator = Operator::Binary(BinaryOp::Implies);
const IFF: Operator = Operator::Binary(BinaryOp::Iff);
const XOR: Operator = Operator::Binary(BinaryOp::Xor);
const NAND: Operator = Operator::Binary(BinaryOp::Nand);
const NOR: Operator = Operator::Binary(BinaryOp::Nor);

/// Every accepted spelling. Keywords are stored uppercase.
pub const ALIASES: &[(&str, Operator)] = &[
    ("¬", NOT),
    ("~", NOT),
    ("!", NOT),
    ("NOT", NOT),
    ("∧", AND),
    ("&", AND),
    ("&&", AND),
    ("AND", AND),
    ("∨", OR),
    ("|", OR),
    ("||", OR),
    ("OR", OR),
    ("→", IMPLIES),
    ("->", IMPLIES),
    ("=>", IMPLIES),
    ("IMP", IMPLIES),
    ("IMPLIES", IMPLIES),
    ("↔", IFF),
    ("<->", IFF),
    ("<=>", IFF),
    ("XNOR", IFF),
    ("IFF", IFF),
    ("⊕", XOR),
    ("^", XOR),
    ("XOR", XOR),
    ("↑", NAND),
    ("NAND", NAND),
    ("↓", NOR),
    ("NOR", NOR),
];

fn is_keyword(spelling: &str) -> bool {
    spelling.chars().all(|c| c.is_ascii_alphabetic())
}

/// Looks up a whole word (any case) as an operator keyword.
pub fn keyword(word: &str) -> Option<Operator> {
    ALIASES
        .iter()
        .find(|(spelling, _)| is_keyword(spelling) && spelling.eq_ignore_ascii_case(word))
        .map(|&(_, op)| op)
}

/// Matches the longest symbol spelling at the start of `input`.
///
/// Returns the operator and the byte length of the matched spelling.
pub fn match_symbol(input: &str) -> Option<(Operator, usize)> {
    ALIASES
        .iter()
        .filter(|(spelling, _)| !is_keyword(spelling) && input.starts_with(spelling))
        .max_by_key(|(spelling, _)| spelling.len())
        .map(|&(spelling, op)| (op, spelling.len()))
}

/// Whether `c` occurs in some symbol spelling.
pub fn is_symbol_char(c: char) -> bool {
    ALIASES
        .iter()
        .any(|(spelling, _)| !is_keyword(spelling) && spelling.contains(c))
}
