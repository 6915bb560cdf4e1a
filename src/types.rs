//! Variables and assignments.
//!
//! Variables are single letters `A..=Z`. Lowercase input is folded to uppercase,
//! so `a` and `A` name the same variable.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AssignmentParseError;

/// A propositional variable.
///
/// # Invariants
///
/// - The stored byte is always an ASCII uppercase letter.
/// - Ordering is lexicographic, which is the column order of truth tables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u8);

impl Var {
    /// Creates a variable from a letter, folding lowercase to uppercase.
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    pub fn new(letter: char) -> Option<Self> {
        if letter.is_ascii_alphabetic() {
            Some(Var(letter.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Parses a variable name such as `"A"` or `"b"`.
    pub fn parse(name: &str) -> Option<Self> {
        let mut chars = name.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Var::new(c),
            _ => None,
        }
    }

    /// Returns the variable letter.
    pub fn letter(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A mapping from variables to truth values.
///
/// Iteration is in variable order. Evaluation treats a variable missing from the
/// assignment as `false`, see [`Strict`][crate::eval::Strict] for the checked variant.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Assignment(BTreeMap<Var, bool>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the assignment for row `index` of a truth table over `vars`.
    ///
    /// The first variable is the most significant bit, so index `0` is all-false
    /// and index `2^n - 1` is all-true.
    pub fn from_index(vars: &[Var], index: usize) -> Self {
        let n = vars.len();
        vars.iter()
            .enumerate()
            .map(|(i, &var)| (var, (index >> (n - 1 - i)) & 1 == 1))
            .collect()
    }

    pub fn set(&mut self, var: Var, value: bool) -> Option<bool> {
        self.0.insert(var, value)
    }

    pub fn get(&self, var: Var) -> Option<bool> {
        self.0.get(&var).copied()
    }

    /// Value of `var`, defaulting to `false` when unbound.
    pub fn value(&self, var: Var) -> bool {
        self.get(var).unwrap_or(false)
    }

    pub fn contains(&self, var: Var) -> bool {
        self.0.contains_key(&var)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.0.iter().map(|(&var, &value)| (var, value))
    }
}

impl FromIterator<(Var, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (Var, bool)>>(iter: I) -> Self {
        Assignment(iter.into_iter().collect())
    }
}

impl IntoIterator for Assignment {
    type Item = (Var, bool);
    type IntoIter = btree_map::IntoIter<Var, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (var, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}={}", var, value as u8)?;
        }
        Ok(())
    }
}

/// Parses `A=1, B=false, c=T` style assignments.
///
/// Pairs are separated by commas or whitespace. Accepted values are
/// `1/0`, `true/false` and `t/f` (case-insensitive).
impl FromStr for Assignment {
    type Err = AssignmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut assignment = Assignment::new();
        for pair in s.split(|c: char| c == ',' || c.is_whitespace()) {
            if pair.is_empty() {
                continue;
            }
            let (name, value) = pair
                .split_once('=')
                .ok_or_else(|| AssignmentParseError::MissingValue(pair.to_string()))?;
            let var = Var::parse(name).ok_or_else(|| AssignmentParseError::InvalidVariable(name.to_string()))?;
            let value = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "t" => true,
                "0" | "false" | "f" => false,
                _ => return Err(AssignmentParseError::InvalidValue(value.to_string())),
            };
            assignment.set(var, value);
        }
        Ok(assignment)
    }
}
