//! Boolean-algebra rewrite rules used by the simplifier.
//!
//! Patterns are written in surface syntax. The letters `A`, `B` and `C` are
//! placeholders that stand for a single variable or constant; see
//! [`Simplifier`][crate::simplify::Simplifier] for how rules are matched.

use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Law {
    Identity,
    Domination,
    Idempotent,
    DoubleNegation,
    Complement,
    Commutative,
    Associative,
    Distributive,
    DeMorgan,
    Absorption,
    ImplicationElimination,
    BiconditionalElimination,
    XorElimination,
}

impl Law {
    pub fn name(self) -> &'static str {
        match self {
            Law::Identity => "Identity law",
            Law::Domination => "Domination law",
            Law::Idempotent => "Idempotent law",
            Law::DoubleNegation => "Double negation",
            Law::Complement => "Complement law",
            Law::Commutative => "Commutative law",
            Law::Associative => "Associative law",
            Law::Distributive => "Distributive law",
            Law::DeMorgan => "De Morgan's law",
            Law::Absorption => "Absorption law",
            Law::ImplicationElimination => "Implication elimination",
            Law::BiconditionalElimination => "Biconditional elimination",
            Law::XorElimination => "XOR elimination",
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rule {
    pub law: Law,
    pub pattern: &'static str,
    pub replacement: &'static str,
}

const fn rule(law: Law, pattern: &'static str, replacement: &'static str) -> Rule {
    Rule {
        law,
        pattern,
        replacement,
    }
}

/// Rules in the order they are tried. The first match wins.
pub const RULES: &[Rule] = &[
    rule(Law::Identity, "A ∧ 1", "A"),
    rule(Law::Identity, "A ∨ 0", "A"),
    rule(Law::Domination, "A ∧ 0", "0"),
    rule(Law::Domination, "A ∨ 1", "1"),
    rule(Law::Idempotent, "A ∧ A", "A"),
    rule(Law::Idempotent, "A ∨ A", "A"),
    rule(Law::DoubleNegation, "¬¬A", "A"),
    rule(Law::Complement, "A ∧ ¬A", "0"),
    rule(Law::Complement, "A ∨ ¬A", "1"),
    rule(Law::Commutative, "A ∧ B", "B ∧ A"),
    rule(Law::Commutative, "A ∨ B", "B ∨ A"),
    rule(Law::Associative, "(A ∧ B) ∧ C", "A ∧ (B ∧ C)"),
    rule(Law::Associative, "(A ∨ B) ∨ C", "A ∨ (B ∨ C)"),
    rule(Law::Distributive, "A ∧ (B ∨ C)", "(A ∧ B) ∨ (A ∧ C)"),
    rule(Law::Distributive, "A ∨ (B ∧ C)", "(A ∨ B) ∧ (A ∨ C)"),
    rule(Law::DeMorgan, "¬(A ∧ B)", "¬A ∨ ¬B"),
    rule(Law::DeMorgan, "¬(A ∨ B)", "¬A ∧ ¬B"),
    rule(Law::Absorption, "A ∧ (A ∨ B)", "A"),
    rule(Law::Absorption, "A ∨ (A ∧ B)", "A"),
    rule(Law::ImplicationElimination, "A → B", "¬A ∨ B"),
    rule(Law::BiconditionalElimination, "A ↔ B", "(A → B) ∧ (B → A)"),
    rule(Law::XorElimination, "A ⊕ B", "(A ∧ ¬B) ∨ (¬A ∧ B)"),
];
