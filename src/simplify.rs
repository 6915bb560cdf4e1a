//! Rule-based simplification.
//!
//! The simplifier works on the normalized surface form of an expression: the
//! text is tokenized (which upper-cases it and maps every operator spelling to
//! its canonical symbol) and rendered back with one space around each operator.
//!
//! Each iteration tries the [`RULES`] in order and applies the first one whose
//! pattern has exactly the shape of the whole expression, then strips redundant
//! parentheses. Placeholders bind single atoms only, so `A ∧ 1` rewrites
//! `Q ∧ 1` but not `(Q ∨ R) ∧ 1`. The loop stops at the first iteration that
//! changes nothing, or after `max_iterations`; some rules (commutativity) cycle,
//! in which case the cap ends the loop.
//!
//! ```
//! use logic_rs::simplify::Simplifier;
//!
//! let result = Simplifier::default().simplify("A ∧ 1");
//! assert_eq!(result.expression, "A");
//! assert_eq!(result.steps.len(), 2);
//! ```

use std::fmt;
use std::fmt::Write;

use log::{debug, warn};

use crate::rules::{Law, Rule, RULES};
use crate::token::{tokenize, Token};
use crate::types::Var;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StepKind {
    Original,
    Rewrite {
        law: Law,
        pattern: &'static str,
        replacement: &'static str,
    },
    RemovedParentheses,
    Cleanup,
}

/// One entry of the simplification trace.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Step {
    pub kind: StepKind,
    /// Expression text after this step.
    pub expression: String,
}

impl Step {
    pub fn description(&self) -> String {
        match self.kind {
            StepKind::Original => "Original".to_string(),
            StepKind::Rewrite {
                law,
                pattern,
                replacement,
            } => format!("{}: {} → {}", law, pattern, replacement),
            StepKind::RemovedParentheses => "Removed redundant parentheses".to_string(),
            StepKind::Cleanup => "Final cleanup".to_string(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description(), self.expression)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Simplification {
    /// Input text as given.
    pub original: String,
    /// Final simplified text.
    pub expression: String,
    pub steps: Vec<Step>,
    pub iterations: usize,
    /// `false` when the iteration cap ended the loop.
    pub converged: bool,
}

/// Length comparison between input and simplified text, in characters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SimplificationStats {
    pub original_length: usize,
    pub simplified_length: usize,
    pub reduction_percent: f64,
    pub reduction_ratio: f64,
}

impl Simplification {
    pub fn stats(&self) -> SimplificationStats {
        let original_length = self.original.chars().count();
        let simplified_length = self.expression.chars().count();
        let (reduction_percent, reduction_ratio) = if original_length > 0 {
            let o = original_length as f64;
            let s = simplified_length as f64;
            ((o - s) / o * 100.0, s / o)
        } else {
            (0.0, 1.0)
        };
        SimplificationStats {
            original_length,
            simplified_length,
            reduction_percent,
            reduction_ratio,
        }
    }

    /// Steps that applied a rewrite rule.
    pub fn rewrites(&self) -> impl Iterator<Item = &Step> {
        self.steps
            .iter()
            .filter(|step| matches!(step.kind, StepKind::Rewrite { .. }))
    }

    pub fn into_parts(self) -> (String, Vec<Step>) {
        (self.expression, self.steps)
    }
}

struct CompiledRule {
    rule: Rule,
    pattern: Vec<Token>,
    replacement: Vec<Token>,
}

impl CompiledRule {
    fn new(rule: Rule) -> Self {
        Self {
            rule,
            pattern: tokenize(rule.pattern),
            replacement: tokenize(rule.replacement),
        }
    }
}

pub struct Simplifier {
    rules: Vec<CompiledRule>,
    max_iterations: usize,
}

impl Simplifier {
    pub const DEFAULT_MAX_ITERATIONS: usize = 20;

    pub fn new(max_iterations: usize) -> Self {
        Self {
            rules: RULES.iter().copied().map(CompiledRule::new).collect(),
            max_iterations,
        }
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn simplify(&self, text: &str) -> Simplification {
        let mut current = tokenize(text);
        let mut steps = vec![Step {
            kind: StepKind::Original,
            expression: render(&current),
        }];
        debug!("simplify({:?})", steps[0].expression);

        let mut iterations = 0;
        let mut converged = false;
        while iterations < self.max_iterations {
            iterations += 1;
            let mut changed = false;

            if let Some((rule, next)) = self.rewrite(&current) {
                current = next;
                let expression = render(&current);
                debug!("simplify: {} => {}", rule.law, expression);
                steps.push(Step {
                    kind: StepKind::Rewrite {
                        law: rule.law,
                        pattern: rule.pattern,
                        replacement: rule.replacement,
                    },
                    expression,
                });
                changed = true;
            }

            let stripped = remove_redundant_parentheses(&current);
            if stripped != current {
                current = stripped;
                steps.push(Step {
                    kind: StepKind::RemovedParentheses,
                    expression: render(&current),
                });
                changed = true;
            }

            if !changed {
                converged = true;
                break;
            }
        }
        if !converged {
            warn!(
                "simplify: iteration cap ({}) reached for {:?}",
                self.max_iterations, text
            );
        }

        let spaced = render(&current);
        let expression = render_compact(&current);
        if expression != spaced {
            steps.push(Step {
                kind: StepKind::Cleanup,
                expression: expression.clone(),
            });
        }

        Simplification {
            original: text.to_string(),
            expression,
            steps,
            iterations,
            converged,
        }
    }

    /// Applies the first rule matching the whole expression.
    fn rewrite(&self, expr: &[Token]) -> Option<(Rule, Vec<Token>)> {
        self.rules.iter().find_map(|compiled| {
            let bindings = match_pattern(&compiled.pattern, expr)?;
            Some((compiled.rule, substitute(&compiled.replacement, &bindings)))
        })
    }
}

impl Default for Simplifier {
    fn default() -> Self {
        Simplifier::new(Self::DEFAULT_MAX_ITERATIONS)
    }
}

type Bindings = Vec<(Var, Token)>;

/// Matches `expr` against `pattern` token by token.
///
/// Pattern variables are placeholders: each binds one atom, the same
/// placeholder always binds the same atom, and different placeholders bind
/// different atoms.
fn match_pattern(pattern: &[Token], expr: &[Token]) -> Option<Bindings> {
    if pattern.len() != expr.len() {
        return None;
    }

    let mut bindings: Bindings = Vec::new();
    for (p, e) in pattern.iter().zip(expr) {
        match p {
            Token::Variable(placeholder) => {
                if !e.is_atom() {
                    return None;
                }
                match bindings.iter().find(|(v, _)| v == placeholder) {
                    Some((_, bound)) if bound != e => return None,
                    Some(_) => {}
                    None => {
                        if bindings.iter().any(|(_, bound)| bound == e) {
                            return None;
                        }
                        bindings.push((*placeholder, e.clone()));
                    }
                }
            }
            _ if p != e => return None,
            _ => {}
        }
    }
    Some(bindings)
}

fn substitute(replacement: &[Token], bindings: &Bindings) -> Vec<Token> {
    replacement
        .iter()
        .map(|token| match token {
            Token::Variable(placeholder) => bindings
                .iter()
                .find(|(v, _)| v == placeholder)
                .map(|(_, bound)| bound.clone())
                .unwrap_or_else(|| token.clone()),
            _ => token.clone(),
        })
        .collect()
}

/// Unwraps `(atom)` everywhere, then a pair of parentheses around the whole expression.
fn remove_redundant_parentheses(tokens: &[Token]) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut rest = tokens;
    loop {
        match rest {
            [Token::LeftParen, atom, Token::RightParen, tail @ ..] if atom.is_atom() => {
                out.push(atom.clone());
                rest = tail;
            }
            [token, tail @ ..] => {
                out.push(token.clone());
                rest = tail;
            }
            [] => break,
        }
    }

    if let [Token::LeftParen, inner @ .., Token::RightParen] = out.as_slice() {
        if is_balanced(inner) {
            return inner.to_vec();
        }
    }
    out
}

fn is_balanced(tokens: &[Token]) -> bool {
    let mut depth = 0usize;
    for token in tokens {
        match token {
            Token::LeftParen => depth += 1,
            Token::RightParen => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

fn render_with(tokens: &[Token], tight_negation: bool) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if let Some(prev) = i.checked_sub(1).map(|j| &tokens[j]) {
            let tight = matches!(prev, Token::LeftParen)
                || matches!(token, Token::RightParen)
                || (tight_negation && matches!(prev, Token::Unary(_)));
            if !tight {
                out.push(' ');
            }
        }
        let _ = write!(out, "{}", token);
    }
    out
}

/// Normalized form: one space around every operator, none inside parentheses.
pub fn render(tokens: &[Token]) -> String {
    render_with(tokens, false)
}

/// Display form: like [`render`], with negation attached to its operand.
pub fn render_compact(tokens: &[Token]) -> String {
    render_with(tokens, true)
}

/// Upper-cases, canonicalizes operator spellings and normalizes spacing.
pub fn normalize(text: &str) -> String {
    render(&tokenize(text))
}
