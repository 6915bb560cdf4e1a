//! The engine facade.
//!
//! [`Engine`] bundles an immutable [`EngineConfig`] with the compiled rule set
//! and exposes the operations a front end needs: validation, variable
//! extraction, evaluation, truth table generation and simplification. It holds
//! no mutable state, so one engine can serve any number of callers.
//!
//! # Examples
//!
//! ```
//! use logic_rs::engine::Engine;
//! use logic_rs::types::Assignment;
//!
//! let engine = Engine::default();
//! assert!(engine.validate("(A ∧ B) ∨ ¬C").is_ok());
//!
//! let a: Assignment = "A=1,B=0".parse().unwrap();
//! assert_eq!(engine.evaluate("A → B", &a), Ok(false));
//!
//! let table = engine.generate_truth_table("A ⊕ B").unwrap();
//! assert_eq!(table.minterms(), vec![1, 2]);
//! ```

use std::collections::BTreeSet;

use log::debug;
use rayon::prelude::*;

use crate::error::{EngineError, EvalError, ValidationError};
use crate::eval::{evaluate_postfix, to_postfix, Strict};
use crate::simplify::{Simplification, Simplifier};
use crate::table::{Row, TruthTable};
use crate::token::{tokenize, Token};
use crate::types::{Assignment, Var};
use crate::validate;

/// Engine settings.
///
/// # Examples
///
/// ```
/// use logic_rs::engine::{Engine, EngineConfig};
///
/// let engine = Engine::new(EngineConfig {
///     max_variables: 8,
///     strict_assignments: true,
///     ..EngineConfig::default()
/// });
/// assert!(engine.generate_truth_table("A ∧ B ∧ C ∧ D ∧ E ∧ F ∧ G ∧ H ∧ I").is_err());
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EngineConfig {
    /// Largest variable count accepted by truth table generation (default: 20).
    pub max_variables: usize,
    /// Variable count from which rows are evaluated in parallel (default: 12).
    pub parallel_threshold: usize,
    /// Simplifier iteration cap (default: 20).
    pub max_iterations: usize,
    /// Report unassigned variables as errors instead of reading them as `false` (default: false).
    pub strict_assignments: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_variables: 20,
            parallel_threshold: 12,
            max_iterations: Simplifier::DEFAULT_MAX_ITERATIONS,
            strict_assignments: false,
        }
    }
}

pub struct Engine {
    config: EngineConfig,
    simplifier: Simplifier,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let simplifier = Simplifier::new(config.max_iterations);
        Self { config, simplifier }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn validate(&self, text: &str) -> Result<(), ValidationError> {
        validate::validate(text)
    }

    /// Distinct variables of `text`, sorted.
    pub fn extract_variables(&self, text: &str) -> Vec<Var> {
        variables_of(&tokenize(text))
    }

    /// Evaluates `text` under `assignment`.
    ///
    /// The text is not validated first; structural problems surface as [`EvalError`]s.
    pub fn evaluate(&self, text: &str, assignment: &Assignment) -> Result<bool, EvalError> {
        debug!("evaluate({:?}, {})", text, assignment);
        let postfix = to_postfix(tokenize(text));
        if self.config.strict_assignments {
            evaluate_postfix(&postfix, &Strict(assignment))
        } else {
            evaluate_postfix(&postfix, assignment)
        }
    }

    /// Validates `text` and evaluates it under every assignment of its variables.
    pub fn generate_truth_table(&self, text: &str) -> Result<TruthTable, EngineError> {
        debug!("generate_truth_table({:?})", text);
        validate::validate(text)?;

        let tokens = tokenize(text);
        let variables = variables_of(&tokens);
        if variables.len() > self.config.max_variables {
            return Err(EngineError::TooManyVariables {
                count: variables.len(),
                limit: self.config.max_variables,
            });
        }
        let postfix = to_postfix(tokens);

        let rows = if variables.is_empty() {
            let assignment = Assignment::new();
            let result = evaluate_postfix(&postfix, &assignment)?;
            vec![Row { assignment, result }]
        } else {
            let count = 1usize << variables.len();
            let row = |index: usize| -> Result<Row, EvalError> {
                let assignment = Assignment::from_index(&variables, index);
                let result = evaluate_postfix(&postfix, &assignment)?;
                Ok(Row { assignment, result })
            };
            if variables.len() >= self.config.parallel_threshold {
                debug!("generate_truth_table: {} rows in parallel", count);
                (0..count).into_par_iter().map(row).collect::<Result<Vec<_>, _>>()?
            } else {
                (0..count).map(row).collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(TruthTable::new(variables, rows))
    }

    /// Simplifies `text`. Never fails; invalid text is simplified as far as it tokenizes.
    pub fn simplify(&self, text: &str) -> Simplification {
        self.simplifier.simplify(text)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}

fn variables_of(tokens: &[Token]) -> Vec<Var> {
    let vars: BTreeSet<Var> = tokens
        .iter()
        .filter_map(|token| match token {
            Token::Variable(var) => Some(*var),
            _ => None,
        })
        .collect();
    vars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn vars(s: &str) -> Vec<Var> {
        s.chars().filter_map(Var::new).collect()
    }

    #[test]
    fn test_extract_variables_sorted() {
        let engine = Engine::default();
        assert_eq!(engine.extract_variables("(A ∧ B) ∨ ¬C"), vars("ABC"));
        assert_eq!(engine.extract_variables("c or b and a or c"), vars("ABC"));
        assert_eq!(engine.extract_variables("1 ∧ TRUE"), vec![]);
        assert_eq!(engine.extract_variables("A AND B"), vars("AB"));
    }

    #[test]
    fn test_truth_table_order() {
        let table = Engine::default().generate_truth_table("A XOR B").unwrap();
        assert_eq!(table.variables(), vars("AB").as_slice());
        let rows: Vec<(bool, bool, bool)> = table
            .rows()
            .iter()
            .map(|row| {
                let values: Vec<bool> = row.assignment.iter().map(|(_, v)| v).collect();
                (values[0], values[1], row.result)
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                (false, false, false),
                (false, true, true),
                (true, false, true),
                (true, true, false),
            ]
        );
    }

    #[test]
    fn test_constant_table() {
        let table = Engine::default().generate_truth_table("1 ∧ ¬0").unwrap();
        assert!(table.variables().is_empty());
        assert_eq!(table.len(), 1);
        assert!(table.rows()[0].result);
        assert!(table.rows()[0].assignment.is_empty());
    }

    #[test]
    fn test_table_rejects_invalid() {
        assert_eq!(
            Engine::default().generate_truth_table("(A ∧ B"),
            Err(EngineError::Invalid(ValidationError::UnbalancedParentheses))
        );
    }

    #[test]
    fn test_table_variable_limit() {
        let engine = Engine::new(EngineConfig {
            max_variables: 2,
            ..EngineConfig::default()
        });
        assert_eq!(
            engine.generate_truth_table("A ∧ B ∧ C"),
            Err(EngineError::TooManyVariables { count: 3, limit: 2 })
        );
        assert!(engine.generate_truth_table("A ∧ B").is_ok());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "(A → B) ∧ (C ⊕ D) ∨ ¬(E ↔ F)";
        let sequential = Engine::default().generate_truth_table(text).unwrap();
        let parallel = Engine::new(EngineConfig {
            parallel_threshold: 1,
            ..EngineConfig::default()
        })
        .generate_truth_table(text)
        .unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(parallel.len(), 64);
    }

    #[test]
    fn test_strict_assignments() {
        let engine = Engine::new(EngineConfig {
            strict_assignments: true,
            ..EngineConfig::default()
        });
        let a: Assignment = "A=1".parse().unwrap();
        assert_eq!(
            engine.evaluate("A ∧ B", &a),
            Err(EvalError::UnboundVariable(Var::new('B').unwrap()))
        );
        assert_eq!(Engine::default().evaluate("A ∧ B", &a), Ok(false));
    }

    #[test]
    fn test_simplify_uses_configured_cap() {
        let engine = Engine::new(EngineConfig {
            max_iterations: 5,
            ..EngineConfig::default()
        });
        let s = engine.simplify("A ∧ B");
        assert_eq!(s.iterations, 5);
        assert!(!s.converged);
        assert_eq!(s.expression, "B ∧ A");
    }
}
