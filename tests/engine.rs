//! End-to-end tests for the engine operations.
//!
//! Tests cover validation, variable extraction, evaluation, truth tables,
//! CSV export and simplification.

use logic_rs::engine::Engine;
use logic_rs::error::{EngineError, ValidationError};
use logic_rs::simplify::StepKind;
use logic_rs::table::Classification;
use logic_rs::types::{Assignment, Var};

const EXPRESSIONS: &[&str] = &[
    "A",
    "¬A",
    "A ∧ B",
    "A ∨ B ∧ C",
    "(A → B) ∧ (B → C) → (A → C)",
    "A ⊕ B ⊕ C",
    "A NAND (B NOR C)",
    "¬¬A ↔ A",
    "a && !b || c",
    "(A ∨ ¬A) ∧ 1",
    "A ∧ ¬A",
    "TRUE => x",
];

fn vars(s: &str) -> Vec<Var> {
    s.chars().filter_map(Var::new).collect()
}

fn assign(s: &str) -> Assignment {
    s.parse().unwrap()
}

// ─── Validation ────────────────────────────────────────────────────────────────

#[test]
fn validate_unbalanced() {
    let engine = Engine::default();
    assert_eq!(engine.validate("(A ∧ B"), Err(ValidationError::UnbalancedParentheses));
}

#[test]
fn validate_accepts_sample_expressions() {
    let engine = Engine::default();
    for text in EXPRESSIONS {
        assert_eq!(engine.validate(text), Ok(()), "{text}");
    }
}

#[test]
fn validate_reports_first_failure_only() {
    let engine = Engine::default();
    // Both misplaced and unknown; placement is checked first.
    assert!(matches!(
        engine.validate("∧ FOO"),
        Err(ValidationError::MisplacedBinaryOperator { .. })
    ));
}

// ─── Variables and evaluation ──────────────────────────────────────────────────

#[test]
fn extract_variables_sorted() {
    let engine = Engine::default();
    assert_eq!(engine.extract_variables("(A ∧ B) ∨ ¬C"), vars("ABC"));
    assert_eq!(engine.extract_variables("z | y | x"), vars("XYZ"));
}

#[test]
fn evaluate_implication() {
    let engine = Engine::default();
    assert_eq!(engine.evaluate("A → B", &assign("A=1,B=0")), Ok(false));
}

#[test]
fn evaluate_constants_ignore_assignment() {
    let engine = Engine::default();
    for text in ["1", "0", "1 ∧ 0", "0 → 0", "¬1 ∨ 1", "TRUE ⊕ FALSE"] {
        let expected = engine.evaluate(text, &Assignment::new()).unwrap();
        for a in ["A=1", "A=0,B=1", "Z=1"] {
            assert_eq!(engine.evaluate(text, &assign(a)), Ok(expected), "{text} under {a}");
        }
    }
}

#[test]
fn evaluate_never_fails_after_validation() {
    let engine = Engine::default();
    for text in EXPRESSIONS {
        assert!(engine.validate(text).is_ok());
        let variables = engine.extract_variables(text);
        for index in 0..(1usize << variables.len()) {
            let a = Assignment::from_index(&variables, index);
            assert!(engine.evaluate(text, &a).is_ok(), "{text} under {a}");
        }
    }
}

#[test]
fn de_morgan_duality() {
    let engine = Engine::default();
    let ab = vars("AB");
    for index in 0..4 {
        let a = Assignment::from_index(&ab, index);
        assert_eq!(engine.evaluate("¬(A ∧ B)", &a), engine.evaluate("¬A ∨ ¬B", &a));
    }
}

// ─── Truth tables ──────────────────────────────────────────────────────────────

#[test]
fn truth_table_xor() {
    let table = Engine::default().generate_truth_table("A XOR B").unwrap();
    let results: Vec<bool> = table.results().collect();
    assert_eq!(results, vec![false, true, true, false]);
    let firsts: Vec<Option<bool>> = table
        .rows()
        .iter()
        .map(|row| row.assignment.get(Var::new('A').unwrap()))
        .collect();
    assert_eq!(firsts, vec![Some(false), Some(false), Some(true), Some(true)]);
}

#[test]
fn truth_table_size() {
    let engine = Engine::default();
    for text in EXPRESSIONS {
        let n = engine.extract_variables(text).len();
        let table = engine.generate_truth_table(text).unwrap();
        let summary = table.summary();
        assert_eq!(table.len(), 1 << n, "{text}");
        assert_eq!(summary.true_count + summary.false_count, 1 << n);
        assert_eq!(table.minterms().len() + table.maxterms().len(), 1 << n);
    }
}

#[test]
fn classification_matches_direct_evaluation() {
    let engine = Engine::default();
    for text in EXPRESSIONS {
        let table = engine.generate_truth_table(text).unwrap();
        let variables = engine.extract_variables(text);
        let values: Vec<bool> = (0..(1usize << variables.len()))
            .map(|i| engine.evaluate(text, &Assignment::from_index(&variables, i)).unwrap())
            .collect();

        let summary = table.summary();
        assert_eq!(summary.is_tautology, values.iter().all(|&v| v), "{text}");
        assert_eq!(summary.is_contradiction, values.iter().all(|&v| !v), "{text}");
        let flags = [summary.is_tautology, summary.is_contradiction, summary.is_contingency];
        assert_eq!(flags.iter().filter(|&&f| f).count(), 1, "{text}");
    }
}

#[test]
fn classification_examples() {
    let engine = Engine::default();
    let classify = |text: &str| engine.generate_truth_table(text).unwrap().classification();
    assert_eq!(classify("(A → B) ∧ (B → C) → (A → C)"), Classification::Tautology);
    assert_eq!(classify("A ∧ ¬A"), Classification::Contradiction);
    assert_eq!(classify("A ∨ B"), Classification::Contingency);
}

#[test]
fn truth_table_invalid_expression() {
    let result = Engine::default().generate_truth_table("A ∧");
    assert!(matches!(result, Err(EngineError::Invalid(_))));
}

#[test]
fn csv_export() {
    let table = Engine::default().generate_truth_table("A XOR B").unwrap();
    assert_eq!(
        table.to_csv_string(),
        "A,B,Result\r\nFalse,False,False\r\nFalse,True,True\r\nTrue,False,True\r\nTrue,True,False\r\n"
    );
}

// ─── Simplification ────────────────────────────────────────────────────────────

#[test]
fn simplify_identity() {
    let s = Engine::default().simplify("A ∧ 1");
    assert_eq!(s.expression, "A");
    assert_eq!(s.rewrites().count(), 1);
    assert_eq!(s.steps[0].kind, StepKind::Original);
}

#[test]
fn simplify_idempotent() {
    assert_eq!(Engine::default().simplify("A ∧ A").expression, "A");
}

#[test]
fn simplify_preserves_meaning() {
    let engine = Engine::default();
    for text in ["A ∧ 1", "¬(A ∨ B)", "A → B", "A ↔ B", "A ⊕ B", "A ∧ (B ∨ C)", "¬¬A"] {
        let s = engine.simplify(text);
        let original = engine.generate_truth_table(text).unwrap();
        let simplified = engine.generate_truth_table(&s.expression).unwrap();
        if original.variables() == simplified.variables() {
            assert_eq!(original, simplified, "{text} => {}", s.expression);
        }
    }
}

#[test]
fn simplify_rerun_converges() {
    let engine = Engine::default();
    for text in EXPRESSIONS {
        let first = engine.simplify(text);
        let second = engine.simplify(&first.expression);
        assert!(second.iterations <= engine.config().max_iterations);
        if second.converged && second.rewrites().count() == 0 {
            assert_eq!(second.expression, first.expression, "{text}");
        }
    }
}
