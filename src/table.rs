//! Truth tables and derived queries.
//!
//! Rows are ordered by binary counting over the sorted variables, the first
//! variable being the most significant bit and `false` coming before `true`.
//! An expression without variables has a single row and no variable columns.

use std::fmt;

use crate::types::{Assignment, Var};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub assignment: Assignment,
    pub result: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<Var>,
    rows: Vec<Row>,
}

/// Row counts and classification of a truth table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TableSummary {
    pub total_rows: usize,
    pub true_count: usize,
    pub false_count: usize,
    pub is_tautology: bool,
    pub is_contradiction: bool,
    pub is_contingency: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Classification {
    /// True under every assignment.
    Tautology,
    /// False under every assignment.
    Contradiction,
    /// Both true and false rows.
    Contingency,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Tautology => "tautology",
            Classification::Contradiction => "contradiction",
            Classification::Contingency => "contingency",
        };
        f.write_str(name)
    }
}

impl TruthTable {
    pub fn new(variables: Vec<Var>, rows: Vec<Row>) -> Self {
        Self { variables, rows }
    }

    /// Variables in column order.
    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Result column, in row order.
    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    pub fn true_count(&self) -> usize {
        self.results().filter(|&r| r).count()
    }

    pub fn false_count(&self) -> usize {
        self.len() - self.true_count()
    }

    pub fn summary(&self) -> TableSummary {
        let total_rows = self.len();
        let true_count = self.true_count();
        let false_count = total_rows - true_count;
        TableSummary {
            total_rows,
            true_count,
            false_count,
            is_tautology: true_count == total_rows,
            is_contradiction: false_count == total_rows,
            is_contingency: true_count > 0 && false_count > 0,
        }
    }

    pub fn classification(&self) -> Classification {
        let summary = self.summary();
        if summary.is_tautology {
            Classification::Tautology
        } else if summary.is_contradiction {
            Classification::Contradiction
        } else {
            Classification::Contingency
        }
    }

    pub fn is_tautology(&self) -> bool {
        self.results().all(|r| r)
    }

    pub fn is_contradiction(&self) -> bool {
        self.results().all(|r| !r)
    }

    pub fn is_contingency(&self) -> bool {
        self.summary().is_contingency
    }

    /// Row indices where the expression is true.
    pub fn minterms(&self) -> Vec<usize> {
        self.indices_where(true)
    }

    /// Row indices where the expression is false.
    pub fn maxterms(&self) -> Vec<usize> {
        self.indices_where(false)
    }

    fn indices_where(&self, value: bool) -> Vec<usize> {
        self.results()
            .enumerate()
            .filter(|&(_, r)| r == value)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Plain-text rendering with `0`/`1` cells.
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.variables {
            write!(f, "{} ", var)?;
        }
        writeln!(f, "| Result")?;
        for row in &self.rows {
            for (_, value) in row.assignment.iter() {
                write!(f, "{} ", value as u8)?;
            }
            writeln!(f, "| {}", row.result as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn table(results: &[bool]) -> TruthTable {
        let n = results.len().trailing_zeros() as usize;
        let vars: Vec<Var> = ('A'..).take(n).map(|c| Var::new(c).unwrap()).collect();
        let rows = results
            .iter()
            .enumerate()
            .map(|(i, &result)| Row {
                assignment: Assignment::from_index(&vars, i),
                result,
            })
            .collect();
        TruthTable::new(vars, rows)
    }

    #[test]
    fn test_summary_contingency() {
        let t = table(&[false, true, true, false]);
        assert_eq!(
            t.summary(),
            TableSummary {
                total_rows: 4,
                true_count: 2,
                false_count: 2,
                is_tautology: false,
                is_contradiction: false,
                is_contingency: true,
            }
        );
        assert_eq!(t.classification(), Classification::Contingency);
    }

    #[test]
    fn test_classification_exclusive() {
        let t = table(&[true, true]);
        assert!(t.is_tautology() && !t.is_contradiction() && !t.is_contingency());
        assert_eq!(t.classification(), Classification::Tautology);

        let t = table(&[false, false]);
        assert!(!t.is_tautology() && t.is_contradiction() && !t.is_contingency());
        assert_eq!(t.classification(), Classification::Contradiction);
    }

    #[test]
    fn test_minterms_maxterms() {
        let t = table(&[false, true, true, false]);
        assert_eq!(t.minterms(), vec![1, 2]);
        assert_eq!(t.maxterms(), vec![0, 3]);
    }

    #[test]
    fn test_display() {
        let t = table(&[false, true]);
        assert_eq!(t.to_string(), "A | Result\n0 | 0\n1 | 1\n");
    }
}
