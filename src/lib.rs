//! # logic-rs: a propositional logic engine
//!
//! **`logic-rs`** parses textual Boolean expressions, validates their syntax, evaluates them
//! under variable assignments, enumerates their truth tables and simplifies them with
//! Boolean-algebra rewrite rules.
//!
//! ## Expressions
//!
//! Variables are single letters (`A`..`Z`, case-insensitive), constants are `0`, `1`, `TRUE`
//! and `FALSE`. Operators can be written with their canonical symbol or any of their aliases:
//!
//! | operator | canonical | aliases                  |
//! |----------|-----------|--------------------------|
//! | NOT      | `¬`       | `~` `!` `NOT`            |
//! | AND      | `∧`       | `&` `&&` `AND`           |
//! | OR       | `∨`       | `\|` `\|\|` `OR`         |
//! | XOR      | `⊕`       | `^` `XOR`                |
//! | NAND     | `↑`       | `NAND`                   |
//! | NOR      | `↓`       | `NOR`                    |
//! | IMPLIES  | `→`       | `->` `=>` `IMP`          |
//! | IFF      | `↔`       | `<->` `<=>` `XNOR` `IFF` |
//!
//! NOT binds tightest, then AND/XOR/NAND, then OR/NOR, then IMPLIES/IFF.
//!
//! ## Basic Usage
//!
//! ```rust
//! use logic_rs::engine::Engine;
//! use logic_rs::types::Assignment;
//!
//! let engine = Engine::default();
//!
//! // 1. Validate
//! assert!(engine.validate("(A ∧ B").is_err());
//!
//! // 2. Evaluate: missing variables read as false
//! let a: Assignment = "A=1".parse().unwrap();
//! assert_eq!(engine.evaluate("A ∧ ¬B", &a), Ok(true));
//!
//! // 3. Truth table, classification and CSV
//! let table = engine.generate_truth_table("A ∨ ¬A").unwrap();
//! assert!(table.is_tautology());
//! assert!(table.to_csv_string().starts_with("A,Result\r\n"));
//!
//! // 4. Simplification with a step trace
//! let s = engine.simplify("A ∨ 0");
//! assert_eq!(s.expression, "A");
//! for step in &s.steps {
//!     println!("{}", step);
//! }
//! ```
//!
//! ## Core Components
//!
//! - **[`token`]**: the lexer, turning text into [`Token`][crate::token::Token]s.
//! - **[`validate`]**: ordered syntax checks, returning the first failure.
//! - **[`eval`]**: shunting-yard conversion to postfix and stack evaluation.
//! - **[`table`]**: truth tables and their summaries; [`export`] writes them as CSV.
//! - **[`simplify`]**: the rewrite loop over the [`rules`] table.
//! - **[`engine`]**: the [`Engine`][crate::engine::Engine] facade tying it all together.

pub mod engine;
pub mod error;
pub mod eval;
pub mod export;
pub mod operator;
pub mod rules;
pub mod simplify;
pub mod table;
pub mod token;
pub mod types;
pub mod validate;
