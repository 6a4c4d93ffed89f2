//! # truthtab: Truth Tables for Propositional Logic
//!
//! **`truthtab`** is a small, pure engine for propositional logic: it parses a textual
//! boolean expression into an abstract syntax tree, evaluates it under every possible
//! assignment of truth values to its variables, and derives semantic properties such as
//! tautology, contradiction, satisfiability, and the canonical name of the two-variable
//! boolean function an expression computes.
//!
//! ## Pipeline
//!
//! Data flows strictly downward, and every stage is independently usable:
//!
//! ```text
//! text --> tokens --> AST --> (assignment, result) rows --> derived properties
//! ```
//!
//! - **Tokenizer** ([`token`]): turns raw text into typed tokens. Word operators
//!   (`AND`, `OR`, `NOT`, `IMPLIES`, `IFF`), symbolic aliases (`&`, `|`, `~`, `!`,
//!   `->`, `<->`), and the unicode connectives (`∧ ∨ ¬ → ↔`) are all accepted.
//! - **Parser** ([`parser`]): recursive descent over the token stream, producing an
//!   immutable [`Expr`][crate::expr::Expr] tree.
//! - **Evaluator** ([`eval`]): pure structural recursion over the tree against a
//!   concrete assignment. No textual substitution, no shared state.
//! - **Enumerator** ([`table`]): walks all `2^k` assignments in canonical order and
//!   pairs each with its result, yielding a [`TruthTable`][crate::table::TruthTable].
//! - **Analyzer** ([`analysis`]): classifies the table and reports satisfiability.
//!
//! ## Quick Start
//!
//! ```rust
//! use truthtab::parser::parse;
//! use truthtab::table::TruthTable;
//! use truthtab::analysis::Classification;
//!
//! let expr = parse("A IMPLIES B").unwrap();
//! assert_eq!(expr.variables(), ["A", "B"]);
//!
//! let table = TruthTable::new(&expr).unwrap();
//! assert_eq!(table.rows().len(), 4);
//!
//! let report = table.analyze();
//! assert_eq!(report.classification, Classification::Contingency);
//! assert_eq!(report.binary_operation, Some("Material implication"));
//! ```
//!
//! ## Resource bounds
//!
//! Enumeration is exponential in the number of distinct variables, so the engine makes
//! the limit explicit instead of silently hanging: [`TruthTable::build`][crate::table::TruthTable::build]
//! takes a tunable ceiling and fails with a structured error when the expression
//! exceeds it. The engine is entirely synchronous and holds no background resources;
//! callers that want to stream rows at their own pace iterate
//! [`Assignments`][crate::table::Assignments] lazily.

pub mod analysis;
pub mod error;
pub mod eval;
pub mod expr;
pub mod parser;
pub mod table;
pub mod token;
