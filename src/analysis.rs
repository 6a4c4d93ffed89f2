//! Semantic analysis of a complete truth table.
//!
//! The analyzer is a pure function over the enumerated rows: it classifies the
//! expression, reports satisfiability with a bounded list of satisfying assignments,
//! and, for exactly two variables, names the boolean function the expression
//! computes. It mutates nothing and holds no state.

use std::fmt;

use crate::table::{TruthRow, TruthTable};

/// Semantic classification of an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Classification {
    /// True under every assignment.
    Tautology,
    /// False under every assignment.
    Contradiction,
    /// True under some assignments, false under others.
    Contingency,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Tautology => write!(f, "Tautology (always true)"),
            Classification::Contradiction => write!(f, "Contradiction (always false)"),
            Classification::Contingency => write!(f, "Contingency"),
        }
    }
}

/// How many satisfying assignments a report lists in full; the rest are summarized
/// by [`AnalysisReport::omitted_satisfying`].
pub const LISTED_SATISFYING: usize = 5;

/// Aggregate semantic properties derived from a complete truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub classification: Classification,
    /// Whether at least one assignment yields true.
    pub satisfiable: bool,
    /// Number of assignments yielding true.
    pub true_count: usize,
    /// Total number of assignments (`2^k`).
    pub total_count: usize,
    /// The first [`LISTED_SATISFYING`] satisfying assignments, in enumeration
    /// order, as (name, value) pairs in variable order.
    pub satisfying: Vec<Vec<(String, bool)>>,
    /// Number of satisfying assignments beyond the listed ones. Truncation is
    /// always explicit, never silent.
    pub omitted_satisfying: usize,
    /// Canonical name of the two-variable boolean function, when the table has
    /// exactly two variables.
    pub binary_operation: Option<&'static str>,
}

impl TruthTable {
    /// Derives the aggregate properties of this table.
    pub fn analyze(&self) -> AnalysisReport {
        let rows = self.rows();
        let variables = self.variables();
        assert_eq!(
            rows.len(),
            1usize << variables.len(),
            "truth table must be complete"
        );

        let true_count = rows.iter().filter(|row| row.result).count();
        let total_count = rows.len();

        let classification = if true_count == total_count {
            Classification::Tautology
        } else if true_count == 0 {
            Classification::Contradiction
        } else {
            Classification::Contingency
        };

        let satisfying: Vec<Vec<(String, bool)>> = rows
            .iter()
            .filter(|row| row.result)
            .take(LISTED_SATISFYING)
            .map(|row| name_values(variables, row))
            .collect();
        let omitted_satisfying = true_count - satisfying.len();

        let binary_operation = if variables.len() == 2 {
            // Completeness was asserted above, so there are exactly 4 rows and the
            // pattern is one of the 16 two-variable boolean functions.
            let pattern = [
                rows[0].result,
                rows[1].result,
                rows[2].result,
                rows[3].result,
            ];
            Some(binary_operation_name(pattern))
        } else {
            None
        };

        AnalysisReport {
            classification,
            satisfiable: true_count > 0,
            true_count,
            total_count,
            satisfying,
            omitted_satisfying,
            binary_operation,
        }
    }
}

fn name_values(variables: &[String], row: &TruthRow) -> Vec<(String, bool)> {
    variables
        .iter()
        .cloned()
        .zip(row.values.iter().copied())
        .collect()
}

/// Canonical name of a two-variable boolean function, keyed by its result pattern
/// in enumeration order: `(F,F), (F,T), (T,F), (T,T)`.
///
/// The domain is `[bool; 4]`, so the 16 standard functions cover it exhaustively;
/// there is no "custom operation" case.
pub fn binary_operation_name(pattern: [bool; 4]) -> &'static str {
    match pattern {
        [false, false, false, false] => "Contradiction (False)",
        [false, false, false, true] => "Conjunction (AND)",
        [false, false, true, false] => "Material non-implication",
        [false, false, true, true] => "First projection",
        [false, true, false, false] => "Converse non-implication",
        [false, true, false, true] => "Second projection",
        [false, true, true, false] => "Exclusive disjunction (XOR)",
        [false, true, true, true] => "Disjunction (OR)",
        [true, false, false, false] => "Joint denial (NOR)",
        [true, false, false, true] => "Biconditional (XNOR)",
        [true, false, true, false] => "Negation (NOT B)",
        [true, false, true, true] => "Converse implication",
        [true, true, false, false] => "Negation (NOT A)",
        [true, true, false, true] => "Material implication",
        [true, true, true, false] => "Alternative denial (NAND)",
        [true, true, true, true] => "Tautology (True)",
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Classification: {}", self.classification)?;
        writeln!(
            f,
            "Satisfiable: {} ({}/{} assignments true)",
            if self.satisfiable { "yes" } else { "no" },
            self.true_count,
            self.total_count
        )?;
        if !self.satisfying.is_empty() {
            writeln!(f, "Satisfying assignments:")?;
            for assignment in &self.satisfying {
                let pairs: Vec<String> = assignment
                    .iter()
                    .map(|(name, value)| format!("{}={}", name, if *value { "T" } else { "F" }))
                    .collect();
                writeln!(f, "  {}", pairs.join(", "))?;
            }
            if self.omitted_satisfying > 0 {
                writeln!(f, "  ... and {} more", self.omitted_satisfying)?;
            }
        }
        if let Some(name) = self.binary_operation {
            writeln!(f, "Binary operation: {name}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::table::TruthTable;

    fn report(input: &str) -> AnalysisReport {
        let expr = parse(input).unwrap();
        TruthTable::new(&expr).unwrap().analyze()
    }

    #[test]
    fn test_tautology() {
        let report = report("A OR NOT A");
        assert_eq!(report.classification, Classification::Tautology);
        assert!(report.satisfiable);
        assert_eq!(report.true_count, 2);
        assert_eq!(report.total_count, 2);
    }

    #[test]
    fn test_contradiction() {
        let report = report("A AND NOT A");
        assert_eq!(report.classification, Classification::Contradiction);
        assert!(!report.satisfiable);
        assert_eq!(report.true_count, 0);
        assert!(report.satisfying.is_empty());
        assert_eq!(report.omitted_satisfying, 0);
    }

    #[test]
    fn test_contingency() {
        let report = report("A AND B");
        assert_eq!(report.classification, Classification::Contingency);
        assert!(report.satisfiable);
        assert_eq!(report.true_count, 1);
        assert_eq!(
            report.satisfying,
            vec![vec![("A".to_string(), true), ("B".to_string(), true)]]
        );
    }

    #[test]
    fn test_de_morgan_is_tautology() {
        let report = report("NOT (A AND B) IFF (NOT A OR NOT B)");
        assert_eq!(report.classification, Classification::Tautology);
        assert_eq!(report.true_count, 4);
    }

    #[test]
    fn test_satisfying_order_matches_enumeration() {
        let report = report("A OR B");
        let satisfying: Vec<Vec<bool>> = report
            .satisfying
            .iter()
            .map(|assignment| assignment.iter().map(|(_, value)| *value).collect())
            .collect();
        assert_eq!(
            satisfying,
            vec![vec![false, true], vec![true, false], vec![true, true]]
        );
    }

    #[test]
    fn test_satisfying_truncation_is_explicit() {
        // A OR B OR C is true for 7 of 8 assignments; 5 listed, 2 summarized.
        let report = report("A OR B OR C");
        assert_eq!(report.true_count, 7);
        assert_eq!(report.satisfying.len(), LISTED_SATISFYING);
        assert_eq!(report.omitted_satisfying, 2);
    }

    #[test]
    fn test_binary_operation_material_implication() {
        let report = report("A IMPLIES B");
        assert_eq!(report.binary_operation, Some("Material implication"));
    }

    #[test]
    fn test_binary_operation_xor() {
        let report = report("(A OR B) AND NOT (A AND B)");
        assert_eq!(report.binary_operation, Some("Exclusive disjunction (XOR)"));
    }

    #[test]
    fn test_binary_operation_projections() {
        // A AND (B OR NOT B) depends only on A, but ranges over two variables.
        let first = report("A AND (B OR NOT B)");
        assert_eq!(first.binary_operation, Some("First projection"));

        let second = report("B AND (A OR NOT A)");
        assert_eq!(second.binary_operation, Some("Second projection"));
    }

    #[test]
    fn test_binary_operation_constants() {
        let top = report("(A IMPLIES B) OR (B IMPLIES A)");
        assert_eq!(top.binary_operation, Some("Tautology (True)"));

        let bottom = report("(A IFF B) AND (A IFF NOT B)");
        assert_eq!(bottom.binary_operation, Some("Contradiction (False)"));
    }

    #[test]
    fn test_binary_operation_only_for_two_variables() {
        assert_eq!(report("A OR NOT A").binary_operation, None);
        assert_eq!(report("A OR B OR C").binary_operation, None);
    }

    #[test]
    fn test_binary_operation_name_total() {
        // All 16 patterns resolve to distinct names.
        let mut seen = std::collections::HashSet::new();
        for bits in 0u8..16 {
            let pattern = [
                bits & 8 != 0,
                bits & 4 != 0,
                bits & 2 != 0,
                bits & 1 != 0,
            ];
            assert!(seen.insert(binary_operation_name(pattern)));
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_report_display() {
        let report = report("A AND B");
        let text = report.to_string();
        assert!(text.contains("Classification: Contingency"));
        assert!(text.contains("Satisfiable: yes (1/4 assignments true)"));
        assert!(text.contains("A=T, B=T"));
        assert!(text.contains("Binary operation: Conjunction (AND)"));
    }

    #[test]
    fn test_report_display_truncation() {
        let report = report("A OR B OR C");
        assert!(report.to_string().contains("... and 2 more"));
    }
}
