//! Truth-table enumeration.
//!
//! [`Assignments`] generates every assignment of truth values to a sorted variable
//! list in the canonical order: the lexicographically smallest variable is the
//! most-significant bit, so the all-false row comes first and the all-true row last.
//! For variables `[A, B]` the order is `(F,F), (F,T), (T,F), (T,T)`.
//!
//! [`TruthTable::build`] pairs each assignment with the evaluated result. Enumeration
//! is exponential in the variable count, so construction takes an explicit ceiling
//! and fails with a structured error instead of attempting an unbounded walk; the
//! table is never partially populated.

use std::fmt;

use log::debug;
use num_bigint::BigUint;

use crate::error::TableError;
use crate::eval::Assignment;
use crate::expr::Expr;

/// Default ceiling on the number of distinct variables in one table.
pub const DEFAULT_VARIABLE_LIMIT: usize = 16;

/// Hard upper bound on any ceiling: `2^k` rows must stay addressable.
pub const MAX_VARIABLE_LIMIT: usize = 31;

/// Lazy, finite, restartable iterator over all `2^k` value rows for `k` variables.
///
/// Yields one `Vec<bool>` per assignment, values in variable order. Row `i` maps bit
/// `b` of `i` (counting from the most significant of the `k` bits) to the truth value
/// of the `b`-th variable.
pub struct Assignments<'a> {
    variables: &'a [String],
    index: usize,
    total: usize,
}

impl<'a> Assignments<'a> {
    /// Creates an enumerator over all assignments to `variables`.
    ///
    /// # Panics
    ///
    /// Panics if there are more than [`MAX_VARIABLE_LIMIT`] variables; enumeration
    /// ceilings must be checked before constructing the iterator.
    pub fn new(variables: &'a [String]) -> Self {
        assert!(
            variables.len() <= MAX_VARIABLE_LIMIT,
            "Variable count should be in the range 0..={MAX_VARIABLE_LIMIT}"
        );
        Self {
            variables,
            index: 0,
            total: 1usize << variables.len(),
        }
    }

    /// Rewinds the enumeration to the all-false row.
    pub fn restart(&mut self) {
        self.index = 0;
    }

    fn values(&self, index: usize) -> Vec<bool> {
        let k = self.variables.len();
        (0..k).map(|b| (index >> (k - 1 - b)) & 1 == 1).collect()
    }
}

impl Iterator for Assignments<'_> {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total {
            return None;
        }
        let values = self.values(self.index);
        self.index += 1;
        Some(values)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments<'_> {}

/// One row of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthRow {
    /// Truth value per variable, in variable order.
    pub values: Vec<bool>,
    /// The evaluated result for this assignment.
    pub result: bool,
}

/// A complete truth table: the sorted variable list and all `2^k` rows in
/// enumeration order. This is the single artifact handed to all downstream
/// consumers (display, analysis, plotting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<String>,
    rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Builds the complete truth table for `expr`, or fails with
    /// [`TableError::TooManyVariables`] if the expression has more than
    /// `max_variables` distinct variables.
    ///
    /// # Panics
    ///
    /// Panics if `max_variables` exceeds [`MAX_VARIABLE_LIMIT`].
    pub fn build(expr: &Expr, max_variables: usize) -> Result<Self, TableError> {
        assert!(
            max_variables <= MAX_VARIABLE_LIMIT,
            "Variable limit should be in the range 0..={MAX_VARIABLE_LIMIT}"
        );

        let variables = expr.variables();
        let count = variables.len();
        if count > max_variables {
            return Err(TableError::TooManyVariables {
                count,
                limit: max_variables,
                rows: BigUint::from(1u32) << count,
            });
        }

        debug!("enumerating {} rows over {:?}", 1usize << count, variables);

        let mut rows = Vec::with_capacity(1 << count);
        for values in Assignments::new(&variables) {
            let assignment: Assignment = variables
                .iter()
                .cloned()
                .zip(values.iter().copied())
                .collect();
            let result = match expr.eval(&assignment) {
                Ok(value) => value,
                // The assignment covers exactly the expression's variable set.
                Err(e) => unreachable!("{e}"),
            };
            rows.push(TruthRow { values, result });
        }

        Ok(Self { variables, rows })
    }

    /// Builds the truth table with the [`DEFAULT_VARIABLE_LIMIT`] ceiling.
    pub fn new(expr: &Expr) -> Result<Self, TableError> {
        Self::build(expr, DEFAULT_VARIABLE_LIMIT)
    }

    /// The sorted variable names, as presented in the table header.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// All rows, in enumeration order.
    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.variables.iter().map(|name| name.len()).collect();

        for (name, &width) in self.variables.iter().zip(&widths) {
            write!(f, "{name:>width$} | ")?;
        }
        writeln!(f, "Result")?;

        for &width in &widths {
            write!(f, "{:->width$}-+-", "")?;
        }
        writeln!(f, "------")?;

        for row in &self.rows {
            for (value, &width) in row.values.iter().zip(&widths) {
                let cell = if *value { "T" } else { "F" };
                write!(f, "{cell:>width$} | ")?;
            }
            writeln!(f, "{}", if row.result { "T" } else { "F" })?;
        }
        Ok(())
    }
}
