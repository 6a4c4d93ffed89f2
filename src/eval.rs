//! Structural evaluation of expressions under a concrete assignment.
//!
//! Evaluation is a pure recursion over the immutable [`Expr`] tree: no side effects,
//! no shared state, and in particular no textual substitution of values into the
//! source string. Both operands of a binary connective are always evaluated;
//! short-circuiting would make no observable difference since evaluation is total
//! and effect-free.

use std::collections::HashMap;

use crate::error::EvalError;
use crate::expr::Expr;

/// A total mapping from variable name to truth value, used transiently during
/// evaluation.
pub type Assignment = HashMap<String, bool>;

impl Expr {
    /// Evaluates the expression under `assignment`.
    ///
    /// Semantics per node: `Var` looks up the assignment, `Implies(a, b)` is
    /// `¬a ∨ b`, and `Iff(a, b)` is `a == b`.
    ///
    /// Returns [`EvalError::UnboundVariable`] if the assignment is missing an entry.
    /// This is a defensive check: it cannot fire when the assignment is built from
    /// [`Expr::variables`].
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, EvalError> {
        match self {
            Expr::Var(name) => {
                assignment
                    .get(name)
                    .copied()
                    .ok_or_else(|| EvalError::UnboundVariable { name: name.clone() })
            }
            Expr::Not(x) => Ok(!x.eval(assignment)?),
            Expr::And(a, b) => Ok(a.eval(assignment)? & b.eval(assignment)?),
            Expr::Or(a, b) => Ok(a.eval(assignment)? | b.eval(assignment)?),
            Expr::Implies(a, b) => Ok(!a.eval(assignment)? | b.eval(assignment)?),
            Expr::Iff(a, b) => Ok(a.eval(assignment)? == b.eval(assignment)?),
        }
    }
}
