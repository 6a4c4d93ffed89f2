//! Abstract syntax tree for propositional expressions.
//!
//! [`Expr`] is a closed sum type over the five connectives and variable leaves. The
//! tree is exclusively owned by the expression that produced it (no shared or back
//! references) and is immutable after construction.

use std::collections::BTreeSet;
use std::fmt;

/// A propositional expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A variable leaf. The name is the canonical (uppercase) identifier.
    Var(String),
    /// Negation.
    Not(Box<Expr>),
    /// Conjunction.
    And(Box<Expr>, Box<Expr>),
    /// Disjunction.
    Or(Box<Expr>, Box<Expr>),
    /// Material implication.
    Implies(Box<Expr>, Box<Expr>),
    /// Biconditional.
    Iff(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Expr::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Expr::Iff(Box::new(lhs), Box::new(rhs))
    }

    /// Returns the distinct variable names in this expression, sorted.
    ///
    /// The order is deterministic for a given source text and is the order used for
    /// table headers and assignment enumeration.
    pub fn variables(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names.into_iter().collect()
    }

    fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match self {
            Expr::Var(name) => {
                names.insert(name.clone());
            }
            Expr::Not(x) => x.collect_variables(names),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Implies(a, b) | Expr::Iff(a, b) => {
                a.collect_variables(names);
                b.collect_variables(names);
            }
        }
    }

    /// Depth of the expression tree (0 for a variable leaf).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) => 0,
            Expr::Not(x) => 1 + x.depth(),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Implies(a, b) | Expr::Iff(a, b) => {
                1 + a.depth().max(b.depth())
            }
        }
    }

    /// Size of the expression tree (number of nodes).
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(x) => 1 + x.size(),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Implies(a, b) | Expr::Iff(a, b) => {
                1 + a.size() + b.size()
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{name}"),
            Expr::Not(x) => write!(f, "¬{x}"),
            Expr::And(a, b) => write!(f, "({a} ∧ {b})"),
            Expr::Or(a, b) => write!(f, "({a} ∨ {b})"),
            Expr::Implies(a, b) => write!(f, "({a} → {b})"),
            Expr::Iff(a, b) => write!(f, "({a} ↔ {b})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_sorted_and_deduplicated() {
        let expr = Expr::and(
            Expr::or(Expr::var("C"), Expr::var("A")),
            Expr::and(Expr::var("B"), Expr::var("A")),
        );
        assert_eq!(expr.variables(), ["A", "B", "C"]);
    }

    #[test]
    fn test_variables_single() {
        let expr = Expr::or(Expr::var("A"), Expr::not(Expr::var("A")));
        assert_eq!(expr.variables(), ["A"]);
    }

    #[test]
    fn test_depth() {
        assert_eq!(Expr::var("A").depth(), 0);
        assert_eq!(Expr::not(Expr::var("A")).depth(), 1);
        assert_eq!(Expr::and(Expr::var("A"), Expr::var("B")).depth(), 1);
        assert_eq!(
            Expr::and(Expr::not(Expr::var("A")), Expr::var("B")).depth(),
            2
        );
    }

    #[test]
    fn test_size() {
        assert_eq!(Expr::var("A").size(), 1);
        assert_eq!(Expr::not(Expr::var("A")).size(), 2);
        assert_eq!(Expr::and(Expr::var("A"), Expr::var("B")).size(), 3);
    }

    #[test]
    fn test_display() {
        let expr = Expr::implies(
            Expr::and(Expr::var("A"), Expr::var("B")),
            Expr::not(Expr::var("C")),
        );
        assert_eq!(expr.to_string(), "((A ∧ B) → ¬C)");
    }

    #[test]
    fn test_display_iff() {
        let expr = Expr::iff(Expr::var("A"), Expr::or(Expr::var("B"), Expr::var("C")));
        assert_eq!(expr.to_string(), "(A ↔ (B ∨ C))");
    }
}
