use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::formulas::Literal;

/// An `Assignment` stores a set of positive and a set of negative variables.
///
/// Assignments are the evaluation context for formulas, clauses, and CNFs.
/// A variable contained in neither set is treated as unassigned and
/// evaluates to `false` when read positively.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use propcnf::datastructures::Assignment;
/// let assignment = Assignment::from_names(&["a", "b"], &["x"]);
///
/// assert!(assignment.contains_pos("a"));
/// assert!(assignment.contains_neg("x"));
/// assert!(!assignment.contains_pos("y"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Assignment {
    pos: BTreeSet<String>,
    neg: BTreeSet<String>,
}

impl Assignment {
    /// Creates a new empty assignment.
    pub const fn new() -> Self {
        Self { pos: BTreeSet::new(), neg: BTreeSet::new() }
    }

    /// Creates a new assignment from slices of variable names.
    pub fn from_names(pos: &[&str], neg: &[&str]) -> Self {
        Self {
            pos: pos.iter().map(ToString::to_string).collect(),
            neg: neg.iter().map(ToString::to_string).collect(),
        }
    }

    /// Adds a single literal to this assignment.
    ///
    /// A positive literal is added to the positive variables, a negative
    /// literal to the negative variables. Returns `true` iff the literal
    /// previously was not contained in the assignment.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::datastructures::Assignment;
    /// # use propcnf::formulas::Literal;
    /// let mut assignment = Assignment::new();
    ///
    /// assert!(assignment.add_literal(Literal::new("a", true)));
    /// assert!(!assignment.add_literal(Literal::new("a", true)));
    /// assert!(assignment.contains_pos("a"));
    /// ```
    pub fn add_literal(&mut self, lit: Literal) -> bool {
        match lit {
            Literal::Pos(var) => self.pos.insert(var),
            Literal::Neg(var) => self.neg.insert(var),
        }
    }

    /// Returns `true` if the given variable is a positive variable in this
    /// assignment.
    pub fn contains_pos(&self, var: &str) -> bool {
        self.pos.contains(var)
    }

    /// Returns `true` if the given variable is a negative variable in this
    /// assignment.
    pub fn contains_neg(&self, var: &str) -> bool {
        self.neg.contains(var)
    }

    /// Returns the truth value of the given variable.
    ///
    /// Unassigned variables read as `false`.
    pub fn value(&self, var: &str) -> bool {
        self.pos.contains(var)
    }

    /// Evaluates the given literal on this assignment.
    ///
    /// A positive literal is true iff its variable is in the positive set; a
    /// negative literal is true iff its variable is in the negative set or
    /// unassigned.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::datastructures::Assignment;
    /// # use propcnf::formulas::Literal;
    /// let assignment = Assignment::from_names(&["a"], &["x"]);
    ///
    /// assert!(assignment.evaluate_lit(&Literal::new("a", true)));
    /// assert!(assignment.evaluate_lit(&Literal::new("x", false)));
    /// assert!(assignment.evaluate_lit(&Literal::new("unassigned", false)));
    /// assert!(!assignment.evaluate_lit(&Literal::new("unassigned", true)));
    /// ```
    pub fn evaluate_lit(&self, lit: &Literal) -> bool {
        let var = lit.variable();
        if lit.phase() {
            self.pos.contains(var)
        } else {
            self.neg.contains(var) || !self.pos.contains(var)
        }
    }

    /// Returns the overall number of positive and negative variables.
    pub fn len(&self) -> usize {
        self.pos.len() + self.neg.len()
    }

    /// Returns `true` if there is no variable in this assignment.
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty() && self.neg.is_empty()
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Assignment{{pos=[{}], neg=[{}]}}", self.pos.iter().join(", "), self.neg.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use crate::formulas::Literal;

    use super::Assignment;

    #[test]
    fn test_from_names() {
        let a = Assignment::from_names(&["a", "b", "c"], &["x", "y"]);
        assert!(a.contains_pos("a") && a.contains_pos("b") && a.contains_pos("c"));
        assert!(a.contains_neg("x") && a.contains_neg("y"));
        assert!(!a.contains_pos("x") && !a.contains_neg("a"));
        assert!(!a.contains_pos("d") && !a.contains_neg("d"));
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_add_literal() {
        let mut a = Assignment::new();
        assert!(a.is_empty());
        assert!(a.add_literal(Literal::new("a", true)));
        assert!(a.add_literal(Literal::new("b", false)));
        assert!(!a.add_literal(Literal::new("b", false)));
        assert!(a.contains_pos("a"));
        assert!(a.contains_neg("b"));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_evaluate_lit() {
        let a = Assignment::from_names(&["a", "b"], &["x"]);
        assert!(a.evaluate_lit(&Literal::new("a", true)));
        assert!(!a.evaluate_lit(&Literal::new("a", false)));
        assert!(!a.evaluate_lit(&Literal::new("x", true)));
        assert!(a.evaluate_lit(&Literal::new("x", false)));
        assert!(!a.evaluate_lit(&Literal::new("d", true)));
        assert!(a.evaluate_lit(&Literal::new("d", false)));
    }

    #[test]
    fn test_to_string() {
        let a = Assignment::from_names(&["b", "a"], &["y", "x"]);
        assert_eq!(a.to_string(), "Assignment{pos=[a, b], neg=[x, y]}");
        assert_eq!(Assignment::new().to_string(), "Assignment{pos=[], neg=[]}");
    }
}
