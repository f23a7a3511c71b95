use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::slice;

use itertools::Itertools;

use crate::datastructures::{Assignment, Clause};
use crate::util::exceptions::panic_empty_cnf;

/// A conjunction of [`Clause`]s.
///
/// The clauses are kept in insertion order; the empty CNF means "true" (no
/// constraints). A `Cnf` is append-only: clauses are added one at a time or
/// merged in bulk from another `Cnf`, which transfers ownership so a child's
/// clauses are never aliased by two containers.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use propcnf::datastructures::{Clause, Cnf};
/// # use propcnf::formulas::Literal;
/// let mut cnf = Cnf::new();
/// cnf.add(Clause::from_literals([Literal::new("a", true)]));
/// cnf.add(Clause::from_literals([Literal::new("a", false), Literal::new("b", true)]));
///
/// assert_eq!(cnf.to_string(), "(a) & (~a | b)");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Cnf {
    clauses: Vec<Clause>,
}

impl Cnf {
    /// Creates a new empty CNF.
    pub const fn new() -> Self {
        Self { clauses: Vec::new() }
    }

    /// Creates a CNF from the given clauses.
    pub fn from_clauses<I: IntoIterator<Item = Clause>>(clauses: I) -> Self {
        Self { clauses: clauses.into_iter().collect() }
    }

    /// Appends a clause to this CNF.
    pub fn add(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Appends all clauses of `other` to this CNF, in order.
    ///
    /// Takes `other` by value: after the merge its clauses belong exclusively
    /// to `self`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::datastructures::{Clause, Cnf};
    /// # use propcnf::formulas::Literal;
    /// let mut cnf = Cnf::from_clauses([Clause::from_literals([Literal::new("a", true)])]);
    /// let other = Cnf::from_clauses([Clause::from_literals([Literal::new("b", true)])]);
    ///
    /// cnf.merge(other);
    /// assert_eq!(cnf.len(), 2);
    /// ```
    pub fn merge(&mut self, other: Self) {
        self.clauses.extend(other.clauses);
    }

    /// Returns the number of clauses in this CNF.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns `true` if this CNF has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Returns the first clause, or `None` for an empty CNF.
    pub fn first(&self) -> Option<&Clause> {
        self.clauses.first()
    }

    /// Removes and returns the first clause of this CNF.
    ///
    /// This is an internal protocol operation of the Tseitin transformation:
    /// it strips the leading declaration clause of a recursively converted
    /// subformula. Calling it on an empty CNF is an internal inconsistency
    /// and panics.
    pub fn remove_first(&mut self) -> Clause {
        if self.clauses.is_empty() {
            panic_empty_cnf();
        }
        self.clauses.remove(0)
    }

    /// Returns the clauses of this CNF in insertion order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns an iterator over the clauses of this CNF.
    pub fn iter(&self) -> slice::Iter<'_, Clause> {
        self.clauses.iter()
    }

    /// Returns the set of all variable names occurring in this CNF,
    /// auxiliary variables included.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::formulas::Formula;
    /// let cnf = Formula::not(Formula::variable("p")).to_cnf();
    /// assert_eq!(cnf.variables().len(), 2); // "p" and one auxiliary variable
    /// ```
    pub fn variables(&self) -> BTreeSet<String> {
        self.clauses.iter().flatten().map(|lit| lit.variable().to_string()).collect()
    }

    /// Evaluates this CNF under the given assignment.
    ///
    /// A CNF is true iff all of its clauses are true; the empty CNF is true.
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        self.clauses.iter().all(|clause| clause.evaluate(assignment))
    }
}

impl<'a> IntoIterator for &'a Cnf {
    type Item = &'a Clause;
    type IntoIter = slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl Display for Cnf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.clauses.is_empty() {
            f.write_str("$true")
        } else {
            write!(f, "{}", self.clauses.iter().join(" & "))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::datastructures::{Assignment, Clause};
    use crate::formulas::Literal;

    use super::Cnf;

    fn unit(name: &str, phase: bool) -> Clause {
        Clause::from_literals([Literal::new(name, phase)])
    }

    #[test]
    fn test_construction_and_merge() {
        let mut cnf = Cnf::new();
        assert!(cnf.is_empty());
        cnf.add(unit("a", true));
        cnf.merge(Cnf::from_clauses([unit("b", true), unit("c", false)]));
        assert_eq!(cnf.len(), 3);
        assert_eq!(cnf.clauses()[1], unit("b", true));
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut cnf = Cnf::from_clauses([unit("a", true)]);
        cnf.merge(Cnf::from_clauses([unit("b", true)]));
        cnf.merge(Cnf::from_clauses([unit("c", true)]));
        let names: Vec<&str> = cnf.iter().map(|c| c.first().unwrap().variable()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_remove_first() {
        let mut cnf = Cnf::from_clauses([unit("a", true), unit("b", true)]);
        assert_eq!(cnf.remove_first(), unit("a", true));
        assert_eq!(cnf.len(), 1);
    }

    #[test]
    #[should_panic(expected = "empty CNF")]
    fn test_remove_first_on_empty_cnf_panics() {
        let _ = Cnf::new().remove_first();
    }

    #[test]
    fn test_variables() {
        let cnf = Cnf::from_clauses([
            Clause::from_literals([Literal::new("a", true), Literal::new("b", false)]),
            unit("a", false),
        ]);
        assert_eq!(cnf.variables().into_iter().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_evaluate() {
        let cnf = Cnf::from_clauses([
            Clause::from_literals([Literal::new("a", true), Literal::new("b", true)]),
            unit("c", false),
        ]);
        assert!(cnf.evaluate(&Assignment::from_names(&["a"], &["c"])));
        assert!(!cnf.evaluate(&Assignment::from_names(&["a", "c"], &[])));
        assert!(!cnf.evaluate(&Assignment::from_names(&[], &["a", "b", "c"])));
        assert!(Cnf::new().evaluate(&Assignment::from_names(&[], &[])));
    }

    #[test]
    fn test_to_string() {
        let cnf = Cnf::from_clauses([unit("a", true), Clause::from_literals([Literal::new("a", false), Literal::new("b", true)])]);
        assert_eq!(cnf.to_string(), "(a) & (~a | b)");
        assert_eq!(Cnf::new().to_string(), "$true");
    }
}
