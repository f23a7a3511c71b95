use std::fmt::{Display, Formatter};
use std::slice;

use itertools::Itertools;

use crate::datastructures::Assignment;
use crate::formulas::Literal;
use crate::util::exceptions::panic_empty_clause;

/// A disjunction of [`Literal`]s.
///
/// A clause is append-only during construction. The order of literals is kept
/// for rendering, but has no semantic meaning. A clause with exactly one
/// literal is a *unit clause*; the Tseitin transformation relies on the first
/// clause of every intermediate CNF being a unit clause declaring the
/// representative variable.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use propcnf::datastructures::Clause;
/// # use propcnf::formulas::Literal;
/// let mut clause = Clause::new();
/// clause.add(Literal::new("a", true));
/// clause.add(Literal::new("b", false));
///
/// assert_eq!(clause.to_string(), "(a | ~b)");
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Creates a new empty clause.
    pub const fn new() -> Self {
        Self { literals: Vec::new() }
    }

    /// Creates a clause from the given literals.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::datastructures::Clause;
    /// # use propcnf::formulas::Literal;
    /// let clause = Clause::from_literals([Literal::new("a", true), Literal::new("b", true)]);
    /// assert_eq!(clause.len(), 2);
    /// ```
    pub fn from_literals<I: IntoIterator<Item = Literal>>(literals: I) -> Self {
        Self { literals: literals.into_iter().collect() }
    }

    /// Appends a literal to this clause.
    pub fn add(&mut self, literal: Literal) {
        self.literals.push(literal);
    }

    /// Returns the number of literals in this clause.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Returns `true` if this clause has no literals.
    ///
    /// An empty clause is unsatisfiable.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Returns `true` if this clause contains exactly one literal.
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// Returns the first literal, or `None` for an empty clause.
    pub fn first(&self) -> Option<&Literal> {
        self.literals.first()
    }

    /// Removes and returns the first literal of this clause.
    ///
    /// This is an internal protocol operation of the Tseitin transformation,
    /// used exactly once per recursive call on a clause known to be a unit
    /// clause. Calling it on an empty clause is an internal inconsistency and
    /// panics.
    pub fn remove_first(&mut self) -> Literal {
        if self.literals.is_empty() {
            panic_empty_clause();
        }
        self.literals.remove(0)
    }

    /// Returns the literals of this clause in construction order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Returns an iterator over the literals of this clause.
    pub fn iter(&self) -> slice::Iter<'_, Literal> {
        self.literals.iter()
    }

    /// Evaluates this clause under the given assignment.
    ///
    /// A clause is true iff at least one of its literals is true; the empty
    /// clause is false.
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        self.literals.iter().any(|lit| assignment.evaluate_lit(lit))
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Literal;
    type IntoIter = slice::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.literals.iter()
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.literals.iter().join(" | "))
    }
}
