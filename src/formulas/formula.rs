use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::slice;

use itertools::Itertools;

use crate::datastructures::{Assignment, Cnf};
use crate::operations::transformations::TseitinTransformation;

/// A propositional formula, represented as a tree.
///
/// `Formula` is a closed sum type with six variants: variables as leaves,
/// negations with exactly one operand, n-ary conjunctions and disjunctions
/// (including the vacuous cases with zero operands), and binary implications
/// and equivalences.
///
/// Formulas are immutable values: all operations only read the tree. Equality
/// is structural and variant-sensitive, so `And([a])` is *not* equal to `a`
/// even though both are semantically equivalent.
///
/// Trees are built with the constructor functions [`variable`](`Self::variable`),
/// [`not`](`Self::not`), [`and`](`Self::and`), [`or`](`Self::or`),
/// [`implication`](`Self::implication`), and [`equivalence`](`Self::equivalence`).
/// Binary variants store their operands as a boxed pair, so a malformed arity
/// cannot be constructed in the first place.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use propcnf::formulas::Formula;
/// let formula = Formula::implication(
///     Formula::variable("p"),
///     Formula::not(Formula::variable("q")),
/// );
///
/// assert_eq!(formula.to_string(), "(p->-q)");
/// assert_eq!(formula.subf().len(), 2);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Formula {
    /// A propositional variable with a non-empty name.
    Variable(String),
    /// The negation of a formula.
    Not(Box<Formula>),
    /// An n-ary conjunction, `n >= 0`. An empty conjunction is true.
    And(Vec<Formula>),
    /// An n-ary disjunction, `n >= 0`. An empty disjunction is false.
    Or(Vec<Formula>),
    /// An implication with exactly two operands (premise, conclusion).
    Impl(Box<[Formula; 2]>),
    /// An equivalence with exactly two operands.
    Equiv(Box<[Formula; 2]>),
}

impl Formula {
    /// Creates a variable leaf.
    ///
    /// The name must be non-empty and must not match the auxiliary naming
    /// pattern of [`AuxVarProvider`](`crate::formulas::AuxVarProvider`).
    /// An empty name is a programming error and panics at construction time.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::formulas::Formula;
    /// let p = Formula::variable("p");
    /// assert_eq!(p.to_string(), "p");
    /// ```
    pub fn variable(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "variable names must be non-empty");
        Self::Variable(name)
    }

    /// Creates the negation of `operand`.
    pub fn not(operand: Self) -> Self {
        Self::Not(Box::new(operand))
    }

    /// Creates the conjunction of `operands`.
    ///
    /// No simplification takes place: `and([])` and `and([p])` are valid
    /// formulas distinct from the constant true and from `p`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::formulas::Formula;
    /// let formula = Formula::and([Formula::variable("p"), Formula::variable("q")]);
    /// assert_eq!(formula.to_string(), "(p&q)");
    /// ```
    pub fn and<I: IntoIterator<Item = Self>>(operands: I) -> Self {
        Self::And(operands.into_iter().collect())
    }

    /// Creates the disjunction of `operands`.
    ///
    /// No simplification takes place, as for [`and`](`Self::and`).
    pub fn or<I: IntoIterator<Item = Self>>(operands: I) -> Self {
        Self::Or(operands.into_iter().collect())
    }

    /// Creates the implication `left -> right`.
    pub fn implication(left: Self, right: Self) -> Self {
        Self::Impl(Box::new([left, right]))
    }

    /// Creates the equivalence `left <-> right`.
    pub fn equivalence(left: Self, right: Self) -> Self {
        Self::Equiv(Box::new([left, right]))
    }

    /// Returns the immediate subformulas in order.
    ///
    /// Empty for variables, one element for negations, two for implications
    /// and equivalences, and the operand list for conjunctions and
    /// disjunctions.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::formulas::Formula;
    /// let p = Formula::variable("p");
    /// let q = Formula::variable("q");
    /// let formula = Formula::equivalence(p.clone(), q.clone());
    ///
    /// assert_eq!(formula.subf(), &[p, q]);
    /// ```
    pub fn subf(&self) -> &[Self] {
        match self {
            Self::Variable(_) => &[],
            Self::Not(op) => slice::from_ref(&**op),
            Self::And(ops) | Self::Or(ops) => ops,
            Self::Impl(ops) | Self::Equiv(ops) => &ops[..],
        }
    }

    /// Returns the set of all variable names occurring in this formula.
    ///
    /// Polarity and nesting depth are irrelevant; duplicates collapse.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::formulas::Formula;
    /// let formula = Formula::and([
    ///     Formula::variable("p"),
    ///     Formula::not(Formula::variable("q")),
    ///     Formula::variable("p"),
    /// ]);
    ///
    /// let vars = formula.vars();
    /// assert_eq!(vars.len(), 2);
    /// assert!(vars.contains("p") && vars.contains("q"));
    /// ```
    pub fn vars(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        self.collect_vars(&mut vars);
        vars
    }

    fn collect_vars(&self, vars: &mut BTreeSet<String>) {
        if let Self::Variable(name) = self {
            vars.insert(name.clone());
        } else {
            for op in self.subf() {
                op.collect_vars(vars);
            }
        }
    }

    /// Evaluates this formula under the given assignment.
    ///
    /// Variables not present in the assignment evaluate to `false`.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::datastructures::Assignment;
    /// # use propcnf::formulas::Formula;
    /// let formula = Formula::implication(Formula::variable("p"), Formula::variable("q"));
    ///
    /// assert!(formula.evaluate(&Assignment::from_names(&["p", "q"], &[])));
    /// assert!(!formula.evaluate(&Assignment::from_names(&["p"], &["q"])));
    /// assert!(formula.evaluate(&Assignment::from_names(&[], &["p"])));
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        match self {
            Self::Variable(name) => assignment.value(name),
            Self::Not(op) => !op.evaluate(assignment),
            Self::And(ops) => ops.iter().all(|op| op.evaluate(assignment)),
            Self::Or(ops) => ops.iter().any(|op| op.evaluate(assignment)),
            Self::Impl(ops) => !ops[0].evaluate(assignment) || ops[1].evaluate(assignment),
            Self::Equiv(ops) => ops[0].evaluate(assignment) == ops[1].evaluate(assignment),
        }
    }

    /// Transforms this formula into an equisatisfiable CNF due to Tseitin.
    ///
    /// This is a convenience for one-shot conversions; it owns a fresh
    /// auxiliary variable provider per call, so two calls may reuse auxiliary
    /// names. Use a [`TseitinTransformation`] directly when several results
    /// must be combined.
    ///
    /// The first clause of the result is always a positive unit clause naming
    /// the representative variable of this formula; the remaining clauses
    /// define the representatives of all subformulas.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::formulas::Formula;
    /// let formula = Formula::not(Formula::variable("p"));
    /// let cnf = formula.to_cnf();
    ///
    /// assert_eq!(cnf.to_string(), "(@RESERVED_CNF_1) & (~@RESERVED_CNF_1 | ~p) & (@RESERVED_CNF_1 | p)");
    /// ```
    pub fn to_cnf(&self) -> Cnf {
        TseitinTransformation::new().transform(self)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(name) => f.write_str(name),
            Self::Not(op) => write!(f, "-{op}"),
            Self::And(ops) => nary_fmt(f, ops, "&"),
            Self::Or(ops) => nary_fmt(f, ops, "|"),
            Self::Impl(ops) => nary_fmt(f, &ops[..], "->"),
            Self::Equiv(ops) => nary_fmt(f, &ops[..], "<->"),
        }
    }
}

fn nary_fmt(f: &mut Formatter<'_>, operands: &[Formula], connector: &str) -> std::fmt::Result {
    write!(f, "({})", operands.iter().join(connector))
}
