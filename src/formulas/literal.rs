use std::fmt::{Display, Formatter};

/// Boolean literal.
///
/// A literal consists of a variable name and its phase (also sign or polarity
/// in the literature). Note that, the bool `phase` describes the value of the
/// literal. So `true` will yield a positive literal, and `false` a negated
/// literal.
///
/// Literals are the building blocks of [`Clause`](`crate::datastructures::Clause`)
/// and thereby of the CNFs produced by the Tseitin transformation. Two
/// literals are equal iff they have the same variable name and the same
/// phase.
#[derive(Hash, Eq, PartialEq, Clone, Debug, Ord, PartialOrd)]
pub enum Literal {
    /// Positive literal
    Pos(String),
    /// Negative literal
    Neg(String),
}

impl Literal {
    /// Creates a new `Literal` from a variable name and a `phase`. `phase`
    /// describes the value of the literal. So `true` will yield a positive
    /// literal, and `false` a negated literal.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::formulas::Literal;
    /// let literal1 = Literal::new("a", true); // "a"
    /// let literal2 = Literal::new("a", false); // "~a"
    /// ```
    pub fn new(variable: impl Into<String>, phase: bool) -> Self {
        if phase {
            Self::Pos(variable.into())
        } else {
            Self::Neg(variable.into())
        }
    }

    /// Returns the name of the variable of this literal.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::formulas::Literal;
    /// let literal = Literal::new("a", true);
    ///
    /// assert_eq!(literal.variable(), "a");
    /// ```
    pub fn variable(&self) -> &str {
        match self {
            Self::Pos(v) | Self::Neg(v) => v,
        }
    }

    /// Consumes this literal and returns the name of its variable.
    pub fn into_variable(self) -> String {
        match self {
            Self::Pos(v) | Self::Neg(v) => v,
        }
    }

    /// Returns the phase of this literal.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::formulas::Literal;
    /// let literal1 = Literal::new("a", true);
    /// let literal2 = Literal::new("a", false);
    ///
    /// assert_eq!(literal1.phase(), true);
    /// assert_eq!(literal2.phase(), false);
    /// ```
    pub const fn phase(&self) -> bool {
        match self {
            Self::Pos(_) => true,
            Self::Neg(_) => false,
        }
    }

    /// Returns a new literal with the phase inverted.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// # use propcnf::formulas::Literal;
    /// let literal1 = Literal::new("a", true);
    /// let literal2 = Literal::new("a", false);
    ///
    /// assert_eq!(literal1.negate(), literal2);
    /// ```
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Pos(v) => Self::Neg(v),
            Self::Neg(v) => Self::Pos(v),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", if self.phase() { "" } else { "~" }, self.variable())
    }
}

#[cfg(test)]
mod tests {
    use super::Literal;

    #[test]
    fn test_new() {
        assert_eq!(Literal::new("a", true), Literal::Pos("a".to_string()));
        assert_eq!(Literal::new("a", false), Literal::Neg("a".to_string()));
    }

    #[test]
    fn test_equality() {
        assert_eq!(Literal::new("a", true), Literal::new("a", true));
        assert_ne!(Literal::new("a", true), Literal::new("a", false));
        assert_ne!(Literal::new("a", true), Literal::new("b", true));
    }

    #[test]
    fn test_negate() {
        assert_eq!(Literal::new("a", true).negate(), Literal::new("a", false));
        assert_eq!(Literal::new("a", false).negate(), Literal::new("a", true));
        assert_eq!(Literal::new("a", true).negate().negate(), Literal::new("a", true));
    }

    #[test]
    fn test_to_string() {
        assert_eq!(Literal::new("a", true).to_string(), "a");
        assert_eq!(Literal::new("a", false).to_string(), "~a");
    }
}
