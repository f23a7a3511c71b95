/// Prefix of all auxiliary variables introduced during CNF transformation.
///
/// The `@` makes the names invalid identifiers in the usual textual formula
/// syntaxes, so they cannot collide with user-chosen variable names. This is
/// an external contract: callers must not hand-build variables matching this
/// pattern.
pub const AUX_CNF_PREFIX: &str = "@RESERVED_CNF_";

/// A provider for fresh auxiliary variable names.
///
/// Every call to [`next_variable`](`Self::next_variable`) returns a name this
/// provider has never returned before. The Tseitin transformation draws one
/// such name per subformula, so a single provider must be used for all
/// conversions whose results are combined afterwards.
///
/// There is deliberately no global provider. Callers own one, typically
/// through a [`TseitinTransformation`], and keep it alive as long as
/// disjointness of auxiliary names is required.
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use propcnf::formulas::AuxVarProvider;
/// let mut provider = AuxVarProvider::new();
///
/// assert_eq!(provider.next_variable(), "@RESERVED_CNF_1");
/// assert_eq!(provider.next_variable(), "@RESERVED_CNF_2");
/// ```
///
/// [`TseitinTransformation`]: crate::operations::transformations::TseitinTransformation
#[derive(Debug, Default, Eq, PartialEq)]
pub struct AuxVarProvider {
    counter: u64,
}

impl AuxVarProvider {
    /// Creates a new provider starting at `@RESERVED_CNF_1`.
    pub const fn new() -> Self {
        Self { counter: 0 }
    }

    /// Returns a fresh auxiliary variable name.
    ///
    /// The counter is monotonically increasing, so no name is ever returned
    /// twice by the same provider.
    pub fn next_variable(&mut self) -> String {
        self.counter += 1;
        format!("{AUX_CNF_PREFIX}{}", self.counter)
    }

    /// Resets the counter to its initial state.
    ///
    /// Intended for test harnesses which need deterministic expected output
    /// for independent conversions. Resetting between conversions whose
    /// results are later combined breaks the uniqueness guarantee.
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}
