use fastrand::Rng;

use crate::formulas::Formula;

/// A configuration for randomizing formulas.
///
/// The following things can be configured:
/// - the seed -- the same seed always yields the same sequence of formulas
/// - the variables -- this list of variables will be used. The probabilities
///   of being chosen are the same for all variables.
/// - weights for the formula variants, defining how often a variant is
///   generated compared to the other variants.
/// - maximum numbers of operands for conjunctions and disjunctions.
///
/// Note that the weights can only be applied for inner nodes of the generated
/// formula, since the leaves are **always** variables or negated variables.
/// So the effective weight of literals will be higher and the weights of all
/// other variants lower than configured.
#[derive(Clone, PartialEq, Debug)]
pub struct FormulaRandomizerConfig {
    pub(crate) seed: u64,
    pub(crate) variables: Vec<String>,
    pub(crate) weight_variable: f32,
    pub(crate) weight_negative_literal: f32,
    pub(crate) weight_or: f32,
    pub(crate) weight_and: f32,
    pub(crate) weight_not: f32,
    pub(crate) weight_impl: f32,
    pub(crate) weight_equiv: f32,
    pub(crate) maximum_operands_and: u32,
    pub(crate) maximum_operands_or: u32,
}

impl FormulaRandomizerConfig {
    /// Builds a basic configuration with the given variables and with default
    /// settings.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use propcnf::util::formula_randomizer::FormulaRandomizerConfig;
    /// let variables = vec![String::from("A"), String::from("B")];
    /// let config = FormulaRandomizerConfig::default_with_variables(variables);
    /// ```
    pub fn default_with_variables(variables: Vec<String>) -> Self {
        Self {
            seed: 42_u64,
            variables,
            weight_variable: 1.0,
            weight_negative_literal: 1.0,
            weight_or: 30.0,
            weight_and: 30.0,
            weight_not: 1.0,
            weight_impl: 1.0,
            weight_equiv: 1.0,
            maximum_operands_and: 5,
            maximum_operands_or: 5,
        }
    }

    /// Builds a basic configuration with default settings. Additionally, it
    /// generates `num_vars` variables and adds them to the configuration.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use propcnf::util::formula_randomizer::FormulaRandomizerConfig;
    /// let config = FormulaRandomizerConfig::default_with_num_vars(2);
    /// ```
    pub fn default_with_num_vars(num_vars: usize) -> Self {
        Self::default_with_variables((0..num_vars).map(|n| format!("v{n}")).collect())
    }

    /// Updates the seed, which will be used to generate pseudo-random values.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the relative weight of a variable/positive literal.
    #[must_use]
    pub const fn weight_variable(mut self, weight_variable: f32) -> Self {
        self.weight_variable = weight_variable;
        self
    }

    /// Sets the relative weight of a negative literal.
    #[must_use]
    pub const fn weight_negative_literal(mut self, weight_negative_literal: f32) -> Self {
        self.weight_negative_literal = weight_negative_literal;
        self
    }

    /// Sets the relative weight of a disjunction.
    #[must_use]
    pub const fn weight_or(mut self, weight_or: f32) -> Self {
        self.weight_or = weight_or;
        self
    }

    /// Sets the relative weight of a conjunction.
    #[must_use]
    pub const fn weight_and(mut self, weight_and: f32) -> Self {
        self.weight_and = weight_and;
        self
    }

    /// Sets the relative weight of a negation.
    #[must_use]
    pub const fn weight_not(mut self, weight_not: f32) -> Self {
        self.weight_not = weight_not;
        self
    }

    /// Sets the relative weight of an implication.
    #[must_use]
    pub const fn weight_impl(mut self, weight_impl: f32) -> Self {
        self.weight_impl = weight_impl;
        self
    }

    /// Sets the relative weight of an equivalence.
    #[must_use]
    pub const fn weight_equiv(mut self, weight_equiv: f32) -> Self {
        self.weight_equiv = weight_equiv;
        self
    }

    /// Sets the maximum number of operands in a conjunction.
    #[must_use]
    pub const fn maximum_operands_and(mut self, maximum_operands_and: u32) -> Self {
        self.maximum_operands_and = maximum_operands_and;
        self
    }

    /// Sets the maximum number of operands in a disjunction.
    #[must_use]
    pub const fn maximum_operands_or(mut self, maximum_operands_or: u32) -> Self {
        self.maximum_operands_or = maximum_operands_or;
        self
    }

    fn compute_formula_type_probabilities(&self) -> FormulaTypeProbabilities {
        let total = self.weight_variable
            + self.weight_negative_literal
            + self.weight_or
            + self.weight_and
            + self.weight_not
            + self.weight_impl
            + self.weight_equiv;
        let literal = (self.weight_variable + self.weight_negative_literal) / total;
        let or = literal + self.weight_or / total;
        let and = or + self.weight_and / total;
        let not = and + self.weight_not / total;
        let implication = not + self.weight_impl / total;
        let equivalence = implication + self.weight_equiv / total;
        let phase = self.weight_variable / (self.weight_variable + self.weight_negative_literal);
        FormulaTypeProbabilities { literal, or, and, not, implication, _equivalence: equivalence, phase }
    }
}

struct FormulaTypeProbabilities {
    literal: f32,
    or: f32,
    and: f32,
    not: f32,
    implication: f32,
    _equivalence: f32,
    phase: f32,
}

/// A generator for random formulas.
///
/// The formula variants included in the generated formulas can be configured
/// with a [`FormulaRandomizerConfig`].
pub struct FormulaRandomizer {
    config: FormulaRandomizerConfig,
    random: Rng,
    formula_probs: FormulaTypeProbabilities,
}

impl FormulaRandomizer {
    /// Builds a new `FormulaRandomizer` from a [`FormulaRandomizerConfig`].
    ///
    /// The configuration must hold at least one variable.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use propcnf::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// let config = FormulaRandomizerConfig::default_with_num_vars(5);
    /// let mut randomizer = FormulaRandomizer::new(config);
    /// ```
    pub fn new(config: FormulaRandomizerConfig) -> Self {
        assert!(!config.variables.is_empty(), "the randomizer configuration must hold at least one variable");
        let seed = config.seed;
        let formula_probs = config.compute_formula_type_probabilities();
        Self { config, random: Rng::with_seed(seed), formula_probs }
    }

    /// Returns a random variable.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use propcnf::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// let config = FormulaRandomizerConfig::default_with_variables(vec![String::from("A"), String::from("B")]);
    /// let mut randomizer = FormulaRandomizer::new(config);
    ///
    /// let variable = randomizer.variable(); // A or B
    /// ```
    pub fn variable(&mut self) -> Formula {
        let name = self.config.variables[self.random.usize(0..self.config.variables.len())].clone();
        Formula::variable(name)
    }

    /// Returns a random literal, i.e. a variable or a negated variable.
    ///
    /// The probability of whether it is positive or negative depends on the
    /// configuration.
    pub fn literal(&mut self) -> Formula {
        let phase = self.random.f32() < self.formula_probs.phase;
        let variable = self.variable();
        if phase {
            variable
        } else {
            Formula::not(variable)
        }
    }

    /// Returns a random negation with a given maximal depth.
    pub fn not(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.literal()
        } else {
            Formula::not(self.formula(max_depth - 1))
        }
    }

    /// Returns a random conjunction with a given maximal depth.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use propcnf::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// # let config = FormulaRandomizerConfig::default_with_num_vars(10);
    /// # let mut randomizer = FormulaRandomizer::new(config);
    /// let conjunction = randomizer.and(2);
    /// ```
    pub fn and(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.literal()
        } else {
            let num_operands = self.random.u32(2..self.config.maximum_operands_and);
            Formula::and((0..num_operands).map(|_| self.formula(max_depth - 1)))
        }
    }

    /// Returns a random disjunction with a given maximal depth.
    pub fn or(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.literal()
        } else {
            let num_operands = self.random.u32(2..self.config.maximum_operands_or);
            Formula::or((0..num_operands).map(|_| self.formula(max_depth - 1)))
        }
    }

    /// Returns a random implication with a given maximal depth.
    pub fn implication(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.literal()
        } else {
            Formula::implication(self.formula(max_depth - 1), self.formula(max_depth - 1))
        }
    }

    /// Returns a random equivalence with a given maximal depth.
    pub fn equivalence(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.literal()
        } else {
            Formula::equivalence(self.formula(max_depth - 1), self.formula(max_depth - 1))
        }
    }

    /// Returns a random formula with a given maximal depth.
    ///
    /// # Example
    ///
    /// Basic usage:
    /// ```
    /// # use propcnf::util::formula_randomizer::{FormulaRandomizerConfig, FormulaRandomizer};
    /// # let config = FormulaRandomizerConfig::default_with_num_vars(10);
    /// # let mut randomizer = FormulaRandomizer::new(config);
    /// let formula = randomizer.formula(3);
    /// ```
    pub fn formula(&mut self, max_depth: u32) -> Formula {
        if max_depth == 0 {
            self.literal()
        } else {
            let n = self.random.f32();
            if n < self.formula_probs.literal {
                self.literal()
            } else if n < self.formula_probs.or {
                self.or(max_depth)
            } else if n < self.formula_probs.and {
                self.and(max_depth)
            } else if n < self.formula_probs.not {
                self.not(max_depth)
            } else if n < self.formula_probs.implication {
                self.implication(max_depth)
            } else {
                self.equivalence(max_depth)
            }
        }
    }
}
