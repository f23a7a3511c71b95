use crate::datastructures::{Clause, Cnf};
use crate::formulas::{AuxVarProvider, Formula, Literal};

/// Transformation of a formula into an equisatisfiable CNF due to Tseitin.
///
/// The transformation introduces one fresh auxiliary variable per subformula
/// and emits, for every connective, the clauses tying the auxiliary variable
/// to the connective applied to the representatives of its operands. The
/// result is linear in the size of the input formula.
///
/// A `TseitinTransformation` owns its [`AuxVarProvider`], so auxiliary
/// variables stay pairwise distinct over all [`transform`](`Self::transform`)
/// calls on the same value. Use one value per group of formulas whose CNFs
/// are combined afterwards; use [`reset`](`Self::reset`) only between fully
/// independent conversions (e.g. in test harnesses expecting deterministic
/// names).
///
/// # Examples
///
/// Basic usage:
///
/// ```
/// # use propcnf::formulas::Formula;
/// # use propcnf::operations::transformations::TseitinTransformation;
/// let formula = Formula::and([Formula::variable("p"), Formula::variable("q")]);
///
/// let mut transformation = TseitinTransformation::new();
/// let cnf = transformation.transform(&formula);
///
/// assert_eq!(
///     cnf.to_string(),
///     "(@RESERVED_CNF_1) \
///      & (~@RESERVED_CNF_1 | p) \
///      & (~@RESERVED_CNF_1 | q) \
///      & (@RESERVED_CNF_1 | ~p | ~q)"
/// );
/// ```
#[derive(Debug, Default)]
pub struct TseitinTransformation {
    aux: AuxVarProvider,
}

impl TseitinTransformation {
    /// Creates a new transformation with a fresh auxiliary variable provider.
    pub const fn new() -> Self {
        Self { aux: AuxVarProvider::new() }
    }

    /// Transforms the given formula into an equisatisfiable CNF.
    ///
    /// The input tree is only read, never consumed. The first clause of the
    /// result is a positive unit clause naming the representative variable of
    /// `formula`; under any satisfying assignment of the result, the
    /// representative carries the truth value of `formula` under the
    /// corresponding assignment of the original variables.
    pub fn transform(&mut self, formula: &Formula) -> Cnf {
        tseitin_cnf(formula, &mut self.aux)
    }

    /// Resets the auxiliary variable provider to its initial state.
    ///
    /// After a reset, auxiliary names of earlier results will be reissued.
    pub fn reset(&mut self) {
        self.aux.reset();
    }
}

/// Recursively transforms `formula`, drawing auxiliary names from `aux`.
///
/// Protocol: the returned CNF starts with a positive unit clause declaring
/// the representative variable of `formula`; all following clauses define the
/// representatives of `formula` and its subformulas.
pub fn tseitin_cnf(formula: &Formula, aux: &mut AuxVarProvider) -> Cnf {
    match formula {
        // The original variable is its own representative, so the
        // declaration clause is the whole result.
        Formula::Variable(name) => Cnf::from_clauses([Clause::from_literals([Literal::Pos(name.clone())])]),
        Formula::Not(op) => not_cnf(op, aux),
        Formula::And(ops) => nary_cnf(ops, true, aux),
        Formula::Or(ops) => nary_cnf(ops, false, aux),
        Formula::Impl(ops) => impl_cnf(&ops[0], &ops[1], aux),
        Formula::Equiv(ops) => equiv_cnf(&ops[0], &ops[1], aux),
    }
}

/// Converts one operand, appends its defining clauses to `defs`, and returns
/// its representative variable.
///
/// The operand's declaration clause is stripped here: the parent re-binds the
/// representative with its own clauses instead of asserting it outright.
fn convert_operand(operand: &Formula, aux: &mut AuxVarProvider, defs: &mut Cnf) -> String {
    let mut cnf = tseitin_cnf(operand, aux);
    let representative = cnf.remove_first().remove_first().into_variable();
    defs.merge(cnf);
    representative
}

fn declaration(aux_var: &str) -> Clause {
    Clause::from_literals([Literal::Pos(aux_var.to_string())])
}

/// `a <-> ~b` as the two clauses `(~a | ~b)` and `(a | b)`.
fn not_cnf(operand: &Formula, aux: &mut AuxVarProvider) -> Cnf {
    let a = aux.next_variable();
    let mut cnf = Cnf::from_clauses([declaration(&a)]);
    let b = convert_operand(operand, aux, &mut cnf);
    cnf.add(Clause::from_literals([Literal::Neg(a.clone()), Literal::Neg(b.clone())]));
    cnf.add(Clause::from_literals([Literal::Pos(a), Literal::Pos(b)]));
    cnf
}

/// `a <-> (c1 & ... & cn)` or `a <-> (c1 | ... | cn)`.
///
/// For a conjunction: `(~a | ci)` per operand and one closing clause
/// `(a | ~c1 | ... | ~cn)`. For a disjunction the polarities flip:
/// `(a | ~ci)` per operand and `(~a | c1 | ... | cn)`. With zero operands
/// only the closing clause remains, which degenerates to the unit `(a)` for
/// the conjunction and `(~a)` for the disjunction, matching the vacuous
/// truth values.
fn nary_cnf(operands: &[Formula], conjunction: bool, aux: &mut AuxVarProvider) -> Cnf {
    let a = aux.next_variable();
    let mut cnf = Cnf::from_clauses([declaration(&a)]);
    let mut representatives = Vec::with_capacity(operands.len());
    for operand in operands {
        representatives.push(convert_operand(operand, aux, &mut cnf));
    }
    let mut closing = Clause::from_literals([Literal::new(a.clone(), conjunction)]);
    for rep in representatives {
        cnf.add(Clause::from_literals([Literal::new(a.clone(), !conjunction), Literal::new(rep.clone(), conjunction)]));
        closing.add(Literal::new(rep, !conjunction));
    }
    cnf.add(closing);
    cnf
}

/// `a <-> (le -> r)` as `(~a | ~le | r)`, `(le | a)`, and `(~r | a)`.
fn impl_cnf(left: &Formula, right: &Formula, aux: &mut AuxVarProvider) -> Cnf {
    let a = aux.next_variable();
    let mut cnf = Cnf::from_clauses([declaration(&a)]);
    let le = convert_operand(left, aux, &mut cnf);
    let r = convert_operand(right, aux, &mut cnf);
    cnf.add(Clause::from_literals([Literal::Neg(a.clone()), Literal::Neg(le.clone()), Literal::Pos(r.clone())]));
    cnf.add(Clause::from_literals([Literal::Pos(le), Literal::Pos(a.clone())]));
    cnf.add(Clause::from_literals([Literal::Neg(r), Literal::Pos(a)]));
    cnf
}

/// `a <-> (le <-> r)` as the four standard biconditional clauses.
fn equiv_cnf(left: &Formula, right: &Formula, aux: &mut AuxVarProvider) -> Cnf {
    let a = aux.next_variable();
    let mut cnf = Cnf::from_clauses([declaration(&a)]);
    let le = convert_operand(left, aux, &mut cnf);
    let r = convert_operand(right, aux, &mut cnf);
    cnf.add(Clause::from_literals([Literal::Neg(a.clone()), Literal::Neg(le.clone()), Literal::Pos(r.clone())]));
    cnf.add(Clause::from_literals([Literal::Neg(a.clone()), Literal::Pos(le.clone()), Literal::Neg(r.clone())]));
    cnf.add(Clause::from_literals([Literal::Pos(a.clone()), Literal::Neg(le.clone()), Literal::Neg(r.clone())]));
    cnf.add(Clause::from_literals([Literal::Pos(a), Literal::Pos(le), Literal::Pos(r)]));
    cnf
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::formulas::{AuxVarProvider, Formula, AUX_CNF_PREFIX};
    use crate::util::test_util::F;

    use super::{tseitin_cnf, TseitinTransformation};

    #[test]
    fn test_variable() {
        let cnf = Formula::variable("p").to_cnf();
        assert_eq!(cnf.to_string(), "(p)");
    }

    #[test]
    fn test_not() {
        let cnf = Formula::not(Formula::variable("p")).to_cnf();
        assert_eq!(cnf.to_string(), "(@RESERVED_CNF_1) & (~@RESERVED_CNF_1 | ~p) & (@RESERVED_CNF_1 | p)");
    }

    #[test]
    fn test_and() {
        let f = F::new();
        let cnf = f.and1.to_cnf();
        assert_eq!(
            cnf.to_string(),
            "(@RESERVED_CNF_1) \
             & (~@RESERVED_CNF_1 | a) \
             & (~@RESERVED_CNF_1 | b) \
             & (@RESERVED_CNF_1 | ~a | ~b)"
        );
    }

    #[test]
    fn test_or() {
        let f = F::new();
        let cnf = f.or1.to_cnf();
        assert_eq!(
            cnf.to_string(),
            "(@RESERVED_CNF_1) \
             & (@RESERVED_CNF_1 | ~x) \
             & (@RESERVED_CNF_1 | ~y) \
             & (~@RESERVED_CNF_1 | x | y)"
        );
    }

    #[test]
    fn test_impl() {
        let f = F::new();
        let cnf = f.imp1.to_cnf();
        assert_eq!(
            cnf.to_string(),
            "(@RESERVED_CNF_1) \
             & (~@RESERVED_CNF_1 | ~a | b) \
             & (a | @RESERVED_CNF_1) \
             & (~b | @RESERVED_CNF_1)"
        );
    }

    #[test]
    fn test_equiv() {
        let f = F::new();
        let cnf = f.eq1.to_cnf();
        assert_eq!(
            cnf.to_string(),
            "(@RESERVED_CNF_1) \
             & (~@RESERVED_CNF_1 | ~a | b) \
             & (~@RESERVED_CNF_1 | a | ~b) \
             & (@RESERVED_CNF_1 | ~a | ~b) \
             & (@RESERVED_CNF_1 | a | b)"
        );
    }

    #[test]
    fn test_nested_defining_clauses_come_before_binders() {
        // or(p, and(q, r)): the conjunction's definition is retained between
        // the declaration and the disjunction's binder clauses.
        let formula = Formula::or([
            Formula::variable("p"),
            Formula::and([Formula::variable("q"), Formula::variable("r")]),
        ]);
        let cnf = formula.to_cnf();
        assert_eq!(
            cnf.to_string(),
            "(@RESERVED_CNF_1) \
             & (~@RESERVED_CNF_2 | q) \
             & (~@RESERVED_CNF_2 | r) \
             & (@RESERVED_CNF_2 | ~q | ~r) \
             & (@RESERVED_CNF_1 | ~p) \
             & (@RESERVED_CNF_1 | ~@RESERVED_CNF_2) \
             & (~@RESERVED_CNF_1 | p | @RESERVED_CNF_2)"
        );
    }

    #[test]
    fn test_vacuous_and() {
        let cnf = Formula::and([]).to_cnf();
        // the closing clause degenerates to a second declaration
        assert_eq!(cnf.to_string(), "(@RESERVED_CNF_1) & (@RESERVED_CNF_1)");
    }

    #[test]
    fn test_vacuous_or() {
        let cnf = Formula::or([]).to_cnf();
        assert_eq!(cnf.to_string(), "(@RESERVED_CNF_1) & (~@RESERVED_CNF_1)");
    }

    #[test]
    fn test_declaration_invariant() {
        let f = F::new();
        for formula in [&f.a, &f.na, &f.and1, &f.or1, &f.imp1, &f.eq1, &f.not1, &f.nested] {
            let cnf = formula.to_cnf();
            let first = cnf.first().expect("conversion always yields at least one clause");
            assert!(first.is_unit(), "first clause of {formula} is not unit");
            assert!(first.first().expect("unit clause").phase(), "declaration of {formula} is not positive");
        }
    }

    #[test]
    fn test_aux_names_disjoint_across_transform_calls() {
        let f = F::new();
        let mut transformation = TseitinTransformation::new();
        let cnf1 = transformation.transform(&f.not1);
        let cnf2 = transformation.transform(&f.nested);
        let aux1: BTreeSet<String> = cnf1.variables().into_iter().filter(|v| v.starts_with(AUX_CNF_PREFIX)).collect();
        let aux2: BTreeSet<String> = cnf2.variables().into_iter().filter(|v| v.starts_with(AUX_CNF_PREFIX)).collect();
        assert!(!aux1.is_empty() && !aux2.is_empty());
        assert!(aux1.is_disjoint(&aux2));
    }

    #[test]
    fn test_reset_reissues_names() {
        let f = F::new();
        let mut transformation = TseitinTransformation::new();
        let cnf1 = transformation.transform(&f.eq1);
        transformation.reset();
        let cnf2 = transformation.transform(&f.eq1);
        assert_eq!(cnf1, cnf2);
    }

    #[test]
    fn test_input_tree_stays_usable() {
        let f = F::new();
        let before = f.nested.to_string();
        let mut aux = AuxVarProvider::new();
        let _ = tseitin_cnf(&f.nested, &mut aux);
        let _ = tseitin_cnf(&f.nested, &mut aux);
        assert_eq!(f.nested.to_string(), before);
        assert_eq!(f.nested, f.nested.clone());
    }

    #[test]
    fn test_one_aux_variable_per_composite_subformula() {
        let f = F::new();
        // nested = -((a&b)<->(x|y)) has four composite nodes
        let cnf = f.nested.to_cnf();
        let aux_count = cnf.variables().iter().filter(|v| v.starts_with(AUX_CNF_PREFIX)).count();
        assert_eq!(aux_count, 4);
    }
}
