#![allow(dead_code)]
#![allow(missing_docs)]

use std::collections::BTreeSet;

use crate::formulas::Formula;

/// Splits a space-separated list of names into a set.
pub fn vars_set(elements: &str) -> BTreeSet<String> {
    elements.split(' ').map(ToString::to_string).collect()
}

/// A collection of formulas used throughout the tests.
pub struct F {
    pub a: Formula,
    pub b: Formula,
    pub x: Formula,
    pub y: Formula,
    pub na: Formula,

    pub and1: Formula,
    pub or1: Formula,
    pub imp1: Formula,
    pub eq1: Formula,
    pub not1: Formula,
    pub nested: Formula,
}

impl F {
    pub fn new() -> Self {
        let a = Formula::variable("a");
        let b = Formula::variable("b");
        let x = Formula::variable("x");
        let y = Formula::variable("y");
        let na = Formula::not(a.clone());

        let and1 = Formula::and([a.clone(), b.clone()]);
        let or1 = Formula::or([x.clone(), y.clone()]);
        let imp1 = Formula::implication(a.clone(), b.clone());
        let eq1 = Formula::equivalence(a.clone(), b.clone());
        let not1 = Formula::not(and1.clone());
        let nested = Formula::not(Formula::equivalence(and1.clone(), or1.clone()));

        Self { a, b, x, y, na, and1, or1, imp1, eq1, not1, nested }
    }
}
