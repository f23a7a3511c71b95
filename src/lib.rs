#![doc = include_str!("../README.md")]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

/// Assignments, clauses, and CNFs.
pub mod datastructures;
/// Types and datastructures to represent propositional formulas.
pub mod formulas;
/// Transformations for formulas.
pub mod operations;
/// Additional utility.
pub mod util;
