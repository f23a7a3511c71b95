/// Transformations of formulas into normal forms.
pub mod transformations;
