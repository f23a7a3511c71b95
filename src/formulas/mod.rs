mod aux_var;
mod formula;
mod literal;

pub use aux_var::*;
pub use formula::*;
pub use literal::*;
