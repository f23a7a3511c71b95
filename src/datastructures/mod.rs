mod assignment;
mod clause;
mod cnf;

pub use assignment::*;
pub use clause::*;
pub use cnf::*;
