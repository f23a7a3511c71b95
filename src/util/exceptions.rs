/// Signals that the Tseitin protocol tried to strip the declaration clause
/// from an empty CNF. Every recursively converted subformula must produce at
/// least its declaration clause, so reaching this is an internal
/// inconsistency in the transformation.
pub fn panic_empty_cnf() -> ! {
    panic!("cannot remove the leading clause of an empty CNF");
}

/// Signals that the Tseitin protocol tried to extract the representative
/// literal from an empty clause. The leading clause of a converted subformula
/// must be a unit clause, so reaching this is an internal inconsistency in
/// the transformation.
pub fn panic_empty_clause() -> ! {
    panic!("cannot remove the leading literal of an empty clause");
}
