use crate::grammar::Symbol;

/// Selects the production a non-terminal expands to under a given lookahead.
///
/// An oracle must be referentially transparent: the same arguments always
/// select the same production. It is never mutated by a parse, so one oracle
/// can be shared read-only by any number of parsers.
pub trait Oracle<T, N> {
    /// Returns the body of the production for `non_terminal` when the next
    /// token has class `lookahead`, or `None` if there is no such production
    fn select(&self, non_terminal: N, lookahead: T) -> Option<&[Symbol<T, N>]>;

    /// Returns true if expansions of `non_terminal` are helpers that visitors
    /// should not be told about
    fn is_anonymous(&self, _non_terminal: N) -> bool {
        false
    }
}

/// A function over static production bodies is an oracle, which covers
/// tables baked into generated code
impl<T, N, F> Oracle<T, N> for F
where
    T: 'static,
    N: 'static,
    F: Fn(N, T) -> Option<&'static [Symbol<T, N>]>,
{
    fn select(&self, non_terminal: N, lookahead: T) -> Option<&[Symbol<T, N>]> {
        self(non_terminal, lookahead)
    }
}
