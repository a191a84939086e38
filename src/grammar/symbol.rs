use std::fmt;
use std::hash::Hash;

/// Bounds shared by token classes and non-terminal identifiers. Grammar
/// identifiers are small opaque values: plain integers or fieldless enums.
pub trait GrammarId: Copy + Eq + Hash + fmt::Debug {}

impl<X> GrammarId for X where X: Copy + Eq + Hash + fmt::Debug {}

/// A symbol in the body of a production
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol<T, N> {
    Terminal(T),
    NonTerminal(N),
}

impl<T, N> fmt::Display for Symbol<T, N>
where
    T: fmt::Display,
    N: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Terminal(t) => write!(f, "{}", t),
            Symbol::NonTerminal(n) => write!(f, "{}", n),
        }
    }
}

/// Shorthand for `Symbol::Terminal`
pub fn t<T, N>(terminal: T) -> Symbol<T, N> {
    Symbol::Terminal(terminal)
}

/// Shorthand for `Symbol::NonTerminal`
pub fn nt<T, N>(non_terminal: N) -> Symbol<T, N> {
    Symbol::NonTerminal(non_terminal)
}
