pub mod firstfollow;
mod symbol;

pub use symbol::{nt, t, GrammarId, Symbol};

use crate::errors::{Error, Result};
use std::collections::{HashMap, HashSet};

/// A context-free grammar production. An empty body is an ϵ-production.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production<T, N> {
    pub head: N,
    pub body: Vec<Symbol<T, N>>,
}

impl<T, N> Production<T, N> {
    /// Returns true if this is an ϵ-production
    pub fn is_e(&self) -> bool {
        self.body.is_empty()
    }
}

/// A context-free grammar over token classes `T` and non-terminals `N`
#[derive(Debug, Clone)]
pub struct Grammar<T, N> {
    start: N,
    end: T,
    productions: Vec<Production<T, N>>,
    nt_productions: HashMap<N, Vec<usize>>,
    non_terminals: Vec<N>,
    anonymous: HashSet<N>,
}

impl<T: GrammarId, N: GrammarId> Grammar<T, N> {
    /// Creates an empty grammar with the given start symbol and end-of-input
    /// token class
    pub fn new(start: N, end: T) -> Grammar<T, N> {
        Grammar {
            start,
            end,
            productions: Vec::new(),
            nt_productions: HashMap::new(),
            non_terminals: vec![start],
            anonymous: HashSet::new(),
        }
    }

    /// Adds a production `head → body`
    pub fn rule<I>(&mut self, head: N, body: I) -> &mut Self
    where
        I: IntoIterator<Item = Symbol<T, N>>,
    {
        let body: Vec<_> = body.into_iter().collect();

        self.note_non_terminal(head);
        for symbol in &body {
            if let Symbol::NonTerminal(n) = symbol {
                self.note_non_terminal(*n);
            }
        }

        self.nt_productions
            .entry(head)
            .or_default()
            .push(self.productions.len());
        self.productions.push(Production { head, body });

        self
    }

    /// Marks a non-terminal as an anonymous helper, whose expansions are not
    /// reported to visitors
    pub fn anonymous(&mut self, non_terminal: N) -> &mut Self {
        self.note_non_terminal(non_terminal);
        self.anonymous.insert(non_terminal);
        self
    }

    fn note_non_terminal(&mut self, n: N) {
        if !self.non_terminals.contains(&n) {
            self.non_terminals.push(n);
        }
    }

    /// Returns the start symbol
    pub fn start(&self) -> N {
        self.start
    }

    /// Returns the end-of-input token class
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns the production with the given ID
    pub fn production(&self, i: usize) -> &Production<T, N> {
        &self.productions[i]
    }

    /// Returns all productions, in the order they were added
    pub fn productions(&self) -> &[Production<T, N>] {
        &self.productions
    }

    /// Returns the number of productions in the grammar
    pub fn num_productions(&self) -> usize {
        self.productions.len()
    }

    /// Returns every non-terminal mentioned by the grammar, start symbol first,
    /// then in order of first appearance
    pub fn non_terminals(&self) -> &[N] {
        &self.non_terminals
    }

    /// Returns the IDs of all productions for the given non-terminal
    pub fn productions_for_non_terminal(&self, n: N) -> &[usize] {
        self.nt_productions
            .get(&n)
            .map(|p| p.as_slice())
            .unwrap_or_default()
    }

    /// Returns true if the non-terminal was marked anonymous
    pub fn is_anonymous(&self, n: N) -> bool {
        self.anonymous.contains(&n)
    }

    /// Returns the set of anonymous non-terminals
    pub fn anonymous_non_terminals(&self) -> &HashSet<N> {
        &self.anonymous
    }

    /// Checks that every non-terminal mentioned has at least one production
    pub fn validate(&self) -> Result<()> {
        for n in &self.non_terminals {
            if self.productions_for_non_terminal(*n).is_empty() {
                return Err(Error::NonTerminalNoProductions(format!("{:?}", n)));
            }
        }

        Ok(())
    }
}
