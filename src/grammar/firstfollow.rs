use super::{Grammar, GrammarId, Production, Symbol};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
/// An item in a FIRST set
pub enum FirstItem<T> {
    Terminal(T),
    Empty,
}

/// Builds FIRST and FOLLOW sets for a context-free grammar
pub struct Builder<'b, T, N> {
    pub firsts: HashMap<N, HashSet<FirstItem<T>>>,
    pub follows: HashMap<N, HashSet<T>>,
    grammar: &'b Grammar<T, N>,
}

impl<'b, T: GrammarId, N: GrammarId> Builder<'b, T, N> {
    /// Returns a new builder with FIRST and FOLLOW calculated for every
    /// non-terminal of the grammar
    pub fn new(grammar: &'b Grammar<T, N>) -> Builder<'b, T, N> {
        let mut b = Builder {
            firsts: HashMap::new(),
            follows: HashMap::new(),
            grammar,
        };

        for n in grammar.non_terminals() {
            b.firsts.insert(*n, HashSet::new());
            b.follows.insert(*n, HashSet::new());
        }

        b.calculate_firsts();
        b.calculate_follows();

        b
    }

    /// Calculates FIRST(non_terminal) for all non-terminals
    fn calculate_firsts(&mut self) {
        // This algorithm is adapted from Aho et al (2007) p.221

        // Productions refer to other non-terminals and to themselves, so keep
        // iterating until no FIRST set grows
        let grammar = self.grammar;
        let mut count = 0;
        loop {
            for production in grammar.productions() {
                self.first_production(production);
            }

            let this_count = self.firsts.values().map(|s| s.len()).sum();
            if this_count == count {
                break;
            }

            count = this_count;
        }
    }

    /// Updates FIRST(head) with elements of FIRST(body)
    fn first_production(&mut self, production: &Production<T, N>) {
        for symbol in &production.body {
            // Once a symbol cannot derive ϵ, later symbols cannot contribute
            if !self.first_symbol(production.head, symbol) {
                return;
            }
        }

        // Every symbol of the body derives ϵ, or the body is empty
        self.set_mut(production.head).insert(FirstItem::Empty);
    }

    /// Updates FIRST(non_terminal) with non-ϵ elements of FIRST(symbol).
    /// Returns true if FIRST(symbol) contains ϵ.
    fn first_symbol(&mut self, non_terminal: N, symbol: &Symbol<T, N>) -> bool {
        let mut additions: HashSet<FirstItem<T>> = HashSet::new();
        let mut has_empty = false;

        match symbol {
            Symbol::Terminal(t) => {
                additions.insert(FirstItem::Terminal(*t));
            }
            Symbol::NonTerminal(n) => {
                for item in self.first(*n) {
                    match item {
                        FirstItem::Empty => has_empty = true,
                        FirstItem::Terminal(_) => {
                            additions.insert(*item);
                        }
                    }
                }
            }
        }

        self.set_mut(non_terminal).extend(additions);

        has_empty
    }

    /// Returns FIRST(non_terminal)
    pub fn first(&self, non_terminal: N) -> impl Iterator<Item = &FirstItem<T>> {
        self.firsts.get(&non_terminal).into_iter().flatten()
    }

    /// Returns FOLLOW(non_terminal)
    pub fn follow(&self, non_terminal: N) -> impl Iterator<Item = &T> {
        self.follows.get(&non_terminal).into_iter().flatten()
    }

    /// Returns FIRST(symbols) excluding ϵ, and whether the whole string can
    /// derive ϵ. The empty string derives ϵ.
    pub fn first_string(&self, symbols: &[Symbol<T, N>]) -> (HashSet<T>, bool) {
        let mut set: HashSet<T> = HashSet::new();

        for symbol in symbols {
            match symbol {
                Symbol::Terminal(t) => {
                    set.insert(*t);
                    return (set, false);
                }
                Symbol::NonTerminal(n) => {
                    let mut has_empty = false;
                    for item in self.first(*n) {
                        match item {
                            FirstItem::Terminal(t) => {
                                set.insert(*t);
                            }
                            FirstItem::Empty => has_empty = true,
                        }
                    }

                    if !has_empty {
                        return (set, false);
                    }
                }
            }
        }

        (set, true)
    }

    /// Calculates FOLLOW sets for all non-terminals
    fn calculate_follows(&mut self) {
        // This algorithm is adapted from Aho et al (2007) p.221-222

        self.follows
            .entry(self.grammar.start())
            .or_default()
            .insert(self.grammar.end());

        let grammar = self.grammar;
        let mut count = 1;
        loop {
            for production in grammar.productions() {
                self.follow_production(production);
            }

            let this_count = self.follows.values().map(|s| s.len()).sum();
            if this_count == count {
                break;
            }

            count = this_count;
        }
    }

    /// Updates FOLLOW sets from a given production
    fn follow_production(&mut self, production: &Production<T, N>) {
        // For A → 𝛼B𝛽, everything in FIRST(𝛽) except ϵ is in FOLLOW(B), and
        // if 𝛽 derives ϵ (including 𝛽 empty) FOLLOW(A) is in FOLLOW(B) too
        for (i, symbol) in production.body.iter().enumerate() {
            let Symbol::NonTerminal(b) = *symbol else {
                continue;
            };

            let (first_rest, contains_e) = self.first_string(&production.body[(i + 1)..]);
            let mut additions = first_rest;

            if contains_e && b != production.head {
                additions.extend(self.follow(production.head).copied());
            }

            self.follows.entry(b).or_default().extend(additions);
        }
    }

    fn set_mut(&mut self, non_terminal: N) -> &mut HashSet<FirstItem<T>> {
        self.firsts.entry(non_terminal).or_default()
    }
}
