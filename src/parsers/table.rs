use super::oracle::Oracle;
use crate::errors::{Error, Result};
use crate::grammar::firstfollow::Builder;
use crate::grammar::{Grammar, GrammarId, Symbol};
use std::collections::{HashMap, HashSet};

/// A predictive parsing table for an LL(1) grammar
#[derive(Debug, Clone)]
pub struct ParseTable<T, N> {
    table: HashMap<(N, T), usize>,
    bodies: Vec<Vec<Symbol<T, N>>>,
    anonymous: HashSet<N>,
}

impl<T: GrammarId, N: GrammarId> ParseTable<T, N> {
    /// Builds a parse table for a grammar. Fails if the grammar is not LL(1)
    /// or mentions a non-terminal that has no productions.
    pub fn new(grammar: &Grammar<T, N>) -> Result<ParseTable<T, N>> {
        // Algorithm adapted from Aho et al (2007) p.224

        grammar.validate()?;
        let sets = Builder::new(grammar);

        let mut pt = ParseTable {
            table: HashMap::new(),
            bodies: grammar
                .productions()
                .iter()
                .map(|p| p.body.clone())
                .collect(),
            anonymous: grammar.anonymous_non_terminals().clone(),
        };

        for (i, production) in grammar.productions().iter().enumerate() {
            let (first, nullable) = sets.first_string(&production.body);

            for t in first {
                pt.insert(grammar, production.head, t, i)?;
            }

            if nullable {
                for t in sets.follow(production.head) {
                    pt.insert(grammar, production.head, *t, i)?;
                }
            }
        }

        log::debug!(
            "built parse table: {} productions, {} entries",
            pt.bodies.len(),
            pt.table.len()
        );

        Ok(pt)
    }

    /// Adds a production to the table, failing if the cell is already taken by
    /// a different production
    fn insert(&mut self, grammar: &Grammar<T, N>, nt: N, t: T, production: usize) -> Result<()> {
        match self.table.get(&(nt, t)) {
            Some(&existing) if existing != production => Err(Error::GrammarNotLL1(format!(
                "productions {} and {} of non-terminal {:?} both apply on lookahead {:?}",
                format_body(&grammar.production(existing).body),
                format_body(&grammar.production(production).body),
                nt,
                t
            ))),
            _ => {
                self.table.insert((nt, t), production);
                Ok(())
            }
        }
    }

    /// Returns the production body for a non-terminal and lookahead, if any
    pub fn production(&self, nt: N, t: T) -> Option<&[Symbol<T, N>]> {
        self.table.get(&(nt, t)).map(|&p| self.bodies[p].as_slice())
    }

    /// Returns every filled cell of the table as (non-terminal, lookahead,
    /// production body), in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (N, T, &[Symbol<T, N>])> {
        self.table
            .iter()
            .map(|(&(nt, t), &p)| (nt, t, self.bodies[p].as_slice()))
    }

    /// Returns the number of filled cells
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no cell is filled
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<T: GrammarId, N: GrammarId> Oracle<T, N> for ParseTable<T, N> {
    fn select(&self, non_terminal: N, lookahead: T) -> Option<&[Symbol<T, N>]> {
        self.production(non_terminal, lookahead)
    }

    fn is_anonymous(&self, non_terminal: N) -> bool {
        self.anonymous.contains(&non_terminal)
    }
}

/// Formats a production body for an error message
fn format_body<T: GrammarId, N: GrammarId>(body: &[Symbol<T, N>]) -> String {
    if body.is_empty() {
        return String::from("[ϵ]");
    }

    let symbols: Vec<String> = body
        .iter()
        .map(|s| match s {
            Symbol::Terminal(t) => format!("{:?}", t),
            Symbol::NonTerminal(n) => format!("{:?}", n),
        })
        .collect();

    format!("[{}]", symbols.join(" "))
}
