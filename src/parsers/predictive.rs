mod stack;

pub use stack::StackValue;

use super::oracle::Oracle;
use super::reader::Reader;
use super::source::TokenSource;
use super::visitor::Visitor;
use crate::errors::ParseError;
use stack::Stack;
use std::fmt::Debug;

/// Switches for a parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Deliver enter and exit notifications. Token notifications are always
    /// delivered.
    pub visitor_enabled: bool,
    /// Record the top of the stack and the lookahead at every iteration
    pub trace_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            visitor_enabled: true,
            trace_enabled: false,
        }
    }
}

/// One iteration of the automaton: the value just popped, the lookahead class
/// it was examined against and the number of values left beneath it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStep<T, N> {
    pub top: StackValue<T, N>,
    pub lookahead: T,
    pub depth: usize,
}

/// A top-down, iterative predictive parser driven by an oracle
pub struct Parser<'o, O: ?Sized, T, N> {
    oracle: &'o O,
    start: N,
    end: T,
    config: Config,
}

impl<'o, O, T, N> Parser<'o, O, T, N>
where
    O: Oracle<T, N> + ?Sized,
    T: Copy + Eq + Debug,
    N: Copy + Eq + Debug,
{
    /// Creates a new parser for the language whose start symbol is `start`
    /// and whose input ends with a token of class `end`
    pub fn new(oracle: &'o O, start: N, end: T) -> Parser<'o, O, T, N> {
        Parser {
            oracle,
            start,
            end,
            config: Config::default(),
        }
    }

    /// Replaces the parser's configuration
    pub fn with_config(mut self, config: Config) -> Parser<'o, O, T, N> {
        self.config = config;
        self
    }

    /// Returns the parser's configuration
    pub fn config(&self) -> Config {
        self.config
    }

    /// Parses the tokens from a source, notifying the visitor as the
    /// derivation unfolds. Stops at the first error.
    ///
    /// The end-of-input token that closes the parse is never reported to
    /// `token`, and nothing is pulled from the source after it.
    pub fn parse<S, P, V>(&self, source: &mut S, visitor: &mut V) -> Result<(), ParseError<T, N>>
    where
        S: TokenSource<T, P>,
        V: Visitor<T, N, P>,
    {
        let mut stack = Stack::new();
        stack.push(StackValue::Terminal(self.end));
        stack.push(StackValue::Enter(self.start));

        let mut reader = Reader::new(source);
        log::debug!(
            "parse started: start={:?} lookahead={:?}",
            self.start,
            reader.lookahead()
        );

        while let Some(top) = stack.pop() {
            if self.config.trace_enabled {
                let step = TraceStep {
                    top,
                    lookahead: reader.lookahead(),
                    depth: stack.len(),
                };
                log::trace!(
                    "top={:?} lookahead={:?} depth={}",
                    step.top,
                    step.lookahead,
                    step.depth
                );
                visitor.trace(&step);
            }

            let result = match top {
                StackValue::Exit(nt) => {
                    self.exit(nt, visitor);
                    Ok(())
                }
                StackValue::Enter(nt) => self.expand(nt, &mut stack, &reader, visitor),
                StackValue::Terminal(t) => self.match_terminal(t, &stack, &mut reader, visitor),
            };

            if let Err(e) = result {
                log::debug!("parse failed after {} tokens: {}", reader.pulled(), e);
                return Err(e);
            }
        }

        log::debug!("parse succeeded after {} tokens", reader.pulled());

        Ok(())
    }

    /// Chooses a production for a non-terminal based on the lookahead and
    /// pushes it, beneath the non-terminal's exit marker
    fn expand<S, P, V>(
        &self,
        nt: N,
        stack: &mut Stack<T, N>,
        reader: &Reader<S, T, P>,
        visitor: &mut V,
    ) -> Result<(), ParseError<T, N>>
    where
        S: TokenSource<T, P>,
        V: Visitor<T, N, P>,
    {
        let lookahead = reader.lookahead();
        let Some(body) = self.oracle.select(nt, lookahead) else {
            return Err(ParseError::NoProduction {
                non_terminal: nt,
                lookahead,
            });
        };

        stack.push_production(nt, body);

        if self.reports(nt) {
            visitor.enter(nt);
        }

        Ok(())
    }

    /// Fires the exit notification for a completed non-terminal
    fn exit<P, V>(&self, nt: N, visitor: &mut V)
    where
        V: Visitor<T, N, P>,
    {
        if self.reports(nt) {
            visitor.exit(nt);
        }
    }

    /// Matches a terminal popped from the stack against the lookahead
    fn match_terminal<S, P, V>(
        &self,
        t: T,
        stack: &Stack<T, N>,
        reader: &mut Reader<S, T, P>,
        visitor: &mut V,
    ) -> Result<(), ParseError<T, N>>
    where
        S: TokenSource<T, P>,
        V: Visitor<T, N, P>,
    {
        let lookahead = reader.lookahead();
        if t != lookahead {
            return Err(ParseError::UnexpectedToken {
                expected: t,
                actual: lookahead,
            });
        }

        // The end-of-input terminal at the bottom of the stack closes the
        // parse; nothing follows it
        if stack.is_empty() {
            return Ok(());
        }

        let (class, payload) = reader.next();
        visitor.token(class, payload);

        Ok(())
    }

    /// Returns true if the visitor should hear about `nt`
    fn reports(&self, nt: N) -> bool {
        self.config.visitor_enabled && !self.oracle.is_anonymous(nt)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grammar::Symbol::{self, NonTerminal, Terminal};
    use crate::parsers::source::Tokens;
    use crate::parsers::visitor::{Event, Recorder};
    use pretty_assertions::assert_eq;

    // S → 'a' S 'b' | ϵ
    const WRAPPED: &[Symbol<char, u8>] = &[Terminal('a'), NonTerminal(0), Terminal('b')];

    fn select(nt: u8, lookahead: char) -> Option<&'static [Symbol<char, u8>]> {
        match (nt, lookahead) {
            (0, 'a') => Some(WRAPPED),
            (0, 'b' | '$') => Some(&[]),
            _ => None,
        }
    }

    fn source(input: &str) -> Tokens<std::vec::IntoIter<(char, usize)>, char> {
        let tokens: Vec<_> = input.chars().enumerate().map(|(i, c)| (c, i)).collect();
        Tokens::new(tokens.into_iter(), '$')
    }

    #[test]
    fn test_parse_events() {
        let parser = Parser::new(&select, 0, '$');
        let mut recorder = Recorder::new();

        assert_eq!(parser.parse(&mut source("ab"), &mut recorder), Ok(()));
        assert_eq!(
            recorder.events,
            vec![
                Event::Enter(0),
                Event::Token('a', 0),
                Event::Enter(0),
                Event::Exit(0),
                Event::Token('b', 1),
                Event::Exit(0),
            ]
        );
        assert!(recorder.is_well_nested());
    }

    #[test]
    fn test_parse_fail() {
        let parser = Parser::new(&select, 0, '$');

        assert_eq!(
            parser.parse(&mut source("aab"), &mut ()),
            Err(ParseError::UnexpectedToken {
                expected: 'b',
                actual: '$'
            })
        );
        assert_eq!(
            parser.parse(&mut source("ac"), &mut ()),
            Err(ParseError::NoProduction {
                non_terminal: 0,
                lookahead: 'c'
            })
        );
        assert_eq!(
            parser.parse(&mut source("abb"), &mut ()),
            Err(ParseError::UnexpectedToken {
                expected: '$',
                actual: 'b'
            })
        );
    }

    #[test]
    fn test_visitor_disabled() {
        let config = Config {
            visitor_enabled: false,
            trace_enabled: false,
        };
        let parser = Parser::new(&select, 0, '$').with_config(config);
        let mut recorder = Recorder::new();

        assert_eq!(parser.config(), config);
        assert_eq!(Parser::new(&select, 0, '$').config(), Config::default());

        parser.parse(&mut source("ab"), &mut recorder).unwrap();
        assert_eq!(
            recorder.events,
            vec![Event::Token('a', 0), Event::Token('b', 1)]
        );
        assert!(recorder.steps.is_empty());
    }

    #[test]
    fn test_trace() {
        let parser = Parser::new(&select, 0, '$').with_config(Config {
            visitor_enabled: true,
            trace_enabled: true,
        });
        let mut recorder = Recorder::new();

        parser.parse(&mut source(""), &mut recorder).unwrap();
        assert_eq!(
            recorder.steps,
            vec![
                TraceStep {
                    top: StackValue::Enter(0),
                    lookahead: '$',
                    depth: 1,
                },
                TraceStep {
                    top: StackValue::Exit(0),
                    lookahead: '$',
                    depth: 1,
                },
                TraceStep {
                    top: StackValue::Terminal('$'),
                    lookahead: '$',
                    depth: 0,
                },
            ]
        );
    }

    #[test]
    fn test_end_marker_pulls_nothing() {
        let parser = Parser::new(&select, 0, '$');
        let mut pulls = 0;
        let mut counting = || {
            pulls += 1;
            ('$', ())
        };

        let mut recorder = Recorder::new();

        parser.parse(&mut counting, &mut recorder).unwrap();
        assert_eq!(pulls, 1);
        assert_eq!(recorder.events, vec![Event::Enter(0), Event::Exit(0)]);
    }
}
