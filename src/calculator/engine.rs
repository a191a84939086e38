use super::lexer::{Class, Lexeme, Lexer};
use super::value::Value;
use crate::errors::{Error, Result};
use crate::grammar::{nt, t, Grammar};
use crate::parsers::{Config, ParseTable, Parser, TraceStep, Visitor};
use std::fmt;

/// The non-terminals of the calculator grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    Expr,
    ExprRest,
    Term,
    TermRest,
    Power,
    PowerRest,
    Unary,
    Primary,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Rule::Expr => "expr",
            Rule::ExprRest => "expr_rest",
            Rule::Term => "term",
            Rule::TermRest => "term_rest",
            Rule::Power => "power",
            Rule::PowerRest => "power_rest",
            Rule::Unary => "unary",
            Rule::Primary => "primary",
        };
        write!(f, "{}", name)
    }
}

/// Returns the calculator grammar. Addition, subtraction, multiplication and
/// division are left-associative; exponentiation is right-associative. Unary
/// minus binds tighter than exponentiation, so -2^2 is 4.
pub fn grammar() -> Grammar<Class, Rule> {
    let mut g = Grammar::new(Rule::Expr, Class::Eof);

    g.rule(Rule::Expr, [nt(Rule::Term), nt(Rule::ExprRest)])
        .rule(
            Rule::ExprRest,
            [t(Class::Plus), nt(Rule::Term), nt(Rule::ExprRest)],
        )
        .rule(
            Rule::ExprRest,
            [t(Class::Minus), nt(Rule::Term), nt(Rule::ExprRest)],
        )
        .rule(Rule::ExprRest, [])
        .rule(Rule::Term, [nt(Rule::Power), nt(Rule::TermRest)])
        .rule(
            Rule::TermRest,
            [t(Class::Star), nt(Rule::Power), nt(Rule::TermRest)],
        )
        .rule(
            Rule::TermRest,
            [t(Class::Slash), nt(Rule::Power), nt(Rule::TermRest)],
        )
        .rule(Rule::TermRest, [])
        .rule(Rule::Power, [nt(Rule::Unary), nt(Rule::PowerRest)])
        .rule(Rule::PowerRest, [t(Class::Caret), nt(Rule::Power)])
        .rule(Rule::PowerRest, [])
        .rule(Rule::Unary, [t(Class::Minus), nt(Rule::Unary)])
        .rule(Rule::Unary, [nt(Rule::Primary)])
        .rule(Rule::Primary, [t(Class::Number)])
        .rule(
            Rule::Primary,
            [t(Class::LParen), nt(Rule::Expr), t(Class::RParen)],
        )
        .anonymous(Rule::ExprRest)
        .anonymous(Rule::TermRest)
        .anonymous(Rule::PowerRest);

    g
}

/// Evaluates expressions to demonstrate using parser notifications to perform
/// actual work
pub struct Engine {
    table: ParseTable<Class, Rule>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Returns a new expression evaluation engine
    pub fn new() -> Engine {
        let table = ParseTable::new(&grammar()).expect("bad grammar");

        Engine { table }
    }

    /// Returns the parse table for the calculator grammar
    pub fn table(&self) -> &ParseTable<Class, Rule> {
        &self.table
    }

    /// Returns a parser for calculator expressions
    pub fn parser(&self) -> Parser<'_, ParseTable<Class, Rule>, Class, Rule> {
        Parser::new(&self.table, Rule::Expr, Class::Eof)
    }

    /// Parses an expression, passing notifications to the visitor
    pub fn parse<'a, V>(&self, input: &'a str, config: Config, visitor: &mut V) -> Result<()>
    where
        V: Visitor<Class, Rule, Lexeme<'a>>,
    {
        self.parser()
            .with_config(config)
            .parse(&mut Lexer::new(input), visitor)?;

        Ok(())
    }

    /// Evaluates an expression
    pub fn evaluate(&self, input: &str) -> Result<Value> {
        self.evaluate_with(input, Config::default())
    }

    /// Evaluates an expression with the given parser configuration. Enter and
    /// exit notifications are always delivered, since evaluation needs them.
    pub fn evaluate_with(&self, input: &str, config: Config) -> Result<Value> {
        self.run(input, config)?.finish()
    }

    fn run(&self, input: &str, config: Config) -> Result<Evaluator> {
        if input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let config = Config {
            visitor_enabled: true,
            ..config
        };
        let mut evaluator = Evaluator::default();
        self.parse(input, config, &mut evaluator)?;

        Ok(evaluator)
    }
}

/// Operands and operators collected while a named non-terminal is open
#[derive(Default)]
struct Frame {
    operands: Vec<Value>,
    operators: Vec<Class>,
}

/// A visitor that evaluates an expression as the parse unfolds. Each named
/// non-terminal collects the values of its children and folds them into one
/// value for its parent when it exits.
#[derive(Default)]
struct Evaluator {
    frames: Vec<Frame>,
    result: Option<Value>,
    error: Option<Error>,
    steps: usize,
}

impl Evaluator {
    /// Passes a value to the innermost open non-terminal, or keeps it as the
    /// result if none is open
    fn push(&mut self, value: Value) {
        match self.frames.last_mut() {
            Some(frame) => frame.operands.push(value),
            None => self.result = Some(value),
        }
    }

    /// Records an evaluation error. Only the first one is kept.
    fn fail(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Folds the values collected for a non-terminal. Returns None if an
    /// earlier error left the frame without operands.
    fn fold(rule: Rule, frame: Frame) -> Result<Option<Value>> {
        let mut operands = frame.operands.into_iter();
        let Some(first) = operands.next() else {
            return Ok(None);
        };

        let value = match rule {
            Rule::Expr | Rule::Term => {
                let mut acc = first;
                for (op, operand) in frame.operators.iter().zip(operands) {
                    acc = match op {
                        Class::Plus => acc + operand,
                        Class::Minus => acc - operand,
                        Class::Star => acc * operand,
                        Class::Slash => acc.checked_div(operand)?,
                        _ => acc,
                    };
                }
                acc
            }
            Rule::Power => match operands.next() {
                Some(exponent) => first.pow(exponent),
                None => first,
            },
            Rule::Unary if frame.operators.contains(&Class::Minus) => -first,
            _ => first,
        };

        Ok(Some(value))
    }

    /// Returns the value of the expression, or the first error met
    fn finish(self) -> Result<Value> {
        if self.steps > 0 {
            log::trace!("evaluated in {} parser steps", self.steps);
        }

        if let Some(e) = self.error {
            return Err(e);
        }

        self.result
            .ok_or_else(|| Error::ParseError(String::from("expression produced no value")))
    }
}

impl<'a> Visitor<Class, Rule, Lexeme<'a>> for Evaluator {
    fn enter(&mut self, _rule: Rule) {
        self.frames.push(Frame::default());
    }

    fn exit(&mut self, rule: Rule) {
        let Some(frame) = self.frames.pop() else {
            return;
        };

        match Evaluator::fold(rule, frame) {
            Ok(Some(value)) => self.push(value),
            Ok(None) => (),
            Err(e) => self.fail(e),
        }
    }

    fn token(&mut self, class: Class, lexeme: Lexeme<'a>) {
        match class {
            Class::Number => match Value::from_literal(lexeme.text) {
                Ok(value) => self.push(value),
                Err(e) => self.fail(e),
            },
            Class::Plus | Class::Minus | Class::Star | Class::Slash | Class::Caret => {
                if let Some(frame) = self.frames.last_mut() {
                    frame.operators.push(class);
                }
            }
            _ => (),
        }
    }

    fn trace(&mut self, _step: &TraceStep<Class, Rule>) {
        self.steps += 1;
    }
}
