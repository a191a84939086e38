mod common;

use common::{sum_table, Nt, Tok};
use llpda::calculator::{Engine, Value};
use llpda::errors::ParseError;
use llpda::parsers::{Config, Event, ParseTable, Parser, Recorder};
use proptest::prelude::*;

type Outcome = (
    Result<(), ParseError<Tok, Nt>>,
    Vec<Event<Tok, Nt, usize>>,
    usize,
);

/// Parses the classes, returning the result, the recorded events and the
/// number of times the source was pulled
fn run(table: &ParseTable<Tok, Nt>, classes: &[Tok], config: Config) -> Outcome {
    let parser = Parser::new(table, Nt::Sum, Tok::Eof).with_config(config);
    let mut recorder = Recorder::new();
    let mut pulls = 0;
    let mut source = || {
        let class = classes.get(pulls).copied().unwrap_or(Tok::Eof);
        pulls += 1;
        (class, pulls - 1)
    };

    let result = parser.parse(&mut source, &mut recorder);
    (result, recorder.events, pulls)
}

fn tokens_strategy() -> impl Strategy<Value = Vec<Tok>> {
    prop::collection::vec(
        prop_oneof![
            Just(Tok::Num),
            Just(Tok::Star),
            Just(Tok::Plus),
            Just(Tok::Eof),
        ],
        0..24,
    )
}

fn is_token(event: &Event<Tok, Nt, usize>) -> bool {
    matches!(event, Event::Token(..))
}

proptest! {
    #[test]
    fn test_deterministic(classes in tokens_strategy()) {
        let table = sum_table();

        let first = run(&table, &classes, Config::default());
        let second = run(&table, &classes, Config::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_events_well_nested(classes in tokens_strategy()) {
        let table = sum_table();
        let (result, events, _) = run(&table, &classes, Config::default());

        let mut open = Vec::new();
        for event in &events {
            match event {
                Event::Enter(n) => open.push(*n),
                Event::Exit(n) => {
                    prop_assert_eq!(open.pop(), Some(*n));
                }
                Event::Token(..) => (),
            }
        }
        if result.is_ok() {
            prop_assert!(open.is_empty());
        } else {
            prop_assert!(!events.contains(&Event::Exit(Nt::Sum)));
        }
    }

    #[test]
    fn test_one_token_lookahead(classes in tokens_strategy()) {
        let table = sum_table();
        let (_, events, pulls) = run(&table, &classes, Config::default());

        let matched = events.iter().filter(|e| is_token(e)).count();
        prop_assert_eq!(pulls, matched + 1);
    }

    #[test]
    fn test_tokens_in_input_order(classes in tokens_strategy()) {
        let table = sum_table();
        let (_, events, _) = run(&table, &classes, Config::default());

        let positions: Vec<usize> = events
            .iter()
            .filter_map(|e| match e {
                Event::Token(_, position) => Some(*position),
                _ => None,
            })
            .collect();
        let expected: Vec<usize> = (0..positions.len()).collect();
        prop_assert_eq!(positions, expected);
    }

    #[test]
    fn test_visitor_switch_keeps_tokens(classes in tokens_strategy()) {
        let table = sum_table();
        let enabled = run(&table, &classes, Config::default());
        let disabled = run(
            &table,
            &classes,
            Config {
                visitor_enabled: false,
                trace_enabled: false,
            },
        );

        let tokens: Vec<_> = enabled.1.iter().filter(|e| is_token(e)).cloned().collect();
        prop_assert_eq!(enabled.0, disabled.0);
        prop_assert_eq!(tokens, disabled.1);
    }

    #[test]
    fn test_calculator_sums(operands in prop::collection::vec(0i64..10_000, 1..12)) {
        let engine = Engine::new();
        let input = operands
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" + ");

        prop_assert_eq!(
            engine.evaluate(&input),
            Ok(Value::from(operands.iter().sum::<i64>()))
        );
    }
}
