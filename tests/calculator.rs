use llpda::calculator::{Class, Engine, Lexeme, Rule, Value};
use llpda::errors::Error;
use llpda::parsers::parsetree::TreeBuilder;
use llpda::parsers::{Config, Event, Recorder};
use pretty_assertions::assert_eq;

#[test]
fn test_evaluate() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();

    assert_eq!(engine.evaluate("3+4")?, Value::new_integer("7")?);
    assert_eq!(engine.evaluate("(3+4)*5")?, Value::new_integer("35")?);
    assert_eq!(engine.evaluate("3/4*8")?, Value::new_real("6")?);
    assert_eq!(engine.evaluate("2^3^2")?, Value::new_integer("512")?);
    assert_eq!(engine.evaluate("1.5 * (2 - -2)")?, Value::new_real("6")?);

    Ok(())
}

#[test]
fn test_evaluate_errors() {
    let engine = Engine::new();

    assert_eq!(
        engine.evaluate("(1+2"),
        Err(Error::ParseError(String::from(
            "unexpected token: expected RParen, got Eof"
        )))
    );
    assert_eq!(engine.evaluate("7/(3-3)"), Err(Error::DivideByZero));
    assert_eq!(engine.evaluate(""), Err(Error::EmptyInput));
}

#[test]
fn test_lexemes_reach_visitor() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();
    let mut recorder: Recorder<Class, Rule, Lexeme> = Recorder::new();

    engine.parse(
        "12 * 3",
        Config {
            visitor_enabled: false,
            trace_enabled: false,
        },
        &mut recorder,
    )?;

    assert_eq!(
        recorder.events,
        vec![
            Event::Token(
                Class::Number,
                Lexeme {
                    text: "12",
                    span: 0..2
                }
            ),
            Event::Token(
                Class::Star,
                Lexeme {
                    text: "*",
                    span: 3..4
                }
            ),
            Event::Token(
                Class::Number,
                Lexeme {
                    text: "3",
                    span: 5..6
                }
            ),
        ]
    );

    Ok(())
}

#[test]
fn test_parse_tree() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new();
    let mut builder = TreeBuilder::new();

    engine.parse("(1)", Config::default(), &mut builder)?;
    let tree = builder.finish();

    assert_eq!(
        tree.visualize(),
        "Expr→[Term→[Power→[Unary→[Primary→[LParen \
         Expr→[Term→[Power→[Unary→[Primary→[Number]]]]] RParen]]]]]"
    );
    assert_eq!(
        tree.frontier()
            .iter()
            .map(|lexeme| lexeme.text)
            .collect::<String>(),
        "(1)"
    );

    Ok(())
}
