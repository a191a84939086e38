use crate::calculator::{Class, Engine, Lexeme, Rule};
use crate::errors::Result;
use crate::parsers::{Config, Event, Recorder};

/// Outputs the notifications a parse of the input produces, indented by
/// nesting depth
pub fn output(engine: &Engine, input: &str, config: Config) -> Result<()> {
    let mut recorder: Recorder<Class, Rule, Lexeme> = Recorder::new();
    let result = engine.parse(input, config, &mut recorder);

    let mut depth = 0;
    for event in &recorder.events {
        match event {
            Event::Enter(rule) => {
                println!("{:w$}enter {}", "", rule, w = depth * 2);
                depth += 1;
            }
            Event::Exit(rule) => {
                depth = depth.saturating_sub(1);
                println!("{:w$}exit {}", "", rule, w = depth * 2);
            }
            Event::Token(class, lexeme) => {
                println!(
                    "{:w$}token {} '{}' at {}..{}",
                    "",
                    class,
                    lexeme.text,
                    lexeme.span.start,
                    lexeme.span.end,
                    w = depth * 2
                );
            }
        }
    }

    result
}
