mod engine;
mod lexer;
mod value;

pub use engine::{grammar, Engine, Rule};
pub use lexer::{Class, Lexeme, Lexer};
pub use value::Value;
