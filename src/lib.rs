pub mod calculator;
pub mod cli;
pub mod errors;
pub mod grammar;
pub mod parsers;
