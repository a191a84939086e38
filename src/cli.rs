pub mod args;
mod common;
pub mod events;
pub mod parsetree;
pub mod productions;
pub mod table;
