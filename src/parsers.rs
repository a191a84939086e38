pub mod oracle;
pub mod parsetree;
pub mod predictive;
mod reader;
pub mod source;
pub mod table;
pub mod visitor;

pub use oracle::Oracle;
pub use predictive::{Config, Parser, StackValue, TraceStep};
pub use source::{TokenSource, Tokens};
pub use table::ParseTable;
pub use visitor::{Event, Recorder, Visitor};
