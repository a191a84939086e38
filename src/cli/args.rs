use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Command line options for the llpda tool
pub struct Options {
    /// An arithmetic expression such as '(3+4)*5'
    pub input: String,

    /// Log every step of the parser automaton
    #[arg(long)]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
/// Commands for the llpda tool
pub enum Commands {
    /// Evaluate the expression
    Eval,
    /// List the parser's notifications for the expression
    Events {
        /// Report matched tokens only, without enter and exit
        #[arg(long)]
        tokens_only: bool,
    },
    /// Print the parse tree for the expression
    ParseTree {
        #[arg(long)]
        indent: Option<usize>,
    },
    /// Print the calculator grammar's productions
    Productions,
    /// Print the calculator grammar's parse table
    Table,
}
