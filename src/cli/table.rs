use super::common;
use crate::calculator::{Class, Rule};
use crate::parsers::ParseTable;

/// Outputs every filled cell of a parse table, ordered by non-terminal and
/// then by lookahead
pub fn output(table: &ParseTable<Class, Rule>) {
    let mut entries: Vec<_> = table.entries().collect();
    entries.sort_by_key(|&(nt, t, _)| (nt, t));

    let nt_width = common::longest(entries.iter().map(|e| e.0));
    let t_width = common::longest(entries.iter().map(|e| e.1));

    for (nt, t, body) in entries {
        println!(
            "{:n$}  {:t$}  → {}",
            nt.to_string(),
            t.to_string(),
            common::format_body(body),
            n = nt_width,
            t = t_width
        );
    }
}
