use super::common;
use crate::calculator::{Class, Rule};
use crate::grammar::Grammar;

/// Outputs an ordered list of the productions in the grammar, with their
/// indices. Anonymous non-terminals are marked with an asterisk.
pub fn output(g: &Grammar<Class, Rule>) {
    let n_width = (g.num_productions().checked_ilog10().unwrap_or(0) + 1) as usize;
    let head_width = common::longest(g.non_terminals()) + 1;

    for (i, p) in g.productions().iter().enumerate() {
        let head = if g.is_anonymous(p.head) {
            format!("{}*", p.head)
        } else {
            p.head.to_string()
        };

        println!(
            "{:>n$}: {:h$} → {}",
            i,
            head,
            common::format_body(&p.body),
            n = n_width,
            h = head_width
        );
    }
}
