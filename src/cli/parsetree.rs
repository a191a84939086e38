use crate::calculator::{Class, Engine, Lexeme, Rule};
use crate::errors::Result;
use crate::parsers::parsetree::{Child, Tree, TreeBuilder};
use crate::parsers::Config;

/// Outputs a parse tree for the given input
pub fn output(engine: &Engine, input: &str, config: Config, indent: usize) -> Result<()> {
    let mut builder = TreeBuilder::new();
    engine.parse(input, config, &mut builder)?;

    let tree = builder.finish();
    let mut lasts: Vec<bool> = Vec::new();

    fn traverse(
        tree: &Tree<Class, Rule, Lexeme>,
        node: usize,
        lasts: &mut Vec<bool>,
        indent: usize,
    ) {
        let node = &tree.nodes[node];

        print_node(&node.non_terminal.to_string(), lasts, indent);

        for (i, child) in node.children.iter().enumerate() {
            lasts.push(i == node.children.len() - 1);

            match child {
                Child::NonTerminal(nt) => {
                    traverse(tree, *nt, lasts, indent);
                }
                Child::Token(class, lexeme) => {
                    print_node(&format!("{} '{}'", class, lexeme.text), lasts, indent);
                }
            }

            lasts.pop();
        }
    }

    if let Some(root) = tree.root {
        traverse(&tree, root, &mut lasts, indent);
    }

    Ok(())
}

/// Prints a node with the appropriate prefix
fn print_node(name: &str, lasts: &[bool], indent: usize) {
    match lasts.split_last() {
        None => println!("{}", name),
        Some((&last, rest)) => println!(
            "{}{:─<w$}{}",
            format_prefix(rest, indent),
            list_item_symbol(last),
            name,
            w = indent,
        ),
    }
}

/// Returns the prefix of a parse tree output line, including appropriate line
/// characters for previous nodes. For each element of lasts, if the value is
/// false, the non-terminal at that horizontal position still has more children,
/// so a vertical line is output. Otherwise, there are no more children for that
/// non-terminal, and a vertical line is not printed.
fn format_prefix(lasts: &[bool], indent: usize) -> String {
    let mut s = String::new();
    for &n in lasts {
        s.push_str(&format!("{:w$}", if n { "" } else { "│" }, w = indent));
    }
    s
}

/// Returns the appropriate character for a child of a node, depending on
/// whether the child is the last one
fn list_item_symbol(last: bool) -> char {
    if last {
        '└'
    } else {
        '├'
    }
}
