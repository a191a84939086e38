use super::visitor::Visitor;
use std::fmt::Debug;

/// A parse tree
#[derive(Debug)]
pub struct Tree<T, N, P> {
    pub root: Option<usize>,
    pub nodes: Vec<Node<T, N, P>>,
}

/// A node in a parse tree
#[derive(Debug)]
pub struct Node<T, N, P> {
    pub non_terminal: N,
    pub children: Vec<Child<T, P>>,
}

/// A child of a parse tree node
#[derive(Debug, PartialEq)]
pub enum Child<T, P> {
    NonTerminal(usize),
    Token(T, P),
}

impl<T, N, P> Default for Tree<T, N, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, N, P> Tree<T, N, P> {
    /// Creates a new parse tree
    pub fn new() -> Tree<T, N, P> {
        Tree {
            root: None,
            nodes: Vec::new(),
        }
    }

    /// Returns a simple, one-line string representation of the parse tree
    pub fn visualize(&self) -> String
    where
        T: Debug,
        N: Debug,
    {
        let mut output = String::new();

        // Define this as a regular function rather than a closure, since we
        // need to call it recursively
        fn traverse<T: Debug, N: Debug, P>(tree: &Tree<T, N, P>, node: usize, s: &mut String) {
            let node = &tree.nodes[node];

            s.push_str(&format!("{:?}→[", node.non_terminal));

            for (i, child) in node.children.iter().enumerate() {
                if i > 0 {
                    s.push(' ');
                }

                match child {
                    Child::NonTerminal(next) => {
                        traverse(tree, *next, s);
                    }
                    Child::Token(class, _) => {
                        s.push_str(&format!("{:?}", class));
                    }
                }
            }

            s.push(']');
        }

        if let Some(root) = self.root {
            traverse(self, root, &mut output);
        }

        output
    }

    /// Returns the frontier, or yield, of the tree: the payloads of its
    /// tokens in a left-to-right depth-first traversal
    pub fn frontier(&self) -> Vec<&P> {
        let mut output = Vec::new();

        fn traverse<'a, T, N, P>(tree: &'a Tree<T, N, P>, node: usize, out: &mut Vec<&'a P>) {
            for child in &tree.nodes[node].children {
                match child {
                    Child::NonTerminal(next) => {
                        traverse(tree, *next, out);
                    }
                    Child::Token(_, payload) => {
                        out.push(payload);
                    }
                }
            }
        }

        if let Some(root) = self.root {
            traverse(self, root, &mut output);
        }

        output
    }
}

/// A visitor that assembles a parse tree from enter, exit and token
/// notifications. Tokens seen while no node is open are dropped.
pub struct TreeBuilder<T, N, P> {
    tree: Tree<T, N, P>,
    open: Vec<usize>,
}

impl<T, N, P> Default for TreeBuilder<T, N, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, N, P> TreeBuilder<T, N, P> {
    /// Creates a builder with an empty tree
    pub fn new() -> TreeBuilder<T, N, P> {
        TreeBuilder {
            tree: Tree::new(),
            open: Vec::new(),
        }
    }

    /// Returns the finished tree
    pub fn finish(self) -> Tree<T, N, P> {
        self.tree
    }
}

impl<T, N, P> Visitor<T, N, P> for TreeBuilder<T, N, P> {
    fn enter(&mut self, non_terminal: N) {
        let id = self.tree.nodes.len();
        self.tree.nodes.push(Node {
            non_terminal,
            children: Vec::new(),
        });

        match self.open.last() {
            Some(&parent) => self.tree.nodes[parent]
                .children
                .push(Child::NonTerminal(id)),
            None => self.tree.root = Some(id),
        }

        self.open.push(id);
    }

    fn exit(&mut self, _non_terminal: N) {
        self.open.pop();
    }

    fn token(&mut self, class: T, payload: P) {
        if let Some(&node) = self.open.last() {
            self.tree.nodes[node]
                .children
                .push(Child::Token(class, payload));
        }
    }
}
