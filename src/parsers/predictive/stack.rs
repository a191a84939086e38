use crate::grammar::Symbol;

/// A stack for an iterative predictive parser automaton
pub struct Stack<T, N> {
    elements: Vec<StackValue<T, N>>,
}

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
/// A pending unit of work on the stack
pub enum StackValue<T, N> {
    /// A terminal to match against the lookahead
    Terminal(T),
    /// A non-terminal to expand
    Enter(N),
    /// Marks the end of a non-terminal's expansion
    Exit(N),
}

impl<T: Copy, N: Copy> Stack<T, N> {
    /// Creates a new, empty stack
    pub fn new() -> Stack<T, N> {
        Stack {
            elements: Vec::new(),
        }
    }

    /// Returns true if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of values on the stack
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Pops the value at the top of the stack
    pub fn pop(&mut self) -> Option<StackValue<T, N>> {
        self.elements.pop()
    }

    /// Pushes a value onto the stack
    pub fn push(&mut self, value: StackValue<T, N>) {
        self.elements.push(value);
    }

    /// Pushes the exit marker for `head` followed by the body of its selected
    /// production in reverse, so that the first body symbol comes off the stack
    /// first and the exit marker comes off only after the whole body
    pub fn push_production(&mut self, head: N, body: &[Symbol<T, N>]) {
        self.elements.push(StackValue::Exit(head));
        self.elements.extend(body.iter().rev().map(|s| match *s {
            Symbol::Terminal(t) => StackValue::Terminal(t),
            Symbol::NonTerminal(n) => StackValue::Enter(n),
        }));
    }
}

impl<T: Copy, N: Copy> Default for Stack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
