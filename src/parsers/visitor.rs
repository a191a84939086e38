use super::predictive::TraceStep;

/// Receives notifications from a parse as they happen.
///
/// `enter` fires once a non-terminal's production has been selected and before
/// any event from its children; `exit` fires after all of them. `token` fires
/// for every matched terminal. Visitors observe only: nothing they do affects
/// the parse.
pub trait Visitor<T, N, P> {
    fn enter(&mut self, _non_terminal: N) {}

    fn exit(&mut self, _non_terminal: N) {}

    fn token(&mut self, _class: T, _payload: P) {}

    /// Called once per iteration of the automaton when tracing is enabled
    fn trace(&mut self, _step: &TraceStep<T, N>) {}
}

/// The unit visitor ignores every notification
impl<T, N, P> Visitor<T, N, P> for () {}

/// A structural or token notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<T, N, P> {
    Enter(N),
    Exit(N),
    Token(T, P),
}

/// A visitor that records every notification it receives
#[derive(Debug)]
pub struct Recorder<T, N, P> {
    pub events: Vec<Event<T, N, P>>,
    pub steps: Vec<TraceStep<T, N>>,
}

impl<T, N, P> Default for Recorder<T, N, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, N, P> Recorder<T, N, P> {
    /// Creates an empty recorder
    pub fn new() -> Recorder<T, N, P> {
        Recorder {
            events: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Returns true if every exit closes the most recent unclosed enter of the
    /// same non-terminal, and nothing is left open
    pub fn is_well_nested(&self) -> bool
    where
        N: PartialEq,
    {
        let mut open: Vec<&N> = Vec::new();

        for event in &self.events {
            match event {
                Event::Enter(n) => open.push(n),
                Event::Exit(n) => {
                    if open.pop() != Some(n) {
                        return false;
                    }
                }
                Event::Token(..) => (),
            }
        }

        open.is_empty()
    }
}

impl<T, N, P> Visitor<T, N, P> for Recorder<T, N, P>
where
    T: Copy,
    N: Copy,
{
    fn enter(&mut self, non_terminal: N) {
        self.events.push(Event::Enter(non_terminal));
    }

    fn exit(&mut self, non_terminal: N) {
        self.events.push(Event::Exit(non_terminal));
    }

    fn token(&mut self, class: T, payload: P) {
        self.events.push(Event::Token(class, payload));
    }

    fn trace(&mut self, step: &TraceStep<T, N>) {
        self.steps.push(*step);
    }
}
