/// A lazy supplier of classified tokens.
///
/// Once the underlying input is exhausted a source must keep returning the
/// end-of-input class on every further call. Sources are stateful streams: a
/// source belongs to one parse at a time and is restarted only by creating a
/// new one.
pub trait TokenSource<T, P> {
    /// Returns the next token class and its payload
    fn next_token(&mut self) -> (T, P);
}

impl<T, P, F> TokenSource<T, P> for F
where
    F: FnMut() -> (T, P),
{
    fn next_token(&mut self) -> (T, P) {
        self()
    }
}

/// Adapts an iterator of tokens into a token source, yielding the end-of-input
/// class with a default payload forever once the iterator runs dry
pub struct Tokens<I, T> {
    iter: I,
    end: T,
}

impl<I, T> Tokens<I, T> {
    /// Creates a new source from an iterator and an end-of-input class
    pub fn new(iter: I, end: T) -> Tokens<I, T> {
        Tokens { iter, end }
    }
}

impl<I, T, P> TokenSource<T, P> for Tokens<I, T>
where
    I: Iterator<Item = (T, P)>,
    T: Copy,
    P: Default,
{
    fn next_token(&mut self) -> (T, P) {
        self.iter
            .next()
            .unwrap_or_else(|| (self.end, P::default()))
    }
}
