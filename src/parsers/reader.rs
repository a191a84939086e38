use super::source::TokenSource;

/// The lookahead cell of a parse. Holds exactly one token pulled from the
/// source and not yet matched.
pub struct Reader<'s, S, T, P> {
    source: &'s mut S,
    class: T,
    payload: P,
    pulled: usize,
}

impl<'s, S, T, P> Reader<'s, S, T, P>
where
    S: TokenSource<T, P>,
    T: Copy,
{
    /// Creates a reader, pulling the first token from the source
    pub fn new(source: &'s mut S) -> Reader<'s, S, T, P> {
        let (class, payload) = source.next_token();
        Reader {
            source,
            class,
            payload,
            pulled: 1,
        }
    }

    /// Returns the class of the buffered token
    pub fn lookahead(&self) -> T {
        self.class
    }

    /// Returns the buffered token, replacing it with the next one from the
    /// source
    pub fn next(&mut self) -> (T, P) {
        let (class, payload) = self.source.next_token();
        self.pulled += 1;

        (
            std::mem::replace(&mut self.class, class),
            std::mem::replace(&mut self.payload, payload),
        )
    }

    /// Returns the number of tokens pulled from the source so far
    pub fn pulled(&self) -> usize {
        self.pulled
    }
}
