use llpda::grammar::{nt, t, Grammar};
use llpda::parsers::{ParseTable, Tokens};

/// Token classes for the sum-of-products grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tok {
    Num,
    Star,
    Plus,
    Eof,
}

/// Non-terminals for the sum-of-products grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nt {
    Sum,
    SumRep,
    Factor,
    FactorRep,
}

/// Returns the grammar
///
///   sum → factor (PLUS factor)*
///   factor → NUM (STAR NUM)*
///
/// with the repetitions written as anonymous right-recursive rules
pub fn sum_grammar() -> Grammar<Tok, Nt> {
    let mut g = Grammar::new(Nt::Sum, Tok::Eof);

    g.rule(Nt::Sum, [nt(Nt::Factor), nt(Nt::SumRep)])
        .rule(Nt::SumRep, [t(Tok::Plus), nt(Nt::Factor), nt(Nt::SumRep)])
        .rule(Nt::SumRep, [])
        .rule(Nt::Factor, [t(Tok::Num), nt(Nt::FactorRep)])
        .rule(Nt::FactorRep, [t(Tok::Star), t(Tok::Num), nt(Nt::FactorRep)])
        .rule(Nt::FactorRep, [])
        .anonymous(Nt::SumRep)
        .anonymous(Nt::FactorRep);

    g
}

#[allow(dead_code)]
/// Returns the parse table for the sum-of-products grammar
pub fn sum_table() -> ParseTable<Tok, Nt> {
    ParseTable::new(&sum_grammar()).expect("grammar is LL(1)")
}

#[allow(dead_code)]
/// Returns a token source over the given classes, each carrying its position
/// in the input as its payload
pub fn source(classes: &[Tok]) -> Tokens<std::vec::IntoIter<(Tok, usize)>, Tok> {
    let tokens: Vec<_> = classes.iter().enumerate().map(|(i, &c)| (c, i)).collect();
    Tokens::new(tokens.into_iter(), Tok::Eof)
}
