use std::fmt::Display;

use crate::grammar::Symbol;

/// Formats a production body, using ϵ for an empty body
pub fn format_body<T: Display, N: Display>(body: &[Symbol<T, N>]) -> String {
    if body.is_empty() {
        return String::from("ϵ");
    }

    body.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the width of the longest item's display form
pub fn longest<I, D>(items: I) -> usize
where
    I: IntoIterator<Item = D>,
    D: Display,
{
    items
        .into_iter()
        .map(|i| i.to_string().chars().count())
        .max()
        .unwrap_or(0)
}
