//! Raw-text delimiter checks
//!
//! These scans run over the untouched source before the lexer is trusted.
//! They look at characters, not tokens, so they catch imbalances the
//! line-oriented lexer would otherwise swallow (a stray `}` on its own line
//! is a perfectly good [`CodeLine`](crate::parser::lexer::Token::CodeLine)).
//!
//! Both functions are total: any `&str` produces a `bool`.

use crate::constants::{
    BLOCK_CLOSE, BLOCK_OPEN, CLAUSE_SEPARATOR, FOR_CLAUSE_COUNT, KW_FOR, PAREN_CLOSE, PAREN_OPEN,
};

/// Returns `true` when every `(` and `{` has a matching closer and no closer
/// appears before its opener.
///
/// Each delimiter kind has its own stack, so `( { ) }` is balanced here.
/// Interleaving is left to the grammar rules.
pub fn is_balanced(source: &str) -> bool {
    let mut parens: Vec<char> = Vec::new();
    let mut braces: Vec<char> = Vec::new();

    for ch in source.chars() {
        match ch {
            PAREN_OPEN => parens.push(ch),
            BLOCK_OPEN => braces.push(ch),
            PAREN_CLOSE => {
                if parens.pop().is_none() {
                    return false;
                }
            }
            BLOCK_CLOSE => {
                if braces.pop().is_none() {
                    return false;
                }
            }
            _ => {}
        }
    }

    parens.is_empty() && braces.is_empty()
}

/// Returns `true` when every line starting with `for` has at least three
/// `;`-separated segments.
pub fn has_complete_for_clauses(source: &str) -> bool {
    source
        .lines()
        .map(str::trim)
        .filter(|line| line.split_whitespace().next() == Some(KW_FOR))
        .all(|line| line.split(CLAUSE_SEPARATOR).count() >= FOR_CLAUSE_COUNT)
}
