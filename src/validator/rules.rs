//! Per-construct grammar rules
//!
//! One function per [`AstNode`](crate::parser::ast::AstNode) variant that
//! has constraints. Each checks only the node's own fields; walking into
//! children is the validator's job. The lexical predicates at the bottom
//! are plain `char` scans.

use super::errors::Violation;
use crate::constants::{COMPARISON_OPERATORS, RETURN_TYPES};
use crate::parser::ast::AstNode;

/// `name:value`
pub(crate) fn check_variable(name: &str, value: &str) -> Result<(), Violation> {
    if !is_identifier(name) {
        return Err(Violation::InvalidVariableName);
    }
    if is_blank(value) {
        return Err(Violation::EmptyVariableValue);
    }
    Ok(())
}

/// `fc name ( params ) return_type { ... }`
///
/// Requires a direct `return` child with a value. Returns nested inside a
/// for or if body don't count.
pub(crate) fn check_function(
    name: &str,
    params: &[String],
    return_type: &str,
    children: &[AstNode],
) -> Result<(), Violation> {
    if !is_identifier(name) {
        return Err(Violation::InvalidFunctionName);
    }
    if params.is_empty() {
        return Err(Violation::MissingParameters);
    }
    if !params.iter().all(|param| is_identifier(param)) {
        return Err(Violation::InvalidParameter);
    }
    if !RETURN_TYPES.iter().any(|ty| *ty == return_type) {
        return Err(Violation::UnsupportedReturnType);
    }

    let has_return = children
        .iter()
        .any(|child| matches!(child, AstNode::ReturnStmt { value, .. } if !is_blank(value)));
    if !has_return {
        return Err(Violation::MissingReturn);
    }

    Ok(())
}

/// `for init; cond; incr { ... }`
///
/// The condition only has to mention an operand. Unlike `if`, no
/// comparison operator is required.
pub(crate) fn check_for(init: &str, cond: &str, incr: &str) -> Result<(), Violation> {
    if is_blank(init) || is_blank(cond) || is_blank(incr) {
        return Err(Violation::IncompleteForClauses);
    }
    if !contains_operand(init) {
        return Err(Violation::InvalidForInit);
    }
    if !contains_operand(cond) {
        return Err(Violation::InvalidForCondition);
    }
    if !is_numeric_increment(incr.trim()) {
        return Err(Violation::InvalidForIncrement);
    }
    Ok(())
}

/// `if ( lhs op rhs ) { ... }`
pub(crate) fn check_if(cond: &str, children: &[AstNode]) -> Result<(), Violation> {
    if is_blank(cond) {
        return Err(Violation::EmptyIfCondition);
    }
    if children.is_empty() {
        return Err(Violation::EmptyIfBody);
    }
    if !is_comparison(cond) {
        return Err(Violation::InvalidIfCondition);
    }
    Ok(())
}

// ===== Lexical predicates =====

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub(crate) fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}

/// `[0-9]+(\.[0-9]+)?`
pub(crate) fn is_number(text: &str) -> bool {
    let all_digits = |part: &str| !part.is_empty() && part.chars().all(|ch| ch.is_ascii_digit());

    match text.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(text),
    }
}

fn is_operand(text: &str) -> bool {
    is_identifier(text) || is_number(text)
}

/// True when an identifier or a number appears anywhere in `text`.
///
/// Any ASCII letter, digit or underscore starts one of the two.
pub(crate) fn contains_operand(text: &str) -> bool {
    text.chars().any(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// `[0-9]+\+\+`
pub(crate) fn is_numeric_increment(text: &str) -> bool {
    text.strip_suffix("++")
        .is_some_and(|count| !count.is_empty() && count.chars().all(|ch| ch.is_ascii_digit()))
}

/// `operand op operand`, with optional whitespace around `op`
pub(crate) fn is_comparison(text: &str) -> bool {
    COMPARISON_OPERATORS.iter().any(|op| {
        text.split_once(op)
            .is_some_and(|(lhs, rhs)| is_operand(lhs.trim()) && is_operand(rhs.trim()))
    })
}
