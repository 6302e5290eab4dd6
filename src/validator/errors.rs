//! Grammar violations reported by the validator
//!
//! Each variant is one rule a construct can break. The `Display` text is the
//! static message shown to the user; no names or positions are interpolated.

use thiserror::Error;

/// First grammar rule a program breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    // Variable declarations
    #[error("variable name must be an identifier")]
    InvalidVariableName,
    #[error("variable value must not be empty")]
    EmptyVariableValue,

    // Function declarations
    #[error("function name must be an identifier")]
    InvalidFunctionName,
    #[error("function must declare at least one parameter")]
    MissingParameters,
    #[error("function parameters must be identifiers")]
    InvalidParameter,
    #[error("function return type must be int, float or string")]
    UnsupportedReturnType,
    #[error("function body must contain a non-empty return statement")]
    MissingReturn,

    // For loops
    #[error("for loop needs an initializer, a condition and an increment")]
    IncompleteForClauses,
    #[error("for loop initializer must be an identifier or a number")]
    InvalidForInit,
    #[error("for loop condition must reference an identifier or a number")]
    InvalidForCondition,
    #[error("for loop increment must have the form <number>++")]
    InvalidForIncrement,

    // If statements
    #[error("if statement needs a condition")]
    EmptyIfCondition,
    #[error("if statement body must not be empty")]
    EmptyIfBody,
    #[error("if condition must compare two operands with ==, !=, <=, >=, < or >")]
    InvalidIfCondition,
}
