//! Validation pipeline entry point
//!
//! [`ValidationService`] runs the stages in order and folds whatever goes
//! wrong into a single [`ValidationResult`]:
//!
//! ```text
//! source → delimiter checks → Lexer → Parser → Validator → ValidationResult
//! ```
//!
//! Structural problems are reported before any interpretation happens.
//! Grammar problems come from the validator. A panic anywhere in the
//! pipeline is caught here and reported as an unexpected error, so callers
//! only ever see a result.

use crate::delimiters;
use crate::parser::lexer::LexError;
use crate::parser::parser::{ParseError, Parser};
use crate::validator::{ValidationResult, Validator, Violation};
use std::panic::{self, UnwindSafe};
use thiserror::Error;

/// Problems found before the program is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("braces or parentheses are not balanced")]
    UnbalancedDelimiters,
    #[error("every for loop needs three clauses separated by ';'")]
    IncompleteForClauses,
    #[error("a block is never closed by a '}}' line")]
    UnterminatedBlock,
}

impl From<LexError> for StructuralError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::UnterminatedBlock { .. } => StructuralError::UnterminatedBlock,
        }
    }
}

/// Everything that can make a program invalid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Structural error: {0}")]
    Structural(#[from] StructuralError),
    #[error("Syntax error: {0}")]
    Grammar(#[from] Violation),
    #[error("Unexpected error: the validator failed on this input")]
    Unexpected,
}

impl From<ParseError> for ValidationError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Lex(source) | ParseError::Block { source, .. } => {
                ValidationError::Structural(source.into())
            }
        }
    }
}

/// Orchestrates delimiter checks, parsing and grammar validation
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidationService {
    validator: Validator,
}

impl ValidationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `source` and report the outcome.
    ///
    /// Never panics. Identical input always yields an identical result.
    pub fn validate(&self, source: &str) -> ValidationResult {
        match self.try_validate(source) {
            Ok(()) => {
                tracing::debug!("program is valid");
                ValidationResult::valid()
            }
            Err(err) => {
                tracing::debug!(error = %err, "program is invalid");
                ValidationResult::invalid(err.to_string())
            }
        }
    }

    /// Like [`validate`](Self::validate), but keeps the typed error.
    pub fn try_validate(&self, source: &str) -> Result<(), ValidationError> {
        guarded(|| self.run_pipeline(source))
    }

    fn run_pipeline(&self, source: &str) -> Result<(), ValidationError> {
        if !delimiters::is_balanced(source) {
            return Err(StructuralError::UnbalancedDelimiters.into());
        }
        if !delimiters::has_complete_for_clauses(source) {
            return Err(StructuralError::IncompleteForClauses.into());
        }

        let program = Parser::new(source)?.parse_program()?;
        tracing::debug!(statements = program.nodes.len(), "parsed program");

        self.validator.check(&program.nodes)?;
        Ok(())
    }
}

/// Run `stage`, reporting a panic as [`ValidationError::Unexpected`].
fn guarded<F>(stage: F) -> Result<(), ValidationError>
where
    F: FnOnce() -> Result<(), ValidationError> + UnwindSafe,
{
    panic::catch_unwind(stage).unwrap_or_else(|_| {
        tracing::error!("validation pipeline panicked");
        Err(ValidationError::Unexpected)
    })
}

/// Validate `source` with a fresh [`ValidationService`].
pub fn validate(source: &str) -> ValidationResult {
    ValidationService::new().validate(source)
}
