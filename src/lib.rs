//! # Introduction
//!
//! CodeBug checks programs written in a small teaching language and reports
//! whether they are syntactically and structurally well-formed. It does not
//! run them.
//!
//! ## Validation pipeline
//!
//! ```text
//! Source → Delimiter checks → Lexer → Parser → AST → Validator → ValidationResult
//! ```
//!
//! 1. [`delimiters`]: raw-text scans for brace/parenthesis balance and
//!    for-loop clause counts.
//! 2. [`parser`]: line-oriented lexing into statement tokens, then a
//!    recursive tree build where every block body is lexed and parsed in
//!    its own call.
//! 3. [`validator`]: depth-first grammar rules, one per construct, stopping
//!    at the first failure.
//! 4. [`service`]: runs the stages in order and merges the outcome into one
//!    [`ValidationResult`].
//!
//! ## Language
//!
//! ```text
//! variable:20
//! fc Suma ( param1, param2 ) int {
//!     return 20
//! }
//! for 0; i<10; 1++ {
//!     return 20
//! }
//! if ( x>10 ) {
//!     return 20
//! }
//! ```
//!
//! Keywords: `fc`, `for`, `if`, `return`. Return types: `int`, `float`,
//! `string`.
//!
//! ```
//! let result = codebug::validate("variable:20");
//! assert!(result.valid);
//! assert!(result.message.is_none());
//! ```

pub mod constants;
pub mod delimiters;
pub mod parser;
pub mod service;
pub mod validator;

pub use service::{validate, StructuralError, ValidationError, ValidationService};
pub use validator::{ValidationResult, Violation};
