//! CodeBug source parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source lines → statement tokens)
//! - [`parser`]: Tree building (tokens → AST, re-lexing block bodies)
//! - [`ast`]: AST node definitions
//!
//! # Line-Oriented Grammar
//!
//! Every statement occupies one line. Block constructs (`fc`, `for`, `if`)
//! open with a header line ending in `{` and close with a line holding only
//! `}`. The lexer captures block bodies as raw lines; the parser resolves
//! them recursively, so nesting depth is bounded only by the call stack.
//!
//! # Parser Implementation
//!
//! Hand-written, no external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;
