//! Grammar validation over the parsed tree
//!
//! The [`Validator`] walks nodes depth-first, left to right, and applies the
//! rule for each construct. It stops at the first node that breaks a rule;
//! nothing after it is visited.
//!
//! Only function bodies are walked. A `for` or `if` rule looks at its own
//! header (and, for `if`, whether the body is empty), never at the body's
//! statements, so a loop or branch reached from top level is checked one
//! level deep.
//!
//! - [`errors`]: the [`Violation`] taxonomy and its user-facing messages
//! - `rules`: one check per construct, plus the lexical predicates

pub mod errors;
mod rules;

pub use errors::Violation;

use crate::parser::ast::AstNode;
use serde::Serialize;

/// Outcome of validating one program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    /// A passing result with no message.
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A failing result carrying `message`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Depth-first grammar checker
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Validator
    }

    /// Validate `nodes`, reporting the first violation as a failed result.
    pub fn validate(&self, nodes: &[AstNode]) -> ValidationResult {
        match self.check(nodes) {
            Ok(()) => ValidationResult::valid(),
            Err(violation) => ValidationResult::invalid(violation.to_string()),
        }
    }

    /// Walk `nodes` in order, descending into function bodies before moving on.
    pub fn check(&self, nodes: &[AstNode]) -> Result<(), Violation> {
        nodes.iter().try_for_each(|node| self.check_node(node))
    }

    fn check_node(&self, node: &AstNode) -> Result<(), Violation> {
        if let Err(violation) = self.check_rule(node) {
            tracing::debug!(
                depth = node.depth(),
                kind = node.kind(),
                %violation,
                "grammar violation"
            );
            return Err(violation);
        }

        match node {
            AstNode::FunctionDecl { .. } => self.check(node.children()),
            _ => Ok(()),
        }
    }

    /// The node's own rule, without looking into any body statements
    fn check_rule(&self, node: &AstNode) -> Result<(), Violation> {
        match node {
            AstNode::VariableDecl { name, value, .. } => rules::check_variable(name, value),
            AstNode::FunctionDecl {
                name,
                params,
                return_type,
                children,
                ..
            } => rules::check_function(name, params, return_type, children),
            AstNode::ForLoop {
                init, cond, incr, ..
            } => rules::check_for(init, cond, incr),
            AstNode::IfStmt { cond, children, .. } => rules::check_if(cond, children),
            AstNode::ReturnStmt { .. } | AstNode::CodeLine { .. } => Ok(()),
        }
    }
}
