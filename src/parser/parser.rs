//! Tree builder
//!
//! Turns the flat token stream into a [`Program`]. Leaf tokens map one to
//! one onto nodes. Block tokens get their `raw_body` lexed and parsed again
//! in a fresh call, one level deeper, so every container builds its
//! children in its own stack frame and nothing leaks between siblings.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Lexing a nested block body failed
    #[error("in block at depth {depth}: {source}")]
    Block {
        depth: usize,
        #[source]
        source: LexError,
    },
    /// Lexing the top-level source failed
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Recursive tree builder for CodeBug tokens
pub struct Parser {
    tokens: std::vec::IntoIter<Token>,
}

impl Parser {
    /// Lex `source` and prepare to parse it.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self::from_tokens(tokens))
    }

    /// Parse an already-lexed token stream.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }

    /// Parse the entire program: one node per token, in order
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        for token in self.tokens.by_ref() {
            program.nodes.push(parse_token(token)?);
        }

        Ok(program)
    }
}

fn parse_token(token: Token) -> Result<AstNode, ParseError> {
    let node = match token {
        Token::VariableDecl { name, value, depth } => AstNode::VariableDecl { name, value, depth },
        Token::ReturnStmt { value, depth } => AstNode::ReturnStmt { value, depth },
        Token::CodeLine { text, depth } => AstNode::CodeLine { text, depth },
        Token::FunctionDecl {
            name,
            params,
            return_type,
            raw_body,
            depth,
        } => AstNode::FunctionDecl {
            name,
            params,
            return_type,
            children: parse_block(&raw_body, depth)?,
            depth,
        },
        Token::ForLoop {
            init,
            cond,
            incr,
            raw_body,
            depth,
        } => AstNode::ForLoop {
            init,
            cond,
            incr,
            children: parse_block(&raw_body, depth)?,
            depth,
        },
        Token::IfStmt {
            cond,
            raw_body,
            depth,
        } => AstNode::IfStmt {
            cond,
            children: parse_block(&raw_body, depth)?,
            depth,
        },
    };

    Ok(node)
}

/// Lex and parse a block body as its own program, one level below `depth`.
fn parse_block(raw_body: &[String], depth: usize) -> Result<Vec<AstNode>, ParseError> {
    let child_depth = depth + 1;
    let tokens = Lexer::with_depth(&raw_body.join("\n"), child_depth)
        .tokenize()
        .map_err(|source| ParseError::Block {
            depth: child_depth,
            source,
        })?;

    tracing::trace!(depth = child_depth, tokens = tokens.len(), "parsing block");

    let program = Parser::from_tokens(tokens).parse_program()?;
    Ok(program.nodes)
}

/// Build the tree for `tokens`; output has one node per input token.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<AstNode>, ParseError> {
    Parser::from_tokens(tokens)
        .parse_program()
        .map(|program| program.nodes)
}
