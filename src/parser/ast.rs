// AST (Abstract Syntax Tree) definitions for CodeBug programs

/// Tree node mirroring [`Token`](super::lexer::Token), with block bodies
/// resolved into owned children.
///
/// A node owns its children outright. There are no parent links and no
/// sharing between siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    VariableDecl {
        name: String,
        value: String,
        depth: usize,
    },
    FunctionDecl {
        name: String,
        params: Vec<String>,
        return_type: String,
        children: Vec<AstNode>,
        depth: usize,
    },
    ForLoop {
        init: String,
        cond: String,
        incr: String,
        children: Vec<AstNode>,
        depth: usize,
    },
    IfStmt {
        cond: String,
        children: Vec<AstNode>,
        depth: usize,
    },
    ReturnStmt {
        value: String,
        depth: usize,
    },
    CodeLine {
        text: String,
        depth: usize,
    },
}

impl AstNode {
    /// Get the nesting depth of this node
    pub fn depth(&self) -> usize {
        match self {
            AstNode::VariableDecl { depth, .. } => *depth,
            AstNode::FunctionDecl { depth, .. } => *depth,
            AstNode::ForLoop { depth, .. } => *depth,
            AstNode::IfStmt { depth, .. } => *depth,
            AstNode::ReturnStmt { depth, .. } => *depth,
            AstNode::CodeLine { depth, .. } => *depth,
        }
    }

    /// Children of a block construct; empty for everything else
    pub fn children(&self) -> &[AstNode] {
        match self {
            AstNode::FunctionDecl { children, .. }
            | AstNode::ForLoop { children, .. }
            | AstNode::IfStmt { children, .. } => children,
            _ => &[],
        }
    }

    /// Short construct name, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            AstNode::VariableDecl { .. } => "variable declaration",
            AstNode::FunctionDecl { .. } => "function declaration",
            AstNode::ForLoop { .. } => "for loop",
            AstNode::IfStmt { .. } => "if statement",
            AstNode::ReturnStmt { .. } => "return statement",
            AstNode::CodeLine { .. } => "code line",
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub nodes: Vec<AstNode>, // Top-level statements, in source order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}
