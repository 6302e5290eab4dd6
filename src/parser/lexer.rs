//! Line-oriented lexer for CodeBug source
//!
//! Each non-blank line becomes at most one [`Token`]. Construct headers
//! (`fc`, `for`, `if`) switch the lexer into block-consumption mode: the
//! following lines are captured verbatim into the token's `raw_body` until
//! the matching `}` line. Bodies stay opaque here; the parser lexes them
//! again, one level deeper, when it builds the tree.

use crate::constants::{
    BLOCK_CLOSE, BLOCK_CLOSE_LINE, BLOCK_OPEN, CLAUSE_SEPARATOR, DECL_SEPARATOR, KW_FOR,
    KW_FUNCTION, KW_IF, KW_RETURN, PARAM_SEPARATOR, PAREN_CLOSE, PAREN_OPEN,
};
use std::fmt;
use thiserror::Error;

/// All token variants produced by the lexer.
///
/// Every variant carries the nesting `depth` it was lexed at. The depth is
/// only used for diagnostics; nothing downstream branches on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `name:value`
    VariableDecl {
        name: String,
        value: String,
        depth: usize,
    },
    /// `fc name ( params ) return_type {` followed by its body lines
    FunctionDecl {
        name: String,
        params: Vec<String>,
        return_type: String,
        raw_body: Vec<String>,
        depth: usize,
    },
    /// `for init; cond; incr {` followed by its body lines
    ForLoop {
        init: String,
        cond: String,
        incr: String,
        raw_body: Vec<String>,
        depth: usize,
    },
    /// `if ( cond ) {` followed by its body lines
    IfStmt {
        cond: String,
        raw_body: Vec<String>,
        depth: usize,
    },
    /// `return value`, where value may be blank
    ReturnStmt { value: String, depth: usize },
    /// Any line no other pattern claimed
    CodeLine { text: String, depth: usize },
}

impl Token {
    /// Returns the nesting depth this token was lexed at.
    pub fn depth(&self) -> usize {
        match self {
            Token::VariableDecl { depth, .. }
            | Token::FunctionDecl { depth, .. }
            | Token::ForLoop { depth, .. }
            | Token::IfStmt { depth, .. }
            | Token::ReturnStmt { depth, .. }
            | Token::CodeLine { depth, .. } => *depth,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::VariableDecl { name, .. } => write!(f, "variable declaration '{}'", name),
            Token::FunctionDecl { name, raw_body, .. } => {
                write!(f, "function '{}' ({} body lines)", name, raw_body.len())
            }
            Token::ForLoop { raw_body, .. } => write!(f, "for loop ({} body lines)", raw_body.len()),
            Token::IfStmt { cond, raw_body, .. } => {
                write!(f, "if '{}' ({} body lines)", cond, raw_body.len())
            }
            Token::ReturnStmt { value, .. } => write!(f, "return '{}'", value),
            Token::CodeLine { text, .. } => write!(f, "code line '{}'", text),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// End of input was reached while blocks were still open
    #[error("{open} block(s) still open at end of input")]
    UnterminatedBlock { open: usize },
}

/// Lexer for CodeBug source
pub struct Lexer {
    lines: std::vec::IntoIter<String>,
    depth: usize,
    open_blocks: usize,
}

impl Lexer {
    /// Create a lexer for top-level source.
    pub fn new(input: &str) -> Self {
        Self::with_depth(input, 0)
    }

    /// Create a lexer whose tokens report `depth` as their nesting level.
    pub fn with_depth(input: &str, depth: usize) -> Self {
        let lines: Vec<String> = input.lines().map(normalize).collect();
        Self {
            lines: lines.into_iter(),
            depth,
            open_blocks: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(line) = self.next_line() {
            if let Some(token) = self.classify(&line) {
                tracing::trace!(depth = token.depth(), "lexed {}", token);
                tokens.push(token);
            }
        }

        if self.open_blocks != 0 {
            return Err(LexError::UnterminatedBlock {
                open: self.open_blocks,
            });
        }

        Ok(tokens)
    }

    /// Classify one normalized line by the first word that matches a pattern.
    ///
    /// Returns `None` for a construct header whose boundaries can't be found.
    fn classify(&mut self, line: &str) -> Option<Token> {
        let words: Vec<&str> = line.split(' ').collect();

        for (index, word) in words.iter().enumerate() {
            match *word {
                KW_RETURN => {
                    return Some(Token::ReturnStmt {
                        value: words[index + 1..].join(" "),
                        depth: self.depth,
                    });
                }
                KW_FUNCTION => return self.function_header(line, &words[index + 1..]),
                KW_FOR => return self.for_header(&words[index + 1..]),
                KW_IF => return self.if_header(&words),
                _ => {
                    if let Some((name, value)) = word.split_once(DECL_SEPARATOR) {
                        return Some(Token::VariableDecl {
                            name: name.to_string(),
                            value: value.to_string(),
                            depth: self.depth,
                        });
                    }
                }
            }
        }

        Some(Token::CodeLine {
            text: line.to_string(),
            depth: self.depth,
        })
    }

    /// `fc name ( a, b ) type {`
    fn function_header(&mut self, line: &str, rest: &[&str]) -> Option<Token> {
        let open = line.find(PAREN_OPEN)?;
        let close = line.find(PAREN_CLOSE)?;
        if close < open {
            return None;
        }

        // `fc f(a)` glues the name to the parameter list
        let name = rest
            .first()
            .map_or("", |word| word.split_once(PAREN_OPEN).map_or(*word, |(head, _)| head));

        let inner = &line[open + 1..close];
        let params = if inner.trim().is_empty() {
            Vec::new()
        } else {
            inner
                .split(PARAM_SEPARATOR)
                .map(|param| param.trim().to_string())
                .collect()
        };

        let return_type = line[close + 1..].split_whitespace().next().unwrap_or("");

        let (name, return_type) = (name.to_string(), return_type.to_string());
        let raw_body = self.consume_block();

        Some(Token::FunctionDecl {
            name,
            params,
            return_type,
            raw_body,
            depth: self.depth,
        })
    }

    /// `for init; cond; incr {`
    fn for_header(&mut self, rest: &[&str]) -> Option<Token> {
        let header = rest.join(" ");
        let clauses = header.split(BLOCK_OPEN).next().unwrap_or("");

        let mut parts = clauses.splitn(3, CLAUSE_SEPARATOR);
        let init = parts.next()?.trim().to_string();
        let cond = parts.next()?.trim().to_string();
        let incr = parts
            .next()?
            .trim()
            .trim_end_matches(|c: char| c == BLOCK_OPEN || c == BLOCK_CLOSE)
            .trim()
            .to_string();

        let raw_body = self.consume_block();

        Some(Token::ForLoop {
            init,
            cond,
            incr,
            raw_body,
            depth: self.depth,
        })
    }

    /// `if ( cond ) {`
    fn if_header(&mut self, words: &[&str]) -> Option<Token> {
        let open = words.iter().position(|word| word.contains(PAREN_OPEN))?;
        let close = words.iter().position(|word| word.contains(PAREN_CLOSE))?;

        // `if (x>1) {` has both parens in one word, leaving nothing between
        let cond = words
            .get(open + 1..close)
            .map(|inner| inner.join(" "))
            .unwrap_or_default();

        let raw_body = self.consume_block();

        Some(Token::IfStmt {
            cond,
            raw_body,
            depth: self.depth,
        })
    }

    /// Capture lines up to the `}` that closes the block just opened.
    ///
    /// Nested headers (lines ending in `{`) and their closing lines are kept
    /// in the body. If input runs out first, `open_blocks` stays raised and
    /// [`Lexer::tokenize`] reports the block as unterminated.
    fn consume_block(&mut self) -> Vec<String> {
        self.open_blocks += 1;
        let floor = self.open_blocks - 1;
        let mut body = Vec::new();

        while let Some(line) = self.next_line() {
            if line == BLOCK_CLOSE_LINE {
                self.open_blocks -= 1;
                if self.open_blocks == floor {
                    return body;
                }
            } else if line.ends_with(BLOCK_OPEN) {
                self.open_blocks += 1;
            }
            body.push(line);
        }

        body
    }

    /// Next non-blank line, already normalized
    fn next_line(&mut self) -> Option<String> {
        self.lines.find(|line| !line.is_empty())
    }
}

/// Collapse whitespace runs to single spaces and trim.
fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Tokenize `text` at top level.
pub fn lex(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(text).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_declaration() {
        let tokens = lex("variable:20").unwrap();

        assert_eq!(
            tokens,
            vec![Token::VariableDecl {
                name: "variable".to_string(),
                value: "20".to_string(),
                depth: 0,
            }]
        );
    }

    #[test]
    fn test_variable_splits_on_first_colon() {
        let tokens = lex("a:b:c").unwrap();

        assert!(matches!(
            &tokens[0],
            Token::VariableDecl { name, value, .. } if name == "a" && value == "b:c"
        ));
    }

    #[test]
    fn test_function_header() {
        let tokens = lex("fc Suma ( param1, param2 ) int {\n\treturn 20\n}").unwrap();

        assert_eq!(tokens.len(), 1);
        match &tokens[0] {
            Token::FunctionDecl {
                name,
                params,
                return_type,
                raw_body,
                ..
            } => {
                assert_eq!(name, "Suma");
                assert_eq!(params, &vec!["param1".to_string(), "param2".to_string()]);
                assert_eq!(return_type, "int");
                assert_eq!(raw_body, &vec!["return 20".to_string()]);
            }
            other => panic!("Expected function declaration, got {}", other),
        }
    }

    #[test]
    fn test_function_name_glued_to_params() {
        let tokens = lex("fc f(a) int {\n\treturn 1\n}").unwrap();

        match &tokens[0] {
            Token::FunctionDecl {
                name,
                params,
                return_type,
                ..
            } => {
                assert_eq!(name, "f");
                assert_eq!(params, &vec!["a".to_string()]);
                assert_eq!(return_type, "int");
            }
            other => panic!("Expected function declaration, got {}", other),
        }
    }

    #[test]
    fn test_for_header() {
        let tokens = lex("for 0; i<10; 1++ {\n\treturn 20\n}").unwrap();

        match &tokens[0] {
            Token::ForLoop {
                init, cond, incr, ..
            } => {
                assert_eq!(init, "0");
                assert_eq!(cond, "i<10");
                assert_eq!(incr, "1++");
            }
            other => panic!("Expected for loop, got {}", other),
        }
    }

    #[test]
    fn test_if_header() {
        let tokens = lex("if ( x>10 ) {\n\treturn 20\n}").unwrap();

        match &tokens[0] {
            Token::IfStmt { cond, raw_body, .. } => {
                assert_eq!(cond, "x>10");
                assert_eq!(raw_body.len(), 1);
            }
            other => panic!("Expected if statement, got {}", other),
        }
    }

    #[test]
    fn test_if_without_parens_is_dropped() {
        let tokens = lex("if x {").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_return_value_is_rest_of_line() {
        let tokens = lex("return a + b").unwrap();
        assert!(matches!(&tokens[0], Token::ReturnStmt { value, .. } if value == "a + b"));

        let tokens = lex("return").unwrap();
        assert!(matches!(&tokens[0], Token::ReturnStmt { value, .. } if value.is_empty()));
    }

    #[test]
    fn test_first_pattern_wins() {
        let tokens = lex("return x:1").unwrap();
        assert!(matches!(tokens[0], Token::ReturnStmt { .. }));

        let tokens = lex("x:1 return").unwrap();
        assert!(matches!(tokens[0], Token::VariableDecl { .. }));
    }

    #[test]
    fn test_code_line_and_blank_lines() {
        let tokens = lex("\n   print   hello  \n\n").unwrap();

        assert_eq!(
            tokens,
            vec![Token::CodeLine {
                text: "print hello".to_string(),
                depth: 0,
            }]
        );
    }

    #[test]
    fn test_nested_body_kept_verbatim() {
        let source = "fc f ( a ) int {\n for 0; i; 1++ {\n  return 1\n }\n return 2\n}\nx:1";
        let tokens = lex(source).unwrap();

        assert_eq!(tokens.len(), 2);
        let Token::FunctionDecl { raw_body, .. } = &tokens[0] else {
            panic!("expected a function, got {}", tokens[0]);
        };
        assert_eq!(
            raw_body,
            &[
                "for 0; i; 1++ {".to_string(),
                "return 1".to_string(),
                "}".to_string(),
                "return 2".to_string(),
            ]
        );
        assert!(matches!(tokens[1], Token::VariableDecl { .. }));
    }

    #[test]
    fn test_unterminated_block() {
        let err = lex("if ( x>1 ) {\n return 1 }").unwrap_err();
        assert_eq!(err, LexError::UnterminatedBlock { open: 1 });
    }

    #[test]
    fn test_depth_is_reported() {
        let tokens = Lexer::with_depth("x:1", 3).tokenize().unwrap();
        assert_eq!(tokens[0].depth(), 3);
    }
}
