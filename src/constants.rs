// Fixed lexical surface of the CodeBug language

/// Function declaration keyword: `fc name ( params ) type {`
pub const KW_FUNCTION: &str = "fc";

/// Loop keyword: `for init; cond; incr {`
pub const KW_FOR: &str = "for";

/// Conditional keyword: `if ( cond ) {`
pub const KW_IF: &str = "if";

/// Return keyword, valid anywhere a statement is
pub const KW_RETURN: &str = "return";

/// Separates a variable name from its value: `name:value`
pub const DECL_SEPARATOR: char = ':';

/// Separates the three clauses of a for-loop header
pub const CLAUSE_SEPARATOR: char = ';';

/// Separates function parameters
pub const PARAM_SEPARATOR: char = ',';

pub const BLOCK_OPEN: char = '{';
pub const BLOCK_CLOSE: char = '}';
pub const PAREN_OPEN: char = '(';
pub const PAREN_CLOSE: char = ')';

/// Minimum number of `;`-separated segments on a `for` line
/// (init, condition, increment plus the opening brace)
pub const FOR_CLAUSE_COUNT: usize = 3;

/// Return types a function may declare
pub const RETURN_TYPES: [&str; 3] = ["int", "float", "string"];

/// Comparison operators accepted in an `if` condition.
/// Two-character operators come first so `<=` is never read as `<`.
pub const COMPARISON_OPERATORS: [&str; 6] = ["==", "!=", "<=", ">=", "<", ">"];

/// A line consisting of exactly this text closes the innermost open block
pub const BLOCK_CLOSE_LINE: &str = "}";
