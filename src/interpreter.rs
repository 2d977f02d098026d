/// The evaluator module reduces a tree to an integer.
///
/// The evaluator walks the tree depth-first, applies prefix signs and checked
/// binary arithmetic, and reports division by zero and overflow.
pub mod evaluator;
/// The lexer module tokenizes an input line for the parser.
///
/// # Responsibilities
/// - Converts the input text into tokens carrying their kind, literal value
///   and byte offset.
/// - Skips whitespace and reports characters outside the alphabet.
/// - Keeps returning the end-of-input token once the line is exhausted.
pub mod lexer;
/// The parser module builds the tree from tokens.
///
/// # Responsibilities
/// - Implements the expression grammar by recursive descent with one token of
///   lookahead.
/// - Encodes precedence and associativity in the shape of the tree.
/// - Reports the expected and found token kinds on any grammar violation.
pub mod parser;
