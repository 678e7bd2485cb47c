/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node trait, traversal and the expression/statement enums
/// - expressions: Identifiers, integer literals and sums
/// - statements: Statements, statement and declaration lists, and the program root
pub mod ast;
pub mod expressions;
pub mod statements;
