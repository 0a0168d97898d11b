//! slang_ast: Token and syntax-tree data types for the slang language.
//!
//! The scanner produces [`Token`]s classified by [`TokenKind`]. The
//! [`Expr`] sum type is the shape a future parser will build.

pub mod expr;
pub mod token;
pub mod token_kind;

pub use expr::Expr;
pub use token::{LiteralValue, Token};
pub use token_kind::{TokenKind, RESERVED_WORDS};
