//! Expression syntax tree.
//!
//! Operations over expressions are written as exhaustive matches on
//! [`Expr`]; adding a variant makes every such match fail to compile until
//! it is handled.

use crate::token::{LiteralValue, Token};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Grouping(Box<Expr>),
    /// `None` is `nil`.
    Literal(Option<LiteralValue>),
    Unary {
        operator: Token,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn number(value: f64) -> Self {
        Expr::Literal(Some(LiteralValue::Number(value)))
    }

    /// Number of nodes in this tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Expr::Grouping(inner) => 1 + inner.node_count(),
            Expr::Literal(_) => 1,
            Expr::Unary { right, .. } => 1 + right.node_count(),
        }
    }
}

/// Prints the tree in fully parenthesized prefix form, e.g. `(* (- 1) (group 2))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", operator.lexeme, left, right),
            Expr::Grouping(inner) => write!(f, "(group {})", inner),
            Expr::Literal(None) => f.write_str("nil"),
            Expr::Literal(Some(value)) => write!(f, "{}", value),
            Expr::Unary { operator, right } => write!(f, "({} {})", operator.lexeme, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_kind::TokenKind;
    use slang_core::text::TextRange;

    fn op(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, 1, TextRange::default())
    }

    #[test]
    fn test_print_nested_expression() {
        let expr = Expr::binary(
            Expr::unary(op(TokenKind::Minus, "-"), Expr::number(123.0)),
            op(TokenKind::Star, "*"),
            Expr::grouping(Expr::number(45.67)),
        );
        assert_eq!(expr.to_string(), "(* (- 123.0) (group 45.67))");
        assert_eq!(expr.node_count(), 5);
    }

    #[test]
    fn test_print_literals() {
        assert_eq!(Expr::Literal(None).to_string(), "nil");
        assert_eq!(
            Expr::Literal(Some(LiteralValue::Str("hi".into()))).to_string(),
            "hi"
        );
    }
}
