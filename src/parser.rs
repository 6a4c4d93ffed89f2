//! Recursive-descent parser for propositional expressions.
//!
//! Grammar, lowest to highest precedence:
//!
//! ```text
//! iff         := implication ( IFF implication )*       (left-associative)
//! implication := disjunction ( IMPLIES implication )?   (right-associative)
//! disjunction := conjunction ( OR conjunction )*
//! conjunction := unary ( AND unary )*
//! unary       := NOT unary | primary
//! primary     := VARIABLE | '(' iff ')'
//! ```
//!
//! `IMPLIES` is right-associative, matching the standard logical convention:
//! `A IMPLIES B IMPLIES C` parses as `A IMPLIES (B IMPLIES C)`. `IFF` is
//! left-associative; since the biconditional is associative and commutative over
//! booleans, the grouping does not change the resulting truth value.

use log::debug;

use crate::error::{ExprError, ParseError};
use crate::expr::Expr;
use crate::token::{tokenize, Lexeme, Token};

/// Parses `input` into an [`Expr`]. This is the sole ingestion point of the crate.
///
/// The input is tokenized, parsed, and checked for trailing tokens. Both lexing and
/// parsing failures are returned as typed errors; they are never collapsed into a
/// generic failure or a default result.
pub fn parse(input: &str) -> Result<Expr, ExprError> {
    let lexemes = tokenize(input)?;
    let mut parser = Parser { lexemes, index: 0 };
    let expr = parser.iff()?;
    parser.finish()?;
    debug!("parsed {:?} into {}", input, expr);
    Ok(expr)
}

struct Parser {
    lexemes: Vec<Lexeme>,
    index: usize,
}

impl Parser {
    fn peek(&self) -> &Lexeme {
        // The End lexeme is never consumed, so the index stays in bounds.
        &self.lexemes[self.index]
    }

    fn advance(&mut self) -> Lexeme {
        let lexeme = self.lexemes[self.index].clone();
        if lexeme.token != Token::End {
            self.index += 1;
        }
        lexeme
    }

    fn eat(&mut self, token: &Token) -> bool {
        if &self.peek().token == token {
            self.advance();
            true
        } else {
            false
        }
    }

    fn iff(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.implication()?;
        while self.eat(&Token::Iff) {
            let rhs = self.implication()?;
            expr = Expr::iff(expr, rhs);
        }
        Ok(expr)
    }

    fn implication(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.disjunction()?;
        if self.eat(&Token::Implies) {
            let rhs = self.implication()?;
            Ok(Expr::implies(lhs, rhs))
        } else {
            Ok(lhs)
        }
    }

    fn disjunction(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.conjunction()?;
        while self.eat(&Token::Or) {
            let rhs = self.conjunction()?;
            expr = Expr::or(expr, rhs);
        }
        Ok(expr)
    }

    fn conjunction(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        while self.eat(&Token::And) {
            let rhs = self.unary()?;
            expr = Expr::and(expr, rhs);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Not) {
            let operand = self.unary()?;
            Ok(Expr::not(operand))
        } else {
            self.primary()
        }
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let lexeme = self.peek().clone();
        match lexeme.token {
            Token::Var(name) => {
                self.advance();
                Ok(Expr::Var(name))
            }
            Token::LParen => {
                let open = self.advance();
                let expr = self.iff()?;
                if self.eat(&Token::RParen) {
                    Ok(expr)
                } else {
                    Err(ParseError::UnmatchedParenthesis { pos: open.pos })
                }
            }
            Token::End if self.index == 0 => Err(ParseError::EmptyExpression),
            ref token => Err(ParseError::UnexpectedToken {
                found: token.describe(),
                expected: "a variable, NOT, or '('",
                pos: lexeme.pos,
            }),
        }
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        let lexeme = self.peek();
        match lexeme.token {
            Token::End => Ok(()),
            ref token => Err(ParseError::TrailingInput {
                found: token.describe(),
                pos: lexeme.pos,
            }),
        }
    }
}
