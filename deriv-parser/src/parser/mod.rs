//! A parser for fully-parenthesized prefix notation.
//!
//! The grammar is:
//!
//! ```text
//! expr := literal | identifier | "(" op expr+ ")"
//! op   := "+" | "-" | "*" | "/" | "^" | "ln" | "log" | "exp" | "sin" | "cos" | "tan"
//! ```
//!
//! `ln` and `log` both spell the natural logarithm; the renderer in `deriv-compute` writes it as
//! `log`, so rendered output can be parsed again.
//!
//! # Algorithm
//!
//! The token stream is walked **right to left** with an explicit operand stack. In prefix
//! notation an operator appears before its operands, so by the time the scan reaches an operator,
//! all of its operands are already on the stack. Leaves (numbers and identifiers) are pushed as
//! they are found; an operator pops as many operands as it takes and pushes the node it builds.
//!
//! Since the leftmost operand was pushed last, the **first** pop is the left operand and the
//! second pop is the right operand. `(- x 3)` therefore parses to `x - 3`, not `3 - x`.
//!
//! Each operator must directly follow an opening parenthesis, and must find exactly as many
//! operands inside its own pair of parentheses as it takes. An empty pair of parentheses is
//! never an expression, wherever it appears. After the scan, exactly one expression must remain
//! on the stack.

pub mod error;
pub mod keyword;

use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use deriv_compute::symbolic::{Expr, ExprKind};
use error::{kind, Error};
use log::debug;
use std::ops::Range;

/// An expression on the operand stack, along with the region of the source code it was parsed
/// from.
#[derive(Debug, Clone, PartialEq)]
struct Operand {
    expr: Expr,
    span: Range<usize>,
}

/// Matches every opening parenthesis to its closing parenthesis.
///
/// Returns a table indexed by token index: the entry for an opening parenthesis is the index of
/// its closing parenthesis, and every other entry is [`None`]. Returns every unbalanced
/// parenthesis as an error.
fn match_parens(tokens: &[Token]) -> Result<Vec<Option<usize>>, Vec<Error>> {
    let mut closing = vec![None; tokens.len()];
    let mut open = Vec::new();
    let mut errors = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::OpenParen => open.push(index),
            TokenKind::CloseParen => match open.pop() {
                Some(start) => closing[start] = Some(index),
                None => errors.push(Error::new(
                    vec![token.span.clone()],
                    kind::UnclosedParenthesis { opening: false },
                )),
            },
            _ => (),
        }
    }

    errors.extend(open.into_iter().map(|start| Error::new(
        vec![tokens[start].span.clone()],
        kind::UnclosedParenthesis { opening: true },
    )));

    if errors.is_empty() {
        Ok(closing)
    } else {
        Err(errors)
    }
}

/// Reports every character that cannot appear in an expression.
fn check_symbols(tokens: &[Token]) -> Vec<Error> {
    tokens.iter()
        .filter(|token| token.kind == TokenKind::Symbol)
        .map(|token| Error::new(vec![token.span.clone()], kind::UnknownSymbol {
            symbol: token.lexeme.to_string(),
        }))
        .collect()
}

/// Reports every pair of parentheses with nothing but whitespace between them.
fn check_empty_groups(tokens: &[Token], closing: &[Option<usize>]) -> Vec<Error> {
    closing.iter()
        .enumerate()
        .filter_map(|(open, close)| Some((open, (*close)?)))
        .filter(|&(open, close)| tokens[open + 1..close].iter().all(Token::is_whitespace))
        .map(|(open, close)| Error::new(
            vec![tokens[open].span.start..tokens[close].span.end],
            kind::EmptyInput,
        ))
        .collect()
}

/// A high-level parser for prefix expressions.
///
/// The parser owns its operand stack, which is cleared at the start of every input, so a single
/// parser can be reused for any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    /// Expressions that have been parsed, but not yet consumed by an operator. The top of the
    /// stack is the leftmost expression seen so far.
    stack: Vec<Operand>,
}

impl Parser {
    /// Creates a new parser with an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a single expression from the given source.
    ///
    /// Returns every error found if the source is not exactly one well-formed expression.
    pub fn parse(&mut self, source: &str) -> Result<Expr, Vec<Error>> {
        self.stack.clear();

        let tokens = tokenize_complete(source);
        let (closing, mut errors) = match match_parens(&tokens) {
            Ok(closing) => {
                let errors = check_empty_groups(&tokens, &closing);
                (closing, errors)
            },
            Err(errors) => (Vec::new(), errors),
        };
        errors.extend(check_symbols(&tokens));
        if !errors.is_empty() {
            return Err(errors);
        }

        for index in (0..tokens.len()).rev() {
            let token = &tokens[index];
            match token.kind {
                TokenKind::NewLine
                | TokenKind::Whitespace
                | TokenKind::OpenParen
                | TokenKind::CloseParen => (),
                TokenKind::Int => self.push_literal(token).map_err(|err| vec![err])?,
                TokenKind::Name | TokenKind::Add | TokenKind::Sub
                | TokenKind::Mul | TokenKind::Div | TokenKind::Exp => {
                    match keyword::lookup(token.lexeme) {
                        Some(op) => self.apply(op, &tokens, index, &closing)
                            .map_err(|err| vec![err])?,
                        None => self.stack.push(Operand {
                            expr: Expr::ident(token.lexeme),
                            span: token.span.clone(),
                        }),
                    }
                },
                // already reported by `check_symbols`
                TokenKind::Symbol => (),
            }
        }

        let expr = self.finish(source)?;
        debug!("parsed `{}` into {}", source, expr);
        Ok(expr)
    }

    /// Parses every non-blank line of the given source as its own expression.
    ///
    /// Returns each line paired with its result, so that errors can be reported against the
    /// line they came from.
    pub fn parse_batch<'a>(&mut self, source: &'a str) -> Vec<(&'a str, Result<Expr, Vec<Error>>)> {
        source.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| (line, self.parse(line)))
            .collect()
    }

    /// Pushes the integer literal in the given token onto the stack.
    fn push_literal(&mut self, token: &Token) -> Result<(), Error> {
        let value = token.lexeme
            .parse::<i64>()
            .map_err(|_| Error::new(vec![token.span.clone()], kind::InvalidLiteral))?;

        self.stack.push(Operand {
            expr: Expr::lit(value as f64),
            span: token.span.clone(),
        });
        Ok(())
    }

    /// Applies the operator at `tokens[index]` to the operands on top of the stack.
    fn apply(
        &mut self,
        op: ExprKind,
        tokens: &[Token],
        index: usize,
        closing: &[Option<usize>],
    ) -> Result<(), Error> {
        let token = &tokens[index];
        let position_error = || Error::new(vec![token.span.clone()], kind::OperatorPosition {
            operator: token.lexeme.to_string(),
        });

        // the operator must be the first thing inside its parentheses
        let open = tokens[..index]
            .iter()
            .rposition(|t| !t.is_whitespace())
            .filter(|&open| tokens[open].kind == TokenKind::OpenParen)
            .ok_or_else(position_error)?;
        let close = closing[open].ok_or_else(position_error)?;
        let group = tokens[open].span.start..tokens[close].span.end;

        // operands inside this pair of parentheses are contiguous at the top of the stack
        let arity = op.arity();
        let found = self.stack.iter()
            .rev()
            .take_while(|operand| operand.span.start < tokens[close].span.start)
            .count();
        let arity_error = || Error::new(vec![token.span.clone()], kind::ArityMismatch {
            operator: token.lexeme.to_string(),
            expected: arity,
            found,
        });
        if found != arity {
            return Err(arity_error());
        }

        // first pop is the left operand, second pop is the right operand
        let mut operands = self.stack
            .split_off(self.stack.len() - arity)
            .into_iter()
            .rev()
            .map(|operand| operand.expr);
        let expr = match (operands.next(), operands.next()) {
            (Some(inner), None) => op.build_unary(inner),
            (Some(left), Some(right)) => op.build_binary(left, right),
            _ => None,
        }
        .ok_or_else(arity_error)?;

        self.stack.push(Operand { expr, span: group });
        Ok(())
    }

    /// Takes the single remaining expression off the stack.
    fn finish(&mut self, source: &str) -> Result<Expr, Vec<Error>> {
        match self.stack.len() {
            0 => Err(vec![Error::new(vec![0..source.len()], kind::EmptyInput)]),
            1 => Ok(self.stack.remove(0).expr),
            len => {
                // the top of the stack is the leftmost expression; everything else is extra
                let spans = self.stack[..len - 1]
                    .iter()
                    .rev()
                    .map(|operand| operand.span.clone())
                    .collect::<Vec<_>>();
                Err(vec![Error::new(spans, kind::ExtraExpression { count: len - 1 })])
            },
        }
    }
}
