//! Tokenizer and parser for polynomial text such as
//! `A0*A1*B2 - 2*C3*(D0 + D1)^2`.

use flipset_base::{Error, Result};
use std::iter::Peekable;
use std::str::CharIndices;

/// Largest exponent accepted by the parser.
pub const MAX_EXPONENT: u32 = 16;

/// Deepest nesting of parentheses and unary signs accepted by the parser.
pub const MAX_DEPTH: usize = 128;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Int(i64),
    Ident(String),
    Symbol(char), // + - *
    Pow,          // ^ or **
    LParen,
    RParen,
    EOF,
}

pub struct Tokenizer<'a> {
    input: Peekable<CharIndices<'a>>,
    len: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.char_indices().peekable(),
            len: input.len(),
        }
    }

    /// Returns the next token and the byte offset it starts at.
    pub fn next_token(&mut self) -> Result<(usize, Token)> {
        self.skip_whitespace();

        let Some(&(offset, c)) = self.input.peek() else {
            return Ok((self.len, Token::EOF));
        };
        let token = match c {
            '(' => {
                self.input.next();
                Token::LParen
            }
            ')' => {
                self.input.next();
                Token::RParen
            }
            '^' => {
                self.input.next();
                Token::Pow
            }
            '*' => {
                self.input.next();
                if matches!(self.input.peek(), Some(&(_, '*'))) {
                    self.input.next();
                    Token::Pow
                } else {
                    Token::Symbol('*')
                }
            }
            '+' | '-' => {
                self.input.next();
                Token::Symbol(c)
            }
            '0'..='9' => self.parse_int(offset)?,
            'a'..='z' | 'A'..='Z' | '_' => self.parse_ident(),
            _ => {
                return Err(Error::Parse {
                    offset,
                    message: format!("Unexpected character: {c}"),
                })
            }
        };
        Ok((offset, token))
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.input.peek() {
            if c.is_whitespace() {
                self.input.next();
            } else {
                break;
            }
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut s = String::new();
        while let Some(&(_, c)) = self.input.peek() {
            if pred(c) {
                s.push(c);
                self.input.next();
            } else {
                break;
            }
        }
        s
    }

    fn parse_int(&mut self, offset: usize) -> Result<Token> {
        let s = self.take_while(|c| c.is_ascii_digit());
        let val = s.parse::<i64>().map_err(|_| Error::Parse {
            offset,
            message: format!("Integer out of range: {s}"),
        })?;
        Ok(Token::Int(val))
    }

    fn parse_ident(&mut self) -> Token {
        Token::Ident(self.take_while(|c| c.is_alphanumeric() || c == '_'))
    }
}

// AST
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(i64),
    Symbol(String),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, u32),
}

/// Recursive-descent parser.
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := unary ('*' unary)*
/// unary   := ('-' | '+') unary | power
/// power   := primary (('^' | '**') int)?
/// primary := int | ident | '(' expr ')'
/// ```
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current_token: Token,
    offset: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self> {
        let mut tokenizer = Tokenizer::new(input);
        let (offset, current_token) = tokenizer.next_token()?;
        Ok(Self {
            tokenizer,
            current_token,
            offset,
            depth: 0,
        })
    }

    fn advance(&mut self) -> Result<()> {
        let (offset, token) = self.tokenizer.next_token()?;
        self.offset = offset;
        self.current_token = token;
        Ok(())
    }

    fn error<T>(&self, message: impl Into<String>) -> Result<T> {
        Err(Error::Parse {
            offset: self.offset,
            message: message.into(),
        })
    }

    /// Parses the whole input as one expression.
    pub fn parse(&mut self) -> Result<Expr> {
        let expr = self.parse_expr()?;
        if self.current_token != Token::EOF {
            return self.error(format!("Unexpected token: {:?}", self.current_token));
        }
        Ok(expr)
    }

    fn parse_expr(&mut self) -> Result<Expr> {
        let mut left = self.parse_term()?;

        loop {
            match self.current_token {
                Token::Symbol('+') => {
                    self.advance()?;
                    let right = self.parse_term()?;
                    left = Expr::Add(Box::new(left), Box::new(right));
                }
                Token::Symbol('-') => {
                    self.advance()?;
                    let right = self.parse_term()?;
                    left = Expr::Sub(Box::new(left), Box::new(right));
                }
                _ => break,
            }
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr> {
        let mut left = self.parse_unary()?;

        while self.current_token == Token::Symbol('*') {
            self.advance()?;
            let right = self.parse_unary()?;
            left = Expr::Mul(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        // Every '(' and every leading sign passes through here once.
        if self.depth >= MAX_DEPTH {
            return self.error(format!("Nesting deeper than {MAX_DEPTH}"));
        }
        self.depth += 1;
        let expr = match self.current_token {
            Token::Symbol('-') => {
                self.advance()?;
                self.parse_unary().map(|e| Expr::Neg(Box::new(e)))
            }
            Token::Symbol('+') => {
                self.advance()?;
                self.parse_unary()
            }
            _ => self.parse_power(),
        };
        self.depth -= 1;
        expr
    }

    fn parse_power(&mut self) -> Result<Expr> {
        let base = self.parse_primary()?;
        if self.current_token != Token::Pow {
            return Ok(base);
        }
        self.advance()?;
        match self.current_token {
            Token::Int(n) if (0..=i64::from(MAX_EXPONENT)).contains(&n) => {
                self.advance()?;
                // n is at most MAX_EXPONENT
                Ok(Expr::Pow(Box::new(base), n as u32))
            }
            Token::Int(n) => self.error(format!("Exponent {n} exceeds {MAX_EXPONENT}")),
            _ => self.error("Expected integer exponent"),
        }
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        match self.current_token.clone() {
            Token::Int(i) => {
                self.advance()?;
                Ok(Expr::Int(i))
            }
            Token::Ident(s) => {
                self.advance()?;
                Ok(Expr::Symbol(s))
            }
            Token::LParen => {
                self.advance()?;
                let expr = self.parse_expr()?;
                if self.current_token != Token::RParen {
                    return self.error("Expected ')'");
                }
                self.advance()?;
                Ok(expr)
            }
            Token::EOF => self.error("Unexpected end of input"),
            other => self.error(format!("Unexpected token: {other:?}")),
        }
    }
}

/// Parses polynomial text into an expression tree.
pub fn parse(input: &str) -> Result<Expr> {
    Parser::new(input)?.parse()
}
