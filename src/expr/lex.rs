//! Tokenizer for infix expressions.

use super::eval::OperatorTyp;
use super::stdlib;
use core::{fmt, iter::Peekable, str::CharIndices};
use std::collections::VecDeque;
use thiserror::Error;

/// Byte range into the expression source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
}

impl Span {
    /// Create a span.
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One-past-the-end byte offset.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Slice the spanned text out of `src`.
    pub fn get<'a>(&self, src: &'a str) -> &'a str {
        src.get(self.start..self.end()).unwrap_or("")
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// Token kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokTyp {
    /// Run of letters naming a constant, function or the variable.
    Ident,
    /// Numeric literal.
    Number,
    /// Binary operator other than `-`.
    Op(OperatorTyp),
    /// `-`, either negation or subtraction depending on position.
    Minus,
    /// Argument separator.
    Comma,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
}

/// A token and where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tok {
    /// Token kind.
    pub typ: TokTyp,
    /// Source location.
    pub span: Span,
}

/// What went wrong while tokenizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrTyp {
    /// Character that is never valid in an expression.
    #[error("invalid character '{0}'")]
    InvalidChar(char),
    /// Character that belongs to notation this plotter does not handle.
    #[error("unsupported character '{0}'")]
    Unsupported(char),
}

/// Tokenizer error with location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{typ} at {span}")]
pub struct LexErr {
    /// Error kind.
    pub typ: LexErrTyp,
    /// Offending character.
    pub span: Span,
}

/// Streaming tokenizer. Stops yielding after the first error.
#[derive(Debug)]
pub struct Lexer<'src> {
    src: &'src str,
    cur: Peekable<CharIndices<'src>>,
    pending: VecDeque<Tok>,
    has_errored: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer over `src`.
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            cur: src.char_indices().peekable(),
            pending: VecDeque::new(),
            has_errored: false,
        }
    }

    fn trim_whitespace(&mut self) {
        while let Some((_, chr)) = self.cur.peek() {
            if chr.is_whitespace() {
                self.cur.next();
            } else {
                break;
            }
        }
    }

    fn consume_unambiguous(&mut self) -> Option<Result<Tok, LexErr>> {
        let (idx, chr) = self.cur.peek().copied()?;
        let typ = match chr {
            '+' => Ok(TokTyp::Op(OperatorTyp::Add)),
            '-' => Ok(TokTyp::Minus),
            '*' => Ok(TokTyp::Op(OperatorTyp::Mul)),
            '/' => Ok(TokTyp::Op(OperatorTyp::Div)),
            '^' => Ok(TokTyp::Op(OperatorTyp::Exp)),
            ',' => Ok(TokTyp::Comma),
            '(' => Ok(TokTyp::OpenParen),
            ')' => Ok(TokTyp::CloseParen),
            '>' | '<' | '=' | '|' | '[' | ']' | '{' | '}' => Err(LexErrTyp::Unsupported(chr)),
            _ => return None,
        };
        self.cur.next();
        let span = Span::new(idx, chr.len_utf8());
        Some(
            typ.map(|typ| Tok { typ, span })
                .map_err(|typ| LexErr { typ, span }),
        )
    }

    fn consume_while<P>(&mut self, start: usize, predicate: P) -> Span
    where
        P: Fn(char) -> bool,
    {
        let mut span = Span::new(start, 0);
        while let Some((_, chr)) = self.cur.peek().copied() {
            if predicate(chr) {
                span.len += chr.len_utf8();
                self.cur.next();
            } else {
                break;
            }
        }
        span
    }

    /// Split a run of letters into known names.
    ///
    /// A run that is itself a known name stays whole. Otherwise the longest
    /// known prefix is taken repeatedly, falling back to a single letter, so
    /// `pix` lexes as `pi x` and `xx` as `x x`.
    fn split_ident(&mut self, span: Span) {
        let text = span.get(self.src);
        if stdlib::lookup(text).is_some() {
            self.pending.push_back(Tok {
                typ: TokTyp::Ident,
                span,
            });
            return;
        }

        let mut offset = 0;
        while offset < text.len() {
            let rest = &text[offset..];
            let len = (2..=rest.len())
                .rev()
                .find(|&n| stdlib::lookup(&rest[..n]).is_some())
                .unwrap_or(1);
            self.pending.push_back(Tok {
                typ: TokTyp::Ident,
                span: Span::new(span.start + offset, len),
            });
            offset += len;
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Tok, LexErr>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(tok) = self.pending.pop_front() {
            return Some(Ok(tok));
        }
        if self.has_errored {
            return None;
        }

        self.trim_whitespace();

        let (next_idx, next_chr) = self.cur.peek().copied()?;
        let ret = if let Some(res) = self.consume_unambiguous() {
            res
        } else if next_chr.is_ascii_alphabetic() {
            let span = self.consume_while(next_idx, |chr| chr.is_ascii_alphabetic());
            self.split_ident(span);
            return self.pending.pop_front().map(Ok);
        } else if next_chr.is_ascii_digit() || next_chr == '.' {
            let span = self.consume_while(next_idx, |chr| chr.is_ascii_digit() || chr == '.');
            Ok(Tok {
                typ: TokTyp::Number,
                span,
            })
        } else {
            self.cur.next();
            Err(LexErr {
                typ: LexErrTyp::InvalidChar(next_chr),
                span: Span::new(next_idx, next_chr.len_utf8()),
            })
        };

        if ret.is_err() {
            self.has_errored = true;
        }
        Some(ret)
    }
}

