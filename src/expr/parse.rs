//! Infix to postfix compilation.
//!
//! This is the shunting yard algorithm (see
//! <https://en.wikipedia.org/wiki/Shunting_yard_algorithm>) extended with
//! unary minus, implicit multiplication and call arity checks. Every error a
//! program could hit on the evaluator's stack is caught here instead, so a
//! program that compiles can only fail at evaluation with a non-finite result.

use super::{
    eval::{Associativity, Fun, Operation, OperationTyp, OperatorTyp, Program},
    lex::{LexErr, LexErrTyp, Lexer, Span, TokTyp},
    stdlib::{self, Ident},
};
use core::num::ParseFloatError;
use thiserror::Error;

/// What went wrong while compiling.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrTyp {
    /// Tokenizer rejected a character.
    #[error("{0}")]
    LexErr(LexErrTyp),
    /// Digits and dots that are not a number, e.g. `1.2.3`.
    #[error("invalid number: {0}")]
    ParseNum(ParseFloatError),
    /// `(` without `)` or the reverse.
    #[error("mismatched parentheses")]
    ParenMismatch,
    /// Operator with nothing to apply to, e.g. `2x^`.
    #[error("operator is missing an operand")]
    MissingOperand,
    /// Comma outside a function call.
    #[error("unexpected ','")]
    UnexpectedComma,
    /// Nothing to evaluate.
    #[error("empty expression")]
    Empty,
    /// Name that is neither the variable, a constant nor a function.
    #[error("undefined identifier '{0}'")]
    UnknownIdent(String),
    /// Function name not followed by `(`.
    #[error("function '{0}' must be called with parentheses")]
    MissingCall(&'static str),
    /// Call with the wrong number of arguments.
    #[error("function '{name}' takes {arity} argument(s), but {found} were given")]
    Arity {
        /// Function name.
        name: &'static str,
        /// Arguments it takes.
        arity: usize,
        /// Arguments passed.
        found: usize,
    },
}

/// Compile error with location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{typ}")]
pub struct ParseErr {
    /// Error kind.
    pub typ: ParseErrTyp,
    /// Where in the source.
    pub span: Span,
}

impl ParseErr {
    fn new(typ: ParseErrTyp, span: Span) -> Self {
        Self { typ, span }
    }

    /// 1-based character column of the error in `src`.
    pub fn column(&self, src: &str) -> usize {
        src.get(..self.span.start)
            .map(|head| head.chars().count())
            .unwrap_or(0)
            + 1
    }
}

impl From<LexErr> for ParseErr {
    fn from(err: LexErr) -> Self {
        Self::new(ParseErrTyp::LexErr(err.typ), err.span)
    }
}

#[derive(Clone, Copy, Debug)]
enum ShuntOpTyp {
    Operator(OperatorTyp),
    Fun(&'static str, Fun),
    OpenParen { args: usize },
}

#[derive(Clone, Copy, Debug)]
struct ShuntOp {
    typ: ShuntOpTyp,
    span: Span,
}

impl ShuntOp {
    fn into_output(self) -> Option<Operation> {
        let (typ, name) = match self.typ {
            ShuntOpTyp::Operator(op) => {
                let (name, fun) = op.fun();
                (OperationTyp::Call(fun), name)
            }
            ShuntOpTyp::Fun(name, fun) => (OperationTyp::Call(fun), name),
            ShuntOpTyp::OpenParen { .. } => return None,
        };
        Some(Operation {
            typ,
            name,
            span: self.span,
        })
    }
}

/// What the previous token leaves the parser expecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Prev {
    /// Start of input, after `(` or after `,`.
    Start,
    /// A complete operand: number, name or `)`.
    Operand,
    /// A prefix or infix operator.
    Operator(Span),
    /// A function name, which must be followed by `(`.
    Function(&'static str, Span),
}

#[derive(Debug, Default)]
struct Shunt {
    out: Vec<Operation>,
    ops: Vec<ShuntOp>,
}

impl Shunt {
    fn push_binary(&mut self, o1: OperatorTyp, span: Span) {
        while let Some(&o2) = self.ops.last() {
            let ShuntOpTyp::Operator(o2_typ) = o2.typ else {
                break;
            };
            if (o2_typ.precedence() > o1.precedence())
                || ((o1.precedence() == o2_typ.precedence())
                    && (o1.associativity() == Associativity::Left))
            {
                self.ops.pop();
                self.out.extend(o2.into_output());
            } else {
                break;
            }
        }
        self.ops.push(ShuntOp {
            typ: ShuntOpTyp::Operator(o1),
            span,
        });
    }

    /// Pop operators until the nearest `(`, leaving it on the stack.
    fn drain_to_paren(&mut self) {
        while let Some(&op) = self.ops.last() {
            if let ShuntOpTyp::OpenParen { .. } = op.typ {
                break;
            }
            self.ops.pop();
            self.out.extend(op.into_output());
        }
    }

    fn push_operand(&mut self, op: Operation, prev: &mut Prev) -> Result<(), ParseErr> {
        self.before_operand(op.span, *prev)?;
        self.out.push(op);
        *prev = Prev::Operand;
        Ok(())
    }

    /// Insert `*` between adjacent operands.
    fn before_operand(&mut self, span: Span, prev: Prev) -> Result<(), ParseErr> {
        match prev {
            Prev::Operand => {
                self.push_binary(OperatorTyp::Mul, Span::new(span.start, 0));
                Ok(())
            }
            Prev::Function(name, at) => Err(ParseErr::new(ParseErrTyp::MissingCall(name), at)),
            Prev::Start | Prev::Operator(_) => Ok(()),
        }
    }
}

/// Compile a token stream into a postfix program.
pub fn parse(src: &str, lex: Lexer<'_>) -> Result<Program, ParseErr> {
    let mut shunt = Shunt::default();
    let mut prev = Prev::Start;

    for tok in lex {
        let tok = tok?;
        match tok.typ {
            TokTyp::Number => {
                let text = tok.span.get(src);
                let num: f64 = text
                    .parse()
                    .map_err(|err| ParseErr::new(ParseErrTyp::ParseNum(err), tok.span))?;
                shunt.push_operand(
                    Operation {
                        typ: OperationTyp::Val(num),
                        name: "literal",
                        span: tok.span,
                    },
                    &mut prev,
                )?;
            }

            TokTyp::Ident => {
                let text = tok.span.get(src);
                let Some((name, ident)) = stdlib::lookup(text) else {
                    return Err(ParseErr::new(
                        ParseErrTyp::UnknownIdent(text.to_string()),
                        tok.span,
                    ));
                };
                let typ = match ident {
                    Ident::Var => OperationTyp::Var,
                    Ident::Const(val) => OperationTyp::Val(val),
                    Ident::Fun(fun) => {
                        shunt.before_operand(tok.span, prev)?;
                        shunt.ops.push(ShuntOp {
                            typ: ShuntOpTyp::Fun(name, fun),
                            span: tok.span,
                        });
                        prev = Prev::Function(name, tok.span);
                        continue;
                    }
                };
                shunt.push_operand(
                    Operation {
                        typ,
                        name,
                        span: tok.span,
                    },
                    &mut prev,
                )?;
            }

            TokTyp::Minus => match prev {
                Prev::Operand => {
                    shunt.push_binary(OperatorTyp::Sub, tok.span);
                    prev = Prev::Operator(tok.span);
                }
                Prev::Start | Prev::Operator(_) => {
                    // prefix: binds to what follows, so never pops
                    shunt.ops.push(ShuntOp {
                        typ: ShuntOpTyp::Operator(OperatorTyp::Neg),
                        span: tok.span,
                    });
                    prev = Prev::Operator(tok.span);
                }
                Prev::Function(name, at) => {
                    return Err(ParseErr::new(ParseErrTyp::MissingCall(name), at));
                }
            },

            TokTyp::Op(o1) => match prev {
                Prev::Operand => {
                    shunt.push_binary(o1, tok.span);
                    prev = Prev::Operator(tok.span);
                }
                // unary plus is a no-op
                Prev::Start | Prev::Operator(_) if o1 == OperatorTyp::Add => {}
                Prev::Function(name, at) => {
                    return Err(ParseErr::new(ParseErrTyp::MissingCall(name), at));
                }
                Prev::Start | Prev::Operator(_) => {
                    return Err(ParseErr::new(ParseErrTyp::MissingOperand, tok.span));
                }
            },

            TokTyp::OpenParen => {
                if let Prev::Operand = prev {
                    shunt.before_operand(tok.span, prev)?;
                }
                shunt.ops.push(ShuntOp {
                    typ: ShuntOpTyp::OpenParen { args: 0 },
                    span: tok.span,
                });
                prev = Prev::Start;
            }

            TokTyp::Comma => {
                expect_operand(prev, tok.span)?;
                shunt.drain_to_paren();
                let len = shunt.ops.len();
                let in_call = len >= 2 && matches!(shunt.ops[len - 2].typ, ShuntOpTyp::Fun(..));
                match shunt.ops.last_mut() {
                    Some(ShuntOp {
                        typ: ShuntOpTyp::OpenParen { args },
                        ..
                    }) if in_call => *args += 1,
                    _ => return Err(ParseErr::new(ParseErrTyp::UnexpectedComma, tok.span)),
                }
                prev = Prev::Start;
            }

            TokTyp::CloseParen => {
                expect_operand(prev, tok.span)?;
                shunt.drain_to_paren();
                let args = match shunt.ops.pop() {
                    Some(ShuntOp {
                        typ: ShuntOpTyp::OpenParen { args },
                        ..
                    }) => args + 1,
                    _ => return Err(ParseErr::new(ParseErrTyp::ParenMismatch, tok.span)),
                };

                // handle functions
                if let Some(&ShuntOp {
                    typ: ShuntOpTyp::Fun(name, fun),
                    span,
                }) = shunt.ops.last()
                {
                    if args != fun.arity() {
                        return Err(ParseErr::new(
                            ParseErrTyp::Arity {
                                name,
                                arity: fun.arity(),
                                found: args,
                            },
                            span,
                        ));
                    }
                    if let Some(op) = shunt.ops.pop() {
                        shunt.out.extend(op.into_output());
                    }
                }
                prev = Prev::Operand;
            }
        }
    }

    match prev {
        Prev::Operand => {}
        Prev::Start if shunt.out.is_empty() && shunt.ops.is_empty() => {
            return Err(ParseErr::new(ParseErrTyp::Empty, Span::new(src.len(), 0)));
        }
        Prev::Start => {}
        Prev::Operator(at) => return Err(ParseErr::new(ParseErrTyp::MissingOperand, at)),
        Prev::Function(name, at) => {
            return Err(ParseErr::new(ParseErrTyp::MissingCall(name), at));
        }
    }

    while let Some(op) = shunt.ops.pop() {
        if let ShuntOpTyp::OpenParen { .. } = op.typ {
            return Err(ParseErr::new(ParseErrTyp::ParenMismatch, op.span));
        }
        shunt.out.extend(op.into_output());
    }

    Ok(Program::new(shunt.out))
}

fn expect_operand(prev: Prev, span: Span) -> Result<(), ParseErr> {
    match prev {
        Prev::Operand => Ok(()),
        Prev::Start => Err(ParseErr::new(ParseErrTyp::Empty, span)),
        Prev::Operator(at) => Err(ParseErr::new(ParseErrTyp::MissingOperand, at)),
        Prev::Function(name, at) => Err(ParseErr::new(ParseErrTyp::MissingCall(name), at)),
    }
}
