//! Compiled expression programs and the stack machine that runs them.

use super::{lex::Span, stdlib};
use core::fmt;
use thiserror::Error;

/// Infix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorTyp {
    /// Unary minus.
    Neg,
    /// `+`
    Add,
    /// Binary `-`.
    Sub,
    /// `*`, also inserted for implicit multiplication.
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
}

/// Operator associativity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// Groups left to right.
    Left,
    /// Groups right to left.
    Right,
}

impl OperatorTyp {
    /// Binding strength; higher binds tighter.
    pub const fn precedence(&self) -> i8 {
        match self {
            Self::Add => 2,
            Self::Sub => 2,
            Self::Mul => 3,
            Self::Div => 3,
            Self::Neg => 4,
            Self::Exp => 5,
        }
    }

    /// Grouping direction for operators of equal precedence.
    pub const fn associativity(&self) -> Associativity {
        use Associativity::{Left, Right};
        match self {
            Self::Neg => Left,
            Self::Add => Left,
            Self::Sub => Left,
            Self::Mul => Left,
            Self::Div => Left,
            Self::Exp => Right,
        }
    }

    /// Name and implementation.
    pub fn fun(&self) -> (&'static str, Fun) {
        match self {
            Self::Neg => ("neg", Fun::Unary(stdlib::neg)),
            Self::Add => ("add", Fun::Binary(stdlib::add)),
            Self::Sub => ("sub", Fun::Binary(stdlib::sub)),
            Self::Mul => ("mul", Fun::Binary(stdlib::mul)),
            Self::Div => ("div", Fun::Binary(stdlib::div)),
            Self::Exp => ("pow", Fun::Binary(stdlib::pow)),
        }
    }
}

/// A callable built-in.
#[derive(Clone, Copy, Debug)]
pub enum Fun {
    /// One argument.
    Unary(fn(f64) -> f64),
    /// Two arguments, in source order.
    Binary(fn(f64, f64) -> f64),
}

impl Fun {
    /// Number of arguments taken from the stack.
    pub const fn arity(&self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

/// One step of a compiled program.
#[derive(Clone, Copy, Debug)]
pub enum OperationTyp {
    /// Push a literal or constant.
    Val(f64),
    /// Push the current value of `x`.
    Var,
    /// Pop arguments, push the result.
    Call(Fun),
}

/// A program step with the source text that produced it.
#[derive(Clone, Debug)]
pub struct Operation {
    /// What to do.
    pub typ: OperationTyp,
    /// Name used in diagnostics.
    pub name: &'static str,
    /// Where in the source it came from.
    pub span: Span,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.typ {
            OperationTyp::Val(val) => write!(f, "push {val}"),
            OperationTyp::Var => write!(f, "load {}", self.name),
            OperationTyp::Call(_) => write!(f, "call '{}'", self.name),
        }
    }
}

/// Errors raised while running a program for one value of `x`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// Result was NaN or infinite, e.g. division by zero or `ln` of a negative.
    #[error("result is not a finite number at x = {x}")]
    NonFinite {
        /// Input that produced it.
        x: f64,
        /// The offending value.
        value: f64,
    },

    /// A call found too few values on the stack.
    #[error("function '{name}' requires {arity} argument(s), but found {found}")]
    MissingArgs {
        /// Function name.
        name: &'static str,
        /// Arguments it takes.
        arity: usize,
        /// Values available.
        found: usize,
    },

    /// Program did not leave exactly one value.
    #[error("expected {expected} value on the stack but found {found}")]
    StackMismatch {
        /// Always 1.
        expected: usize,
        /// Values left over.
        found: usize,
    },
}

/// A compiled program in postfix order.
#[derive(Clone, Debug, Default)]
pub struct Program {
    ops: Vec<Operation>,
}

impl Program {
    /// Wrap a postfix operation list.
    pub const fn new(ops: Vec<Operation>) -> Self {
        Self { ops }
    }

    /// Iterate over the operations.
    pub fn ops(&self) -> core::slice::Iter<'_, Operation> {
        self.ops.iter()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Run `prog` with `x` bound, using `stack` as scratch space.
pub fn eval(prog: &Program, x: f64, stack: &mut Vec<f64>) -> Result<f64, EvalError> {
    stack.clear();

    for op in prog.ops() {
        match op.typ {
            OperationTyp::Val(val) => stack.push(val),
            OperationTyp::Var => stack.push(x),
            OperationTyp::Call(fun) => {
                let found = stack.len();
                if found < fun.arity() {
                    return Err(EvalError::MissingArgs {
                        name: op.name,
                        arity: fun.arity(),
                        found,
                    });
                }
                // stack: ...a, b
                //           ^^^^ args if arity is 2
                let val = match fun {
                    Fun::Unary(f) => {
                        let a = stack[found - 1];
                        stack.truncate(found - 1);
                        f(a)
                    }
                    Fun::Binary(f) => {
                        let (a, b) = (stack[found - 2], stack[found - 1]);
                        stack.truncate(found - 2);
                        f(a, b)
                    }
                };
                stack.push(val);
            }
        }
    }

    match stack.as_slice() {
        [value] if value.is_finite() => Ok(*value),
        [value] => Err(EvalError::NonFinite { x, value: *value }),
        _ => Err(EvalError::StackMismatch {
            expected: 1,
            found: stack.len(),
        }),
    }
}
