//! Expression parsing and evaluation.
//!
//! The plotter treats this module as a black box with two calls:
//! [`parse`] turns source text into a [`CompiledExpr`], and
//! [`CompiledExpr::eval`] runs it for one value of `x`.
//!
//! # Syntax
//!
//! Infix notation over the single variable `x`: numbers, `+ - * / ^`,
//! parentheses, the constants `pi`, `tau` and `e`, and calls such as
//! `sin(x)` or `log(x, 2)`. Juxtaposition multiplies, so `2x^2 + 1`,
//! `3(x - 1)` and `x sin(x)` all work.
//!
//! ```
//! let f = funcplot::expr::parse("2x^2 + 1").unwrap();
//! assert_eq!(f.eval(2.0), Ok(9.0));
//! ```

pub mod eval;
pub mod lex;
pub mod parse;
pub mod stdlib;

use std::fmt;

pub use eval::{EvalError, Program};
pub use lex::{Lexer, Span};
pub use parse::{ParseErr, ParseErrTyp};

/// A parsed expression, ready to evaluate many times.
#[derive(Clone, Debug)]
pub struct CompiledExpr {
    source: String,
    program: Program,
}

impl CompiledExpr {
    /// Source text this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The postfix program.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Evaluate at `x`.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        let mut stack = Vec::with_capacity(self.program.len());
        self.eval_with(x, &mut stack)
    }

    /// Evaluate at `x`, reusing `stack` across calls.
    pub fn eval_with(&self, x: f64, stack: &mut Vec<f64>) -> Result<f64, EvalError> {
        eval::eval(&self.program, x, stack)
    }
}

impl fmt::Display for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Compile `src`.
pub fn parse(src: &str) -> Result<CompiledExpr, ParseErr> {
    let program = parse::parse(src, Lexer::new(src))?;
    Ok(CompiledExpr {
        source: src.to_string(),
        program,
    })
}
