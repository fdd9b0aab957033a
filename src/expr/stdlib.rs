//! Built-in names: the variable, constants and functions.

use super::eval::Fun;
use core::f64::consts;

/// The free variable.
pub const X: &str = "x";

/// What a name refers to.
#[derive(Clone, Copy, Debug)]
pub enum Ident {
    /// The plotted variable.
    Var,
    /// Fixed value.
    Const(f64),
    /// Callable taking its arguments in parentheses.
    Fun(Fun),
}

const IDENTS: &[(&str, Ident)] = &[
    (X, Ident::Var),
    ("pi", Ident::Const(consts::PI)),
    ("tau", Ident::Const(consts::TAU)),
    ("e", Ident::Const(consts::E)),
    ("abs", Ident::Fun(Fun::Unary(f64::abs))),
    ("sqrt", Ident::Fun(Fun::Unary(f64::sqrt))),
    ("exp", Ident::Fun(Fun::Unary(f64::exp))),
    ("ln", Ident::Fun(Fun::Unary(f64::ln))),
    ("log", Ident::Fun(Fun::Binary(f64::log))),
    // trig
    ("sin", Ident::Fun(Fun::Unary(f64::sin))),
    ("cos", Ident::Fun(Fun::Unary(f64::cos))),
    ("tan", Ident::Fun(Fun::Unary(f64::tan))),
    ("asin", Ident::Fun(Fun::Unary(f64::asin))),
    ("acos", Ident::Fun(Fun::Unary(f64::acos))),
    ("atan", Ident::Fun(Fun::Unary(f64::atan))),
    ("arcsin", Ident::Fun(Fun::Unary(f64::asin))),
    ("arccos", Ident::Fun(Fun::Unary(f64::acos))),
    ("arctan", Ident::Fun(Fun::Unary(f64::atan))),
];

/// Resolve a name, returning its canonical spelling too.
pub fn lookup(name: &str) -> Option<(&'static str, Ident)> {
    IDENTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|&(key, ident)| (key, ident))
}

/// All known names, for help text and suggestions.
pub fn names() -> impl Iterator<Item = &'static str> {
    IDENTS.iter().map(|(key, _)| *key)
}

pub(crate) fn neg(x: f64) -> f64 {
    -x
}

pub(crate) fn add(x: f64, y: f64) -> f64 {
    x + y
}

pub(crate) fn sub(x: f64, y: f64) -> f64 {
    x - y
}

pub(crate) fn mul(x: f64, y: f64) -> f64 {
    x * y
}

pub(crate) fn div(x: f64, y: f64) -> f64 {
    x / y
}

pub(crate) fn pow(x: f64, exp: f64) -> f64 {
    x.powf(exp)
}
