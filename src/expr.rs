/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Executable expression trees produced by compilation.
//!
//! Figure-reading nodes hold [`FigureRef`] handles and read the figure's
//! *current* value on every evaluation. A compiled expression therefore stays
//! valid across animation frames: move a point, evaluate again, observe the
//! new value.

use crate::builtins::point_distance;
use crate::model::FigureRef;
use rs_math3d::Vec2d;
use std::fmt;

/// Tagged evaluation node.
#[derive(Clone)]
pub enum Exp {
    /// Constant value.
    Val(f64),
    /// The bound function parameter (`x`).
    Param,
    /// Negation.
    Neg(Box<Exp>),
    /// Addition.
    Add(Box<Exp>, Box<Exp>),
    /// Subtraction.
    Sub(Box<Exp>, Box<Exp>),
    /// Multiplication.
    Mul(Box<Exp>, Box<Exp>),
    /// Division.
    Div(Box<Exp>, Box<Exp>),
    /// Exponentiation.
    Pow(Box<Exp>, Box<Exp>),
    /// Late-bound read of a named figure property.
    Property {
        /// Figure to read from.
        figure: FigureRef,
        /// Property name; existence was verified at compile time.
        property: String,
    },
    /// Late-bound Euclidean distance between two points.
    Distance(FigureRef, FigureRef),
    /// Unary scalar builtin applied to a compiled sub-expression.
    Scalar {
        /// Builtin name, kept for debug rendering.
        name: &'static str,
        /// Evaluation function from the builtin registry.
        f: fn(f64) -> f64,
        /// Compiled argument.
        arg: Box<Exp>,
    },
    /// Point-geometry builtin over resolved point figures.
    Points {
        /// Builtin name, kept for debug rendering.
        name: &'static str,
        /// Evaluation function from the builtin registry.
        eval: fn(&[Vec2d]) -> f64,
        /// Resolved point figures, in argument order.
        points: Vec<FigureRef>,
    },
}

impl Exp {
    /// Creates a constant node.
    pub fn val(value: f64) -> Self {
        Exp::Val(value)
    }

    /// Creates a negation node.
    pub fn neg(operand: Exp) -> Self {
        Exp::Neg(Box::new(operand))
    }

    /// Creates an addition node.
    pub fn add(left: Exp, right: Exp) -> Self {
        Exp::Add(Box::new(left), Box::new(right))
    }

    /// Creates a subtraction node.
    pub fn sub(left: Exp, right: Exp) -> Self {
        Exp::Sub(Box::new(left), Box::new(right))
    }

    /// Creates a multiplication node.
    pub fn mul(left: Exp, right: Exp) -> Self {
        Exp::Mul(Box::new(left), Box::new(right))
    }

    /// Creates a division node.
    pub fn div(left: Exp, right: Exp) -> Self {
        Exp::Div(Box::new(left), Box::new(right))
    }

    /// Creates an exponentiation node.
    pub fn pow(left: Exp, right: Exp) -> Self {
        Exp::Pow(Box::new(left), Box::new(right))
    }

    /// Evaluates the tree with `x` bound to the function parameter.
    ///
    /// Figure reads resolve against the figures' current state. A figure that
    /// lost a compile-time-verified property or its point coordinates yields
    /// `NaN` rather than a fault.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Exp::Val(value) => *value,
            Exp::Param => x,
            Exp::Neg(operand) => -operand.eval(x),
            Exp::Add(left, right) => left.eval(x) + right.eval(x),
            Exp::Sub(left, right) => left.eval(x) - right.eval(x),
            Exp::Mul(left, right) => left.eval(x) * right.eval(x),
            Exp::Div(left, right) => left.eval(x) / right.eval(x),
            Exp::Pow(left, right) => left.eval(x).powf(right.eval(x)),
            Exp::Property { figure, property } => {
                figure.property(property).unwrap_or(f64::NAN)
            }
            Exp::Distance(a, b) => match (a.coordinates(), b.coordinates()) {
                (Some(a), Some(b)) => point_distance(&[a, b]),
                _ => f64::NAN,
            },
            Exp::Scalar { f, arg, .. } => f(arg.eval(x)),
            Exp::Points { eval, points, .. } => {
                let mut coordinates = Vec::with_capacity(points.len());
                for point in points {
                    let Some(position) = point.coordinates() else {
                        return f64::NAN;
                    };
                    coordinates.push(position);
                }
                eval(&coordinates)
            }
        }
    }
}

impl fmt::Debug for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exp::Val(value) => write!(f, "{value}"),
            Exp::Param => write!(f, "x"),
            Exp::Neg(operand) => write!(f, "(neg {operand:?})"),
            Exp::Add(left, right) => write!(f, "(+ {left:?} {right:?})"),
            Exp::Sub(left, right) => write!(f, "(- {left:?} {right:?})"),
            Exp::Mul(left, right) => write!(f, "(* {left:?} {right:?})"),
            Exp::Div(left, right) => write!(f, "(/ {left:?} {right:?})"),
            Exp::Pow(left, right) => write!(f, "(^ {left:?} {right:?})"),
            Exp::Property { figure, property } => {
                write!(f, "(prop {} {property})", figure.name())
            }
            Exp::Distance(a, b) => write!(f, "(dist {} {})", a.name(), b.name()),
            Exp::Scalar { name, arg, .. } => write!(f, "({name} {arg:?})"),
            Exp::Points { name, points, .. } => {
                write!(f, "({name}")?;
                for point in points {
                    write!(f, " {}", point.name())?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A compiled zero-argument real-valued expression.
#[derive(Debug, Clone)]
pub struct CompiledConstant {
    root: Exp,
}

impl CompiledConstant {
    pub(crate) fn new(root: Exp) -> Self {
        Self { root }
    }

    /// Evaluates the expression against the figures' current state.
    pub fn evaluate(&self) -> f64 {
        // No parameter was bound during compilation, so `Param` cannot occur.
        self.root.eval(f64::NAN)
    }

    /// Returns the underlying evaluation tree.
    pub fn expression(&self) -> &Exp {
        &self.root
    }
}

/// A compiled one-argument real-valued function over the bound parameter.
#[derive(Debug, Clone)]
pub struct CompiledFunction {
    root: Exp,
}

impl CompiledFunction {
    pub(crate) fn new(root: Exp) -> Self {
        Self { root }
    }

    /// Evaluates the function at `x` against the figures' current state.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.root.eval(x)
    }

    /// Returns the underlying evaluation tree.
    pub fn expression(&self) -> &Exp {
        &self.root
    }
}
