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

//! Fixed registry of builtin expression functions.
//!
//! Builtins are resolved at compile time by exact, case-sensitive name and
//! carry a typed descriptor (argument kind, arity, evaluation function)
//! instead of being discovered by runtime introspection.

use rs_math3d::Vec2d;

/// Argument shape and evaluation semantics of one builtin.
#[derive(Debug, Clone, Copy)]
pub enum BuiltinKind {
    /// Unary scalar math function over one compiled sub-expression.
    Scalar(fn(f64) -> f64),
    /// Geometric function over a fixed number of point coordinate pairs.
    Points {
        /// Declared parameter count.
        arity: usize,
        /// Evaluates over exactly `arity` coordinate pairs.
        eval: fn(&[Vec2d]) -> f64,
    },
    /// Geometric function over a whole point list (the sole variadic case).
    PointArray {
        /// Minimum accepted point count.
        min_arity: usize,
        /// Evaluates over the full coordinate list.
        eval: fn(&[Vec2d]) -> f64,
    },
}

/// One compiler-known function callable from the expression language.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// Call name, matched exactly.
    pub name: &'static str,
    /// Argument kind and evaluation semantics.
    pub kind: BuiltinKind,
}

/// The full builtin table in registration order.
pub fn all() -> &'static [Builtin] {
    TABLE
}

/// Resolves a callee name to its builtin descriptor (exact, case-sensitive).
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    TABLE.iter().find(|builtin| builtin.name == name)
}

static TABLE: &[Builtin] = &[
    Builtin {
        name: "sin",
        kind: BuiltinKind::Scalar(scalar_sin),
    },
    Builtin {
        name: "cos",
        kind: BuiltinKind::Scalar(scalar_cos),
    },
    Builtin {
        name: "tan",
        kind: BuiltinKind::Scalar(scalar_tan),
    },
    Builtin {
        name: "asin",
        kind: BuiltinKind::Scalar(scalar_asin),
    },
    Builtin {
        name: "acos",
        kind: BuiltinKind::Scalar(scalar_acos),
    },
    Builtin {
        name: "atan",
        kind: BuiltinKind::Scalar(scalar_atan),
    },
    Builtin {
        name: "sqrt",
        kind: BuiltinKind::Scalar(scalar_sqrt),
    },
    Builtin {
        name: "abs",
        kind: BuiltinKind::Scalar(scalar_abs),
    },
    Builtin {
        name: "ln",
        kind: BuiltinKind::Scalar(scalar_ln),
    },
    Builtin {
        name: "exp",
        kind: BuiltinKind::Scalar(scalar_exp),
    },
    Builtin {
        name: "Distance",
        kind: BuiltinKind::Points {
            arity: 2,
            eval: point_distance,
        },
    },
    Builtin {
        name: "Angle",
        kind: BuiltinKind::Points {
            arity: 3,
            eval: point_angle,
        },
    },
    Builtin {
        name: "Area",
        kind: BuiltinKind::PointArray {
            min_arity: 3,
            eval: point_area,
        },
    },
];

fn scalar_sin(x: f64) -> f64 {
    x.sin()
}

fn scalar_cos(x: f64) -> f64 {
    x.cos()
}

fn scalar_tan(x: f64) -> f64 {
    x.tan()
}

fn scalar_asin(x: f64) -> f64 {
    x.asin()
}

fn scalar_acos(x: f64) -> f64 {
    x.acos()
}

fn scalar_atan(x: f64) -> f64 {
    x.atan()
}

fn scalar_sqrt(x: f64) -> f64 {
    x.sqrt()
}

fn scalar_abs(x: f64) -> f64 {
    x.abs()
}

fn scalar_ln(x: f64) -> f64 {
    x.ln()
}

fn scalar_exp(x: f64) -> f64 {
    x.exp()
}

/// Euclidean distance between two points.
pub(crate) fn point_distance(points: &[Vec2d]) -> f64 {
    let dx = points[1].x - points[0].x;
    let dy = points[1].y - points[0].y;
    (dx * dx + dy * dy).sqrt()
}

/// Angle at the middle point between rays to the outer points, in radians.
fn point_angle(points: &[Vec2d]) -> f64 {
    let ux = points[0].x - points[1].x;
    let uy = points[0].y - points[1].y;
    let vx = points[2].x - points[1].x;
    let vy = points[2].y - points[1].y;
    let cross = ux * vy - uy * vx;
    let dot = ux * vx + uy * vy;
    // atan2 keeps the result stable near 0 and pi; magnitude only.
    cross.abs().atan2(dot)
}

/// Polygon area over the point list via the shoelace formula.
fn point_area(points: &[Vec2d]) -> f64 {
    let mut doubled = 0.0;
    for (index, current) in points.iter().enumerate() {
        let next = &points[(index + 1) % points.len()];
        doubled += current.x * next.y - next.x * current.y;
    }
    doubled.abs() / 2.0
}
