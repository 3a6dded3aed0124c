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

//! Expression compiler for dynamic geometry models.
//!
//! This crate turns a parsed syntax tree of an algebraic/geometric expression
//! language into a directly executable numeric function, resolving
//! identifiers against a live, mutable model of named figures (points and
//! derived shapes).
//!
//! It provides:
//! - Recursive translation from [`SyntaxNode`] trees to evaluable [`Exp`]
//!   trees ([`ExpressionCompiler`]).
//! - A greedy two-point shorthand: an identifier like `AB` that partitions
//!   exactly into two known point names compiles to their Euclidean distance.
//! - Arity- and kind-checked resolution of builtin calls, including the
//!   variadic `Area` over a point list.
//! - Structured per-compile diagnostics and a deduplicated, insertion-ordered
//!   dependency set ([`CompileStatus`]) for downstream cycle/staleness
//!   bookkeeping.
//!
//! # Pipeline
//!
//! 1. An upstream grammar parses source text into a [`SyntaxNode`] tree.
//! 2. [`ExpressionCompiler::set_context`] binds the figure registry and the
//!    caller's figure-use policy for this compilation.
//! 3. [`ExpressionCompiler::compile_constant`] or
//!    [`ExpressionCompiler::compile_function`] translates the tree; failures
//!    are recorded in the [`CompileStatus`] and yield `None`.
//! 4. The compiled expression reads figure state late-bound, so it can be
//!    re-evaluated every frame while figures move.
//!
//! # Example
//!
//! ```
//! use geometry_expressions::{
//!     BasicDrawing, CompileStatus, ExpressionCompiler, FreePoint, SyntaxNode,
//! };
//! use std::rc::Rc;
//!
//! let a = FreePoint::new("A", 0.0, 0.0);
//! let b = FreePoint::new("B", 3.0, 4.0);
//! let mut drawing = BasicDrawing::new();
//! drawing.add(a.clone());
//! drawing.add(b);
//!
//! let mut compiler = ExpressionCompiler::new();
//! compiler.set_context(Rc::new(drawing), |_| true);
//!
//! let mut status = CompileStatus::new();
//! let distance = compiler
//!     .compile_constant(&SyntaxNode::identifier("AB"), &mut status)
//!     .expect("both point names are known");
//! assert_eq!(distance.evaluate(), 5.0);
//!
//! a.move_to(0.0, 4.0);
//! assert_eq!(distance.evaluate(), 3.0);
//! ```

mod ast;
pub mod builtins;
mod compiler;
mod diagnostics;
mod expr;
mod model;

#[cfg(test)]
mod tests;

pub use ast::{SyntaxKind, SyntaxNode};
pub use compiler::ExpressionCompiler;
pub use diagnostics::{CompileStatus, Diagnostic};
pub use expr::{CompiledConstant, CompiledFunction, Exp};
pub use model::{BasicDrawing, Drawing, Figure, FigureRef, FreePoint, same_figure};
